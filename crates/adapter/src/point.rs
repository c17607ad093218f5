use std::iter::FusedIterator;

#[cfg(feature = "serde")]
use serde::Deserialize;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::adapter::PointAdapter;

/// The coordinates of a single drawable point.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// The x coordinate.
    pub x: f32,
    /// The y coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a point from its coordinates.
    pub fn new(x: f32, y: f32) -> Point {
        Self { x, y }
    }
}

/// An iterator over the points of a [`PointAdapter`].
///
/// The number of points is read once, when the iterator is created. Each
/// point is read through [`PointAdapter::x`] and [`PointAdapter::y`] as the
/// iterator advances.
///
/// This `struct` is created by the
/// [`PointAdapterExt::points`](crate::PointAdapterExt::points) method.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug)]
pub struct Points<'a, A: ?Sized> {
    adapter: &'a A,
    index: usize,
    count: usize,
}

impl<'a, A> Points<'a, A>
where
    A: PointAdapter + ?Sized,
{
    pub(crate) fn new(adapter: &'a A) -> Points<'a, A> {
        Points {
            adapter,
            index: 0,
            count: adapter.count(),
        }
    }
}

impl<A> Iterator for Points<'_, A>
where
    A: PointAdapter + ?Sized,
{
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }

        let index = self.index;
        self.index += 1;

        Some(Point::new(self.adapter.x(index), self.adapter.y(index)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<A> ExactSizeIterator for Points<'_, A> where A: PointAdapter + ?Sized {}

impl<A> FusedIterator for Points<'_, A> where A: PointAdapter + ?Sized {}
