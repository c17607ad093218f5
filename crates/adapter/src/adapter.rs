use std::rc::Rc;

use crate::error::Result;
use crate::observable::DataSetObservable;
use crate::observer::DataSetObserver;
use crate::point::Points;

/// Supplies the points of a sparkline chart.
///
/// The default implementation distributes the points evenly along the x axis
/// and does not draw a baseline. Implementors provide the number of points,
/// the y value and the backing item of each point, and the
/// [`DataSetObservable`] that tracks the observers of the adapter.
///
/// The notification and registration operations are provided for every
/// adapter by [`PointAdapterExt`].
pub trait PointAdapter {
    /// The domain object backing each point.
    type Item;

    /// Returns the number of points to be drawn.
    fn count(&self) -> usize;

    /// Returns the object backing the point at `index`.
    fn item(&self, index: usize) -> Self::Item;

    /// Returns the x value of the point at `index`.
    fn x(&self, index: usize) -> f32 {
        index as f32
    }

    /// Returns the y value of the point at `index`.
    fn y(&self, index: usize) -> f32;

    /// Returns `true` to draw a baseline, a horizontal line across the chart
    /// that the rest of the points are compared against.
    fn has_baseline(&self) -> bool {
        false
    }

    /// Returns the y value of the baseline. Only meaningful when
    /// [`PointAdapter::has_baseline`] returns `true`.
    fn baseline(&self) -> f32 {
        0.0
    }

    /// Returns the registry of observers listening to this adapter.
    fn observable(&self) -> &DataSetObservable;
}

/// Notification, registration and iteration operations available on every
/// [`PointAdapter`].
pub trait PointAdapterExt: PointAdapter {
    /// Notifies the registered observers that the data has changed and any
    /// view reflecting it should refresh itself.
    #[inline]
    fn notify_data_set_changed(&self) {
        self.observable().notify_changed();
    }

    /// Notifies the registered observers that the data is no longer valid or
    /// available. Once invoked the adapter should not report further changes.
    #[inline]
    fn notify_data_set_invalidated(&self) {
        self.observable().notify_invalidated();
    }

    /// Registers `observer` to listen for updates to the adapter's data.
    #[inline]
    fn register_data_set_observer(&self, observer: Rc<dyn DataSetObserver>) -> Result<()> {
        self.observable().register_observer(observer)
    }

    /// Unregisters `observer` from updates to the adapter's data.
    #[inline]
    fn unregister_data_set_observer<O>(&self, observer: &Rc<O>) -> Result<()>
    where
        O: DataSetObserver + ?Sized,
    {
        self.observable().unregister_observer(observer)
    }

    /// Returns an iterator over every point of the adapter.
    #[inline]
    fn points(&self) -> Points<'_, Self> {
        Points::new(self)
    }
}

impl<A: PointAdapter + ?Sized> PointAdapterExt for A {}
