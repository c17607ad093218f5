//! [spark]'s data adapter library.
//!
//! [spark]: https://github.com/nelusnegur/spark
//!
//! A [`PointAdapter`] supplies the points of a sparkline chart. A rendering
//! view registers itself as a [`DataSetObserver`] and re-reads the points when
//! the adapter notifies it that the data has changed.
//!
//! ```
//! use std::rc::Rc;
//!
//! use spark_adapter::DataSetObservable;
//! use spark_adapter::DataSetObserver;
//! use spark_adapter::PointAdapter;
//! use spark_adapter::PointAdapterExt;
//!
//! struct Prices {
//!     values: Vec<f32>,
//!     observable: DataSetObservable,
//! }
//!
//! impl PointAdapter for Prices {
//!     type Item = f32;
//!
//!     fn count(&self) -> usize {
//!         self.values.len()
//!     }
//!
//!     fn item(&self, index: usize) -> f32 {
//!         self.values[index]
//!     }
//!
//!     fn y(&self, index: usize) -> f32 {
//!         self.values[index]
//!     }
//!
//!     fn observable(&self) -> &DataSetObservable {
//!         &self.observable
//!     }
//! }
//!
//! struct View;
//!
//! impl DataSetObserver for View {
//!     fn on_changed(&self) {}
//! }
//!
//! let prices = Prices {
//!     values: vec![1.0, 3.0, 2.0],
//!     observable: DataSetObservable::new(),
//! };
//! let view = Rc::new(View);
//!
//! prices.register_data_set_observer(view.clone())?;
//! prices.notify_data_set_changed();
//!
//! let xs: Vec<f32> = prices.points().map(|p| p.x).collect();
//! assert_eq!(xs, vec![0.0, 1.0, 2.0]);
//!
//! prices.unregister_data_set_observer(&view)?;
//! # Ok::<(), spark_adapter::error::ObserverError>(())
//! ```

#![warn(missing_docs)]

pub(crate) mod adapter;
pub(crate) mod observable;
pub(crate) mod observer;
pub(crate) mod point;

pub mod error;

pub use crate::adapter::PointAdapter;
pub use crate::adapter::PointAdapterExt;
pub use crate::observable::DataSetObservable;
pub use crate::observer::DataSetObserver;
pub use crate::point::Point;
pub use crate::point::Points;
