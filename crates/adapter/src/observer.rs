/// Receives notifications about changes to the data set of a
/// [`PointAdapter`](crate::PointAdapter).
///
/// A rendering view registers itself as an observer and re-reads every point
/// through the adapter when it is notified. Both callbacks do nothing by
/// default.
pub trait DataSetObserver {
    /// Called when the data set has changed and any view reflecting it
    /// should refresh itself.
    fn on_changed(&self) {}

    /// Called when the data set is no longer valid or available.
    fn on_invalidated(&self) {}
}
