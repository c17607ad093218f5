use std::cell::Cell;
use std::cell::RefCell;
use std::fmt;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::ptr;
use std::rc::Rc;

use tracing::trace;
use tracing::warn;

use crate::error::ObserverError;
use crate::error::Result;
use crate::observer::DataSetObserver;

/// A registry of [`DataSetObserver`]s that forwards data set notifications
/// to every registered observer.
///
/// Observers are identified by their `Rc` allocation, so two observers that
/// compare equal by value are still distinct registrations.
///
/// Every notification iterates a snapshot of the registry taken before the
/// first callback runs. Observers may register or unregister observers,
/// including themselves, from inside a callback; such changes apply to the
/// next notification. Observers are notified from the most recently
/// registered to the least recently registered.
pub struct DataSetObservable {
    observers: RefCell<Vec<Rc<dyn DataSetObserver>>>,
    invalidated: Cell<bool>,
}

impl DataSetObservable {
    /// Creates an empty registry.
    pub fn new() -> DataSetObservable {
        Self {
            observers: RefCell::new(Vec::new()),
            invalidated: Cell::new(false),
        }
    }

    /// Adds `observer` to the registry.
    ///
    /// Returns [`ObserverError::AlreadyRegistered`] if the same observer
    /// instance is already registered.
    pub fn register_observer(&self, observer: Rc<dyn DataSetObserver>) -> Result<()> {
        let mut observers = self.observers.borrow_mut();

        if observers.iter().any(|o| same_observer(o, &observer)) {
            warn!("attempted to register a data set observer twice");
            return Err(ObserverError::AlreadyRegistered);
        }

        observers.push(observer);
        trace!(observers = observers.len(), "registered data set observer");

        Ok(())
    }

    /// Removes `observer` from the registry.
    ///
    /// Returns [`ObserverError::NotRegistered`] if the observer instance is
    /// not registered.
    pub fn unregister_observer<O>(&self, observer: &Rc<O>) -> Result<()>
    where
        O: DataSetObserver + ?Sized,
    {
        let mut observers = self.observers.borrow_mut();

        let Some(index) = observers.iter().position(|o| same_observer(o, observer)) else {
            warn!("attempted to unregister an unknown data set observer");
            return Err(ObserverError::NotRegistered);
        };

        let removed = observers.remove(index);
        trace!(observers = observers.len(), "unregistered data set observer");

        // An observer's destructor may call back into the registry.
        drop(observers);
        drop(removed);

        Ok(())
    }

    /// Removes every registered observer.
    pub fn unregister_all(&self) {
        let removed = self.observers.take();
        trace!(observers = removed.len(), "unregistered all data set observers");
    }

    /// Invokes [`DataSetObserver::on_changed`] on every registered observer.
    pub fn notify_changed(&self) {
        if self.invalidated.get() {
            warn!("data set changed after it was invalidated");
        }

        let observers = self.snapshot();
        trace!(observers = observers.len(), "notifying data set changed");

        for observer in observers {
            observer.on_changed();
        }
    }

    /// Invokes [`DataSetObserver::on_invalidated`] on every registered
    /// observer.
    ///
    /// Once invoked the data set should not report further changes. The
    /// registry does not enforce this: later change notifications are logged
    /// and still delivered.
    pub fn notify_invalidated(&self) {
        self.invalidated.set(true);

        let observers = self.snapshot();
        trace!(observers = observers.len(), "notifying data set invalidated");

        for observer in observers {
            observer.on_invalidated();
        }
    }

    /// Returns `true` once [`DataSetObservable::notify_invalidated`] has been
    /// called.
    pub fn is_invalidated(&self) -> bool {
        self.invalidated.get()
    }

    /// Returns the number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Returns `true` if no observer is registered.
    pub fn is_empty(&self) -> bool {
        self.observers.borrow().is_empty()
    }

    fn snapshot(&self) -> Vec<Rc<dyn DataSetObserver>> {
        self.observers.borrow().iter().rev().cloned().collect()
    }
}

impl Default for DataSetObservable {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for DataSetObservable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSetObservable")
            .field("observers", &self.len())
            .field("invalidated", &self.invalidated.get())
            .finish()
    }
}

fn same_observer<O>(registered: &Rc<dyn DataSetObserver>, observer: &Rc<O>) -> bool
where
    O: DataSetObserver + ?Sized,
{
    ptr::addr_eq(Rc::as_ptr(registered), Rc::as_ptr(observer))
}
