//! The write-back slot: caller-owned storage a parsed option value lands in.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A typed storage cell shared between the caller and the registry.
///
/// The caller constructs the slot with the option's default value and keeps a
/// handle; registering the option stores another handle. When the loader
/// coerces a matching `OPTION=value` line, it writes through the registry's
/// handle, and the caller observes the new value via [`Slot::get`]. A failed
/// coercion leaves the slot untouched, so the default survives bad input.
///
/// Handles are reference-counted and single-threaded, which matches the
/// loader's synchronous, load-once model.
///
/// ```rust
/// use optfile::Slot;
///
/// let port = Slot::new(8080_i64);
/// let handle = port.clone();
/// handle.set(9000);
/// assert_eq!(port.get(), 9000);
/// ```
pub struct Slot<T> {
    cell: Rc<RefCell<T>>,
}

impl<T> Slot<T> {
    /// Create a slot holding `initial`, typically the option's default.
    pub fn new(initial: T) -> Self {
        Self {
            cell: Rc::new(RefCell::new(initial)),
        }
    }

    /// Replace the stored value.
    pub fn set(&self, value: T) {
        *self.cell.borrow_mut() = value;
    }
}

impl<T: Clone> Slot<T> {
    /// Read the current value.
    pub fn get(&self) -> T {
        self.cell.borrow().clone()
    }
}

impl<T> Clone for Slot<T> {
    /// Clones the handle, not the value: both slots refer to the same cell.
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Default> Default for Slot<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&*self.cell.borrow()).finish()
    }
}
