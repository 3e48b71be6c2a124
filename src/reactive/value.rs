//! Shared, observable value cell.
//!
//! A `ReactiveValue` is a cheap handle (`Rc<RefCell<..>>`) so the same value can
//! be read by the model that owns it and by every derived tool that watches it.
//! Observers are called after the internal borrow is released, which lets an
//! observer read or even write the value it is watching.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Callback invoked with `(new, old)` after a value changes.
pub type Observer<T> = Rc<dyn Fn(&T, &T)>;

/// Handle returned by `subscribe`, used to detach exactly that observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

struct Inner<T> {
    value: T,
    initial: T,
    observers: Vec<(ObserverId, Observer<T>)>,
    next_id: u64,
}

/// Observable mutable value with reset-to-initial support.
///
/// # Examples
///
/// ```
/// use acid_base_solutions::reactive::ReactiveValue;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let ph = ReactiveValue::new(7.0);
/// let seen = Rc::new(Cell::new(0.0));
///
/// let sink = seen.clone();
/// let id = ph.subscribe(move |new, _old| sink.set(*new));
///
/// ph.set(4.5);
/// assert_eq!(seen.get(), 4.5);
///
/// assert!(ph.unsubscribe(id));
/// ph.set(9.0);
/// assert_eq!(seen.get(), 4.5);
/// ```
pub struct ReactiveValue<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for ReactiveValue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + 'static> ReactiveValue<T> {
    /// Create a value whose reset target is `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value: initial.clone(),
                initial,
                observers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Value restored by [`reset`](Self::reset).
    pub fn initial(&self) -> T {
        self.inner.borrow().initial.clone()
    }

    /// Store `value` and notify observers if it differs from the current one.
    ///
    /// Returns whether a change (and therefore a notification) happened.
    pub fn set(&self, value: T) -> bool {
        let old = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return false;
            }
            std::mem::replace(&mut inner.value, value)
        };
        self.notify_from(&old);
        true
    }

    /// Restore the initial value, notifying if that is a change.
    pub fn reset(&self) -> bool {
        let initial = self.initial();
        self.set(initial)
    }

    /// Register an observer. It is not called until the next change.
    pub fn subscribe<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&T, &T) + 'static,
    {
        self.subscribe_rc(Rc::new(observer))
    }

    /// Register an already shared observer.
    ///
    /// The same `Rc` may be attached to several values; each attachment gets
    /// its own id and is detached independently.
    pub fn subscribe_rc(&self, observer: Observer<T>) -> ObserverId {
        let mut inner = self.inner.borrow_mut();
        let id = ObserverId(inner.next_id);
        inner.next_id += 1;
        inner.observers.push((id, observer));
        id
    }

    /// Register an observer and call it once immediately with `(current, current)`.
    pub fn link<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&T, &T) + 'static,
    {
        let observer: Observer<T> = Rc::new(observer);
        let id = self.subscribe_rc(Rc::clone(&observer));
        let current = self.get();
        observer(&current, &current);
        id
    }

    /// Detach one observer. Returns `false` if the id was not attached.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.observers.len();
        inner.observers.retain(|(attached, _)| *attached != id);
        inner.observers.len() != before
    }

    /// Whether `id` is currently attached.
    pub fn is_subscribed(&self, id: ObserverId) -> bool {
        self.inner
            .borrow()
            .observers
            .iter()
            .any(|(attached, _)| *attached == id)
    }

    /// Number of attached observers.
    pub fn observer_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }

    /// Whether two handles refer to the same underlying value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Store `value` without notifying. Returns the previous value.
    ///
    /// Callers must follow up with [`notify_from`](Self::notify_from) once the
    /// rest of their state is consistent.
    pub(crate) fn replace_quietly(&self, value: T) -> T {
        std::mem::replace(&mut self.inner.borrow_mut().value, value)
    }

    /// Notify every observer that the value changed from `old` to the current value.
    pub(crate) fn notify_from(&self, old: &T) {
        let (current, observers) = {
            let inner = self.inner.borrow();
            let observers: Vec<Observer<T>> = inner
                .observers
                .iter()
                .map(|(_, observer)| Rc::clone(observer))
                .collect();
            (inner.value.clone(), observers)
        };
        log::trace!("notifying {} observer(s)", observers.len());
        for observer in observers {
            observer(&current, old);
        }
    }
}

/// Observe-only view of a [`ReactiveValue`] owned elsewhere.
///
/// Handed to view collaborators so they can watch derived quantities
/// without being able to write them.
pub struct ReadOnlyValue<T> {
    source: ReactiveValue<T>,
}

impl<T> Clone for ReadOnlyValue<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> ReadOnlyValue<T> {
    pub fn get(&self) -> T {
        self.source.get()
    }

    pub fn subscribe<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&T, &T) + 'static,
    {
        self.source.subscribe(observer)
    }

    pub fn subscribe_rc(&self, observer: Observer<T>) -> ObserverId {
        self.source.subscribe_rc(observer)
    }

    pub fn link<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&T, &T) + 'static,
    {
        self.source.link(observer)
    }

    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.source.unsubscribe(id)
    }

    pub fn is_subscribed(&self, id: ObserverId) -> bool {
        self.source.is_subscribed(id)
    }

    pub fn observer_count(&self) -> usize {
        self.source.observer_count()
    }
}

impl<T: Clone + PartialEq + 'static> ReactiveValue<T> {
    /// Observe-only handle to this value.
    pub fn read_only(&self) -> ReadOnlyValue<T> {
        ReadOnlyValue {
            source: self.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ReadOnlyValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.source, f)
    }
}

impl<T: fmt::Debug> fmt::Debug for ReactiveValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ReactiveValue")
            .field("value", &inner.value)
            .field("initial", &inner.initial)
            .field("observers", &inner.observers.len())
            .finish()
    }
}
