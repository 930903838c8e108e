use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Cell behind an internally owned value, such as an uncontrolled navbar's
/// `expanded` flag or the id an [`InputRef`](crate::widgets::InputRef) learned.
///
/// Clones share one slot. A handler captured during a render writes through
/// its clone, and the owning component reads the value back on its next
/// render. Every write marks the slot changed until the owner calls
/// [`clear_dirty`](Self::clear_dirty).
///
/// A writer that panicked while holding the lock does not make the slot
/// unusable: reads and writes both go through the poisoned guard, so a
/// proposed value is never dropped.
///
/// ```
/// use navkit::State;
///
/// let expanded = State::new(false);
/// let from_handler = expanded.clone();
/// from_handler.set(true);
///
/// assert!(expanded.get());
/// assert!(expanded.is_dirty());
/// ```
#[derive(Debug)]
pub struct State<T> {
    slot: Arc<Slot<T>>,
}

#[derive(Debug)]
struct Slot<T> {
    value: RwLock<T>,
    changed: AtomicBool,
}

impl<T> State<T> {
    pub fn new(value: T) -> Self {
        Self {
            slot: Arc::new(Slot {
                value: RwLock::new(value),
                changed: AtomicBool::new(false),
            }),
        }
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        let guard = self
            .slot
            .value
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.clone()
    }

    /// Store a value and mark the slot changed.
    pub fn set(&self, value: T) {
        let mut guard = self
            .slot
            .value
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = value;
        self.slot.changed.store(true, Ordering::Release);
    }

    /// Whether a write happened since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.slot.changed.load(Ordering::Acquire)
    }

    pub fn clear_dirty(&self) {
        self.slot.changed.store(false, Ordering::Release);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::thread;

    fn poison<T: Send + Sync + 'static>(state: &State<T>) {
        let slot = Arc::clone(&state.slot);
        let result = thread::spawn(move || {
            let _guard = slot.value.write().unwrap();
            panic!("writer panicked while holding the lock");
        })
        .join();
        assert!(result.is_err());
        assert!(state.slot.value.is_poisoned());
    }

    #[test]
    fn test_clones_share_value_and_flag() {
        let state = State::new(1);
        let other = state.clone();

        other.set(2);
        assert_eq!(state.get(), 2);
        assert!(state.is_dirty());

        state.clear_dirty();
        assert!(!other.is_dirty());
    }

    #[test]
    fn test_set_after_poisoning_is_not_lost() {
        let state = State::new(false);
        poison(&state);

        state.set(true);

        assert!(state.get());
        assert!(state.is_dirty());
    }

    #[test]
    fn test_get_after_poisoning_reads_last_value() {
        let state = State::new(Some("toggle-input-0".to_string()));
        poison(&state);

        assert_eq!(state.get().as_deref(), Some("toggle-input-0"));
    }
}
