// ============================================================================
// MOUNTED SLOT - Instancia única de la pantalla montada
// ============================================================================
// Los callbacks asíncronos (GPS, fetch, timers) la buscan aquí; si ya se
// desmontó, el callback se descarta.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

pub struct MountedSlot<T> {
    current: RefCell<Option<Rc<T>>>,
}

impl<T> Default for MountedSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MountedSlot<T> {
    pub const fn new() -> Self {
        Self {
            current: RefCell::new(None),
        }
    }

    pub fn set(&self, value: T) {
        *self.current.borrow_mut() = Some(Rc::new(value));
    }

    pub fn take(&self) -> Option<Rc<T>> {
        self.current.borrow_mut().take()
    }

    /// Ejecuta `f` con la instancia montada. El slot no queda prestado
    /// durante `f`, así que `f` puede llamar a `take`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let current = self.current.borrow().clone();
        current.map(|value| f(&value))
    }
}
