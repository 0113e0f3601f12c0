// ============================================================================
// AUTH STATE - Estado de autenticación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Estado de autenticación.
/// La persistencia de tokens vive en utils::storage; aquí solo el snapshot
/// que consumen las vistas: {is_authenticated, is_loading}.
#[derive(Clone)]
pub struct AuthState {
    pub is_authenticated: Rc<RefCell<bool>>,
    pub is_loading: Rc<RefCell<bool>>,
}

impl AuthState {
    /// Arranca en loading hasta que se lea el token persistido
    pub fn new() -> Self {
        Self {
            is_authenticated: Rc::new(RefCell::new(false)),
            is_loading: Rc::new(RefCell::new(true)),
        }
    }

    pub fn set_authenticated(&self, authenticated: bool) {
        *self.is_authenticated.borrow_mut() = authenticated;
    }

    pub fn get_authenticated(&self) -> bool {
        *self.is_authenticated.borrow()
    }

    pub fn set_loading(&self, loading: bool) {
        *self.is_loading.borrow_mut() = loading;
    }

    pub fn get_loading(&self) -> bool {
        *self.is_loading.borrow()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_anonymous_and_loading() {
        let state = AuthState::new();
        assert!(!state.get_authenticated());
        assert!(state.get_loading());
    }

    #[test]
    fn test_set_authenticated_idempotent() {
        let state = AuthState::new();
        state.set_authenticated(false);
        state.set_authenticated(false);
        assert!(!state.get_authenticated());

        state.set_authenticated(true);
        assert!(state.get_authenticated());
    }
}
