// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{AuthState, ReservationState};

/// Pantallas de la aplicación (enrutamiento en memoria)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    Seats,
    ReservationConfirm,
    Profile,
}

impl Route {
    /// Pantallas que requieren sesión iniciada
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::ReservationConfirm | Route::Profile)
    }
}

/// Estado global: sesión, flujo de reserva y pantalla actual.
/// Se inyecta explícitamente en las vistas al arrancar; no hay singletons
/// implícitos.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub reservation: ReservationState,
    pub route: Rc<RefCell<Route>>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            auth: AuthState::new(),
            reservation: ReservationState::new(),
            route: Rc::new(RefCell::new(Route::Home)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn get_route(&self) -> Route {
        *self.route.borrow()
    }

    /// Cambiar de pantalla. Salir del flujo de reserva (grilla/confirmación)
    /// descarta la selección en curso.
    pub fn navigate(&self, route: Route) {
        if !matches!(route, Route::Seats | Route::ReservationConfirm) {
            self.reservation.clear();
        }
        *self.route.borrow_mut() = route;
        self.notify_subscribers();
    }

    /// Suscribirse a cambios de estado (re-render automático)
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers de cambios
    pub fn notify_subscribers(&self) {
        for callback in self.change_subscribers.borrow().iter() {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_routes() {
        assert!(Route::ReservationConfirm.requires_auth());
        assert!(Route::Profile.requires_auth());
        assert!(!Route::Home.requires_auth());
        assert!(!Route::Login.requires_auth());
        assert!(!Route::Signup.requires_auth());
        assert!(!Route::Seats.requires_auth());
    }

    #[test]
    fn test_navigate_away_clears_selection() {
        let state = AppState::new();
        state.reservation.toggle_seat(5, false);

        // Moverse dentro del flujo de reserva conserva la selección
        state.navigate(Route::ReservationConfirm);
        assert_eq!(state.reservation.get_selected_seat(), Some(5));
        state.navigate(Route::Seats);
        assert_eq!(state.reservation.get_selected_seat(), Some(5));

        // Salir del flujo la descarta
        state.navigate(Route::Home);
        assert_eq!(state.reservation.get_selected_seat(), None);
    }

    #[test]
    fn test_subscribers_notified_on_navigate() {
        let state = AppState::new();
        let count = Rc::new(RefCell::new(0));
        let count_clone = count.clone();
        state.subscribe_to_changes(move || {
            *count_clone.borrow_mut() += 1;
        });

        state.navigate(Route::Seats);
        state.navigate(Route::Login);
        assert_eq!(*count.borrow(), 2);
    }
}
