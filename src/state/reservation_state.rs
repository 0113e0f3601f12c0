// ============================================================================
// RESERVATION STATE - Máquina de estados del flujo de reserva
// ============================================================================
// Browsing → Selected → EnteringAttendeeInfo → AttendeeInfoConfirmed
//   → Submitting → Succeeded | (fallo: vuelve a AttendeeInfoConfirmed)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{AttendeeInfo, ReservationOutcome};

/// Fase actual del flujo de reserva
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkflowPhase {
    Browsing,
    Selected,
    EnteringAttendeeInfo,
    AttendeeInfoConfirmed,
    Submitting,
    Succeeded,
}

/// Estado compartido del flujo de reserva: selección de asiento (0 o 1),
/// datos del asistente y resultado del último submit.
#[derive(Clone)]
pub struct ReservationState {
    pub selected_seat: Rc<RefCell<Option<u8>>>,
    pub attendee: Rc<RefCell<AttendeeInfo>>,
    pub phase: Rc<RefCell<WorkflowPhase>>,
    pub last_outcome: Rc<RefCell<Option<ReservationOutcome>>>,
}

impl ReservationState {
    pub fn new() -> Self {
        Self {
            selected_seat: Rc::new(RefCell::new(None)),
            attendee: Rc::new(RefCell::new(AttendeeInfo::default())),
            phase: Rc::new(RefCell::new(WorkflowPhase::Browsing)),
            last_outcome: Rc::new(RefCell::new(None)),
        }
    }

    pub fn get_phase(&self) -> WorkflowPhase {
        *self.phase.borrow()
    }

    pub fn get_selected_seat(&self) -> Option<u8> {
        *self.selected_seat.borrow()
    }

    pub fn get_attendee(&self) -> AttendeeInfo {
        self.attendee.borrow().clone()
    }

    pub fn get_last_outcome(&self) -> Option<ReservationOutcome> {
        self.last_outcome.borrow().clone()
    }

    /// Click en un asiento de la grilla.
    /// Asiento reservado: no-op. Mismo asiento: deselección (toggle).
    /// Otro asiento disponible: pasa a ser la única selección.
    pub fn toggle_seat(&self, seat_number: u8, is_reserved: bool) {
        if is_reserved {
            return;
        }

        let mut selected = self.selected_seat.borrow_mut();
        if *selected == Some(seat_number) {
            *selected = None;
            *self.phase.borrow_mut() = WorkflowPhase::Browsing;
        } else {
            *selected = Some(seat_number);
            *self.phase.borrow_mut() = WorkflowPhase::Selected;
        }
    }

    /// Entrar a la captura de datos del asistente; sin selección no hay avance
    pub fn begin_attendee_entry(&self) -> bool {
        if self.selected_seat.borrow().is_none() {
            return false;
        }
        *self.phase.borrow_mut() = WorkflowPhase::EnteringAttendeeInfo;
        true
    }

    /// Confirmar datos del asistente: valida antes de avanzar.
    /// Un fallo de validación deja la fase donde está.
    pub fn confirm_attendee_info(&self, info: AttendeeInfo) -> Result<(), String> {
        info.validate()?;
        *self.attendee.borrow_mut() = info;
        *self.phase.borrow_mut() = WorkflowPhase::AttendeeInfoConfirmed;
        Ok(())
    }

    /// Volver a editar los datos ya confirmados
    pub fn edit_attendee_info(&self) {
        *self.phase.borrow_mut() = WorkflowPhase::EnteringAttendeeInfo;
    }

    /// El submit solo procede con los datos confirmados
    pub fn begin_submit(&self) -> bool {
        if *self.phase.borrow() != WorkflowPhase::AttendeeInfoConfirmed {
            return false;
        }
        *self.phase.borrow_mut() = WorkflowPhase::Submitting;
        true
    }

    /// Registrar el resultado del submit.
    /// El fallo vuelve a AttendeeInfoConfirmed: el submit queda re-habilitado
    /// para reintentar o volver a elegir asiento.
    pub fn finish_submit(&self, outcome: ReservationOutcome) {
        let next = match outcome {
            ReservationOutcome::Success(_) => WorkflowPhase::Succeeded,
            ReservationOutcome::Failure(_) => WorkflowPhase::AttendeeInfoConfirmed,
        };
        *self.last_outcome.borrow_mut() = Some(outcome);
        *self.phase.borrow_mut() = next;
    }

    /// Cierre del resumen de éxito: limpia todo y vuelve a la grilla
    pub fn acknowledge_success(&self) {
        self.clear();
    }

    /// Descartar la selección y los datos capturados
    pub fn clear(&self) {
        *self.selected_seat.borrow_mut() = None;
        *self.attendee.borrow_mut() = AttendeeInfo::default();
        *self.phase.borrow_mut() = WorkflowPhase::Browsing;
        *self.last_outcome.borrow_mut() = None;
    }
}

impl Default for ReservationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ApiError;

    fn attendee() -> AttendeeInfo {
        AttendeeInfo {
            name: "홍길동".to_string(),
            phone: "010-1234-5678".to_string(),
            email: String::new(),
        }
    }

    #[test]
    fn test_select_available_seat() {
        let state = ReservationState::new();
        state.toggle_seat(5, false);
        assert_eq!(state.get_selected_seat(), Some(5));
        assert_eq!(state.get_phase(), WorkflowPhase::Selected);
    }

    #[test]
    fn test_reserved_seat_click_is_noop() {
        let state = ReservationState::new();
        state.toggle_seat(3, true);
        assert_eq!(state.get_selected_seat(), None);
        assert_eq!(state.get_phase(), WorkflowPhase::Browsing);

        // Tampoco pisa una selección existente
        state.toggle_seat(5, false);
        state.toggle_seat(3, true);
        assert_eq!(state.get_selected_seat(), Some(5));
    }

    #[test]
    fn test_same_seat_toggles_off() {
        let state = ReservationState::new();
        state.toggle_seat(5, false);
        state.toggle_seat(5, false);
        assert_eq!(state.get_selected_seat(), None);
        assert_eq!(state.get_phase(), WorkflowPhase::Browsing);
    }

    #[test]
    fn test_switch_to_other_seat() {
        let state = ReservationState::new();
        state.toggle_seat(5, false);
        state.toggle_seat(7, false);
        assert_eq!(state.get_selected_seat(), Some(7));
    }

    #[test]
    fn test_attendee_entry_requires_selection() {
        let state = ReservationState::new();
        assert!(!state.begin_attendee_entry());
        assert_eq!(state.get_phase(), WorkflowPhase::Browsing);

        state.toggle_seat(1, false);
        assert!(state.begin_attendee_entry());
        assert_eq!(state.get_phase(), WorkflowPhase::EnteringAttendeeInfo);
    }

    #[test]
    fn test_invalid_attendee_info_does_not_advance() {
        let state = ReservationState::new();
        state.toggle_seat(1, false);
        state.begin_attendee_entry();

        let mut info = attendee();
        info.name = "  ".to_string();
        assert!(state.confirm_attendee_info(info).is_err());
        assert_eq!(state.get_phase(), WorkflowPhase::EnteringAttendeeInfo);

        let mut info = attendee();
        info.phone = "abc".to_string();
        assert!(state.confirm_attendee_info(info).is_err());
        assert_eq!(state.get_phase(), WorkflowPhase::EnteringAttendeeInfo);
    }

    #[test]
    fn test_submit_requires_confirmed_info() {
        let state = ReservationState::new();
        state.toggle_seat(1, false);
        state.begin_attendee_entry();
        assert!(!state.begin_submit());

        state.confirm_attendee_info(attendee()).unwrap();
        assert!(state.begin_submit());
        assert_eq!(state.get_phase(), WorkflowPhase::Submitting);
    }

    #[test]
    fn test_edit_returns_to_entry() {
        let state = ReservationState::new();
        state.toggle_seat(1, false);
        state.begin_attendee_entry();
        state.confirm_attendee_info(attendee()).unwrap();

        state.edit_attendee_info();
        assert_eq!(state.get_phase(), WorkflowPhase::EnteringAttendeeInfo);
        // Y el submit vuelve a quedar bloqueado
        assert!(!state.begin_submit());
    }

    #[test]
    fn test_failure_reenables_submit() {
        let state = ReservationState::new();
        state.toggle_seat(5, false);
        state.begin_attendee_entry();
        state.confirm_attendee_info(attendee()).unwrap();
        state.begin_submit();

        let conflict = ApiError::from_status(409, "");
        state.finish_submit(ReservationOutcome::Failure(conflict));
        assert_eq!(state.get_phase(), WorkflowPhase::AttendeeInfoConfirmed);
        assert_eq!(state.get_selected_seat(), Some(5));
        assert!(state.begin_submit());
    }

    #[test]
    fn test_success_then_acknowledge_clears_selection() {
        let state = ReservationState::new();
        state.toggle_seat(5, false);
        state.begin_attendee_entry();
        state.confirm_attendee_info(attendee()).unwrap();
        state.begin_submit();

        state.finish_submit(ReservationOutcome::Success("예약 완료".to_string()));
        assert_eq!(state.get_phase(), WorkflowPhase::Succeeded);

        state.acknowledge_success();
        assert_eq!(state.get_selected_seat(), None);
        assert_eq!(state.get_phase(), WorkflowPhase::Browsing);
        assert!(state.get_last_outcome().is_none());
        assert_eq!(state.get_attendee(), AttendeeInfo::default());
    }
}
