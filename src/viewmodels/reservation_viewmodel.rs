// ============================================================================
// RESERVATION VIEWMODEL - Lógica del flujo de reserva
// ============================================================================

use crate::models::{ReservationOutcome, ReservationResponse, Seat};
use crate::services::{ApiClient, ApiError};

/// ViewModel de reserva - SOLO lógica de negocio
pub struct ReservationViewModel {
    api_client: ApiClient,
}

impl ReservationViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Listado de asientos para la grilla
    pub async fn load_seats(&self) -> Result<Vec<Seat>, ApiError> {
        self.api_client.get_seats().await
    }

    /// Intento de reserva del asiento seleccionado.
    /// Éxito = respuesta con `message` no vacío (contrato débil aislado en
    /// ReservationResponse::is_success). El fallo sale clasificado, con la
    /// redacción específica de la reserva para 409 y 422.
    pub async fn reserve(&self, seat_number: u8) -> ReservationOutcome {
        match self.api_client.reserve_seat(seat_number).await {
            Ok(response) => {
                let outcome = outcome_from_response(response);
                match &outcome {
                    ReservationOutcome::Success(_) => {
                        log::info!("✅ [RESERVA] Asiento {} reservado", seat_number);
                    }
                    ReservationOutcome::Failure(_) => {
                        log::error!("❌ [RESERVA] Respuesta sin mensaje utilizable");
                    }
                }
                outcome
            }
            Err(error) => {
                let error = contextualize_reserve_error(error);
                log::error!(
                    "❌ [RESERVA] Fallo reservando asiento {}: {}",
                    seat_number,
                    error
                );
                ReservationOutcome::Failure(error)
            }
        }
    }

    /// Reservas del usuario autenticado
    pub async fn my_reservations(&self) -> Result<Vec<Seat>, ApiError> {
        self.api_client.get_user_reservations().await
    }

    /// Cancelar una reserva. Devuelve el mensaje del backend; la lista se
    /// vuelve a pedir al backend después (nunca se recorta localmente, para
    /// no divergir de la verdad del servidor).
    pub async fn cancel(&self, seat_number: u8) -> Result<String, ApiError> {
        match self.api_client.cancel_reservation(seat_number).await {
            Ok(response) => {
                log::info!("✅ [RESERVA] Reserva del asiento {} cancelada", seat_number);
                Ok(response.message)
            }
            Err(error) => {
                let error = contextualize_cancel_error(error);
                log::error!(
                    "❌ [RESERVA] Fallo cancelando asiento {}: {}",
                    seat_number,
                    error
                );
                Err(error)
            }
        }
    }
}

impl Default for ReservationViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Una respuesta 2xx sin mensaje utilizable se trata como fallo
fn outcome_from_response(response: ReservationResponse) -> ReservationOutcome {
    if response.is_success() {
        ReservationOutcome::Success(response.message)
    } else {
        ReservationOutcome::Failure(ApiError::unexpected("예약에 실패했습니다."))
    }
}

/// Redacción específica de la reserva para los códigos que le importan
fn contextualize_reserve_error(error: ApiError) -> ApiError {
    match error.status {
        409 => error.with_message("이미 예약된 좌석입니다. 다른 좌석을 선택해주세요."),
        422 => error.with_message("선택한 좌석이 더 이상 유효하지 않습니다."),
        _ => error,
    }
}

/// Redacción específica de la cancelación
fn contextualize_cancel_error(error: ApiError) -> ApiError {
    match error.status {
        404 => error.with_message("예약을 찾을 수 없습니다."),
        _ => error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonempty_message_is_success() {
        let response = ReservationResponse {
            message: "좌석 5번이 성공적으로 예약되었습니다.".to_string(),
        };
        match outcome_from_response(response) {
            ReservationOutcome::Success(message) => {
                assert!(message.contains("성공적으로"));
            }
            ReservationOutcome::Failure(_) => panic!("respuesta con mensaje debe ser éxito"),
        }
    }

    #[test]
    fn test_missing_message_is_failure() {
        let response = ReservationResponse {
            message: String::new(),
        };
        match outcome_from_response(response) {
            ReservationOutcome::Failure(error) => {
                assert_eq!(error.message, "예약에 실패했습니다.");
                assert!(!error.is_network_error);
                assert!(!error.is_server_error);
                assert!(!error.is_client_error);
            }
            ReservationOutcome::Success(_) => panic!("respuesta sin mensaje debe ser fallo"),
        }
    }

    #[test]
    fn test_conflict_gets_pick_another_seat_wording() {
        let error = contextualize_reserve_error(ApiError::from_status(409, ""));
        assert_eq!(error.status, 409);
        assert!(error.is_client_error);
        assert!(error.message.contains("다른 좌석"));

        // Y debe ser distinto del mensaje genérico de fallo
        assert_ne!(error.message, "예약에 실패했습니다.");
    }

    #[test]
    fn test_unprocessable_seat_wording() {
        let error = contextualize_reserve_error(ApiError::from_status(422, ""));
        assert!(error.message.contains("유효하지 않습니다"));
    }

    #[test]
    fn test_other_statuses_keep_classified_message() {
        let original = ApiError::from_status(500, "");
        let error = contextualize_reserve_error(original.clone());
        assert_eq!(error, original);
    }

    #[test]
    fn test_cancel_not_found_wording() {
        let error = contextualize_cancel_error(ApiError::from_status(404, ""));
        assert_eq!(error.message, "예약을 찾을 수 없습니다.");

        let error = contextualize_cancel_error(ApiError::from_status(500, ""));
        assert_eq!(error.message, "서버 오류가 발생했습니다.");
    }
}
