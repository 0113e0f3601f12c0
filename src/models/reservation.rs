use serde::{Deserialize, Serialize};

use crate::services::ApiError;

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct ReservationRequest {
    pub seat_number: u8,
}

/// Respuesta del endpoint de reserva/cancelación.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct ReservationResponse {
    #[serde(default)]
    pub message: String,
}

impl ReservationResponse {
    /// Contrato débil con el backend: la única señal de éxito es un campo
    /// `message` no vacío (la respuesta no trae flag de estado explícito).
    /// Mantenido por compatibilidad; este predicado es el único punto que
    /// conoce esa ambigüedad.
    pub fn is_success(&self) -> bool {
        !self.message.trim().is_empty()
    }
}

/// Resultado transitorio de un intento de reserva
#[derive(Clone, Debug, PartialEq)]
pub enum ReservationOutcome {
    Success(String),
    Failure(ApiError),
}

/// Datos del asistente capturados antes del submit final
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttendeeInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl AttendeeInfo {
    /// Validación previa al avance del flujo: nombre y teléfono obligatorios,
    /// teléfono con formato válido. Nunca llega al clasificador de errores.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() || self.phone.trim().is_empty() {
            return Err("이름과 전화번호는 필수 입력 항목입니다.".to_string());
        }
        if !is_valid_phone(self.phone.trim()) {
            return Err("올바른 전화번호 형식을 입력해주세요.".to_string());
        }
        Ok(())
    }
}

/// Equivalente al patrón `[0-9\-+\s()]+`
pub fn is_valid_phone(phone: &str) -> bool {
    !phone.is_empty()
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '+' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str, phone: &str) -> AttendeeInfo {
        AttendeeInfo {
            name: name.to_string(),
            phone: phone.to_string(),
            email: String::new(),
        }
    }

    #[test]
    fn test_valid_phone_formats() {
        assert!(is_valid_phone("010-1234-5678"));
        assert!(is_valid_phone("+82 (10) 1234 5678"));
        assert!(is_valid_phone("0212345678"));
    }

    #[test]
    fn test_invalid_phone_formats() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("phone"));
        assert!(!is_valid_phone("010-1234-567a"));
    }

    #[test]
    fn test_validate_requires_name_and_phone() {
        assert!(info("", "010-1234-5678").validate().is_err());
        assert!(info("   ", "010-1234-5678").validate().is_err());
        assert!(info("홍길동", "").validate().is_err());
        assert!(info("홍길동", "abc").validate().is_err());
        assert!(info("홍길동", "010-1234-5678").validate().is_ok());
    }

    #[test]
    fn test_response_success_requires_message() {
        let ok = ReservationResponse {
            message: "좌석 5번이 성공적으로 예약되었습니다.".to_string(),
        };
        assert!(ok.is_success());

        let empty = ReservationResponse {
            message: String::new(),
        };
        assert!(!empty.is_success());

        let blank = ReservationResponse {
            message: "   ".to_string(),
        };
        assert!(!blank.is_success());
    }
}
