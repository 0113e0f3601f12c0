// ============================================================================
// API ERROR - Clasificador de errores del backend
// ============================================================================
// Reemplaza la inspección ad hoc de errores: la capa de API devuelve siempre
// este tipo y los llamadores hacen match sobre sus flags.
// ============================================================================

use serde::Deserialize;

/// Error clasificado de una llamada al backend.
/// Exactamente uno de los tres flags es true, salvo el caso de error
/// inesperado (status 0 sin flag de red) reservado a respuestas malformadas.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    pub is_network_error: bool,
    pub is_server_error: bool,
    pub is_client_error: bool,
}

/// Cuerpo de error que suele devolver el backend: {"message": ...} o {"error": ...}
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiError {
    /// Fallo a nivel de conexión: no llegó ninguna respuesta HTTP
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            message: message.into(),
            is_network_error: true,
            is_server_error: false,
            is_client_error: false,
        }
    }

    /// Fallo sin clasificación HTTP (respuesta inesperada del backend)
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            message: message.into(),
            is_network_error: false,
            is_server_error: false,
            is_client_error: false,
        }
    }

    /// Clasificar una respuesta HTTP no-2xx a partir de su status y cuerpo.
    /// Prioridad del mensaje: campo message/error del cuerpo > tabla fija por
    /// código de estado > mensaje genérico.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = Self::body_message(body)
            .or_else(|| Self::status_message(status).map(str::to_string))
            .unwrap_or_else(|| "요청 처리에 실패했습니다.".to_string());

        Self {
            status,
            message,
            is_network_error: false,
            is_server_error: status >= 500,
            is_client_error: (400..500).contains(&status),
        }
    }

    /// Sustituir el mensaje con la redacción específica del contexto
    /// (p.ej. 409 durante la reserva, 404 durante la cancelación)
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    fn body_message(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        parsed
            .message
            .or(parsed.error)
            .filter(|m| !m.trim().is_empty())
    }

    /// Tabla fija de mensajes por código de estado
    fn status_message(status: u16) -> Option<&'static str> {
        let message = match status {
            400 => "잘못된 요청입니다.",
            401 => "인증이 필요합니다. 다시 로그인해주세요.",
            403 => "접근 권한이 없습니다.",
            404 => "요청한 자원을 찾을 수 없습니다.",
            409 => "이미 예약된 좌석입니다.",
            422 => "요청을 처리할 수 없습니다.",
            429 => "요청이 너무 많습니다. 잠시 후 다시 시도해주세요.",
            500 => "서버 오류가 발생했습니다.",
            502 => "게이트웨이 오류가 발생했습니다.",
            503 => "서비스를 일시적으로 사용할 수 없습니다.",
            504 => "서버 응답 시간이 초과되었습니다.",
            _ => return None,
        };
        Some(message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_network_error {
            write!(f, "network error: {}", self.message)
        } else {
            write!(f, "HTTP {}: {}", self.status, self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_flags() {
        let error = ApiError::network("연결 실패");
        assert_eq!(error.status, 0);
        assert!(error.is_network_error);
        assert!(!error.is_server_error);
        assert!(!error.is_client_error);
    }

    #[test]
    fn test_server_and_client_ranges() {
        for status in [500u16, 502, 503, 504] {
            let error = ApiError::from_status(status, "");
            assert!(error.is_server_error, "status {}", status);
            assert!(!error.is_client_error);
            assert!(!error.is_network_error);
        }
        for status in [400u16, 401, 403, 404, 409, 422, 429] {
            let error = ApiError::from_status(status, "");
            assert!(error.is_client_error, "status {}", status);
            assert!(!error.is_server_error);
            assert!(!error.is_network_error);
        }
    }

    #[test]
    fn test_exactly_one_flag_per_status() {
        for status in [400u16, 404, 409, 429, 500, 503] {
            let error = ApiError::from_status(status, "");
            let flags = [
                error.is_network_error,
                error.is_server_error,
                error.is_client_error,
            ];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "status {}", status);
        }
    }

    #[test]
    fn test_body_message_has_priority() {
        let error = ApiError::from_status(409, r#"{"error": "이미 예약된 좌석입니다."}"#);
        assert_eq!(error.message, "이미 예약된 좌석입니다.");

        let error = ApiError::from_status(500, r#"{"message": "점검 중입니다."}"#);
        assert_eq!(error.message, "점검 중입니다.");
    }

    #[test]
    fn test_lookup_table_when_body_unusable() {
        // Cuerpo no-JSON: cae a la tabla por status
        let error = ApiError::from_status(409, "<html>conflict</html>");
        assert_eq!(error.message, "이미 예약된 좌석입니다.");

        // Cuerpo JSON sin campos de mensaje
        let error = ApiError::from_status(404, r#"{"detail": 1}"#);
        assert_eq!(error.message, "요청한 자원을 찾을 수 없습니다.");
    }

    #[test]
    fn test_generic_fallback_for_unknown_status() {
        let error = ApiError::from_status(418, "");
        assert_eq!(error.message, "요청 처리에 실패했습니다.");
        assert!(error.is_client_error);
    }

    #[test]
    fn test_conflict_message_distinct_from_generic() {
        let conflict = ApiError::from_status(409, "");
        let generic = ApiError::from_status(418, "");
        assert_ne!(conflict.message, generic.message);
    }

    #[test]
    fn test_with_message_override() {
        let error = ApiError::from_status(409, "").with_message("다른 좌석을 선택해주세요.");
        assert_eq!(error.status, 409);
        assert!(error.is_client_error);
        assert_eq!(error.message, "다른 좌석을 선택해주세요.");
    }
}
