// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// Todo fallo sale como ApiError clasificado (ver api_error.rs).
// ============================================================================

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

use crate::models::{
    AuthResponse, LoginRequest, ReservationRequest, ReservationResponse, Seat, SignupRequest,
};
use crate::services::ApiError;
use crate::utils::constants::{
    BACKEND_URL, ENDPOINT_LOGIN, ENDPOINT_RESERVE_SEAT, ENDPOINT_SEATS, ENDPOINT_SEATS_BASE,
    ENDPOINT_SIGNUP, ENDPOINT_USER_RESERVATIONS, REQUEST_TIMEOUT_MS,
};
use crate::utils::storage;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Login: entrega el par de tokens y los datos del usuario
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let url = format!("{}{}", self.base_url, ENDPOINT_LOGIN);
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 [API] Login para usuario: {}", username);

        let request = Self::authorized(Request::post(&url))
            .json(&request)
            .map_err(|e| ApiError::network(format!("요청 생성에 실패했습니다: {}", e)))?;

        let response = send_with_timeout(request.send()).await?;
        let response = self.check(response).await?;
        parse_json::<AuthResponse>(response).await
    }

    /// Signup: crea la cuenta (los tokens utilizables salen del login encadenado)
    pub async fn signup(
        &self,
        username: &str,
        password: &str,
        email: Option<&str>,
    ) -> Result<AuthResponse, ApiError> {
        let url = format!("{}{}", self.base_url, ENDPOINT_SIGNUP);
        let request = SignupRequest {
            username: username.to_string(),
            password: password.to_string(),
            email: email.map(|e| e.to_string()),
        };

        log::info!("📝 [API] Signup para usuario: {}", username);

        let request = Self::authorized(Request::post(&url))
            .json(&request)
            .map_err(|e| ApiError::network(format!("요청 생성에 실패했습니다: {}", e)))?;

        let response = send_with_timeout(request.send()).await?;
        let response = self.check(response).await?;
        parse_json::<AuthResponse>(response).await
    }

    /// Listado completo de asientos con su estado de reserva
    pub async fn get_seats(&self) -> Result<Vec<Seat>, ApiError> {
        let url = format!("{}{}", self.base_url, ENDPOINT_SEATS);

        let builder = Self::authorized(Request::get(&url));
        let response = send_with_timeout(builder.send()).await?;
        let response = self.check(response).await?;
        let seats = parse_json::<Vec<Seat>>(response).await?;

        log::info!("💺 [API] {} asientos recibidos", seats.len());
        Ok(seats)
    }

    /// Reservar un asiento concreto
    pub async fn reserve_seat(&self, seat_number: u8) -> Result<ReservationResponse, ApiError> {
        let url = format!("{}{}", self.base_url, ENDPOINT_RESERVE_SEAT);
        let request = ReservationRequest { seat_number };

        log::info!("🎫 [API] Reservando asiento: {}", seat_number);

        let request = Self::authorized(Request::post(&url))
            .json(&request)
            .map_err(|e| ApiError::network(format!("요청 생성에 실패했습니다: {}", e)))?;

        let response = send_with_timeout(request.send()).await?;
        let response = self.check(response).await?;
        parse_json::<ReservationResponse>(response).await
    }

    /// Reservas del usuario autenticado
    pub async fn get_user_reservations(&self) -> Result<Vec<Seat>, ApiError> {
        let url = format!("{}{}", self.base_url, ENDPOINT_USER_RESERVATIONS);

        let builder = Self::authorized(Request::get(&url));
        let response = send_with_timeout(builder.send()).await?;
        let response = self.check(response).await?;
        parse_json::<Vec<Seat>>(response).await
    }

    /// Cancelar la reserva de un asiento concreto
    pub async fn cancel_reservation(
        &self,
        seat_number: u8,
    ) -> Result<ReservationResponse, ApiError> {
        let url = format!(
            "{}{}/{}/cancel/",
            self.base_url, ENDPOINT_SEATS_BASE, seat_number
        );

        log::info!("🗑️ [API] Cancelando reserva del asiento: {}", seat_number);

        let builder = Self::authorized(Request::delete(&url));
        let response = send_with_timeout(builder.send()).await?;
        let response = self.check(response).await?;
        parse_json::<ReservationResponse>(response).await
    }

    /// Adjuntar `Authorization: Bearer <token>` si hay sesión persistida.
    /// Sin token el request sale igual: la autorización la impone el backend.
    fn authorized(builder: RequestBuilder) -> RequestBuilder {
        match storage::load_access_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Convertir toda respuesta no-2xx en ApiError clasificado.
    /// Un 401 en cualquier llamada limpia el par de tokens persistido; la
    /// navegación queda en manos de la vista que hizo la llamada.
    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        if status == 401 {
            log::warn!("⚠️ [API] 401 recibido: limpiando tokens");
            storage::clear_tokens();
        }

        let body = response.text().await.unwrap_or_default();
        log::error!("❌ [API] HTTP {}: {}", status, body);
        Err(ApiError::from_status(status, &body))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Enviar el request con el deadline global; superarlo se trata como
/// fallo de conexión (no hubo respuesta HTTP utilizable).
async fn send_with_timeout<F>(send: F) -> Result<Response, ApiError>
where
    F: std::future::Future<Output = Result<Response, gloo_net::Error>>,
{
    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    pin_mut!(send);
    pin_mut!(timeout);

    match select(send, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| {
            log::error!("❌ [API] Error de red: {}", e);
            ApiError::network("네트워크 연결에 실패했습니다.")
        }),
        Either::Right((_, _)) => {
            log::error!("❌ [API] Timeout de request ({} ms)", REQUEST_TIMEOUT_MS);
            Err(ApiError::network("요청 시간이 초과되었습니다."))
        }
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| {
        log::error!("❌ [API] Error parseando respuesta: {}", e);
        ApiError::unexpected("응답을 처리하지 못했습니다.")
    })
}
