/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Por defecto vacía: rutas relativas al mismo origen (proxy del dev server)
/// - Despliegues separados: via BACKEND_URL env var
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "",
};

// Endpoints REST consumidos (rutas fijas del backend)
pub const ENDPOINT_LOGIN: &str = "/api/users/login/";
pub const ENDPOINT_SIGNUP: &str = "/api/users/signup/";
pub const ENDPOINT_SEATS: &str = "/api/seats/";
pub const ENDPOINT_RESERVE_SEAT: &str = "/api/seats/reserve/";
pub const ENDPOINT_USER_RESERVATIONS: &str = "/api/users/me/reservations/";
// El endpoint de cancelación se arma por asiento: /api/seats/{n}/cancel/
pub const ENDPOINT_SEATS_BASE: &str = "/api/seats";

/// Claves de localStorage para el par de tokens
pub const STORAGE_KEY_ACCESS_TOKEN: &str = "accessToken";
pub const STORAGE_KEY_REFRESH_TOKEN: &str = "refreshToken";

/// Sala fija de 3x3: 9 asientos numerados 1..9 por filas
pub const TOTAL_SEATS: u8 = 9;
pub const GRID_COLS: u8 = 3;

/// Timeout global de requests al backend (ms)
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;
