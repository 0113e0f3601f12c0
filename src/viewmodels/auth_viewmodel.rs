// ============================================================================
// AUTH VIEWMODEL - Ciclo de vida de la sesión
// ============================================================================
// login / signup / logout / restauración al arrancar.
// Devuelve resultados tipados; las vistas deciden navegación y mensajes.
// ============================================================================

use crate::services::{ApiClient, ApiError};
use crate::state::AuthState;
use crate::utils::storage;

/// ViewModel de autenticación - SOLO lógica de negocio
pub struct AuthViewModel {
    api_client: ApiClient,
}

impl AuthViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Estado inicial al arrancar: hay sesión si existe accessToken persistido
    pub fn restore(&self, state: &AuthState) {
        let has_token = storage::load_access_token().is_some();
        log::info!(
            "🔑 [AUTH] Sesión persistida: {}",
            if has_token { "sí" } else { "no" }
        );
        state.set_authenticated(has_token);
        state.set_loading(false);
    }

    /// Login contra el backend. En éxito persiste ambos tokens y deja la
    /// sesión autenticada; en fallo no toca los tokens. El loading se limpia
    /// siempre, haya éxito o fallo.
    pub async fn login(
        &self,
        state: &AuthState,
        username: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        state.set_loading(true);
        log::info!("🔐 [AUTH] Iniciando login: {}", username);

        let outcome = match self.api_client.login(username, password).await {
            Ok(response) => {
                if let Err(e) = storage::save_tokens(&response.access, &response.refresh) {
                    log::error!("❌ [AUTH] Error guardando tokens: {}", e);
                }
                state.set_authenticated(true);
                log::info!("✅ [AUTH] Login exitoso: {}", response.user.username);
                Ok(())
            }
            Err(error) => {
                log::error!("❌ [AUTH] Login fallido: {}", error);
                Err(error)
            }
        };

        state.set_loading(false);
        outcome
    }

    /// Signup + login encadenado. El signup no entrega tokens utilizables,
    /// así que el alta se completa con un login inmediato con las mismas
    /// credenciales. Si cualquiera de los dos pasos falla, la operación
    /// completa falla y no se persiste ningún token.
    pub async fn signup(
        &self,
        state: &AuthState,
        username: &str,
        password: &str,
        email: Option<&str>,
    ) -> Result<(), ApiError> {
        state.set_loading(true);
        log::info!("📝 [AUTH] Iniciando signup: {}", username);

        let outcome = self
            .signup_then_login(state, username, password, email)
            .await;

        if let Err(ref error) = outcome {
            log::error!("❌ [AUTH] Signup o login automático fallido: {}", error);
        }

        state.set_loading(false);
        outcome
    }

    async fn signup_then_login(
        &self,
        state: &AuthState,
        username: &str,
        password: &str,
        email: Option<&str>,
    ) -> Result<(), ApiError> {
        // 1. Alta de la cuenta
        self.api_client.signup(username, password, email).await?;
        log::info!("✅ [AUTH] Signup exitoso, login automático...");

        // 2. Login encadenado: de aquí salen los tokens que se persisten
        let response = self.api_client.login(username, password).await?;
        if let Err(e) = storage::save_tokens(&response.access, &response.refresh) {
            log::error!("❌ [AUTH] Error guardando tokens: {}", e);
        }
        state.set_authenticated(true);
        log::info!("✅ [AUTH] Signup + login automático completado");
        Ok(())
    }

    /// Logout: síncrono e idempotente, sin llamada al backend.
    /// Limpia ambos tokens y deja la sesión anónima.
    pub fn logout(&self, state: &AuthState) {
        log::info!("👋 [AUTH] Logout");
        storage::clear_tokens();
        state.set_authenticated(false);
    }
}

impl Default for AuthViewModel {
    fn default() -> Self {
        Self::new()
    }
}
