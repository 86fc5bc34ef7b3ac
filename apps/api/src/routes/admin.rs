//! Admin login. Gating is cosmetic in a single-user tool: there are no
//! session tokens, just a password check against the configured secret.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub status: &'static str,
}

/// POST /api/v1/admin/login
///
/// Succeeds only when ADMIN_PASSWORD is configured and matches. With no
/// password configured, login always fails.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let configured = state
        .config
        .admin_password
        .as_deref()
        .ok_or(AppError::Unauthorized)?;

    if request.username.trim().is_empty() || request.password != configured {
        return Err(AppError::Unauthorized);
    }

    info!("Admin login for '{}'", request.username.trim());
    Ok(Json(LoginResponse { status: "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_fails_when_no_password_configured() {
        let state = AppState::new(test_config());
        let result = handle_login(State(state), Json(login("admin", "anything"))).await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_login_checks_password_and_username_presence() {
        let mut config = test_config();
        config.admin_password = Some("hunter2".to_string());
        let state = AppState::new(config);

        let ok = handle_login(State(state.clone()), Json(login("admin", "hunter2"))).await;
        assert!(ok.is_ok());

        let wrong = handle_login(State(state.clone()), Json(login("admin", "wrong"))).await;
        assert!(matches!(wrong, Err(AppError::Unauthorized)));

        let anonymous = handle_login(State(state), Json(login(" ", "hunter2"))).await;
        assert!(matches!(anonymous, Err(AppError::Unauthorized)));
    }
}
