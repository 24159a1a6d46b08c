use crate::{
    dto::auth::{LoginRequest, LoginResponse},
    error::{AppError, AppResult},
};

pub const DEMO_EMAIL: &str = "demo@aushadhi360.com";
pub const DEMO_PASSWORD: &str = "demo123";
pub const DEMO_TOKEN: &str = "mock_jwt_token_12345";
pub const DEMO_NAME: &str = "Demo User";

/// Checks the submitted pair against the single demo account.
pub fn login_user(payload: LoginRequest) -> AppResult<LoginResponse> {
    let LoginRequest { email, password } = payload;

    if email != DEMO_EMAIL || password != DEMO_PASSWORD {
        tracing::info!(email = %email, "login rejected");
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    }

    tracing::info!(email = %email, "login accepted");
    Ok(LoginResponse {
        token: DEMO_TOKEN.to_string(),
        email,
        name: DEMO_NAME.to_string(),
    })
}
