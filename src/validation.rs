use serde_json::Value;

use crate::error::ApiError;

/// A register/login payload that has passed every check. Handlers only ever
/// see this type, never the raw JSON body.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Checks the request body for /register and /login. The checks run in a
/// fixed order and the first failure wins:
/// presence, string type, username length (trimmed), password length.
pub fn validate_credentials(body: &Value) -> Result<Credentials, ApiError> {
    let username = body.get("username").filter(|v| !v.is_null());
    let password = body.get("password").filter(|v| !v.is_null());

    let (Some(username), Some(password)) = (username, password) else {
        return Err(ApiError::Validation(
            "username dan password wajib diisi".to_string(),
        ));
    };

    let (Some(username), Some(password)) = (username.as_str(), password.as_str()) else {
        return Err(ApiError::Validation(
            "username dan password harus berupa string".to_string(),
        ));
    };

    if username.trim().chars().count() < 3 {
        return Err(ApiError::Validation(
            "username minimal 3 karakter".to_string(),
        ));
    }

    if password.chars().count() < 6 {
        return Err(ApiError::Validation(
            "password minimal 6 karakter".to_string(),
        ));
    }

    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}
