use serde::{Deserialize, Serialize};

/// A stored user record. This is the shape persisted in the users file;
/// `password_hash` must never appear in any response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: String,
}

/// The public projection of a user returned by /register and /login.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        PublicUser {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

/// The projection returned by /profile.
#[derive(Debug, Serialize)]
pub struct ProfileUser {
    pub id: i64,
    pub username: String,
    pub created_at: String,
}

impl From<User> for ProfileUser {
    fn from(user: User) -> Self {
        ProfileUser {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: PublicUser,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
    pub user: PublicUser,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub user: ProfileUser,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// Token payload. Signature and `exp` are the only validity criteria;
/// there is no server-side session table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: i64,
    pub username: String,
    pub exp: usize,
}
