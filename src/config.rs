use std::env;
use std::path::PathBuf;

use tracing::warn;

/// Process-wide startup configuration, read from the environment exactly
/// once in `main` and passed explicitly to whatever needs it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub jwt_secret: String,
    pub users_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(3000);

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set, falling back to the default secret");
            "secret".to_string()
        });

        let users_file = env::var("USERS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("users.json"));

        AppConfig {
            port,
            jwt_secret,
            users_file,
        }
    }
}
