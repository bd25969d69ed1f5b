use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::Value;
use tracing::{error, info};

use crate::error::{ApiError, ErrorBody};
use crate::models::{
    Claims, HealthResponse, LoginResponse, ProfileResponse, PublicUser, RegisterResponse, User,
};
use crate::password;
use crate::store::UserStore;
use crate::validation::validate_credentials;
use crate::TokenService;

#[get("/")]
pub async fn index() -> impl Responder {
    let html = r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>Akun API</title>
        <style>
            body { font-family: monospace; padding: 40px; }
            code { background: #eee; padding: 2px 6px; border-radius: 4px; }
            li { margin-bottom: 10px; }
        </style>
    </head>
    <body>
        <h1>Akun API</h1>
        <p>Available endpoints:</p>
        <ul>
            <li><code>GET /</code> &ndash; This help page</li>
            <li><code>GET /health</code> &ndash; Health check</li>
            <li><code>POST /register</code> &ndash; Register a new account</li>
            <li><code>POST /login</code> &ndash; Log in, returns a bearer token</li>
            <li><code>GET /profile</code> &ndash; Own profile (requires <code>Authorization: Bearer &lt;token&gt;</code>)</li>
        </ul>
    </body>
    </html>
    "#;

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

/// Simple health check
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Register a new account
#[post("/register")]
pub async fn register(
    body: web::Json<Value>,
    store: web::Data<UserStore>,
) -> Result<HttpResponse, ApiError> {
    let creds = validate_credentials(&body)?;
    let username = creds.username.trim().to_string();

    let mut users = store.load();
    if users.iter().any(|u| u.username == username) {
        return Err(ApiError::UsernameTaken);
    }

    let password_hash = password::hash(&creds.password).map_err(|err| {
        error!("password hashing failed: {err}");
        ApiError::Internal
    })?;

    let now = chrono::Utc::now();
    // Creation-time id: close enough to unique at this scale, but two
    // registrations within the same millisecond will collide.
    let user = User {
        id: now.timestamp_millis(),
        username,
        password_hash,
        created_at: now.to_rfc3339(),
    };

    users.push(user.clone());
    store.save(&users).map_err(|err| {
        error!("could not persist users file: {err}");
        ApiError::Internal
    })?;

    info!("registered user {}", user.username);

    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "Registrasi berhasil",
        user: PublicUser::from(&user),
    }))
}

/// Log in with username and password, returns a two-hour bearer token
#[post("/login")]
pub async fn login(
    body: web::Json<Value>,
    store: web::Data<UserStore>,
    tokens: web::Data<TokenService>,
) -> Result<HttpResponse, ApiError> {
    let creds = validate_credentials(&body)?;
    let username = creds.username.trim();

    let users = store.load();
    // Unknown username and wrong password produce the same error.
    let user = users
        .iter()
        .find(|u| u.username == username)
        .ok_or(ApiError::WrongCredentials)?;

    if !password::verify(&creds.password, &user.password_hash) {
        return Err(ApiError::WrongCredentials);
    }

    let token = tokens.issue(user.id, &user.username).map_err(|err| {
        error!("token issuance failed: {err}");
        ApiError::Internal
    })?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "Login berhasil",
        token,
        user: PublicUser::from(user),
    }))
}

/// Own profile, resolved from the bearer token's claims
#[get("")]
pub async fn profile(
    claims: web::ReqData<Claims>,
    store: web::Data<UserStore>,
) -> Result<HttpResponse, ApiError> {
    let users = store.load();
    // A valid token does not guarantee the user still exists.
    let user = users
        .into_iter()
        .find(|u| u.id == claims.id)
        .ok_or(ApiError::UserNotFound)?;

    Ok(HttpResponse::Ok().json(ProfileResponse { user: user.into() }))
}

/// Fallback for every route the app does not know.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody {
        message: "endpoint tidak ditemukan".to_string(),
    })
}
