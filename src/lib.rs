pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod store;
pub mod validation;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error};
use actix_web_httpauth::middleware::HttpAuthentication;
use tracing::debug;

pub use auth::TokenService;
pub use config::AppConfig;
pub use store::UserStore;

use error::ApiError;

/// Builds the full application. The binary and the integration tests both
/// go through this, so they cannot drift apart.
pub fn app(
    store: UserStore,
    tokens: TokenService,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(store))
        .app_data(web::Data::new(tokens))
        .app_data(json_config())
        .wrap(Cors::permissive())
        .service(handlers::index)
        .service(handlers::health)
        .service(handlers::register)
        .service(handlers::login)
        .service(
            web::scope("/profile")
                .wrap(HttpAuthentication::with_fn(auth::validator))
                .service(handlers::profile),
        )
        .default_service(web::route().to(handlers::not_found))
}

/// Bodies that are not decodable JSON never reach validation; reject them
/// in the same `{"message": ...}` shape as everything else.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!("rejected request body: {err}");
        ApiError::Validation("payload harus berupa JSON".to_string()).into()
    })
}
