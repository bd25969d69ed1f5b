use actix_web::HttpServer;
use akun_api::{app, AppConfig, TokenService, UserStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    info!("listening on {addr}");

    HttpServer::new(move || {
        app(
            UserStore::new(&config.users_file),
            TokenService::new(&config.jwt_secret),
        )
    })
    .bind(addr)?
    .run()
    .await
}
