mod auth;
mod config;
mod cookies;
mod database;
mod model;
mod router;
mod routes;
mod server;
mod session;
mod state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    env_logger::init();
    server::run().await
}
