//! compose-updater healthcheck: answers every HTTP request with a liveness message.
//! Used by: binary entrypoint.

pub mod config;
pub mod console;
pub mod error;
pub mod handlers;
pub mod server;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    console::print_banner();
    console::print_startup(config.bind_addr);

    server::healthcheck(config.bind_addr).await;
}
