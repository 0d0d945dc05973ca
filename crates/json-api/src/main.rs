//! Product Catalog JSON API Server

use std::process;

use salvo::prelude::*;
use tracing::{error, info};

use catalog_app::context::AppContext;

use crate::{config::ServerConfig, observability::Observability, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod extensions;
mod healthcheck;
mod index_page;
mod observability;
mod products;
mod router;
#[cfg(test)]
mod scenarios;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Product Catalog JSON API Server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        exit_with_failure();
    });

    let observability = Observability::init(&config).unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, stderr is all that is left"
        )]
        {
            eprintln!("Observability error: {e}");
        }

        exit_with_failure();
    });

    let app = match AppContext::from_database_uri(&config.database.database_uri).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            observability.shutdown();
            exit_with_failure();
        }
    };

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;
    let server = Server::new(listener);
    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server
        .serve(router::app_router(State::from_app_context(app)))
        .await;

    info!("server stopped");

    observability.shutdown();
}

#[expect(clippy::exit, reason = "startup failures end the process with a non-zero status")]
fn exit_with_failure() -> ! {
    process::exit(1)
}
