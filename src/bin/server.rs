use std::{
    net::{IpAddr, SocketAddr},
    process::exit,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ledger_api::{AppState, Error, build_router, graceful_shutdown, logging_middleware};

/// The REST API server for recording and summarising transactions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database, created if it does not exist.
    #[arg(long, default_value = "database.db")]
    db_path: String,

    /// The address to listen on.
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// The port to serve the API from.
    #[arg(short, long, default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let app_state = match open_database(&args.db_path) {
        Ok(app_state) => app_state,
        Err(error) => {
            tracing::error!("DB Error: {error}");
            exit(1);
        }
    };

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(app_state));

    let addr = SocketAddr::from((args.host, args.port));
    tracing::info!("Server started running at http://{addr}");

    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server error: {error}");
        exit(1);
    }
}

fn open_database(db_path: &str) -> Result<AppState, Error> {
    let connection = Connection::open(db_path)?;

    AppState::new(connection)
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router
        .layer(middleware::from_fn(logging_middleware))
        .layer(tracing_layer)
}
