//! Application router configuration.

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    AppState, endpoints,
    not_found::{get_404_not_found, get_405_method_not_allowed},
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_summary_endpoint, get_transaction_endpoint, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Cross-origin requests are allowed from any origin.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(endpoints::TRANSACTIONS_SUMMARY, get(get_summary_endpoint))
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(edit_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .fallback(get_404_not_found)
        .method_not_allowed_fallback(get_405_method_not_allowed)
        .layer(cors)
        .with_state(state)
}
