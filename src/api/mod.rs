//! HTTP layer: route handlers, form decoding, and router composition.
//!
//! Every page handler answers with a [`Page`](crate::view::Page) envelope;
//! writes that finish by navigating elsewhere answer with a `303 See Other`.

pub mod dto;
pub mod extract;
pub mod handlers;

use std::any::Any;
use std::time::Duration;

use axum::Router;
use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::app_state::AppState;
use crate::error::ListingError;

/// OpenAPI description of every route.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Fyyur", description = "Venues, artists, and the shows that connect them"),
    paths(
        handlers::system::index,
        handlers::system::health_handler,
        handlers::venue::venues,
        handlers::venue::search_venues,
        handlers::venue::show_venue,
        handlers::venue::create_venue_form,
        handlers::venue::create_venue_submission,
        handlers::venue::edit_venue,
        handlers::venue::edit_venue_submission,
        handlers::venue::delete_venue,
        handlers::artist::artists,
        handlers::artist::search_artists,
        handlers::artist::show_artist,
        handlers::artist::create_artist_form,
        handlers::artist::create_artist_submission,
        handlers::artist::edit_artist,
        handlers::artist::edit_artist_submission,
        handlers::artist::delete_artist,
        handlers::show::shows,
        handlers::show::create_show_form,
        handlers::show::create_show_submission,
    ),
    tags(
        (name = "System"),
        (name = "Venues"),
        (name = "Artists"),
        (name = "Shows"),
    )
)]
pub struct ApiDoc;

/// Builds the router with every page and form endpoint.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes())
}

/// Builds the complete application: routes, 404 fallback, and middleware.
pub fn build_app(state: AppState, request_timeout: Duration) -> Router {
    let router = build_router().fallback(handlers::system::not_found);

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
        .layer(CatchPanicLayer::custom(panic_page))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn panic_page(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_string()))
        .unwrap_or_else(|| "handler panicked".to_string());
    ListingError::Internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_page_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/venues/{id}/edit"));
        assert!(doc.paths.paths.contains_key("/shows/create"));
    }

    #[test]
    fn panic_payload_becomes_500() {
        let response = panic_page(Box::new("boom"));
        assert_eq!(response.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
