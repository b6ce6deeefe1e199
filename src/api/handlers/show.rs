//! Show handlers.

use axum::Router;
use axum::extract::State;
use axum::routing::get;

use super::{home_page, settle};
use crate::api::dto::FormFields;
use crate::api::extract::ValidForm;
use crate::app_state::AppState;
use crate::domain::ShowDraft;
use crate::error::ListingError;
use crate::view::Page;

/// `GET /shows` — Every show with venue and artist resolved, soonest first.
///
/// # Errors
///
/// Returns [`ListingError::Persistence`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/shows",
    tag = "Shows",
    summary = "List shows",
    responses(
        (status = 200, description = "`pages/shows.html` with `shows`"),
    )
)]
pub async fn shows(State(state): State<AppState>) -> Result<Page, ListingError> {
    let shows = state.listing_service.shows().await?;
    Ok(Page::new("pages/shows.html").with("shows", &shows))
}

/// `GET /shows/create`
#[utoipa::path(
    get,
    path = "/shows/create",
    tag = "Shows",
    summary = "New show form",
    responses((status = 200, description = "`forms/new_show.html`"))
)]
pub async fn create_show_form() -> Page {
    Page::new("forms/new_show.html")
}

/// `POST /shows/create` — Persist a show linking a venue and an artist.
///
/// An id that names no record rolls the insert back and is reported as a
/// failure notice on the home page.
///
/// # Errors
///
/// Returns [`ListingError::InvalidForm`] for a missing field, a
/// non-numeric id, or an unparseable start time.
#[utoipa::path(
    post,
    path = "/shows/create",
    tag = "Shows",
    summary = "Create a show",
    responses(
        (status = 200, description = "`pages/home.html` with a notice"),
        (status = 400, description = "Form failed validation"),
    )
)]
pub async fn create_show_submission(
    State(state): State<AppState>,
    ValidForm(pairs): ValidForm<Vec<(String, String)>>,
) -> Result<Page, ListingError> {
    let draft = ShowDraft::try_from(&FormFields::from(pairs))?;
    let notice = settle(
        state.listing_service.create_show(draft).await,
        |_| "Show was successfully listed!".to_string(),
        || "Show couldn't be listed!".to_string(),
    )?;
    Ok(home_page().with_notice(notice))
}

/// Show routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/shows", get(shows)).route(
        "/shows/create",
        get(create_show_form).post(create_show_submission),
    )
}
