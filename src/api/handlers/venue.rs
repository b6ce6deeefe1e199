//! Venue handlers: listing, search, detail, create, edit, delete.

use axum::Router;
use axum::extract::State;
use axum::response::Response;
use axum::routing::{get, post};

use super::{home_page, settle};
use crate::api::dto::{FormFields, SearchForm};
use crate::api::extract::{PathId, ValidForm};
use crate::app_state::AppState;
use crate::domain::{VenueChanges, VenueDraft, VenueId};
use crate::error::ListingError;
use crate::view::{Page, redirect};

/// `GET /venues` — Venues grouped by city and state.
///
/// # Errors
///
/// Returns [`ListingError::Persistence`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/venues",
    tag = "Venues",
    summary = "List venues by location",
    description = "Groups every venue by (city, state) and counts each venue's upcoming shows.",
    responses(
        (status = 200, description = "`pages/venues.html` with `areas`"),
    )
)]
pub async fn venues(State(state): State<AppState>) -> Result<Page, ListingError> {
    let areas = state.listing_service.venue_areas().await?;
    Ok(Page::new("pages/venues.html").with("areas", &areas))
}

/// `POST /venues/search` — Case-insensitive substring search on names.
///
/// # Errors
///
/// Returns [`ListingError::Persistence`] if the store cannot be read.
#[utoipa::path(
    post,
    path = "/venues/search",
    tag = "Venues",
    summary = "Search venues by name",
    request_body(content = SearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "`pages/search_venues.html` with `results` and `search_term`"),
    )
)]
pub async fn search_venues(
    State(state): State<AppState>,
    ValidForm(form): ValidForm<SearchForm>,
) -> Result<Page, ListingError> {
    let results = state
        .listing_service
        .search_venues(&form.search_term)
        .await?;
    Ok(Page::new("pages/search_venues.html")
        .with("results", &results)
        .with("search_term", &form.search_term))
}

/// `GET /venues/{id}` — Venue page with past and upcoming shows.
///
/// # Errors
///
/// Returns [`ListingError::VenueNotFound`] for an unknown id.
#[utoipa::path(
    get,
    path = "/venues/{id}",
    tag = "Venues",
    summary = "Show a venue",
    params(("id" = i64, Path, description = "Venue id")),
    responses(
        (status = 200, description = "`pages/show_venue.html` with `venue`"),
        (status = 404, description = "No such venue"),
    )
)]
pub async fn show_venue(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Page, ListingError> {
    let detail = state.listing_service.venue_detail(VenueId::new(id)).await?;
    Ok(Page::new("pages/show_venue.html").with("venue", &detail))
}

/// `GET /venues/create` — Empty venue form.
#[utoipa::path(
    get,
    path = "/venues/create",
    tag = "Venues",
    summary = "New venue form",
    responses((status = 200, description = "`forms/new_venue.html`"))
)]
pub async fn create_venue_form() -> Page {
    Page::new("forms/new_venue.html")
}

/// `POST /venues/create` — Persist a new venue.
///
/// Renders the home page with a success or failure notice; a rolled-back
/// insert is not an HTTP error.
///
/// # Errors
///
/// Returns [`ListingError::InvalidForm`] if a required field is missing.
#[utoipa::path(
    post,
    path = "/venues/create",
    tag = "Venues",
    summary = "Create a venue",
    responses(
        (status = 200, description = "`pages/home.html` with a notice"),
        (status = 400, description = "Form failed validation"),
    )
)]
pub async fn create_venue_submission(
    State(state): State<AppState>,
    ValidForm(pairs): ValidForm<Vec<(String, String)>>,
) -> Result<Page, ListingError> {
    let draft = VenueDraft::try_from(&FormFields::from(pairs))?;
    let name = draft.name.clone();
    let notice = settle(
        state.listing_service.create_venue(draft).await,
        |_| format!("Venue {name} was successfully listed!"),
        || format!("Venue {name} couldn't be listed!"),
    )?;
    Ok(home_page().with_notice(notice))
}

/// `GET /venues/{id}/edit` — Venue form pre-filled with current values.
///
/// # Errors
///
/// Returns [`ListingError::VenueNotFound`] for an unknown id.
#[utoipa::path(
    get,
    path = "/venues/{id}/edit",
    tag = "Venues",
    summary = "Edit venue form",
    params(("id" = i64, Path, description = "Venue id")),
    responses(
        (status = 200, description = "`forms/edit_venue.html` with `venue`"),
        (status = 404, description = "No such venue"),
    )
)]
pub async fn edit_venue(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Page, ListingError> {
    let venue = state.listing_service.venue(VenueId::new(id)).await?;
    Ok(Page::new("forms/edit_venue.html").with("venue", &venue))
}

/// `POST /venues/{id}/edit` — Overwrite the submitted fields.
///
/// Redirects to the venue page with a notice in the `x-notice` header.
///
/// # Errors
///
/// Returns [`ListingError::VenueNotFound`] for an unknown id, or
/// [`ListingError::InvalidForm`] for a blank field.
#[utoipa::path(
    post,
    path = "/venues/{id}/edit",
    tag = "Venues",
    summary = "Update a venue",
    params(("id" = i64, Path, description = "Venue id")),
    responses(
        (status = 303, description = "Redirect to `/venues/{id}`"),
        (status = 400, description = "Form failed validation"),
        (status = 404, description = "No such venue"),
    )
)]
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidForm(pairs): ValidForm<Vec<(String, String)>>,
) -> Result<Response, ListingError> {
    let venue_id = VenueId::new(id);
    let changes = VenueChanges::try_from(&FormFields::from(pairs))?;
    let current = state.listing_service.venue(venue_id).await?;
    let name = changes.name.clone().unwrap_or(current.name);
    let notice = settle(
        state.listing_service.update_venue(venue_id, &changes).await,
        |venue| format!("Venue {} was successfully updated!", venue.name),
        || format!("Venue {name} couldn't be updated!"),
    )?;
    Ok(redirect(&format!("/venues/{venue_id}"), Some(&notice)))
}

/// `DELETE /venues/{id}` — Delete a venue and its shows.
///
/// # Errors
///
/// Returns [`ListingError::VenueNotFound`] for an unknown id.
#[utoipa::path(
    delete,
    path = "/venues/{id}",
    tag = "Venues",
    summary = "Delete a venue",
    description = "Deletes the venue and, by cascade, every show it hosts.",
    params(("id" = i64, Path, description = "Venue id")),
    responses(
        (status = 303, description = "Redirect to `/venues`"),
        (status = 404, description = "No such venue"),
    )
)]
pub async fn delete_venue(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Response, ListingError> {
    let venue_id = VenueId::new(id);
    let name = state.listing_service.venue(venue_id).await?.name;
    let notice = settle(
        state.listing_service.delete_venue(venue_id).await,
        |_| format!("Venue {name} was successfully deleted!"),
        || format!("Venue {name} couldn't be deleted!"),
    )?;
    Ok(redirect("/venues", Some(&notice)))
}

/// Venue routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(venues))
        .route("/venues/search", post(search_venues))
        .route(
            "/venues/create",
            get(create_venue_form).post(create_venue_submission),
        )
        .route("/venues/{id}", get(show_venue).delete(delete_venue))
        .route(
            "/venues/{id}/edit",
            get(edit_venue).post(edit_venue_submission),
        )
}
