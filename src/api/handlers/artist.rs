//! Artist handlers.

use axum::Router;
use axum::extract::State;
use axum::response::Response;
use axum::routing::{get, post};

use super::{home_page, settle};
use crate::api::dto::{FormFields, SearchForm};
use crate::api::extract::{PathId, ValidForm};
use crate::app_state::AppState;
use crate::domain::{ArtistChanges, ArtistDraft, ArtistId};
use crate::error::ListingError;
use crate::view::{Page, redirect};

/// `GET /artists` — Every artist with its upcoming show count.
///
/// # Errors
///
/// Returns [`ListingError::Persistence`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/artists",
    tag = "Artists",
    summary = "List artists",
    responses(
        (status = 200, description = "`pages/artists.html` with `artists`"),
    )
)]
pub async fn artists(State(state): State<AppState>) -> Result<Page, ListingError> {
    let artists = state.listing_service.artists().await?;
    Ok(Page::new("pages/artists.html").with("artists", &artists))
}

/// `POST /artists/search` — Case-insensitive substring search on names.
///
/// # Errors
///
/// Returns [`ListingError::Persistence`] if the store cannot be read.
#[utoipa::path(
    post,
    path = "/artists/search",
    tag = "Artists",
    summary = "Search artists by name",
    request_body(content = SearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "`pages/search_artists.html` with `results` and `search_term`"),
    )
)]
pub async fn search_artists(
    State(state): State<AppState>,
    ValidForm(form): ValidForm<SearchForm>,
) -> Result<Page, ListingError> {
    let results = state
        .listing_service
        .search_artists(&form.search_term)
        .await?;
    Ok(Page::new("pages/search_artists.html")
        .with("results", &results)
        .with("search_term", &form.search_term))
}

/// `GET /artists/{id}` — Artist page split into past and upcoming shows.
///
/// # Errors
///
/// Returns [`ListingError::ArtistNotFound`] for an unknown id.
#[utoipa::path(
    get,
    path = "/artists/{id}",
    tag = "Artists",
    summary = "Show an artist",
    params(("id" = i64, Path, description = "Artist id")),
    responses(
        (status = 200, description = "`pages/show_artist.html` with `artist`"),
        (status = 404, description = "No such artist"),
    )
)]
pub async fn show_artist(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Page, ListingError> {
    let detail = state
        .listing_service
        .artist_detail(ArtistId::new(id))
        .await?;
    Ok(Page::new("pages/show_artist.html").with("artist", &detail))
}

/// `GET /artists/create`
#[utoipa::path(
    get,
    path = "/artists/create",
    tag = "Artists",
    summary = "New artist form",
    responses((status = 200, description = "`forms/new_artist.html`"))
)]
pub async fn create_artist_form() -> Page {
    Page::new("forms/new_artist.html")
}

/// `POST /artists/create` — Persist a new artist and render the home page
/// with the outcome.
///
/// # Errors
///
/// Returns [`ListingError::InvalidForm`] if a required field is missing.
#[utoipa::path(
    post,
    path = "/artists/create",
    tag = "Artists",
    summary = "Create an artist",
    responses(
        (status = 200, description = "`pages/home.html` with a notice"),
        (status = 400, description = "Form failed validation"),
    )
)]
pub async fn create_artist_submission(
    State(state): State<AppState>,
    ValidForm(pairs): ValidForm<Vec<(String, String)>>,
) -> Result<Page, ListingError> {
    let draft = ArtistDraft::try_from(&FormFields::from(pairs))?;
    let name = draft.name.clone();
    let notice = settle(
        state.listing_service.create_artist(draft).await,
        |_| format!("Artist {name} was successfully listed!"),
        || format!("Artist {name} couldn't be listed!"),
    )?;
    Ok(home_page().with_notice(notice))
}

/// `GET /artists/{id}/edit`
///
/// # Errors
///
/// Returns [`ListingError::ArtistNotFound`] for an unknown id.
#[utoipa::path(
    get,
    path = "/artists/{id}/edit",
    tag = "Artists",
    summary = "Edit artist form",
    params(("id" = i64, Path, description = "Artist id")),
    responses(
        (status = 200, description = "`forms/edit_artist.html` with `artist`"),
        (status = 404, description = "No such artist"),
    )
)]
pub async fn edit_artist(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Page, ListingError> {
    let artist = state.listing_service.artist(ArtistId::new(id)).await?;
    Ok(Page::new("forms/edit_artist.html").with("artist", &artist))
}

/// `POST /artists/{id}/edit` — Apply the submitted fields, then redirect
/// to the artist page.
///
/// # Errors
///
/// Returns [`ListingError::ArtistNotFound`] for an unknown id, or
/// [`ListingError::InvalidForm`] for a blank field.
#[utoipa::path(
    post,
    path = "/artists/{id}/edit",
    tag = "Artists",
    summary = "Update an artist",
    params(("id" = i64, Path, description = "Artist id")),
    responses(
        (status = 303, description = "Redirect to `/artists/{id}`"),
        (status = 400, description = "Form failed validation"),
        (status = 404, description = "No such artist"),
    )
)]
pub async fn edit_artist_submission(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidForm(pairs): ValidForm<Vec<(String, String)>>,
) -> Result<Response, ListingError> {
    let artist_id = ArtistId::new(id);
    let changes = ArtistChanges::try_from(&FormFields::from(pairs))?;
    let current = state.listing_service.artist(artist_id).await?;
    let name = changes.name.clone().unwrap_or(current.name);
    let notice = settle(
        state.listing_service.update_artist(artist_id, &changes).await,
        |artist| format!("Artist {} was successfully updated!", artist.name),
        || format!("Artist {name} couldn't be updated!"),
    )?;
    Ok(redirect(&format!("/artists/{artist_id}"), Some(&notice)))
}

/// `DELETE /artists/{id}` — Removes the artist together with its shows.
///
/// # Errors
///
/// Returns [`ListingError::ArtistNotFound`] for an unknown id.
#[utoipa::path(
    delete,
    path = "/artists/{id}",
    tag = "Artists",
    summary = "Delete an artist",
    params(("id" = i64, Path, description = "Artist id")),
    responses(
        (status = 303, description = "Redirect to `/artists`"),
        (status = 404, description = "No such artist"),
    )
)]
pub async fn delete_artist(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Response, ListingError> {
    let artist_id = ArtistId::new(id);
    let name = state.listing_service.artist(artist_id).await?.name;
    let notice = settle(
        state.listing_service.delete_artist(artist_id).await,
        |_| format!("Artist {name} was successfully deleted!"),
        || format!("Artist {name} couldn't be deleted!"),
    )?;
    Ok(redirect("/artists", Some(&notice)))
}

/// Artist routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(artists))
        .route("/artists/search", post(search_artists))
        .route(
            "/artists/create",
            get(create_artist_form).post(create_artist_submission),
        )
        .route("/artists/{id}", get(show_artist).delete(delete_artist))
        .route(
            "/artists/{id}/edit",
            get(edit_artist).post(edit_artist_submission),
        )
}
