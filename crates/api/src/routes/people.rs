//! Route definitions for the people resources.
//!
//! The same route tables serve `/actors` and `/directors`; the caller
//! attaches the [`PersonKind`](filmcrew_core::people::PersonKind) extension.

use axum::routing::get;
use axum::Router;

use crate::handlers::{people, people_api};
use crate::state::AppState;

/// HTML routes mounted at `/{people}`.
///
/// ```text
/// GET    /                -> index
/// POST   /                -> create
/// GET    /new             -> new_form
/// GET    /{id}            -> show
/// PATCH  /{id}            -> update
/// PUT    /{id}            -> update
/// DELETE /{id}            -> destroy
/// GET    /{id}/edit       -> edit_form
/// ```
pub fn pages() -> Router<AppState> {
    Router::new()
        .route("/", get(people::index).post(people::create))
        .route("/new", get(people::new_form))
        .route(
            "/{id}",
            get(people::show)
                .patch(people::update)
                .put(people::update)
                .delete(people::destroy),
        )
        .route("/{id}/edit", get(people::edit_form))
}

/// JSON routes mounted at `/api/v1/{people}`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// PATCH  /{id}            -> update
/// DELETE /{id}            -> delete
/// ```
pub fn api() -> Router<AppState> {
    Router::new()
        .route("/", get(people_api::list).post(people_api::create))
        .route(
            "/{id}",
            get(people_api::get_by_id)
                .put(people_api::update)
                .patch(people_api::update)
                .delete(people_api::delete),
        )
}
