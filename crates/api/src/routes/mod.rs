pub mod health;
pub mod people;

use axum::response::Redirect;
use axum::routing::get;
use axum::{Extension, Router};
use filmcrew_core::people::PersonKind;

use crate::state::AppState;

/// Build the browser-facing route tree.
///
/// ```text
/// /                     redirect to /directors
/// /actors/...           actor pages
/// /directors/...        director pages
/// ```
pub fn page_routes() -> Router<AppState> {
    let mut router = Router::new().route(
        "/",
        get(|| async { Redirect::to(&PersonKind::Director.collection_path()) }),
    );
    for kind in PersonKind::ALL {
        router = router.nest(
            &kind.collection_path(),
            people::pages().layer(Extension(kind)),
        );
    }
    router
}

/// Build the `/api/v1` route tree.
///
/// ```text
/// /actors               list, create
/// /actors/{id}          get, update, delete
/// /directors            list, create
/// /directors/{id}       get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    let mut router = Router::new();
    for kind in PersonKind::ALL {
        router = router.nest(
            &kind.collection_path(),
            people::api().layer(Extension(kind)),
        );
    }
    router
}
