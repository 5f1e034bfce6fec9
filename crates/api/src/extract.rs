//! Extractors that report rejections through [`AppError`] / [`PageError`]
//! instead of axum's plain-text defaults.

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;
use filmcrew_core::people::PersonKind;
use filmcrew_core::types::DbId;

use crate::error::{AppError, PageError};

/// `Json<T>` whose malformed bodies become a JSON `BAD_REQUEST`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// The `{id}` route segment of a people resource.
///
/// A segment that is not an integer cannot name a record, so it is
/// reported as not found rather than as a malformed request.
#[derive(Debug, Clone, Copy)]
pub struct PersonId(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for PersonId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        raw.parse().map(PersonId).map_err(|_| {
            let entity = parts
                .extensions
                .get::<PersonKind>()
                .map_or("Record", |kind| kind.singular());
            AppError::NotFound(format!("{entity} with id {raw} not found"))
        })
    }
}

/// [`PersonId`] for page handlers: rejections render the HTML error page.
#[derive(Debug, Clone, Copy)]
pub struct PagePersonId(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for PagePersonId {
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let PersonId(id) = PersonId::from_request_parts(parts, state).await?;
        Ok(PagePersonId(id))
    }
}
