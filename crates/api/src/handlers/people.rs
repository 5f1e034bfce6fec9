//! Page handlers for the `/actors` and `/directors` resources.
//!
//! The resource is picked by the [`PersonKind`] extension that
//! `routes::people::pages` attaches to each nested router.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Extension, Form};
use filmcrew_core::error::CoreError;
use filmcrew_core::people::{Notice, PersonKind};
use filmcrew_core::types::DbId;
use filmcrew_db::models::person::{CreatePerson, Person, UpdatePerson};
use filmcrew_db::repositories::PersonRepo;

use crate::error::PageResult;
use crate::extract::PagePersonId;
use crate::forms::PersonForm;
use crate::query::NoticeParams;
use crate::state::AppState;
use crate::views;

fn not_found(kind: PersonKind, id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: kind.singular(),
        id,
    }
}

async fn ensure_person_exists(state: &AppState, kind: PersonKind, id: DbId) -> PageResult<Person> {
    let person = PersonRepo::find_by_id(&state.pool, kind, id)
        .await?
        .ok_or_else(|| not_found(kind, id))?;
    Ok(person)
}

/// GET /{people}
pub async fn index(
    Extension(kind): Extension<PersonKind>,
    State(state): State<AppState>,
    Query(params): Query<NoticeParams>,
) -> PageResult<Html<String>> {
    let people = PersonRepo::list(&state.pool, kind).await?;
    let message = params.notice.map(|n| n.message(kind));
    Ok(Html(views::people::index(kind, &people, message.as_deref())))
}

/// GET /{people}/{id}
pub async fn show(
    Extension(kind): Extension<PersonKind>,
    State(state): State<AppState>,
    PagePersonId(id): PagePersonId,
    Query(params): Query<NoticeParams>,
) -> PageResult<Html<String>> {
    let person = ensure_person_exists(&state, kind, id).await?;
    let message = params.notice.map(|n| n.message(kind));
    Ok(Html(views::people::show(kind, &person, message.as_deref())))
}

/// GET /{people}/new
pub async fn new_form(Extension(kind): Extension<PersonKind>) -> Html<String> {
    Html(views::people::new_page(kind, &PersonForm::default(), &[]))
}

/// GET /{people}/{id}/edit
pub async fn edit_form(
    Extension(kind): Extension<PersonKind>,
    State(state): State<AppState>,
    PagePersonId(id): PagePersonId,
) -> PageResult<Html<String>> {
    let person = ensure_person_exists(&state, kind, id).await?;
    let form = PersonForm::from_person(&person);
    Ok(Html(views::people::edit_page(kind, person.id, &form, &[])))
}

/// POST /{people}
///
/// Redirects to the new record on success; re-renders the form with 422
/// when any field is rejected.
pub async fn create(
    Extension(kind): Extension<PersonKind>,
    State(state): State<AppState>,
    Form(form): Form<PersonForm>,
) -> PageResult<Response> {
    let fields = match form.validate(&state.config.field_rules) {
        Ok(fields) => fields,
        Err(errors) => {
            tracing::debug!(kind = kind.table(), error_count = errors.len(), "Create rejected");
            let html = views::people::new_page(kind, &form, &errors);
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
        }
    };

    let person = PersonRepo::create(&state.pool, kind, &CreatePerson::from(fields)).await?;
    tracing::info!(kind = kind.table(), id = person.id, "Person created");

    let target = Notice::Created.redirect_target(&kind.member_path(person.id));
    Ok(Redirect::to(&target).into_response())
}

/// PATCH|PUT /{people}/{id}
pub async fn update(
    Extension(kind): Extension<PersonKind>,
    State(state): State<AppState>,
    PagePersonId(id): PagePersonId,
    Form(form): Form<PersonForm>,
) -> PageResult<Response> {
    let fields = match form.validate(&state.config.field_rules) {
        Ok(fields) => fields,
        Err(errors) => {
            ensure_person_exists(&state, kind, id).await?;
            tracing::debug!(kind = kind.table(), id, error_count = errors.len(), "Update rejected");
            let html = views::people::edit_page(kind, id, &form, &errors);
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
        }
    };

    let person = PersonRepo::update(&state.pool, kind, id, &UpdatePerson::from(fields))
        .await?
        .ok_or_else(|| not_found(kind, id))?;
    tracing::info!(kind = kind.table(), id = person.id, "Person updated");

    let target = Notice::Updated.redirect_target(&kind.member_path(person.id));
    Ok(Redirect::to(&target).into_response())
}

/// DELETE /{people}/{id}
pub async fn destroy(
    Extension(kind): Extension<PersonKind>,
    State(state): State<AppState>,
    PagePersonId(id): PagePersonId,
) -> PageResult<Redirect> {
    if !PersonRepo::delete(&state.pool, kind, id).await? {
        return Err(not_found(kind, id).into());
    }
    tracing::info!(kind = kind.table(), id, "Person destroyed");

    let target = Notice::Destroyed.redirect_target(&kind.collection_path());
    Ok(Redirect::to(&target))
}
