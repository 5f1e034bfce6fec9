//! JSON handlers for `/api/v1/actors` and `/api/v1/directors`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use filmcrew_core::error::CoreError;
use filmcrew_core::people::PersonKind;
use filmcrew_core::types::DbId;
use filmcrew_core::validation::{into_core_error, PersonFields};
use filmcrew_db::models::person::{CreatePerson, Person, UpdatePerson};
use filmcrew_db::repositories::PersonRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, PersonId};
use crate::forms::PersonPayload;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(kind: PersonKind, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: kind.singular(),
        id,
    })
}

fn validate(state: &AppState, payload: &PersonPayload) -> AppResult<PersonFields> {
    payload
        .validate(&state.config.field_rules)
        .map_err(|errors| AppError::Core(into_core_error(&errors)))
}

/// POST /api/v1/{people}
pub async fn create(
    Extension(kind): Extension<PersonKind>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<PersonPayload>,
) -> AppResult<(StatusCode, Json<DataResponse<Person>>)> {
    let fields = validate(&state, &payload)?;

    let person = PersonRepo::create(&state.pool, kind, &CreatePerson::from(fields)).await?;
    tracing::info!(kind = kind.table(), id = person.id, "Person created via API");
    Ok((StatusCode::CREATED, Json(DataResponse { data: person })))
}

/// GET /api/v1/{people}
pub async fn list(
    Extension(kind): Extension<PersonKind>,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Person>>>> {
    let people = PersonRepo::list(&state.pool, kind).await?;
    Ok(Json(DataResponse { data: people }))
}

/// GET /api/v1/{people}/{id}
pub async fn get_by_id(
    Extension(kind): Extension<PersonKind>,
    State(state): State<AppState>,
    PersonId(id): PersonId,
) -> AppResult<Json<DataResponse<Person>>> {
    let person = PersonRepo::find_by_id(&state.pool, kind, id)
        .await?
        .ok_or_else(|| not_found(kind, id))?;
    Ok(Json(DataResponse { data: person }))
}

/// PUT|PATCH /api/v1/{people}/{id}
pub async fn update(
    Extension(kind): Extension<PersonKind>,
    State(state): State<AppState>,
    PersonId(id): PersonId,
    ApiJson(payload): ApiJson<PersonPayload>,
) -> AppResult<Json<DataResponse<Person>>> {
    let fields = validate(&state, &payload)?;

    let person = PersonRepo::update(&state.pool, kind, id, &UpdatePerson::from(fields))
        .await?
        .ok_or_else(|| not_found(kind, id))?;
    tracing::info!(kind = kind.table(), id, "Person updated via API");
    Ok(Json(DataResponse { data: person }))
}

/// DELETE /api/v1/{people}/{id}
pub async fn delete(
    Extension(kind): Extension<PersonKind>,
    State(state): State<AppState>,
    PersonId(id): PersonId,
) -> AppResult<StatusCode> {
    if PersonRepo::delete(&state.pool, kind, id).await? {
        tracing::info!(kind = kind.table(), id, "Person deleted via API");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(kind, id))
    }
}
