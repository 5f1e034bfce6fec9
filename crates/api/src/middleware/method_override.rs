//! HTTP method override for HTML forms.
//!
//! Browsers only submit forms as `GET` or `POST`. A url-encoded `POST`
//! carrying `_method=patch|put|delete` is re-dispatched with that method.
//! The layer must wrap the router from the outside, since routing has
//! already happened by the time a `Router::layer` middleware runs.

use axum::body::{Body, Bytes};
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, Method};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Form;
use serde::Deserialize;

use crate::error::AppError;

/// Largest form body buffered while looking for `_method`.
pub const MAX_FORM_BYTES: usize = 2 * 1024 * 1024;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Deserialize)]
struct MethodField {
    #[serde(rename = "_method")]
    method: Option<String>,
}

/// Middleware entrypoint, for use with [`axum::middleware::from_fn`].
pub async fn method_override(req: Request, next: Next) -> Response {
    if req.method() != Method::POST || !is_form(req.headers()) {
        return next.run(req).await;
    }

    let (parts, body) = req.into_parts();
    let bytes = match axum::body::to_bytes(body, MAX_FORM_BYTES).await {
        Ok(bytes) => bytes,
        Err(err) => {
            return AppError::BadRequest(format!("Unreadable form body: {err}")).into_response()
        }
    };

    let override_to = match requested_method(&bytes).await {
        Ok(method) => method,
        Err(err) => return err.into_response(),
    };

    let mut req = Request::from_parts(parts, Body::from(bytes));
    if let Some(method) = override_to {
        tracing::debug!(%method, uri = %req.uri(), "Applying form method override");
        *req.method_mut() = method;
    }
    next.run(req).await
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with(FORM_CONTENT_TYPE))
}

/// Read `_method` from a buffered form body.
///
/// Bodies that fail to parse are passed through untouched so the target
/// handler reports the problem.
async fn requested_method(body: &Bytes) -> Result<Option<Method>, AppError> {
    let mut probe = Request::new(Body::from(body.clone()));
    *probe.method_mut() = Method::POST;
    probe
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));

    let Ok(Form(field)) = Form::<MethodField>::from_request(probe, &()).await else {
        return Ok(None);
    };

    match field.method.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None | Some("") | Some("post") => Ok(None),
        Some("patch") => Ok(Some(Method::PATCH)),
        Some("put") => Ok(Some(Method::PUT)),
        Some("delete") => Ok(Some(Method::DELETE)),
        Some(other) => Err(AppError::BadRequest(format!(
            "Unsupported _method override: {other}"
        ))),
    }
}
