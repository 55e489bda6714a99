//! JSON-over-HTTP helpers for the REST service.
//!
//! Every helper returns [`AppError`]: reads fail as `Fetch`, writes as
//! `Mutation`. A non-2xx response is described by its `error` field when the
//! body has one, otherwise by the HTTP status.

use contracts::shared::api::{ApiEnvelope, ApiErrorBody, ListEnvelope, MutationAck};
use contracts::shared::error::AppError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::AppConfig;
use crate::system::auth::storage::stored_session;

/// Base URL of the REST service, e.g. `http://localhost:5000`.
pub fn api_base() -> String {
    AppConfig::from_env().api_base
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `<base>/<id>` with the identity percent-encoded.
pub fn entity_path(base: &str, id: &str) -> String {
    format!("{}/{}", base, urlencoding::encode(id))
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match stored_session() {
        Some(session) => builder.header("Authorization", &session.authorization_header()),
        None => builder,
    }
}

pub(crate) fn describe_failure(status: u16, body: Option<ApiErrorBody>) -> String {
    match body {
        Some(body) if !body.error.trim().is_empty() => body.error,
        _ => format!("Request failed with status {}", status),
    }
}

async fn check(response: Response, kind: fn(String) -> AppError) -> Result<Response, AppError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.json::<ApiErrorBody>().await.ok();
    Err(kind(describe_failure(status, body)))
}

async fn send(builder: RequestBuilder, kind: fn(String) -> AppError) -> Result<Response, AppError> {
    let response = builder
        .send()
        .await
        .map_err(|e| kind(format!("Failed to send request: {}", e)))?;
    check(response, kind).await
}

async fn send_json<B: Serialize>(
    builder: RequestBuilder,
    body: &B,
    kind: fn(String) -> AppError,
) -> Result<Response, AppError> {
    let request = builder
        .json(body)
        .map_err(|e| kind(format!("Failed to serialize request: {}", e)))?;
    let response = request
        .send()
        .await
        .map_err(|e| kind(format!("Failed to send request: {}", e)))?;
    check(response, kind).await
}

async fn decode<T: DeserializeOwned>(
    response: Response,
    kind: fn(String) -> AppError,
) -> Result<T, AppError> {
    response
        .json::<T>()
        .await
        .map_err(|e| kind(format!("Failed to parse response: {}", e)))
}

/// `GET <path>` answering `{ data: [..] }`.
pub async fn get_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, AppError> {
    let response = send(authorized(Request::get(&api_url(path))), AppError::Fetch).await?;
    let envelope: ListEnvelope<T> = decode(response, AppError::Fetch).await?;
    Ok(envelope.into_items())
}

/// `GET <path>` answering `{ data: T }`.
pub async fn get_data<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let response = send(authorized(Request::get(&api_url(path))), AppError::Fetch).await?;
    let envelope: ApiEnvelope<T> = decode(response, AppError::Fetch).await?;
    Ok(envelope.data)
}

pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<MutationAck, AppError> {
    let builder = authorized(Request::post(&api_url(path)));
    let response = send_json(builder, body, AppError::Mutation).await?;
    Ok(decode(response, AppError::Mutation).await.unwrap_or_default())
}

/// `POST <path>` answering `{ data: T }`.
pub async fn post_for_data<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let builder = authorized(Request::post(&api_url(path)));
    let response = send_json(builder, body, AppError::Mutation).await?;
    let envelope: ApiEnvelope<T> = decode(response, AppError::Mutation).await?;
    Ok(envelope.data)
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<MutationAck, AppError> {
    let builder = authorized(Request::put(&api_url(path)));
    let response = send_json(builder, body, AppError::Mutation).await?;
    Ok(decode(response, AppError::Mutation).await.unwrap_or_default())
}

pub async fn delete(path: &str) -> Result<MutationAck, AppError> {
    let response = send(authorized(Request::delete(&api_url(path))), AppError::Mutation).await?;
    Ok(decode(response, AppError::Mutation).await.unwrap_or_default())
}

/// `POST <path>` without a stored session, for the login form.
pub async fn post_unauthenticated<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    kind: fn(String) -> AppError,
) -> Result<T, AppError> {
    let response = send_json(Request::post(&api_url(path)), body, kind).await?;
    decode(response, kind).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identities_are_percent_encoded() {
        assert_eq!(entity_path("/api/sales", "S-1"), "/api/sales/S-1");
        assert_eq!(entity_path("/api/sales", "A 1/2"), "/api/sales/A%201%2F2");
    }

    #[test]
    fn server_error_text_is_preferred() {
        let body = ApiErrorBody {
            error: "Sale not found".into(),
        };
        assert_eq!(describe_failure(404, Some(body)), "Sale not found");
        assert_eq!(describe_failure(500, None), "Request failed with status 500");
        let blank = ApiErrorBody { error: " ".into() };
        assert_eq!(describe_failure(502, Some(blank)), "Request failed with status 502");
    }
}
