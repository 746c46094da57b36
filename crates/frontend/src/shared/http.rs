//! Authenticated JSON calls against the admin API.
//!
//! Every helper takes the `Session` explicitly, attaches the configured auth
//! header(s) and classifies non-2xx responses with `ApiError::from_status`.

use contracts::domain::common::ListEnvelope;
use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::api_url;
use crate::system::auth::session::Session;

#[derive(Debug, Clone, Copy)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

fn builder(session: Session, verb: Verb, path: &str) -> Result<RequestBuilder, ApiError> {
    let url = api_url(path);
    let mut request = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
        Verb::Put => Request::put(&url),
        Verb::Delete => Request::delete(&url),
    };
    for (name, value) in session.auth_headers()? {
        request = request.header(name, &value);
    }
    Ok(request.header("Cache-Control", "no-cache"))
}

async fn check(verb: Verb, path: &str, response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_status(status, &body);
    log::warn!("{:?} {} failed: {}", verb, path, err);
    Err(err)
}

async fn send(request: RequestBuilder, verb: Verb, path: &str) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(|e| {
        log::warn!("{:?} {} network error: {}", verb, path, e);
        ApiError::Network(e.to_string())
    })?;
    check(verb, path, response).await
}

async fn send_json<B: Serialize>(
    session: Session,
    verb: Verb,
    path: &str,
    body: &B,
) -> Result<(), ApiError> {
    let request = builder(session, verb, path)?
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?;
    let response = request.send().await.map_err(|e| {
        log::warn!("{:?} {} network error: {}", verb, path, e);
        ApiError::Network(e.to_string())
    })?;
    check(verb, path, response).await.map(|_| ())
}

/// GET a single JSON document.
pub async fn get_json<T: DeserializeOwned>(session: Session, path: &str) -> Result<T, ApiError> {
    let response = send(builder(session, Verb::Get, path)?, Verb::Get, path).await?;
    response.json::<T>().await.map_err(|e| {
        log::warn!("GET {} decode error: {}", path, e);
        ApiError::Decode(e.to_string())
    })
}

/// GET a collection, bare array or `{"data": [...]}`.
pub async fn get_list<T: DeserializeOwned>(session: Session, path: &str) -> Result<Vec<T>, ApiError> {
    let envelope: ListEnvelope<T> = get_json(session, path).await?;
    Ok(envelope.into_vec())
}

pub async fn post_json<B: Serialize>(session: Session, path: &str, body: &B) -> Result<(), ApiError> {
    send_json(session, Verb::Post, path, body).await
}

pub async fn put_json<B: Serialize>(session: Session, path: &str, body: &B) -> Result<(), ApiError> {
    send_json(session, Verb::Put, path, body).await
}

pub async fn delete(session: Session, path: &str) -> Result<(), ApiError> {
    send(builder(session, Verb::Delete, path)?, Verb::Delete, path)
        .await
        .map(|_| ())
}
