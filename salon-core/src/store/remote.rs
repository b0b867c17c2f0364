//! HTTP client for the remote booking API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::EventStore;
use crate::error::{SalonError, SalonResult};
use crate::event::{Event, EventData};
use crate::validate::FieldError;

/// Client for the booking API. Stateless apart from the base URL and the
/// optional bearer token; every operation is one round trip.
pub struct RemoteStore {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

/// `PUT /events` body: the updated fields plus the id of the target.
#[derive(Serialize)]
struct UpdateEventBody<'a> {
    id: &'a str,
    #[serde(flatten)]
    data: &'a EventData,
}

/// 4xx body shape carrying field-scoped messages.
#[derive(Deserialize)]
struct FieldErrorBody {
    errors: BTreeMap<String, Vec<String>>,
}

impl RemoteStore {
    pub fn new(base_url: String, token: Option<String>) -> RemoteStore {
        RemoteStore {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token when one is configured. Its absence is not
    /// an error here; an unauthenticated request is sent and the server's
    /// 401 is the signal.
    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check(response: reqwest::Response) -> SalonResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(SalonError::Unauthorized);
        }

        let body = response.text().await.unwrap_or_default();
        Err(error_from_body(status.as_u16(), &body))
    }
}

/// Normalize a non-success response into the store error taxonomy: a body
/// carrying `{"errors": {field: [messages]}}` unwraps into field-scoped
/// errors (first message per field); anything else stays opaque.
fn error_from_body(status: u16, body: &str) -> SalonError {
    if let Ok(parsed) = serde_json::from_str::<FieldErrorBody>(body) {
        let fields: Vec<FieldError> = parsed
            .errors
            .into_iter()
            .filter_map(|(field, mut messages)| {
                if messages.is_empty() {
                    None
                } else {
                    Some(FieldError::new(field, messages.remove(0)))
                }
            })
            .collect();

        if !fields.is_empty() {
            return SalonError::Validation(fields);
        }
    }

    SalonError::Store(format!("HTTP {status}"))
}

fn transport(err: reqwest::Error) -> SalonError {
    SalonError::Store(err.to_string())
}

impl EventStore for RemoteStore {
    /// GET /events
    async fn list(&self) -> SalonResult<Vec<Event>> {
        let response = self
            .authorized(self.http.get(self.url("/events")))
            .send()
            .await
            .map_err(transport)?;

        Self::check(response).await?.json().await.map_err(transport)
    }

    /// GET /events/{id}
    async fn get(&self, id: &str) -> SalonResult<Event> {
        let response = self
            .authorized(self.http.get(self.url(&format!("/events/{id}"))))
            .send()
            .await
            .map_err(transport)?;

        Self::check(response).await?.json().await.map_err(transport)
    }

    /// POST /events
    async fn create(&self, data: &EventData) -> SalonResult<Event> {
        let response = self
            .authorized(self.http.post(self.url("/events")))
            .json(data)
            .send()
            .await
            .map_err(transport)?;

        Self::check(response).await?.json().await.map_err(transport)
    }

    /// PUT /events (id travels in the body)
    async fn update(&self, id: &str, data: &EventData) -> SalonResult<Event> {
        let response = self
            .authorized(self.http.put(self.url("/events")))
            .json(&UpdateEventBody { id, data })
            .send()
            .await
            .map_err(transport)?;

        Self::check(response).await?.json().await.map_err(transport)
    }

    /// DELETE /events/{id}
    async fn delete(&self, id: &str) -> SalonResult<()> {
        let response = self
            .authorized(self.http.delete(self.url(&format!("/events/{id}"))))
            .send()
            .await
            .map_err(transport)?;

        Self::check(response).await?;
        Ok(())
    }
}
