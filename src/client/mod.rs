//! The repository collaborator: a thin HTTP pass-through to the clinic API.
//!
//! The engine never interprets HTTP semantics; failures arrive here
//! normalized to `ApiError { status, message }` and retries, if any, belong
//! to the caller's infrastructure.
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::booking::model::{Appointment, NewAppointment, Therapy, User};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("api error ({status}): {message}")]
pub struct ApiError {
    /// HTTP status code, or 0 when the request never got a response.
    pub status: u16,
    pub message: String,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            status: err.status().map(|s| s.as_u16()).unwrap_or(0),
            message: err.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Logical contract the engine needs from the remote source of truth.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError>;
    async fn list_user_appointments(&self, email: &str) -> Result<Vec<Appointment>, ApiError>;
    async fn list_therapies(&self) -> Result<Vec<Therapy>, ApiError>;
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
    async fn create_appointment(&self, new: &NewAppointment) -> Result<Appointment, ApiError>;
    async fn patch_note(&self, id: &str, notes: &str) -> Result<(), ApiError>;
    async fn request(&self, id: &str, email: &str) -> Result<(), ApiError>;
    async fn join_group(&self, id: &str, email: &str) -> Result<(), ApiError>;
    async fn leave_group(&self, id: &str, email: &str) -> Result<(), ApiError>;
    async fn request_cancellation(&self, id: &str) -> Result<(), ApiError>;
    async fn assign(&self, id: &str, email: &str) -> Result<(), ApiError>;
    async fn approve(&self, id: &str) -> Result<(), ApiError>;
    async fn approve_cancellation(&self, id: &str) -> Result<(), ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

pub struct HttpAppointmentClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpAppointmentClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn request_for(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "api request");
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send_ok(&self, builder: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body),
            Err(_) => String::new(),
        };
        Err(ApiError {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send_ok(self.request_for(Method::GET, path)).await?;
        Ok(response.json().await?)
    }

    async fn post_action(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<(), ApiError> {
        let mut builder = self.request_for(Method::POST, path);
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        self.send_ok(builder).await?;
        Ok(())
    }
}

#[async_trait]
impl AppointmentRepository for HttpAppointmentClient {
    async fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.get_json("/api/appointments").await
    }

    async fn list_user_appointments(&self, email: &str) -> Result<Vec<Appointment>, ApiError> {
        self.get_json(&format!("/api/appointments/user/{email}")).await
    }

    async fn list_therapies(&self) -> Result<Vec<Therapy>, ApiError> {
        self.get_json("/api/therapies").await
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/api/users").await
    }

    async fn create_appointment(&self, new: &NewAppointment) -> Result<Appointment, ApiError> {
        let builder = self.request_for(Method::POST, "/api/appointments").json(new);
        let response = self.send_ok(builder).await?;
        Ok(response.json().await?)
    }

    async fn patch_note(&self, id: &str, notes: &str) -> Result<(), ApiError> {
        let builder = self
            .request_for(Method::PATCH, &format!("/api/appointments/{id}/notes"))
            .json(&json!({ "notes": notes }));
        self.send_ok(builder).await?;
        Ok(())
    }

    async fn request(&self, id: &str, email: &str) -> Result<(), ApiError> {
        self.post_action(
            &format!("/api/appointments/{id}/request"),
            Some(json!({ "userEmail": email })),
        )
        .await
    }

    async fn join_group(&self, id: &str, email: &str) -> Result<(), ApiError> {
        self.post_action(
            &format!("/api/appointments/{id}/join"),
            Some(json!({ "userEmail": email })),
        )
        .await
    }

    async fn leave_group(&self, id: &str, email: &str) -> Result<(), ApiError> {
        self.post_action(
            &format!("/api/appointments/{id}/leave"),
            Some(json!({ "userEmail": email })),
        )
        .await
    }

    async fn request_cancellation(&self, id: &str) -> Result<(), ApiError> {
        self.post_action(&format!("/api/appointments/{id}/cancellation-request"), None)
            .await
    }

    async fn assign(&self, id: &str, email: &str) -> Result<(), ApiError> {
        self.post_action(
            &format!("/api/appointments/{id}/assign"),
            Some(json!({ "userEmail": email })),
        )
        .await
    }

    async fn approve(&self, id: &str) -> Result<(), ApiError> {
        self.post_action(&format!("/api/appointments/{id}/approve"), None)
            .await
    }

    async fn approve_cancellation(&self, id: &str) -> Result<(), ApiError> {
        self.post_action(&format!("/api/appointments/{id}/approve-cancellation"), None)
            .await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let builder = self.request_for(Method::DELETE, &format!("/api/appointments/{id}"));
        self.send_ok(builder).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn it_lists_appointments() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/appointments")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{
                    "appointmentId": "a1",
                    "therapyId": "t1",
                    "date": "2025-11-10",
                    "startTime": "10:00",
                    "endTime": "10:20",
                    "status": "AVAILABLE"
                }]"#,
            )
            .create_async()
            .await;

        let client = HttpAppointmentClient::new(&server.url(), None);
        let appointments = client.list_appointments().await.unwrap();
        assert_eq!(appointments.len(), 1);
        assert_eq!(appointments[0].appointment_id, "a1");
    }

    #[tokio::test]
    async fn it_sends_the_bearer_token_when_configured() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/appointments")
            .match_header("authorization", "Bearer secreto")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let client = HttpAppointmentClient::new(&server.url(), Some("secreto".to_string()));
        client.list_appointments().await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn it_normalizes_json_error_bodies() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/appointments/a1/approve")
            .with_status(409)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "ya está ocupada"}"#)
            .create_async()
            .await;

        let client = HttpAppointmentClient::new(&server.url(), None);
        let err = client.approve("a1").await.unwrap_err();
        assert_eq!(err.status, 409);
        assert_eq!(err.message, "ya está ocupada");
    }

    #[tokio::test]
    async fn it_keeps_plain_text_error_bodies() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("DELETE", "/api/appointments/a1")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = HttpAppointmentClient::new(&server.url(), None);
        let err = client.delete("a1").await.unwrap_err();
        assert_eq!(err.status, 500);
        assert_eq!(err.message, "boom");
    }

    #[tokio::test]
    async fn user_actions_post_the_user_email() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/appointments/a1/request")
            .match_body(mockito::Matcher::Json(json!({ "userEmail": "ana@example.com" })))
            .with_status(200)
            .create_async()
            .await;

        let client = HttpAppointmentClient::new(&server.url(), None);
        client.request("a1", "ana@example.com").await.unwrap();
        mock.assert_async().await;
    }
}
