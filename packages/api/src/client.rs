//! # REST client for the `/users` resource
//!
//! [`UsersApi`] is a thin wrapper over [`reqwest::Client`] for a json-server style
//! backend:
//!
//! | Method | Request | Success |
//! |--------|---------|---------|
//! | [`list_users`](UsersApi::list_users) | `GET /users` | 200 |
//! | [`get_user`](UsersApi::get_user) | `GET /users/:id` | 200 |
//! | [`create_user`](UsersApi::create_user) | `POST /users` | 200 or 201 |
//! | [`replace_user`](UsersApi::replace_user) | `PUT /users/:id` | 200 |
//!
//! Every call takes the caller's [`Session`]; when it carries a token the request
//! is sent with `Authorization: Bearer <token>`. Any other status is reported as
//! [`AccountError::UnexpectedStatus`].

use reqwest::{RequestBuilder, Response, StatusCode};

use crate::error::AccountError;
use crate::models::{User, UserPayload};

/// Credentials attached to outgoing requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.token.is_none()
    }

    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Client for the `/users` endpoints.
#[derive(Clone, Debug)]
pub struct UsersApi {
    http: reqwest::Client,
    base_uri: String,
}

impl UsersApi {
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_uri)
    }

    pub fn with_client(http: reqwest::Client, base_uri: impl Into<String>) -> Self {
        Self {
            http,
            base_uri: base_uri.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_uri)
    }

    fn user_url(&self, id: &str) -> String {
        format!("{}/users/{}", self.base_uri, id)
    }

    pub async fn list_users(&self, session: &Session) -> Result<Vec<User>, AccountError> {
        let response = session.apply(self.http.get(self.users_url())).send().await?;
        let response = expect_status(response, "GET /users", &[StatusCode::OK])?;
        Ok(response.json().await?)
    }

    pub async fn get_user(&self, session: &Session, id: &str) -> Result<User, AccountError> {
        let response = session.apply(self.http.get(self.user_url(id))).send().await?;
        let response = expect_status(response, "GET /users/:id", &[StatusCode::OK])?;
        Ok(response.json().await?)
    }

    pub async fn create_user(&self, session: &Session, user: &User) -> Result<(), AccountError> {
        let response = session
            .apply(self.http.post(self.users_url()).json(user))
            .send()
            .await?;
        expect_status(
            response,
            "POST /users",
            &[StatusCode::OK, StatusCode::CREATED],
        )?;
        Ok(())
    }

    pub async fn replace_user(
        &self,
        session: &Session,
        id: &str,
        payload: &UserPayload,
    ) -> Result<(), AccountError> {
        let response = session
            .apply(self.http.put(self.user_url(id)).json(payload))
            .send()
            .await?;
        expect_status(response, "PUT /users/:id", &[StatusCode::OK])?;
        Ok(())
    }
}

fn expect_status(
    response: Response,
    operation: &'static str,
    accepted: &[StatusCode],
) -> Result<Response, AccountError> {
    let status = response.status();
    if accepted.contains(&status) {
        Ok(response)
    } else {
        tracing::warn!("{} failed with status {}", operation, status);
        Err(AccountError::UnexpectedStatus {
            operation,
            status: status.as_u16(),
        })
    }
}
