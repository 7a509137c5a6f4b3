//! # User models
//!
//! Two representations of a ledger user:
//!
//! ## [`User`]
//!
//! The complete record as the `/users` endpoint serves it. The backend owns it and
//! stores every field as-is, including the plaintext `password`:
//!
//! - `id`: string identifier (new accounts use the creation time in epoch millis).
//! - `email`, `name`, `profile_image`: profile fields.
//! - `status`: [`UserStatus::Active`] or [`UserStatus::Deactivated`]; deactivated
//!   accounts cannot sign in.
//! - `role`: [`UserRole::User`] or [`UserRole::Admin`].
//! - `created_at` / `updated_at`: date strings, `updated_at` is `null` until the
//!   first edit.
//!
//! ## [`CurrentUser`]
//!
//! The signed-in projection kept on the client and persisted under the
//! `userInfo` storage key. It omits the password and timestamps and always carries
//! `authenticated: true`. Build one with [`User::to_current`].
//!
//! [`UserPayload`] is the body of a `PUT /users/:id`: every field except the id,
//! which travels in the URL.

use serde::{Deserialize, Serialize};

/// Account status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Deactivated,
}

/// Account role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

/// Full user record from the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub profile_image: String,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl User {
    /// Project into the signed-in session view.
    pub fn to_current(&self) -> CurrentUser {
        CurrentUser {
            authenticated: true,
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
            profile_image: self.profile_image.clone(),
        }
    }

    pub fn is_deactivated(&self) -> bool {
        self.status == UserStatus::Deactivated
    }

    /// Rebuild a record from its id and an update body.
    pub fn from_payload(id: impl Into<String>, payload: UserPayload) -> Self {
        Self {
            id: id.into(),
            email: payload.email,
            password: payload.password,
            name: payload.name,
            profile_image: payload.profile_image,
            status: payload.status,
            role: payload.role,
            created_at: Some(payload.created_at),
            updated_at: Some(payload.updated_at),
        }
    }
}

/// Body of a full user update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub email: String,
    pub password: String,
    pub name: String,
    pub profile_image: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// Signed-in user persisted on the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub authenticated: bool,
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    #[serde(default)]
    pub profile_image: String,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Get display name, falling back to email if name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}
