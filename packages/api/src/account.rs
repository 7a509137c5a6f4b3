//! # Account store: registration, login, profile edits, logout
//!
//! [`UsersStore`] owns the client's view of user accounts:
//!
//! - a cache of every user record (filled by [`fetch_users`](UsersStore::fetch_users)),
//! - the signed-in [`CurrentUser`], persisted in a [`KeyValueStore`] under the
//!   configured key (`userInfo` by default) so a reload keeps the session,
//! - the request [`Session`] carrying the bearer token issued at login.
//!
//! Each operation runs its guard checks in a fixed order, stops at the first
//! failure with a [`ValidationError`], and otherwise makes one backend call and
//! updates local state. Clones share state; the internal lock is never held across
//! an `.await`.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use store::{ClientConfig, JsonStoreExt, KeyValueStore};

use crate::client::{Session, UsersApi};
use crate::dates::{current_date_string, current_timestamp_string};
use crate::error::{AccountError, ValidationError};
use crate::models::{CurrentUser, User, UserPayload, UserRole, UserStatus};
use crate::token;
use crate::validators::{is_empty, is_valid_email, is_valid_password, is_valid_password_chk};

/// Sign-up form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password1: String,
    pub password2: String,
}

/// Sign-in form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Profile edit. Blank fields keep the stored value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateForm {
    pub id: String,
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub profile_image: Option<String>,
}

#[derive(Debug, Default)]
struct AccountState {
    users: Vec<User>,
    current_user: Option<CurrentUser>,
    session: Session,
}

/// Client-side account store over a [`UsersApi`] and a [`KeyValueStore`].
#[derive(Clone)]
pub struct UsersStore<S> {
    api: UsersApi,
    storage: S,
    config: Arc<ClientConfig>,
    state: Arc<Mutex<AccountState>>,
}

impl<S: KeyValueStore> UsersStore<S> {
    pub fn new(config: ClientConfig, storage: S) -> Self {
        let api = UsersApi::new(config.api.base_uri.clone());
        Self::with_api(api, config, storage)
    }

    pub fn with_api(api: UsersApi, config: ClientConfig, storage: S) -> Self {
        let store = Self {
            api,
            storage,
            config: Arc::new(config),
            state: Arc::new(Mutex::new(AccountState::default())),
        };
        let persisted = store.get_user_info_local_storage();
        store.state().current_user = persisted;
        store
    }

    fn state(&self) -> MutexGuard<'_, AccountState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Snapshot of the cached user list.
    pub fn users(&self) -> Vec<User> {
        self.state().users.clone()
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        self.state().current_user.clone()
    }

    pub fn session(&self) -> Session {
        self.state().session.clone()
    }

    /// Whether a signed-in user is persisted. This is what route guards consult.
    pub fn is_authenticated(&self) -> bool {
        self.get_user_info_local_storage().is_some()
    }

    /// Read the persisted signed-in user. Storage failures read as signed out.
    pub fn get_user_info_local_storage(&self) -> Option<CurrentUser> {
        match self
            .storage
            .get_json::<CurrentUser>(&self.config.session.storage_key)
        {
            Ok(user) => {
                tracing::debug!("stored userInfo: {:?}", user);
                user
            }
            Err(e) => {
                tracing::error!("Failed to read userInfo from storage: {}", e);
                None
            }
        }
    }

    /// Persist the signed-in user. Failures are logged, not returned.
    pub fn set_user_info_local_storage(&self, user: &CurrentUser) {
        match self
            .storage
            .set_json(&self.config.session.storage_key, user)
        {
            Ok(()) => tracing::debug!("saved userInfo for {}", user.id),
            Err(e) => tracing::error!("Failed to save userInfo to storage: {}", e),
        }
    }

    /// Load every user and replace the cache.
    pub async fn fetch_users(&self) -> Result<Vec<User>, AccountError> {
        let session = self.session();
        match self.api.list_users(&session).await {
            Ok(users) => {
                self.state().users = users.clone();
                Ok(users)
            }
            Err(e) => {
                tracing::error!("Failed to fetch users: {}", e);
                Err(e)
            }
        }
    }

    /// Load every user, but only for a signed-in admin. Anyone else gets an
    /// empty list and no request is made.
    pub async fn fetch_users_as_admin(&self) -> Result<Vec<User>, AccountError> {
        let is_admin = self
            .current_user()
            .map(|user| user.is_admin())
            .unwrap_or(false);
        if !is_admin {
            tracing::warn!("user list requested without admin role");
            return Ok(Vec::new());
        }
        self.fetch_users().await
    }

    /// Load one user by id.
    pub async fn get_user_info_by_id(&self, id: &str) -> Result<User, AccountError> {
        let session = self.session();
        match self.api.get_user(&session, id).await {
            Ok(user) => {
                tracing::debug!("user {} loaded", user.id);
                Ok(user)
            }
            Err(e) => {
                tracing::error!("Failed to fetch user {}: {}", id, e);
                Err(e)
            }
        }
    }

    async fn ensure_users_loaded(&self) -> Result<(), AccountError> {
        if self.state().users.is_empty() {
            tracing::debug!("user cache empty, fetching");
            self.fetch_users().await?;
        }
        Ok(())
    }

    /// Create a new account after validating the form.
    pub async fn register_user(&self, form: RegisterForm) -> Result<User, AccountError> {
        let RegisterForm {
            name,
            email,
            password1,
            password2,
        } = form;

        if is_empty(name.as_str()) {
            return Err(ValidationError::EmptyName.into());
        }
        if is_empty(email.as_str()) {
            return Err(ValidationError::EmptyEmail.into());
        }
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        self.ensure_users_loaded().await?;
        if self.state().users.iter().any(|u| u.email == email) {
            return Err(ValidationError::DuplicateEmail.into());
        }
        if is_empty(password1.as_str()) {
            return Err(ValidationError::EmptyPassword.into());
        }
        if !is_valid_password(&password1) {
            return Err(ValidationError::InvalidPassword.into());
        }
        if !is_valid_password_chk(&password1, &password2) {
            return Err(ValidationError::PasswordMismatch.into());
        }

        let user = User {
            id: current_timestamp_string(),
            email,
            password: password1,
            name,
            profile_image: self.config.profile.default_image.clone(),
            status: UserStatus::Active,
            role: UserRole::User,
            created_at: Some(current_date_string()),
            updated_at: None,
        };

        let session = self.session();
        if let Err(e) = self.api.create_user(&session, &user).await {
            tracing::error!("Failed to register user: {}", e);
            return Err(e);
        }
        tracing::info!("registered user {}", user.id);
        if let Err(e) = self.fetch_users().await {
            tracing::warn!("User cache refresh after registering {} failed: {}", user.id, e);
        }
        Ok(user)
    }

    /// Update a user's profile. Blank fields fall back to the stored record.
    pub async fn update_user(&self, form: UpdateForm) -> Result<User, AccountError> {
        self.ensure_users_loaded().await?;
        let original = self
            .state()
            .users
            .iter()
            .find(|u| u.id == form.id)
            .cloned()
            .ok_or_else(|| AccountError::UserNotFound(form.id.clone()))?;

        let keep_or = |value: Option<String>, fallback: &str| match value {
            Some(v) if !is_empty(v.as_str()) => v,
            _ => fallback.to_string(),
        };
        let email = keep_or(form.email, original.email.as_str());
        let password = keep_or(form.password, original.password.as_str());
        let name = keep_or(form.name, original.name.as_str());
        let profile_image = keep_or(form.profile_image, self.config.profile.default_image.as_str());

        if !is_valid_password(&password) {
            return Err(ValidationError::InvalidPassword.into());
        }

        let today = current_date_string();
        let payload = UserPayload {
            email,
            password,
            name,
            profile_image,
            role: original.role,
            status: original.status,
            created_at: original.created_at.clone().unwrap_or_else(|| today.clone()),
            updated_at: today,
        };

        let session = self.session();
        if let Err(e) = self.api.replace_user(&session, &form.id, &payload).await {
            tracing::error!("Failed to update user {}: {}", form.id, e);
            return Err(e);
        }

        let updated = User::from_payload(form.id.clone(), payload);
        {
            let mut state = self.state();
            for user in state.users.iter_mut() {
                if user.id == updated.id {
                    *user = updated.clone();
                }
            }
        }

        if let Some(mut persisted) = self.get_user_info_local_storage() {
            if persisted.id == updated.id {
                persisted.email = updated.email.clone();
                persisted.name = updated.name.clone();
                persisted.profile_image = updated.profile_image.clone();
                self.set_user_info_local_storage(&persisted);
                self.state().current_user = self.get_user_info_local_storage();
            }
        }
        tracing::info!("updated user {}", updated.id);
        Ok(updated)
    }

    /// Sign in and persist the session.
    pub async fn login_user(&self, form: LoginForm) -> Result<CurrentUser, AccountError> {
        let LoginForm { email, password } = form;

        if is_empty(email.as_str()) {
            return Err(ValidationError::EmptyEmail.into());
        }
        if !is_valid_email(&email) {
            return Err(ValidationError::LoginInvalidEmail.into());
        }

        let users = match self.api.list_users(&self.session()).await {
            Ok(users) => users,
            Err(e) => {
                tracing::error!("Login failed: {}", e);
                return Err(e);
            }
        };
        let user = users
            .iter()
            .find(|u| u.email == email)
            .ok_or(ValidationError::UnknownAccount)?;

        if is_empty(password.as_str()) {
            return Err(ValidationError::EmptyPassword.into());
        }
        if user.password != password {
            return Err(ValidationError::WrongPassword.into());
        }
        if user.is_deactivated() {
            return Err(ValidationError::Deactivated.into());
        }

        let current = user.to_current();
        let now = Utc::now();
        let secret = &self.config.session.token_secret;
        let issued = token::ttl_from_secs(self.config.session.token_ttl_secs)
            .and_then(|ttl| token::create_token(&current, secret, ttl, now))
            .and_then(|t| token::parse_token(&t, secret, now).map(|_| t));
        let token = match issued {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!("Rejected session token for {}: {}", current.id, e);
                return Err(e.into());
            }
        };

        self.set_user_info_local_storage(&current);
        {
            let mut state = self.state();
            state.current_user = Some(current.clone());
            state.session = Session::bearer(token);
        }
        tracing::info!("user {} signed in", current.id);
        Ok(current)
    }

    /// Forget the session, the cached users and the persisted user.
    pub fn logout_user(&self) {
        if let Err(e) = self.storage.remove(&self.config.session.storage_key) {
            tracing::error!("Failed to clear userInfo during logout: {}", e);
        }
        let mut state = self.state();
        state.session = Session::anonymous();
        state.users.clear();
        state.current_user = None;
        tracing::info!("signed out, userInfo cleared");
    }
}
