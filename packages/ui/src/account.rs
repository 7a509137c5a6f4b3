//! Account context and hooks for the UI.

use api::{AccountError, CurrentUser, LoginForm, RegisterForm, UpdateForm, User, UsersStore};
use dioxus::prelude::*;

use crate::storage::{load_config, make_storage, PlatformStore};

/// Handle to the account store shared through context.
///
/// The store itself is not reactive; `user` mirrors its signed-in user so
/// components re-render on login, profile edits and logout.
#[derive(Clone)]
pub struct Account {
    store: UsersStore<PlatformStore>,
    user: Signal<Option<CurrentUser>>,
}

impl Account {
    pub fn store(&self) -> &UsersStore<PlatformStore> {
        &self.store
    }

    /// The signed-in user, subscribing the caller to changes.
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.user.read().clone()
    }

    /// Whether a session is persisted. Route guards use this, not the signal.
    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    fn sync(&self) {
        let mut user = self.user;
        user.set(self.store.current_user());
    }

    pub async fn login(&self, form: LoginForm) -> Result<CurrentUser, AccountError> {
        let result = self.store.login_user(form).await;
        self.sync();
        result
    }

    pub async fn register(&self, form: RegisterForm) -> Result<User, AccountError> {
        self.store.register_user(form).await
    }

    pub async fn update(&self, form: UpdateForm) -> Result<User, AccountError> {
        let result = self.store.update_user(form).await;
        self.sync();
        result
    }

    /// Every user record; empty unless the signed-in user is an admin.
    pub async fn users(&self) -> Result<Vec<User>, AccountError> {
        self.store.fetch_users_as_admin().await
    }

    pub fn logout(&self) {
        self.store.logout_user();
        self.sync();
    }
}

/// Get the shared account handle.
pub fn use_account() -> Account {
    use_context::<Account>()
}

/// Provider component that owns the account store.
/// Wrap your app with this component before the router.
#[component]
pub fn AccountProvider(children: Element) -> Element {
    let store = use_hook(|| UsersStore::new(load_config(), make_storage()));
    let user = use_signal(|| store.current_user());

    use_context_provider(|| Account { store, user });

    rsx! {
        {children}
    }
}

/// Button that signs the current user out and runs `onlogout`.
#[component]
pub fn LogoutButton(
    #[props(default = "로그아웃".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    onlogout: EventHandler<()>,
) -> Element {
    let account = use_account();

    let onclick = move |_| {
        account.logout();
        onlogout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
