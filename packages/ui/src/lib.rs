//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod routes;
pub use routes::{guard, GuardDecision, Layout, RouteMeta, RouteName};

mod storage;
pub use storage::{load_config, make_storage, PlatformStore};

mod account;
pub use account::{use_account, Account, AccountProvider, LogoutButton};

mod navbar;
pub use navbar::Navbar;

mod category_badge;
pub use category_badge::{CategoryBadge, CategoryList};
