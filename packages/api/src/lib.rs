//! # API crate: account data layer for the ledger client
//!
//! Everything the UI needs to talk to the REST backend and to reason about users
//! and categories, with no UI dependencies of its own.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`account`] | [`UsersStore`]: cached users, signed-in user, register/login/update/logout |
//! | [`categories`] | Expense/income category keys with their labels and icons |
//! | [`client`] | [`UsersApi`] REST client for `/users` and the per-request [`Session`] |
//! | [`dates`] | Epoch-millis ids and `YYYY-MM-DD` audit dates |
//! | [`error`] | [`AccountError`] and the localized [`ValidationError`] messages |
//! | [`models`] | [`User`] record and its signed-in projection [`CurrentUser`] |
//! | [`token`] | HS256 session token issued at login |
//! | [`validators`] | Empty/email/password form checks |

pub mod account;
pub mod categories;
pub mod client;
pub mod dates;
pub mod error;
pub mod models;
pub mod token;
pub mod validators;

pub use account::{LoginForm, RegisterForm, UpdateForm, UsersStore};
pub use categories::{Category, CategoryKind, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
pub use client::{Session, UsersApi};
pub use error::{AccountError, ValidationError};
pub use models::{CurrentUser, User, UserRole, UserStatus};

pub use store::ClientConfig;
