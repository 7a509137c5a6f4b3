//! Data models exchanged with the backend.

mod user;

pub use user::{CurrentUser, User, UserPayload, UserRole, UserStatus};
