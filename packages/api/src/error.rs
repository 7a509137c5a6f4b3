//! Errors returned by the account store.
//!
//! [`ValidationError`] is what the user sees: its `Display` is the localized
//! message shown under the form. [`AccountError`] wraps it together with the
//! transport, storage and token failures.

use thiserror::Error;

use crate::token::TokenError;

/// A rejected form field or credential, with its user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("이름을 입력해주세요.")]
    EmptyName,
    #[error("이메일을 입력해주세요.")]
    EmptyEmail,
    #[error("올바른 이메일 형식을 입력해주세요.")]
    InvalidEmail,
    #[error("올바른 형식의 이메일을 입력해주세요.")]
    LoginInvalidEmail,
    #[error("이미 존재하는 이메일입니다. 로그인을 진행해주세요.")]
    DuplicateEmail,
    #[error("비밀번호를 입력해주세요.")]
    EmptyPassword,
    #[error("비밀번호는 8자 이상이며 영문자, 숫자, 특수문자를 포함해야 합니다.")]
    InvalidPassword,
    #[error("비밀번호가 일치하지 않습니다.")]
    PasswordMismatch,
    #[error("존재하지 않는 계정입니다. 회원가입을 해주세요.")]
    UnknownAccount,
    #[error("비밀번호가 일치하지 않습니다.")]
    WrongPassword,
    #[error("비활성화된 계정입니다.")]
    Deactivated,
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("서버 오류: {0}")]
    Http(#[from] reqwest::Error),

    #[error("서버 오류: {operation} returned status {status}")]
    UnexpectedStatus { operation: &'static str, status: u16 },

    #[error("사용자를 찾을 수 없습니다: {0}")]
    UserNotFound(String),

    #[error("토큰이 만료되었거나 유효하지 않습니다.")]
    Token(#[from] TokenError),

    #[error("저장소 오류: {0}")]
    Storage(#[from] store::StorageError),
}

impl AccountError {
    /// The validation failure behind this error, if that is what it is.
    pub fn validation(&self) -> Option<ValidationError> {
        match self {
            AccountError::Validation(v) => Some(*v),
            _ => None,
        }
    }
}
