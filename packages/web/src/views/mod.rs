mod start;
pub use start::Start;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod my_page;
pub use my_page::MyPage;

mod admin;
pub use admin::Admin;

mod ledger;
pub use ledger::{Budget, Exports, Home, Popup, Statistics, Transaction};
