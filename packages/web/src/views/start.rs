use dioxus::prelude::*;

use crate::Route;

/// Landing page with the two entry points.
#[component]
pub fn Start() -> Element {
    rsx! {
        div {
            class: "start",
            img { src: "/src/img/profile/pretty_cabbage.jpg", alt: "logo", width: "120" }
            h1 { "가계부" }
            p { "수입과 지출을 한눈에" }
            div {
                class: "start__actions",
                Link { to: Route::Login {}, class: "button", "로그인" }
                Link { to: Route::Register {}, class: "button button--ghost", "회원가입" }
            }
        }
    }
}
