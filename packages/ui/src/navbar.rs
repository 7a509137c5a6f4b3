use dioxus::prelude::*;

use crate::account::use_account;
use crate::icons::FaUser;
use crate::Icon;

/// Top bar for pages using the default layout.
///
/// Links are passed in as children so the platform crate can use its own
/// `Routable` enum.
#[component]
pub fn Navbar(children: Element) -> Element {
    let account = use_account();
    let user_name = account
        .current_user()
        .map(|user| user.display_name().to_string());

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar__links",
                {children}
            }
            if let Some(name) = user_name {
                span {
                    class: "navbar__user",
                    Icon { icon: FaUser, width: 14, height: 14 }
                    " {name}"
                }
            }
        }
    }
}
