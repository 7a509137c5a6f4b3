//! Ledger pages. Entry data lives on the backend; these views frame it with the
//! route title and the category taxonomy.

use api::CategoryKind;
use dioxus::prelude::*;
use ui::{use_account, CategoryList, RouteName};

#[component]
fn LedgerPage(route: RouteName, children: Element) -> Element {
    let title = route.meta().title.unwrap_or_default();
    rsx! {
        section {
            class: "ledger-page",
            if !title.is_empty() {
                h2 { "{title}" }
            }
            {children}
        }
    }
}

#[component]
pub fn Home() -> Element {
    let account = use_account();
    let greeting = account
        .current_user()
        .map(|user| format!("{}님, 환영합니다", user.display_name()))
        .unwrap_or_default();

    rsx! {
        LedgerPage {
            route: RouteName::Home,
            p { class: "home__greeting", "{greeting}" }
            div {
                class: "home__categories",
                CategoryList { kind: CategoryKind::Income }
                CategoryList { kind: CategoryKind::Expense }
            }
        }
    }
}

#[component]
pub fn Transaction() -> Element {
    rsx! {
        LedgerPage {
            route: RouteName::Transaction,
            CategoryList { kind: CategoryKind::Income }
            CategoryList { kind: CategoryKind::Expense }
        }
    }
}

#[component]
pub fn Popup() -> Element {
    rsx! {
        LedgerPage {
            route: RouteName::Popup,
            CategoryList { kind: CategoryKind::Expense }
        }
    }
}

#[component]
pub fn Statistics() -> Element {
    rsx! {
        LedgerPage {
            route: RouteName::Statistics,
            CategoryList { kind: CategoryKind::Expense }
        }
    }
}

#[component]
pub fn Exports() -> Element {
    rsx! {
        LedgerPage {
            route: RouteName::Exports,
            p { "기간을 선택해 수입/지출 내역을 엑셀로 내보냅니다." }
        }
    }
}

#[component]
pub fn Budget() -> Element {
    rsx! {
        LedgerPage {
            route: RouteName::Budget,
            CategoryList { kind: CategoryKind::Expense }
        }
    }
}
