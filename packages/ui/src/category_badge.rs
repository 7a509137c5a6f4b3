//! Category icon + label chips.

use api::{Category, CategoryKind};
use dioxus::prelude::*;

/// A single category: icon followed by its label.
#[component]
pub fn CategoryBadge(category: Category) -> Element {
    let key = category.key();
    let label = category.label();
    let icon = category.icon();

    rsx! {
        span {
            class: "category-badge category-badge--{key}",
            title: "{key}",
            img {
                src: "{icon}",
                alt: "{label}",
                width: "20",
                height: "20",
            }
            span { "{label}" }
        }
    }
}

/// Every category of one kind, in display order.
#[component]
pub fn CategoryList(kind: CategoryKind) -> Element {
    let heading = kind.label();

    rsx! {
        section {
            class: "category-list",
            h3 { "{heading}" }
            ul {
                for category in kind.categories().iter().copied() {
                    li { key: "{category}", CategoryBadge { category } }
                }
            }
        }
    }
}
