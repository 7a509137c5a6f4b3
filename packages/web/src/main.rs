use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use ui::{guard, use_account, AccountProvider, GuardDecision, Layout, Navbar, RouteName};
use views::{
    Admin, Budget, Exports, Home, Login, MyPage, Popup, Register, Start, Statistics, Transaction,
};

mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Guarded)]
        #[route("/")]
        Start {},
        #[route("/home")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/mypage")]
        MyPage {},
        #[route("/admin")]
        Admin {},
        #[route("/transaction")]
        Transaction {},
        #[route("/popup")]
        Popup {},
        #[route("/statistics/summary")]
        Statistics {},
        #[route("/statistics/export")]
        Exports {},
        #[route("/budget")]
        Budget {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    fn name(&self) -> Option<RouteName> {
        let name = match self {
            Route::Start {} => RouteName::Start,
            Route::Home {} => RouteName::Home,
            Route::Login {} => RouteName::Login,
            Route::Register {} => RouteName::Register,
            Route::MyPage {} => RouteName::MyPage,
            Route::Admin {} => RouteName::Admin,
            Route::Transaction {} => RouteName::Transaction,
            Route::Popup {} => RouteName::Popup,
            Route::Statistics {} => RouteName::Statistics,
            Route::Exports {} => RouteName::Exports,
            Route::Budget {} => RouteName::Budget,
            Route::NotFound { .. } => return None,
        };
        Some(name)
    }

    fn from_name(name: RouteName) -> Self {
        match name {
            RouteName::Start => Route::Start {},
            RouteName::Home => Route::Home {},
            RouteName::Login => Route::Login {},
            RouteName::Register => Route::Register {},
            RouteName::MyPage => Route::MyPage {},
            RouteName::Admin => Route::Admin {},
            RouteName::Transaction => Route::Transaction {},
            RouteName::Popup => Route::Popup {},
            RouteName::Statistics => Route::Statistics {},
            RouteName::Exports => Route::Exports {},
            RouteName::Budget => Route::Budget {},
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AccountProvider {
            Router::<Route> {}
        }
    }
}

/// Applies the navigation guard and the page chrome from the route table.
#[component]
fn Guarded() -> Element {
    let route = use_route::<Route>();
    let account = use_account();
    let nav = use_navigator();
    let last_path = use_hook(|| Rc::new(RefCell::new(String::from("/"))));

    let Some(name) = route.name() else {
        return rsx! { Outlet::<Route> {} };
    };

    if let GuardDecision::Redirect(target) = guard(name, account.is_authenticated()) {
        tracing::info!("{} requires a session, redirecting to {}", name, target);
        nav.replace(Route::from_name(target));
        return rsx! {};
    }

    let path = route.to_string();
    let previous = last_path.replace(path.clone());
    if previous != path {
        tracing::info!("navigated: {} -> {}", previous, path);
    }

    let meta = name.meta();
    let title = meta.title.unwrap_or("가계부");

    match meta.layout {
        Layout::Default => rsx! {
            document::Title { "{title}" }
            Navbar {
                Link { to: Route::Home {}, "홈" }
                Link { to: Route::Transaction {}, "수입/지출" }
                Link { to: Route::Statistics {}, "통계" }
                Link { to: Route::Budget {}, "예산" }
                Link { to: Route::MyPage {}, "마이페이지" }
            }
            main {
                class: "page",
                Outlet::<Route> {}
            }
        },
        Layout::None => {
            let background = meta.background_color.unwrap_or("#ffffff");
            let align = if meta.center_content {
                "display: flex; flex-direction: column; align-items: center; justify-content: center;"
            } else {
                ""
            };
            rsx! {
                document::Title { "{title}" }
                div {
                    class: "bare-page",
                    style: "min-height: 100vh; background: {background}; {align}",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "not-found",
            h1 { "페이지를 찾을 수 없습니다" }
            p { "/{path}" }
            Link { to: Route::Start {}, "처음으로" }
        }
    }
}
