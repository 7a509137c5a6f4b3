//! Login page view with email/password form.

use api::LoginForm;
use dioxus::prelude::*;
use ui::use_account;

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let account = use_account();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight home
    if account.is_authenticated() {
        nav.replace(Route::Home {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let account = account.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let form = LoginForm {
                email: email().trim().to_string(),
                password: password(),
            };
            match account.login(form).await {
                Ok(_) => {
                    nav.push(Route::Home {});
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-card",

            h1 { "로그인" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "auth-form__error", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "이메일",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "비밀번호",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "로그인 중..." } else { "로그인" }
                }
            }

            p {
                class: "auth-card__footer",
                "계정이 없으신가요? "
                Link { to: Route::Register {}, "회원가입" }
            }
        }
    }
}
