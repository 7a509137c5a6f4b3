//! Registration page view with email/password form.

use api::RegisterForm;
use dioxus::prelude::*;
use ui::use_account;

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let account = use_account();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let account = account.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let form = RegisterForm {
                name: name(),
                email: email(),
                password1: password(),
                password2: confirm_password(),
            };
            match account.register(form).await {
                Ok(_) => {
                    nav.push(Route::Login {});
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

            h1 { "회원가입" }

            form {
                onsubmit: handle_register,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "auth-form__error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "이름",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                input {
                    r#type: "email",
                    placeholder: "이메일",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "비밀번호 (8자 이상, 영문/숫자/특수문자)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "비밀번호 확인",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "가입 중..." } else { "가입하기" }
                }
            }

            p {
                class: "auth-card__footer",
                "이미 계정이 있으신가요? "
                Link { to: Route::Login {}, "로그인" }
            }
        }
    }
}
