//! Profile page: edit name, email, password and image, or sign out.

use api::UpdateForm;
use dioxus::prelude::*;
use ui::{use_account, LogoutButton};

use crate::Route;

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn MyPage() -> Element {
    let account = use_account();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut profile_image = use_signal(String::new);
    let mut status = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let Some(user) = account.current_user() else {
        return rsx! {
            p { "로그인이 필요합니다." }
        };
    };
    let user_id = user.id.clone();
    let display_name = user.display_name().to_string();
    let current_email = user.email.clone();
    let current_image = user.profile_image.clone();

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let account = account.clone();
        let id = user_id.clone();
        spawn(async move {
            saving.set(true);
            status.set(None);

            let form = UpdateForm {
                id,
                email: non_blank(email()),
                password: non_blank(password()),
                name: non_blank(name()),
                profile_image: non_blank(profile_image()),
            };
            match account.update(form).await {
                Ok(_) => {
                    password.set(String::new());
                    status.set(Some("저장되었습니다.".to_string()));
                }
                Err(e) => status.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    rsx! {
        section {
            class: "my-page",

            div {
                class: "my-page__profile",
                img { src: "{current_image}", alt: "profile", width: "80", height: "80" }
                h2 { "{display_name}" }
                p { "{current_email}" }
            }

            form {
                onsubmit: handle_save,
                class: "my-page__form",

                if let Some(message) = status() {
                    div { class: "my-page__status", "{message}" }
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
                    placeholder: "새 비밀번호",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "프로필 이미지 경로",
                    value: profile_image(),
                    oninput: move |evt: FormEvent| profile_image.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "저장 중..." } else { "저장" }
                }
            }

            LogoutButton {
                class: "my-page__logout",
                onlogout: move |_| {
                    nav.replace(Route::Login {});
                },
            }
        }
    }
}
