use api::{User, UserRole, UserStatus};
use dioxus::prelude::*;
use ui::use_account;

/// User directory for administrators.
#[component]
pub fn Admin() -> Element {
    let account = use_account();
    let is_admin = account
        .current_user()
        .map(|user| user.is_admin())
        .unwrap_or(false);

    let users = use_resource(move || {
        let account = account.clone();
        async move { account.users().await }
    });

    if !is_admin {
        return rsx! {
            p { class: "admin__denied", "관리자만 접근할 수 있습니다." }
        };
    }

    let body = match &*users.read() {
        None => rsx! { p { "불러오는 중..." } },
        Some(Err(e)) => {
            let message = e.to_string();
            rsx! { p { class: "admin__error", "{message}" } }
        }
        Some(Ok(list)) => {
            let rows: Vec<(String, User)> = list.iter().map(|u| (u.id.clone(), u.clone())).collect();
            rsx! {
                table {
                    thead {
                        tr {
                            th { "ID" }
                            th { "이름" }
                            th { "이메일" }
                            th { "권한" }
                            th { "상태" }
                            th { "가입일" }
                        }
                    }
                    tbody {
                        for (id, user) in rows {
                            UserRow { key: "{id}", user }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section {
            class: "admin",
            h2 { "사용자 목록" }
            {body}
        }
    }
}

#[component]
fn UserRow(user: User) -> Element {
    let role = match user.role {
        UserRole::Admin => "관리자",
        UserRole::User => "일반",
    };
    let status = match user.status {
        UserStatus::Active => "활성",
        UserStatus::Deactivated => "비활성",
    };
    let id = user.id;
    let name = user.name;
    let email = user.email;
    let created_at = user.created_at.unwrap_or_default();

    rsx! {
        tr {
            td { "{id}" }
            td { "{name}" }
            td { "{email}" }
            td { "{role}" }
            td { "{status}" }
            td { "{created_at}" }
        }
    }
}
