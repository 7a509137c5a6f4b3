use api::token::{parse_token, TokenError};
use api::{
    AccountError, ClientConfig, LoginForm, RegisterForm, UpdateForm, UserRole, UsersStore,
    ValidationError,
};
use serde_json::{json, Value};
use store::{KeyValueStore, MemoryStore};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_json(id: &str, email: &str, password: &str, status: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "password": password,
        "name": "김국민",
        "profileImage": "src/img/profile/pretty_cabbage.jpg",
        "status": status,
        "role": "user",
        "createdAt": "2025-05-01",
        "updatedAt": null
    })
}

fn kim() -> Value {
    user_json("1", "kim@kb.com", "Abcdef1!", "active")
}

async fn setup() -> (MockServer, UsersStore<MemoryStore>, MemoryStore) {
    let server = MockServer::start().await;
    let storage = MemoryStore::new();
    let config = ClientConfig::default().with_base_uri(server.uri());
    let store = UsersStore::new(config, storage.clone());
    (server, store, storage)
}

async fn mount_users(server: &MockServer, users: Value) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users))
        .mount(server)
        .await;
}

fn register_form(name: &str, email: &str, p1: &str, p2: &str) -> RegisterForm {
    RegisterForm {
        name: name.to_string(),
        email: email.to_string(),
        password1: p1.to_string(),
        password2: p2.to_string(),
    }
}

fn login_form(email: &str, password: &str) -> LoginForm {
    LoginForm {
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn validation(result: Result<impl std::fmt::Debug, AccountError>) -> ValidationError {
    result
        .unwrap_err()
        .validation()
        .expect("expected a validation error")
}

#[tokio::test]
async fn test_register_guards_run_before_any_request() {
    let (_server, store, _) = setup().await;

    let err = validation(store.register_user(register_form(" ", "a@b.co", "Abcdef1!", "Abcdef1!")).await);
    assert_eq!(err, ValidationError::EmptyName);

    let err = validation(store.register_user(register_form("kim", "", "Abcdef1!", "Abcdef1!")).await);
    assert_eq!(err, ValidationError::EmptyEmail);

    let err = validation(store.register_user(register_form("kim", "a@b", "Abcdef1!", "Abcdef1!")).await);
    assert_eq!(err, ValidationError::InvalidEmail);
}

#[tokio::test]
async fn test_register_password_rules() {
    let (server, store, _) = setup().await;
    mount_users(&server, json!([kim()])).await;

    let err = validation(store.register_user(register_form("lee", "lee@kb.com", "", "")).await);
    assert_eq!(err, ValidationError::EmptyPassword);

    let err = validation(store.register_user(register_form("lee", "lee@kb.com", "abcdefgh", "abcdefgh")).await);
    assert_eq!(err, ValidationError::InvalidPassword);

    let err = validation(store.register_user(register_form("lee", "lee@kb.com", "Abcdef1!", "Abcdef1?")).await);
    assert_eq!(err, ValidationError::PasswordMismatch);
    assert_eq!(err.to_string(), "비밀번호가 일치하지 않습니다.");
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let (server, store, _) = setup().await;
    mount_users(&server, json!([kim()])).await;

    let err = validation(store.register_user(register_form("kim", "kim@kb.com", "Abcdef1!", "Abcdef1!")).await);
    assert_eq!(err, ValidationError::DuplicateEmail);
    assert_eq!(store.users().len(), 1);
}

#[tokio::test]
async fn test_register_posts_new_account_and_refreshes_cache() {
    let (server, store, _) = setup().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([kim()])))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_partial_json(json!({
            "email": "lee@kb.com",
            "password": "Abcdef1!",
            "name": "이",
            "profileImage": "src/img/profile/pretty_cabbage.jpg",
            "status": "active",
            "role": "user",
            "updatedAt": null
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let user = store
        .register_user(register_form("이", "lee@kb.com", "Abcdef1!", "Abcdef1!"))
        .await
        .unwrap();

    assert!(user.id.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(user.role, UserRole::User);
    assert!(user.created_at.is_some());
    // Registration does not sign the user in.
    assert!(store.current_user().is_none());
}

#[tokio::test]
async fn test_register_reports_backend_failure() {
    let (server, store, _) = setup().await;
    mount_users(&server, json!([])).await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = store
        .register_user(register_form("이", "lee@kb.com", "Abcdef1!", "Abcdef1!"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AccountError::UnexpectedStatus { status: 500, .. }
    ));
}

#[tokio::test]
async fn test_register_succeeds_when_cache_refresh_fails() {
    let (server, store, _) = setup().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([kim()])))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let user = store
        .register_user(register_form("이", "lee@kb.com", "Abcdef1!", "Abcdef1!"))
        .await
        .unwrap();

    assert_eq!(user.email, "lee@kb.com");
    // The stale cache from before the POST is kept.
    assert_eq!(store.users().len(), 1);
}

#[tokio::test]
async fn test_login_persists_session_and_issues_token() {
    let (server, store, storage) = setup().await;
    mount_users(&server, json!([kim()])).await;

    let current = store
        .login_user(login_form("kim@kb.com", "Abcdef1!"))
        .await
        .unwrap();

    assert!(current.authenticated);
    assert_eq!(current.id, "1");
    assert_eq!(store.current_user(), Some(current.clone()));
    assert!(store.is_authenticated());

    let raw = storage.get("userInfo").unwrap().unwrap();
    let persisted: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted["authenticated"], json!(true));
    assert_eq!(persisted["email"], json!("kim@kb.com"));
    assert!(persisted.get("password").is_none());

    let session = store.session();
    let token = session.token().expect("token issued");
    let claims = parse_token(token, &store.config().session.token_secret, chrono::Utc::now()).unwrap();
    assert_eq!(claims.user, current);
}

#[tokio::test]
async fn test_login_guards() {
    let (server, store, storage) = setup().await;
    mount_users(
        &server,
        json!([kim(), user_json("2", "park@kb.com", "Abcdef1!", "deactivated")]),
    )
    .await;

    let cases = [
        (login_form("", "Abcdef1!"), ValidationError::EmptyEmail),
        (login_form("kim@kb", "Abcdef1!"), ValidationError::LoginInvalidEmail),
        (login_form("nobody@kb.com", "Abcdef1!"), ValidationError::UnknownAccount),
        (login_form("kim@kb.com", "  "), ValidationError::EmptyPassword),
        (login_form("kim@kb.com", "Wrong123!"), ValidationError::WrongPassword),
        (login_form("park@kb.com", "Abcdef1!"), ValidationError::Deactivated),
    ];
    for (form, expected) in cases {
        assert_eq!(validation(store.login_user(form).await), expected);
    }

    let err = store
        .login_user(login_form("kim@kb", "Abcdef1!"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "올바른 형식의 이메일을 입력해주세요.");

    assert!(storage.get("userInfo").unwrap().is_none());
    assert!(store.session().is_anonymous());
}

#[tokio::test]
async fn test_login_server_error_is_not_a_validation_error() {
    let (server, store, storage) = setup().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = store
        .login_user(login_form("kim@kb.com", "Abcdef1!"))
        .await
        .unwrap_err();
    assert!(err.validation().is_none());
    assert!(err.to_string().starts_with("서버 오류"));
    assert!(storage.get("userInfo").unwrap().is_none());
}

#[tokio::test]
async fn test_login_with_expired_token_is_refused() {
    let server = MockServer::start().await;
    mount_users(&server, json!([kim()])).await;
    let storage = MemoryStore::new();
    let config = ClientConfig::default()
        .with_base_uri(server.uri())
        .with_token_ttl(0);
    let store = UsersStore::new(config, storage.clone());

    let err = store
        .login_user(login_form("kim@kb.com", "Abcdef1!"))
        .await
        .unwrap_err();
    assert!(matches!(err, AccountError::Token(_)));
    assert_eq!(err.to_string(), "토큰이 만료되었거나 유효하지 않습니다.");
    assert!(storage.get("userInfo").unwrap().is_none());
    assert!(store.current_user().is_none());
}

#[tokio::test]
async fn test_login_with_out_of_range_token_ttl_is_refused() {
    let server = MockServer::start().await;
    mount_users(&server, json!([kim()])).await;
    let storage = MemoryStore::new();

    for ttl in [100_000_000_000_000, u64::MAX] {
        let config = ClientConfig::default()
            .with_base_uri(server.uri())
            .with_token_ttl(ttl);
        let store = UsersStore::new(config, storage.clone());

        let err = store
            .login_user(login_form("kim@kb.com", "Abcdef1!"))
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::Token(TokenError::InvalidTtl(_))));
        assert!(store.current_user().is_none());
    }
    assert!(storage.get("userInfo").unwrap().is_none());
}

#[tokio::test]
async fn test_update_merges_blank_fields_and_refreshes_session() {
    let (server, store, storage) = setup().await;
    mount_users(&server, json!([kim(), user_json("2", "park@kb.com", "Abcdef1!", "active")])).await;
    Mock::given(method("PUT"))
        .and(path("/users/1"))
        .and(body_partial_json(json!({
            "email": "kim@kb.com",
            "password": "Abcdef1!",
            "name": "김새이름",
            "profileImage": "src/img/profile/pretty_cabbage.jpg",
            "role": "user",
            "status": "active",
            "createdAt": "2025-05-01"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    store
        .login_user(login_form("kim@kb.com", "Abcdef1!"))
        .await
        .unwrap();

    let updated = store
        .update_user(UpdateForm {
            id: "1".to_string(),
            name: Some("김새이름".to_string()),
            email: Some("  ".to_string()),
            ..UpdateForm::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "김새이름");
    assert!(updated.updated_at.is_some());

    let cached = store.users();
    assert_eq!(cached.len(), 2);
    assert_eq!(cached.iter().find(|u| u.id == "1").unwrap().name, "김새이름");

    assert_eq!(store.current_user().unwrap().name, "김새이름");
    let raw = storage.get("userInfo").unwrap().unwrap();
    assert!(raw.contains("김새이름"));
    assert!(raw.contains("\"authenticated\":true"));
}

#[tokio::test]
async fn test_update_of_another_user_leaves_session_alone() {
    let (server, store, _) = setup().await;
    mount_users(&server, json!([kim(), user_json("2", "park@kb.com", "Abcdef1!", "active")])).await;
    Mock::given(method("PUT"))
        .and(path("/users/2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    store
        .login_user(login_form("kim@kb.com", "Abcdef1!"))
        .await
        .unwrap();
    store
        .update_user(UpdateForm {
            id: "2".to_string(),
            name: Some("박".to_string()),
            ..UpdateForm::default()
        })
        .await
        .unwrap();

    assert_eq!(store.current_user().unwrap().name, "김국민");
}

#[tokio::test]
async fn test_update_rejects_weak_password_without_request() {
    let (server, store, _) = setup().await;
    mount_users(&server, json!([kim()])).await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = validation(
        store
            .update_user(UpdateForm {
                id: "1".to_string(),
                password: Some("short".to_string()),
                ..UpdateForm::default()
            })
            .await,
    );
    assert_eq!(err, ValidationError::InvalidPassword);
}

#[tokio::test]
async fn test_update_unknown_user() {
    let (server, store, _) = setup().await;
    mount_users(&server, json!([kim()])).await;

    let err = store
        .update_user(UpdateForm {
            id: "99".to_string(),
            ..UpdateForm::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AccountError::UserNotFound(id) if id == "99"));
}

#[tokio::test]
async fn test_logout_clears_everything() {
    let (server, store, storage) = setup().await;
    mount_users(&server, json!([kim()])).await;

    store
        .login_user(login_form("kim@kb.com", "Abcdef1!"))
        .await
        .unwrap();
    store.fetch_users().await.unwrap();
    assert_eq!(store.users().len(), 1);

    store.logout_user();

    assert!(storage.get("userInfo").unwrap().is_none());
    assert!(store.current_user().is_none());
    assert!(store.session().is_anonymous());
    assert!(store.users().is_empty());
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn test_new_store_restores_persisted_user() {
    let (server, store, storage) = setup().await;
    mount_users(&server, json!([kim()])).await;
    store
        .login_user(login_form("kim@kb.com", "Abcdef1!"))
        .await
        .unwrap();

    let config = ClientConfig::default().with_base_uri(server.uri());
    let reloaded = UsersStore::new(config, storage);
    assert_eq!(reloaded.current_user().unwrap().email, "kim@kb.com");
    assert!(reloaded.is_authenticated());
}

#[tokio::test]
async fn test_corrupt_persisted_user_reads_as_signed_out() {
    let storage = MemoryStore::new();
    storage.set("userInfo", "not json").unwrap();
    let store = UsersStore::new(ClientConfig::default(), storage);
    assert!(store.current_user().is_none());
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn test_get_user_info_by_id() {
    let (server, store, _) = setup().await;
    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kim()))
        .mount(&server)
        .await;

    let user = store.get_user_info_by_id("1").await.unwrap();
    assert_eq!(user.email, "kim@kb.com");
    assert!(store.get_user_info_by_id("2").await.is_err());
}

fn persist_user(storage: &MemoryStore, id: &str, role: &str) {
    let current = json!({
        "authenticated": true,
        "id": id,
        "email": "someone@kb.com",
        "name": "someone",
        "role": role,
        "profileImage": ""
    });
    storage.set("userInfo", &current.to_string()).unwrap();
}

#[tokio::test]
async fn test_user_list_is_not_requested_for_non_admins() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([kim()])))
        .expect(0)
        .mount(&server)
        .await;
    let storage = MemoryStore::new();
    persist_user(&storage, "1", "user");
    let config = ClientConfig::default().with_base_uri(server.uri());
    let store = UsersStore::new(config.clone(), storage);

    assert!(store.fetch_users_as_admin().await.unwrap().is_empty());

    let signed_out = UsersStore::new(config, MemoryStore::new());
    assert!(signed_out.fetch_users_as_admin().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_user_list_is_loaded_for_admins() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([kim()])))
        .expect(1)
        .mount(&server)
        .await;
    let storage = MemoryStore::new();
    persist_user(&storage, "3", "admin");
    let config = ClientConfig::default().with_base_uri(server.uri());
    let store = UsersStore::new(config, storage);

    let users = store.fetch_users_as_admin().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(store.users().len(), 1);
}
