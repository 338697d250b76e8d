//! Session lifecycle against a mock backend.

use std::time::Duration;

use arena_access::{AccessResolver, Action, Decision};
use arena_config::ApiConfig;
use arena_session::{
    ApiClient, AuthError, CredentialStore, NewTournament, SessionState, SessionStore,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn member_of_a() -> Value {
    json!({
        "_id": "u-1",
        "username": "kai",
        "email": "kai@example.gg",
        "orgId": "A",
        "roles": [
            {"scope": "platform", "role": "platform:user"},
            {"scope": "org", "role": "org:member", "scopeId": "A"}
        ]
    })
}

fn manager_of_a() -> Value {
    json!({
        "_id": "u-2",
        "username": "mira",
        "email": "mira@example.gg",
        "roles": [{"scope": "org", "role": "org:manager", "scopeId": "A"}]
    })
}

fn store_for(server: &MockServer) -> SessionStore {
    let config = ApiConfig {
        base_url: format!("{}/api", server.uri()),
        ..Default::default()
    };
    SessionStore::new(
        ApiClient::new(&config).expect("client builds"),
        AccessResolver::default(),
    )
}

async fn sign_in(server: &MockServer, store: &SessionStore, user: Value) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "sid=first; Path=/; HttpOnly")
                .set_body_json(json!({ "user": user })),
        )
        .mount(server)
        .await;
    store
        .login("kai@example.gg", "hunter22")
        .await
        .expect("login succeeds");
}

#[tokio::test]
async fn login_authenticates_and_captures_cookie() {
    let server = MockServer::start().await;
    let store = store_for(&server);
    assert_eq!(store.state().await, SessionState::Checking);

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "kai@example.gg", "password": "hunter22"})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "sid=abc123; Path=/; HttpOnly")
                .set_body_json(json!({ "user": member_of_a() })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let user = store.login("kai@example.gg", "hunter22").await.unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(store.current_user().await, Some(user));
    assert_eq!(store.client().session_cookies().as_deref(), Some("sid=abc123"));
}

#[tokio::test]
async fn rejected_login_is_invalid_credentials() {
    let server = MockServer::start().await;
    let store = store_for(&server);

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "bad"})))
        .mount(&server)
        .await;
    // Login failures must never be retried through a refresh.
    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = store.login("kai@example.gg", "wrong").await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(store.current_user().await, None);
}

#[tokio::test]
async fn duplicate_registration_is_conflict() {
    let server = MockServer::start().await;
    let store = store_for(&server);

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let err = store
        .register("kai", "kai@example.gg", "hunter22")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Conflict));
}

#[tokio::test]
async fn check_auth_without_session_is_anonymous() {
    let server = MockServer::start().await;
    let store = store_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let state = store.check_auth().await.unwrap();
    assert_eq!(state, SessionState::Anonymous);
    assert_eq!(store.state().await, SessionState::Anonymous);
}

#[tokio::test]
async fn expired_session_refreshes_and_retries_once() {
    let server = MockServer::start().await;
    let store = store_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(ResponseTemplate::new(401))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("set-cookie", "sid=rotated; Path=/"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": member_of_a() })))
        .expect(1)
        .mount(&server)
        .await;

    let state = store.check_auth().await.unwrap();
    assert_eq!(state.user().map(|u| u.id.as_str()), Some("u-1"));
    assert_eq!(store.client().session_cookies().as_deref(), Some("sid=rotated"));
}

#[tokio::test]
async fn concurrent_unauthorized_requests_share_one_refresh() {
    let server = MockServer::start().await;
    let store = store_for(&server);
    sign_in(&server, &store, member_of_a()).await;

    Mock::given(method("GET"))
        .and(path("/api/orgs/A/members"))
        .respond_with(ResponseTemplate::new(401).set_delay(Duration::from_millis(200)))
        .up_to_n_times(2)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/orgs/A/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"userId": "u-1", "username": "kai", "role": "org:member"}
        ])))
        .expect(2)
        .mount(&server)
        .await;

    let (first, second) = tokio::join!(store.list_members("A"), store.list_members("A"));
    assert_eq!(first.unwrap().len(), 1);
    assert_eq!(second.unwrap().len(), 1);
}

#[tokio::test]
async fn failed_refresh_drops_to_anonymous() {
    let server = MockServer::start().await;
    let store = store_for(&server);
    sign_in(&server, &store, member_of_a()).await;

    Mock::given(method("GET"))
        .and(path("/api/notifications"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = store.notifications(false).await.unwrap_err();
    assert!(matches!(err, AuthError::SessionExpired));
    assert_eq!(store.state().await, SessionState::Anonymous);
}

#[tokio::test]
async fn concurrent_requests_share_one_failed_refresh() {
    let server = MockServer::start().await;
    let store = store_for(&server);
    sign_in(&server, &store, member_of_a()).await;

    Mock::given(method("GET"))
        .and(path("/api/orgs/A/members"))
        .respond_with(ResponseTemplate::new(401).set_delay(Duration::from_millis(200)))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let (first, second, third) = tokio::join!(
        store.list_members("A"),
        store.list_members("A"),
        store.list_members("A")
    );
    for result in [first, second, third] {
        assert!(matches!(result, Err(AuthError::SessionExpired)));
    }
    assert_eq!(store.state().await, SessionState::Anonymous);
}

#[tokio::test]
async fn denied_operation_never_reaches_the_server() {
    let server = MockServer::start().await;
    let store = store_for(&server);
    sign_in(&server, &store, member_of_a()).await;

    Mock::given(method("POST"))
        .and(path("/api/orgs/A/tournaments"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let err = store
        .create_tournament("A", &NewTournament {
            name: "Spring Cup".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AuthError::Forbidden {
            action: Action::CreateTournament
        }
    ));
}

#[tokio::test]
async fn signed_out_operations_are_not_authenticated() {
    let server = MockServer::start().await;
    let store = store_for(&server);

    let err = store.list_members("A").await.unwrap_err();
    assert!(matches!(err, AuthError::NotAuthenticated));
    let err = store.notifications(true).await.unwrap_err();
    assert!(matches!(err, AuthError::NotAuthenticated));
}

#[tokio::test]
async fn manager_creates_tournament_in_own_org() {
    let server = MockServer::start().await;
    let store = store_for(&server);
    sign_in(&server, &store, manager_of_a()).await;

    assert!(matches!(
        store.can(Action::CreateTournament, Some("A")).await,
        Decision::Allowed(_)
    ));
    assert!(!store.can(Action::CreateTournament, Some("B")).await.is_allowed());

    Mock::given(method("POST"))
        .and(path("/api/orgs/A/tournaments"))
        .and(body_json(json!({"name": "Spring Cup", "game": "valorant"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"_id": "t-1", "name": "Spring Cup", "game": "valorant", "orgId": "A"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = store
        .create_tournament("A", &NewTournament {
            name: "Spring Cup".into(),
            game: Some("valorant".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, "t-1");
    assert_eq!(created.org_id.as_deref(), Some("A"));
}

#[tokio::test]
async fn backend_error_message_is_surfaced() {
    let server = MockServer::start().await;
    let store = store_for(&server);
    sign_in(&server, &store, manager_of_a()).await;

    Mock::given(method("DELETE"))
        .and(path("/api/orgs/A/members/u-9"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Member not found"})),
        )
        .mount(&server)
        .await;

    match store.remove_member("A", "u-9").await.unwrap_err() {
        AuthError::Api { status, message } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(message, "Member not found");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn logout_clears_state_even_if_server_fails() {
    let server = MockServer::start().await;
    let tmp = tempfile::TempDir::new().unwrap();
    let session_file = tmp.path().join("session");
    let store = store_for(&server).with_credentials(CredentialStore::file_only(&session_file));
    sign_in(&server, &store, member_of_a()).await;
    assert_eq!(
        std::fs::read_to_string(&session_file).unwrap(),
        "sid=first"
    );

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    store.logout().await.unwrap();
    assert_eq!(store.state().await, SessionState::Anonymous);
    assert!(!session_file.exists());
}

#[tokio::test]
async fn persisted_cookie_is_restored_into_new_store() {
    let server = MockServer::start().await;
    let tmp = tempfile::TempDir::new().unwrap();
    let session_file = tmp.path().join("session");
    std::fs::write(&session_file, "sid=persisted").unwrap();

    let store = store_for(&server).with_credentials(CredentialStore::file_only(&session_file));
    assert_eq!(store.client().session_cookies().as_deref(), Some("sid=persisted"));

    Mock::given(method("PATCH"))
        .and(path("/api/notifications/n-1/read"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    sign_in(&server, &store, member_of_a()).await;
    store.mark_notification_read("n-1").await.unwrap();
}
