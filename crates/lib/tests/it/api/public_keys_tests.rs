use axum::http::StatusCode;
use crosspost::{RemoteApi, api::Npub};

use crate::helpers::{FakeService, test_user};

const NPUB_A: &str = "npub1sg6plzptd64u62a878hep2kev88swjh3tw00gjsfl8f237lmu63q0uf63m";
const NPUB_B: &str = "npub1xtscya34g58tk0z605fvr788k263gsu6cy9x0mhnm87echrgufzsevkk5s";

#[tokio::test]
async fn test_add_then_list_includes_key() {
    let service = FakeService::start().await;
    let user = test_user("account-1", 1001);
    let api = service.api_with_session(&service.login(&user).await);

    assert!(api.list_public_keys().await.unwrap().is_empty());

    api.add_public_key(&Npub::from(NPUB_A)).await.unwrap();
    let keys = api.list_public_keys().await.unwrap();
    assert!(keys.contains(NPUB_A));
    assert_eq!(service.keys_of(user.account_id()).await, vec![Npub::from(NPUB_A)]);
}

#[tokio::test]
async fn test_list_preserves_server_order() {
    let service = FakeService::start().await;
    let api = service.api_with_session(&service.login(&test_user("account-1", 1001)).await);

    api.add_public_key(&Npub::from(NPUB_B)).await.unwrap();
    api.add_public_key(&Npub::from(NPUB_A)).await.unwrap();

    let npubs: Vec<String> = api
        .list_public_keys()
        .await
        .unwrap()
        .into_iter()
        .map(|key| key.npub.to_string())
        .collect();
    assert_eq!(npubs, vec![NPUB_B, NPUB_A]);
}

#[tokio::test]
async fn test_keys_are_scoped_to_account() {
    let service = FakeService::start().await;
    let alice = service.api_with_session(&service.login(&test_user("alice", 1)).await);
    let bob = service.api_with_session(&service.login(&test_user("bob", 2)).await);

    alice.add_public_key(&Npub::from(NPUB_A)).await.unwrap();

    assert!(bob.list_public_keys().await.unwrap().is_empty());
    assert_eq!(alice.list_public_keys().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_key_operations_require_session() {
    let service = FakeService::start().await;
    let api = service.anonymous_api();

    let err = api.list_public_keys().await.unwrap_err();
    assert!(err.is_authentication_error());

    let err = api.add_public_key(&Npub::from(NPUB_A)).await.unwrap_err();
    assert!(err.is_authentication_error());

    let err = api.delete_public_key(&Npub::from(NPUB_A)).await.unwrap_err();
    assert!(err.is_authentication_error());
}

#[tokio::test]
async fn test_add_rejected_keys_are_validation_errors() {
    let service = FakeService::start().await;
    let api = service.api_with_session(&service.login(&test_user("account-1", 1001)).await);

    let err = api.add_public_key(&Npub::from("nsec1secret")).await.unwrap_err();
    assert!(err.is_validation_error());

    api.add_public_key(&Npub::from(NPUB_A)).await.unwrap();
    let err = api.add_public_key(&Npub::from(NPUB_A)).await.unwrap_err();
    assert!(err.is_validation_error());
    assert!(err.to_string().contains("already linked"));
}

#[tokio::test]
async fn test_delete_removes_key() {
    let service = FakeService::start().await;
    let api = service.api_with_session(&service.login(&test_user("account-1", 1001)).await);

    api.add_public_key(&Npub::from(NPUB_A)).await.unwrap();
    api.add_public_key(&Npub::from(NPUB_B)).await.unwrap();
    api.delete_public_key(&Npub::from(NPUB_A)).await.unwrap();

    let keys = api.list_public_keys().await.unwrap();
    assert!(!keys.contains(NPUB_A));
    assert!(keys.contains(NPUB_B));
}

#[tokio::test]
async fn test_delete_missing_key_is_not_found() {
    let service = FakeService::start().await;
    let api = service.api_with_session(&service.login(&test_user("account-1", 1001)).await);

    let err = api.delete_public_key(&Npub::from("npubX")).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        err.as_api_error().unwrap().path(),
        "/api/current-user/public-keys/npubX"
    );
}

#[tokio::test]
async fn test_delete_escapes_npub_segment() {
    let service = FakeService::start().await;
    let api = service.api_with_session(&service.login(&test_user("account-1", 1001)).await);

    // A slash must stay inside one path segment rather than change the route.
    let err = api
        .delete_public_key(&Npub::from("npub1a/b"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        err.as_api_error().unwrap().path(),
        "/api/current-user/public-keys/npub1a%2Fb"
    );
}

#[tokio::test]
async fn test_delete_dot_segments_never_reach_collection() {
    let service = FakeService::start().await;
    let api = service.api_with_session(&service.login(&test_user("account-1", 1001)).await);
    api.add_public_key(&Npub::from(NPUB_A)).await.unwrap();
    let requests = service.request_count().await;

    for npub in ["..", ".", ""] {
        let err = api.delete_public_key(&Npub::from(npub)).await.unwrap_err();
        assert!(err.is_not_found(), "npub {npub:?}: {err}");
    }

    assert_eq!(service.request_count().await, requests);
    assert!(api.list_public_keys().await.unwrap().contains(NPUB_A));
}

#[tokio::test]
async fn test_server_failure_while_listing() {
    let service = FakeService::start().await;
    let api = service.api_with_session(&service.login(&test_user("account-1", 1001)).await);

    service.fail_next(StatusCode::SERVICE_UNAVAILABLE).await;
    let err = api.list_public_keys().await.unwrap_err();
    assert!(err.is_transport_error());
    assert_eq!(err.as_api_error().unwrap().status(), Some(503));

    // No retry happened; the next call goes through.
    assert!(api.list_public_keys().await.unwrap().is_empty());
}
