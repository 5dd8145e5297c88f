use std::sync::Arc;

use axum::http::StatusCode;
use crosspost::{Mutation, Session, SessionState, SessionStore, api::Npub};

use crate::helpers::{FakeService, test_user};

#[tokio::test]
async fn test_refresh_records_logged_in_user() {
    let service = FakeService::start().await;
    let user = test_user("account-1", 1001);
    let session = service.logged_in_session(&user).await;

    let current = session.refresh_current_user().await.unwrap();

    assert_eq!(current.user, Some(user.clone()));
    assert_eq!(session.store().user(), Some(user));
}

#[tokio::test]
async fn test_refresh_without_session_records_absent_user() {
    let service = FakeService::start().await;
    let session = Session::new(Arc::new(service.anonymous_api()), SessionStore::new());

    let current = session.refresh_current_user().await.unwrap();

    assert!(current.user.is_none());
    assert_eq!(session.store().state(), SessionState::default());
}

#[tokio::test]
async fn test_refresh_failure_keeps_previous_state() {
    let service = FakeService::start().await;
    let user = test_user("account-1", 1001);
    let session = service.logged_in_session(&user).await;
    session.refresh_current_user().await.unwrap();
    let before = session.store().state();

    service.fail_next(StatusCode::BAD_GATEWAY).await;
    let err = session.refresh_current_user().await.unwrap_err();

    assert!(err.is_transport_error());
    assert_eq!(session.store().state(), before);
}

#[tokio::test]
async fn test_logout_clears_user() {
    let service = FakeService::start().await;
    let session = service.logged_in_session(&test_user("account-1", 1001)).await;
    session.refresh_current_user().await.unwrap();
    assert!(session.store().is_authenticated());

    session.logout_current_user().await.unwrap();
    assert!(!session.store().is_authenticated());

    // A later refresh confirms the server agrees.
    let current = session.refresh_current_user().await.unwrap();
    assert!(current.user.is_none());
}

#[tokio::test]
async fn test_failed_logout_keeps_user_logged_in() {
    let service = FakeService::start().await;
    let user = test_user("account-1", 1001);
    let session = service.logged_in_session(&user).await;
    session.refresh_current_user().await.unwrap();

    service.fail_next(StatusCode::INTERNAL_SERVER_ERROR).await;
    assert!(session.logout_current_user().await.is_err());

    assert_eq!(session.store().user(), Some(user.clone()));
    let current = session.refresh_current_user().await.unwrap();
    assert_eq!(current.user, Some(user));
}

#[tokio::test]
async fn test_key_management_leaves_store_untouched() {
    let service = FakeService::start().await;
    let session = service.logged_in_session(&test_user("account-1", 1001)).await;
    session.refresh_current_user().await.unwrap();
    let before = session.store().state();

    let npub = Npub::from("npub1abc");
    session.add_public_key(&npub).await.unwrap();
    assert!(session.public_keys().await.unwrap().contains("npub1abc"));

    let err = session
        .delete_public_key(&Npub::from("npubX"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    session.delete_public_key(&npub).await.unwrap();
    assert!(session.public_keys().await.unwrap().is_empty());

    assert_eq!(session.store().state(), before);
}

#[tokio::test]
async fn test_caller_surfaces_failures_as_notifications() {
    let service = FakeService::start().await;
    let session = service.logged_in_session(&test_user("account-1", 1001)).await;
    let store = session.store().clone();

    if let Err(e) = session.add_public_key(&Npub::from("not-a-key")).await {
        store.commit(Mutation::PushNotificationError(e.to_string()));
    }
    if let Err(e) = session.delete_public_key(&Npub::from("npub1gone")).await {
        store.commit(Mutation::PushNotificationError(e.to_string()));
    }

    let notifications = store.notifications();
    assert_eq!(notifications.len(), 2);
    assert!(notifications[0].text.contains("isn't an npub"));
    assert!(notifications[1].text.contains("Not found"));

    store.commit(Mutation::DismissNotification(0));
    assert_eq!(store.notifications().len(), 1);
    assert!(store.notifications()[0].text.contains("Not found"));
}

#[tokio::test]
async fn test_sessions_share_one_injected_store() {
    let service = FakeService::start().await;
    let user = test_user("account-1", 1001);
    let token = service.login(&user).await;

    let store = SessionStore::new();
    let first = Session::new(Arc::new(service.api_with_session(&token)), store.clone());
    let second = Session::new(Arc::new(service.api_with_session(&token)), store.clone());
    let mut observer = store.subscribe();

    first.refresh_current_user().await.unwrap();
    assert_eq!(observer.changed().await.unwrap().user, Some(user));

    second.logout_current_user().await.unwrap();
    assert!(observer.changed().await.unwrap().user.is_none());
    assert!(!first.store().is_authenticated());
}
