//! Board integration tests
//!
//! Every test runs against a real JSON file in its own scratch directory.
//!
//! Run with: cargo test -p integration-tests --test board_tests

use std::sync::Arc;

use board_common::auth::CredentialMode;
use board_common::AppConfig;
use board_core::{Credentials, Identity};
use board_db::MemoryDocumentStore;
use board_service::dto::{AddCommentRequest, CreatePostRequest, LoginRequest, RegisterRequest};
use board_service::Board;
use integration_tests::{assert_error_code, Account, TestBoard};

// ============================================================================
// Walkthrough
// ============================================================================

#[tokio::test]
async fn test_register_post_comment_walkthrough() {
    let t = TestBoard::start().await.unwrap();
    let board = &t.board;

    board.register(RegisterRequest::new("alice", "p1")).await.unwrap();
    assert_error_code(
        board.register(RegisterRequest::new("alice", "p2")).await,
        "DUPLICATE_USER",
    );

    let me = board.authenticate(LoginRequest::new("alice", "p1")).unwrap();
    assert_eq!(me.name.as_deref(), Some("alice"));

    let alice = board.resolve(Some(&Credentials::new("alice", "p1")));
    let post = board
        .create_post(&alice, CreatePostRequest::new("hello"))
        .await
        .unwrap();
    assert_eq!(post.author, "alice");
    assert_eq!(post.text, "hello");
    assert!(post.comments.is_empty());

    let post = board
        .add_comment(&alice, AddCommentRequest::new(post.id.clone(), "hi"))
        .await
        .unwrap();
    assert_eq!(post.comments.len(), 1);
    assert_eq!(post.comments[0].author, "alice");
    assert_eq!(post.comments[0].text, "hi");

    let feed = board.feed(&alice).unwrap();
    assert_eq!(feed.posts, vec![post]);
}

#[tokio::test]
async fn test_persisted_layout_is_pretty_json() {
    let t = TestBoard::start().await.unwrap();
    let alice = t.sign_up(&Account::new("alice", "p1")).await.unwrap();
    let post = t
        .board
        .create_post(&alice, CreatePostRequest::new("hello"))
        .await
        .unwrap();

    let raw = t.raw().unwrap().unwrap();
    let expected = format!(
        "{{\n  \"users\": [\n    {{\n      \"name\": \"alice\",\n      \"password\": \"p1\"\n    }}\n  ],\n  \"posts\": [\n    {{\n      \"id\": \"{}\",\n      \"author\": \"alice\",\n      \"text\": \"hello\",\n      \"comments\": []\n    }}\n  ]\n}}",
        post.id
    );
    assert_eq!(raw, expected);
}

// ============================================================================
// Identity
// ============================================================================

#[tokio::test]
async fn test_anonymous_is_turned_away() {
    let t = TestBoard::start().await.unwrap();
    let anonymous = t.board.resolve(None);
    assert_eq!(anonymous, Identity::Anonymous);

    assert_error_code(t.board.feed(&anonymous), "UNAUTHENTICATED");
    assert_error_code(
        t.board
            .create_post(&anonymous, CreatePostRequest::new("hello"))
            .await,
        "UNAUTHENTICATED",
    );
    assert_error_code(
        t.board
            .add_comment(&anonymous, AddCommentRequest::new("1", "hi"))
            .await,
        "UNAUTHENTICATED",
    );
    assert!(t.raw().unwrap().is_none());
}

#[tokio::test]
async fn test_authenticate_succeeds_iff_name_and_secret_match() {
    let t = TestBoard::start().await.unwrap();
    let account = Account::unique();
    t.board.register(account.register_request()).await.unwrap();

    let attempts = [
        (account.name.clone(), account.password.clone(), true),
        (account.name.clone(), format!("{}x", account.password), false),
        (account.name.to_uppercase(), account.password.clone(), false),
        (format!(" {}", account.name), account.password.clone(), false),
        ("nobody".to_string(), account.password.clone(), false),
    ];

    for (name, password, expected) in attempts {
        let result = t.board.authenticate(LoginRequest::new(&name, &password));
        assert_eq!(result.is_ok(), expected, "{name}/{password}");
        if !expected {
            assert_error_code(result, "INVALID_CREDENTIALS");
        }
        assert_eq!(
            t.board
                .resolve(Some(&Credentials::new(&name, &password)))
                .is_authenticated(),
            expected
        );
    }
}

#[tokio::test]
async fn test_hashed_mode_never_persists_the_secret() {
    let t = TestBoard::start_with_mode(CredentialMode::Hashed).await.unwrap();
    let account = Account::unique();
    t.sign_up(&account).await.unwrap();

    let raw = t.raw().unwrap().unwrap();
    assert!(!raw.contains(&account.password));
    assert!(raw.contains("$argon2"));
    assert!(t.board.authenticate(account.login_request()).is_ok());
}

#[tokio::test]
async fn test_hashed_board_accepts_legacy_cleartext_records() {
    let t = TestBoard::start_with_mode(CredentialMode::Hashed).await.unwrap();
    std::fs::write(
        t.path(),
        r#"{"users":[{"name":"legacy","password":"old-secret"}],"posts":[]}"#,
    )
    .unwrap();

    let board = t.reopen().await.unwrap();
    assert!(board.authenticate(LoginRequest::new("legacy", "old-secret")).is_ok());

    board.register(RegisterRequest::new("modern", "new-secret")).await.unwrap();
    assert!(board.authenticate(LoginRequest::new("modern", "new-secret")).is_ok());
}

#[tokio::test]
async fn test_logout_returns_to_anonymous() {
    let t = TestBoard::start().await.unwrap();
    let alice = t.sign_up(&Account::unique()).await.unwrap();

    let after = t.board.logout(&alice);
    assert!(!after.authenticated);
    assert!(after.name.is_none());
}

// ============================================================================
// Content
// ============================================================================

#[tokio::test]
async fn test_posts_and_comments_keep_order() {
    let t = TestBoard::start().await.unwrap();
    let alice = t.sign_up(&Account::unique()).await.unwrap();
    let bob = t.sign_up(&Account::unique()).await.unwrap();

    let first = t
        .board
        .create_post(&alice, CreatePostRequest::new("first"))
        .await
        .unwrap();
    t.board
        .create_post(&bob, CreatePostRequest::new("second"))
        .await
        .unwrap();
    t.board
        .create_post(&alice, CreatePostRequest::new("third"))
        .await
        .unwrap();

    for (who, text) in [(&bob, "a"), (&alice, "b"), (&bob, "c")] {
        t.board
            .add_comment(who, AddCommentRequest::new(first.id.clone(), text))
            .await
            .unwrap();
    }

    let feed = t.board.feed(&alice).unwrap();
    let texts: Vec<_> = feed.posts.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, ["first", "second", "third"]);

    let thread: Vec<_> = feed.posts[0].comments.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(thread, ["a", "b", "c"]);
}

#[tokio::test]
async fn test_blank_content_is_rejected() {
    let t = TestBoard::start().await.unwrap();
    let alice = t.sign_up(&Account::unique()).await.unwrap();
    let before = t.raw().unwrap();

    assert_error_code(
        t.board.create_post(&alice, CreatePostRequest::new(" \n\t ")).await,
        "EMPTY_CONTENT",
    );
    assert_eq!(t.raw().unwrap(), before);
}

#[tokio::test]
async fn test_comment_on_missing_post_leaves_file_untouched() {
    let t = TestBoard::start().await.unwrap();
    let alice = t.sign_up(&Account::unique()).await.unwrap();
    t.board
        .create_post(&alice, CreatePostRequest::new("hello"))
        .await
        .unwrap();
    let before = t.raw().unwrap();

    assert_error_code(
        t.board
            .add_comment(&alice, AddCommentRequest::new("does-not-exist", "hi"))
            .await,
        "UNKNOWN_POST",
    );
    assert_eq!(t.raw().unwrap(), before);
}

// ============================================================================
// Persistence
// ============================================================================

#[tokio::test]
async fn test_reopened_board_sees_everything() {
    let t = TestBoard::start().await.unwrap();
    let account = Account::unique();
    let alice = t.sign_up(&account).await.unwrap();
    let post = t
        .board
        .create_post(&alice, CreatePostRequest::new("hello"))
        .await
        .unwrap();
    t.board
        .add_comment(&alice, AddCommentRequest::new(post.id.clone(), "hi"))
        .await
        .unwrap();

    let reopened = t.reopen().await.unwrap();
    let alice = reopened.resolve(Some(&account.credentials()));
    assert!(alice.is_authenticated());
    assert_eq!(reopened.feed(&alice).unwrap(), t.board.feed(&alice).unwrap());
}

#[tokio::test]
async fn test_corrupt_file_opens_as_empty_board() {
    let t = TestBoard::start().await.unwrap();
    std::fs::write(t.path(), "{\"users\": [{\"name\": \"alice\"").unwrap();

    let board = t.reopen().await.unwrap();
    assert_error_code(
        board.authenticate(LoginRequest::new("alice", "p1")),
        "INVALID_CREDENTIALS",
    );

    // The first successful mutation replaces the corrupt file
    board.register(RegisterRequest::new("alice", "p1")).await.unwrap();
    let raw = std::fs::read_to_string(t.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["users"][0]["name"], "alice");
}

#[tokio::test]
async fn test_legacy_document_with_timestamp_ids() {
    let t = TestBoard::start().await.unwrap();
    std::fs::write(
        t.path(),
        r#"{
  "users": [{"name": "alice", "password": "p1"}],
  "posts": [
    {"id": "1700000000000", "author": "alice", "text": "first", "comments": []},
    {"id": "1700000000000", "author": "alice", "text": "twin", "comments": []}
  ]
}"#,
    )
    .unwrap();

    let board = t.reopen().await.unwrap();
    let alice = board.resolve(Some(&Credentials::new("alice", "p1")));
    let post = board
        .add_comment(&alice, AddCommentRequest::new("1700000000000", "hi"))
        .await
        .unwrap();
    assert_eq!(post.text, "first");

    let feed = board.feed(&alice).unwrap();
    assert_eq!(feed.posts.len(), 2);
    assert!(feed.posts[1].comments.is_empty());
}

#[tokio::test]
async fn test_failed_save_changes_nothing() {
    let store = Arc::new(MemoryDocumentStore::new());
    let mut config = AppConfig::default();
    config.auth.credential_mode = CredentialMode::Plaintext;
    let board = Board::open_with_store(&config, store.clone()).await.unwrap();

    board.register(RegisterRequest::new("alice", "p1")).await.unwrap();
    let alice = board.resolve(Some(&Credentials::new("alice", "p1")));
    let before = store.raw();

    store.set_fail_saves(true);
    assert_error_code(
        board.create_post(&alice, CreatePostRequest::new("hello")).await,
        "STORAGE_FAILURE",
    );
    assert_eq!(store.raw(), before);
    assert!(board.feed(&alice).unwrap().posts.is_empty());

    // Retrying after the medium recovers succeeds with a fresh post
    store.set_fail_saves(false);
    board
        .create_post(&alice, CreatePostRequest::new("hello"))
        .await
        .unwrap();
    assert_eq!(board.feed(&alice).unwrap().posts.len(), 1);
}

#[tokio::test]
async fn test_unreadable_store_rejects_writes_without_losing_data() {
    let store = Arc::new(MemoryDocumentStore::new());
    let mut config = AppConfig::default();
    config.auth.credential_mode = CredentialMode::Plaintext;
    let board = Board::open_with_store(&config, store.clone()).await.unwrap();

    board.register(RegisterRequest::new("alice", "p1")).await.unwrap();
    let alice = board.resolve(Some(&Credentials::new("alice", "p1")));
    board
        .create_post(&alice, CreatePostRequest::new("keep me"))
        .await
        .unwrap();
    let before = store.raw();

    store.set_fail_loads(true);
    assert_error_code(
        board.register(RegisterRequest::new("bob", "p2")).await,
        "STORAGE_FAILURE",
    );
    assert_error_code(
        board.create_post(&alice, CreatePostRequest::new("lost?")).await,
        "STORAGE_FAILURE",
    );
    assert_eq!(store.raw(), before);

    // Reads keep serving the last committed state
    let feed = board.feed(&alice).unwrap();
    assert_eq!(feed.posts.len(), 1);
    assert_eq!(feed.posts[0].text, "keep me");

    store.set_fail_loads(false);
    board.register(RegisterRequest::new("bob", "p2")).await.unwrap();
    let raw = store.raw().unwrap();
    assert!(raw.contains("\"alice\"") && raw.contains("\"bob\"") && raw.contains("keep me"));
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_posts_are_all_kept() {
    let t = TestBoard::start().await.unwrap();
    let board = Arc::new(t.board.clone());

    let mut authors = Vec::new();
    for _ in 0..8 {
        authors.push(t.sign_up(&Account::unique()).await.unwrap());
    }

    let tasks: Vec<_> = authors
        .iter()
        .cloned()
        .enumerate()
        .flat_map(|(i, author)| {
            (0..4).map(move |n| (author.clone(), format!("post {i}-{n}")))
        })
        .map(|(author, text)| {
            let board = Arc::clone(&board);
            tokio::spawn(async move {
                board
                    .create_post(&author, CreatePostRequest::new(text))
                    .await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for result in futures::future::join_all(tasks).await {
        ids.push(result.unwrap().unwrap().id);
    }

    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 32);

    let reopened = t.reopen().await.unwrap();
    assert_eq!(reopened.feed(&authors[0]).unwrap().posts.len(), 32);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registration_of_one_name() {
    let t = TestBoard::start().await.unwrap();
    let board = Arc::new(t.board.clone());

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let board = Arc::clone(&board);
            tokio::spawn(async move {
                board
                    .register(RegisterRequest::new("contested", format!("p{i}")))
                    .await
            })
        })
        .collect();

    let results: Vec<_> = futures::future::join_all(tasks)
        .await
        .into_iter()
        .map(Result::unwrap)
        .collect();

    let winners = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1);
    for result in results.into_iter().filter(Result::is_err) {
        assert_error_code(result, "DUPLICATE_USER");
    }

    let raw = t.raw().unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["users"].as_array().unwrap().len(), 1);
}
