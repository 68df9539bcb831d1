use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;
use votes_api::Dependencies;
use votes_api::config::cors_layer;
use votes_api::server::create_app;
use votes_repository::InMemoryVotesStore;
use votes_shared::types::{UserId, VoteTarget};

struct Fixture {
    app: Router,
    store: Arc<InMemoryVotesStore>,
    author: UserId,
    voter: UserId,
    post: VoteTarget,
    comment: VoteTarget,
}

fn fixture() -> Fixture {
    let store = Arc::new(InMemoryVotesStore::new());
    let author = store.add_user();
    let voter = store.add_user();
    let post = store.add_post(author);
    let comment = store.add_comment(author);
    let deps = Dependencies::in_memory(store.clone());
    let app = create_app(deps.engine, cors_layer(&["*".to_string()]));
    Fixture {
        app,
        store,
        author,
        voter,
        post,
        comment,
    }
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn vote(uri: &str, voter: Option<UserId>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(voter) = voter {
        builder = builder.header("x-user-id", voter.to_string());
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let f = fixture();
    let response = f.app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_first_upvote_on_post() {
    let f = fixture();
    let uri = format!("/posts/{}/vote", f.post.id);

    let (status, body) = send(&f.app, vote(&uri, Some(f.voter), json!({ "type": "upvote" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["votes"], json!(1));
    assert_eq!(body["id"], json!(f.post.id.to_string()));
    assert!(body.get("message").is_none());

    let (_, author) = send(&f.app, get(&format!("/users/{}/score", f.author))).await;
    assert_eq!(author["score"], json!(10));
    assert_eq!(author["userId"], json!(f.author.to_string()));
    let (_, voter) = send(&f.app, get(&format!("/users/{}/score", f.voter))).await;
    assert_eq!(voter["score"], json!(2));
}

#[tokio::test]
async fn test_repeat_and_change_messages() {
    let f = fixture();
    let uri = format!("/comments/{}/vote", f.comment.id);

    send(&f.app, vote(&uri, Some(f.voter), json!({ "type": "upvote" }))).await;
    let (status, body) = send(&f.app, vote(&uri, Some(f.voter), json!({ "type": "upvote" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["votes"], json!(1));
    assert_eq!(body["message"], json!("Vote unchanged"));

    let request = vote(&uri, Some(f.voter), json!({ "type": "downvote" }));
    let (status, body) = send(&f.app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["votes"], json!(0));
    assert_eq!(body["message"], json!("Vote updated"));
    assert_eq!(f.store.vote_count(f.comment.id), 1);

    let (status, body) = send(&f.app, get(&format!("/comments/{}/votes", f.comment.id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["votes"], json!(0));
}

#[tokio::test]
async fn test_invalid_vote_type() {
    let f = fixture();
    let uri = format!("/posts/{}/vote", f.post.id);

    let request = vote(&uri, Some(f.voter), json!({ "type": "sideways" }));
    let (status, body) = send(&f.app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid vote type" }));

    let (status, _) = send(&f.app, vote(&uri, Some(f.voter), json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, tally) = send(&f.app, get(&format!("/posts/{}/votes", f.post.id))).await;
    assert_eq!(tally["votes"], json!(0));
    assert_eq!(f.store.vote_count(f.post.id), 0);
}

#[tokio::test]
async fn test_missing_caller_is_forbidden() {
    let f = fixture();
    let uri = format!("/posts/{}/vote", f.post.id);

    let (status, body) = send(&f.app, vote(&uri, None, json!({ "type": "upvote" }))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].is_string());
    assert_eq!(f.store.vote_count(f.post.id), 0);
}

#[tokio::test]
async fn test_unknown_target() {
    let f = fixture();

    let uri = format!("/posts/{}/vote", Uuid::new_v4());
    let (status, body) = send(&f.app, vote(&uri, Some(f.voter), json!({ "type": "upvote" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Post not found" }));

    // A comment id is not a post.
    let uri = format!("/posts/{}/vote", f.comment.id);
    let (status, _) = send(&f.app, vote(&uri, Some(f.voter), json!({ "type": "upvote" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&f.app, get(&format!("/users/{}/score", Uuid::new_v4()))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_path_id() {
    let f = fixture();

    let request = vote("/posts/42/vote", Some(f.voter), json!({ "type": "upvote" }));
    let (status, body) = send(&f.app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid post id" }));

    let (status, _) = send(&f.app, get("/users/alice/score")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
