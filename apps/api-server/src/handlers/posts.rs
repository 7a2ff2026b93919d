//! Post CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use dashboard_core::domain::{Post, PostChanges};
use dashboard_shared::dto::{CreatePostRequest, DeleteResponse, UpdatePostRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/posts - Protected route
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = Post::new(req.title, req.content)?;
    let saved = state.posts.insert(post).await?;

    tracing::info!(post_id = %saved.id, operator = %identity.username, "Post created");

    Ok(HttpResponse::Created().json(saved))
}

/// GET /api/posts - Public route
///
/// All posts, most recently created first. An empty store yields `[]`.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// PUT /api/posts/{id} - Protected route
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let req = body.into_inner();

    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;
    post.apply(PostChanges {
        title: req.title,
        content: req.content,
    })?;
    let saved = state.posts.update(post).await?;

    tracing::info!(post_id = %saved.id, operator = %identity.username, "Post updated");

    Ok(HttpResponse::Ok().json(saved))
}

/// DELETE /api/posts/{id} - Protected route
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    state.posts.delete(id).await?;

    tracing::info!(post_id = %id, operator = %identity.username, "Post deleted");

    Ok(HttpResponse::Ok().json(DeleteResponse { success: true }))
}

/// Post ids are opaque to clients: anything that does not parse as an id
/// cannot name an existing post, so it maps to not-found rather than to a
/// parse error.
fn parse_post_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test, web};
    use chrono::{DateTime, Duration, Utc};

    use dashboard_core::domain::Post;
    use dashboard_core::ports::TokenService;

    use crate::handlers::configure_routes;
    use crate::testing::{
        FailingPostRepository, InMemoryPostRepository, test_state, test_token_service,
    };

    fn fixture() -> (Arc<InMemoryPostRepository>, Arc<dyn TokenService>) {
        (
            Arc::new(InMemoryPostRepository::default()),
            test_token_service(),
        )
    }

    fn bearer(tokens: &Arc<dyn TokenService>) -> (&'static str, String) {
        (
            "Authorization",
            format!("Bearer {}", tokens.issue("jorge").unwrap()),
        )
    }

    fn post_aged(title: &str, age_minutes: i64) -> Post {
        let mut post = Post::new(title.to_string(), "Content".to_string()).unwrap();
        post.created_at = Utc::now() - Duration::minutes(age_minutes);
        post.updated_at = post.created_at;
        post
    }

    macro_rules! service {
        ($repo:expr, $tokens:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(test_state($repo.clone())))
                    .app_data(web::Data::new($tokens.clone()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn create_without_token_is_unauthorized() {
        let (repo, tokens) = fixture();
        let svc = service!(repo, tokens);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(serde_json::json!({"title": "x", "content": "y"}))
            .to_request();
        let resp = test::call_service(&svc, req).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Missing token");
    }

    #[actix_web::test]
    async fn create_with_garbage_token_is_forbidden() {
        let (repo, tokens) = fixture();
        let svc = service!(repo, tokens);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("Authorization", "Bearer not-a-real-token"))
            .set_json(serde_json::json!({"title": "x", "content": "y"}))
            .to_request();
        let resp = test::call_service(&svc, req).await;

        assert_eq!(resp.status(), 403);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid token");
    }

    #[actix_web::test]
    async fn create_then_list_roundtrip() {
        let (repo, tokens) = fixture();
        let svc = service!(repo, tokens);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(bearer(&tokens))
            .set_json(serde_json::json!({"title": "Hello", "content": "World"}))
            .to_request();
        let resp = test::call_service(&svc, req).await;

        assert_eq!(resp.status(), 201);
        let created: serde_json::Value = test::read_body_json(resp).await;
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(created["title"], "Hello");

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let resp = test::call_service(&svc, req).await;

        assert_eq!(resp.status(), 200);
        let listed: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["id"], id.as_str());
        assert_eq!(listed[0]["title"], "Hello");
        assert_eq!(listed[0]["content"], "World");
    }

    #[actix_web::test]
    async fn create_with_empty_title_is_rejected() {
        let (repo, tokens) = fixture();
        let svc = service!(repo, tokens);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(bearer(&tokens))
            .set_json(serde_json::json!({"title": "", "content": "y"}))
            .to_request();
        let resp = test::call_service(&svc, req).await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["details"].as_str().unwrap().contains("title"));
    }

    #[actix_web::test]
    async fn list_on_empty_store_is_empty_array() {
        let (repo, tokens) = fixture();
        let svc = service!(repo, tokens);

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let resp = test::call_service(&svc, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!([]));
    }

    #[actix_web::test]
    async fn list_orders_most_recent_first() {
        let (repo, tokens) = fixture();
        for post in [
            post_aged("First", 30),
            post_aged("Second", 20),
            post_aged("Third", 10),
        ] {
            repo.seed(post);
        }
        let svc = service!(repo, tokens);

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let resp = test::call_service(&svc, req).await;

        let body: serde_json::Value = test::read_body_json(resp).await;
        let titles: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);
    }

    #[actix_web::test]
    async fn update_replaces_fields_and_keeps_created_at() {
        let (repo, tokens) = fixture();
        let post = post_aged("Before", 10);
        let id = post.id;
        let created_at = post.created_at;
        repo.seed(post);
        let svc = service!(repo, tokens);

        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/{id}"))
            .insert_header(bearer(&tokens))
            .set_json(serde_json::json!({"title": "After"}))
            .to_request();
        let resp = test::call_service(&svc, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["id"].as_str().unwrap(), id.to_string());
        assert_eq!(body["title"], "After");
        assert_eq!(body["content"], "Content");

        let returned_created_at: DateTime<Utc> = body["created_at"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(returned_created_at, created_at);
    }

    #[actix_web::test]
    async fn update_of_unknown_id_is_not_found() {
        let (repo, tokens) = fixture();
        let svc = service!(repo, tokens);

        let req = test::TestRequest::put()
            .uri("/api/posts/does-not-exist")
            .insert_header(bearer(&tokens))
            .set_json(serde_json::json!({"title": "x", "content": "y"}))
            .to_request();
        let resp = test::call_service(&svc, req).await;

        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Post not found");
    }

    #[actix_web::test]
    async fn delete_twice_is_not_found_the_second_time() {
        let (repo, tokens) = fixture();
        let post = post_aged("Doomed", 5);
        let id = post.id;
        repo.seed(post);
        let svc = service!(repo, tokens);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/{id}"))
            .insert_header(bearer(&tokens))
            .to_request();
        let resp = test::call_service(&svc, req).await;
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({"success": true}));

        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/{id}"))
            .insert_header(bearer(&tokens))
            .to_request();
        let resp = test::call_service(&svc, req).await;
        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Post not found");
    }

    #[actix_web::test]
    async fn repository_fault_maps_to_generic_server_error() {
        let repo = Arc::new(FailingPostRepository);
        let tokens = test_token_service();
        let svc = service!(repo, tokens);

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let resp = test::call_service(&svc, req).await;

        assert_eq!(resp.status(), 500);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["details"], "database query failed");

        // Same mapping on the mutating path; the raw store error never
        // reaches the response body.
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(bearer(&tokens))
            .set_json(serde_json::json!({"title": "x", "content": "y"}))
            .to_request();
        let resp = test::call_service(&svc, req).await;

        assert_eq!(resp.status(), 500);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Internal server error");
        assert!(!body["details"].as_str().unwrap().contains("connection reset"));
    }

    #[actix_web::test]
    async fn delete_without_token_leaves_the_post_in_place() {
        let (repo, tokens) = fixture();
        let post = post_aged("Safe", 5);
        let id = post.id;
        repo.seed(post);
        let svc = service!(repo, tokens);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/{id}"))
            .to_request();
        let resp = test::call_service(&svc, req).await;
        assert_eq!(resp.status(), 401);

        // The guard rejected before the repository was touched
        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let resp = test::call_service(&svc, req).await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }
}
