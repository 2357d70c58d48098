//! Unit tests for Tasks crate

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use crate::application::{
        CreateTaskInput, CreateTaskUseCase, DeleteTaskUseCase, QueryTasksUseCase,
        UpdateTaskUseCase,
    };
    use crate::domain::entities::TaskChanges;
    use crate::error::TaskError;
    use crate::infra::memory::InMemoryTaskRepository;

    fn input(id: &str, title: &str) -> CreateTaskInput {
        CreateTaskInput {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            due_date: None,
            status: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let repo = Arc::new(InMemoryTaskRepository::new());

        let id = CreateTaskUseCase::new(repo.clone())
            .execute(input("9", "T"), "alice")
            .await
            .unwrap();
        assert_eq!(id, "9");

        let task = QueryTasksUseCase::new(repo).get("9").await.unwrap();
        assert_eq!(task.title, "T");
    }

    #[tokio::test]
    async fn test_empty_id_rejected() {
        let repo = Arc::new(InMemoryTaskRepository::new());
        let err = CreateTaskUseCase::new(repo.clone())
            .execute(input("  ", "T"), "alice")
            .await
            .unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
        assert!(QueryTasksUseCase::new(repo).list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_task_is_not_found() {
        let repo = Arc::new(InMemoryTaskRepository::new());
        let changes = TaskChanges {
            title: "T".to_string(),
            description: String::new(),
            status: String::new(),
        };

        assert!(matches!(
            QueryTasksUseCase::new(repo.clone()).get("nope").await,
            Err(TaskError::NotFound)
        ));
        assert!(matches!(
            UpdateTaskUseCase::new(repo.clone())
                .execute("nope", changes, "alice")
                .await,
            Err(TaskError::NotFound)
        ));
        assert!(matches!(
            DeleteTaskUseCase::new(repo).execute("nope", "alice").await,
            Err(TaskError::NotFound)
        ));
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use auth::{AuthConfig, GatePipeline, TokenService, UserRole};
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::infra::memory::InMemoryTaskRepository;
    use crate::presentation::router::task_router;

    struct Harness {
        app: Router,
        admin: String,
        member: String,
    }

    fn harness() -> Harness {
        let tokens = Arc::new(TokenService::new(Arc::new(AuthConfig::development())));
        let admin = tokens.issue("alice", UserRole::Admin).unwrap();
        let member = tokens.issue("bob", UserRole::Member).unwrap();
        let gates = Arc::new(GatePipeline::authenticated(tokens).require_role(UserRole::Admin));

        Harness {
            app: task_router(InMemoryTaskRepository::new(), gates),
            admin,
            member,
        }
    }

    fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    #[tokio::test]
    async fn test_list_starts_empty() {
        let h = harness();
        let (status, body) = send(&h.app, request("GET", "/tasks", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_writes_require_admin() {
        let h = harness();
        let task = json!({"id": "1", "title": "T"});

        let (status, _) = send(&h.app, request("POST", "/tasks", None, Some(task.clone()))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            &h.app,
            request("POST", "/tasks", Some(&h.member), Some(task.clone())),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send(&h.app, request("DELETE", "/tasks/1", Some(&h.member), None)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send(
            &h.app,
            request("PUT", "/tasks/1", None, Some(json!({"title": "x"}))),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        // Nothing was written
        let (_, body) = send(&h.app, request("GET", "/tasks", None, None)).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_admin_crud() {
        let h = harness();

        let (status, body) = send(
            &h.app,
            request(
                "POST",
                "/tasks",
                Some(&h.admin),
                Some(json!({"id": "9", "title": "T", "due_date": "2030-01-02T03:04:05Z"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({"message": "task created successfully", "taskID": "9"})
        );

        let (status, body) = send(&h.app, request("GET", "/tasks/9", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "T");
        assert_eq!(body["due_date"], "2030-01-02T03:04:05Z");

        let (status, body) = send(
            &h.app,
            request(
                "PUT",
                "/tasks/9",
                Some(&h.admin),
                Some(json!({"title": "T2", "status": "done"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "task updated"}));

        let (_, body) = send(&h.app, request("GET", "/tasks/9", None, None)).await;
        assert_eq!(body["id"], "9");
        assert_eq!(body["title"], "T2");
        assert_eq!(body["status"], "done");
        assert_eq!(body["due_date"], "2030-01-02T03:04:05Z");

        let (status, body) = send(&h.app, request("DELETE", "/tasks/9", Some(&h.admin), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "task deleted"}));

        let (status, body) = send(&h.app, request("GET", "/tasks/9", None, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found_for_admin() {
        let h = harness();

        let (status, _) = send(
            &h.app,
            request("PUT", "/tasks/404", Some(&h.admin), Some(json!({"title": "x"}))),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&h.app, request("DELETE", "/tasks/404", Some(&h.admin), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let h = harness();

        let (status, _) = send(
            &h.app,
            request("POST", "/tasks", Some(&h.admin), Some(json!({"title": "no id"}))),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &h.app,
            request(
                "POST",
                "/tasks",
                Some(&h.admin),
                Some(json!({"id": "1", "title": "T", "due_date": "tomorrow"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
