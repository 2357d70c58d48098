//! Task Router

use crate::domain::repository::TaskRepository;
use crate::presentation::handlers::{self, TaskAppState};
use auth::GatePipeline;
use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

/// Create the task router for any repository implementation
///
/// Reads are open. `POST`, `PUT` and `DELETE` run `gates` first.
pub fn task_router<R>(repo: R, gates: Arc<GatePipeline>) -> Router
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let state = TaskAppState {
        repo: Arc::new(repo),
    };

    let guard = middleware::from_fn_with_state(gates, auth::middleware::enforce);

    Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks::<R>)
                .merge(post(handlers::create_task::<R>).route_layer(guard.clone())),
        )
        .route(
            "/tasks/{id}",
            get(handlers::get_task::<R>).merge(
                put(handlers::update_task::<R>)
                    .delete(handlers::delete_task::<R>)
                    .route_layer(guard),
            ),
        )
        .with_state(state)
}
