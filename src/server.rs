use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use askama::Template;
use axum::extract::{Form, Path, Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use log::{info, warn};
use serde::Deserialize;
use tokio::net::TcpListener;

use crate::db::Store;
use crate::error::AppError;
use crate::ops;
use crate::views::{EditPage, IndexPage};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Body of the add and edit forms.
#[derive(Debug, Deserialize)]
pub struct TaskForm {
    pub task: String,
}

type HandlerResult = Result<Response, AppError>;

/// `302 Found` back to the list view.
fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

async fn list_view(State(state): State<AppState>) -> HandlerResult {
    let tasks = ops::list_tasks(&*state.store.conn()?)?;
    Ok(Html(IndexPage { tasks }.render()?).into_response())
}

async fn add_task(State(state): State<AppState>, Form(form): Form<TaskForm>) -> HandlerResult {
    let task = ops::create_task(&*state.store.conn()?, &form.task)?;
    info!("created task {}", task.id);
    Ok(redirect_home())
}

async fn delete_task(State(state): State<AppState>, Path(task_id): Path<i64>) -> HandlerResult {
    if !ops::delete_task(&*state.store.conn()?, task_id)? {
        return Err(AppError::NotFound(task_id));
    }
    info!("deleted task {task_id}");
    Ok(redirect_home())
}

async fn edit_form(State(state): State<AppState>, Path(task_id): Path<i64>) -> HandlerResult {
    let task = ops::get_task(&*state.store.conn()?, task_id)?
        .ok_or(AppError::NotFound(task_id))?;
    Ok(Html(EditPage { task }.render()?).into_response())
}

async fn edit_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
    Form(form): Form<TaskForm>,
) -> HandlerResult {
    if !ops::update_title(&*state.store.conn()?, task_id, &form.task)? {
        return Err(AppError::NotFound(task_id));
    }
    info!("updated task {task_id}");
    Ok(redirect_home())
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let start = Instant::now();
    let resp = next.run(req).await;
    info!(
        "{method} {path} -> {} ({:.1}ms)",
        resp.status().as_u16(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    resp
}

/// Build the application router. Static assets are mounted separately by
/// the caller so tests can drive the routes without a filesystem.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_view))
        .route("/add", post(add_task))
        .route("/delete/{task_id}", get(delete_task))
        .route("/edit/{task_id}", get(edit_form).post(edit_task))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Serve `app` on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    let addr = listener.local_addr()?;
    info!("listening on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        warn!("failed to listen for Ctrl-C; shutdown only on process exit");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
