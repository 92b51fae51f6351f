//! HTTP controller - axum routes for the employee forms
//!
//! Every route is a stateless request → response step:
//! parse the form, call the [`EmployeeService`] on the blocking pool, then
//! either redirect (303 to `/employees`), render a page, or render the shared
//! error view with the failure message.

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use staffdb_domain::RepositoryError;
use staffdb_usecase::{EmployeeService, StaffError, StaffResult};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use super::forms::{AddEmployeeForm, DeleteEmployeeForm, SearchQuery, UpdateEmployeeForm};
use crate::presenter::{PageRenderer, ViewError};

/// Where successful mutations send the browser
pub const LIST_PATH: &str = "/employees";

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    service: EmployeeService,
    pages: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(service: EmployeeService, pages: PageRenderer) -> Self {
        Self {
            service,
            pages: Arc::new(pages),
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/employees", get(list_employees))
        .route("/add", get(add_page).post(add_employee))
        .route("/update", get(update_page).post(update_employee))
        .route("/delete", get(delete_page).post(delete_employee))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the router on `listener` until `shutdown` resolves
pub async fn serve<S>(listener: TcpListener, state: AppState, shutdown: S) -> std::io::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "staff directory listening");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Which page a failure came from; prefixes the error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    View,
    Add,
    Update,
    Delete,
}

impl Page {
    fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home page",
            Page::View => "View page",
            Page::Add => "Add page",
            Page::Update => "Update page",
            Page::Delete => "Delete page",
        }
    }
}

// Handlers

async fn health_check() -> &'static str {
    "ok"
}

async fn home(State(state): State<AppState>) -> Response {
    match run(&state, |service| service.directory()).await {
        Ok(records) => html(state.pages.home(&records)),
        Err(err) => failure(&state, Page::Home, err),
    }
}

async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Response {
    let employee_id = match query.employee_id() {
        Ok(id) => id,
        Err(err) => return failure(&state, Page::View, err.into()),
    };

    match run(&state, move |service| service.search(employee_id)).await {
        Ok(records) => html(state.pages.employee_list(&records)),
        Err(err) => failure(&state, Page::View, err),
    }
}

async fn add_page(State(state): State<AppState>) -> Response {
    html(state.pages.add_form())
}

async fn add_employee(State(state): State<AppState>, Form(form): Form<AddEmployeeForm>) -> Response {
    let draft = match form.into_draft() {
        Ok(draft) => draft,
        Err(err) => return failure(&state, Page::Add, err.into()),
    };

    match run(&state, move |service| service.add(draft)).await {
        Ok(_) => Redirect::to(LIST_PATH).into_response(),
        Err(err) => failure(&state, Page::Add, err),
    }
}

async fn update_page(State(state): State<AppState>) -> Response {
    html(state.pages.update_form())
}

async fn update_employee(
    State(state): State<AppState>,
    Form(form): Form<UpdateEmployeeForm>,
) -> Response {
    let (old_id, draft) = match form.into_parts() {
        Ok(parts) => parts,
        Err(err) => return failure(&state, Page::Update, err.into()),
    };

    match run(&state, move |service| service.update(old_id, draft)).await {
        Ok(_) => Redirect::to(LIST_PATH).into_response(),
        Err(err) => failure(&state, Page::Update, err),
    }
}

async fn delete_page(State(state): State<AppState>) -> Response {
    html(state.pages.delete_form())
}

async fn delete_employee(
    State(state): State<AppState>,
    Form(form): Form<DeleteEmployeeForm>,
) -> Response {
    let employee_id = match form.employee_id() {
        Ok(id) => id,
        Err(err) => return failure(&state, Page::Delete, err.into()),
    };

    match run(&state, move |service| service.delete(employee_id)).await {
        Ok(_) => Redirect::to(LIST_PATH).into_response(),
        Err(err) => failure(&state, Page::Delete, err),
    }
}

// Helpers

/// Run a service call on the blocking pool; store adapters do synchronous IO
async fn run<T, F>(state: &AppState, op: F) -> StaffResult<T>
where
    F: FnOnce(&EmployeeService) -> StaffResult<T> + Send + 'static,
    T: Send + 'static,
{
    let service = state.service.clone();
    match tokio::task::spawn_blocking(move || op(&service)).await {
        Ok(result) => result,
        Err(err) => Err(StaffError::Repository(RepositoryError::PersistenceError {
            message: format!("store task failed: {err}"),
        })),
    }
}

fn status_for(err: &StaffError) -> StatusCode {
    match err {
        StaffError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        StaffError::NotFound(_) => StatusCode::NOT_FOUND,
        StaffError::Conflict { .. } => StatusCode::CONFLICT,
        StaffError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn failure(state: &AppState, page: Page, err: StaffError) -> Response {
    match &err {
        StaffError::Repository(cause) => error!(page = page.label(), error = %cause, "store failure"),
        other => debug!(page = page.label(), error = %other, "request rejected"),
    }

    let messages = vec![format!("{}: {}", page.label(), err)];
    render(state.pages.error_page(&messages), status_for(&err))
}

fn html(rendered: Result<String, ViewError>) -> Response {
    render(rendered, StatusCode::OK)
}

fn render(rendered: Result<String, ViewError>, status: StatusCode) -> Response {
    match rendered {
        Ok(body) => (status, Html(body)).into_response(),
        Err(err) => {
            error!(error = %err, "failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
