use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use staffdb_adapter::controller::{router, AppState};
use staffdb_adapter::presenter::PageRenderer;
use staffdb_adapter::repository::{InMemoryEmployeeRepository, SqliteEmployeeRepository};
use staffdb_domain::{EmployeeId, EmployeeRepository};
use staffdb_usecase::EmployeeService;
use tower::ServiceExt;

fn app_with(repo: Arc<dyn EmployeeRepository>) -> Router {
    let state = AppState::new(EmployeeService::new(repo), PageRenderer::new().unwrap());
    router(state)
}

fn app() -> (Router, Arc<InMemoryEmployeeRepository>) {
    let repo = Arc::new(InMemoryEmployeeRepository::new());
    (app_with(repo.clone()), repo)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn add(app: &Router, form: &str) -> axum::response::Response {
    app.clone().oneshot(post("/add", form)).await.unwrap()
}

#[tokio::test]
async fn add_redirects_to_list_with_see_other() {
    let (app, repo) = app();

    let response = add(
        &app,
        "employee_id=1&full_name=Jane+Doe&age=30&department=information+technology",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/employees");

    let stored = repo.find_by_id(EmployeeId::new(1)).unwrap().unwrap();
    assert_eq!(
        stored.employee().department().display_name(),
        "Information Technology"
    );
}

#[tokio::test]
async fn list_shows_added_employees() {
    let (app, _) = app();
    add(&app, "employee_id=2&full_name=Bob+Stone&age=50&department=Finance").await;
    add(&app, "employee_id=1&full_name=Jane+Doe&age=30&department=Marketing").await;

    let response = app.clone().oneshot(get("/employees")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    let jane = body.find("Jane Doe").unwrap();
    let bob = body.find("Bob Stone").unwrap();
    assert!(jane < bob, "employees should be listed by ascending id");
}

#[tokio::test]
async fn search_by_id_and_missing_id() {
    let (app, _) = app();
    add(&app, "employee_id=1&full_name=Jane+Doe&age=30&department=Marketing").await;
    add(&app, "employee_id=2&full_name=Bob+Stone&age=50&department=Finance").await;

    let response = app.clone().oneshot(get("/employees?employee_id=2")).await.unwrap();
    let body = body_text(response).await;
    assert!(body.contains("Bob Stone"));
    assert!(!body.contains("Jane Doe"));

    let response = app.clone().oneshot(get("/employees?employee_id=9")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("View page: No employees found"));
}

#[tokio::test]
async fn empty_list_renders_error_view() {
    let (app, _) = app();

    let response = app.clone().oneshot(get("/employees")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("No employees added"));
}

#[tokio::test]
async fn homepage_renders_empty_directory() {
    let (app, _) = app();

    let response = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("The directory is empty."));
}

#[tokio::test]
async fn duplicate_add_is_conflict() {
    let (app, repo) = app();
    add(&app, "employee_id=1&full_name=Jane+Doe&age=30&department=Marketing").await;

    let response = add(&app, "employee_id=1&full_name=Other+Person&age=40&department=Finance").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(body_text(response).await.contains("Add page: Employee already exists"));

    assert_eq!(repo.count().unwrap(), 1);
}

#[tokio::test]
async fn invalid_fields_render_validation_message() {
    let (app, repo) = app();

    let response = add(&app, "employee_id=1&full_name=aaaaa&age=30&department=Marketing").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("Repeating and duplicate values detected"));

    let response = add(&app, "employee_id=1&full_name=Jane+Doe&age=abc&department=Marketing").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("Age must be a whole number"));

    let response = add(&app, "employee_id=1&full_name=Jane+Doe").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(repo.count().unwrap(), 0);
}

#[tokio::test]
async fn update_flow() {
    let (app, repo) = app();
    add(&app, "employee_id=1&full_name=Jane+Doe&age=30&department=Marketing").await;
    add(&app, "employee_id=2&full_name=Bob+Stone&age=50&department=Finance").await;

    // unknown current id
    let response = app
        .clone()
        .oneshot(post(
            "/update",
            "employee_id=7&new_id=7&full_name=Jane+Doe&age=30&department=Marketing",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Update page: Employee not found"));

    // new id owned by someone else
    let response = app
        .clone()
        .oneshot(post(
            "/update",
            "employee_id=1&new_id=2&full_name=Jane+Doe&age=30&department=Marketing",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(body_text(response).await.contains("Update page: Employee already exists"));

    // key reassignment
    let response = app
        .clone()
        .oneshot(post(
            "/update",
            "employee_id=1&new_id=3&full_name=Jane+Smith&age=31&department=operations",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    assert!(repo.find_by_id(EmployeeId::new(1)).unwrap().is_none());
    let moved = repo.find_by_id(EmployeeId::new(3)).unwrap().unwrap();
    assert_eq!(moved.employee().full_name(), "Jane Smith");
    assert_eq!(moved.employee().department().display_name(), "Operations");
}

#[tokio::test]
async fn delete_one_then_sentinel_then_missing() {
    let (app, repo) = app();
    add(&app, "employee_id=1&full_name=Jane+Doe&age=30&department=Marketing").await;
    add(&app, "employee_id=2&full_name=Bob+Stone&age=50&department=Finance").await;
    add(&app, "employee_id=3&full_name=Carol+King&age=45&department=Finance").await;

    let response = app.clone().oneshot(post("/delete", "employee_id=1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(repo.count().unwrap(), 2);

    let response = app.clone().oneshot(post("/delete", "employee_id=0")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(repo.count().unwrap(), 0);

    let response = app.clone().oneshot(post("/delete", "employee_id=5")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Delete page: Employee not found"));
}

#[tokio::test]
async fn form_pages_render() {
    let (app, _) = app();

    for (uri, marker) in [
        ("/add", "action=\"/add\""),
        ("/update", "action=\"/update\""),
        ("/delete", "action=\"/delete\""),
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert!(body_text(response).await.contains(marker), "{uri}");
    }

    let response = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn sqlite_backend_serves_the_same_routes() {
    let repo = Arc::new(SqliteEmployeeRepository::open_in_memory().unwrap());
    let app = app_with(repo.clone());

    let response = add(&app, "employee_id=4&full_name=Jane+Doe&age=30&department=HUMAN+RESOURCES").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = add(&app, "employee_id=4&full_name=Jane+Doe&age=30&department=Finance").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app.clone().oneshot(get("/employees?employee_id=4")).await.unwrap();
    let body = body_text(response).await;
    assert!(body.contains("Human Resources"));
}
