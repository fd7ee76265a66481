mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use jboard::listing::{SortDirection, SortField, SortSelection};
use jboard::services::jobs_service::LOAD_JOBS_FAILED;
use serde_json::json;

use common::{app, job, spawn, token, Recorder};

fn listing() -> serde_json::Value {
    json!([
        job(10, "Dev Junior", "Junior", "Frontend", "2025-01-10T09:00:00Z"),
        job(15, "Dev Senior", "Senior", "Backend", "2025-01-15T09:00:00Z"),
        job(12, "Dev Pleno", "Junior", "Backend", "2025-01-12T09:00:00Z"),
        json!({ "id": "x1", "title": "Sem nível", "seniorityLevel": "", "field": null, "url": "" }),
    ])
}

#[tokio::test]
async fn board_derives_filters_and_categories() {
    let recorder = Recorder::default();
    let router = Router::new().route("/api/jobs", get(|| async { Json(listing()) }));
    let base = spawn(router, &recorder).await;
    let app = app(&base);

    let mut board = app.job_board_view();
    board.load().await;
    assert_eq!(board.error(), None);
    assert_eq!(board.raw().len(), 4);

    let ids: Vec<_> = board.visible().iter().map(|j| j.id.clone()).collect();
    assert_eq!(ids, ["15", "12", "10", "x1"]);

    assert_eq!(board.seniority_levels(), ["Junior", "Senior"]);
    assert_eq!(board.fields(), ["Backend", "Frontend"]);

    board.set_seniority_filter(Some("Junior"));
    board.set_sort(SortSelection::new(SortField::PublishedDate, SortDirection::Ascending));
    let ids: Vec<_> = board.visible().iter().map(|j| j.id.clone()).collect();
    assert_eq!(ids, ["10", "12"]);
    assert_eq!(board.stats().available_label(), "4 vagas disponíveis");
    assert_eq!(board.stats().found_label().as_deref(), Some("2 vagas encontradas"));

    board.clear_filters();
    assert_eq!(board.stats().found_label(), None);

    // A second load is a no-op.
    board.load().await;
    assert_eq!(recorder.count("GET", "/api/jobs"), 1);
}

#[tokio::test]
async fn envelope_payload_is_accepted() {
    let recorder = Recorder::default();
    let router = Router::new().route(
        "/api/jobs",
        get(|| async { Json(json!({ "data": [job(1, "Dev", "Junior", "Dados", "2025-01-01")] })) }),
    );
    let base = spawn(router, &recorder).await;

    let jobs = app(&base).jobs_service.get_jobs().await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, "1");
    assert_eq!(jobs[0].seniority_level.as_deref(), Some("Junior"));
}

#[tokio::test]
async fn failed_load_can_be_retried() {
    let recorder = Recorder::default();
    let healthy = Arc::new(AtomicBool::new(false));
    let flag = healthy.clone();
    let router = Router::new().route(
        "/api/jobs",
        get(move || {
            let flag = flag.clone();
            async move {
                if flag.load(Ordering::SeqCst) {
                    Json(listing()).into_response()
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            }
        }),
    );
    let base = spawn(router, &recorder).await;
    let app = app(&base);

    let mut board = app.job_board_view();
    board.load().await;
    assert_eq!(board.error(), Some(LOAD_JOBS_FAILED));
    assert!(board.visible().is_empty());

    healthy.store(true, Ordering::SeqCst);
    board.retry().await;
    assert_eq!(board.error(), None);
    assert_eq!(board.visible().len(), 4);
    assert_eq!(recorder.count("GET", "/api/jobs"), 2);
}

#[tokio::test]
async fn bearer_header_follows_the_session() {
    let recorder = Recorder::default();
    let router = Router::new().route("/api/jobs", get(|| async { Json(json!([])) }));
    let base = spawn(router, &recorder).await;
    let app = app(&base);

    app.jobs_service.get_jobs().await.unwrap();
    let tok = token("maria", "free");
    app.session.sign_in(&tok).unwrap();
    app.jobs_service.get_jobs().await.unwrap();
    app.session.logout().unwrap();
    app.jobs_service.get_jobs().await.unwrap();

    let auth: Vec<_> = recorder.requests().into_iter().map(|r| r.authorization).collect();
    assert_eq!(auth, vec![None, Some(format!("Bearer {}", tok)), None]);
}
