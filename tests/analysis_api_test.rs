mod common;

use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use jboard::routes::Route;
use jboard::services::analysis_service::{ANALYSIS_FAILED, INVALID_TOKEN, MISSING_SKILLS, NOT_PREMIUM};
use jboard::views::analysis_modal::{DONE_TITLE, ERROR_TITLE};
use jboard::views::{AnalysisLine, AnalysisState};
use serde_json::{json, Value as JsonValue};

use common::{app, spawn, token, Recorder};

/// Answers with the status encoded in the posted URL, e.g.
/// `https://jobs.example/status/403`.
fn analysis_backend(recorder: &Recorder) -> Router {
    let rec = recorder.clone();
    Router::new().route(
        "/api/analysis",
        post(move |Json(body): Json<JsonValue>| {
            let rec = rec.clone();
            async move {
                rec.push_body(body.clone());
                let position = body["position"].as_str().unwrap_or_default().to_string();
                match position.rsplit('/').next().and_then(|s| s.parse::<u16>().ok()) {
                    Some(code) => StatusCode::from_u16(code)
                        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
                        .into_response(),
                    None => Json(json!({
                        "message": "Boa aderência\n— Rust sólido\n- falta Kubernetes"
                    }))
                    .into_response(),
                }
            }
        }),
    )
}

#[tokio::test]
async fn statuses_map_to_messages_with_codes() {
    let recorder = Recorder::default();
    let base = spawn(analysis_backend(&recorder), &recorder).await;
    let app = app(&base);

    for (code, message, status) in [
        (400, MISSING_SKILLS, Some(400)),
        (403, NOT_PREMIUM, Some(403)),
        (500, ANALYSIS_FAILED, None),
        (502, ANALYSIS_FAILED, None),
    ] {
        let url = format!("https://jobs.example/status/{}", code);
        let err = app.analysis_service.analyze_job(&url).await.unwrap_err();
        assert_eq!(err.to_string(), message);
        assert_eq!(err.status_code(), status);
    }

    assert_eq!(
        recorder.bodies()[0],
        json!({ "position": "https://jobs.example/status/400" })
    );
}

#[tokio::test]
async fn rejected_token_expires_session() {
    let recorder = Recorder::default();
    let base = spawn(analysis_backend(&recorder), &recorder).await;
    let app = app(&base);
    app.session.sign_in(&token("maria", "premium")).unwrap();

    let err = app
        .analysis_service
        .analyze_job("https://jobs.example/status/401")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), INVALID_TOKEN);
    assert_eq!(err.status_code(), Some(401));
    assert!(!app.session.is_authenticated());
}

#[tokio::test]
async fn unreachable_backend_is_a_generic_failure() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = app(&base)
        .analysis_service
        .analyze_job("https://jobs.example/1")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), ANALYSIS_FAILED);
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn modal_renders_result_and_profile_shortcut() {
    let recorder = Recorder::default();
    let base = spawn(analysis_backend(&recorder), &recorder).await;
    let app = app(&base);
    app.session.sign_in(&token("maria", "premium")).unwrap();

    let mut modal = app.analysis_modal();
    modal.open("https://jobs.example/vaga-rust").await;
    assert!(matches!(modal.state(), AnalysisState::Done { .. }));
    assert_eq!(modal.title(), Some(DONE_TITLE));
    assert_eq!(
        modal.lines(),
        vec![
            AnalysisLine::Text("Boa aderência".into()),
            AnalysisLine::Bullet("Rust sólido".into()),
            AnalysisLine::Bullet("falta Kubernetes".into()),
        ]
    );

    modal.open("https://jobs.example/status/400").await;
    assert_eq!(modal.title(), Some(ERROR_TITLE));
    assert_eq!(modal.profile_shortcut(), Some(Route::Profile));
    assert!(modal.render().contains(MISSING_SKILLS));
}
