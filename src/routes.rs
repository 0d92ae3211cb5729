use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::assessment::{AnalysisResult, Submission};
use crate::error::AppError;
use crate::infra::AppState;

#[derive(Debug, Serialize)]
pub(crate) struct SaveResultsResponse {
    pub(crate) message: String,
    pub(crate) result_id: String,
    pub(crate) timestamp: DateTime<Utc>,
}

/// Anonymized demo figures; real aggregation needs persistence, which the
/// service does not have.
#[derive(Debug, Serialize)]
pub(crate) struct StatisticsResponse {
    pub(crate) total_tests: u64,
    pub(crate) average_score: f64,
    pub(crate) most_common_category: String,
    pub(crate) completion_rate: f64,
}

pub(crate) fn api_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/analysis", post(analysis_endpoint))
        .route("/api/v1/results", post(save_results_endpoint))
        .route("/api/v1/statistics", get(statistics_endpoint))
}

pub(crate) async fn healthcheck(Extension(state): Extension<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "classifier_loaded": state.pipeline.classifier_available(),
        "narrative_available": state.pipeline.narrative_available(),
    }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn analysis_endpoint(
    Extension(state): Extension<AppState>,
    Json(submission): Json<Submission>,
) -> Result<Json<AnalysisResult>, AppError> {
    info!(answers = submission.answers.len(), "analysis request received");

    let result = state.pipeline.analyze(&submission, Utc::now())?;

    info!(
        analysis_id = %result.analysis_id,
        risk_level = result.risk_level.label(),
        narrative_source = ?result.narrative_source,
        "analysis completed"
    );
    Ok(Json(result))
}

/// Acknowledge a save request. Persistence is intentionally absent; the
/// endpoint exists so clients can keep their submit-then-save flow.
pub(crate) async fn save_results_endpoint(
    Json(_payload): Json<serde_json::Value>,
) -> Json<SaveResultsResponse> {
    let now = Utc::now();
    Json(SaveResultsResponse {
        message: "Results saved successfully".to_string(),
        result_id: format!("result_{}", now.format("%Y%m%d_%H%M%S")),
        timestamp: now,
    })
}

pub(crate) async fn statistics_endpoint() -> Json<StatisticsResponse> {
    Json(StatisticsResponse {
        total_tests: 1000,
        average_score: 65.5,
        most_common_category: "Mood".to_string(),
        completion_rate: 89.5,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{AnalysisPipeline, AssessmentPolicy, Answer, Category};
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn test_state(pipeline: AnalysisPipeline) -> AppState {
        let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(recorder.handle()),
            pipeline: Arc::new(pipeline),
        }
    }

    fn sample_submission() -> Submission {
        let categories = [
            Category::Mood,
            Category::Sleep,
            Category::Anxiety,
            Category::Social,
            Category::Concentration,
            Category::Energy,
            Category::Stress,
            Category::Relationships,
            Category::SelfEsteem,
            Category::Future,
        ];
        let answers = categories
            .into_iter()
            .enumerate()
            .map(|(index, category)| Answer {
                question_id: index as u32 + 1,
                category,
                question_text: format!("Question {}", index + 1),
                answer_label: "Generally good".to_string(),
                value: 4,
            })
            .collect::<Vec<_>>();

        Submission {
            answers,
            total_score: 40,
            max_score: 50,
            score_percentage: 80.0,
            duration_seconds: 300.5,
            completed_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn healthcheck_reports_capability_availability() {
        let state = test_state(AnalysisPipeline::new(AssessmentPolicy::default()));
        let Json(body) = healthcheck(Extension(state)).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["classifier_loaded"], false);
        assert_eq!(body["narrative_available"], false);
    }

    #[tokio::test]
    async fn analysis_endpoint_scores_a_valid_submission() {
        let state = test_state(AnalysisPipeline::new(AssessmentPolicy::default()));

        let Json(result) = analysis_endpoint(Extension(state), Json(sample_submission()))
            .await
            .expect("analysis succeeds");

        assert_eq!(result.score_percentage, 80.0);
        assert_eq!(result.risk_level.label(), "Low Risk");
        assert!(!result.professional_help_needed);
        assert_eq!(result.category_analysis.len(), 10);
    }

    #[tokio::test]
    async fn router_rejects_short_submissions_with_bad_request() {
        let state = test_state(AnalysisPipeline::new(AssessmentPolicy::default()));
        let app = api_router().layer(Extension(state));

        let mut submission = sample_submission();
        submission.answers.truncate(5);
        submission.total_score = 20;
        submission.score_percentage = 40.0;

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/analysis")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::to_vec(&submission).expect("submission serializes"),
            ))
            .expect("request builds");

        let response = app.oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body collects");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("error body is json");
        assert!(body["error"]
            .as_str()
            .expect("error message present")
            .contains("at least 10 answers"));
    }

    #[tokio::test]
    async fn router_serves_analysis_end_to_end() {
        let state = test_state(AnalysisPipeline::new(AssessmentPolicy::default()));
        let app = api_router().layer(Extension(state));

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/analysis")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::to_vec(&sample_submission()).expect("submission serializes"),
            ))
            .expect("request builds");

        let response = app.oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body collects");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("result is json");
        assert_eq!(body["risk_level"], "Low Risk");
        assert_eq!(body["narrative_source"], "fallback");
        assert!(body["category_analysis"]["Mood"]["percentage"].is_number());
    }

    #[tokio::test]
    async fn statistics_endpoint_returns_demo_figures() {
        let Json(stats) = statistics_endpoint().await;
        assert_eq!(stats.total_tests, 1000);
        assert_eq!(stats.most_common_category, "Mood");
    }

    #[tokio::test]
    async fn save_results_acknowledges_with_generated_id() {
        let Json(saved) = save_results_endpoint(Json(json!({ "anonymous": true }))).await;
        assert_eq!(saved.message, "Results saved successfully");
        assert!(saved.result_id.starts_with("result_"));
    }
}
