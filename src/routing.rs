//! Application router configuration.

use axum::{
    Json, Router,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};

use crate::{
    AppState, Error,
    dashboard::{get_categories, post_goal_view},
    endpoints,
    timeline::post_goal_timeline,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::PING, get(get_ping))
        .route(endpoints::CATEGORIES, get(get_categories))
        .route(endpoints::GOALS_VIEW, post(post_goal_view))
        .route(endpoints::GOAL_TIMELINE, post(post_goal_timeline))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Lets clients wake the service up before they need it.
async fn get_ping() -> Json<Value> {
    Json(json!({ "status": "awake" }))
}

async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::{AppState, endpoints};

    use super::build_router;

    fn test_server() -> TestServer {
        let state = AppState::new("Etc/UTC").expect("Could not create app state.");

        TestServer::new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn ping_says_awake() {
        let server = test_server();

        let response = server.get(endpoints::PING).await;

        response.assert_status_ok();
        response.assert_json(&json!({"status": "awake"}));
    }

    #[tokio::test]
    async fn unknown_path_is_json_404() {
        let server = test_server();

        let response = server.get("/api/budgets").await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn serves_dashboard_and_timeline() {
        let server = test_server();
        let goal = json!({
            "name": "Holiday",
            "targetValue": 1000,
            "currentValue": 250,
            "contributions": [
                {"amount": 100, "type": "deposit", "timestamp": "2024-01-01"},
                {"amount": 30, "type": "withdrawal", "timestamp": "2024-01-02"},
            ],
        });

        let view = server
            .post(endpoints::GOALS_VIEW)
            .json(&json!({ "goals": [goal.clone()] }))
            .await;
        view.assert_status_ok();
        let view: Value = view.json();
        assert_eq!(view["goals"][0]["progress"], 25.0);

        let timeline = server.post(endpoints::GOAL_TIMELINE).json(&goal).await;
        timeline.assert_status_ok();
        let timeline: Value = timeline.json();
        let balances: Vec<f64> = timeline["points"]
            .as_array()
            .expect("points should be an array")
            .iter()
            .filter_map(|point| point["balance"].as_f64())
            .collect();
        assert_eq!(balances, vec![0.0, 100.0, 70.0]);
    }

    #[tokio::test]
    async fn malformed_goal_is_bad_request() {
        let server = test_server();

        let response = server
            .post(endpoints::GOAL_TIMELINE)
            .json(&json!({"name": "", "targetValue": 100}))
            .await;

        response.assert_status_bad_request();
    }
}
