use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        events::{create_event, get_event, list_events, list_sections, list_tags},
        health::{healthz, livez},
        pages::{calendar_redirect, index, submit_event_form},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/sections", get(list_sections))
        .route("/events/{id}", get(get_event))
        .route("/tags", get(list_tags))
        .layer(cors);

    Router::new()
        .route("/", get(index))
        .route("/events", post(submit_event_form))
        .route("/events/{id}/calendar", get(calendar_redirect))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use chrono::NaiveDate;
    use http_body_util::BodyExt;
    use lexscopic_core::events::EventRecord;
    use tower::ServiceExt;

    use crate::config::Config;

    /// Wednesday, June 4 2025.
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 4).unwrap()
    }

    fn test_state() -> AppState {
        let config = Config::from_lookup(|key| {
            (key == "LEXSCOPIC_UTC_OFFSET_MINUTES").then(|| "-240".to_string())
        });
        let events = vec![
            EventRecord::new("tnl", "Thursday Night Live", "2025-06-05")
                .with_times("4:30 PM", "8:00 PM")
                .with_venue("Fifth Third Pavilion")
                .with_tags(["music", "night"])
                .with_description("Outdoor concert series"),
            EventRecord::new("market", "Farmers Market", "2025-06-07")
                .with_times("7:00 AM", "2:00 PM")
                .with_venue("Tandy Centennial Park")
                .with_tags(["family", "outdoors"]),
            EventRecord::new("jam", "Bluegrass Jam", "2025-06-08")
                .with_times("7:00 PM", "10:00 PM")
                .with_venue("Willie's Locally Known")
                .with_price(10.0)
                .with_tags(["music"])
                .with_description("Jazz and swing sets after 9"),
            EventRecord::new("broken", "Pop-up Picnic", "2025-06-10")
                .with_times("whenever", "8:00 PM")
                .with_tags(["family"]),
        ];
        AppState::with_events(events, &config).with_today(today())
    }

    fn app(state: AppState) -> Router {
        create_app(state, Duration::from_secs(10))
    }

    async fn get_response(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    fn ids(json: &serde_json::Value) -> Vec<&str> {
        json.as_array()
            .unwrap()
            .iter()
            .map(|e| e["id"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_index_page() {
        let app = app(test_state());

        let response = get_response(app, "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Thursday Night Live"));
        assert!(html.contains("Live Music"));
        assert!(html.contains("4 events"));
        assert!(html.contains("Add to Google Calendar"));
        assert!(html.contains("Submit an event"));
    }

    #[tokio::test]
    async fn test_index_page_with_filters() {
        let app = app(test_state());

        let response = get_response(app, "/?tags=family&max_price=0").await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Farmers Market"));
        assert!(!html.contains("Bluegrass Jam"));
        assert!(html.contains("Clear filters"));
    }

    #[tokio::test]
    async fn test_index_page_lists_records_outside_sections() {
        let state = test_state();
        let lecture = EventRecord::new("lecture", "Poetry at the Library", "2025-06-12")
            .with_venue("Central Library")
            .with_tags(["education"]);
        state.event_repo.prepend_event(&lecture).await.unwrap();
        let app = app(state);

        let response = get_response(app, "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("5 events"));
        assert!(html.contains("All events"));
        assert!(html.contains("Poetry at the Library"));
    }

    #[tokio::test]
    async fn test_index_page_unknown_date_mode() {
        let app = app(test_state());

        let response = get_response(app, "/?date=someday").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_events_sorted_by_date() {
        let app = app(test_state());

        let response = get_response(app, "/api/events").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(ids(&json), vec!["tnl", "market", "jam", "broken"]);
    }

    #[tokio::test]
    async fn test_list_events_query_matches_description() {
        let app = app(test_state());

        let response = get_response(app, "/api/events?q=jazz").await;

        let json = body_json(response).await;
        assert_eq!(ids(&json), vec!["jam"]);
    }

    #[tokio::test]
    async fn test_list_events_this_weekend() {
        let app = app(test_state());

        let response = get_response(app, "/api/events?date=weekend").await;

        let json = body_json(response).await;
        assert_eq!(ids(&json), vec!["market", "jam"]);
    }

    #[tokio::test]
    async fn test_list_events_picked_date() {
        let app = app(test_state());

        let response = get_response(app, "/api/events?date=pick&on=2025-06-08").await;

        let json = body_json(response).await;
        assert_eq!(ids(&json), vec!["jam"]);
    }

    #[tokio::test]
    async fn test_list_events_invalid_price() {
        let app = app(test_state());

        let response = get_response(app, "/api/events?max_price=cheap").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_sections() {
        let app = app(test_state());

        let response = get_response(app, "/api/events/sections").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["featured"]["id"], "tnl");
        assert_eq!(ids(&json["belowHero"]).len(), 2);
        assert_eq!(json["sections"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_get_event() {
        let app = app(test_state());

        let response = get_response(app.clone(), "/api/events/jam").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["title"], "Bluegrass Jam");
        assert_eq!(json["startTime"], "7:00 PM");

        let response = get_response(app, "/api/events/missing").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_event_via_api() {
        let app = app(test_state());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/events")
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(Body::from(
                        "title=Porch+Concert&date=2025-06-06&venue=Woodland+Park&price=-5&tags=Family%2C+FREE",
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let record = body_json(response).await;
        assert_eq!(record["title"], "Porch Concert");
        assert_eq!(record["price"], 0.0);
        assert_eq!(record["tags"], serde_json::json!(["family", "free"]));
        assert_eq!(record["startTime"], "6:00 PM");

        let id = record["id"].as_str().unwrap();
        let response = get_response(app, &format!("/api/events/{id}")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_event_missing_title() {
        let app = app(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/events")
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(Body::from("venue=Nowhere"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_submit_form_redirects_and_prepends() {
        let state = test_state();
        let app = app(state.clone());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/events")
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(Body::from("title=Porch+Concert&date=2025-06-06"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");

        let events = state.event_repo.list_events().await.unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0].title, "Porch Concert");
    }

    #[tokio::test]
    async fn test_calendar_redirect() {
        let app = app(test_state());

        let response = get_response(app, "/events/tnl/calendar").await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers()[header::LOCATION].to_str().unwrap();
        assert!(location.starts_with("https://www.google.com/calendar/render?action=TEMPLATE"));
        assert!(location.contains("dates=20250605T203000Z%2F20250606T000000Z"));
        assert!(location.contains("location=Fifth%20Third%20Pavilion%2C%20Lexington%20KY"));
    }

    #[tokio::test]
    async fn test_calendar_redirect_resolves_daylight_saving_per_event() {
        let config = Config::from_lookup(|key| {
            (key == "LEXSCOPIC_TIMEZONE").then(|| "America/New_York".to_string())
        });
        let events = vec![
            EventRecord::new("winter", "Winter Lights", "2026-01-15")
                .with_times("6:00 PM", "8:00 PM"),
            EventRecord::new("summer", "Porch Concert", "2026-07-15")
                .with_times("6:00 PM", "8:00 PM"),
        ];
        let app = app(AppState::with_events(events, &config).with_today(today()));

        let response = get_response(app.clone(), "/events/winter/calendar").await;
        let location = response.headers()[header::LOCATION].to_str().unwrap();
        assert!(location.contains("dates=20260115T230000Z%2F20260116T010000Z"));

        let response = get_response(app, "/events/summer/calendar").await;
        let location = response.headers()[header::LOCATION].to_str().unwrap();
        assert!(location.contains("dates=20260715T220000Z%2F20260716T000000Z"));
    }

    #[tokio::test]
    async fn test_calendar_redirect_malformed_time() {
        let app = app(test_state());

        let response = get_response(app, "/events/broken/calendar").await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_calendar_redirect_unknown_event() {
        let app = app(test_state());

        let response = get_response(app, "/events/missing/calendar").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_tags() {
        let app = app(test_state());

        let response = get_response(app, "/api/tags").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json[0]["tag"], "music");
        assert_eq!(json[0]["icon"], "music");
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let app = app(test_state());

        let response = get_response(app.clone(), "/livez").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get_response(app, "/healthz").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["healthy"], true);
        assert_eq!(json["events"], 4);
    }
}
