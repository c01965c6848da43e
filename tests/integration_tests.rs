// Integration tests for Tarot Code

use actix_web::{http::StatusCode, test, web, App};
use serde_json::Value;
use tarot_code::routes::{self, AppState};

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::default()))
                .app_data(routes::query_config())
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_tarot_reference_date() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/api/tarot?date=18.06.1984")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let result = &body["result"];

    assert_eq!(body["input"], "18.06.1984");
    assert_eq!(result["dayCard"], 18);
    assert_eq!(result["monthCard"], 6);
    assert_eq!(result["yearCard"], 22);
    assert_eq!(result["destiny1"], 15);
    assert_eq!(result["destiny2"], 2);
    assert_eq!(result["periods"], serde_json::json!([2, 18, 20, 6]));
    assert_eq!(result["periodAges"], serde_json::json!([0, 35, 44, 53]));
    assert_eq!(
        result["periodStartDates"],
        serde_json::json!(["1984-06-18", "2019-06-18", "2028-06-18", "2037-06-18"])
    );
    assert_eq!(result["karmas"].as_array().map(Vec::len), Some(4));
    assert_eq!(result["gifts"], serde_json::json!([11, 20]));
    assert_eq!(result["stones"], serde_json::json!([3, 16]));
}

#[actix_web::test]
async fn test_tarot_iso_input_echoed() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/api/tarot?date=1984-06-18")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["input"], "1984-06-18");
    assert_eq!(body["result"]["destiny1"], 15);
}

#[actix_web::test]
async fn test_tarot_invalid_date() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/api/tarot?date=32.13.2020")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status_code"], 400);
    assert!(body["message"].as_str().unwrap().contains("32.13.2020"));
}

#[actix_web::test]
async fn test_tarot_missing_param() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/tarot").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_query");
}

#[actix_web::test]
async fn test_tarot_empty_param_fails_validation() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/tarot?date=").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Validation failed");
}

#[actix_web::test]
async fn test_compat_identical_dates() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/api/compat?date1=18.06.1984&date2=1984-06-18")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let result = &body["result"];

    assert_eq!(body["input"]["partner1"], "18.06.1984");
    assert_eq!(body["input"]["partner2"], "1984-06-18");
    assert_eq!(result["k1"], 15);
    assert_eq!(result["k2"], 15);
    assert_eq!(result["union"], 8);
    assert_eq!(result["unionName"], "JUSTICE");
    assert_eq!(result["p1"], 1);
    assert_eq!(result["p1Name"], "MAGICIAN");
    assert_eq!(result["p2Name"], "MAGICIAN");
    assert_eq!(result["total"], 10);
    assert_eq!(result["totalName"], "FORTUNE");
    assert_eq!(result["score"], 9);
    assert_eq!(result["level"], "high");
    assert!(result["summary"]
        .as_str()
        .unwrap()
        .starts_with("High, harmonious compatibility."));
}

#[actix_web::test]
async fn test_compat_one_invalid_date() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/api/compat?date1=18.06.1984&date2=31.04.2021")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("31.04.2021"));
}

#[actix_web::test]
async fn test_cards_catalog() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/cards").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let cards = body["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 22);
    assert_eq!(cards[0]["index"], 1);
    assert_eq!(cards[0]["name"], "MAGICIAN");
    assert_eq!(cards[14]["name"], "DEVIL");
}
