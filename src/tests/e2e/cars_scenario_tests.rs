use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header::LOCATION},
    response::Response,
};
use http_body_util::BodyExt;
use rstest::rstest;
use std::collections::HashSet;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::vehicles::adapters::outbound::seed_file::parse_seed;
use crate::modules::vehicles::adapters::outbound::vehicle_store_in_memory::InMemoryVehicleStore;
use crate::modules::vehicles::core::vehicle::Vehicle;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::vehicles::{VehicleDraftBuilder, make_test_state};

async fn send(app: &Router, method: Method, uri: &str, body: Option<String>) -> Response {
    let body = body.map(Body::from).unwrap_or_else(Body::empty);
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_read_update_delete_scenario() {
    let seed = parse_seed(
        std::path::Path::new("cars.json"),
        br#"[{"id":"1","make":"Toyota","model":"Corolla","year":2020}]"#,
    )
    .unwrap();
    let app = router(AppState {
        vehicles: Arc::new(InMemoryVehicleStore::from_seed(seed).unwrap()),
    });

    let created = send(
        &app,
        Method::POST,
        "/cars",
        Some(r#"{"make":"Honda","model":"Civic","year":2021}"#.into()),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    assert_eq!(created.headers()[LOCATION], "/cars/2");

    let fetched = send(&app, Method::GET, "/cars/2", None).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    let civic: Vehicle = read_json(fetched).await;
    assert_eq!(civic.id, "2");
    assert_eq!(civic.model, "Civic");

    let updated = send(
        &app,
        Method::PUT,
        "/cars/1",
        Some(r#"{"make":"Toyota","model":"Camry","year":2022}"#.into()),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);

    let camry: Vehicle = read_json(send(&app, Method::GET, "/cars/1", None).await).await;
    assert_eq!(camry.model, "Camry");
    assert_eq!(camry.year, 2022);

    let deleted = send(&app, Method::DELETE, "/cars/2", None).await;
    assert_eq!(deleted.status(), StatusCode::OK);

    let gone = send(&app, Method::GET, "/cars/2", None).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);

    let listed: Vec<Vehicle> = read_json(send(&app, Method::GET, "/cars", None).await).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "1");
}

#[rstest]
#[case(Method::PUT, "/cars")]
#[case(Method::DELETE, "/cars")]
#[case(Method::PATCH, "/cars")]
#[case(Method::POST, "/cars/1")]
#[case(Method::PATCH, "/cars/1")]
#[case(Method::POST, "/cars/")]
#[tokio::test]
async fn unsupported_methods_are_rejected_with_405(#[case] method: Method, #[case] uri: &str) {
    let state = make_test_state();
    let app = router(state.clone());

    let response = send(&app, method, uri, Some("{}".into())).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Method not allowed");
    assert_eq!(state.vehicles.list().await.len(), 1);
}

// Responses to HEAD carry no body, so only the status is checked.
#[rstest]
#[case("/cars")]
#[case("/cars/1")]
#[case("/cars/")]
#[tokio::test]
async fn head_is_rejected_with_405(#[case] uri: &str) {
    let app = router(make_test_state());

    let response = send(&app, Method::HEAD, uri, None).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[rstest]
#[case(Method::GET, None, "Car not found")]
#[case(Method::PUT, Some(r#"{"make":"Honda"}"#), "Car not found")]
#[case(Method::DELETE, None, "Car not found on deleting")]
#[tokio::test]
async fn an_empty_id_reaches_the_item_handlers(
    #[case] method: Method,
    #[case] body: Option<&str>,
    #[case] message: &str,
) {
    let state = make_test_state();
    let app = router(state.clone());

    let response = send(&app, method, "/cars/", body.map(String::from)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], message.as_bytes());
    assert_eq!(state.vehicles.list().await.len(), 1);
}

#[tokio::test]
async fn an_empty_id_with_an_invalid_body_is_rejected_with_400() {
    let app = router(make_test_state());

    let response = send(&app, Method::PUT, "/cars/", Some("not-json".into())).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_never_duplicate_or_lose_a_vehicle() {
    let state = make_test_state();
    let app = router(state.clone());
    let body = VehicleDraftBuilder::new().to_json();

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let app = app.clone();
            let body = body.clone();
            tokio::spawn(async move { send(&app, Method::POST, "/cars", Some(body)).await })
        })
        .collect();

    let mut locations = HashSet::new();
    for handle in handles {
        let response = handle.await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        locations.insert(response.headers()[LOCATION].to_str().unwrap().to_string());
    }

    assert_eq!(locations.len(), 32);
    let listed: Vec<Vehicle> = read_json(send(&app, Method::GET, "/cars", None).await).await;
    assert_eq!(listed.len(), 33);
    let ids: HashSet<String> = listed.into_iter().map(|v| v.id).collect();
    assert_eq!(ids.len(), 33);
    assert!(ids.contains("33"));
}
