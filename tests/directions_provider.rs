//! Route resolution against a mocked OpenRouteService directions endpoint.

use serde_json::json;
use sharebite::sdk::geo::Coordinate;
use sharebite::sdk::routing::{
    DirectionsProvider, OrsDirectionsProvider, RouteRequest, RouteResolver, RoutingError,
};
use sharebite::sdk::util::rate_limit::{directions_limiter, DEFAULT_DIRECTIONS_PER_MINUTE};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DIRECTIONS: &str = "/v2/directions/driving-car";

fn bangalore_pair() -> (Coordinate, Coordinate) {
    (
        Coordinate::new(12.9716, 77.5946).unwrap(),
        Coordinate::new(12.9716, 77.6046).unwrap(),
    )
}

fn remote(server: &MockServer) -> OrsDirectionsProvider {
    OrsDirectionsProvider::remote(
        server.uri(),
        "test-key".to_string(),
        directions_limiter(DEFAULT_DIRECTIONS_PER_MINUTE),
    )
    .expect("client construction should not fail")
}

fn route_body(coordinates: serde_json::Value) -> serde_json::Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": coordinates },
            "properties": {
                "segments": [{
                    "distance": 5000.0,
                    "duration": 600.0,
                    "steps": [
                        { "instruction": "Head east on MG Road", "distance": 1500.0 },
                        { "instruction": "", "distance": 300.0 }
                    ]
                }],
                "summary": { "distance": 5000.0, "duration": 600.0 }
            }
        }]
    })
}

#[tokio::test]
async fn successful_route_is_parsed() {
    let server = MockServer::start().await;
    let (origin, destination) = bangalore_pair();

    Mock::given(method("GET"))
        .and(path(DIRECTIONS))
        .and(query_param("api_key", "test-key"))
        .and(query_param("start", "77.5946,12.9716"))
        .and(query_param("end", "77.6046,12.9716"))
        .respond_with(ResponseTemplate::new(200).set_body_json(route_body(json!([
            [77.5946, 12.9716],
            [77.5990, 12.9730],
            [77.6046, 12.9716]
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = RouteResolver::new(remote(&server), Duration::from_secs(5));
    let result = resolver
        .resolve(&RouteRequest::new(origin, destination))
        .await;

    assert!(!result.used_fallback);
    assert_eq!(result.error_message, None);
    assert_eq!(result.distance_km, Some(5.0));
    assert_eq!(result.duration_minutes, Some(10));
    assert_eq!(result.steps.len(), 2);
    assert_eq!(result.steps[0].instruction, "Head east on MG Road");
    assert_eq!(result.steps[0].distance_label(), "1.5 km");
    assert_eq!(result.steps[1].instruction, "Continue straight");
    assert_eq!(result.steps[1].distance_label(), "300 m");

    assert_eq!(result.polyline.len(), 3);
    assert_eq!(result.polyline[0], origin);
    assert_eq!(result.polyline[1].latitude(), 12.9730);
    assert_eq!(result.polyline[1].longitude(), 77.5990);
    assert_eq!(result.polyline[2], destination);
}

#[tokio::test]
async fn empty_features_fall_back() {
    let server = MockServer::start().await;
    let (origin, destination) = bangalore_pair();

    Mock::given(method("GET"))
        .and(path(DIRECTIONS))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "type": "FeatureCollection", "features": [] })),
        )
        .mount(&server)
        .await;

    let resolver = RouteResolver::new(remote(&server), Duration::from_secs(5));
    let result = resolver
        .resolve(&RouteRequest::new(origin, destination))
        .await;

    assert!(result.used_fallback);
    assert_eq!(result.polyline, vec![origin, destination]);
    assert!(result.steps.is_empty());
    assert_eq!(result.distance_km, None);
    assert_eq!(result.duration_minutes, None);
    assert!(result.error_message.is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn error_status_falls_back_after_single_attempt() {
    let server = MockServer::start().await;
    let (origin, destination) = bangalore_pair();

    Mock::given(method("GET"))
        .and(path(DIRECTIONS))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": 2010, "message": "Could not find routable point within a radius of 350.0 meters" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = RouteResolver::new(remote(&server), Duration::from_secs(5));
    let result = resolver
        .resolve(&RouteRequest::new(origin, destination))
        .await;

    assert!(result.used_fallback);
    assert_eq!(result.polyline, vec![origin, destination]);
}

#[tokio::test]
async fn provider_reports_structured_and_raw_errors() {
    let server = MockServer::start().await;
    let (origin, destination) = bangalore_pair();

    Mock::given(method("GET"))
        .and(path(DIRECTIONS))
        .and(query_param("start", "77.5946,12.9716"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "Access to this API has been disallowed" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(DIRECTIONS))
        .and(query_param("start", "77.6046,12.9716"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let provider = remote(&server);
    match provider.directions(origin, destination).await {
        Err(RoutingError::ApiError { code, .. }) => assert_eq!(code, 403),
        other => panic!("expected ApiError, got {other:?}"),
    }
    match provider.directions(destination, origin).await {
        Err(RoutingError::RawApiError(body)) => assert_eq!(body, "Bad Gateway"),
        other => panic!("expected RawApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_falls_back() {
    let server = MockServer::start().await;
    let (origin, destination) = bangalore_pair();

    Mock::given(method("GET"))
        .and(path(DIRECTIONS))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"features\": [{\"geometry\": 7}]}"))
        .mount(&server)
        .await;

    let resolver = RouteResolver::new(remote(&server), Duration::from_secs(5));
    let result = resolver
        .resolve(&RouteRequest::new(origin, destination))
        .await;
    assert!(result.used_fallback);
}

#[tokio::test]
async fn slow_provider_times_out_into_fallback() {
    let server = MockServer::start().await;
    let (origin, destination) = bangalore_pair();

    Mock::given(method("GET"))
        .and(path(DIRECTIONS))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(route_body(json!([[77.5946, 12.9716], [77.6046, 12.9716]])))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let resolver = RouteResolver::new(remote(&server), Duration::from_millis(200));
    let result = resolver
        .resolve(&RouteRequest::new(origin, destination))
        .await;

    assert!(result.used_fallback);
    assert_eq!(result.polyline, vec![origin, destination]);
    assert!(result.steps.is_empty());
}

#[tokio::test]
async fn unreachable_provider_falls_back() {
    let (origin, destination) = bangalore_pair();
    // Nothing listens on port 1.
    let provider = OrsDirectionsProvider::local("http://127.0.0.1:1".to_string()).unwrap();

    let resolver = RouteResolver::new(provider, Duration::from_secs(5));
    let result = resolver
        .resolve(&RouteRequest::new(origin, destination))
        .await;

    assert!(result.used_fallback);
    assert_eq!(result.polyline, vec![origin, destination]);
    assert!(result.error_message.is_some());
}

#[tokio::test]
async fn local_provider_sends_no_api_key() {
    let server = MockServer::start().await;
    let (origin, destination) = bangalore_pair();

    Mock::given(method("GET"))
        .and(path(DIRECTIONS))
        .and(query_param("start", "77.5946,12.9716"))
        .respond_with(ResponseTemplate::new(200).set_body_json(route_body(json!([
            [77.5946, 12.9716],
            [77.6046, 12.9716]
        ]))))
        .mount(&server)
        .await;

    let provider = OrsDirectionsProvider::local(format!("{}/", server.uri())).unwrap();
    provider
        .directions(origin, destination)
        .await
        .expect("route should parse");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].url.query().unwrap_or_default().contains("api_key"));
}

#[tokio::test]
async fn reversed_request_reverses_endpoints() {
    let server = MockServer::start().await;
    let (x, y) = bangalore_pair();

    Mock::given(method("GET"))
        .and(path(DIRECTIONS))
        .and(query_param("start", "77.5946,12.9716"))
        .respond_with(ResponseTemplate::new(200).set_body_json(route_body(json!([
            [77.5946, 12.9716],
            [77.5990, 12.9730],
            [77.6046, 12.9716]
        ]))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(DIRECTIONS))
        .and(query_param("start", "77.6046,12.9716"))
        .respond_with(ResponseTemplate::new(200).set_body_json(route_body(json!([
            [77.6046, 12.9716],
            [77.6010, 12.9701],
            [77.5946, 12.9716]
        ]))))
        .mount(&server)
        .await;

    let resolver = RouteResolver::new(remote(&server), Duration::from_secs(5));
    let request = RouteRequest::new(x, y);
    let forward = resolver.resolve(&request).await;
    let backward = resolver.resolve(&request.reversed()).await;

    assert!(!forward.used_fallback && !backward.used_fallback);
    assert_eq!(forward.origin(), backward.destination());
    assert_eq!(forward.destination(), backward.origin());
    assert_eq!(forward.origin(), Some(x));
    assert_eq!(backward.origin(), Some(y));
}
