//! Integration tests for the portal clients and typed resource methods

use std::sync::Arc;

use grantflow_http::types::{
    ApplicationStatus, CloseoutPayload, DonorPayload, ReviewPayload, ReviewRecommendation,
    SubgranteeProfile,
};
use grantflow_http::{ApiError, ClientBuilder, MemorySessionStore, PortalClient, Session};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> grantflow_http::AuthGateway {
    let store = Arc::new(MemorySessionStore::with_session(Session {
        access_token: "A1".into(),
        refresh_token: "R1".into(),
        user: None,
    }));
    ClientBuilder::new()
        .base_url(server.uri())
        .build_gateway(store)
        .unwrap()
}

#[tokio::test]
async fn login_issues_both_tokens_and_the_profile() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/authentication/login/"))
        .and(body_json(json!({
            "email": "grants@ghf.example",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": "A1",
            "refresh": "R1",
            "user": {
                "user_id": 42,
                "email": "grants@ghf.example",
                "organisation_name": "Global Health Fund"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PortalClient::new(server.uri()).unwrap();
    let response = client
        .login("grants@ghf.example".into(), "hunter2".into())
        .await
        .unwrap();

    assert_eq!(response.access, "A1");
    assert_eq!(response.refresh, "R1");
    assert_eq!(response.user.user_id, 42);
    assert_eq!(
        response.user.organisation_name.as_deref(),
        Some("Global Health Fund")
    );
}

#[tokio::test]
async fn rejected_login_maps_to_authentication_failed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/authentication/login/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "invalid credentials"})),
        )
        .mount(&server)
        .await;

    let client = PortalClient::new(server.uri()).unwrap();
    let result = client
        .login("grants@ghf.example".into(), "wrong".into())
        .await;
    assert!(matches!(result, Err(ApiError::AuthenticationFailed(_))));
}

#[tokio::test]
async fn creating_a_donor_posts_the_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/grants/donors/"))
        .and(body_json(json!({
            "name": "Global Health Fund",
            "contact_email": "grants@ghf.example",
            "country": "KE"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7,
            "name": "Global Health Fund",
            "contact_email": "grants@ghf.example",
            "country": "KE",
            "active": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let donor = gateway
        .create_donor(&DonorPayload {
            name: "Global Health Fund".into(),
            contact_email: Some("grants@ghf.example".into()),
            country: Some("KE".into()),
        })
        .await
        .unwrap();
    assert_eq!(donor.id, 7);
    assert!(donor.active);
}

#[tokio::test]
async fn application_listing_can_filter_by_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/grants/applications/"))
        .and(query_param("status", "under_review"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{
                "id": 3,
                "grant_type": 1,
                "organisation_name": "Water For All",
                "title": "Borehole rehabilitation",
                "summary": null,
                "requested_amount": "25000.00",
                "status": "under_review",
                "submitted_at": "2026-05-01T09:30:00Z"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let page = gateway
        .list_applications(Some(ApplicationStatus::UnderReview))
        .await
        .unwrap();
    assert_eq!(page.results[0].status, ApplicationStatus::UnderReview);
    assert_eq!(page.results[0].requested_amount, "25000.00");
}

#[tokio::test]
async fn reviews_are_filed_under_their_application() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/grants/applications/3/reviews/"))
        .and(body_json(json!({
            "score": 82,
            "comments": "Strong budget narrative",
            "recommendation": "approve"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 11,
            "application": 3,
            "reviewer": 9,
            "score": 82,
            "comments": "Strong budget narrative",
            "recommendation": "approve",
            "created_at": "2026-05-02T10:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let review = gateway
        .create_review(
            3,
            &ReviewPayload {
                score: 82,
                comments: Some("Strong budget narrative".into()),
                recommendation: ReviewRecommendation::Approve,
            },
        )
        .await
        .unwrap();
    assert_eq!(review.application, 3);
    assert_eq!(review.recommendation, ReviewRecommendation::Approve);
}

#[tokio::test]
async fn closeout_requests_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/grants/applications/3/closeout/"))
        .and(body_json(json!({"reason": "All milestones delivered"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 2,
            "application": 3,
            "reason": "All milestones delivered",
            "status": "requested",
            "requested_at": "2026-06-30T16:45:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let closeout = gateway
        .request_closeout(
            3,
            &CloseoutPayload {
                reason: "All milestones delivered".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(closeout.application, 3);
}

#[tokio::test]
async fn missing_resources_map_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/grants/donors/99/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "not found"})))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let result = gateway.get_donor(99).await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn deleting_a_grant_type_tolerates_an_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/grants/grant-types/5/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    assert!(gateway.delete_grant_type(5).await.is_ok());
}

#[tokio::test]
async fn subgrantee_profile_upsert_uses_put() {
    let server = MockServer::start().await;

    let profile = json!({
        "organisation_name": "Water For All",
        "registration_number": "NGO-2210",
        "address": "14 Riverside Drive",
        "country": "KE",
        "contact_person": "A. Mwangi",
        "phone": "+254700000000"
    });

    Mock::given(method("PUT"))
        .and(path("/api/subgrantees/profiles/"))
        .and(body_json(profile.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let saved = gateway
        .upsert_subgrantee_profile(&SubgranteeProfile {
            organisation_name: "Water For All".into(),
            registration_number: Some("NGO-2210".into()),
            address: Some("14 Riverside Drive".into()),
            country: Some("KE".into()),
            contact_person: Some("A. Mwangi".into()),
            phone: Some("+254700000000".into()),
        })
        .await
        .unwrap();
    assert_eq!(saved.organisation_name, "Water For All");
}

#[tokio::test]
async fn progress_reports_filter_by_application() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/grants/reports/progress/"))
        .and(query_param("application", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{
                "id": 4,
                "application": 3,
                "period_start": "2026-01-01",
                "period_end": "2026-03-31",
                "narrative": "Drilled two of three boreholes",
                "status": "submitted"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let page = gateway.list_progress_reports(Some(3)).await.unwrap();
    assert_eq!(page.results[0].application, 3);
}
