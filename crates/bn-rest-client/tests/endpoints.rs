// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Wire-level tests for the REST client against a mock backend

use bn_api_contract::{BarberPatch, NewJob};
use bn_domain_types::{City, JobType};
use bn_rest_client::{AuthConfig, RestClient, RestClientError};
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> RestClient {
    // The base URL carries the /api prefix, exactly like the deployed backend
    RestClient::from_url(&format!("{}/api", server.base_url()), AuthConfig::default()).unwrap()
}

fn barber_json(id: &str, city: &str) -> serde_json::Value {
    json!({
        "id": id,
        "full_name": "Tariq Mahmood",
        "city": city,
        "phone_number": "+447700900123",
        "experience": "3-5 years",
        "skills": ["Skin fade"],
        "specialities": ["Afro hair"],
        "images": [],
        "owner_id": "user-1",
        "created_at": "2025-06-01T10:00:00.000Z",
        "updated_at": "2025-06-01T10:00:00.000Z"
    })
}

#[tokio::test]
async fn list_barbers_decodes_entities() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/barbers");
        then.status(200).json_body(json!([barber_json("b1", "Leeds"), barber_json("b2", "York")]));
    });

    let barbers = client_for(&server).list_barbers().await.unwrap();

    mock.assert();
    assert_eq!(barbers.len(), 2);
    assert_eq!(barbers[0].id, "b1");
    assert_eq!(barbers[0].city, City::Leeds);
    assert_eq!(barbers[1].city, City::York);
}

#[tokio::test]
async fn list_barbers_by_city_sends_query() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/barbers/list").query_param("city", "Stoke-on-Trent");
        then.status(200).json_body(json!([]));
    });

    let barbers =
        client_for(&server).list_barbers_by_city(City::StokeOnTrent).await.unwrap();

    mock.assert();
    assert!(barbers.is_empty());
}

#[tokio::test]
async fn create_job_posts_payload_and_returns_assigned_id() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/jobs/new-job").json_body(json!({
            "shop_name": "Kings Cuts",
            "phone_number": "0113 496 0000",
            "location": "Leeds",
            "job_type": "Full-time",
            "salary_text": "£28,000",
            "description": "Senior barber wanted, walk-ins heavy shop",
            "owner_id": "user-1"
        }));
        then.status(201).json_body(json!({
            "id": "j1",
            "shop_name": "Kings Cuts",
            "phone_number": "0113 496 0000",
            "location": "Leeds",
            "job_type": "Full-time",
            "salary_text": "£28,000",
            "description": "Senior barber wanted, walk-ins heavy shop",
            "owner_id": "user-1"
        }));
    });

    let request = NewJob {
        shop_name: "Kings Cuts".to_string(),
        phone_number: "0113 496 0000".to_string(),
        location: "Leeds".to_string(),
        job_type: JobType::FullTime,
        salary_text: "£28,000".to_string(),
        description: "Senior barber wanted, walk-ins heavy shop".to_string(),
        images: vec![],
        owner_id: "user-1".to_string(),
    };
    let created = client_for(&server).create_job(&request).await.unwrap();

    mock.assert();
    assert_eq!(created.id, "j1");
    assert!(created.images.is_empty());
    assert_eq!(created.created_at, None);
}

#[tokio::test]
async fn update_barber_puts_patch_with_owner_id() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT).path("/api/barbers/update/b1").json_body(json!({
            "full_name": "Tariq M.",
            "owner_id": "user-1"
        }));
        then.status(200).json_body(barber_json("b1", "Leeds"));
    });

    let patch = BarberPatch {
        full_name: Some("Tariq M.".to_string()),
        owner_id: "user-1".to_string(),
        ..Default::default()
    };
    let updated = client_for(&server).update_barber("b1", &patch).await.unwrap();

    mock.assert();
    assert_eq!(updated.id, "b1");
}

#[tokio::test]
async fn delete_shop_carries_owner_in_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE)
            .path("/api/shops/delete/s1")
            .json_body(json!({"owner_id": "user-2"}));
        then.status(200).json_body(json!({
            "message": "Shop deleted",
            "shop": {
                "id": "s1",
                "shop_name": "Fade Factory",
                "sale_price": "£45,000",
                "location": "Manchester",
                "info": "Established shop with four chairs",
                "phone_number": "0161 496 0000",
                "owner_id": "user-2"
            }
        }));
    });

    let response = client_for(&server).delete_shop("s1", "user-2").await.unwrap();

    mock.assert();
    assert_eq!(response.shop.id, "s1");
}

#[tokio::test]
async fn server_error_envelope_is_decoded() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/barbers/missing");
        then.status(404).json_body(json!({"error": "Barber not found"}));
    });

    let err = client_for(&server).get_barber("missing").await.unwrap_err();

    match err {
        RestClientError::Server { status, message } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(message, "Barber not found");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_is_surfaced_raw() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/barbers");
        then.status(502).body("Bad Gateway");
    });

    let err = client_for(&server).list_barbers().await.unwrap_err();

    assert!(matches!(err, RestClientError::UnexpectedResponse(body) if body == "Bad Gateway"));
}

#[tokio::test]
async fn register_user_posts_identity_provider_id() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/auth/register").json_body(json!({
            "id": "user-1",
            "email": "jordan@example.co.uk"
        }));
        then.status(201).json_body(json!({"ok": true}));
    });

    let request = bn_api_contract::RegisterUserRequest {
        id: "user-1".to_string(),
        name: None,
        email: "jordan@example.co.uk".to_string(),
        phone: None,
        photo: None,
    };
    let response = client_for(&server).register_user(&request).await.unwrap();

    mock.assert();
    assert_eq!(response["ok"], true);
}

#[tokio::test]
async fn update_user_puts_to_fixed_path() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT).path("/api/user/update").json_body(json!({
            "id": "user-1",
            "name": "Jordan"
        }));
        then.status(200).json_body(json!({
            "id": "user-1",
            "name": "Jordan",
            "email": "jordan@example.co.uk",
            "phone": "+447700900456"
        }));
    });

    let request = bn_api_contract::UpdateUserRequest {
        id: "user-1".to_string(),
        name: Some("Jordan".to_string()),
        ..Default::default()
    };
    let updated = client_for(&server).update_user(&request).await.unwrap();

    mock.assert();
    assert_eq!(updated.name, "Jordan");
    assert_eq!(updated.photo, None);
}

#[tokio::test]
async fn delete_user_only_checks_status() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/user/delete/user-1");
        then.status(204);
    });

    client_for(&server).delete_user("user-1").await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn ping_reports_cold_backend_without_failing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/health");
        then.status(503).body("waking up");
    });

    assert!(!client_for(&server).ping().await);
}

#[tokio::test]
async fn ping_reports_awake_backend() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/health");
        then.status(200).json_body(json!({"status": "ok"}));
    });

    assert!(client_for(&server).ping().await);
}
