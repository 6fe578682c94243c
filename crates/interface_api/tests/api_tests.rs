//! HTTP API tests
//!
//! The full router runs against in-memory stores and a frozen clock.

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Duration;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use uuid::Uuid;

use domain_klant::MockKlantPort;
use domain_opstal::MockOpstalverzekeringPort;
use interface_api::dto::klant::KlantResponse;
use interface_api::dto::opstalverzekering::OpstalverzekeringResponse;
use interface_api::error::ErrorResponse;
use interface_api::{create_router, AppState};
use test_utils::*;

fn server_for(stores: &InMemoryStores) -> TestServer {
    let state = AppState::new(
        stores.klanten.clone(),
        stores.verzekeringen.clone(),
        stores.clock.clone(),
    );
    TestServer::new(create_router(state)).unwrap()
}

fn jan_json() -> Value {
    json!({
        "voornaam": "Jan",
        "tussenvoegsel": "van",
        "achternaam": "Dijk",
        "geboortedatum": "1985-03-21",
        "woonplaats": "Zwolle"
    })
}

fn polis_json(klant_id: Uuid, polis_nummer: i32, type_dekking: &str) -> Value {
    json!({
        "polisNummer": polis_nummer,
        "klantId": klant_id,
        "typeDekking": type_dekking,
        "gedekteGebeurtenissen": "Brand, storm",
        "herbouwwaarde": 350000,
        "inboedelwaarde": "50000.00",
        "premie": 45.99,
        "betaaltermijn": "Maandelijks"
    })
}

async fn create_jan(server: &TestServer) -> KlantResponse {
    let response = server.post("/api/klanten").json(&jan_json()).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<KlantResponse>()
}

mod health {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let server = server_for(&InMemoryStores::new());
        let response = server.get("/health").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_reports_every_adapter() {
        let server = server_for(&InMemoryStores::new());
        let response = server.get("/health/ready").await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["status"], "ready");
        assert_eq!(body["checks"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_request_id_is_returned() {
        let server = server_for(&InMemoryStores::new());
        let response = server.get("/health").await;
        assert!(response.headers().get("x-request-id").is_some());
    }
}

mod klanten {
    use super::*;

    #[tokio::test]
    async fn test_create_returns_location() {
        let server = server_for(&InMemoryStores::new());
        let response = server.post("/api/klanten").json(&jan_json()).await;

        response.assert_status(StatusCode::CREATED);
        let klant = response.json::<KlantResponse>();
        assert_eq!(
            response.header("location").to_str().unwrap(),
            format!("/api/klanten/{}", klant.id)
        );
        assert_eq!(klant.begin_datum, TemporalFixtures::now());
        assert!(klant.eind_datum.is_none());
        assert_eq!(klant.tussenvoegsel.as_deref(), Some("van"));
    }

    #[tokio::test]
    async fn test_response_is_camel_case() {
        let server = server_for(&InMemoryStores::new());
        let body = server.post("/api/klanten").json(&jan_json()).await.json::<Value>();

        assert!(body.get("beginDatum").is_some());
        assert!(body.get("eindDatum").is_some());
        assert!(body.get("begin_datum").is_none());
    }

    #[tokio::test]
    async fn test_get_roundtrip() {
        let server = server_for(&InMemoryStores::new());
        let created = create_jan(&server).await;

        let response = server.get(&format!("/api/klanten/{}", created.id)).await;
        response.assert_status_ok();
        let fetched = response.json::<KlantResponse>();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.achternaam, "Dijk");
    }

    #[tokio::test]
    async fn test_unknown_klant_is_bare_404() {
        let server = server_for(&InMemoryStores::new());
        let response = server.get(&format!("/api/klanten/{}", Uuid::now_v7())).await;

        response.assert_status_not_found();
        assert!(response.text().is_empty());
    }

    #[tokio::test]
    async fn test_missing_required_field_is_400() {
        let stores = InMemoryStores::new();
        let server = server_for(&stores);
        let response = server
            .post("/api/klanten")
            .json(&json!({
                "voornaam": "Jan",
                "achternaam": "Dijk",
                "geboortedatum": "1985-03-21"
            }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(stores.klanten.len().await, 0);
    }

    #[tokio::test]
    async fn test_blank_required_field_is_validation_error() {
        let stores = InMemoryStores::new();
        let server = server_for(&stores);
        let mut body = jan_json();
        body["woonplaats"] = json!("");

        let response = server.post("/api/klanten").json(&body).await;

        response.assert_status_bad_request();
        let error = response.json::<ErrorResponse>();
        assert_eq!(error.error, "validation_error");
        assert!(error
            .details
            .unwrap_or_default()
            .iter()
            .any(|d| d.starts_with("woonplaats")));
        assert_eq!(stores.klanten.len().await, 0);
    }

    #[tokio::test]
    async fn test_whitespace_only_fields_are_rejected() {
        let stores = InMemoryStores::new();
        let server = server_for(&stores);
        let mut body = jan_json();
        body["voornaam"] = json!("   ");
        body["woonplaats"] = json!("  ");

        let response = server.post("/api/klanten").json(&body).await;

        response.assert_status_bad_request();
        let details = response.json::<ErrorResponse>().details.unwrap_or_default();
        assert!(details.iter().any(|d| d.starts_with("voornaam")));
        assert!(details.iter().any(|d| d.starts_with("woonplaats")));
        assert_eq!(stores.klanten.len().await, 0);
    }

    #[tokio::test]
    async fn test_malformed_id_is_json_400() {
        let server = server_for(&InMemoryStores::new());

        for response in [
            server.get("/api/klanten/not-a-uuid").await,
            server.put("/api/klanten/not-a-uuid/einddatum").await,
        ] {
            response.assert_status_bad_request();
            let error = response.json::<ErrorResponse>();
            assert_eq!(error.error, "bad_request");
            assert!(!error.message.is_empty());
        }
    }

    #[tokio::test]
    async fn test_set_einddatum_without_body_uses_now() {
        let server = server_for(&InMemoryStores::new());
        let klant = create_jan(&server).await;

        let response = server.put(&format!("/api/klanten/{}/einddatum", klant.id)).await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<KlantResponse>().eind_datum,
            Some(TemporalFixtures::now())
        );
    }

    #[tokio::test]
    async fn test_set_einddatum_explicit_then_again() {
        let server = server_for(&InMemoryStores::new());
        let klant = create_jan(&server).await;
        let path = format!("/api/klanten/{}/einddatum", klant.id);

        let response = server
            .put(&path)
            .json(&json!({ "eindDatum": "2026-12-31T00:00:00Z" }))
            .await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<KlantResponse>().eind_datum,
            Some(TemporalFixtures::end_of_year())
        );

        let again = server.put(&path).json(&json!({})).await;
        again.assert_status_bad_request();
        let error = again.json::<ErrorResponse>();
        assert_eq!(error.error, "conflict");
        assert_eq!(error.message, "Klant heeft al een einddatum.");
    }

    #[tokio::test]
    async fn test_set_einddatum_unknown_klant() {
        let server = server_for(&InMemoryStores::new());
        let response = server
            .put(&format!("/api/klanten/{}/einddatum", Uuid::now_v7()))
            .await;
        response.assert_status_not_found();
    }
}

mod opstalverzekeringen {
    use super::*;

    #[tokio::test]
    async fn test_create_for_active_klant() {
        let server = server_for(&InMemoryStores::new());
        let klant = create_jan(&server).await;

        let response = server
            .post("/api/opstalverzekeringen")
            .json(&polis_json(klant.id, 1001, "All-risk"))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(
            response.header("location").to_str().unwrap(),
            "/api/opstalverzekeringen/polisnummer/1001"
        );
        let polis = response.json::<OpstalverzekeringResponse>();
        assert_eq!(polis.klant_id, klant.id);
        assert_eq!(polis.premie, dec!(45.99));
        assert_eq!(polis.herbouwwaarde, dec!(350000));
        assert_eq!(polis.begin_datum, TemporalFixtures::now());
        assert!(polis.uitsluitingen.is_none());
    }

    #[tokio::test]
    async fn test_create_for_ended_klant_is_rejected() {
        let stores = InMemoryStores::new();
        let server = server_for(&stores);
        let klant = create_jan(&server).await;
        server
            .put(&format!("/api/klanten/{}/einddatum", klant.id))
            .await
            .assert_status_ok();

        let response = server
            .post("/api/opstalverzekeringen")
            .json(&polis_json(klant.id, 1001, "All-risk"))
            .await;

        response.assert_status_bad_request();
        assert!(response.json::<ErrorResponse>().message.contains("beëindigd"));
        assert_eq!(stores.verzekeringen.len().await, 0);
    }

    #[tokio::test]
    async fn test_create_for_unknown_klant_is_404() {
        let server = server_for(&InMemoryStores::new());
        let response = server
            .post("/api/opstalverzekeringen")
            .json(&polis_json(Uuid::now_v7(), 1001, "All-risk"))
            .await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_duplicate_polis_nummer_is_409() {
        let server = server_for(&InMemoryStores::new());
        let klant = create_jan(&server).await;

        server
            .post("/api/opstalverzekeringen")
            .json(&polis_json(klant.id, 1001, "All-risk"))
            .await
            .assert_status(StatusCode::CREATED);
        let response = server
            .post("/api/opstalverzekeringen")
            .json(&polis_json(klant.id, 1001, "Basis"))
            .await;

        response.assert_status(StatusCode::CONFLICT);
        assert_eq!(response.json::<ErrorResponse>().error, "duplicate");
    }

    #[tokio::test]
    async fn test_amount_with_three_decimals_is_400() {
        let stores = InMemoryStores::new();
        let server = server_for(&stores);
        let klant = create_jan(&server).await;
        let mut body = polis_json(klant.id, 1001, "All-risk");
        body["premie"] = json!("45.999");

        let response = server.post("/api/opstalverzekeringen").json(&body).await;

        response.assert_status_bad_request();
        assert_eq!(stores.verzekeringen.len().await, 0);
    }

    #[tokio::test]
    async fn test_polisnummer_lookup_skips_ended_rows() {
        let klant = KlantBuilder::new().build();
        let ended = OpstalverzekeringBuilder::new(klant.id)
            .with_polis_nummer(3003)
            .with_type_dekking("Basis")
            .beeindigd_op(TemporalFixtures::now() - Duration::days(10))
            .build();
        let current = OpstalverzekeringBuilder::new(klant.id)
            .with_polis_nummer(3003)
            .with_type_dekking("All-risk")
            .build();
        let stores = InMemoryStores::seeded(
            MockKlantPort::with_klanten(vec![klant]).await,
            MockOpstalverzekeringPort::with_verzekeringen(vec![ended, current.clone()]).await,
        );
        let server = server_for(&stores);

        let response = server.get("/api/opstalverzekeringen/polisnummer/3003").await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<OpstalverzekeringResponse>().id,
            *current.id.as_uuid()
        );
    }

    #[tokio::test]
    async fn test_whitespace_only_type_dekking_is_rejected() {
        let stores = InMemoryStores::new();
        let server = server_for(&stores);
        let klant = create_jan(&server).await;

        let response = server
            .post("/api/opstalverzekeringen")
            .json(&polis_json(klant.id, 1001, "   "))
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<ErrorResponse>().error, "validation_error");
        assert_eq!(stores.verzekeringen.len().await, 0);
    }

    #[tokio::test]
    async fn test_malformed_path_parameters_are_json_400() {
        let server = server_for(&InMemoryStores::new());

        for response in [
            server.get("/api/opstalverzekeringen/polisnummer/abc").await,
            server.get("/api/opstalverzekeringen/klant/not-a-uuid").await,
            server.put("/api/opstalverzekeringen/not-a-uuid/einddatum").await,
        ] {
            response.assert_status_bad_request();
            assert_eq!(response.json::<ErrorResponse>().error, "bad_request");
        }
    }

    #[tokio::test]
    async fn test_unknown_polisnummer_is_404() {
        let server = server_for(&InMemoryStores::new());
        let response = server.get("/api/opstalverzekeringen/polisnummer/9999").await;

        response.assert_status_not_found();
        assert!(response.text().is_empty());
    }

    #[tokio::test]
    async fn test_list_by_klant_returns_only_active() {
        let server = server_for(&InMemoryStores::new());
        let klant = create_jan(&server).await;

        for (nummer, dekking) in [(1001, "All-risk"), (2002, "Basis")] {
            server
                .post("/api/opstalverzekeringen")
                .json(&polis_json(klant.id, nummer, dekking))
                .await
                .assert_status(StatusCode::CREATED);
        }
        let basis = server
            .get("/api/opstalverzekeringen/polisnummer/2002")
            .await
            .json::<OpstalverzekeringResponse>();
        server
            .put(&format!("/api/opstalverzekeringen/{}/einddatum", basis.id))
            .await
            .assert_status_ok();

        let list = server
            .get(&format!("/api/opstalverzekeringen/klant/{}", klant.id))
            .await
            .json::<Vec<OpstalverzekeringResponse>>();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].polis_nummer, 1001);
    }

    #[tokio::test]
    async fn test_list_by_unknown_klant_is_empty() {
        let server = server_for(&InMemoryStores::new());
        let response = server
            .get(&format!("/api/opstalverzekeringen/klant/{}", Uuid::now_v7()))
            .await;

        response.assert_status_ok();
        assert!(response.json::<Vec<OpstalverzekeringResponse>>().is_empty());
    }

    #[tokio::test]
    async fn test_typedekking_is_case_sensitive() {
        let server = server_for(&InMemoryStores::new());
        let klant = create_jan(&server).await;
        server
            .post("/api/opstalverzekeringen")
            .json(&polis_json(klant.id, 1001, "All-risk"))
            .await
            .assert_status(StatusCode::CREATED);

        let exact = server
            .get("/api/opstalverzekeringen/typedekking/All-risk")
            .await
            .json::<Vec<OpstalverzekeringResponse>>();
        let other_case = server
            .get("/api/opstalverzekeringen/typedekking/All-Risk")
            .await
            .json::<Vec<OpstalverzekeringResponse>>();

        assert_eq!(exact.len(), 1);
        assert!(other_case.is_empty());
    }

    #[tokio::test]
    async fn test_set_einddatum_twice() {
        let server = server_for(&InMemoryStores::new());
        let klant = create_jan(&server).await;
        let polis = server
            .post("/api/opstalverzekeringen")
            .json(&polis_json(klant.id, 1001, "All-risk"))
            .await
            .json::<OpstalverzekeringResponse>();
        let path = format!("/api/opstalverzekeringen/{}/einddatum", polis.id);

        let first = server.put(&path).await;
        first.assert_status_ok();
        assert_eq!(
            first.json::<OpstalverzekeringResponse>().eind_datum,
            Some(TemporalFixtures::now())
        );

        let again = server.put(&path).await;
        again.assert_status_bad_request();
        assert_eq!(
            again.json::<ErrorResponse>().message,
            "Opstalverzekering heeft al een einddatum."
        );
    }

    #[tokio::test]
    async fn test_set_einddatum_unknown_policy() {
        let server = server_for(&InMemoryStores::new());
        server
            .put(&format!("/api/opstalverzekeringen/{}/einddatum", Uuid::now_v7()))
            .await
            .assert_status_not_found();
    }
}
