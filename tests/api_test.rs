//! Integration tests for API endpoints.
//!
//! Requests go through the full router (session layer, per-request
//! database session, handlers) against a seeded in-memory database.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use common::{TestApp, CUSTOMER_MAIL, CUSTOMER_PASSWORD};

fn find<'a>(rows: &'a Value, key: &str, value: Value) -> &'a Value {
    rows.as_array()
        .expect("array body")
        .iter()
        .find(|row| row[key] == value)
        .unwrap_or_else(|| panic!("no row with {} = {}", key, value))
}

fn ids(rows: &Value, key: &str) -> Vec<i64> {
    rows.as_array()
        .expect("array body")
        .iter()
        .filter_map(|row| row[key].as_i64())
        .collect()
}

// =============================================================================
// System
// =============================================================================

#[tokio::test]
async fn test_api_home() {
    let app = TestApp::new().await;
    let response = app.get("/api").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "online");
    assert_eq!(response.body["version"], "1.0");
}

#[tokio::test]
async fn test_db_check_counts_drones() {
    let app = TestApp::new().await;
    let response = app.get("/api/test-db").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "success");
    assert_eq!(response.body["droni_count"], 3);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = TestApp::new().await;
    let response = app.get("/api-docs/openapi.json").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["paths"]["/api/droni"].is_object());
}

// =============================================================================
// Drones
// =============================================================================

#[tokio::test]
async fn test_drone_create_update_delete_roundtrip() {
    let app = TestApp::new().await;

    let created = app
        .post(
            "/api/droni",
            json!({ "Modello": "Wingcopter 198", "Capacita": 6.0, "Batteria": 100 }),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["success"], true);
    let id = created.body["data"]["id"].as_i64().expect("new id");

    let fetched = app.get(&format!("/api/droni/{}", id)).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["Modello"], "Wingcopter 198");
    assert_eq!(fetched.body["Capacita"], 6.0);
    assert_eq!(fetched.body["Batteria"], 100);

    let updated = app
        .request(
            Method::PUT,
            &format!("/api/droni/{}", id),
            Some(json!({ "Modello": "Wingcopter 198", "Capacita": 6.0, "Batteria": 55 })),
            None,
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    let refetched = app.get(&format!("/api/droni/{}", id)).await;
    assert_eq!(refetched.body["Batteria"], 55);
    assert_eq!(refetched.body["Capacita"], 6.0);

    let deleted = app
        .request(Method::DELETE, &format!("/api/droni/{}", id), None, None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(
        app.get(&format!("/api/droni/{}", id)).await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_drone_list() {
    let app = TestApp::new().await;
    let response = app.get("/api/droni").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().map(Vec::len), Some(3));
    assert_eq!(find(&response.body, "ID", json!(2))["Modello"], "Parrot Anafi");
}

#[tokio::test]
async fn test_drone_invalid_payload_rejected() {
    let app = TestApp::new().await;
    let response = app
        .post(
            "/api/droni",
            json!({ "Modello": "Overcharged", "Capacita": 1.0, "Batteria": 150 }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_drone_with_missions_cannot_be_deleted() {
    let app = TestApp::new().await;
    let response = app.request(Method::DELETE, "/api/droni/1", None, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.get("/api/droni/1").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_drone_is_not_found() {
    let app = TestApp::new().await;

    assert_eq!(app.get("/api/droni/999").await.status, StatusCode::NOT_FOUND);
    let update = app
        .request(
            Method::PUT,
            "/api/droni/999",
            Some(json!({ "Modello": "Ghost", "Capacita": 1.0, "Batteria": 50 })),
            None,
        )
        .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);
    let delete = app.request(Method::DELETE, "/api/droni/999", None, None).await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Pilots
// =============================================================================

#[tokio::test]
async fn test_pilot_list_includes_mission_stats() {
    let app = TestApp::new().await;
    let response = app.get("/api/piloti").await;

    assert_eq!(response.status, StatusCode::OK);
    let marco = find(&response.body, "ID", json!(1));
    assert_eq!(marco["NumMissioni"], 3);
    assert_eq!(marco["MediaValutazione"], 9.0);
    let giulia = find(&response.body, "ID", json!(2));
    assert_eq!(giulia["NumMissioni"], 0);
    assert!(giulia["MediaValutazione"].is_null());
}

#[tokio::test]
async fn test_pilot_delete_guard() {
    let app = TestApp::new().await;

    let busy = app.request(Method::DELETE, "/api/piloti/1", None, None).await;
    assert_eq!(busy.status, StatusCode::BAD_REQUEST);
    let kept = app.get("/api/piloti/1").await;
    assert_eq!(kept.status, StatusCode::OK);
    assert_eq!(kept.body["Cognome"], "Rossi");

    let free = app.request(Method::DELETE, "/api/piloti/2", None, None).await;
    assert_eq!(free.status, StatusCode::OK);
    assert_eq!(app.get("/api/piloti/2").await.status, StatusCode::NOT_FOUND);

    let again = app.request(Method::DELETE, "/api/piloti/2", None, None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pilot_create() {
    let app = TestApp::new().await;
    let created = app
        .post(
            "/api/piloti",
            json!({
                "Nome": "Luca",
                "Cognome": "Neri",
                "Email": "luca@example.com",
                "NumeroLicenza": "LIC-003"
            }),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let id = created.body["data"]["id"].as_i64().expect("new id");
    let fetched = app.get(&format!("/api/piloti/{}", id)).await;
    assert_eq!(fetched.body["Cognome"], "Neri");
}

// =============================================================================
// Missions and traces
// =============================================================================

#[tokio::test]
async fn test_mission_list_newest_first() {
    let app = TestApp::new().await;
    let response = app.get("/api/missioni").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids(&response.body, "ID"), vec![3, 2, 1]);
    assert_eq!(response.body[0]["DataMissione"], "2024-05-03");
    assert_eq!(response.body[0]["Ora"], "09:30:00");
}

#[tokio::test]
async fn test_mission_detail_joins_drone_and_pilot() {
    let app = TestApp::new().await;
    let response = app.get("/api/missioni/1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["DroneModello"], "DJI Matrice");
    assert_eq!(response.body["PilotaCognome"], "Rossi");
    assert_eq!(response.body["Stato"], "completata");
}

#[tokio::test]
async fn test_missions_by_status_newest_first() {
    let app = TestApp::new().await;
    let response = app.get("/api/missioni/stato/completata").await;

    assert_eq!(response.status, StatusCode::OK);
    let ids: Vec<i64> = response
        .body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|m| m["ID"].as_i64())
        .collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn test_rating_only_for_completed_missions() {
    let app = TestApp::new().await;

    let scheduled = app
        .post("/api/missioni/3/valutazione", json!({ "Valutazione": 8 }))
        .await;
    assert_eq!(scheduled.status, StatusCode::BAD_REQUEST);
    let untouched = app.get("/api/missioni/3/valutazione").await;
    assert_eq!(untouched.status, StatusCode::OK);
    assert!(untouched.body["Valutazione"].is_null());
    assert!(untouched.body["Commento"].is_null());

    let out_of_range = app
        .post("/api/missioni/2/valutazione", json!({ "Valutazione": 11 }))
        .await;
    assert_eq!(out_of_range.status, StatusCode::BAD_REQUEST);

    let rated = app
        .post(
            "/api/missioni/2/valutazione",
            json!({ "Valutazione": 7, "Commento": "Puntuale" }),
        )
        .await;
    assert_eq!(rated.status, StatusCode::OK);

    let rating = app.get("/api/missioni/2/valutazione").await;
    assert_eq!(rating.status, StatusCode::OK);
    assert_eq!(rating.body["Valutazione"], 7);
    assert_eq!(rating.body["Commento"], "Puntuale");

    let missing = app
        .post("/api/missioni/999/valutazione", json!({ "Valutazione": 5 }))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_traces_in_time_order() {
    let app = TestApp::new().await;

    let traces = app.get("/api/tracce/missione/1").await;
    assert_eq!(traces.status, StatusCode::OK);
    let ids: Vec<i64> = traces
        .body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|t| t["ID"].as_i64())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let latest = app.get("/api/tracce/ultima/1").await;
    assert_eq!(latest.status, StatusCode::OK);
    assert_eq!(latest.body["ID"], 3);
    assert!(latest.body["TIMESTAMP"].is_string());

    assert_eq!(
        app.get("/api/tracce/ultima/3").await.status,
        StatusCode::NOT_FOUND
    );
}

// =============================================================================
// Orders and products
// =============================================================================

#[tokio::test]
async fn test_order_detail_lists_products() {
    let app = TestApp::new().await;
    let response = app.get("/api/ordini/1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["ClienteMail"], CUSTOMER_MAIL);
    assert_eq!(response.body["MissioneID"], 1);
    let products = response.body["Prodotti"].as_array().expect("products");
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["nome"], "Farmaci");
    assert_eq!(products[0]["Quantita"], 2);

    assert_eq!(app.get("/api/ordini/42").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_orders_of_user() {
    let app = TestApp::new().await;
    let response = app.get("/api/ordini/utente/1").await;

    assert_eq!(response.status, StatusCode::OK);
    let orders = response.body.as_array().expect("array body");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["StatoMissione"], "completata");

    let nobody = app.get("/api/ordini/utente/99").await;
    assert_eq!(nobody.body.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_order_list_joins_customer_and_mission() {
    let app = TestApp::new().await;
    let response = app.get("/api/ordini").await;

    assert_eq!(response.status, StatusCode::OK);
    let orders = response.body.as_array().expect("array body");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["ClienteNome"], "Anna Bianchi");
    assert_eq!(orders[0]["StatoMissione"], "completata");
    assert_eq!(orders[0]["Orario"], "2024-05-01 08:00:00");
    assert_eq!(orders[0]["ClienteMail"], CUSTOMER_MAIL);
    assert_eq!(orders[0]["DataConsegna"], "2024-05-01");
}

#[tokio::test]
async fn test_product_list() {
    let app = TestApp::new().await;
    let response = app.get("/api/prodotti").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids(&response.body, "ID"), vec![1, 2]);
    assert_eq!(response.body[1]["categoria"], "cultura");
}

#[tokio::test]
async fn test_products_by_category() {
    let app = TestApp::new().await;
    let response = app.get("/api/prodotti/categoria/salute").await;

    assert_eq!(response.status, StatusCode::OK);
    let products = response.body.as_array().expect("array body");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["nome"], "Farmaci");
}

// =============================================================================
// Users and sessions
// =============================================================================

#[tokio::test]
async fn test_login_starts_session() {
    let app = TestApp::new().await;

    let login = app
        .post(
            "/api/login",
            json!({ "Mail": CUSTOMER_MAIL, "Password": CUSTOMER_PASSWORD }),
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
    assert_eq!(login.body["success"], true);
    assert_eq!(login.body["user"]["Mail"], CUSTOMER_MAIL);
    assert!(login.body["user"].get("Password").is_none());

    let cookie = login.cookie.expect("session cookie");
    let session = app
        .request(Method::GET, "/api/sessione", None, Some(&cookie))
        .await;
    assert_eq!(session.status, StatusCode::OK);
    assert_eq!(session.body["user_id"], 1);
    assert_eq!(session.body["role"], "cliente");

    let logout = app
        .request(Method::POST, "/api/logout", None, Some(&cookie))
        .await;
    assert_eq!(logout.status, StatusCode::OK);

    let after = app
        .request(Method::GET, "/api/sessione", None, Some(&cookie))
        .await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let app = TestApp::new().await;

    let wrong_password = app
        .post(
            "/api/login",
            json!({ "Mail": CUSTOMER_MAIL, "Password": "not-the-password" }),
        )
        .await;
    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert!(wrong_password.cookie.is_none());

    let unknown = app
        .post(
            "/api/login",
            json!({ "Mail": "nobody@example.com", "Password": CUSTOMER_PASSWORD }),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.body["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_session_requires_login() {
    let app = TestApp::new().await;
    assert_eq!(app.get("/api/sessione").await.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_then_login() {
    let app = TestApp::new().await;

    let registered = app
        .post(
            "/api/utenti",
            json!({ "Nome": "Paolo Gialli", "Mail": "paolo@example.com", "Password": "volare2024" }),
        )
        .await;
    assert_eq!(registered.status, StatusCode::CREATED);
    assert_eq!(registered.body["data"]["Ruolo"], "cliente");

    let duplicate = app
        .post(
            "/api/utenti",
            json!({ "Nome": "Paolo", "Mail": "paolo@example.com", "Password": "volare2024" }),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let login = app
        .post(
            "/api/login",
            json!({ "Mail": "paolo@example.com", "Password": "volare2024" }),
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);

    let users = app.get("/api/utenti").await;
    assert_eq!(users.body.as_array().map(Vec::len), Some(2));
    assert!(!users.body.to_string().contains("argon2"));
}

// =============================================================================
// Statistics and analytics
// =============================================================================

#[tokio::test]
async fn test_mission_statistics() {
    let app = TestApp::new().await;
    let response = app.get("/api/statistiche/missioni").await;

    assert_eq!(response.status, StatusCode::OK);
    let completed = find(&response.body, "Stato", json!("completata"));
    assert_eq!(completed["Totale"], 2);
    assert_eq!(completed["MediaValutazione"], 9.0);
    assert_eq!(find(&response.body, "Stato", json!("programmata"))["Totale"], 1);
}

/// Third pilot with one top-rated mission on the idle drone
async fn seed_top_pilot(app: &TestApp) {
    app.seed(
        "INSERT INTO Pilota (ID, Nome, Cognome, Email, NumeroLicenza) \
         VALUES (3, 'Sara', 'Blu', 'sara@example.com', 'LIC-003')",
    )
    .await;
    app.seed(
        "INSERT INTO Missioni (ID, IdDrone, IdPilota, DataMissione, Ora, Stato, Valutazione) \
         VALUES (4, 3, 3, '2024-05-04', '15:00:00', 'completata', 10)",
    )
    .await;
}

#[tokio::test]
async fn test_pilot_statistics_by_average_rating() {
    let app = TestApp::new().await;
    seed_top_pilot(&app).await;

    let response = app.get("/api/statistiche/piloti").await;
    assert_eq!(response.status, StatusCode::OK);
    // Unrated pilots come last
    assert_eq!(ids(&response.body, "ID"), vec![3, 1, 2]);
    assert_eq!(response.body[0]["MediaValutazione"], 10.0);
    assert_eq!(response.body[1]["NumeroMissioni"], 3);
    assert_eq!(response.body[1]["MissioniCompletate"], 2);
    assert!(response.body[2]["MediaValutazione"].is_null());
}

#[tokio::test]
async fn test_drone_statistics_by_mission_count() {
    let app = TestApp::new().await;
    seed_top_pilot(&app).await;
    app.seed(
        "INSERT INTO Missioni (ID, IdDrone, IdPilota, DataMissione, Ora, Stato) \
         VALUES (5, 3, 3, '2024-05-05', '16:00:00', 'programmata')",
    )
    .await;

    let response = app.get("/api/statistiche/droni").await;
    assert_eq!(response.status, StatusCode::OK);
    // Drone 3: 2 missions, drone 1: 2 missions, drone 2: 1 mission; ties by id
    assert_eq!(ids(&response.body, "ID"), vec![1, 3, 2]);
    assert_eq!(response.body[2]["NumeroMissioni"], 1);
    assert_eq!(response.body[1]["MediaValutazione"], 10.0);
}

#[tokio::test]
async fn test_delivery_report() {
    let app = TestApp::new().await;
    let response = app.get("/api/report/consegne").await;

    assert_eq!(response.status, StatusCode::OK);
    let express = find(&response.body, "Tipo", json!("express"));
    assert_eq!(express["Totale"], 1);
    assert_eq!(express["PesoMedio"], 2.2);
}

#[tokio::test]
async fn test_maintenance_prediction() {
    let app = TestApp::new().await;
    let response = app.get("/api/analytics/maintenance-prediction").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(find(&response.body, "id", json!(1))["stato"], "ok");
    assert_eq!(find(&response.body, "id", json!(2))["stato"], "critico");
    assert_eq!(find(&response.body, "id", json!(3))["stato"], "attenzione");
    assert_eq!(find(&response.body, "id", json!(1))["missioni"], 2);
}

#[tokio::test]
async fn test_demand_route_and_sentiment() {
    let app = TestApp::new().await;

    let demand = app.get("/api/analytics/demand-prediction").await;
    assert_eq!(demand.status, StatusCode::OK);
    assert_eq!(demand.body["totale_storico"], 1);
    assert_eq!(demand.body["media_giornaliera"], 1.0);
    assert_eq!(demand.body["previsione_settimanale"], 7);

    let routes = app.get("/api/analytics/route-analysis").await;
    assert_eq!(routes.status, StatusCode::OK);
    assert_eq!(routes.body["missioni_analizzate"], 2);
    assert_eq!(routes.body["tracce_totali"], 4);
    assert_eq!(routes.body["tempo_medio_consegna"], 10);

    let sentiment = app.get("/api/analytics/sentiment").await;
    assert_eq!(sentiment.status, StatusCode::OK);
    assert_eq!(sentiment.body["positivi"], 1);
    assert_eq!(sentiment.body["totale"], 1);
}
