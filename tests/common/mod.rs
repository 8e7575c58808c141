//! Shared fixtures for integration tests.
//!
//! Every test gets its own in-memory SQLite database with the full schema
//! and a small fleet loaded, served through the real router.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::{ConnectOptions, ConnectionTrait, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use tower::ServiceExt;

use drone_delivery_api::config::DEFAULT_SECRET_KEY;
use drone_delivery_api::infra::{Migrator, SharedConnector};
use drone_delivery_api::{create_router, AppState, Config, DatabaseConfig, Password};

/// Password of the seeded customer account
pub const CUSTOMER_PASSWORD: &str = "password123";
pub const CUSTOMER_MAIL: &str = "anna@example.com";

const FIXTURES: &[&str] = &[
    "INSERT INTO Drone (ID, Modello, Capacita, Batteria) VALUES \
        (1, 'DJI Matrice', 5.0, 90), \
        (2, 'Parrot Anafi', 2.5, 15), \
        (3, 'Skydio X2', 3.0, 40)",
    "INSERT INTO Pilota (ID, Nome, Cognome, Email, NumeroLicenza) VALUES \
        (1, 'Marco', 'Rossi', 'marco@example.com', 'LIC-001'), \
        (2, 'Giulia', 'Verdi', 'giulia@example.com', 'LIC-002')",
    "INSERT INTO Missioni (ID, IdDrone, IdPilota, DataMissione, Ora, Stato, Valutazione, Commento) VALUES \
        (1, 1, 1, '2024-05-01', '10:00:00', 'completata', 9, 'Ottimo'), \
        (2, 1, 1, '2024-05-02', '11:00:00', 'completata', NULL, NULL), \
        (3, 2, 1, '2024-05-03', '09:30:00', 'programmata', NULL, NULL)",
    "INSERT INTO Traccia (ID, ID_Missione, Timestamp, Latitudine, Longitudine) VALUES \
        (1, 1, '2024-05-01 10:00:00', 45.4642, 9.19), \
        (2, 1, '2024-05-01 10:05:00', 45.4700, 9.20), \
        (3, 1, '2024-05-01 10:10:00', 45.4781, 9.2275), \
        (4, 2, '2024-05-02 11:00:00', 41.9028, 12.4964)",
    "INSERT INTO Prodotto (ID, nome, categoria, peso) VALUES \
        (1, 'Farmaci', 'salute', 0.5), \
        (2, 'Libro', 'cultura', 1.2)",
];

/// Test application: the router plus direct access to its database.
pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
}

impl TestApp {
    pub async fn new() -> Self {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1);
        let db = sea_orm::Database::connect(options)
            .await
            .expect("in-memory database");
        Migrator::up(&db, None).await.expect("migrations");

        for sql in FIXTURES {
            exec(&db, sql, vec![]).await;
        }
        let hash = Password::new(CUSTOMER_PASSWORD).expect("hash").into_string();
        exec(
            &db,
            "INSERT INTO Utente (ID, Nome, Mail, Password, Ruolo) VALUES (1, 'Anna Bianchi', ?, ?, 'cliente')",
            vec![CUSTOMER_MAIL.into(), hash.into()],
        )
        .await;
        exec(
            &db,
            "INSERT INTO Ordine (ID, ID_Utente, ID_Missione, Orario, Tipo, PesoTotale, IndirizzoDestinazione, DataConsegna) \
             VALUES (1, 1, 1, '2024-05-01 08:00:00', 'express', 2.2, 'Via Roma 1, Milano', '2024-05-01')",
            vec![],
        )
        .await;
        exec(
            &db,
            "INSERT INTO Contiene (ID_Ordine, ID_Prodotto, Quantita) VALUES (1, 1, 2), (1, 2, 1)",
            vec![],
        )
        .await;

        let config = Config::new(
            DatabaseConfig::new("localhost", 3306, "drone_delivery", "test", "test"),
            DEFAULT_SECRET_KEY,
            "127.0.0.1",
            0,
        )
        .expect("config");
        let state = AppState::new(config, Arc::new(SharedConnector::new(db.clone())));
        let router = create_router(state).expect("router");

        Self { router, db }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = self.router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            body,
            cookie,
        }
    }

    /// Run extra setup SQL against the test database
    pub async fn seed(&self, sql: &str) {
        exec(&self.db, sql, vec![]).await;
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body), None).await
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    /// `name=value` part of `Set-Cookie`, if any
    pub cookie: Option<String>,
}

async fn exec(db: &DatabaseConnection, sql: &str, values: Vec<sea_orm::Value>) {
    db.execute(Statement::from_sql_and_values(
        db.get_database_backend(),
        sql,
        values,
    ))
    .await
    .expect("fixture");
}
