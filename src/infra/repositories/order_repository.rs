//! Order repository.

use async_trait::async_trait;

use crate::domain::{OrderSummary, OrderedProduct, UserOrder};
use crate::errors::AppResult;
use crate::infra::db::DbSession;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const ORDER_COLUMNS: &str = "\
    o.ID AS id, o.ID_Utente AS user_id, o.ID_Missione AS mission_id, o.Orario AS placed_at, \
    o.Tipo AS kind, o.PesoTotale AS total_weight, o.IndirizzoDestinazione AS destination, \
    o.DataConsegna AS delivery_date";

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Every order with its customer and mission status, newest first
    async fn list(&self) -> AppResult<Vec<OrderSummary>>;

    /// Orders of one customer with their mission schedule, newest first
    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<UserOrder>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<OrderSummary>>;

    /// Products in an order with their quantities
    async fn products_of(&self, order_id: i32) -> AppResult<Vec<OrderedProduct>>;
}

pub struct OrderStore {
    db: DbSession,
}

impl OrderStore {
    pub fn new(db: DbSession) -> Self {
        Self { db }
    }

    fn summary_query(filter: &str) -> String {
        format!(
            "SELECT {}, u.Nome AS customer_name, u.Mail AS customer_mail, \
                    m.Stato AS mission_status \
             FROM Ordine o \
             JOIN Utente u ON o.ID_Utente = u.ID \
             JOIN Missioni m ON o.ID_Missione = m.ID \
             {}",
            ORDER_COLUMNS, filter
        )
    }
}

#[async_trait]
impl OrderRepository for OrderStore {
    async fn list(&self) -> AppResult<Vec<OrderSummary>> {
        self.db
            .fetch_all(&Self::summary_query("ORDER BY o.Orario DESC"), vec![])
            .await
    }

    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<UserOrder>> {
        let sql = format!(
            "SELECT {}, m.Stato AS mission_status, m.DataMissione AS mission_date, \
                    m.Ora AS mission_time \
             FROM Ordine o \
             JOIN Missioni m ON o.ID_Missione = m.ID \
             WHERE o.ID_Utente = ? \
             ORDER BY o.Orario DESC",
            ORDER_COLUMNS
        );
        self.db.fetch_all(&sql, vec![user_id.into()]).await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<OrderSummary>> {
        self.db
            .fetch_one(&Self::summary_query("WHERE o.ID = ?"), vec![id.into()])
            .await
    }

    async fn products_of(&self, order_id: i32) -> AppResult<Vec<OrderedProduct>> {
        self.db
            .fetch_all(
                "SELECT p.ID AS id, p.nome AS name, p.categoria AS category, p.peso AS weight, \
                        c.Quantita AS quantity \
                 FROM Prodotto p \
                 JOIN Contiene c ON p.ID = c.ID_Prodotto \
                 WHERE c.ID_Ordine = ? \
                 ORDER BY p.ID",
                vec![order_id.into()],
            )
            .await
    }
}
