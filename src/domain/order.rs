//! Customer orders.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sea_orm::FromQueryResult;
use serde::Serialize;
use utoipa::ToSchema;

use super::product::OrderedProduct;
use crate::types::format::{wire, wire_opt};

/// Order joined with its customer and mission status
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct OrderSummary {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "ID_Utente")]
    pub user_id: i32,
    #[serde(rename = "ID_Missione")]
    pub mission_id: i32,
    #[serde(rename = "Orario", serialize_with = "wire")]
    #[schema(value_type = String, example = "2024-05-14 09:12:00")]
    pub placed_at: NaiveDateTime,
    #[serde(rename = "Tipo")]
    #[schema(example = "express")]
    pub kind: String,
    #[serde(rename = "PesoTotale")]
    pub total_weight: f64,
    #[serde(rename = "IndirizzoDestinazione")]
    pub destination: String,
    #[serde(rename = "DataConsegna", serialize_with = "wire_opt")]
    #[schema(value_type = Option<String>, example = "2024-05-15")]
    pub delivery_date: Option<NaiveDate>,
    #[serde(rename = "ClienteNome")]
    pub customer_name: String,
    #[serde(rename = "ClienteMail")]
    pub customer_mail: String,
    #[serde(rename = "StatoMissione")]
    pub mission_status: String,
}

/// Order as seen by its customer, with the mission schedule
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct UserOrder {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "ID_Utente")]
    pub user_id: i32,
    #[serde(rename = "ID_Missione")]
    pub mission_id: i32,
    #[serde(rename = "Orario", serialize_with = "wire")]
    #[schema(value_type = String)]
    pub placed_at: NaiveDateTime,
    #[serde(rename = "Tipo")]
    pub kind: String,
    #[serde(rename = "PesoTotale")]
    pub total_weight: f64,
    #[serde(rename = "IndirizzoDestinazione")]
    pub destination: String,
    #[serde(rename = "DataConsegna", serialize_with = "wire_opt")]
    #[schema(value_type = Option<String>)]
    pub delivery_date: Option<NaiveDate>,
    #[serde(rename = "StatoMissione")]
    pub mission_status: String,
    #[serde(rename = "DataMissione", serialize_with = "wire_opt")]
    #[schema(value_type = Option<String>)]
    pub mission_date: Option<NaiveDate>,
    #[serde(rename = "OraMissione", serialize_with = "wire_opt")]
    #[schema(value_type = Option<String>)]
    pub mission_time: Option<NaiveTime>,
}

/// Full order with its product lines
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: OrderSummary,
    #[serde(rename = "MissioneID")]
    pub mission_ref: i32,
    #[serde(rename = "Prodotti")]
    pub products: Vec<OrderedProduct>,
}

impl OrderDetail {
    pub fn new(order: OrderSummary, products: Vec<OrderedProduct>) -> Self {
        Self {
            mission_ref: order.mission_id,
            order,
            products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_flattens_order_fields() {
        let order = OrderSummary {
            id: 10,
            user_id: 1,
            mission_id: 4,
            placed_at: NaiveDate::from_ymd_opt(2024, 5, 14)
                .unwrap()
                .and_hms_opt(9, 12, 0)
                .unwrap(),
            kind: "express".to_string(),
            total_weight: 1.6,
            destination: "Via Roma 1, Milano".to_string(),
            delivery_date: None,
            customer_name: "Anna".to_string(),
            customer_mail: "anna@example.com".to_string(),
            mission_status: "in corso".to_string(),
        };
        let product = OrderedProduct {
            id: 2,
            name: "Kit".to_string(),
            category: "medicale".to_string(),
            weight: 0.8,
            quantity: 2,
        };

        let json = serde_json::to_value(OrderDetail::new(order, vec![product])).unwrap();
        assert_eq!(json["ID"], 10);
        assert_eq!(json["MissioneID"], 4);
        assert_eq!(json["Orario"], "2024-05-14 09:12:00");
        assert_eq!(json["Prodotti"][0]["Quantita"], 2);
        assert!(json["DataConsegna"].is_null());
    }
}
