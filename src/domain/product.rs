//! Catalog products.

use sea_orm::FromQueryResult;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult, ToSchema)]
pub struct Product {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "nome")]
    #[schema(example = "Kit pronto soccorso")]
    pub name: String,
    #[serde(rename = "categoria")]
    #[schema(example = "medicale")]
    pub category: String,
    /// Unit weight in kilograms
    #[serde(rename = "peso")]
    #[schema(example = 0.8)]
    pub weight: f64,
}

/// Product line of an order, with the ordered quantity
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult, ToSchema)]
pub struct OrderedProduct {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "peso")]
    pub weight: f64,
    #[serde(rename = "Quantita")]
    pub quantity: i32,
}
