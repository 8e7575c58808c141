//! Order and product catalogue handlers.

use axum::{extract::Path, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::domain::{OrderDetail, OrderSummary, Product, UserOrder};
use crate::errors::AppResult;
use crate::services::{ServiceContainer, Services};

pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders))
        .route("/utente/:id", get(orders_of_user))
        .route("/:id", get(get_order))
}

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/categoria/:categoria", get(products_in_category))
}

/// All orders with customer and mission status, newest first
#[utoipa::path(
    get,
    path = "/api/ordini",
    tag = "Orders",
    responses((status = 200, description = "All orders", body = Vec<OrderSummary>))
)]
pub async fn list_orders(services: Services) -> AppResult<Json<Vec<OrderSummary>>> {
    Ok(Json(services.orders().list_orders().await?))
}

#[utoipa::path(
    get,
    path = "/api/ordini/utente/{id}",
    tag = "Orders",
    params(("id" = i32, Path, description = "User id")),
    responses((status = 200, description = "Orders of the user", body = Vec<UserOrder>))
)]
pub async fn orders_of_user(
    services: Services,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<UserOrder>>> {
    Ok(Json(services.orders().orders_of_user(user_id).await?))
}

/// One order with the products it contains
#[utoipa::path(
    get,
    path = "/api/ordini/{id}",
    tag = "Orders",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order found", body = OrderDetail),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(services: Services, Path(id): Path<i32>) -> AppResult<Json<OrderDetail>> {
    Ok(Json(services.orders().get_order(id).await?))
}

#[utoipa::path(
    get,
    path = "/api/prodotti",
    tag = "Products",
    responses((status = 200, description = "Product catalogue", body = Vec<Product>))
)]
pub async fn list_products(services: Services) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(services.orders().list_products().await?))
}

#[utoipa::path(
    get,
    path = "/api/prodotti/categoria/{categoria}",
    tag = "Products",
    params(("categoria" = String, Path, description = "Product category")),
    responses((status = 200, description = "Products in the category", body = Vec<Product>))
)]
pub async fn products_in_category(
    services: Services,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(services.orders().products_in_category(&category).await?))
}
