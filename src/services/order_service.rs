//! Order service - Orders, their contents and the product catalogue.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{OrderDetail, OrderSummary, Product, UserOrder};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait OrderService: Send + Sync {
    async fn list_orders(&self) -> AppResult<Vec<OrderSummary>>;

    async fn orders_of_user(&self, user_id: i32) -> AppResult<Vec<UserOrder>>;

    /// One order together with the products it contains
    async fn get_order(&self, id: i32) -> AppResult<OrderDetail>;

    async fn list_products(&self) -> AppResult<Vec<Product>>;

    async fn products_in_category(&self, category: &str) -> AppResult<Vec<Product>>;
}

pub struct OrderManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> OrderManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> OrderService for OrderManager<U> {
    async fn list_orders(&self) -> AppResult<Vec<OrderSummary>> {
        self.uow.orders().list().await
    }

    async fn orders_of_user(&self, user_id: i32) -> AppResult<Vec<UserOrder>> {
        self.uow.orders().list_by_user(user_id).await
    }

    async fn get_order(&self, id: i32) -> AppResult<OrderDetail> {
        let orders = self.uow.orders();
        let order = orders.find_by_id(id).await?.ok_or_not_found("Order")?;
        let products = orders.products_of(id).await?;
        Ok(OrderDetail::new(order, products))
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.uow.products().list().await
    }

    async fn products_in_category(&self, category: &str) -> AppResult<Vec<Product>> {
        self.uow.products().list_by_category(category).await
    }
}
