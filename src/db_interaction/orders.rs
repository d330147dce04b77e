use std::{error::Error, fmt::Debug};

use diesel::RunQueryDsl;
use thiserror::Error;

use crate::{models::{NewOrder, NewOrderMenuItem, Order, OrderMenuItem}, schema::{order_menu_items, orders}, telemetry::spawn_blocking_with_tracing, utils::{error_fmt_chain, DbConnection}};

// Error associated with inserting an order into the orders table
#[derive(Error)]
pub enum OrderInsertError{
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("buyer_id does not reference an existing user")]
    BuyerMissing(#[source] diesel::result::Error),
    #[error("Failed to insert into orders table")]
    InsertError(#[source] diesel::result::Error)
}

impl Debug for OrderInsertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[tracing::instrument(
    "Inserting order into the database",
    skip_all
)]
pub async fn create_order(
    mut conn: DbConnection,
    new_order: NewOrder
) -> Result<Order, OrderInsertError> {
    let order = spawn_blocking_with_tracing(move || {
        diesel::insert_into(orders::table)
            .values(&new_order)
            .get_result::<Order>(&mut conn)
            .map_err(|e| {
                match e {
                    diesel::result::Error::DatabaseError(
                        diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                        _
                    ) => OrderInsertError::BuyerMissing(e),

                    _ => OrderInsertError::InsertError(e)
                }
            })
    })
    .await??;

    Ok(order)
}

// Error associated with inserting a line item into the order_menu_items table
#[derive(Error)]
pub enum OrderMenuItemInsertError{
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("the (menu_item_id, order_id) pair already exists")]
    DuplicateOrderItem(#[source] diesel::result::Error),
    #[error("menu_item_id or order_id does not reference an existing row")]
    MissingParent(#[source] diesel::result::Error),
    #[error("Failed to insert into order_menu_items table")]
    InsertError(#[source] diesel::result::Error)
}

impl Debug for OrderMenuItemInsertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[tracing::instrument(
    "Inserting order line item into the database",
    skip_all
)]
pub async fn add_menu_item_to_order(
    mut conn: DbConnection,
    new_order_menu_item: NewOrderMenuItem
) -> Result<OrderMenuItem, OrderMenuItemInsertError> {
    let order_menu_item = spawn_blocking_with_tracing(move || {
        diesel::insert_into(order_menu_items::table)
            .values(&new_order_menu_item)
            .get_result::<OrderMenuItem>(&mut conn)
            .map_err(|e| {
                match e {
                    diesel::result::Error::DatabaseError(
                        diesel::result::DatabaseErrorKind::UniqueViolation,
                        _
                    ) => OrderMenuItemInsertError::DuplicateOrderItem(e),

                    diesel::result::Error::DatabaseError(
                        diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                        _
                    ) => OrderMenuItemInsertError::MissingParent(e),

                    _ => OrderMenuItemInsertError::InsertError(e)
                }
            })
    })
    .await??;

    Ok(order_menu_item)
}
