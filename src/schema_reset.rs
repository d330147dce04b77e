use std::{error::Error, fmt::Debug};

use diesel::RunQueryDsl;
use thiserror::Error;

use crate::{telemetry::spawn_blocking_with_tracing, utils::{error_fmt_chain, get_pooled_connection, DbConnection, DbPool, PoolGetError}};

// Drop order: join tables first, then tables with one foreign key, then base
// tables, then the enum type. Every drop is conditional so a reset against an
// empty database succeeds.
const DROP_STATEMENTS: &[&str] = &[
    "DROP TABLE IF EXISTS menu_item_categories",
    "DROP TABLE IF EXISTS order_menu_items",
    "DROP TABLE IF EXISTS user_menu_items",
    "DROP TABLE IF EXISTS categories",
    "DROP TABLE IF EXISTS orders",
    "DROP TABLE IF EXISTS menu_items",
    "DROP TABLE IF EXISTS users",
    "DROP TYPE IF EXISTS order_status",
];

// Create order: tables without foreign keys first, the enum type before the
// table using it, join tables after both of their parents.
const CREATE_STATEMENTS: &[&str] = &[
    r#"CREATE TABLE users(
        id SERIAL PRIMARY KEY,
        email VARCHAR(255) UNIQUE NOT NULL,
        password VARCHAR(255) NOT NULL,
        address TEXT NOT NULL,
        is_admin BOOLEAN NOT NULL DEFAULT false
    )"#,

    r#"CREATE TABLE menu_items(
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) UNIQUE NOT NULL,
        description TEXT NOT NULL,
        image_url VARCHAR(255) NOT NULL,
        price_in_cents INTEGER NOT NULL,
        inventory_quantity INTEGER NOT NULL
    )"#,

    r#"CREATE TYPE order_status AS ENUM (
        'Order Received',
        'Order Cancelled',
        'Order Ready'
    )"#,

    r#"CREATE TABLE orders(
        id SERIAL PRIMARY KEY,
        buyer_id INTEGER NOT NULL REFERENCES users(id),
        order_placed_on DATE NOT NULL,
        status order_status NOT NULL DEFAULT 'Order Received'
    )"#,

    r#"CREATE TABLE categories(
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        image_url VARCHAR(255) NOT NULL
    )"#,

    r#"CREATE TABLE user_menu_items(
        id SERIAL PRIMARY KEY,
        user_id INTEGER NOT NULL REFERENCES users(id),
        menu_item_id INTEGER NOT NULL REFERENCES menu_items(id),
        quantity INTEGER NOT NULL DEFAULT 1,
        UNIQUE (user_id, menu_item_id)
    )"#,

    r#"CREATE TABLE order_menu_items(
        id SERIAL PRIMARY KEY,
        menu_item_id INTEGER NOT NULL REFERENCES menu_items(id),
        order_id INTEGER NOT NULL REFERENCES orders(id),
        price_per_item_in_cents INTEGER NOT NULL,
        quantity INTEGER NOT NULL DEFAULT 1,
        UNIQUE (menu_item_id, order_id)
    )"#,

    r#"CREATE TABLE menu_item_categories(
        id SERIAL PRIMARY KEY,
        menu_item_id INTEGER NOT NULL REFERENCES menu_items(id),
        category_id INTEGER NOT NULL REFERENCES categories(id),
        UNIQUE (menu_item_id, category_id)
    )"#,
];

// Error associated with dropping or rebuilding the schema
#[derive(Error)]
pub enum SchemaResetError{
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to get connection from pool")]
    PoolError(#[from] PoolGetError),
    #[error("Failed to run schema statement: {statement}")]
    StatementError{
        statement: &'static str,
        #[source]
        source: diesel::result::Error
    }
}

impl Debug for SchemaResetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

// Statements run one at a time; the first failure aborts the whole sequence
fn run_statements(
    conn: &mut DbConnection,
    statements: &'static [&'static str]
) -> Result<(), SchemaResetError> {
    for &statement in statements {
        diesel::sql_query(statement)
            .execute(conn)
            .map_err(|e| SchemaResetError::StatementError{
                statement,
                source: e
            })?;
    }

    Ok(())
}

#[tracing::instrument(
    "Dropping all tables",
    skip_all
)]
pub async fn drop_all_tables(pool: &DbPool) -> Result<(), SchemaResetError> {
    let mut conn = get_pooled_connection(pool).await?;

    spawn_blocking_with_tracing(move || {
        run_statements(&mut conn, DROP_STATEMENTS)
    })
    .await??;

    Ok(())
}

#[tracing::instrument(
    "Building all tables",
    skip_all
)]
pub async fn build_all_tables(pool: &DbPool) -> Result<(), SchemaResetError> {
    let mut conn = get_pooled_connection(pool).await?;

    spawn_blocking_with_tracing(move || {
        run_statements(&mut conn, CREATE_STATEMENTS)
    })
    .await??;

    Ok(())
}

#[tracing::instrument(
    "Resetting database schema",
    skip_all
)]
pub async fn reset_schema(pool: &DbPool) -> Result<(), SchemaResetError> {
    tracing::info!("Dropping all tables...");
    drop_all_tables(pool).await?;
    tracing::info!("Finished dropping tables!");

    tracing::info!("Building all tables...");
    build_all_tables(pool).await?;
    tracing::info!("Finished building tables!");

    Ok(())
}
