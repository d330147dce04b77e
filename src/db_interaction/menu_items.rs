use std::{error::Error, fmt::Debug};

use diesel::RunQueryDsl;
use thiserror::Error;

use crate::{models::{MenuItem, NewMenuItem}, schema::menu_items, telemetry::spawn_blocking_with_tracing, utils::{error_fmt_chain, DbConnection}};

// Error associated with inserting a menu item into the menu_items table
#[derive(Error)]
pub enum MenuItemInsertError{
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("name field is not unique")]
    NameNotUnique(#[source] diesel::result::Error),
    #[error("Failed to insert into menu_items table")]
    InsertError(#[source] diesel::result::Error)
}

impl Debug for MenuItemInsertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[tracing::instrument(
    "Inserting menu item into the database",
    skip_all
)]
pub async fn add_menu_item(
    mut conn: DbConnection,
    new_menu_item: NewMenuItem
) -> Result<MenuItem, MenuItemInsertError> {
    let menu_item = spawn_blocking_with_tracing(move || {
        diesel::insert_into(menu_items::table)
            .values(&new_menu_item)
            .get_result::<MenuItem>(&mut conn)
            .map_err(|e| {
                match e {
                    diesel::result::Error::DatabaseError(
                        diesel::result::DatabaseErrorKind::UniqueViolation,
                        _
                    ) => MenuItemInsertError::NameNotUnique(e),

                    _ => MenuItemInsertError::InsertError(e)
                }
            })
    })
    .await??;

    Ok(menu_item)
}
