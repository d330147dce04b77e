use std::{error::Error, fmt::Debug};

use diesel::RunQueryDsl;
use thiserror::Error;

use crate::{models::{NewUserMenuItem, UserMenuItem}, schema::user_menu_items, telemetry::spawn_blocking_with_tracing, utils::{error_fmt_chain, DbConnection}};

// Error associated with inserting a cart entry into the user_menu_items table
#[derive(Error)]
pub enum UserMenuItemInsertError{
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("the (user_id, menu_item_id) pair already exists")]
    DuplicateCartEntry(#[source] diesel::result::Error),
    #[error("user_id or menu_item_id does not reference an existing row")]
    MissingParent(#[source] diesel::result::Error),
    #[error("Failed to insert into user_menu_items table")]
    InsertError(#[source] diesel::result::Error)
}

impl Debug for UserMenuItemInsertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[tracing::instrument(
    "Inserting cart entry into the database",
    skip_all
)]
pub async fn add_menu_item_to_user(
    mut conn: DbConnection,
    new_user_menu_item: NewUserMenuItem
) -> Result<UserMenuItem, UserMenuItemInsertError> {
    let user_menu_item = spawn_blocking_with_tracing(move || {
        diesel::insert_into(user_menu_items::table)
            .values(&new_user_menu_item)
            .get_result::<UserMenuItem>(&mut conn)
            .map_err(|e| {
                match e {
                    diesel::result::Error::DatabaseError(
                        diesel::result::DatabaseErrorKind::UniqueViolation,
                        _
                    ) => UserMenuItemInsertError::DuplicateCartEntry(e),

                    diesel::result::Error::DatabaseError(
                        diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                        _
                    ) => UserMenuItemInsertError::MissingParent(e),

                    _ => UserMenuItemInsertError::InsertError(e)
                }
            })
    })
    .await??;

    Ok(user_menu_item)
}
