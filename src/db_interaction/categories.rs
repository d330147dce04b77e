use std::{error::Error, fmt::Debug};

use diesel::RunQueryDsl;
use thiserror::Error;

use crate::{models::{Category, MenuItemCategory, NewCategory, NewMenuItemCategory}, schema::{categories, menu_item_categories}, telemetry::spawn_blocking_with_tracing, utils::{error_fmt_chain, DbConnection}};

// Error associated with inserting a category into the categories table
#[derive(Error)]
pub enum CategoryInsertError{
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to insert into categories table")]
    InsertError(#[from] diesel::result::Error)
}

impl Debug for CategoryInsertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[tracing::instrument(
    "Inserting category into the database",
    skip_all
)]
pub async fn add_category(
    mut conn: DbConnection,
    new_category: NewCategory
) -> Result<Category, CategoryInsertError> {
    let category = spawn_blocking_with_tracing(move || {
        diesel::insert_into(categories::table)
            .values(&new_category)
            .get_result::<Category>(&mut conn)
    })
    .await??;

    Ok(category)
}

// Error associated with inserting into the menu_item_categories table
#[derive(Error)]
pub enum MenuItemCategoryInsertError{
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("the (menu_item_id, category_id) pair already exists")]
    DuplicateAssociation(#[source] diesel::result::Error),
    #[error("menu_item_id or category_id does not reference an existing row")]
    MissingParent(#[source] diesel::result::Error),
    #[error("Failed to insert into menu_item_categories table")]
    InsertError(#[source] diesel::result::Error)
}

impl Debug for MenuItemCategoryInsertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[tracing::instrument(
    "Associating category with menu item in the database",
    skip_all
)]
pub async fn add_category_to_menu_item(
    mut conn: DbConnection,
    new_menu_item_category: NewMenuItemCategory
) -> Result<MenuItemCategory, MenuItemCategoryInsertError> {
    let menu_item_category = spawn_blocking_with_tracing(move || {
        diesel::insert_into(menu_item_categories::table)
            .values(&new_menu_item_category)
            .get_result::<MenuItemCategory>(&mut conn)
            .map_err(|e| {
                match e {
                    diesel::result::Error::DatabaseError(
                        diesel::result::DatabaseErrorKind::UniqueViolation,
                        _
                    ) => MenuItemCategoryInsertError::DuplicateAssociation(e),

                    diesel::result::Error::DatabaseError(
                        diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                        _
                    ) => MenuItemCategoryInsertError::MissingParent(e),

                    _ => MenuItemCategoryInsertError::InsertError(e)
                }
            })
    })
    .await??;

    Ok(menu_item_category)
}
