use std::{error::Error, fmt::Debug};

use diesel::RunQueryDsl;
use thiserror::Error;

use crate::{models::{NewUser, User}, schema::users, telemetry::spawn_blocking_with_tracing, utils::{error_fmt_chain, DbConnection}};

// Error associated with inserting a user into the users table
#[derive(Error)]
pub enum UserInsertError{
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("email field is not unique")]
    EmailNotUnique(#[source] diesel::result::Error),
    #[error("Failed to insert into users table")]
    InsertError(#[source] diesel::result::Error)
}

impl Debug for UserInsertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[tracing::instrument(
    "Inserting user into the database",
    skip_all
)]
pub async fn insert_user(
    mut conn: DbConnection,
    new_user: NewUser
) -> Result<User, UserInsertError> {
    let user = spawn_blocking_with_tracing(move || {
        diesel::insert_into(users::table)
            .values(&new_user)
            .get_result::<User>(&mut conn)
            .map_err(|e| {
                match e {
                    diesel::result::Error::DatabaseError(
                        diesel::result::DatabaseErrorKind::UniqueViolation,
                        _
                    ) => UserInsertError::EmailNotUnique(e),

                    _ => UserInsertError::InsertError(e)
                }
            })
    })
    .await??;

    Ok(user)
}
