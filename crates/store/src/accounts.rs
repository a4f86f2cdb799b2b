//! Account persistence: hand-written SQL over the `accounts` table.

use samplereg_core::{Account, DomainError, NewAccount};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::error::StoreError;
use crate::Session;

pub(crate) const DUPLICATE_NAME: &str =
    "An account belonging to this user is already registered";

impl Session {
    /// Persist a new account.
    ///
    /// The name-uniqueness pre-check is an optimization only; the UNIQUE
    /// constraint on `accounts.name` is the authoritative guard, and a
    /// constraint violation from the insert maps to the same conflict.
    pub async fn create_account(&mut self, new: &NewAccount) -> Result<Account, StoreError> {
        if self.account_by_name(&new.name).await?.is_some() {
            return Err(DomainError::conflict(DUPLICATE_NAME).into());
        }

        let result = sqlx::query("INSERT INTO accounts (name) VALUES (?1)")
            .bind(&new.name)
            .execute(self.conn())
            .await
            .map_err(|err| {
                if err
                    .as_database_error()
                    .is_some_and(|db| db.is_unique_violation())
                {
                    StoreError::Domain(DomainError::conflict(DUPLICATE_NAME))
                } else {
                    StoreError::Database(err)
                }
            })?;

        let id = result.last_insert_rowid();
        tracing::debug!(account_id = id, "account created");

        Ok(Account {
            id,
            name: new.name.clone(),
            samples: Vec::new(),
        })
    }

    /// Load one account with its samples, if it exists.
    pub async fn get_account(&mut self, id: i64) -> Result<Option<Account>, StoreError> {
        let row = sqlx::query("SELECT id, name FROM accounts WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.conn())
            .await?;

        match row {
            Some(row) => {
                let mut account = account_from_row(&row)?;
                account.samples = self.samples_for_owner(account.id).await?;
                Ok(Some(account))
            }
            None => Ok(None),
        }
    }

    /// Load accounts in insertion order, offset by `skip` and capped at
    /// `limit`, each with its samples.
    pub async fn list_accounts(
        &mut self,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Account>, StoreError> {
        let rows = sqlx::query("SELECT id, name FROM accounts ORDER BY id ASC LIMIT ?1 OFFSET ?2")
            .bind(limit)
            .bind(skip)
            .fetch_all(self.conn())
            .await?;

        let mut accounts = Vec::with_capacity(rows.len());
        for row in &rows {
            accounts.push(account_from_row(row)?);
        }
        for account in &mut accounts {
            account.samples = self.samples_for_owner(account.id).await?;
        }
        Ok(accounts)
    }

    /// Look up an account by its unique name.
    pub async fn account_by_name(&mut self, name: &str) -> Result<Option<Account>, StoreError> {
        let row = sqlx::query("SELECT id, name FROM accounts WHERE name = ?1")
            .bind(name)
            .fetch_optional(self.conn())
            .await?;

        match row {
            Some(row) => {
                let mut account = account_from_row(&row)?;
                account.samples = self.samples_for_owner(account.id).await?;
                Ok(Some(account))
            }
            None => Ok(None),
        }
    }

    /// Existence check used when attaching samples.
    pub async fn account_exists(&mut self, id: i64) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT id FROM accounts WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.conn())
            .await?;
        Ok(row.is_some())
    }
}

fn account_from_row(row: &SqliteRow) -> Result<Account, sqlx::Error> {
    Ok(Account {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        samples: Vec::new(),
    })
}
