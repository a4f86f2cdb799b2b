//! Sample persistence: hand-written SQL over the `samples` table.

use samplereg_core::{DomainError, NewSample, Sample};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::error::StoreError;
use crate::Session;

pub(crate) const DUPLICATE_LABEL: &str = "A sample with this label is already registered";
pub(crate) const OWNER_NOT_FOUND: &str = "User not found";

impl Session {
    /// Persist a new sample under `owner_id`.
    ///
    /// Validation order is fixed and short-circuits: owner existence, then
    /// label uniqueness, then diameter ordering. The UNIQUE and FOREIGN KEY
    /// constraints remain the authoritative backstop for the first two.
    pub async fn create_sample(
        &mut self,
        owner_id: i64,
        new: &NewSample,
    ) -> Result<Sample, StoreError> {
        if !self.account_exists(owner_id).await? {
            return Err(DomainError::not_found(OWNER_NOT_FOUND).into());
        }
        if self.sample_by_label(&new.sample_label).await?.is_some() {
            return Err(DomainError::conflict(DUPLICATE_LABEL).into());
        }
        new.validate()?;

        let result = sqlx::query(
            r#"
            INSERT INTO samples (sample_label, proposal_number, inner_diameter, outer_diameter, owner_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&new.sample_label)
        .bind(&new.proposal_number)
        .bind(new.inner_diameter)
        .bind(new.outer_diameter)
        .bind(owner_id)
        .execute(self.conn())
        .await
        .map_err(|err| {
            let db = err.as_database_error();
            if db.is_some_and(|db| db.is_unique_violation()) {
                StoreError::Domain(DomainError::conflict(DUPLICATE_LABEL))
            } else if db.is_some_and(|db| db.is_foreign_key_violation()) {
                StoreError::Domain(DomainError::not_found(OWNER_NOT_FOUND))
            } else {
                StoreError::Database(err)
            }
        })?;

        let id = result.last_insert_rowid();
        tracing::debug!(sample_id = id, owner_id, "sample created");

        Ok(Sample {
            id,
            sample_label: new.sample_label.clone(),
            proposal_number: new.proposal_number.clone(),
            inner_diameter: new.inner_diameter,
            outer_diameter: new.outer_diameter,
            owner_id,
        })
    }

    /// Load samples across all accounts in insertion order, offset by
    /// `skip` and capped at `limit`.
    pub async fn list_samples(&mut self, skip: i64, limit: i64) -> Result<Vec<Sample>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, sample_label, proposal_number, inner_diameter, outer_diameter, owner_id
            FROM samples
            ORDER BY id ASC
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(self.conn())
        .await?;

        rows.iter()
            .map(|row| sample_from_row(row).map_err(StoreError::from))
            .collect()
    }

    /// Look up a sample by its unique label.
    pub async fn sample_by_label(&mut self, label: &str) -> Result<Option<Sample>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, sample_label, proposal_number, inner_diameter, outer_diameter, owner_id
            FROM samples
            WHERE sample_label = ?1
            "#,
        )
        .bind(label)
        .fetch_optional(self.conn())
        .await?;

        row.as_ref().map(sample_from_row).transpose().map_err(StoreError::from)
    }

    /// All samples owned by one account, in insertion order.
    pub(crate) async fn samples_for_owner(&mut self, owner_id: i64) -> Result<Vec<Sample>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, sample_label, proposal_number, inner_diameter, outer_diameter, owner_id
            FROM samples
            WHERE owner_id = ?1
            ORDER BY id ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.conn())
        .await?;

        rows.iter()
            .map(|row| sample_from_row(row).map_err(StoreError::from))
            .collect()
    }
}

fn sample_from_row(row: &SqliteRow) -> Result<Sample, sqlx::Error> {
    Ok(Sample {
        id: row.try_get("id")?,
        sample_label: row.try_get("sample_label")?,
        proposal_number: row.try_get("proposal_number")?,
        inner_diameter: row.try_get("inner_diameter")?,
        outer_diameter: row.try_get("outer_diameter")?,
        owner_id: row.try_get("owner_id")?,
    })
}
