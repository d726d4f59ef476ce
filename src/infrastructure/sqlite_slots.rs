use chrono::Utc;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::SlotStorage;
use crate::schema::slots;

use super::models::{NewSlotRow, SlotRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Storage ───────────────────────────────────────────────────────────────────

/// Durable slots in the `slots` table, one row per slot name.
pub struct DieselSlotStorage {
    pool: DbPool,
}

impl DieselSlotStorage {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl SlotStorage for DieselSlotStorage {
    fn read_slot(&self, name: &str) -> Result<Option<String>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = slots::table
            .filter(slots::name.eq(name))
            .select(SlotRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(|r| r.value))
    }

    fn write_slot(&self, name: &str, value: &str) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        diesel::replace_into(slots::table)
            .values(&NewSlotRow {
                name,
                value,
                updated_at: Utc::now().naive_utc(),
            })
            .execute(&mut conn)?;

        Ok(())
    }

    fn clear_slot(&self, name: &str) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        diesel::delete(slots::table.filter(slots::name.eq(name))).execute(&mut conn)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use diesel::prelude::*;

    use super::DieselSlotStorage;
    use crate::db::create_pool;
    use crate::domain::ports::SlotStorage;
    use crate::infrastructure::models::SlotRow;
    use crate::schema::slots;

    fn setup() -> (DieselSlotStorage, crate::db::DbPool) {
        let pool = create_pool(":memory:").expect("Failed to create pool");
        crate::run_migrations(&pool).expect("Failed to run migrations");
        (DieselSlotStorage::new(pool.clone()), pool)
    }

    #[test]
    fn missing_slot_reads_as_none() {
        let (storage, _pool) = setup();
        assert_eq!(storage.read_slot("motomorph_designs").unwrap(), None);
    }

    #[test]
    fn write_replaces_previous_value() {
        let (storage, pool) = setup();

        storage.write_slot("motomorph_designs", "[]").unwrap();
        storage.write_slot("motomorph_designs", "[1]").unwrap();

        assert_eq!(
            storage.read_slot("motomorph_designs").unwrap().as_deref(),
            Some("[1]")
        );

        let mut conn = pool.get().expect("Failed to get connection");
        let rows: Vec<SlotRow> = slots::table
            .select(SlotRow::as_select())
            .load(&mut conn)
            .expect("query failed");
        assert_eq!(rows.len(), 1, "one row per slot name");
    }

    #[test]
    fn clear_removes_only_the_named_slot() {
        let (storage, _pool) = setup();
        storage.write_slot("motomorph_user", "{}").unwrap();
        storage.write_slot("motomorph_designs", "[]").unwrap();

        storage.clear_slot("motomorph_user").unwrap();
        storage.clear_slot("motomorph_user").unwrap();

        assert_eq!(storage.read_slot("motomorph_user").unwrap(), None);
        assert!(storage.read_slot("motomorph_designs").unwrap().is_some());
    }
}
