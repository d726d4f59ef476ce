use crate::domain::design::CarDesign;
use crate::domain::errors::DomainError;
use crate::domain::ports::{DesignRepository, Session, SessionRepository, SlotStorage};

use super::models::{DesignRecord, SessionRecord};

pub const DESIGNS_SLOT: &str = "motomorph_designs";
pub const SESSION_SLOT: &str = "motomorph_user";

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::CorruptStorage(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

/// Keeps designs and the session as JSON documents in named slots.
///
/// A slot that cannot be parsed fails the load; it is never read as empty.
pub struct SlotRepository<S> {
    storage: S,
}

impl<S: SlotStorage> SlotRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: SlotStorage> DesignRepository for SlotRepository<S> {
    fn load(&self) -> Result<Vec<CarDesign>, DomainError> {
        let Some(raw) = self.storage.read_slot(DESIGNS_SLOT)? else {
            return Ok(Vec::new());
        };
        let records: Vec<DesignRecord> = serde_json::from_str(&raw)?;
        records.into_iter().map(CarDesign::try_from).collect()
    }

    fn save(&self, designs: &[CarDesign]) -> Result<(), DomainError> {
        let records: Vec<DesignRecord> = designs.iter().map(DesignRecord::from).collect();
        let raw = serde_json::to_string(&records).map_err(|e| DomainError::Internal(e.to_string()))?;
        self.storage.write_slot(DESIGNS_SLOT, &raw)
    }
}

impl<S: SlotStorage> SessionRepository for SlotRepository<S> {
    fn load_session(&self) -> Result<Option<Session>, DomainError> {
        let Some(raw) = self.storage.read_slot(SESSION_SLOT)? else {
            return Ok(None);
        };
        let record: SessionRecord = serde_json::from_str(&raw)?;
        Ok(Some(record.into()))
    }

    fn save_session(&self, session: &Session) -> Result<(), DomainError> {
        let raw = serde_json::to_string(&SessionRecord::from(session))
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        self.storage.write_slot(SESSION_SLOT, &raw)
    }

    fn clear_session(&self) -> Result<(), DomainError> {
        self.storage.clear_slot(SESSION_SLOT)
    }
}
