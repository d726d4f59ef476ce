use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::errors::DomainError;
use crate::domain::ports::SlotStorage;

/// Slot storage that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemorySlotStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, DomainError> {
        self.slots
            .lock()
            .map_err(|e| DomainError::Internal(e.to_string()))
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read_slot(&self, name: &str) -> Result<Option<String>, DomainError> {
        Ok(self.slots()?.get(name).cloned())
    }

    fn write_slot(&self, name: &str, value: &str) -> Result<(), DomainError> {
        self.slots()?.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn clear_slot(&self, name: &str) -> Result<(), DomainError> {
        self.slots()?.remove(name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_returns_latest_value() {
        let storage = MemorySlotStorage::new();
        storage.write_slot("a", "1").unwrap();
        storage.write_slot("a", "2").unwrap();
        assert_eq!(storage.read_slot("a").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn clearing_a_missing_slot_is_fine() {
        let storage = MemorySlotStorage::new();
        storage.clear_slot("missing").unwrap();
        assert_eq!(storage.read_slot("missing").unwrap(), None);
    }
}
