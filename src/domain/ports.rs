use std::sync::Arc;

use super::design::{CarDesign, CustomerIdentity};
use super::errors::DomainError;

/// Durable key/value storage of named text slots.
pub trait SlotStorage: Send + Sync + 'static {
    fn read_slot(&self, name: &str) -> Result<Option<String>, DomainError>;
    fn write_slot(&self, name: &str, value: &str) -> Result<(), DomainError>;
    fn clear_slot(&self, name: &str) -> Result<(), DomainError>;
}

impl<S: SlotStorage + ?Sized> SlotStorage for Arc<S> {
    fn read_slot(&self, name: &str) -> Result<Option<String>, DomainError> {
        (**self).read_slot(name)
    }

    fn write_slot(&self, name: &str, value: &str) -> Result<(), DomainError> {
        (**self).write_slot(name, value)
    }

    fn clear_slot(&self, name: &str) -> Result<(), DomainError> {
        (**self).clear_slot(name)
    }
}

/// The persisted list of submitted designs, always loaded and saved whole.
pub trait DesignRepository: Send + Sync + 'static {
    fn load(&self) -> Result<Vec<CarDesign>, DomainError>;
    fn save(&self, designs: &[CarDesign]) -> Result<(), DomainError>;
}

/// The currently signed-in identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: CustomerIdentity,
    pub is_admin: bool,
}

pub trait SessionRepository: Send + Sync + 'static {
    fn load_session(&self) -> Result<Option<Session>, DomainError>;
    fn save_session(&self, session: &Session) -> Result<(), DomainError>;
    fn clear_session(&self) -> Result<(), DomainError>;
}
