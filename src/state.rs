use std::sync::{Arc, Mutex, MutexGuard};

use crate::application::accounts::AccountService;
use crate::application::configurator::ConfigurationStore;
use crate::application::design_service::DesignService;
use crate::domain::errors::DomainError;
use crate::domain::ports::SlotStorage;
use crate::errors::AppError;
use crate::infrastructure::slot_repo::SlotRepository;

pub type AppRepository = SlotRepository<Arc<dyn SlotStorage>>;

/// Services shared by every worker. Each is constructed once at start-up.
pub struct AppState {
    designs: Mutex<DesignService<AppRepository>>,
    accounts: Mutex<AccountService<AppRepository>>,
    configurator: Mutex<ConfigurationStore>,
}

impl AppState {
    pub fn new(storage: Arc<dyn SlotStorage>) -> Result<Self, DomainError> {
        let designs = DesignService::new(SlotRepository::new(storage.clone()))?;
        let accounts = AccountService::new(SlotRepository::new(storage));
        Ok(Self {
            designs: Mutex::new(designs),
            accounts: Mutex::new(accounts),
            configurator: Mutex::new(ConfigurationStore::new()),
        })
    }

    pub fn designs(&self) -> Result<MutexGuard<'_, DesignService<AppRepository>>, AppError> {
        lock(&self.designs)
    }

    pub fn accounts(&self) -> Result<MutexGuard<'_, AccountService<AppRepository>>, AppError> {
        lock(&self.accounts)
    }

    pub fn configurator(&self) -> Result<MutexGuard<'_, ConfigurationStore>, AppError> {
        lock(&self.configurator)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, AppError> {
    mutex
        .lock()
        .map_err(|_| AppError::Internal("shared state lock poisoned".to_string()))
}
