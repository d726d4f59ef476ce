pub mod memory;
pub mod models;
pub mod slot_repo;
pub mod sqlite_slots;
