pub mod accounts;
pub mod configurator;
pub mod design_service;
