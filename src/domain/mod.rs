pub mod catalog;
pub mod configuration;
pub mod design;
pub mod errors;
pub mod ports;
pub mod pricing;
