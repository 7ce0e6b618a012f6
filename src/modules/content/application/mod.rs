pub mod content_store;
pub mod ports;
pub mod services;
pub mod use_cases;
