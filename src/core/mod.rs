pub mod converter;
pub mod engine;
pub mod script;
pub mod tables;
pub mod types;
