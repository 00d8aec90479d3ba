pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod preview;
pub mod queries;
pub mod services;

pub use error::ApplicationResult;
