//! Orders

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::{InvalidOrderError, OrdersServiceError};
pub use service::*;
