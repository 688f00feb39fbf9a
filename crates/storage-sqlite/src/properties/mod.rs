//! SQLite storage implementation for listings.

mod model;
mod repository;

pub use model::{ClosedSaleDB, PropertyDB};
pub use repository::PropertyRepository;
