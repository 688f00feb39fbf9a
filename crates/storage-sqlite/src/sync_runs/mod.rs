//! SQLite storage implementation for the sync run (watermark) log.

mod model;
mod repository;

pub use model::SyncRunDB;
pub use repository::SyncRunRepository;
