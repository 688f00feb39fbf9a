//! SQLite storage implementation for agent rankings.

mod model;
mod repository;

pub use model::AgentStatDB;
pub use repository::AgentStatRepository;
