//! Sync runs: the watermark log shared by every sync step.

mod sync_run_model;
mod sync_run_traits;

pub use sync_run_model::*;
pub use sync_run_traits::SyncRunRepositoryTrait;

#[cfg(test)]
mod tests;
