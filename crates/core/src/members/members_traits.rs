//! Member repository trait.

use std::collections::HashMap;

use async_trait::async_trait;

use super::members_model::{Member, NewMember};
use crate::errors::Result;
use crate::sync::UpsertOutcome;

/// Persistence contract for members, keyed by `member_key_numeric`.
#[async_trait]
pub trait MemberRepositoryTrait: Send + Sync {
    /// Creates the member or overwrites every mapped field of the existing row
    /// with the same key. Runs in its own transaction.
    async fn upsert(&self, new_member: NewMember) -> Result<UpsertOutcome>;

    fn get_by_key(&self, member_key_numeric: i64) -> Result<Option<Member>>;

    /// Local ids of the given member keys. Unknown keys are absent from the map.
    fn find_ids_by_keys(&self, member_keys: &[i64]) -> Result<HashMap<i64, String>>;

    fn count(&self) -> Result<i64>;
}
