//! Members module - agents synced from the MLS `Member` resource.

mod members_fields;
mod members_model;
mod members_traits;

pub use members_fields::MEMBER_FIELDS;
pub use members_model::{Member, NewMember};
pub use members_traits::MemberRepositoryTrait;
