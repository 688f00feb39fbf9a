use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use log::debug;
use uuid::Uuid;

use salesboard_core::members::{Member, MemberRepositoryTrait, NewMember};
use salesboard_core::sync::UpsertOutcome;
use salesboard_core::Result;

use super::model::MemberDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::members;
use crate::utils::chunk_for_sqlite;

pub struct MemberRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl MemberRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        MemberRepository { pool, writer }
    }
}

#[async_trait]
impl MemberRepositoryTrait for MemberRepository {
    async fn upsert(&self, new_member: NewMember) -> Result<UpsertOutcome> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<UpsertOutcome> {
                let key = new_member.member_key_numeric;
                let existing = members::table
                    .filter(members::member_key_numeric.eq(key))
                    .select((members::id, members::created_at))
                    .first::<(String, String)>(conn)
                    .optional()
                    .map_err(StorageError::from)?;

                match existing {
                    Some((existing_id, created_at)) => {
                        let mut row = MemberDB::from_new(existing_id.clone(), new_member, Utc::now());
                        row.created_at = created_at;
                        diesel::update(members::table.find(&existing_id))
                            .set(&row)
                            .execute(conn)
                            .map_err(StorageError::from)?;
                        debug!("Updated member {}", key);
                        Ok(UpsertOutcome::updated(existing_id))
                    }
                    None => {
                        let new_id = Uuid::new_v4().to_string();
                        let row = MemberDB::from_new(new_id.clone(), new_member, Utc::now());
                        diesel::insert_into(members::table)
                            .values(&row)
                            .execute(conn)
                            .map_err(StorageError::from)?;
                        debug!("Created member {}", key);
                        Ok(UpsertOutcome::created(new_id))
                    }
                }
            })
            .await
    }

    fn get_by_key(&self, member_key_numeric: i64) -> Result<Option<Member>> {
        let mut conn = get_connection(&self.pool)?;
        let row = members::table
            .filter(members::member_key_numeric.eq(member_key_numeric))
            .select(MemberDB::as_select())
            .first::<MemberDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Member::from))
    }

    fn find_ids_by_keys(&self, member_keys: &[i64]) -> Result<HashMap<i64, String>> {
        let mut conn = get_connection(&self.pool)?;
        let mut ids = HashMap::with_capacity(member_keys.len());
        for chunk in chunk_for_sqlite(member_keys) {
            let rows = members::table
                .filter(members::member_key_numeric.eq_any(chunk))
                .select((members::member_key_numeric, members::id))
                .load::<(i64, String)>(&mut conn)
                .map_err(StorageError::from)?;
            ids.extend(rows);
        }
        Ok(ids)
    }

    fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        members::table.count().get_result::<i64>(&mut conn).into_core()
    }
}
