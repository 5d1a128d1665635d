use contracts::domain::log_record::LogRecord;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, QuerySelect, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "log_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub ip_address: String,
    pub date: String,
    pub hour: String,
    pub software_name: String,
    pub version: String,
    pub log_id: String,
    pub title: String,
    pub description: String,
    pub origin_file: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for LogRecord {
    fn from(m: Model) -> Self {
        LogRecord {
            id: m.id.to_string(),
            ip_address: m.ip_address,
            date: m.date,
            hour: m.hour,
            software_name: m.software_name,
            version: m.version,
            log_id: m.log_id,
            title: m.title,
            description: m.description,
            origin_file: m.origin_file,
        }
    }
}

/// A record parsed from a log file, not yet assigned a database id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLogRecord {
    pub ip_address: String,
    pub date: String,
    pub hour: String,
    pub software_name: String,
    pub version: String,
    pub log_id: String,
    pub title: String,
    pub description: String,
    pub origin_file: String,
}

impl From<NewLogRecord> for ActiveModel {
    fn from(r: NewLogRecord) -> Self {
        ActiveModel {
            id: NotSet,
            ip_address: Set(r.ip_address),
            date: Set(r.date),
            hour: Set(r.hour),
            software_name: Set(r.software_name),
            version: Set(r.version),
            log_id: Set(r.log_id),
            title: Set(r.title),
            description: Set(r.description),
            origin_file: Set(r.origin_file),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<LogRecord>> {
    let items = Entity::find()
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i32) -> anyhow::Result<Option<LogRecord>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn max_id() -> anyhow::Result<Option<i32>> {
    let newest = Entity::find()
        .order_by_desc(Column::Id)
        .one(conn())
        .await?;
    Ok(newest.map(|m| m.id))
}

/// Records with an id greater than `id_exclusive`, oldest first.
pub async fn list_after(id_exclusive: i32, limit: u64) -> anyhow::Result<Vec<LogRecord>> {
    let items = Entity::find()
        .filter(Column::Id.gt(id_exclusive))
        .order_by_asc(Column::Id)
        .limit(limit)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn insert_batch(records: Vec<NewLogRecord>) -> anyhow::Result<()> {
    if records.is_empty() {
        return Ok(());
    }
    let models = records.into_iter().map(ActiveModel::from);
    Entity::insert_many(models).exec(conn()).await?;
    Ok(())
}

pub async fn delete_by_id(id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}

pub async fn delete_all() -> anyhow::Result<u64> {
    let result = Entity::delete_many().exec(conn()).await?;
    Ok(result.rows_affected)
}
