//! Reference Registry
//!
//! 只读的存在性检查：所有携带跨实体引用的写入在落库前先经过这里。
//! 非法 ID（解析失败或表名不匹配）一律按"不存在"处理，
//! 让调用方得到统一的 400 级失败而不是内部错误。

use serde::Deserialize;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::models::serde_helpers;
use super::repository::RepoResult;

#[derive(Debug, Deserialize)]
struct IdOnly {
    #[serde(with = "serde_helpers::record_id")]
    #[allow(dead_code)]
    id: RecordId,
}

/// Parse a raw id against the expected entity table
///
/// Returns `None` for malformed ids and ids pointing at a different table.
pub fn parse_ref(table: &str, id: &str) -> Option<RecordId> {
    let rid: RecordId = id.parse().ok()?;
    (rid.table() == table).then_some(rid)
}

/// Check whether a parsed record id resolves to an existing document
pub async fn record_exists(db: &Surreal<Db>, rid: &RecordId) -> RepoResult<bool> {
    let found: Option<IdOnly> = db.select(rid.clone()).await?;
    Ok(found.is_some())
}

/// `exists(entityType, id) -> bool`
///
/// Malformed ids report `false` rather than raising.
pub async fn exists(db: &Surreal<Db>, table: &str, id: &str) -> RepoResult<bool> {
    match parse_ref(table, id) {
        Some(rid) => record_exists(db, &rid).await,
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    #[tokio::test]
    async fn test_malformed_id_reports_absent() {
        let service = DbService::in_memory().await.expect("db");

        assert!(!exists(&service.db, "department", "not-an-id").await.expect("exists"));
        assert!(!exists(&service.db, "department", "").await.expect("exists"));
    }

    #[tokio::test]
    async fn test_wrong_table_reports_absent() {
        let service = DbService::in_memory().await.expect("db");
        assert!(parse_ref("department", "location:abc").is_none());
        assert!(
            !exists(&service.db, "department", "location:abc")
                .await
                .expect("exists")
        );
    }

    #[tokio::test]
    async fn test_existing_record_found() {
        let service = DbService::in_memory().await.expect("db");
        let created: Option<crate::db::models::Department> = service
            .db
            .create("department")
            .content(crate::db::models::DepartmentContent {
                name: "Engineering".to_string(),
                description: String::new(),
                manager: String::new(),
                location: String::new(),
            })
            .await
            .expect("create");
        let id = created.and_then(|d| d.id).expect("id").to_string();

        assert!(exists(&service.db, "department", &id).await.expect("exists"));
    }
}
