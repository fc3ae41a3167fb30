//! Database Module
//!
//! Handles the embedded SurrealDB instance and schema bootstrap

pub mod models;
pub mod registry;
pub mod repository;

use crate::utils::AppError;
use std::path::Path;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "hrms";
const DATABASE: &str = "hrms";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the on-disk database (RocksDB engine) and apply schema bootstrap
    pub async fn new(db_path: &Path) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;

        Self::bootstrap(&db).await?;
        tracing::info!("Database connection established ({})", db_path.display());

        Ok(Self { db })
    }

    /// Open an in-memory database (used by tests)
    pub async fn in_memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;

        Self::bootstrap(&db).await?;

        Ok(Self { db })
    }

    /// 选择命名空间并定义唯一索引
    ///
    /// 应用层的唯一性检查存在检查-写入竞态窗口，
    /// 存储层唯一索引作为兜底约束。
    async fn bootstrap(db: &Surreal<Db>) -> Result<(), AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {}", e)))?;

        db.query(
            r#"
            DEFINE INDEX IF NOT EXISTS employee_email_unique ON TABLE employee COLUMNS email UNIQUE;
            DEFINE INDEX IF NOT EXISTS employee_emp_id_unique ON TABLE employee COLUMNS emp_id UNIQUE;
            DEFINE INDEX IF NOT EXISTS account_username_unique ON TABLE account COLUMNS username UNIQUE;
            "#,
        )
        .await
        .map_err(|e| AppError::database(format!("Failed to define indexes: {}", e)))?;

        Ok(())
    }
}
