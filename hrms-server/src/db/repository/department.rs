//! Department Repository

use super::{BaseRepository, RepoError, RepoResult, required_field};
use crate::db::models::{Department, DepartmentContent, DepartmentPayload};
use crate::db::registry;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "department";

#[derive(Clone)]
pub struct DepartmentRepository {
    base: BaseRepository,
}

impl DepartmentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Department>> {
        let departments: Vec<Department> = self
            .base
            .db()
            .query("SELECT * FROM department")
            .await?
            .take(0)?;
        Ok(departments)
    }

    /// Find by id; malformed ids behave as absent
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Department>> {
        let Some(rid) = registry::parse_ref(TABLE, id) else {
            return Ok(None);
        };
        let department: Option<Department> = self.base.db().select(rid).await?;
        Ok(department)
    }

    fn validate(payload: DepartmentPayload) -> RepoResult<DepartmentContent> {
        let name = required_field(&payload.name)
            .ok_or_else(|| RepoError::Validation("Name is required.".to_string()))?;

        Ok(DepartmentContent {
            name,
            description: payload.description.unwrap_or_default(),
            manager: payload.manager.unwrap_or_default(),
            location: payload.location.unwrap_or_default(),
        })
    }

    pub async fn create(&self, payload: DepartmentPayload) -> RepoResult<Department> {
        let content = Self::validate(payload)?;
        let created: Option<Department> = self.base.db().create(TABLE).content(content).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create department".to_string()))
    }

    /// Full-replace update — every mutable field is resupplied
    pub async fn update(&self, id: &str, payload: DepartmentPayload) -> RepoResult<Department> {
        let rid = registry::parse_ref(TABLE, id)
            .ok_or_else(|| RepoError::NotFound("Department not found.".to_string()))?;
        if !registry::record_exists(self.base.db(), &rid).await? {
            return Err(RepoError::NotFound("Department not found.".to_string()));
        }

        let content = Self::validate(payload)?;
        let updated: Option<Department> = self.base.db().update(rid).content(content).await?;
        updated.ok_or_else(|| RepoError::NotFound("Department not found.".to_string()))
    }

    /// Hard delete; inbound references are not checked
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let rid = registry::parse_ref(TABLE, id)
            .ok_or_else(|| RepoError::NotFound("Department not found.".to_string()))?;
        if !registry::record_exists(self.base.db(), &rid).await? {
            return Err(RepoError::NotFound("Department not found.".to_string()));
        }

        let _deleted: Option<Department> = self.base.db().delete(rid).await?;
        Ok(())
    }
}
