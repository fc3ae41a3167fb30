//! Designation Repository
//!
//! 职位引用部门，读取时内嵌 `{id, name}` 部门快照。

use super::{BaseRepository, RepoError, RepoResult, required_field};
use crate::db::models::{
    Department, Designation, DesignationContent, DesignationPayload, DesignationResponse, RefData,
};
use crate::db::registry;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "designation";
const REF_TABLE: &str = "department";

#[derive(Clone)]
pub struct DesignationRepository {
    base: BaseRepository,
}

impl DesignationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<DesignationResponse>> {
        let designations: Vec<Designation> = self
            .base
            .db()
            .query("SELECT * FROM designation")
            .await?
            .take(0)?;

        let mut shaped = Vec::with_capacity(designations.len());
        for designation in designations {
            shaped.push(self.shape(designation).await?);
        }
        Ok(shaped)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<DesignationResponse>> {
        let Some(rid) = registry::parse_ref(TABLE, id) else {
            return Ok(None);
        };
        let designation: Option<Designation> = self.base.db().select(rid).await?;
        match designation {
            Some(d) => Ok(Some(self.shape(d).await?)),
            None => Ok(None),
        }
    }

    pub async fn create(&self, payload: DesignationPayload) -> RepoResult<DesignationResponse> {
        let designation_name = required_field(&payload.designation_name)
            .ok_or_else(|| RepoError::Validation("Designation name is required.".to_string()))?;

        // Reference must resolve before the write
        let department_id = payload.department_name.unwrap_or_default();
        let department = registry::parse_ref(REF_TABLE, &department_id)
            .ok_or_else(|| RepoError::Validation("Department not found.".to_string()))?;
        if !registry::record_exists(self.base.db(), &department).await? {
            return Err(RepoError::Validation("Department not found.".to_string()));
        }

        let created: Option<Designation> = self
            .base
            .db()
            .create(TABLE)
            .content(DesignationContent {
                designation_name,
                department_name: department,
            })
            .await?;
        let created =
            created.ok_or_else(|| RepoError::Database("Failed to create designation".to_string()))?;
        self.shape(created).await
    }

    pub async fn update(
        &self,
        id: &str,
        payload: DesignationPayload,
    ) -> RepoResult<DesignationResponse> {
        let rid = registry::parse_ref(TABLE, id)
            .ok_or_else(|| RepoError::NotFound("Designation not found.".to_string()))?;
        if !registry::record_exists(self.base.db(), &rid).await? {
            return Err(RepoError::NotFound("Designation not found.".to_string()));
        }

        let designation_name = required_field(&payload.designation_name)
            .ok_or_else(|| RepoError::Validation("Designation name is required.".to_string()))?;

        let department_id = payload.department_name.unwrap_or_default();
        let department = registry::parse_ref(REF_TABLE, &department_id).ok_or_else(|| {
            RepoError::Validation("Department not found or invalid department ID.".to_string())
        })?;
        if !registry::record_exists(self.base.db(), &department).await? {
            return Err(RepoError::Validation(
                "Department not found or invalid department ID.".to_string(),
            ));
        }

        let updated: Option<Designation> = self
            .base
            .db()
            .update(rid)
            .content(DesignationContent {
                designation_name,
                department_name: department,
            })
            .await?;
        let updated =
            updated.ok_or_else(|| RepoError::NotFound("Designation not found.".to_string()))?;
        self.shape(updated).await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let rid = registry::parse_ref(TABLE, id)
            .ok_or_else(|| RepoError::NotFound("Designation not found.".to_string()))?;
        if !registry::record_exists(self.base.db(), &rid).await? {
            return Err(RepoError::NotFound("Designation not found.".to_string()));
        }

        let _deleted: Option<Designation> = self.base.db().delete(rid).await?;
        Ok(())
    }

    /// Attach the `{id, name}` department snapshot
    ///
    /// A dangling reference (department deleted afterwards) shapes as `None`.
    async fn shape(&self, designation: Designation) -> RepoResult<DesignationResponse> {
        let department: Option<Department> = self
            .base
            .db()
            .select(designation.department_name.clone())
            .await?;
        let department_data = department.and_then(|d| {
            d.id.map(|id| RefData {
                id: id.to_string(),
                name: d.name,
            })
        });

        Ok(DesignationResponse {
            id: designation
                .id
                .map(|t| t.to_string())
                .unwrap_or_default(),
            designation_name: designation.designation_name,
            department_name: designation.department_name.to_string(),
            department_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::models::DepartmentPayload;
    use crate::db::repository::DepartmentRepository;

    async fn setup() -> (DesignationRepository, DepartmentRepository) {
        let service = DbService::in_memory().await.expect("db");
        (
            DesignationRepository::new(service.db.clone()),
            DepartmentRepository::new(service.db),
        )
    }

    async fn make_department(departments: &DepartmentRepository, name: &str) -> String {
        departments
            .create(DepartmentPayload {
                name: Some(name.to_string()),
                description: None,
                manager: None,
                location: None,
            })
            .await
            .expect("department")
            .id
            .expect("id")
            .to_string()
    }

    #[tokio::test]
    async fn test_embeds_department_snapshot_exactly() {
        let (designations, departments) = setup().await;
        let dept_id = make_department(&departments, "Engineering").await;

        let created = designations
            .create(DesignationPayload {
                designation_name: Some("Senior Engineer".to_string()),
                department_name: Some(dept_id.clone()),
            })
            .await
            .expect("create");

        let fetched = designations
            .find_by_id(&created.id)
            .await
            .expect("get")
            .expect("present");
        let data = fetched.department_data.expect("snapshot");
        assert_eq!(data.id, dept_id);
        assert_eq!(data.name, "Engineering");
        assert_eq!(fetched.department_name, dept_id);
    }

    #[tokio::test]
    async fn test_create_with_unknown_department_rejected() {
        let (designations, _) = setup().await;

        let result = designations
            .create(DesignationPayload {
                designation_name: Some("Senior Engineer".to_string()),
                department_name: Some("department:missing".to_string()),
            })
            .await;
        assert!(
            matches!(result, Err(RepoError::Validation(msg)) if msg == "Department not found.")
        );

        let malformed = designations
            .create(DesignationPayload {
                designation_name: Some("Senior Engineer".to_string()),
                department_name: Some("garbage".to_string()),
            })
            .await;
        assert!(matches!(malformed, Err(RepoError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_nonexistent_is_not_found() {
        let (designations, departments) = setup().await;
        let dept_id = make_department(&departments, "Engineering").await;

        let result = designations
            .update(
                "designation:missing",
                DesignationPayload {
                    designation_name: Some("Lead".to_string()),
                    department_name: Some(dept_id),
                },
            )
            .await;
        assert!(matches!(result, Err(RepoError::NotFound(_))));
        assert!(designations.find_all().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn test_dangling_reference_shapes_as_none() {
        let (designations, departments) = setup().await;
        let dept_id = make_department(&departments, "Engineering").await;

        let created = designations
            .create(DesignationPayload {
                designation_name: Some("Senior Engineer".to_string()),
                department_name: Some(dept_id.clone()),
            })
            .await
            .expect("create");

        // Deleting the department does not cascade or block
        departments.delete(&dept_id).await.expect("delete");

        let fetched = designations
            .find_by_id(&created.id)
            .await
            .expect("get")
            .expect("present");
        assert!(fetched.department_data.is_none());
    }
}
