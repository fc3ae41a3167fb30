//! Branch Repository
//!
//! 网点引用地点，读取时内嵌 `{id, name}` 地点快照。

use super::{BaseRepository, RepoError, RepoResult, required_field};
use crate::db::models::{
    Branch, BranchContent, BranchPayload, BranchResponse, Location, RefData,
};
use crate::db::registry;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "branch";
const REF_TABLE: &str = "location";

#[derive(Clone)]
pub struct BranchRepository {
    base: BaseRepository,
}

impl BranchRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<BranchResponse>> {
        let branches: Vec<Branch> = self
            .base
            .db()
            .query("SELECT * FROM branch")
            .await?
            .take(0)?;

        let mut shaped = Vec::with_capacity(branches.len());
        for branch in branches {
            shaped.push(self.shape(branch).await?);
        }
        Ok(shaped)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<BranchResponse>> {
        let Some(rid) = registry::parse_ref(TABLE, id) else {
            return Ok(None);
        };
        let branch: Option<Branch> = self.base.db().select(rid).await?;
        match branch {
            Some(b) => Ok(Some(self.shape(b).await?)),
            None => Ok(None),
        }
    }

    pub async fn create(&self, payload: BranchPayload) -> RepoResult<BranchResponse> {
        let branch_name = required_field(&payload.branch_name)
            .ok_or_else(|| RepoError::Validation("Branch name is required.".to_string()))?;

        let location_id = payload.location_name.unwrap_or_default();
        let location = registry::parse_ref(REF_TABLE, &location_id)
            .ok_or_else(|| RepoError::Validation("Invalid location ID format.".to_string()))?;
        if !registry::record_exists(self.base.db(), &location).await? {
            return Err(RepoError::Validation("Location not found.".to_string()));
        }

        let created: Option<Branch> = self
            .base
            .db()
            .create(TABLE)
            .content(BranchContent {
                branch_name,
                location_name: location,
            })
            .await?;
        let created =
            created.ok_or_else(|| RepoError::Database("Failed to create branch".to_string()))?;
        self.shape(created).await
    }

    pub async fn update(&self, id: &str, payload: BranchPayload) -> RepoResult<BranchResponse> {
        let rid = registry::parse_ref(TABLE, id)
            .ok_or_else(|| RepoError::NotFound("Branch not found.".to_string()))?;
        if !registry::record_exists(self.base.db(), &rid).await? {
            return Err(RepoError::NotFound("Branch not found.".to_string()));
        }

        let branch_name = required_field(&payload.branch_name)
            .ok_or_else(|| RepoError::Validation("Branch name is required.".to_string()))?;

        let location_id = payload.location_name.unwrap_or_default();
        let location = registry::parse_ref(REF_TABLE, &location_id).ok_or_else(|| {
            RepoError::Validation("Location not found or invalid location ID.".to_string())
        })?;
        if !registry::record_exists(self.base.db(), &location).await? {
            return Err(RepoError::Validation(
                "Location not found or invalid location ID.".to_string(),
            ));
        }

        let updated: Option<Branch> = self
            .base
            .db()
            .update(rid)
            .content(BranchContent {
                branch_name,
                location_name: location,
            })
            .await?;
        let updated = updated.ok_or_else(|| RepoError::NotFound("Branch not found.".to_string()))?;
        self.shape(updated).await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let rid = registry::parse_ref(TABLE, id)
            .ok_or_else(|| RepoError::NotFound("Branch not found.".to_string()))?;
        if !registry::record_exists(self.base.db(), &rid).await? {
            return Err(RepoError::NotFound("Branch not found.".to_string()));
        }

        let _deleted: Option<Branch> = self.base.db().delete(rid).await?;
        Ok(())
    }

    /// Attach the `{id, name}` location snapshot
    async fn shape(&self, branch: Branch) -> RepoResult<BranchResponse> {
        let location: Option<Location> = self
            .base
            .db()
            .select(branch.location_name.clone())
            .await?;
        let location_data = location.and_then(|l| {
            l.id.map(|id| RefData {
                id: id.to_string(),
                name: l.location_name,
            })
        });

        Ok(BranchResponse {
            id: branch.id.map(|t| t.to_string()).unwrap_or_default(),
            branch_name: branch.branch_name,
            location_name: branch.location_name.to_string(),
            location_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::models::LocationPayload;
    use crate::db::repository::LocationRepository;

    async fn setup() -> (BranchRepository, LocationRepository) {
        let service = DbService::in_memory().await.expect("db");
        (
            BranchRepository::new(service.db.clone()),
            LocationRepository::new(service.db),
        )
    }

    #[tokio::test]
    async fn test_branch_scenario() {
        let (branches, locations) = setup().await;

        // Create Location "HQ" -> L1
        let l1 = locations
            .create(LocationPayload {
                location_name: Some("HQ".to_string()),
            })
            .await
            .expect("location")
            .id
            .expect("id")
            .to_string();

        // Create Branch "Main" referencing L1 -> embeds {id: L1, name: "HQ"}
        let branch = branches
            .create(BranchPayload {
                branch_name: Some("Main".to_string()),
                location_name: Some(l1.clone()),
            })
            .await
            .expect("branch");
        let data = branch.location_data.expect("snapshot");
        assert_eq!(data.id, l1);
        assert_eq!(data.name, "HQ");

        // Create Branch with a malformed location id -> exact message
        let invalid = branches
            .create(BranchPayload {
                branch_name: Some("Annex".to_string()),
                location_name: Some("not-an-id".to_string()),
            })
            .await;
        assert!(
            matches!(invalid, Err(RepoError::Validation(msg)) if msg == "Invalid location ID format.")
        );
    }

    #[tokio::test]
    async fn test_unknown_location_rejected() {
        let (branches, _) = setup().await;

        let result = branches
            .create(BranchPayload {
                branch_name: Some("Main".to_string()),
                location_name: Some("location:missing".to_string()),
            })
            .await;
        assert!(matches!(result, Err(RepoError::Validation(msg)) if msg == "Location not found."));
        assert!(branches.find_all().await.expect("list").is_empty());
    }
}
