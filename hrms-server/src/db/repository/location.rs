//! Location Repository

use super::{BaseRepository, RepoError, RepoResult, required_field};
use crate::db::models::{Location, LocationContent, LocationPayload};
use crate::db::registry;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "location";

#[derive(Clone)]
pub struct LocationRepository {
    base: BaseRepository,
}

impl LocationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Location>> {
        let locations: Vec<Location> = self
            .base
            .db()
            .query("SELECT * FROM location")
            .await?
            .take(0)?;
        Ok(locations)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Location>> {
        let Some(rid) = registry::parse_ref(TABLE, id) else {
            return Ok(None);
        };
        let location: Option<Location> = self.base.db().select(rid).await?;
        Ok(location)
    }

    fn validate(payload: LocationPayload) -> RepoResult<LocationContent> {
        let location_name = required_field(&payload.location_name)
            .ok_or_else(|| RepoError::Validation("Location name is required.".to_string()))?;
        Ok(LocationContent { location_name })
    }

    pub async fn create(&self, payload: LocationPayload) -> RepoResult<Location> {
        let content = Self::validate(payload)?;
        let created: Option<Location> = self.base.db().create(TABLE).content(content).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create location".to_string()))
    }

    pub async fn update(&self, id: &str, payload: LocationPayload) -> RepoResult<Location> {
        let rid = registry::parse_ref(TABLE, id)
            .ok_or_else(|| RepoError::NotFound("Location not found.".to_string()))?;
        if !registry::record_exists(self.base.db(), &rid).await? {
            return Err(RepoError::NotFound("Location not found.".to_string()));
        }

        let content = Self::validate(payload)?;
        let updated: Option<Location> = self.base.db().update(rid).content(content).await?;
        updated.ok_or_else(|| RepoError::NotFound("Location not found.".to_string()))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let rid = registry::parse_ref(TABLE, id)
            .ok_or_else(|| RepoError::NotFound("Location not found.".to_string()))?;
        if !registry::record_exists(self.base.db(), &rid).await? {
            return Err(RepoError::NotFound("Location not found.".to_string()));
        }

        let _deleted: Option<Location> = self.base.db().delete(rid).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    #[tokio::test]
    async fn test_create_and_get() {
        let service = DbService::in_memory().await.expect("db");
        let repo = LocationRepository::new(service.db);

        let created = repo
            .create(LocationPayload {
                location_name: Some("HQ".to_string()),
            })
            .await
            .expect("create");
        let id = created.id.clone().expect("id").to_string();

        let fetched = repo.find_by_id(&id).await.expect("get").expect("present");
        assert_eq!(fetched.location_name, "HQ");
    }

    #[tokio::test]
    async fn test_get_malformed_id_is_absent() {
        let service = DbService::in_memory().await.expect("db");
        let repo = LocationRepository::new(service.db);

        assert!(repo.find_by_id("not-an-id").await.expect("get").is_none());
    }
}
