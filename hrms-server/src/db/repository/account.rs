//! Account Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Account, AccountContent, AccountCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "account";

#[derive(Clone)]
pub struct AccountRepository {
    base: BaseRepository,
}

impl AccountRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<Account>> {
        let username = username.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM account WHERE username = $username LIMIT 1")
            .bind(("username", username))
            .await?;
        let accounts: Vec<Account> = result.take(0)?;
        Ok(accounts.into_iter().next())
    }

    pub async fn create(&self, payload: AccountCreate) -> RepoResult<Account> {
        if payload.username.trim().is_empty() || payload.password.is_empty() {
            return Err(RepoError::Validation(
                "Username and password are required.".to_string(),
            ));
        }
        if self.find_by_username(&payload.username).await?.is_some() {
            return Err(RepoError::Duplicate(
                "Account with this username already exists.".to_string(),
            ));
        }

        let hash_pass = Account::hash_password(&payload.password)
            .map_err(|e| RepoError::Database(format!("Password hashing failed: {e}")))?;

        let created: Option<Account> = self
            .base
            .db()
            .create(TABLE)
            .content(AccountContent {
                username: payload.username,
                hash_pass,
                first_name: payload.first_name,
                last_name: payload.last_name,
                is_superuser: payload.is_superuser,
                is_active: true,
            })
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create account".to_string()))
    }

    /// Seed the admin account on first boot; a no-op when it already exists.
    pub async fn seed_admin(&self, username: &str, password: &str) -> RepoResult<()> {
        if self.find_by_username(username).await?.is_some() {
            return Ok(());
        }

        self.create(AccountCreate {
            username: username.to_string(),
            password: password.to_string(),
            first_name: "Admin".to_string(),
            last_name: String::new(),
            is_superuser: true,
        })
        .await?;
        tracing::info!("Seeded admin account '{}'", username);
        Ok(())
    }
}
