//! Employee Repository
//!
//! 校验顺序固定：必填字段 → 唯一性（邮箱、工号）→ 引用解析，
//! 第一个失败即短路返回，保证错误消息可预期。

use super::{BaseRepository, RepoError, RepoResult, required_field};
use crate::db::models::{Employee, EmployeeContent, EmployeePayload};
use crate::db::registry;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use validator::ValidateEmail;

const TABLE: &str = "employee";

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee")
            .await?
            .take(0)?;
        Ok(employees)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let Some(rid) = registry::parse_ref(TABLE, id) else {
            return Ok(None);
        };
        let employee: Option<Employee> = self.base.db().select(rid).await?;
        Ok(employee)
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        let email = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE email = $email LIMIT 1")
            .bind(("email", email))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    pub async fn find_by_emp_id(&self, emp_id: &str) -> RepoResult<Option<Employee>> {
        let emp_id = emp_id.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE emp_id = $emp_id LIMIT 1")
            .bind(("emp_id", emp_id))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    pub async fn create(&self, payload: EmployeePayload) -> RepoResult<Employee> {
        let name = required_field(&payload.name);
        let email = required_field(&payload.email);
        let (Some(name), Some(email)) = (name, email) else {
            return Err(RepoError::Validation(
                "Name and email are required.".to_string(),
            ));
        };
        let emp_id = required_field(&payload.emp_id)
            .ok_or_else(|| RepoError::Validation("Emp ID is required.".to_string()))?;

        if !email.validate_email() {
            return Err(RepoError::Validation(
                "Enter a valid email address.".to_string(),
            ));
        }

        // Uniqueness before reference checks
        if self.find_by_email(&email).await?.is_some() {
            return Err(RepoError::Duplicate(
                "Employee with this email already exists.".to_string(),
            ));
        }
        if self.find_by_emp_id(&emp_id).await?.is_some() {
            return Err(RepoError::Duplicate(
                "Employee with this Emp ID already exists.".to_string(),
            ));
        }

        // All four reference ids must be well-formed
        let refs = (
            registry::parse_ref("designation", payload.designation.as_deref().unwrap_or("")),
            registry::parse_ref("department", payload.department.as_deref().unwrap_or("")),
            registry::parse_ref("location", payload.location.as_deref().unwrap_or("")),
            registry::parse_ref("branch", payload.branch.as_deref().unwrap_or("")),
        );
        let (Some(designation), Some(department), Some(location), Some(branch)) = refs else {
            return Err(RepoError::Validation(
                "One or more IDs are invalid.".to_string(),
            ));
        };

        self.check_ref(&designation, "Invalid designation ID.").await?;
        self.check_ref(&department, "Invalid department ID.").await?;
        self.check_ref(&location, "Invalid location ID.").await?;
        self.check_ref(&branch, "Invalid branch ID.").await?;

        let created: Option<Employee> = self
            .base
            .db()
            .create(TABLE)
            .content(EmployeeContent {
                name,
                emp_id,
                email,
                designation,
                department,
                location,
                branch,
                emp_status: payload.emp_status.unwrap_or(true),
            })
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    pub async fn update(&self, id: &str, payload: EmployeePayload) -> RepoResult<Employee> {
        let rid = registry::parse_ref(TABLE, id)
            .ok_or_else(|| RepoError::NotFound("Employee not found.".to_string()))?;
        let existing: Option<Employee> = self.base.db().select(rid.clone()).await?;
        let existing =
            existing.ok_or_else(|| RepoError::NotFound("Employee not found.".to_string()))?;

        let (Some(name), Some(emp_id), Some(email)) = (
            required_field(&payload.name),
            required_field(&payload.emp_id),
            required_field(&payload.email),
        ) else {
            return Err(RepoError::Validation(
                "Name, Emp ID and email are required.".to_string(),
            ));
        };

        if !email.validate_email() {
            return Err(RepoError::Validation(
                "Enter a valid email address.".to_string(),
            ));
        }

        // Uniqueness excluding the document being updated
        if let Some(other) = self.find_by_email(&email).await? {
            if other.id != Some(rid.clone()) {
                return Err(RepoError::Duplicate(
                    "Another employee with this email already exists.".to_string(),
                ));
            }
        }
        if let Some(other) = self.find_by_emp_id(&emp_id).await? {
            if other.id != Some(rid.clone()) {
                return Err(RepoError::Duplicate(
                    "Another employee with this Emp ID already exists.".to_string(),
                ));
            }
        }

        let department = self
            .resolve_ref("department", payload.department.as_deref(), "Invalid department ID.")
            .await?;
        let designation = self
            .resolve_ref("designation", payload.designation.as_deref(), "Invalid designation ID.")
            .await?;
        let location = self
            .resolve_ref("location", payload.location.as_deref(), "Invalid location ID.")
            .await?;
        let branch = self
            .resolve_ref("branch", payload.branch.as_deref(), "Invalid branch ID.")
            .await?;

        let updated: Option<Employee> = self
            .base
            .db()
            .update(rid)
            .content(EmployeeContent {
                name,
                emp_id,
                email,
                designation,
                department,
                location,
                branch,
                emp_status: payload.emp_status.unwrap_or(existing.emp_status),
            })
            .await?;
        updated.ok_or_else(|| RepoError::NotFound("Employee not found.".to_string()))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let rid = registry::parse_ref(TABLE, id)
            .ok_or_else(|| RepoError::NotFound("Employee not found.".to_string()))?;
        if !registry::record_exists(self.base.db(), &rid).await? {
            return Err(RepoError::NotFound("Employee not found.".to_string()));
        }

        let _deleted: Option<Employee> = self.base.db().delete(rid).await?;
        Ok(())
    }

    async fn check_ref(&self, rid: &RecordId, message: &str) -> RepoResult<()> {
        if !registry::record_exists(self.base.db(), rid).await? {
            return Err(RepoError::Validation(message.to_string()));
        }
        Ok(())
    }

    /// Parse + existence check in one step (update path reports a single message)
    async fn resolve_ref(
        &self,
        table: &str,
        id: Option<&str>,
        message: &str,
    ) -> RepoResult<RecordId> {
        let rid = registry::parse_ref(table, id.unwrap_or(""))
            .ok_or_else(|| RepoError::Validation(message.to_string()))?;
        self.check_ref(&rid, message).await?;
        Ok(rid)
    }
}
