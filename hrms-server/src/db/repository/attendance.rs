//! Attendance Repository
//!
//! 考勤台账：签到无条件新建文档；签退按文档 id 精确定位。
//! 查询返回空集合而非错误，由 API 层决定如何呈现。

use super::{BaseRepository, RepoError, RepoResult, required_field};
use crate::db::models::{
    AttendanceContent, AttendanceDay, AttendanceRecords, AttendanceStatus, CheckInPayload,
};
use crate::db::registry;
use chrono::NaiveDate;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "attendance";

#[derive(Clone)]
pub struct AttendanceRepository {
    base: BaseRepository,
}

impl AttendanceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub(crate) fn parse_date(date: &str) -> RepoResult<NaiveDate> {
        NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
            RepoError::Validation("Invalid date format. Please use YYYY-MM-DD".to_string())
        })
    }

    /// All documents for an employee code on a date, check-in ascending.
    ///
    /// An empty result is not an error here.
    pub async fn find_by_employee_and_date(
        &self,
        emp_id: &str,
        date: NaiveDate,
    ) -> RepoResult<Vec<AttendanceDay>> {
        let emp_id = emp_id.to_string();
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM attendance WHERE emp_id = $emp_id AND date = $date \
                 ORDER BY records.check_in ASC",
            )
            .bind(("emp_id", emp_id))
            .bind(("date", date))
            .await?;
        let days: Vec<AttendanceDay> = result.take(0)?;
        Ok(days)
    }

    /// Check-in always creates a fresh document, even when an open one
    /// exists for the same employee/date.
    pub async fn check_in(&self, payload: CheckInPayload) -> RepoResult<AttendanceDay> {
        let (Some(emp_id), Some(date), Some(check_in)) = (
            required_field(&payload.employee_id),
            required_field(&payload.date),
            required_field(&payload.check_in),
        ) else {
            return Err(RepoError::Validation(
                "Employee ID, date, and check_in are required".to_string(),
            ));
        };
        let date = Self::parse_date(&date)?;

        let created: Option<AttendanceDay> = self
            .base
            .db()
            .create(TABLE)
            .content(AttendanceContent {
                emp_id,
                date,
                status: AttendanceStatus::Present,
                records: AttendanceRecords {
                    check_in,
                    check_out: payload.check_out.unwrap_or_default(),
                    extra: Default::default(),
                },
            })
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create attendance".to_string()))
    }

    /// Close the document named by `id` with the given time.
    pub async fn check_out(&self, id: &str, check_out: Option<String>) -> RepoResult<AttendanceDay> {
        let check_out = required_field(&check_out)
            .ok_or_else(|| RepoError::Validation("check_out time is required".to_string()))?;

        let rid = registry::parse_ref(TABLE, id)
            .ok_or_else(|| RepoError::NotFound("Attendance record not found".to_string()))?;
        let day: Option<AttendanceDay> = self.base.db().select(rid.clone()).await?;
        let mut day =
            day.ok_or_else(|| RepoError::NotFound("Attendance record not found".to_string()))?;

        if day.records.check_in.is_empty() {
            return Err(RepoError::Duplicate("No check-in record found".to_string()));
        }

        day.records.check_out = check_out;
        let content = AttendanceContent {
            emp_id: day.emp_id,
            date: day.date,
            status: day.status,
            records: day.records,
        };
        let updated: Option<AttendanceDay> = self.base.db().update(rid).content(content).await?;
        updated.ok_or_else(|| RepoError::NotFound("Attendance record not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn repo() -> AttendanceRepository {
        let service = DbService::in_memory().await.expect("db");
        AttendanceRepository::new(service.db)
    }

    fn check_in_payload(emp: &str, date: &str, time: &str) -> CheckInPayload {
        CheckInPayload {
            employee_id: Some(emp.to_string()),
            date: Some(date.to_string()),
            check_in: Some(time.to_string()),
            check_out: None,
        }
    }

    #[tokio::test]
    async fn test_check_in_then_query_single_open_day() {
        let repo = repo().await;

        repo.check_in(check_in_payload("E100", "2024-01-05", "09:00"))
            .await
            .expect("check in");

        let date = AttendanceRepository::parse_date("2024-01-05").expect("date");
        let days = repo
            .find_by_employee_and_date("E100", date)
            .await
            .expect("query");
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].records.check_in, "09:00");
        assert_eq!(days[0].records.check_out, "");
        assert!(days[0].is_open());
        assert_eq!(days[0].status, AttendanceStatus::Present);
    }

    #[tokio::test]
    async fn test_repeated_check_in_creates_new_documents() {
        let repo = repo().await;

        repo.check_in(check_in_payload("E100", "2024-01-05", "09:00"))
            .await
            .expect("first");
        repo.check_in(check_in_payload("E100", "2024-01-05", "13:00"))
            .await
            .expect("second");

        let date = AttendanceRepository::parse_date("2024-01-05").expect("date");
        let days = repo
            .find_by_employee_and_date("E100", date)
            .await
            .expect("query");
        assert_eq!(days.len(), 2);
        // Ordered by check-in time ascending
        assert_eq!(days[0].records.check_in, "09:00");
        assert_eq!(days[1].records.check_in, "13:00");
    }

    #[tokio::test]
    async fn test_query_no_data_is_empty_not_error() {
        let repo = repo().await;

        let date = AttendanceRepository::parse_date("2099-01-01").expect("date");
        let days = repo
            .find_by_employee_and_date("E999", date)
            .await
            .expect("query");
        assert!(days.is_empty());
    }

    #[tokio::test]
    async fn test_check_out_closes_the_day() {
        let repo = repo().await;

        let day = repo
            .check_in(check_in_payload("E100", "2024-01-05", "09:00"))
            .await
            .expect("check in");
        let id = day.id.expect("id").to_string();

        let closed = repo
            .check_out(&id, Some("17:30".to_string()))
            .await
            .expect("check out");
        assert_eq!(closed.records.check_out, "17:30");
        assert!(!closed.is_open());
    }

    #[tokio::test]
    async fn test_check_out_unknown_id_not_found() {
        let repo = repo().await;

        let missing = repo
            .check_out("attendance:missing", Some("17:30".to_string()))
            .await;
        assert!(
            matches!(missing, Err(RepoError::NotFound(msg)) if msg == "Attendance record not found")
        );

        let malformed = repo.check_out("garbage", Some("17:30".to_string())).await;
        assert!(matches!(malformed, Err(RepoError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_check_in_requires_all_fields() {
        let repo = repo().await;

        let result = repo
            .check_in(CheckInPayload {
                employee_id: Some("E100".to_string()),
                date: Some("2024-01-05".to_string()),
                check_in: None,
                check_out: None,
            })
            .await;
        assert!(
            matches!(result, Err(RepoError::Validation(msg)) if msg == "Employee ID, date, and check_in are required")
        );
    }

    #[tokio::test]
    async fn test_check_in_rejects_bad_date() {
        let repo = repo().await;

        let result = repo
            .check_in(check_in_payload("E100", "05-01-2024", "09:00"))
            .await;
        assert!(
            matches!(result, Err(RepoError::Validation(msg)) if msg == "Invalid date format. Please use YYYY-MM-DD")
        );
    }

    #[tokio::test]
    async fn test_check_out_requires_time() {
        let repo = repo().await;

        let day = repo
            .check_in(check_in_payload("E100", "2024-01-05", "09:00"))
            .await
            .expect("check in");
        let id = day.id.expect("id").to_string();

        let result = repo.check_out(&id, None).await;
        assert!(
            matches!(result, Err(RepoError::Validation(msg)) if msg == "check_out time is required")
        );
    }
}
