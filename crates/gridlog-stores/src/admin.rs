//! Admin-facing lists: employee roster, audit trail, reporting periods.

use serde::Serialize;

use gridlog_client::{ApiClient, ApiError};
use gridlog_core::{AuditEntry, ListPayload, ReportingPeriod, User};

/// Writable fields for opening a reporting period.
#[derive(Debug, Clone, Serialize)]
pub struct NewPeriod {
    pub week_number: u32,
    pub year: i32,
    pub starts_on: chrono::NaiveDate,
    pub ends_on: chrono::NaiveDate,
}

/// Backs the admin console pages. All three lists are independent; fetching
/// one never invalidates another.
pub struct AdminStore {
    client: ApiClient,
    pub employees: Vec<User>,
    pub audit_logs: Vec<AuditEntry>,
    pub periods: Vec<ReportingPeriod>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AdminStore {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            employees: Vec::new(),
            audit_logs: Vec::new(),
            periods: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// # Errors
    ///
    /// Records a display message on `error` and re-throws.
    pub async fn fetch_employees(&mut self) -> Result<(), ApiError> {
        self.loading = true;
        let outcome = self
            .client
            .get::<ListPayload<User>>("/auth/employees/")
            .await;
        self.loading = false;

        match outcome {
            Ok(payload) => {
                self.employees = payload.into_parts().0;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// # Errors
    ///
    /// Records a display message on `error` and re-throws.
    pub async fn fetch_audit_logs(&mut self) -> Result<(), ApiError> {
        self.loading = true;
        let outcome = self
            .client
            .get::<ListPayload<AuditEntry>>("/auth/audit-logs/")
            .await;
        self.loading = false;

        match outcome {
            Ok(payload) => {
                self.audit_logs = payload.into_parts().0;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// # Errors
    ///
    /// Records a display message on `error` and re-throws.
    pub async fn fetch_periods(&mut self) -> Result<(), ApiError> {
        self.loading = true;
        let outcome = self
            .client
            .get::<ListPayload<ReportingPeriod>>("/reports/periods/")
            .await;
        self.loading = false;

        match outcome {
            Ok(payload) => {
                self.periods = payload.into_parts().0;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Open a new reporting period and prepend it locally.
    ///
    /// # Errors
    ///
    /// Records a display message on `error` and re-throws (overlapping weeks
    /// are rejected server-side).
    pub async fn create_period(&mut self, draft: &NewPeriod) -> Result<ReportingPeriod, ApiError> {
        match self
            .client
            .post::<ReportingPeriod, _>("/reports/periods/", draft)
            .await
        {
            Ok(period) => {
                self.periods.insert(0, period.clone());
                Ok(period)
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Close a period to further submissions.
    ///
    /// # Errors
    ///
    /// Records a display message on `error` and re-throws.
    pub async fn close_period(&mut self, id: i64) -> Result<(), ApiError> {
        self.toggle_period(id, "close").await
    }

    /// Reopen a previously closed period.
    ///
    /// # Errors
    ///
    /// Records a display message on `error` and re-throws.
    pub async fn reopen_period(&mut self, id: i64) -> Result<(), ApiError> {
        self.toggle_period(id, "reopen").await
    }

    async fn toggle_period(&mut self, id: i64, action: &str) -> Result<(), ApiError> {
        match self
            .client
            .post_empty::<ReportingPeriod>(&format!("/reports/periods/{id}/{action}/"))
            .await
        {
            Ok(period) => {
                if let Some(slot) = self.periods.iter_mut().find(|p| p.id == id) {
                    *slot = period;
                }
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }
}
