//! Report list, workflow transitions, and dashboard aggregates.

use chrono::Utc;
use serde::Serialize;

use gridlog_client::{ApiClient, ApiError};
use gridlog_core::{
    ActivityEntry, Comment, DashboardStats, EmployeeRef, ListPayload, PageInfo, Report,
    ReportStatus,
};

/// The list views the backend exposes; all are served through one generic
/// fetch that accepts either a bare array or a paginated envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportView {
    All,
    Mine,
    PendingApproval,
    Team,
    Organization,
}

impl ReportView {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::All => "/reports/",
            Self::Mine => "/reports/my-reports/",
            Self::PendingApproval => "/reports/pending-approval/",
            Self::Team => "/reports/team-reports/",
            Self::Organization => "/reports/all-reports/",
        }
    }
}

/// Writable report fields for create/update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewReport {
    pub week_number: u32,
    pub year: i32,
    pub accomplishments: String,
    pub goals_next_week: String,
    pub blockers: String,
    pub support_needed: String,
}

/// Export formats the backend renders server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Csv => "/reports/export-csv/",
            Self::Pdf => "/reports/export-pdf/",
        }
    }

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }
}

/// Owns the flat, ordered report list plus its derived aggregates.
/// Workflow transitions patch the matching local record in place instead of
/// refetching the whole list.
pub struct ReportsStore {
    client: ApiClient,
    pub reports: Vec<Report>,
    pub current: Option<Report>,
    pub loading: bool,
    pub error: Option<String>,
    pub stats: DashboardStats,
    pub recent_activity: Vec<ActivityEntry>,
    pub pagination: PageInfo,
}

impl ReportsStore {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            reports: Vec::new(),
            current: None,
            loading: false,
            error: None,
            stats: DashboardStats::default(),
            recent_activity: Vec::new(),
            pagination: PageInfo::default(),
        }
    }

    // --- Derived filters ---

    #[must_use]
    pub fn pending_reports(&self) -> Vec<&Report> {
        self.by_status(ReportStatus::Submitted)
    }

    #[must_use]
    pub fn draft_reports(&self) -> Vec<&Report> {
        self.by_status(ReportStatus::Draft)
    }

    #[must_use]
    pub fn reviewed_reports(&self) -> Vec<&Report> {
        self.by_status(ReportStatus::Reviewed)
    }

    fn by_status(&self, status: ReportStatus) -> Vec<&Report> {
        self.reports.iter().filter(|r| r.status == status).collect()
    }

    // --- List fetching ---

    /// Fetch one of the list views into `reports`, recording pagination when
    /// the response is enveloped.
    ///
    /// # Errors
    ///
    /// Records a display message on `error` and re-throws.
    pub async fn fetch_reports(&mut self, view: ReportView) -> Result<(), ApiError> {
        self.fetch_reports_with(view, &[]).await
    }

    /// Like [`Self::fetch_reports`] with query filters (page, year, employee).
    ///
    /// # Errors
    ///
    /// Records a display message on `error` and re-throws.
    pub async fn fetch_reports_with(
        &mut self,
        view: ReportView,
        query: &[(&str, &str)],
    ) -> Result<(), ApiError> {
        self.loading = true;
        self.error = None;
        let outcome = self
            .client
            .get_with_query::<ListPayload<Report>>(view.path(), query)
            .await;
        self.loading = false;

        match outcome {
            Ok(payload) => {
                let (items, info) = payload.into_parts();
                self.reports = items;
                if let Some(info) = info {
                    self.pagination = info;
                }
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Fetch one report into `current`.
    ///
    /// # Errors
    ///
    /// Records a display message on `error` and re-throws.
    pub async fn fetch_report(&mut self, id: i64) -> Result<Report, ApiError> {
        self.loading = true;
        let outcome = self.client.get::<Report>(&format!("/reports/{id}/")).await;
        self.loading = false;

        match outcome {
            Ok(report) => {
                self.current = Some(report.clone());
                Ok(report)
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    // --- CRUD ---

    /// Create a report and prepend it to the local list.
    ///
    /// # Errors
    ///
    /// Records a display message on `error` and re-throws.
    pub async fn create_report(&mut self, draft: &NewReport) -> Result<Report, ApiError> {
        match self.client.post::<Report, _>("/reports/", draft).await {
            Ok(report) => {
                self.reports.insert(0, report.clone());
                Ok(report)
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Update a report and replace the matching local record.
    ///
    /// # Errors
    ///
    /// Records a display message on `error` and re-throws.
    pub async fn update_report(&mut self, id: i64, draft: &NewReport) -> Result<Report, ApiError> {
        match self
            .client
            .put::<Report, _>(&format!("/reports/{id}/"), draft)
            .await
        {
            Ok(report) => {
                if let Some(slot) = self.reports.iter_mut().find(|r| r.id == id) {
                    *slot = report.clone();
                }
                Ok(report)
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Delete a report and drop it from the local list.
    ///
    /// # Errors
    ///
    /// Records a display message on `error` and re-throws.
    pub async fn delete_report(&mut self, id: i64) -> Result<(), ApiError> {
        match self.client.delete(&format!("/reports/{id}/")).await {
            Ok(()) => {
                self.reports.retain(|r| r.id != id);
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    // --- Workflow transitions ---

    /// Submit for review: `draft -> submitted`, stamping the submission time
    /// on the local record.
    ///
    /// # Errors
    ///
    /// Records a display message on `error` and re-throws.
    pub async fn submit_report(&mut self, id: i64) -> Result<(), ApiError> {
        match self
            .client
            .post_empty::<serde_json::Value>(&format!("/reports/{id}/submit/"))
            .await
        {
            Ok(_) => {
                self.patch_report(id, |report| {
                    report.status = ReportStatus::Submitted;
                    report.submitted_at = Some(Utc::now());
                });
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Supervisor sign-off: `submitted -> reviewed`.
    ///
    /// # Errors
    ///
    /// Records a display message on `error` and re-throws.
    pub async fn review_report(&mut self, id: i64) -> Result<(), ApiError> {
        match self
            .client
            .post_empty::<serde_json::Value>(&format!("/reports/{id}/review/"))
            .await
        {
            Ok(_) => {
                self.patch_report(id, |report| {
                    report.status = ReportStatus::Reviewed;
                    report.reviewed_at = Some(Utc::now());
                });
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Send a report back to its author with feedback:
    /// `submitted -> revision_requested`.
    ///
    /// # Errors
    ///
    /// Records a display message on `error` and re-throws.
    pub async fn request_revision(&mut self, id: i64, feedback: &str) -> Result<(), ApiError> {
        match self
            .client
            .post::<serde_json::Value, _>(
                &format!("/reports/{id}/request-revision/"),
                &serde_json::json!({ "comment": feedback }),
            )
            .await
        {
            Ok(_) => {
                self.patch_report(id, |report| {
                    report.status = ReportStatus::RevisionRequested;
                    report.feedback = Some(feedback.to_string());
                });
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    fn patch_report(&mut self, id: i64, patch: impl FnOnce(&mut Report)) {
        if let Some(report) = self.reports.iter_mut().find(|r| r.id == id) {
            patch(report);
        }
    }

    // --- Dashboard aggregates ---

    /// Fetch dashboard counts, deriving them from the loaded list when the
    /// endpoint is unavailable. Both paths produce the same
    /// [`DashboardStats`] shape, so UI bindings never branch on the source.
    pub async fn fetch_dashboard_stats(&mut self) -> DashboardStats {
        self.loading = true;
        let stats = match self
            .client
            .get::<DashboardStats>("/reports/dashboard-stats/")
            .await
        {
            Ok(stats) => stats,
            Err(error) => {
                tracing::debug!(%error, "dashboard-stats unavailable; deriving locally");
                self.derive_stats()
            }
        };
        self.loading = false;
        self.stats = stats;
        stats
    }

    fn derive_stats(&self) -> DashboardStats {
        DashboardStats {
            my_reports: self.reports.len() as u64,
            pending_review: self.pending_reports().len() as u64,
            reviewed: self.reviewed_reports().len() as u64,
            draft: self.draft_reports().len() as u64,
        }
    }

    /// Fetch the recent-activity feed, deriving it from the loaded list when
    /// the endpoint is unavailable. Same shape on both paths.
    pub async fn fetch_recent_activity(&mut self) -> Vec<ActivityEntry> {
        let activity = match self
            .client
            .get::<Vec<ActivityEntry>>("/reports/recent-activity/")
            .await
        {
            Ok(activity) => activity,
            Err(error) => {
                tracing::debug!(%error, "recent-activity unavailable; deriving locally");
                self.derive_recent_activity()
            }
        };
        self.recent_activity = activity.clone();
        activity
    }

    fn derive_recent_activity(&self) -> Vec<ActivityEntry> {
        self.reports
            .iter()
            .take(5)
            .map(|report| ActivityEntry {
                id: report.id,
                title: format!("Week {}/{} Report", report.week_number, report.year),
                date: report
                    .updated_at
                    .or(report.submitted_at)
                    .unwrap_or(report.created_at),
                status: Some(report.status),
                message: String::new(),
                actor: report
                    .user_name
                    .clone()
                    .unwrap_or_else(|| "System".to_string()),
            })
            .collect()
    }

    /// Employee list for filter dropdowns, derived from loaded reports when
    /// the endpoint is unavailable.
    pub async fn fetch_employees(&mut self) -> Vec<EmployeeRef> {
        match self
            .client
            .get::<ListPayload<EmployeeRef>>("/auth/employees/")
            .await
        {
            Ok(payload) => payload.into_parts().0,
            Err(error) => {
                tracing::debug!(%error, "employees endpoint unavailable; deriving from reports");
                let mut seen = std::collections::BTreeMap::new();
                for report in &self.reports {
                    if let Some(name) = &report.user_name {
                        seen.entry(report.user).or_insert_with(|| name.clone());
                    }
                }
                seen.into_iter()
                    .map(|(id, full_name)| EmployeeRef { id, full_name })
                    .collect()
            }
        }
    }

    // --- Comments ---

    /// # Errors
    ///
    /// Records a display message on `error` and re-throws.
    pub async fn fetch_comments(&mut self, report_id: i64) -> Result<Vec<Comment>, ApiError> {
        match self
            .client
            .get::<Vec<Comment>>(&format!("/reports/{report_id}/comments/"))
            .await
        {
            Ok(comments) => Ok(comments),
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// # Errors
    ///
    /// Records a display message on `error` and re-throws.
    pub async fn add_comment(&mut self, report_id: i64, body: &str) -> Result<Comment, ApiError> {
        match self
            .client
            .post::<Comment, _>(
                &format!("/reports/{report_id}/comments/"),
                &serde_json::json!({ "comment": body }),
            )
            .await
        {
            Ok(comment) => Ok(comment),
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    // --- Exports and organization stats ---

    /// Backend-rendered export. The caller decides where the bytes go (file
    /// save dialog, share sheet); this store only moves them.
    ///
    /// # Errors
    ///
    /// Propagates the failure without recording `error` — exports surface
    /// their own failure UI.
    pub async fn export_reports(
        &self,
        format: ExportFormat,
        filters: &[(&str, &str)],
    ) -> Result<Vec<u8>, ApiError> {
        self.client.get_bytes(format.path(), filters).await
    }

    /// Organization-wide aggregates for the admin dashboard. Shape is owned
    /// by the backend; passed through untyped.
    ///
    /// # Errors
    ///
    /// Propagates the failure.
    pub async fn fetch_organization_stats(&self) -> Result<serde_json::Value, ApiError> {
        self.client.get("/reports/organization-stats/").await
    }
}
