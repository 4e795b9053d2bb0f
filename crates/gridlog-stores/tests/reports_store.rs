//! Reports store behavior against a local mock backend.

mod support;

use pretty_assertions::assert_eq;

use gridlog_core::ReportStatus;
use gridlog_stores::{NewReport, ReportView, ReportsStore};
use support::{client, json_response, read_body, spawn_server};

fn report_json(id: i64, status: &str, week: u32) -> String {
    format!(
        r#"{{
            "id": {id},
            "status": "{status}",
            "week_number": {week},
            "year": 2026,
            "user": 3,
            "user_name": "Ada L",
            "accomplishments": "shipped",
            "goals_next_week": "more",
            "blockers": "",
            "support_needed": "",
            "created_at": "2026-02-20T08:00:00Z"
        }}"#
    )
}

#[tokio::test]
async fn fetch_reports_unwraps_paginated_envelope() {
    let base = spawn_server(|request| {
        assert_eq!(request.url(), "/api/v1/reports/my-reports/");
        let body = format!(
            r#"{{"count": 12, "next": "http://x/?page=2", "previous": null,
                "results": [{}, {}]}}"#,
            report_json(1, "draft", 7),
            report_json(2, "submitted", 8),
        );
        let _ = request.respond(json_response(200, &body));
    });
    let tmp = tempfile::TempDir::new().expect("tmp");
    let mut store = ReportsStore::new(client(&base, tmp.path()));

    store.fetch_reports(ReportView::Mine).await.expect("fetch");
    assert_eq!(store.reports.len(), 2);
    assert_eq!(store.pagination.count, 12);
    assert!(store.pagination.next.is_some());
    assert!(!store.loading);
    assert_eq!(store.error, None);
}

#[tokio::test]
async fn fetch_reports_accepts_bare_array() {
    let base = spawn_server(|request| {
        let body = format!("[{}]", report_json(5, "reviewed", 6));
        let _ = request.respond(json_response(200, &body));
    });
    let tmp = tempfile::TempDir::new().expect("tmp");
    let mut store = ReportsStore::new(client(&base, tmp.path()));

    store.fetch_reports(ReportView::All).await.expect("fetch");
    assert_eq!(store.reports.len(), 1);
    assert_eq!(store.reports[0].status, ReportStatus::Reviewed);
}

#[tokio::test]
async fn fetch_reports_with_filters_appends_query() {
    let base = spawn_server(|request| {
        assert_eq!(request.url(), "/api/v1/reports/all-reports/?page=2&year=2026");
        let _ = request.respond(json_response(200, "[]"));
    });
    let tmp = tempfile::TempDir::new().expect("tmp");
    let mut store = ReportsStore::new(client(&base, tmp.path()));

    store
        .fetch_reports_with(ReportView::Organization, &[("page", "2"), ("year", "2026")])
        .await
        .expect("fetch");
    assert!(store.reports.is_empty());
}

#[tokio::test]
async fn fetch_reports_failure_records_server_detail() {
    let base = spawn_server(|request| {
        let _ = request.respond(json_response(403, r#"{"detail": "Not your team"}"#));
    });
    let tmp = tempfile::TempDir::new().expect("tmp");
    let mut store = ReportsStore::new(client(&base, tmp.path()));

    let result = store.fetch_reports(ReportView::Team).await;
    assert!(result.is_err());
    assert_eq!(store.error.as_deref(), Some("Not your team"));
    assert!(!store.loading);
}

#[tokio::test]
async fn submit_patches_only_the_target_report() {
    let base = spawn_server(|request| {
        assert_eq!(request.url(), "/api/v1/reports/2/submit/");
        let _ = request.respond(json_response(200, r#"{"ok": true}"#));
    });
    let tmp = tempfile::TempDir::new().expect("tmp");
    let mut store = ReportsStore::new(client(&base, tmp.path()));
    store.reports = vec![
        serde_json::from_str(&report_json(1, "draft", 7)).expect("seed"),
        serde_json::from_str(&report_json(2, "draft", 8)).expect("seed"),
    ];

    store.submit_report(2).await.expect("submit");
    assert_eq!(store.reports[0].status, ReportStatus::Draft);
    assert_eq!(store.reports[1].status, ReportStatus::Submitted);
    assert!(store.reports[1].submitted_at.is_some());
    assert!(store.reports[0].submitted_at.is_none());
}

#[tokio::test]
async fn submit_failure_records_error_and_leaves_report_untouched() {
    let base = spawn_server(|request| {
        let _ = request.respond(json_response(400, r#"{"detail": "Period is closed"}"#));
    });
    let tmp = tempfile::TempDir::new().expect("tmp");
    let mut store = ReportsStore::new(client(&base, tmp.path()));
    store.reports = vec![serde_json::from_str(&report_json(1, "draft", 7)).expect("seed")];

    let result = store.submit_report(1).await;
    assert!(result.is_err());
    assert_eq!(store.error.as_deref(), Some("Period is closed"));
    assert_eq!(store.reports[0].status, ReportStatus::Draft);
}

#[tokio::test]
async fn request_revision_attaches_feedback_locally() {
    let base = spawn_server(|mut request| {
        assert_eq!(request.url(), "/api/v1/reports/1/request-revision/");
        let body = read_body(&mut request);
        assert!(body.contains(r#""comment":"Add blockers""#));
        let _ = request.respond(json_response(200, r#"{"ok": true}"#));
    });
    let tmp = tempfile::TempDir::new().expect("tmp");
    let mut store = ReportsStore::new(client(&base, tmp.path()));
    store.reports = vec![serde_json::from_str(&report_json(1, "submitted", 7)).expect("seed")];

    store
        .request_revision(1, "Add blockers")
        .await
        .expect("request revision");
    assert_eq!(store.reports[0].status, ReportStatus::RevisionRequested);
    assert_eq!(store.reports[0].feedback.as_deref(), Some("Add blockers"));
}

#[tokio::test]
async fn create_prepends_and_delete_removes() {
    let base = spawn_server(|request| match request.method() {
        tiny_http::Method::Post => {
            let _ = request.respond(json_response(201, &report_json(9, "draft", 10)));
        }
        tiny_http::Method::Delete => {
            let _ = request.respond(json_response(204, ""));
        }
        _ => {
            let _ = request.respond(json_response(405, "{}"));
        }
    });
    let tmp = tempfile::TempDir::new().expect("tmp");
    let mut store = ReportsStore::new(client(&base, tmp.path()));
    store.reports = vec![serde_json::from_str(&report_json(1, "draft", 7)).expect("seed")];

    let draft = NewReport {
        week_number: 10,
        year: 2026,
        accomplishments: "x".into(),
        ..NewReport::default()
    };
    store.create_report(&draft).await.expect("create");
    assert_eq!(store.reports.len(), 2);
    assert_eq!(store.reports[0].id, 9);

    store.delete_report(9).await.expect("delete");
    assert_eq!(store.reports.len(), 1);
    assert_eq!(store.reports[0].id, 1);
}

#[tokio::test]
async fn dashboard_stats_fall_back_to_local_derivation() {
    let base = spawn_server(|request| {
        let _ = request.respond(json_response(404, r#"{"detail": "Not found."}"#));
    });
    let tmp = tempfile::TempDir::new().expect("tmp");
    let mut store = ReportsStore::new(client(&base, tmp.path()));
    store.reports = vec![
        serde_json::from_str(&report_json(1, "draft", 7)).expect("seed"),
        serde_json::from_str(&report_json(2, "submitted", 8)).expect("seed"),
        serde_json::from_str(&report_json(3, "reviewed", 6)).expect("seed"),
    ];

    let stats = store.fetch_dashboard_stats().await;
    assert_eq!(stats.my_reports, 3);
    assert_eq!(stats.pending_review, 1);
    assert_eq!(stats.reviewed, 1);
    assert_eq!(stats.draft, 1);
    assert_eq!(store.stats, stats);
}

#[tokio::test]
async fn dashboard_stats_prefer_server_payload() {
    let base = spawn_server(|request| {
        let _ = request.respond(json_response(
            200,
            r#"{"myReports": 40, "pendingReview": 4, "reviewed": 30, "draft": 6}"#,
        ));
    });
    let tmp = tempfile::TempDir::new().expect("tmp");
    let mut store = ReportsStore::new(client(&base, tmp.path()));

    let stats = store.fetch_dashboard_stats().await;
    assert_eq!(stats.my_reports, 40);
    assert_eq!(stats.pending_review, 4);
}

#[tokio::test]
async fn recent_activity_fallback_mirrors_server_shape() {
    let base = spawn_server(|request| {
        let _ = request.respond(json_response(404, r#"{"detail": "Not found."}"#));
    });
    let tmp = tempfile::TempDir::new().expect("tmp");
    let mut store = ReportsStore::new(client(&base, tmp.path()));
    store.reports = vec![serde_json::from_str(&report_json(1, "submitted", 9)).expect("seed")];

    let activity = store.fetch_recent_activity().await;
    assert_eq!(activity.len(), 1);
    assert_eq!(activity[0].title, "Week 9/2026 Report");
    assert_eq!(activity[0].actor, "Ada L");
    assert_eq!(activity[0].status, Some(ReportStatus::Submitted));
    assert_eq!(store.recent_activity, activity);
}

#[tokio::test]
async fn comments_post_the_expected_body() {
    let base = spawn_server(|mut request| {
        assert_eq!(request.url(), "/api/v1/reports/4/comments/");
        let body = read_body(&mut request);
        assert!(body.contains(r#""comment":"Looks good""#));
        let _ = request.respond(json_response(
            201,
            r#"{"id": 1, "report": 4, "author_name": "Sam",
                "body": "Looks good", "created_at": "2026-02-21T10:00:00Z"}"#,
        ));
    });
    let tmp = tempfile::TempDir::new().expect("tmp");
    let mut store = ReportsStore::new(client(&base, tmp.path()));

    let comment = store.add_comment(4, "Looks good").await.expect("comment");
    assert_eq!(comment.body, "Looks good");
    assert_eq!(comment.author_name.as_deref(), Some("Sam"));
}
