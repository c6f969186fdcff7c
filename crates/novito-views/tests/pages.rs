mod common;

use std::time::Duration;

use chrono::NaiveDate;
use common::{FakeApi, audit, workspace};
use novito_core::enums::{AgentMode, AnalyticsKind, SmartAction};
use novito_gateway::Operation;
use novito_views::controllers::{
    AnalyticsOverview, AuditFilter, AuditTrail, BriefingView, ChatSession, MeetingsView,
    SettingsView, SmartActionsView, Speaker,
};
use novito_views::{NoticeKind, ViewError, ViewPhase};
use pretty_assertions::assert_eq;
use serde_json::json;

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn analytics_section_with_inline_error_is_omitted() {
    let (api, ctx) = FakeApi::new()
        .with_analytics(AnalyticsKind::TaskCycleTime, json!({"error": "not enough data"}))
        .into_context();
    let mut overview = AnalyticsOverview::new(ctx);
    overview.mount().await.unwrap();

    let report = overview.state().data().unwrap();
    let rendered: Vec<AnalyticsKind> = report.sections.iter().map(|s| s.kind).collect();
    assert_eq!(
        rendered,
        vec![
            AnalyticsKind::VelocityForecast,
            AnalyticsKind::WorkloadDistribution,
            AnalyticsKind::AiEffectiveness,
        ]
    );
    assert_eq!(report.omitted, vec![AnalyticsKind::TaskCycleTime]);
    assert_eq!(api.calls_to(Operation::FetchAnalytics).len(), 4);
    assert!(overview.state().notice().is_none());
}

#[tokio::test]
async fn analytics_transport_failure_fails_the_mount() {
    let (_api, ctx) = FakeApi::new()
        .failing(Operation::FetchAnalytics)
        .into_context();
    let mut overview = AnalyticsOverview::new(ctx);

    overview.mount().await.unwrap_err();

    assert_eq!(overview.state().phase(), ViewPhase::Failed);
    assert!(overview.state().data().is_none());
    assert!(overview.state().notice().is_some());
}

// ---------------------------------------------------------------------------
// Audit trail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn undo_without_prior_state_is_refused_locally() {
    let (api, ctx) = FakeApi::new()
        .with_audits(vec![audit(1, "agent_applied_suggestion", None)])
        .into_context();
    let mut trail = AuditTrail::new(ctx);
    trail.mount().await.unwrap();

    let err = trail.undo(1).await.unwrap_err();

    assert!(matches!(err, ViewError::NotUndoable(1)));
    assert!(api.calls_to(Operation::UndoAudit).is_empty());
}

#[tokio::test]
async fn undo_refetches_the_trail() {
    let (api, ctx) = FakeApi::new()
        .with_audits(vec![
            audit(1, "task_updated", Some(json!({"status": "todo"}))),
            audit(2, "agent_applied_suggestion", None),
        ])
        .into_context();
    let mut trail = AuditTrail::new(ctx);
    trail.mount().await.unwrap();

    let ack = trail.undo(1).await.unwrap();

    assert!(ack.success);
    assert_eq!(api.calls_to(Operation::UndoAudit)[0].target, Some(1));
    assert_eq!(api.calls_to(Operation::ListAudits).len(), 2);
    let notice = trail.state().notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Info);
    assert_eq!(notice.message, "Action undone");
}

#[tokio::test]
async fn audit_filter_matches_action_and_target() {
    let (_api, ctx) = FakeApi::new()
        .with_audits(vec![
            audit(1, "task_updated", None),
            audit(2, "agent_applied_suggestion", None),
            audit(3, "task_updated", None),
        ])
        .into_context();
    let mut trail = AuditTrail::new(ctx);
    trail.mount().await.unwrap();

    trail.set_filter(AuditFilter {
        action_type: Some("task_updated".into()),
        target_type: Some("task".into()),
    });

    let ids: Vec<i64> = trail.visible().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(
        trail.action_types(),
        vec!["agent_applied_suggestion", "task_updated"]
    );
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[tokio::test]
async fn chat_starts_with_a_greeting() {
    let (_api, ctx) = FakeApi::new().into_context();
    let chat = ChatSession::new(ctx);

    assert_eq!(chat.messages().len(), 1);
    assert_eq!(chat.messages()[0].speaker, Speaker::Assistant);
    assert_eq!(chat.state().phase(), ViewPhase::Ready);
}

#[tokio::test]
async fn blank_question_is_not_sent() {
    let (api, ctx) = FakeApi::new().into_context();
    let mut chat = ChatSession::new(ctx);

    let err = chat.ask("   ").await.unwrap_err();

    assert!(matches!(err, ViewError::Core(_)));
    assert!(api.calls().is_empty());
    assert_eq!(chat.messages().len(), 1);
}

#[tokio::test]
async fn chat_failure_is_answered_inline() {
    let (_api, ctx) = FakeApi::new()
        .failing(Operation::ChatQuery)
        .into_context();
    let mut chat = ChatSession::new(ctx);

    let reply = chat.ask("which tasks are overdue?").await.unwrap();

    assert!(reply.is_error());
    assert_eq!(reply.text, "Failed to process query. Please try again.");
    let speakers: Vec<Speaker> = chat.messages().iter().map(|m| m.speaker).collect();
    assert_eq!(
        speakers,
        vec![Speaker::Assistant, Speaker::User, Speaker::Assistant]
    );
    assert_eq!(chat.state().phase(), ViewPhase::Ready);
    assert!(chat.state().notice().is_none());
}

#[tokio::test]
async fn chat_reply_keeps_backend_tone() {
    let (_api, ctx) = FakeApi::new().into_context();
    let mut chat = ChatSession::new(ctx);

    let reply = chat.ask("velocity?").await.unwrap();

    assert_eq!(reply.kind, "success");
    assert_eq!(reply.text, "You asked: velocity?");
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn settings_save_persists_the_draft() {
    let (api, ctx) = FakeApi::new().with_workspace(workspace()).into_context();
    let mut settings = SettingsView::new(ctx);
    settings.mount().await.unwrap();

    settings.set_mode(AgentMode::Auto);
    settings.set_threshold(0.9);
    assert!(settings.toggle_action("split_task"));
    settings.save().await.unwrap();

    let saved = settings.state().data().unwrap();
    assert_eq!(saved.agent_mode, AgentMode::Auto);
    assert_eq!(
        saved.agent_config.allowed_auto_actions,
        vec!["set_focus_time".to_string(), "split_task".to_string()]
    );
    assert_eq!(api.calls_to(Operation::UpdateAgentMode).len(), 1);
    assert_eq!(settings.draft().unwrap().agent_mode, AgentMode::Auto);
}

#[tokio::test]
async fn out_of_range_threshold_is_not_sent() {
    let (api, ctx) = FakeApi::new().with_workspace(workspace()).into_context();
    let mut settings = SettingsView::new(ctx);
    settings.mount().await.unwrap();

    settings.set_threshold(1.5);
    let err = settings.save().await.unwrap_err();

    assert!(matches!(err, ViewError::Core(_)));
    assert!(api.calls_to(Operation::UpdateAgentMode).is_empty());
    assert_eq!(settings.state().phase(), ViewPhase::Ready);
}

#[tokio::test]
async fn toggling_twice_restores_the_list() {
    let (_api, ctx) = FakeApi::new().with_workspace(workspace()).into_context();
    let mut settings = SettingsView::new(ctx);
    settings.mount().await.unwrap();

    assert!(!settings.toggle_action("set_focus_time"));
    assert!(settings.toggle_action("set_focus_time"));
    assert_eq!(
        settings.draft().unwrap().agent_config.allowed_auto_actions,
        vec!["set_focus_time".to_string()]
    );
}

// ---------------------------------------------------------------------------
// Smart actions, meetings, briefing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn smart_action_reports_its_count() {
    let (_api, ctx) = FakeApi::new().into_context();
    let mut smart = SmartActionsView::new(ctx);

    let run = smart.run(SmartAction::DetectRisks).await.unwrap();

    assert_eq!(run.count, 2);
    assert_eq!(run.outcome.suggestion_ids(), vec![11, 12]);
    assert_eq!(smart.runs().len(), 1);
    assert_eq!(
        smart.state().notice().map(|n| n.message.as_str()),
        Some("Detect Risks: 2 suggestion(s) created")
    );
}

#[tokio::test]
async fn smart_action_can_run_again_after_a_failure() {
    let (api, ctx) = FakeApi::new()
        .failing(Operation::RunSmartAction)
        .into_context();
    let mut smart = SmartActionsView::new(ctx);

    smart.run(SmartAction::DetectRisks).await.unwrap_err();
    assert_eq!(smart.state().phase(), ViewPhase::Failed);
    assert!(smart.dismiss_notice().is_some_and(|n| n.is_error()));
    assert_eq!(smart.state().phase(), ViewPhase::Ready);

    api.recover(Operation::RunSmartAction);
    let run = smart.run(SmartAction::DetectRisks).await.unwrap();

    assert_eq!(run.count, 2);
    assert_eq!(smart.runs().len(), 1);
}

#[tokio::test]
async fn meeting_can_be_resubmitted_after_a_failure() {
    let (api, ctx) = FakeApi::new()
        .failing(Operation::ProcessMeeting)
        .into_context();
    let mut meetings = MeetingsView::new(ctx);
    let date = NaiveDate::from_ymd_opt(2026, 3, 2)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    let transcript = "Alice will fix the login bug by Friday.";

    meetings.process("Standup", transcript, date).await.unwrap_err();
    api.recover(Operation::ProcessMeeting);

    let outcome = meetings.process("Standup", transcript, date).await.unwrap();
    assert_eq!(outcome.meeting_id, 5);
    assert_eq!(meetings.state().phase(), ViewPhase::Ready);
}

#[tokio::test]
async fn meeting_without_transcript_is_not_sent() {
    let (api, ctx) = FakeApi::new().into_context();
    let mut meetings = MeetingsView::new(ctx);
    let date = NaiveDate::from_ymd_opt(2026, 3, 2)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();

    let err = meetings.process("Standup", "  ", date).await.unwrap_err();

    assert!(matches!(err, ViewError::Core(_)));
    assert!(api.calls().is_empty());

    let outcome = meetings
        .process("Standup", "Alice will fix the login bug by Friday.", date)
        .await
        .unwrap();
    assert_eq!(outcome.meeting_id, 5);
    assert_eq!(meetings.processed().len(), 1);
}

#[tokio::test]
async fn briefing_is_personalised_by_user() {
    let (api, ctx) = FakeApi::new().into_context();
    let mut ctx = ctx;
    ctx.user_id = Some(7);
    let mut briefing = BriefingView::new(ctx);
    briefing.mount().await.unwrap();

    let snapshot = briefing.state().data().unwrap();
    assert_eq!(snapshot.insight(), Some("Two tasks are overdue."));
    assert_eq!(snapshot.summary_count("overdue_count"), Some(2));
    assert_eq!(snapshot.section("overdue_tasks").len(), 2);
    assert_eq!(snapshot.data()["user_id"], json!(7));
    assert_eq!(api.calls_to(Operation::DailyBriefing).len(), 1);
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_after_unmount_is_discarded() {
    let (api, ctx) = FakeApi::new()
        .with_audits(vec![audit(1, "task_updated", None)])
        .with_delay(Duration::from_millis(200))
        .into_context();
    let mut trail = AuditTrail::new(ctx);
    let teardown = trail.lifecycle().handle();

    let unmount = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        teardown.cancel();
    });
    let err = trail.mount().await.unwrap_err();
    unmount.await.unwrap();

    assert!(matches!(err, ViewError::Cancelled));
    assert!(trail.state().data().is_none());
    assert!(trail.state().notice().is_none());
    assert_eq!(api.calls_to(Operation::ListAudits).len(), 1);
}
