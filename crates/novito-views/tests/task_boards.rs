mod common;

use common::{FakeApi, assigned, blocked, task};
use novito_core::entities::Task;
use novito_core::enums::{Role, TaskStatus};
use novito_gateway::Operation;
use novito_views::controllers::{
    BlockerBoard, DashboardController, TaskBoard, TaskFilter, WorkloadReport,
};
use novito_views::{TaskScope, ViewError, view_for};
use pretty_assertions::assert_eq;

fn visible_ids(board: &TaskBoard<FakeApi>) -> Vec<i64> {
    board.visible().iter().map(|t| t.id).collect()
}

#[tokio::test]
async fn status_filter_is_client_side() {
    let (api, ctx) = FakeApi::new()
        .with_tasks(vec![task(1, TaskStatus::Todo), task(2, TaskStatus::Done)])
        .into_context();
    let mut board = TaskBoard::new(ctx, TaskScope::All);
    board.mount().await.unwrap();

    board.set_filter("done".parse().unwrap());
    assert_eq!(visible_ids(&board), vec![2]);

    board.set_filter(TaskFilter::All);
    assert_eq!(visible_ids(&board), vec![1, 2]);

    assert_eq!(api.calls_to(Operation::ListTasks).len(), 1);
}

#[tokio::test]
async fn scope_limits_to_own_assignments() {
    let (_api, ctx) = FakeApi::new()
        .with_tasks(vec![
            assigned(1, TaskStatus::Todo, "dev1"),
            assigned(2, TaskStatus::Todo, "qa1"),
            task(3, TaskStatus::Todo),
        ])
        .into_context();
    let mut board = TaskBoard::new(ctx, TaskScope::AssignedTo("dev1"));
    board.mount().await.unwrap();

    assert_eq!(visible_ids(&board), vec![1]);
}

#[tokio::test]
async fn tasks_outside_scope_cannot_be_edited() {
    let (api, ctx) = FakeApi::new()
        .with_tasks(vec![
            assigned(1, TaskStatus::Todo, "dev1"),
            assigned(2, TaskStatus::Todo, "qa1"),
        ])
        .into_context();
    let mut board = TaskBoard::new(ctx, TaskScope::AssignedTo("dev1"));
    board.mount().await.unwrap();

    let err = board.set_status(2, TaskStatus::Done).await.unwrap_err();
    assert!(matches!(err, ViewError::NotInView { entity: "task", id: 2 }));
    let err = board.set_progress(2, 50).await.unwrap_err();
    assert!(matches!(err, ViewError::NotInView { id: 2, .. }));
    assert!(api.updates().is_empty());

    board.set_status(1, TaskStatus::InProgress).await.unwrap();
    assert_eq!(api.updates().len(), 1);
}

#[tokio::test]
async fn completing_a_task_sends_full_progress() {
    let (api, ctx) = FakeApi::new()
        .with_tasks(vec![task(1, TaskStatus::InProgress)])
        .into_context();
    let mut board = TaskBoard::new(ctx, TaskScope::All);
    board.mount().await.unwrap();

    board.set_status(1, TaskStatus::Done).await.unwrap();

    let updates = api.updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].1.status, Some(TaskStatus::Done));
    assert_eq!(updates[0].1.progress, Some(100));
    let local = board.visible()[0];
    assert_eq!(local.status, TaskStatus::Done);
    assert_eq!(local.progress, 100);
}

#[tokio::test]
async fn out_of_range_progress_is_refused() {
    let (api, ctx) = FakeApi::new()
        .with_tasks(vec![task(1, TaskStatus::InProgress)])
        .into_context();
    let mut board = TaskBoard::new(ctx, TaskScope::All);
    board.mount().await.unwrap();

    let err = board.set_progress(1, 150).await.unwrap_err();

    assert!(matches!(err, ViewError::Core(_)), "{err:?}");
    assert!(api.updates().is_empty());
}

#[tokio::test]
async fn captured_task_joins_the_list() {
    let (_api, ctx) = FakeApi::new()
        .with_tasks(vec![task(1, TaskStatus::Todo)])
        .into_context();
    let mut board = TaskBoard::new(ctx, TaskScope::All);
    board.mount().await.unwrap();

    let captured = board.capture("  write release notes ").await.unwrap();

    assert_eq!(captured.id, 2);
    assert_eq!(visible_ids(&board), vec![1, 2]);
}

#[tokio::test]
async fn resolving_a_blocker_unblocks_and_removes_it() {
    let (api, ctx) = FakeApi::new()
        .with_tasks(vec![blocked(1, "waiting on vendor"), blocked(2, "needs review")])
        .into_context();
    let mut board = BlockerBoard::new(ctx);
    board.mount().await.unwrap();

    board.resolve(1).await.unwrap();

    let ids: Vec<i64> = board.blockers().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2]);
    let updates = api.updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].0, 1);
    assert_eq!(updates[0].1.is_blocked, Some(false));
    assert_eq!(updates[0].1.blocker_reason, Some(None));
}

#[tokio::test]
async fn failed_resolve_keeps_the_blocker() {
    let (_api, ctx) = FakeApi::new()
        .with_tasks(vec![blocked(1, "waiting on vendor")])
        .failing(Operation::UpdateTask)
        .into_context();
    let mut board = BlockerBoard::new(ctx);
    board.mount().await.unwrap();

    board.resolve(1).await.unwrap_err();

    assert_eq!(board.blockers().len(), 1);
    assert!(board.state().notice().is_some_and(novito_views::Notice::is_error));
}

#[tokio::test]
async fn dashboard_stats_cover_the_role_subset() {
    let (_api, ctx) = FakeApi::new()
        .with_tasks(vec![
            assigned(1, TaskStatus::InProgress, "dev1"),
            assigned(2, TaskStatus::Done, "dev1"),
            Task { is_blocked: true, ..assigned(3, TaskStatus::Todo, "qa1") },
        ])
        .into_context();
    let mut dashboard = DashboardController::new(ctx, view_for(Role::Developer));
    dashboard.mount().await.unwrap();

    let stats: Vec<(&str, usize)> = dashboard.stats().iter().map(|s| (s.label(), s.value)).collect();
    assert_eq!(
        stats,
        vec![("Total", 2), ("In Progress", 1), ("Blocked", 0), ("Completed", 1)]
    );
    assert_eq!(dashboard.my_tasks().len(), 2);
    assert_eq!(dashboard.blocked().len(), 1);
}

#[tokio::test]
async fn workload_groups_by_assignee() {
    let (_api, ctx) = FakeApi::new()
        .with_tasks(vec![
            assigned(1, TaskStatus::Done, "qa1"),
            assigned(2, TaskStatus::InProgress, "dev1"),
            assigned(3, TaskStatus::Released, "dev1"),
            task(4, TaskStatus::Todo),
        ])
        .into_context();
    let mut report = WorkloadReport::new(ctx);
    report.mount().await.unwrap();

    let loads: Vec<(String, usize, usize)> = report
        .by_assignee()
        .into_iter()
        .map(|l| (l.name, l.total, l.completed))
        .collect();
    assert_eq!(
        loads,
        vec![
            ("Unassigned".to_string(), 1, 0),
            ("dev1".to_string(), 2, 1),
            ("qa1".to_string(), 1, 1),
        ]
    );
    let by_status = report.by_status();
    assert_eq!(by_status.len(), TaskStatus::ALL.len());
    assert!(by_status.contains(&(TaskStatus::Todo, 1)));
}
