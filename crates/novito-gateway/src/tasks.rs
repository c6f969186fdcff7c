//! Task endpoints.

use novito_core::entities::Task;
use novito_core::enums::TaskStatus;
use novito_core::requests::{CaptureRequest, TaskUpdate};
use reqwest::Method;

use crate::{Gateway, GatewayError, Operation, Query, require_positive, require_text};

impl Gateway {
    /// `GET /tasks/?workspace_id&status`
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on invalid input, transport failure,
    /// non-success status, or an undecodable body.
    pub async fn list_tasks(
        &self,
        workspace_id: i64,
        status: Option<TaskStatus>,
    ) -> Result<Vec<Task>, GatewayError> {
        require_positive(Operation::ListTasks, "workspace id", workspace_id)?;
        let path = Query::new()
            .with("workspace_id", workspace_id)
            .with_opt("status", status)
            .on("/tasks/");
        self.call(Operation::ListTasks, Method::GET, &path).await
    }

    /// `GET /tasks/{id}`
    ///
    /// # Errors
    ///
    /// See [`Gateway::list_tasks`].
    pub async fn get_task(&self, task_id: i64) -> Result<Task, GatewayError> {
        require_positive(Operation::GetTask, "task id", task_id)?;
        self.call(Operation::GetTask, Method::GET, &format!("/tasks/{task_id}"))
            .await
    }

    /// `PATCH /tasks/{id}` with a partial update. Returns the server's copy.
    ///
    /// # Errors
    ///
    /// Empty updates and progress above 100 are rejected without a request.
    pub async fn update_task(
        &self,
        task_id: i64,
        update: &TaskUpdate,
    ) -> Result<Task, GatewayError> {
        require_positive(Operation::UpdateTask, "task id", task_id)?;
        update
            .validate()
            .map_err(|e| GatewayError::invalid(Operation::UpdateTask, e.to_string()))?;
        self.call_json(
            Operation::UpdateTask,
            Method::PATCH,
            &format!("/tasks/{task_id}"),
            update,
        )
        .await
    }

    /// `POST /tasks/capture`: let the backend turn free text into a task.
    ///
    /// # Errors
    ///
    /// Blank text is rejected without a request.
    pub async fn capture_task(&self, workspace_id: i64, text: &str) -> Result<Task, GatewayError> {
        require_positive(Operation::CaptureTask, "workspace id", workspace_id)?;
        require_text(Operation::CaptureTask, "capture text", text)?;
        let body = CaptureRequest {
            workspace_id,
            text: text.trim().to_string(),
        };
        self.call_json(Operation::CaptureTask, Method::POST, "/tasks/capture", &body)
            .await
    }

    /// `GET /tasks/blockers?workspace_id`
    ///
    /// # Errors
    ///
    /// See [`Gateway::list_tasks`].
    pub async fn list_blockers(&self, workspace_id: i64) -> Result<Vec<Task>, GatewayError> {
        require_positive(Operation::ListBlockers, "workspace id", workspace_id)?;
        let path = Query::new()
            .with("workspace_id", workspace_id)
            .on("/tasks/blockers");
        self.call(Operation::ListBlockers, Method::GET, &path).await
    }
}
