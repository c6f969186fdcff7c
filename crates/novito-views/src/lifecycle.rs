//! Teardown of in-flight requests.
//!
//! Each controller owns a [`Lifecycle`]. Requests are raced against its
//! cancellation token; once the view is unmounted every pending or later
//! response is discarded instead of being applied.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::error::ViewError;

#[derive(Debug, Default)]
pub struct Lifecycle {
    token: CancellationToken,
}

impl Lifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A lifecycle that is also torn down when `parent` is cancelled.
    #[must_use]
    pub fn child_of(parent: &CancellationToken) -> Self {
        Self {
            token: parent.child_token(),
        }
    }

    /// Handle that unmounts the view from elsewhere, e.g. another task.
    #[must_use]
    pub fn handle(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn unmount(&self) {
        self.token.cancel();
    }

    #[must_use]
    pub fn is_unmounted(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Drive `fut` unless the view is unmounted first.
    pub async fn run<F: Future>(&self, fut: F) -> Result<F::Output, ViewError> {
        if self.token.is_cancelled() {
            return Err(ViewError::Cancelled);
        }
        tokio::select! {
            biased;
            () = self.token.cancelled() => {
                tracing::debug!("discarding response for unmounted view");
                Err(ViewError::Cancelled)
            }
            output = fut => Ok(output),
        }
    }
}

impl Drop for Lifecycle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
