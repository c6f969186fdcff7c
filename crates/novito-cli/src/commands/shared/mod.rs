pub mod rows;

use std::future::Future;

use novito_views::{Notice, ViewError};

use crate::cli::GlobalFlags;
use crate::output;
use crate::progress::Spinner;

/// Attach the user-facing message to a view error.
pub fn surface(error: ViewError) -> anyhow::Error {
    let message = error.user_message();
    anyhow::Error::new(error).context(message)
}

/// Await a view call behind a spinner.
pub async fn loading<T>(
    message: &str,
    call: impl Future<Output = Result<T, ViewError>>,
) -> anyhow::Result<T> {
    let spinner = Spinner::start(message);
    match call.await {
        Ok(value) => {
            spinner.finish_clear();
            Ok(value)
        }
        Err(error) => {
            spinner.finish_err("failed");
            Err(surface(error))
        }
    }
}

/// Print the view's pending notice, if any.
pub fn report_notice(notice: Option<&Notice>, flags: &GlobalFlags) {
    if let Some(notice) = notice {
        output::notice(&notice.message, flags);
    }
}
