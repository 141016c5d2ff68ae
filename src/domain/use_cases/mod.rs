use std::future::Future;

use derive_more::Display;
use tokio_util::sync::CancellationToken;

use crate::{
    constants::CONFIRM_DELETE_PROMPT,
    errors::AppError,
    repositories::profile_api::ProfileApi,
    use_cases::confirm::Confirm,
};

pub(crate) const DELETE_FAILED: &str = "Failed to delete profile";
pub(crate) const DELETE_SUCCEEDED: &str = "Profile deleted successfully!";

pub mod confirm;
pub mod create;
pub mod dashboard;
pub mod list;
pub mod search;
pub mod view;

/// `Idle -> Loading -> {Success, Error}`, shared by every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum PageStatus {
    #[default]
    #[display("idle")]
    Idle,
    #[display("loading")]
    Loading,
    #[display("success")]
    Success,
    #[display("error")]
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BannerKind {
    #[display("success")]
    Success,
    #[display("info")]
    Info,
    #[display("error")]
    Error,
}

/// Inline feedback shown above a page's content.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{text}")]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Banner { kind: BannerKind::Success, text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Banner { kind: BannerKind::Info, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Banner { kind: BannerKind::Error, text: text.into() }
    }

    pub fn is_error(&self) -> bool {
        self.kind == BannerKind::Error
    }
}

/// Keeps a page in `Loading` while a request is outstanding. Dropping it
/// before the page records an outcome puts the page back to `Idle`, so a
/// request future abandoned mid-flight cannot wedge the page.
pub(crate) struct InFlight<'a> {
    status: &'a mut PageStatus,
}

impl<'a> InFlight<'a> {
    pub(crate) fn begin(status: &'a mut PageStatus) -> Self {
        *status = PageStatus::Loading;
        InFlight { status }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if *self.status == PageStatus::Loading {
            *self.status = PageStatus::Idle;
        }
    }
}

/// Races `request` against the page's token. A cancelled page never sees
/// the response.
pub(crate) async fn guarded<T, F>(token: &CancellationToken, request: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    if token.is_cancelled() {
        return Err(AppError::Cancelled);
    }

    tokio::select! {
        biased;
        _ = token.cancelled() => Err(AppError::Cancelled),
        result = request => result,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Deleted,
    Failed(Banner),
    Cancelled,
}

/// Asks for confirmation, then deletes `id` on the service.
pub(crate) async fn confirm_and_delete<A>(
    api: &A,
    token: &CancellationToken,
    confirm: &dyn Confirm,
    id: &str,
) -> DeleteOutcome
where
    A: ProfileApi + ?Sized,
{
    if !confirm.confirm(CONFIRM_DELETE_PROMPT) {
        return DeleteOutcome::Declined;
    }
    if token.is_cancelled() {
        return DeleteOutcome::Cancelled;
    }

    match guarded(token, api.delete_profile(id)).await {
        Ok(ack) if ack.success => {
            tracing::info!(id, "Profile deleted");
            DeleteOutcome::Deleted
        }
        Ok(ack) => DeleteOutcome::Failed(Banner::error(
            ack.message.unwrap_or_else(|| DELETE_FAILED.to_string()),
        )),
        Err(AppError::Cancelled) => DeleteOutcome::Cancelled,
        Err(e) => {
            tracing::warn!(id, "Failed to delete profile: {}", e);
            DeleteOutcome::Failed(Banner::error(e.user_message(DELETE_FAILED)))
        }
    }
}
