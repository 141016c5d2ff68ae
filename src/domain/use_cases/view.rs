use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::{
    entities::profile::Profile,
    errors::AppError,
    repositories::profile_api::ProfileApi,
    use_cases::{
        confirm::Confirm, confirm_and_delete, guarded, Banner, DeleteOutcome, InFlight, PageStatus,
        DELETE_SUCCEEDED,
    },
};

const LOOKUP_FAILED: &str = "Failed to fetch profile";

pub struct ViewProfilePage<A>
where
    A: ProfileApi,
{
    api: Arc<A>,
    cancel: CancellationToken,
    pub email: String,
    pub profile: Option<Profile>,
    pub banner: Option<Banner>,
    pub status: PageStatus,
}

impl<A> ViewProfilePage<A>
where
    A: ProfileApi,
{
    pub fn new(api: Arc<A>, cancel: CancellationToken) -> Self {
        ViewProfilePage {
            api,
            cancel,
            email: String::new(),
            profile: None,
            banner: None,
            status: PageStatus::Idle,
        }
    }

    /// Looks a profile up by email. A 404 is reported as information,
    /// anything else as an error.
    pub async fn lookup(&mut self, email: &str) {
        if self.status == PageStatus::Loading || self.cancel.is_cancelled() {
            return;
        }
        self.email = email.to_string();

        let email = email.trim();
        if email.is_empty() {
            self.banner = Some(Banner::error("Please enter an email address"));
            return;
        }

        self.banner = None;
        self.profile = None;

        let result = {
            let _in_flight = InFlight::begin(&mut self.status);
            guarded(&self.cancel, self.api.get_profile_by_email(email)).await
        };
        match result {
            Ok(response) => {
                if response.success {
                    self.profile = Some(response.data);
                }
                self.status = PageStatus::Success;
            }
            Err(AppError::NotFound(_)) => {
                tracing::debug!(email, "No profile for email");
                self.banner = Some(Banner::info(format!("No profile found for email: {}", email)));
                self.status = PageStatus::Success;
            }
            Err(AppError::Cancelled) => self.status = PageStatus::Idle,
            Err(e) => {
                tracing::warn!("Failed to fetch profile: {}", e);
                self.banner = Some(Banner::error(e.user_message(LOOKUP_FAILED)));
                self.status = PageStatus::Error;
            }
        }
    }

    /// Deletes the displayed profile; on success the profile and the email
    /// input are cleared.
    pub async fn delete(&mut self, confirm: &dyn Confirm) -> bool {
        let Some(id) = self.profile.as_ref().map(|p| p.id.clone()) else {
            return false;
        };

        let outcome = confirm_and_delete(self.api.as_ref(), &self.cancel, confirm, &id).await;
        match outcome {
            DeleteOutcome::Deleted => {
                self.banner = Some(Banner::success(DELETE_SUCCEEDED));
                self.profile = None;
                self.email.clear();
                true
            }
            DeleteOutcome::Failed(banner) => {
                self.banner = Some(banner);
                false
            }
            DeleteOutcome::Declined | DeleteOutcome::Cancelled => false,
        }
    }
}

impl<A> Drop for ViewProfilePage<A>
where
    A: ProfileApi,
{
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
