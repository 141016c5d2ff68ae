use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use validator::Validate;

use crate::{
    entities::{form::ProfileForm, profile::Profile},
    errors::AppError,
    repositories::profile_api::ProfileApi,
    use_cases::{guarded, Banner, InFlight, PageStatus},
};

const CREATE_FAILED: &str = "Failed to create profile";

pub struct CreateProfilePage<A>
where
    A: ProfileApi,
{
    api: Arc<A>,
    cancel: CancellationToken,
    pub form: ProfileForm,
    pub banner: Option<Banner>,
    pub status: PageStatus,
    pub created: Option<Profile>,
}

impl<A> CreateProfilePage<A>
where
    A: ProfileApi,
{
    pub fn new(api: Arc<A>, cancel: CancellationToken) -> Self {
        CreateProfilePage {
            api,
            cancel,
            form: ProfileForm::default(),
            banner: None,
            status: PageStatus::Idle,
            created: None,
        }
    }

    pub fn with_form(mut self, form: ProfileForm) -> Self {
        self.form = form;
        self
    }

    /// Composes the profile from the form and posts it. On success the form
    /// is cleared; on failure it is kept so the user can correct it.
    pub async fn submit(&mut self) {
        if self.status == PageStatus::Loading || self.cancel.is_cancelled() {
            return;
        }
        self.banner = None;

        let request = self.form.to_new_profile();
        if let Err(errors) = request.validate() {
            let error = AppError::from(errors);
            tracing::debug!("Rejected profile form: {}", error);
            self.fail(error.user_message(CREATE_FAILED));
            return;
        }

        let result = {
            let _in_flight = InFlight::begin(&mut self.status);
            guarded(&self.cancel, self.api.create_profile(&request)).await
        };
        match result {
            Ok(response) => {
                tracing::info!(id = %response.data.id, "Profile created");
                self.banner = Some(Banner::success("Profile created successfully!"));
                self.created = Some(response.data);
                self.form.clear();
                self.status = PageStatus::Success;
            }
            Err(AppError::Cancelled) => self.status = PageStatus::Idle,
            Err(e) => {
                tracing::warn!("Failed to create profile: {}", e);
                self.fail(e.user_message(CREATE_FAILED));
            }
        }
    }

    fn fail(&mut self, text: String) {
        self.banner = Some(Banner::error(text));
        self.status = PageStatus::Error;
    }
}

impl<A> Drop for CreateProfilePage<A>
where
    A: ProfileApi,
{
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
