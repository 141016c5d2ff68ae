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

pub struct ListProfilesPage<A>
where
    A: ProfileApi,
{
    api: Arc<A>,
    cancel: CancellationToken,
    pub profiles: Vec<Profile>,
    /// Profile shown in the detail modal.
    pub selected: Option<Profile>,
    pub banner: Option<Banner>,
    pub status: PageStatus,
}

impl<A> ListProfilesPage<A>
where
    A: ProfileApi,
{
    pub fn new(api: Arc<A>, cancel: CancellationToken) -> Self {
        ListProfilesPage {
            api,
            cancel,
            profiles: Vec::new(),
            selected: None,
            banner: None,
            status: PageStatus::Idle,
        }
    }

    /// Loads every profile. Also used for the refresh action.
    pub async fn load(&mut self) {
        if self.status == PageStatus::Loading || self.cancel.is_cancelled() {
            return;
        }
        let result = {
            let _in_flight = InFlight::begin(&mut self.status);
            guarded(&self.cancel, self.api.get_all_profiles()).await
        };
        match result {
            Ok(list) => {
                if list.success {
                    self.profiles = list.data;
                }
                self.status = PageStatus::Success;
            }
            Err(AppError::Cancelled) => self.status = PageStatus::Idle,
            Err(e) => {
                tracing::warn!("Failed to fetch profiles: {}", e);
                self.banner = Some(Banner::error("Failed to fetch profiles"));
                self.status = PageStatus::Error;
            }
        }
    }

    /// Opens the detail modal. Returns false when `id` is not listed.
    pub fn open(&mut self, id: &str) -> bool {
        self.selected = self.profiles.iter().find(|p| p.id == id).cloned();
        self.selected.is_some()
    }

    pub fn close_modal(&mut self) {
        self.selected = None;
    }

    /// Deletes after confirmation. A deleted profile leaves the list, and
    /// the modal closes when it was showing that profile.
    pub async fn delete(&mut self, id: &str, confirm: &dyn Confirm) -> bool {
        let outcome = confirm_and_delete(self.api.as_ref(), &self.cancel, confirm, id).await;
        match outcome {
            DeleteOutcome::Deleted => {
                self.banner = Some(Banner::success(DELETE_SUCCEEDED));
                self.profiles.retain(|p| p.id != id);
                if self.selected.as_ref().is_some_and(|p| p.id == id) {
                    self.selected = None;
                }
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

impl<A> Drop for ListProfilesPage<A>
where
    A: ProfileApi,
{
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
