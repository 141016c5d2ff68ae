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

const SEARCH_FAILED: &str = "Failed to search profiles";

pub struct SearchProfilesPage<A>
where
    A: ProfileApi,
{
    api: Arc<A>,
    cancel: CancellationToken,
    pub term: String,
    pub results: Vec<Profile>,
    /// Set once a search has completed, so "no results" can be told apart
    /// from "not searched yet".
    pub searched: bool,
    pub banner: Option<Banner>,
    pub status: PageStatus,
}

impl<A> SearchProfilesPage<A>
where
    A: ProfileApi,
{
    pub fn new(api: Arc<A>, cancel: CancellationToken) -> Self {
        SearchProfilesPage {
            api,
            cancel,
            term: String::new(),
            results: Vec::new(),
            searched: false,
            banner: None,
            status: PageStatus::Idle,
        }
    }

    /// Searches by skill. Matching rules (case, partial matches) belong to
    /// the service; the term is only trimmed.
    pub async fn submit(&mut self, term: &str) {
        if self.status == PageStatus::Loading || self.cancel.is_cancelled() {
            return;
        }
        self.term = term.to_string();

        let skill = term.trim();
        if skill.is_empty() {
            self.banner = Some(Banner::error("Please enter a skill to search"));
            return;
        }

        self.banner = None;

        let result = {
            let _in_flight = InFlight::begin(&mut self.status);
            guarded(&self.cancel, self.api.search_by_skill(skill)).await
        };
        match result {
            Ok(list) => {
                if list.success {
                    self.results = list.data;
                    self.searched = true;
                    if self.results.is_empty() {
                        self.banner = Some(Banner::info(format!(
                            "No profiles found with skill \"{}\"",
                            skill
                        )));
                    }
                }
                self.status = PageStatus::Success;
            }
            Err(AppError::Cancelled) => self.status = PageStatus::Idle,
            Err(e) => {
                tracing::warn!(skill, "Failed to search profiles: {}", e);
                self.banner = Some(Banner::error(e.user_message(SEARCH_FAILED)));
                self.status = PageStatus::Error;
            }
        }
    }

    /// `Found N profile(s) with "term"`, once there is something to show.
    pub fn summary(&self) -> Option<String> {
        (self.searched && !self.results.is_empty()).then(|| {
            format!("Found {} profile(s) with \"{}\"", self.results.len(), self.term.trim())
        })
    }

    pub async fn delete(&mut self, id: &str, confirm: &dyn Confirm) -> bool {
        let outcome = confirm_and_delete(self.api.as_ref(), &self.cancel, confirm, id).await;
        match outcome {
            DeleteOutcome::Deleted => {
                self.banner = Some(Banner::success(DELETE_SUCCEEDED));
                self.results.retain(|p| p.id != id);
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

impl<A> Drop for SearchProfilesPage<A>
where
    A: ProfileApi,
{
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
