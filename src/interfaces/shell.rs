use std::fmt::Write as _;
use std::sync::Arc;

use dialoguer::{theme::ColorfulTheme, Confirm as Prompt};
use tokio_util::sync::CancellationToken;

use crate::{
    entities::form::ProfileForm,
    presenters::{banner::render_banner, dashboard::DashboardView, profile_card::ProfileCard},
    repositories::profile_api::ProfileApi,
    use_cases::{
        confirm::Confirm,
        create::CreateProfilePage,
        dashboard::DashboardPage,
        guarded,
        list::ListProfilesPage,
        search::SearchProfilesPage,
        view::ViewProfilePage,
        Banner,
        PageStatus,
    },
};

/// The page to show. Each variant carries only that page's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Create(ProfileForm),
    List { open: Option<String>, delete: Option<String> },
    Search { skill: String, delete: Option<String> },
    View { email: String, delete: bool },
    Health,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// True when the page ended in its error state.
    pub failed: bool,
}

/// Prompts on the terminal unless `--yes` was given.
pub struct TerminalConfirm {
    assume_yes: bool,
}

impl TerminalConfirm {
    pub fn new(assume_yes: bool) -> Self {
        TerminalConfirm { assume_yes }
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        Prompt::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

pub struct Shell<A, C>
where
    A: ProfileApi,
    C: Confirm,
{
    api: Arc<A>,
    confirm: C,
    root: CancellationToken,
    top_skills_limit: usize,
}

impl<A, C> Shell<A, C>
where
    A: ProfileApi,
    C: Confirm,
{
    pub fn new(api: Arc<A>, confirm: C, root: CancellationToken, top_skills_limit: usize) -> Self {
        Shell { api, confirm, root, top_skills_limit }
    }

    /// Runs one page to completion. Each page gets a child of the root
    /// token, cancelled when the page is dropped.
    pub async fn run(&self, page: Page) -> Rendered {
        let cancel = self.root.child_token();
        tracing::debug!(?page, "Running page");

        let mut out = String::new();
        let failed = match page {
            Page::Dashboard => self.dashboard(cancel, &mut out).await,
            Page::Create(form) => self.create(cancel, form, &mut out).await,
            Page::List { open, delete } => self.list(cancel, open, delete, &mut out).await,
            Page::Search { skill, delete } => self.search(cancel, &skill, delete, &mut out).await,
            Page::View { email, delete } => self.view(cancel, &email, delete, &mut out).await,
            Page::Health => self.health(cancel, &mut out).await,
        };

        if self.root.is_cancelled() {
            let _ = writeln!(out, "{}", render_banner(&Banner::error("Cancelled")));
        }

        Rendered { text: out, failed }
    }

    async fn dashboard(&self, cancel: CancellationToken, out: &mut String) -> bool {
        let mut page = DashboardPage::new(Arc::clone(&self.api), cancel, self.top_skills_limit);
        page.refresh().await;

        let _ = write!(out, "{}", DashboardView::new(&page.stats));
        page.status == PageStatus::Error
    }

    async fn create(&self, cancel: CancellationToken, form: ProfileForm, out: &mut String) -> bool {
        let mut page = CreateProfilePage::new(Arc::clone(&self.api), cancel).with_form(form);
        page.submit().await;

        push_banner(out, page.banner.as_ref());
        if let Some(profile) = &page.created {
            let _ = write!(out, "{}", ProfileCard::new(profile));
        }
        page.status == PageStatus::Error
    }

    async fn list(
        &self,
        cancel: CancellationToken,
        open: Option<String>,
        delete: Option<String>,
        out: &mut String,
    ) -> bool {
        let mut page = ListProfilesPage::new(Arc::clone(&self.api), cancel);
        page.load().await;

        if let Some(id) = &open {
            if !page.open(id) {
                push_banner(out, Some(&Banner::info(format!("No listed profile with id {}", id))));
            }
        }
        if let Some(id) = &delete {
            page.delete(id, &self.confirm).await;
        }

        push_banner(out, page.banner.as_ref());
        if let Some(selected) = &page.selected {
            let _ = writeln!(out, "── Profile details ──");
            let _ = writeln!(out, "{}", ProfileCard::new(selected).with_delete_action());
        }
        let _ = writeln!(out, "All Profiles ({})", page.profiles.len());
        if page.profiles.is_empty() && page.status != PageStatus::Error {
            let _ = writeln!(out, "No profiles found");
        }
        for profile in &page.profiles {
            let card = ProfileCard::new(profile).with_view_action().with_delete_action();
            let _ = writeln!(out, "{}", card);
        }
        page.status == PageStatus::Error || page.banner.as_ref().is_some_and(Banner::is_error)
    }

    async fn search(
        &self,
        cancel: CancellationToken,
        skill: &str,
        delete: Option<String>,
        out: &mut String,
    ) -> bool {
        let mut page = SearchProfilesPage::new(Arc::clone(&self.api), cancel);
        page.submit(skill).await;

        if let Some(id) = &delete {
            page.delete(id, &self.confirm).await;
        }

        push_banner(out, page.banner.as_ref());
        if let Some(summary) = page.summary() {
            let _ = writeln!(out, "{}", summary);
        }
        for profile in &page.results {
            let _ = writeln!(out, "{}", ProfileCard::new(profile).with_delete_action());
        }
        page.status == PageStatus::Error || page.banner.as_ref().is_some_and(Banner::is_error)
    }

    async fn view(&self, cancel: CancellationToken, email: &str, delete: bool, out: &mut String) -> bool {
        let mut page = ViewProfilePage::new(Arc::clone(&self.api), cancel);
        page.lookup(email).await;

        if delete {
            page.delete(&self.confirm).await;
        }

        push_banner(out, page.banner.as_ref());
        if let Some(profile) = &page.profile {
            let _ = write!(out, "{}", ProfileCard::new(profile).with_delete_action());
        }
        page.status == PageStatus::Error || page.banner.as_ref().is_some_and(Banner::is_error)
    }

    async fn health(&self, cancel: CancellationToken, out: &mut String) -> bool {
        let result = guarded(&cancel, self.api.health_check()).await;
        match result {
            Ok(health) => {
                let _ = writeln!(out, "Service status: {}", health.status);
                false
            }
            Err(e) => {
                tracing::warn!("Health check failed: {}", e);
                push_banner(out, Some(&Banner::error(e.user_message("Profile service unavailable"))));
                true
            }
        }
    }
}

fn push_banner(out: &mut String, banner: Option<&Banner>) {
    if let Some(banner) = banner {
        let _ = writeln!(out, "{}", render_banner(banner));
    }
}
