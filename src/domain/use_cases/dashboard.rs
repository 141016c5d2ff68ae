use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::{
    entities::skill::SkillCount,
    errors::AppError,
    repositories::profile_api::ProfileApi,
    use_cases::{guarded, InFlight, PageStatus},
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MetricStatus {
    #[default]
    Pending,
    Fresh,
    /// The last fetch failed; the value is whatever was loaded before.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metric<T> {
    pub value: T,
    pub status: MetricStatus,
}

impl<T> Metric<T> {
    fn apply(&mut self, name: &'static str, result: Result<T, AppError>) {
        match result {
            Ok(value) => {
                self.value = value;
                self.status = MetricStatus::Fresh;
            }
            Err(AppError::Cancelled) => {}
            Err(e) => {
                tracing::warn!(metric = name, error = %e, "Failed to fetch dashboard metric");
                self.status = MetricStatus::Failed(e.user_message("unavailable"));
            }
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, MetricStatus::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardStats {
    pub total_profiles: Metric<u64>,
    pub total_projects: Metric<u64>,
    pub top_skills: Metric<Vec<SkillCount>>,
}

impl DashboardStats {
    pub fn unique_skills(&self) -> usize {
        self.top_skills.value.len()
    }

    fn all_failed(&self) -> bool {
        self.total_profiles.is_failed() && self.total_projects.is_failed() && self.top_skills.is_failed()
    }
}

pub struct DashboardPage<A>
where
    A: ProfileApi,
{
    api: Arc<A>,
    cancel: CancellationToken,
    top_skills_limit: usize,
    pub stats: DashboardStats,
    pub status: PageStatus,
}

impl<A> DashboardPage<A>
where
    A: ProfileApi,
{
    pub fn new(api: Arc<A>, cancel: CancellationToken, top_skills_limit: usize) -> Self {
        DashboardPage {
            api,
            cancel,
            top_skills_limit,
            stats: DashboardStats::default(),
            status: PageStatus::Idle,
        }
    }

    /// Fetches the three metrics concurrently and waits for all of them.
    /// A failed metric keeps its previous value and is flagged; the others
    /// still update.
    pub async fn refresh(&mut self) {
        if self.status == PageStatus::Loading || self.cancel.is_cancelled() {
            return;
        }
        let api = Arc::clone(&self.api);
        let (profiles, projects, skills) = {
            let _in_flight = InFlight::begin(&mut self.status);
            tokio::join!(
                guarded(&self.cancel, api.get_all_profiles()),
                guarded(&self.cancel, api.get_all_projects()),
                guarded(&self.cancel, api.get_top_skills(Some(self.top_skills_limit))),
            )
        };

        if self.cancel.is_cancelled() {
            self.status = PageStatus::Idle;
            return;
        }

        self.stats.total_profiles.apply("total_profiles", profiles.map(|r| r.count));
        self.stats.total_projects.apply("total_projects", projects.map(|r| r.count));
        self.stats.top_skills.apply("top_skills", skills.map(|r| r.data));

        self.status = if self.stats.all_failed() {
            PageStatus::Error
        } else {
            PageStatus::Success
        };
    }
}

impl<A> Drop for DashboardPage<A>
where
    A: ProfileApi,
{
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::envelope::{AggregateCount, Envelope, ProfileList},
        repositories::profile_api::MockProfileApi,
    };

    fn skills() -> Vec<SkillCount> {
        vec![
            SkillCount { skill_name: "Python".into(), count: 3 },
            SkillCount { skill_name: "React".into(), count: 2 },
        ]
    }

    fn healthy_api() -> MockProfileApi {
        let mut api = MockProfileApi::new();
        api.expect_get_all_profiles()
            .returning(|| Ok(ProfileList { success: true, count: 4, data: vec![] }));
        api.expect_get_all_projects()
            .returning(|| Ok(AggregateCount { success: true, count: 9 }));
        api.expect_get_top_skills()
            .withf(|limit| *limit == Some(5))
            .returning(|_| Ok(Envelope { success: true, data: skills(), count: Some(2), message: None }));
        api
    }

    #[tokio::test]
    async fn aggregates_all_three_metrics() {
        let mut page = DashboardPage::new(Arc::new(healthy_api()), CancellationToken::new(), 5);
        page.refresh().await;

        assert_eq!(page.status, PageStatus::Success);
        assert_eq!(page.stats.total_profiles.value, 4);
        assert_eq!(page.stats.total_projects.value, 9);
        assert_eq!(page.stats.unique_skills(), 2);
        assert_eq!(page.stats.top_skills.status, MetricStatus::Fresh);
    }

    #[tokio::test]
    async fn partial_failure_flags_only_the_failed_metric() {
        let mut api = MockProfileApi::new();
        api.expect_get_all_profiles()
            .returning(|| Ok(ProfileList { success: true, count: 4, data: vec![] }));
        api.expect_get_all_projects()
            .returning(|| Err(AppError::Server { status: 500, message: Some("db down".into()) }));
        api.expect_get_top_skills()
            .returning(|_| Ok(Envelope { success: true, data: skills(), count: None, message: None }));

        let mut page = DashboardPage::new(Arc::new(api), CancellationToken::new(), 5);
        page.refresh().await;

        assert_eq!(page.status, PageStatus::Success);
        assert_eq!(page.stats.total_profiles.status, MetricStatus::Fresh);
        assert_eq!(page.stats.total_projects.value, 0);
        assert_eq!(page.stats.total_projects.status, MetricStatus::Failed("db down".into()));
        assert_eq!(page.stats.unique_skills(), 2);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_values() {
        let mut api = MockProfileApi::new();
        let mut seq = mockall::Sequence::new();
        api.expect_get_all_profiles()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(ProfileList { success: true, count: 4, data: vec![] }));
        api.expect_get_all_profiles()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(AppError::Network("connection reset".into())));
        api.expect_get_all_projects()
            .returning(|| Err(AppError::Network("connection reset".into())));
        api.expect_get_top_skills()
            .returning(|_| Err(AppError::Network("connection reset".into())));

        let mut page = DashboardPage::new(Arc::new(api), CancellationToken::new(), 5);
        page.refresh().await;
        assert_eq!(page.stats.total_profiles.value, 4);

        page.refresh().await;
        assert_eq!(page.status, PageStatus::Error);
        assert_eq!(page.stats.total_profiles.value, 4);
        assert!(page.stats.total_profiles.is_failed());
    }

    #[tokio::test]
    async fn cancelled_page_leaves_stats_untouched() {
        let token = CancellationToken::new();
        token.cancel();
        let mut page = DashboardPage::new(Arc::new(MockProfileApi::new()), token, 5);
        page.refresh().await;

        assert_eq!(page.status, PageStatus::Idle);
        assert_eq!(page.stats, DashboardStats::default());
    }
}
