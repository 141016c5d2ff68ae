use async_trait::async_trait;

use crate::{
    entities::{
        envelope::{AggregateCount, DeleteAck, Envelope, HealthStatus, ProfileList},
        profile::{NewProfile, Profile},
        skill::SkillCount,
    },
    errors::AppError,
};

/// One method per remote operation of the profile service.
///
/// Every call is a fresh request. Non-2xx replies surface as
/// [`AppError::NotFound`] (404) or [`AppError::Server`]; a missing reply is
/// [`AppError::Network`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn create_profile(&self, profile: &NewProfile) -> Result<Envelope<Profile>, AppError>;
    async fn get_all_profiles(&self) -> Result<ProfileList, AppError>;
    async fn get_profile_by_id(&self, id: &str) -> Result<Envelope<Profile>, AppError>;
    async fn get_profile_by_email(&self, email: &str) -> Result<Envelope<Profile>, AppError>;
    async fn update_profile(&self, id: &str, profile: &NewProfile) -> Result<Envelope<Profile>, AppError>;
    async fn delete_profile(&self, id: &str) -> Result<DeleteAck, AppError>;
    /// An empty result is a successful reply, not an error.
    async fn search_by_skill(&self, skill: &str) -> Result<ProfileList, AppError>;
    async fn get_all_projects(&self) -> Result<AggregateCount, AppError>;
    /// At most `limit` entries (10 when `None`), ordered by non-increasing count.
    async fn get_top_skills(&self, limit: Option<usize>) -> Result<Envelope<Vec<SkillCount>>, AppError>;
    async fn health_check(&self) -> Result<HealthStatus, AppError>;
}
