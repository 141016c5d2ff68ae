use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder};
use serde::de::DeserializeOwned;
use urlencoding::encode;

use crate::{
    constants::DEFAULT_TOP_SKILLS_LIMIT,
    entities::{
        envelope::{AggregateCount, DeleteAck, Envelope, HealthStatus, ProfileList},
        profile::{NewProfile, Profile},
        skill::{rank_top_skills, SkillCount},
    },
    errors::AppError,
    repositories::profile_api::ProfileApi,
    settings::AppConfig,
};

/// reqwest-backed [`ProfileApi`] bound to one service base URL.
#[derive(Debug, Clone)]
pub struct HttpProfileApi {
    http: Client,
    base_url: String,
}

impl HttpProfileApi {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(HttpProfileApi {
            http,
            base_url: config.base_url().to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `{base}{prefix}/{segment}` with the segment percent-encoded, so ids,
    /// emails and skills like `C#` survive the trip.
    fn segment_url(&self, prefix: &str, segment: &str) -> String {
        format!("{}{}/{}", self.base_url, prefix, encode(segment))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        let response = request
            .send()
            .await
            .inspect_err(|e| tracing::warn!("Profile service unreachable: {}", e))?;

        let response = super::response::check_response(response).await?;

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ProfileApi for HttpProfileApi {
    async fn create_profile(&self, profile: &NewProfile) -> Result<Envelope<Profile>, AppError> {
        self.send(self.http.post(self.url("/profile")).json(profile)).await
    }

    async fn get_all_profiles(&self) -> Result<ProfileList, AppError> {
        self.send(self.http.get(self.url("/profiles"))).await
    }

    async fn get_profile_by_id(&self, id: &str) -> Result<Envelope<Profile>, AppError> {
        self.send(self.http.get(self.segment_url("/profile", id))).await
    }

    async fn get_profile_by_email(&self, email: &str) -> Result<Envelope<Profile>, AppError> {
        self.send(self.http.get(self.segment_url("/profile/email", email))).await
    }

    async fn update_profile(&self, id: &str, profile: &NewProfile) -> Result<Envelope<Profile>, AppError> {
        self.send(self.http.put(self.segment_url("/profile", id)).json(profile)).await
    }

    async fn delete_profile(&self, id: &str) -> Result<DeleteAck, AppError> {
        self.send(self.http.delete(self.segment_url("/profile", id))).await
    }

    async fn search_by_skill(&self, skill: &str) -> Result<ProfileList, AppError> {
        self.send(self.http.get(self.segment_url("/search/skill", skill))).await
    }

    async fn get_all_projects(&self) -> Result<AggregateCount, AppError> {
        self.send(self.http.get(self.url("/projects"))).await
    }

    async fn get_top_skills(&self, limit: Option<usize>) -> Result<Envelope<Vec<SkillCount>>, AppError> {
        let limit = limit.unwrap_or(DEFAULT_TOP_SKILLS_LIMIT);
        let request = self.http.get(self.url("/top-skills")).query(&[("limit", limit)]);
        let mut envelope: Envelope<Vec<SkillCount>> = self.send(request).await?;
        envelope.data = rank_top_skills(envelope.data, limit);
        Ok(envelope)
    }

    async fn health_check(&self) -> Result<HealthStatus, AppError> {
        self.send(self.http.get(self.url("/health"))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_onto_base_url() {
        let config = AppConfig::default()
            .with_api_base_url("http://localhost:5000/api/")
            .unwrap();
        let api = HttpProfileApi::new(&config).unwrap();
        assert_eq!(api.url("/profiles"), "http://localhost:5000/api/profiles");
    }

    #[test]
    fn path_segments_are_percent_encoded() {
        let config = AppConfig::default()
            .with_api_base_url("http://localhost:5000/api")
            .unwrap();
        let api = HttpProfileApi::new(&config).unwrap();

        assert_eq!(
            api.segment_url("/profile/email", "ada+test@example.com"),
            "http://localhost:5000/api/profile/email/ada%2Btest%40example.com"
        );
        assert_eq!(
            api.segment_url("/search/skill", "C# / .NET"),
            "http://localhost:5000/api/search/skill/C%23%20%2F%20.NET"
        );
    }
}
