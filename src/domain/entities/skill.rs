use serde::{Deserialize, Serialize};

/// One row of the service's skill frequency aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCount {
    #[serde(rename = "_id", alias = "skillName")]
    pub skill_name: String,
    pub count: u64,
}

/// Orders by non-increasing count and keeps at most `limit` entries.
/// The sort is stable, so ties keep the order the service sent.
pub fn rank_top_skills(mut skills: Vec<SkillCount>, limit: usize) -> Vec<SkillCount> {
    skills.sort_by(|a, b| b.count.cmp(&a.count));
    skills.truncate(limit);
    skills
}
