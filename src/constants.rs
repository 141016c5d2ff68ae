pub const DEFAULT_API_URL: &str = "https://api-9qmg.onrender.com/api";

/// Limit used by `get_top_skills` when the caller has no preference.
pub const DEFAULT_TOP_SKILLS_LIMIT: usize = 10;
pub const DASHBOARD_TOP_SKILLS: usize = 5;

/// Projects shown in full on a profile card before collapsing to "+N more".
pub const CARD_PROJECT_PREVIEW: usize = 2;

pub const CONFIRM_DELETE_PROMPT: &str = "Are you sure you want to delete this profile?";
