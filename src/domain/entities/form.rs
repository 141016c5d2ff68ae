use crate::{
    entities::profile::{NewProfile, Project, SocialLinks, WorkEntry},
    utils::validation::non_blank,
};

/// Flat state of the create-profile form, one field per input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub education: String,
    /// Comma separated, e.g. `"Python, React"`.
    pub skills: String,
    pub project_title: String,
    pub project_description: String,
    pub project_link: String,
    pub github: String,
    pub linkedin: String,
    pub portfolio: String,
}

impl ProfileForm {
    pub fn clear(&mut self) {
        *self = ProfileForm::default();
    }

    /// Composes the request body. Input is not validated here.
    pub fn to_new_profile(&self) -> NewProfile {
        let projects = non_blank(&self.project_title)
            .map(|title| Project {
                title,
                description: non_blank(&self.project_description),
                links: non_blank(&self.project_link),
            })
            .into_iter()
            .collect();

        let links = SocialLinks {
            github: non_blank(&self.github),
            linkedin: non_blank(&self.linkedin),
            portfolio: non_blank(&self.portfolio),
        };

        NewProfile {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            education: non_blank(&self.education),
            skills: parse_skills(&self.skills),
            projects,
            work: vec![WorkEntry {
                links: (!links.is_empty()).then_some(links),
            }],
        }
    }
}

/// Splits on commas, trims, drops empty pieces. Duplicates are kept.
pub fn parse_skills(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
