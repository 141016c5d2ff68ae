use std::fmt;

use crate::{
    constants::CARD_PROJECT_PREVIEW,
    entities::profile::{Profile, Project},
};

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectsSection<'a> {
    pub total: usize,
    pub shown: &'a [Project],
    pub remaining: usize,
}

impl ProjectsSection<'_> {
    pub fn more_label(&self) -> Option<String> {
        (self.remaining > 0).then(|| format!("+{} more project(s)", self.remaining))
    }
}

/// What a profile card may show; absent sections are `None` or empty.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSections<'a> {
    pub education: Option<&'a str>,
    pub skills: Option<&'a [String]>,
    pub projects: Option<ProjectsSection<'a>>,
    pub links: Vec<(&'static str, &'a str)>,
    pub created_on: Option<String>,
}

/// Renders one profile. Used for list entries, search hits, the email
/// lookup and the list page's detail modal.
#[derive(Debug, Clone, Copy)]
pub struct ProfileCard<'a> {
    profile: &'a Profile,
    show_view: bool,
    show_delete: bool,
}

impl<'a> ProfileCard<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        ProfileCard { profile, show_view: false, show_delete: false }
    }

    pub fn with_view_action(mut self) -> Self {
        self.show_view = true;
        self
    }

    pub fn with_delete_action(mut self) -> Self {
        self.show_delete = true;
        self
    }

    pub fn sections(&self) -> CardSections<'a> {
        let profile = self.profile;

        let skills = (!profile.skills.is_empty()).then_some(profile.skills.as_slice());

        let projects = (!profile.projects.is_empty()).then(|| {
            let shown = &profile.projects[..profile.projects.len().min(CARD_PROJECT_PREVIEW)];
            ProjectsSection {
                total: profile.projects.len(),
                shown,
                remaining: profile.projects.len() - shown.len(),
            }
        });

        let links = profile
            .primary_links()
            .map(|links| links.entries())
            .unwrap_or_default();

        CardSections {
            education: profile.education(),
            skills,
            projects,
            links,
            created_on: profile.created_at.map(|at| at.format("%Y-%m-%d").to_string()),
        }
    }

    fn actions(&self) -> Vec<String> {
        let mut actions = Vec::new();
        if self.show_view {
            actions.push(format!("view: --open {}", self.profile.id));
        }
        if self.show_delete {
            actions.push(format!("delete: --delete {}", self.profile.id));
        }
        actions
    }
}

impl fmt::Display for ProfileCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections = self.sections();

        writeln!(f, "{}", self.profile.name)?;
        writeln!(f, "  Email: {}", self.profile.email)?;
        if let Some(education) = sections.education {
            writeln!(f, "  Education: {}", education)?;
        }
        if let Some(skills) = sections.skills {
            writeln!(f, "  Skills: {}", skills.join(", "))?;
        }
        if let Some(projects) = &sections.projects {
            writeln!(f, "  Projects ({}):", projects.total)?;
            for project in projects.shown {
                writeln!(f, "    - {}", project.title)?;
                if let Some(description) = project.description() {
                    writeln!(f, "      {}", description)?;
                }
                if let Some(link) = project.link() {
                    writeln!(f, "      View Project: {}", link)?;
                }
            }
            if let Some(more) = projects.more_label() {
                writeln!(f, "    {}", more)?;
            }
        }
        if !sections.links.is_empty() {
            let links = sections.links.iter()
                .map(|(label, url)| format!("{}: {}", label, url))
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(f, "  Links: {}", links)?;
        }
        let actions = self.actions();
        if !actions.is_empty() {
            writeln!(f, "  [{}]", actions.join("] ["))?;
        }
        if let Some(created) = sections.created_on {
            writeln!(f, "  Created: {}", created)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::entities::profile::{SocialLinks, WorkEntry};

    fn project(title: &str) -> Project {
        Project { title: title.into(), description: None, links: None }
    }

    fn bare_profile() -> Profile {
        Profile {
            id: "p1".into(),
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            education: None,
            skills: vec![],
            projects: vec![],
            work: vec![],
            created_at: None,
        }
    }

    #[test]
    fn five_projects_show_two_and_three_more() {
        let profile = Profile {
            projects: (1..=5).map(|i| project(&format!("P{}", i))).collect(),
            ..bare_profile()
        };
        let sections = ProfileCard::new(&profile).sections();
        let projects = sections.projects.unwrap();

        assert_eq!(projects.total, 5);
        assert_eq!(projects.shown.len(), 2);
        assert_eq!(projects.shown[0].title, "P1");
        assert_eq!(projects.more_label().unwrap(), "+3 more project(s)");
    }

    #[test]
    fn two_projects_have_no_more_label() {
        let profile = Profile { projects: vec![project("A"), project("B")], ..bare_profile() };
        let projects = ProfileCard::new(&profile).sections().projects.unwrap();
        assert_eq!(projects.remaining, 0);
        assert!(projects.more_label().is_none());
    }

    #[test]
    fn empty_sections_are_omitted() {
        let profile = bare_profile();
        let sections = ProfileCard::new(&profile).sections();
        assert!(sections.skills.is_none());
        assert!(sections.projects.is_none());
        assert!(sections.links.is_empty());

        let rendered = ProfileCard::new(&profile).to_string();
        assert!(!rendered.contains("Skills"));
        assert!(!rendered.contains("Projects"));
        assert!(!rendered.contains("Links"));
    }

    #[test]
    fn only_first_work_entry_links_are_shown() {
        let profile = Profile {
            work: vec![
                WorkEntry {
                    links: Some(SocialLinks {
                        linkedin: Some("https://linkedin.com/in/ada".into()),
                        ..SocialLinks::default()
                    }),
                },
                WorkEntry {
                    links: Some(SocialLinks {
                        github: Some("https://github.com/ada".into()),
                        ..SocialLinks::default()
                    }),
                },
            ],
            ..bare_profile()
        };
        let sections = ProfileCard::new(&profile).sections();
        assert_eq!(sections.links, vec![("LinkedIn", "https://linkedin.com/in/ada")]);
    }

    #[test]
    fn renders_full_card() {
        let profile = Profile {
            education: Some("B.Sc. Mathematics".into()),
            skills: vec!["Python".into(), "React".into()],
            projects: vec![Project {
                title: "Engine".into(),
                description: Some("Difference engine notes".into()),
                links: Some("https://example.com/engine".into()),
            }],
            created_at: Some(Utc.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).unwrap()),
            ..bare_profile()
        };
        let rendered = ProfileCard::new(&profile).with_delete_action().to_string();

        assert!(rendered.contains("Education: B.Sc. Mathematics"));
        assert!(rendered.contains("Skills: Python, React"));
        assert!(rendered.contains("Projects (1):"));
        assert!(rendered.contains("View Project: https://example.com/engine"));
        assert!(rendered.contains("delete: --delete p1"));
        assert!(rendered.contains("Created: 2024-03-14"));
    }
}
