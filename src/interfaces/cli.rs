use clap::{Args, Parser, Subcommand};

use crate::{entities::form::ProfileForm, interfaces::shell::Page};

/// Top-level parser for the `skillboard` binary.
#[derive(Debug, Parser)]
#[command(name = "skillboard", version, about = "Create, list and search skill profiles")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Profile service base URL, e.g. http://localhost:5000/api
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Answer yes to every delete confirmation
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Profile, project and top-skill totals
    Dashboard,
    /// Create a profile
    Create(CreateArgs),
    /// List every profile
    List {
        /// Show one profile in full
        #[arg(long)]
        open: Option<String>,
        /// Delete the profile with this id
        #[arg(long)]
        delete: Option<String>,
    },
    /// Find profiles with a skill
    Search {
        skill: String,
        /// Delete the matching profile with this id
        #[arg(long)]
        delete: Option<String>,
    },
    /// Look a profile up by email
    View {
        email: String,
        /// Delete the profile once found
        #[arg(long)]
        delete: bool,
    },
    /// Check that the profile service is up
    Health,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, default_value = "")]
    pub education: String,
    /// Comma separated, e.g. "Python, React"
    #[arg(long, default_value = "")]
    pub skills: String,
    #[arg(long, default_value = "")]
    pub project_title: String,
    #[arg(long, default_value = "")]
    pub project_description: String,
    #[arg(long, default_value = "")]
    pub project_link: String,
    #[arg(long, default_value = "")]
    pub github: String,
    #[arg(long, default_value = "")]
    pub linkedin: String,
    #[arg(long, default_value = "")]
    pub portfolio: String,
}

impl From<CreateArgs> for ProfileForm {
    fn from(args: CreateArgs) -> Self {
        ProfileForm {
            name: args.name,
            email: args.email,
            education: args.education,
            skills: args.skills,
            project_title: args.project_title,
            project_description: args.project_description,
            project_link: args.project_link,
            github: args.github,
            linkedin: args.linkedin,
            portfolio: args.portfolio,
        }
    }
}

impl From<Commands> for Page {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Dashboard => Page::Dashboard,
            Commands::Create(args) => Page::Create(args.into()),
            Commands::List { open, delete } => Page::List { open, delete },
            Commands::Search { skill, delete } => Page::Search { skill, delete },
            Commands::View { email, delete } => Page::View { email, delete },
            Commands::Health => Page::Health,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn create_maps_onto_form() {
        let cli = Cli::try_parse_from([
            "skillboard",
            "create",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--skills",
            "Python, React",
        ])
        .expect("cli should parse");

        let Page::Create(form) = Page::from(cli.command) else {
            panic!("expected create page");
        };
        assert_eq!(form.name, "Ada");
        assert_eq!(form.skills, "Python, React");
        assert!(form.github.is_empty());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "skillboard",
            "view",
            "ada@example.com",
            "--delete",
            "--yes",
            "--api-url",
            "http://localhost:5000/api",
        ])
        .expect("cli should parse");

        assert!(cli.yes);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:5000/api"));
        assert!(matches!(
            Page::from(cli.command),
            Page::View { ref email, delete: true } if email == "ada@example.com"
        ));
    }
}
