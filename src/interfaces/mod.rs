pub mod cli;
pub mod presenters;
pub mod repositories;
pub mod shell;
