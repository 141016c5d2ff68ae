pub mod envelope;
pub mod form;
pub mod profile;
pub mod skill;
