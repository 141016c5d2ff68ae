pub mod banner;
pub mod dashboard;
pub mod profile_card;
