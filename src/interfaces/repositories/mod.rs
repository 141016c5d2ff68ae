pub mod profile_api;
