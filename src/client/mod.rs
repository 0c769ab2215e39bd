// Client module - GitHub REST API client
pub mod api;

pub use api::{GitHubClient, build_headers};
