// Models module - GitHub API data structures

pub mod responses;

pub use responses::*;
