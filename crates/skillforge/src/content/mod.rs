//! Static marketing content rendered by the site pages.

pub mod courses;
pub mod projects;
