use serde::Serialize;

/// A "why learn this" card shown alongside the course modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CourseHighlight {
    pub title: &'static str,
    pub hook: &'static str,
    pub summary: &'static str,
    pub topics: &'static [&'static str],
}

const HIGHLIGHTS: [CourseHighlight; 1] = [CourseHighlight {
    title: "Git & GitHub",
    hook: "Why learn this",
    summary: "A code hosting platform for version control and collaboration.",
    topics: &[
        "Git Basics",
        "Git Commands",
        "Clone a Repository",
        "Git Branching",
        "Merging",
        "Git Stash",
    ],
}];

pub fn highlights() -> &'static [CourseHighlight] {
    &HIGHLIGHTS
}
