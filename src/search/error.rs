use thiserror::Error;

/// Errors raised while setting up a search. These are caller mistakes and are
/// reported before any node is expanded; failing to find a path is not an
/// error and is represented in the search results instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("goals must be a non-empty set")]
    EmptyGoals,
}
