use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    /// The regex engine refused the generated program, usually because a very
    /// long token list exceeded its compiled size limit.
    #[error("Failed to build matcher from /{pattern}/: {source}")]
    RegexBuildError {
        pattern: String,
        source: regex::Error,
    },
}
