#[derive(thiserror::Error, Debug)]
pub enum RankingError {
    /// a failed candidate fetch is a hard fault: fabricating a route from a
    /// failed read is unsafe in an evacuation context, so unlike severity
    /// estimation this path surfaces to the caller.
    #[error("failure fetching evacuation route candidates from '{from_location}': {message}")]
    CandidateSource {
        from_location: String,
        message: String,
    },
}
