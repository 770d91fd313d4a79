use yze_dice::YzeError;

/// Convenience result type for odds runs.
pub type OddsResult<T> = Result<T, OddsError>;

/// Errors that can occur while setting up or running an odds run.
#[derive(Debug, thiserror::Error)]
pub enum OddsError {
    /// The run was configured with zero trials.
    #[error("number of trials must be at least 1")]
    NoTrials,

    /// A face list contained something other than a digit.
    #[error("invalid {channel} faces: '{found}' is not a digit")]
    NotADigit {
        /// Channel the faces were given for.
        channel: &'static str,
        /// The offending character.
        found: char,
    },

    /// The dice engine rejected the configuration.
    #[error(transparent)]
    Dice(#[from] YzeError),
}
