use snafu::Snafu;

/// Shown when estimation failed but the same call goes through read-only.
pub const ESTIMATION_RETRY_MESSAGE: &str =
    "Unexpected issue with estimating the gas. Please try again.";

/// Shown when the node estimated zero gas, which is never submitted.
pub const ZERO_ESTIMATE_MESSAGE: &str =
    "Gas estimation returned zero gas units. Please try again.";

/// Failures of a single callback execution.
///
/// Every variant is scoped to one `execute()` call; none of them are retried by the pipeline.
#[derive(Debug, Snafu)]
pub enum CallbackError {
    /// An intent argument was missing or invalid at call time, the auxiliary data could
    /// not be resolved, or the call could not be encoded.
    #[snafu(display("{message}"))]
    Construction { message: String },

    /// Gas estimation failed although the call itself does not revert.
    #[snafu(display("{message}"))]
    Estimation { message: String },

    /// Gas estimation failed and the read-only call reverted too. `message` is the
    /// read-only call's own failure message.
    #[snafu(display("{message}"))]
    RevertedCall {
        message: String,
        /// Revert reason extracted from the message or the revert data, when recognisable.
        reason: Option<String>,
    },

    #[snafu(display("Transaction rejected."))]
    UserRejected,

    #[snafu(display("Transaction failed: {message}"))]
    Submission { message: String, code: Option<i64> },
}

impl CallbackError {
    /// Text suitable for a toast: the bare revert reason for reverted calls, the display
    /// string otherwise.
    pub fn user_message(&self) -> String {
        match self {
            CallbackError::RevertedCall {
                reason: Some(reason),
                ..
            } => reason.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_user_rejection(&self) -> bool {
        matches!(self, CallbackError::UserRejected)
    }
}
