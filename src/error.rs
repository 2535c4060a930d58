/// Typed errors for radio backend operations
use crate::radio::RadioStatus;
use thiserror::Error;

/// Result type alias for radio operations
pub type RadioResult<T> = Result<T, RadioError>;

/// Errors that can occur while driving the radio
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RadioError {
    #[error("Radio is busy ({status})")]
    TransitionInProgress { status: RadioStatus },

    #[error("Radio service refused to turn {}", on_off(.enable))]
    RequestRejected { enable: bool },
}

fn on_off(enable: &bool) -> &'static str {
    if *enable { "on" } else { "off" }
}
