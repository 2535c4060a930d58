//! Radio service module for WimaxUI
//!
//! This module defines the collaborator interfaces the settings screens talk
//! to (control, notifications, and connection details) together with an
//! in-memory backend that implements all of them.

mod connection;
mod listener;
mod manager;
mod simulated;
mod types;

// Re-export public API
pub use connection::ConnectionLayer;
pub use listener::{EventSource, RadioEventHandler, Subscription};
pub use manager::RadioManager;
pub use simulated::{SimOptions, SimulatedRadio};
pub use types::{ConnectionState, DeviceInfo, IpInfo, RadioEvent, RadioStatus};

#[cfg(test)]
pub use connection::MockConnectionLayer;
#[cfg(test)]
pub use manager::MockRadioManager;
