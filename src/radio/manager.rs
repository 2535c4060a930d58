use crate::radio::types::{DeviceInfo, IpInfo, RadioStatus};

/// Control surface of the radio service
#[cfg_attr(test, mockall::automock)]
pub trait RadioManager: Send + Sync {
    fn status(&self) -> RadioStatus;

    fn is_enabled(&self) -> bool;

    /// Request the radio on or off. Returns false when the request is
    /// rejected outright; the outcome of an accepted request arrives later
    /// as a status event.
    fn set_enabled(&self, enable: bool) -> bool;

    fn device_info(&self) -> Option<DeviceInfo>;

    fn ip_info(&self) -> IpInfo;
}
