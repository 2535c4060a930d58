use std::fmt;

/// Power/admin state of the radio hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadioStatus {
    #[default]
    Disabled,
    Disabling,
    Enabled,
    Enabling,
    Unknown,
}

impl RadioStatus {
    /// True while the radio is moving between on and off
    pub fn is_transitioning(self) -> bool {
        matches!(self, RadioStatus::Enabling | RadioStatus::Disabling)
    }
}

impl fmt::Display for RadioStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RadioStatus::Disabled => "Disabled",
            RadioStatus::Disabling => "Disabling",
            RadioStatus::Enabled => "Enabled",
            RadioStatus::Enabling => "Enabling",
            RadioStatus::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Network association state, only meaningful while the radio is enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Scanning,
    Connecting,
    Connected,
    Disconnecting,
    Disconnected,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectionState::Scanning => "Scanning",
            ConnectionState::Connecting => "Connecting",
            ConnectionState::Connected => "Connected",
            ConnectionState::Disconnecting => "Disconnecting",
            ConnectionState::Disconnected => "Disconnected",
        };
        f.write_str(name)
    }
}

/// Identity of the radio device
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub mac_address: [u8; 6],
    pub hw_version: String,
    pub sw_version: String,
}

impl DeviceInfo {
    pub fn mac_address_string(&self) -> String {
        self.mac_address
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(":")
    }
}

/// IP configuration of the radio link
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IpInfo {
    pub ip_address: String,
    pub gateway: String,
}

/// Events delivered by a radio event source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioEvent {
    StatusChanged {
        status: RadioStatus,
        previous: RadioStatus,
    },
    ConnectionStateChanged(ConnectionState),
}
