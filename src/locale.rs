//! Display strings for the settings screens.

/// Keys for every user-visible message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    RadioTitle,
    RadioSummary,
    AirplaneTitle,
    AirplaneSummary,
    AdvancedTitle,
    AdvancedSummary,
    Starting,
    Stopping,
    StartFailed,
    StopFailed,
    RadioError,
    Scanning,
    Connecting,
    ConnectingTo,
    Connected,
    ConnectedTo,
    Disconnecting,
    DisconnectingFrom,
    Disconnected,
    Unavailable,
    MacAddress,
    HwVersion,
    SwVersion,
    IpAddress,
    Gateway,
}

/// Resolves message keys to display text
pub trait Localizer: Send + Sync {
    fn text(&self, message: Message) -> String;

    /// Resolve a message whose text carries one `{}` placeholder
    fn format(&self, message: Message, arg: &str) -> String {
        self.text(message).replacen("{}", arg, 1)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishLocalizer;

impl EnglishLocalizer {
    fn template(message: Message) -> &'static str {
        match message {
            Message::RadioTitle => "WiMAX",
            Message::RadioSummary => "Turn on WiMAX",
            Message::AirplaneTitle => "Airplane mode",
            Message::AirplaneSummary => "Disable all wireless connections",
            Message::AdvancedTitle => "Advanced settings",
            Message::AdvancedSummary => "Device and IP information",
            Message::Starting => "Starting…",
            Message::Stopping => "Stopping…",
            Message::StartFailed => "Unable to start WiMAX",
            Message::StopFailed => "Unable to stop WiMAX",
            Message::RadioError => "Error",
            Message::Scanning => "Scanning…",
            Message::Connecting => "Connecting…",
            Message::ConnectingTo => "Connecting to {}…",
            Message::Connected => "Connected",
            Message::ConnectedTo => "Connected to {}",
            Message::Disconnecting => "Disconnecting…",
            Message::DisconnectingFrom => "Disconnecting from {}…",
            Message::Disconnected => "Disconnected",
            Message::Unavailable => "Unavailable",
            Message::MacAddress => "MAC address",
            Message::HwVersion => "Hardware version",
            Message::SwVersion => "Software version",
            Message::IpAddress => "IP address",
            Message::Gateway => "Gateway",
        }
    }
}

impl Localizer for EnglishLocalizer {
    fn text(&self, message: Message) -> String {
        Self::template(message).to_string()
    }
}
