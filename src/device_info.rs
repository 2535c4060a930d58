use crate::locale::{Localizer, Message};
use crate::radio::RadioManager;

pub const KEY_MAC_ADDRESS: &str = "mac_address";
pub const KEY_HW_VERSION: &str = "hw_version";
pub const KEY_SW_VERSION: &str = "sw_version";
pub const KEY_IP_ADDRESS: &str = "ip_address";
pub const KEY_GATEWAY: &str = "gateway";

/// One read-only row of the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoField {
    pub key: &'static str,
    pub title: String,
    pub value: String,
}

/// Read-only panel of device identity and IP details
#[derive(Debug, Clone)]
pub struct DeviceInfoPanel {
    fields: Vec<InfoField>,
}

impl DeviceInfoPanel {
    pub fn new(localizer: &dyn Localizer) -> Self {
        let fields = [
            (KEY_MAC_ADDRESS, Message::MacAddress),
            (KEY_HW_VERSION, Message::HwVersion),
            (KEY_SW_VERSION, Message::SwVersion),
            (KEY_IP_ADDRESS, Message::IpAddress),
            (KEY_GATEWAY, Message::Gateway),
        ]
        .into_iter()
        .map(|(key, title)| InfoField {
            key,
            title: localizer.text(title),
            value: String::new(),
        })
        .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[InfoField] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
    }

    /// Re-read every value from the radio. Missing values show as
    /// unavailable.
    pub fn refresh(&mut self, manager: &dyn RadioManager, localizer: &dyn Localizer) {
        let device = manager.device_info();
        let ip = manager.ip_info();

        let values = [
            (
                KEY_MAC_ADDRESS,
                device.as_ref().map(|d| d.mac_address_string()),
            ),
            (KEY_HW_VERSION, device.as_ref().map(|d| d.hw_version.clone())),
            (KEY_SW_VERSION, device.as_ref().map(|d| d.sw_version.clone())),
            (KEY_IP_ADDRESS, Some(ip.ip_address)),
            (KEY_GATEWAY, Some(ip.gateway)),
        ];

        for (key, value) in values {
            let text = value
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| localizer.text(Message::Unavailable));
            if let Some(field) = self.fields.iter_mut().find(|f| f.key == key) {
                field.value = text;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::EnglishLocalizer;
    use crate::radio::{DeviceInfo, IpInfo, MockRadioManager};

    fn manager(device: Option<DeviceInfo>) -> MockRadioManager {
        let mut manager = MockRadioManager::new();
        manager.expect_device_info().return_const(device);
        manager.expect_ip_info().return_const(IpInfo::default());
        manager
    }

    #[test]
    fn missing_device_info_shows_unavailable_everywhere() {
        let mut panel = DeviceInfoPanel::new(&EnglishLocalizer);
        panel.refresh(&manager(None), &EnglishLocalizer);

        for field in panel.fields() {
            assert_eq!(field.value, "Unavailable", "{}", field.key);
        }
    }

    #[test]
    fn empty_hw_version_is_unavailable_others_shown() {
        let device = DeviceInfo {
            mac_address: [0x00, 0x1e, 0x31, 0x4a, 0x7b, 0x02],
            hw_version: String::new(),
            sw_version: "4.6.1057".into(),
        };
        let mut panel = DeviceInfoPanel::new(&EnglishLocalizer);
        panel.refresh(&manager(Some(device)), &EnglishLocalizer);

        assert_eq!(panel.field(KEY_MAC_ADDRESS), Some("00:1e:31:4a:7b:02"));
        assert_eq!(panel.field(KEY_HW_VERSION), Some("Unavailable"));
        assert_eq!(panel.field(KEY_SW_VERSION), Some("4.6.1057"));
        assert_eq!(panel.field(KEY_IP_ADDRESS), Some("Unavailable"));
        assert_eq!(panel.field(KEY_GATEWAY), Some("Unavailable"));
    }

    #[test]
    fn refresh_overwrites_previous_values() {
        let device = DeviceInfo {
            hw_version: "WMX-RF 2.1".into(),
            ..Default::default()
        };
        let mut panel = DeviceInfoPanel::new(&EnglishLocalizer);
        panel.refresh(&manager(Some(device)), &EnglishLocalizer);
        assert_eq!(panel.field(KEY_HW_VERSION), Some("WMX-RF 2.1"));

        panel.refresh(&manager(None), &EnglishLocalizer);
        assert_eq!(panel.field(KEY_HW_VERSION), Some("Unavailable"));
    }

    #[test]
    fn titles_come_from_the_localizer() {
        let panel = DeviceInfoPanel::new(&EnglishLocalizer);
        let titles: Vec<_> = panel.fields().iter().map(|f| f.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "MAC address",
                "Hardware version",
                "Software version",
                "IP address",
                "Gateway"
            ]
        );
        assert_eq!(panel.field("unknown"), None);
    }
}
