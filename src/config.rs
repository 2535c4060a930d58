/// Centralized configuration constants for WimaxUI

// UI Dimensions
pub const MAIN_WINDOW_HEIGHT: u16 = 20;
pub const MAIN_WINDOW_WIDTH: u16 = 64;

// Timing
pub const EVENT_POLL_MS: u64 = 100;
pub const TRANSITION_DELAY_MS: u64 = 1500;
pub const CONNECTION_STEP_DELAY_MS: u64 = 1200;

// Simulated device
pub const DEFAULT_NETWORK_NAME: &str = "Clearwire";
pub const SIM_MAC_ADDRESS: [u8; 6] = [0x00, 0x1e, 0x31, 0x4a, 0x7b, 0x02];
pub const SIM_HW_VERSION: &str = "WMX-RF 2.1";
pub const SIM_SW_VERSION: &str = "4.6.1057";

// Log filter applied when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "wimaxui=debug";

// Icons - Nerd Fonts
pub mod icons {
    pub mod nerd {
        pub const HIGHLIGHT: &str = "  "; // Two spaces for alignment
        pub const CHECKBOX_ON: &str = " "; // nf-fa-check_square_o
        pub const CHECKBOX_OFF: &str = " "; // nf-fa-square_o
        pub const SUBSCREEN: &str = "󰅂"; // nf-md-chevron_right
        // UI symbols for help bar
        pub const SPACE: &str = "󱁐"; // nf-md-keyboard_space
        pub const UP_DOWN: &str = "↑↓";
    }

    pub mod ascii {
        pub const HIGHLIGHT: &str = "> ";
        pub const CHECKBOX_ON: &str = "[x]";
        pub const CHECKBOX_OFF: &str = "[ ]";
        pub const SUBSCREEN: &str = ">";
        // UI symbols for help bar
        pub const SPACE: &str = "Space";
        pub const UP_DOWN: &str = "Up/Down";
    }
}

/// Icon set to use based on configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSet {
    #[default]
    Nerd,
    Ascii,
}

impl IconSet {
    pub fn highlight(&self) -> &'static str {
        match self {
            IconSet::Nerd => icons::nerd::HIGHLIGHT,
            IconSet::Ascii => icons::ascii::HIGHLIGHT,
        }
    }

    pub fn checkbox(&self, checked: bool) -> &'static str {
        match (self, checked) {
            (IconSet::Nerd, true) => icons::nerd::CHECKBOX_ON,
            (IconSet::Nerd, false) => icons::nerd::CHECKBOX_OFF,
            (IconSet::Ascii, true) => icons::ascii::CHECKBOX_ON,
            (IconSet::Ascii, false) => icons::ascii::CHECKBOX_OFF,
        }
    }

    pub fn subscreen(&self) -> &'static str {
        match self {
            IconSet::Nerd => icons::nerd::SUBSCREEN,
            IconSet::Ascii => icons::ascii::SUBSCREEN,
        }
    }

    pub fn space(&self) -> &'static str {
        match self {
            IconSet::Nerd => icons::nerd::SPACE,
            IconSet::Ascii => icons::ascii::SPACE,
        }
    }

    pub fn up_down(&self) -> &'static str {
        match self {
            IconSet::Nerd => icons::nerd::UP_DOWN,
            IconSet::Ascii => icons::ascii::UP_DOWN,
        }
    }
}
