use crate::config::IconSet;
use crate::device_info::DeviceInfoPanel;
use crate::enabler::RadioEnabler;
use crate::locale::{Localizer, Message};
use crate::preference::{SwitchPreference, SwitchRegistry, ToggleWidget};
use crate::radio::{RadioManager, SimulatedRadio};
use ratatui::widgets::ListState;
use std::sync::Arc;
use tracing::info;

pub const KEY_AIRPLANE_MODE: &str = "airplane_mode";
pub const KEY_RADIO: &str = "wimax";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    Advanced,
}

/// Rows of the main settings list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainItem {
    AirplaneMode,
    Radio,
    Advanced,
}

pub const MAIN_ITEMS: [MainItem; 3] = [MainItem::AirplaneMode, MainItem::Radio, MainItem::Advanced];

pub struct AppState {
    pub screen: Screen,
    pub l_state: ListState,
    pub switches: SwitchRegistry,
    pub enabler: RadioEnabler,
    pub panel: DeviceInfoPanel,
    pub radio: Arc<dyn RadioManager>,
    pub localizer: Arc<dyn Localizer>,
    pub icons: IconSet,
}

impl AppState {
    pub fn new(
        radio: SimulatedRadio,
        localizer: Arc<dyn Localizer>,
        airplane_mode: bool,
        icons: IconSet,
    ) -> AppState {
        let radio = Arc::new(radio);

        let mut airplane = SwitchPreference::new(
            ToggleWidget::new(KEY_AIRPLANE_MODE, localizer.text(Message::AirplaneTitle))
                .with_summary(localizer.text(Message::AirplaneSummary)),
        );
        airplane.widget.checked = airplane_mode;
        let mut switches = SwitchRegistry::default();
        switches.insert(airplane);

        let widget = ToggleWidget::new(KEY_RADIO, localizer.text(Message::RadioTitle))
            .with_summary(localizer.text(Message::RadioSummary))
            .with_dependency(KEY_AIRPLANE_MODE);
        let enabler = RadioEnabler::new(
            widget,
            radio.clone(),
            radio.clone(),
            radio.clone(),
            localizer.clone(),
        );

        let mut state = AppState {
            screen: Screen::Main,
            l_state: ListState::default().with_selected(Some(0)),
            switches,
            enabler,
            panel: DeviceInfoPanel::new(localizer.as_ref()),
            radio,
            localizer,
            icons,
        };
        state.resume_main();
        state
    }

    pub fn next(&mut self) {
        let i = match self.l_state.selected() {
            Some(i) if i + 1 < MAIN_ITEMS.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.l_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let i = self.l_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.l_state.select(Some(i));
    }

    pub fn selected_item(&self) -> MainItem {
        self.l_state
            .selected()
            .and_then(|i| MAIN_ITEMS.get(i).copied())
            .unwrap_or(MainItem::AirplaneMode)
    }

    pub fn airplane_mode(&self) -> Option<&SwitchPreference> {
        self.switches.get(KEY_AIRPLANE_MODE)
    }

    pub fn activate_selected(&mut self) {
        match self.selected_item() {
            MainItem::AirplaneMode => self.toggle_airplane_mode(),
            MainItem::Radio => self.enabler.click(),
            MainItem::Advanced => self.open_advanced(),
        }
    }

    pub fn toggle_airplane_mode(&mut self) {
        if let Some(airplane) = self.switches.get_mut(KEY_AIRPLANE_MODE) {
            airplane.toggle();
            info!(on = airplane.widget.checked, "Airplane mode toggled");
        }
        self.enabler.on_dependency_changed(&self.switches);
    }

    /// Show the advanced panel; the main list is hidden while it is up
    pub fn open_advanced(&mut self) {
        self.enabler.pause();
        self.refresh_panel();
        self.screen = Screen::Advanced;
    }

    pub fn close_advanced(&mut self) {
        self.screen = Screen::Main;
        self.resume_main();
    }

    pub fn refresh_panel(&mut self) {
        self.panel
            .refresh(self.radio.as_ref(), self.localizer.as_ref());
    }

    /// Apply any queued radio notifications to the main list
    pub fn process_radio_events(&mut self) -> usize {
        self.enabler.process_events(&self.switches)
    }

    /// Stop listening before the app goes away
    pub fn shutdown(&mut self) {
        self.enabler.pause();
    }

    fn resume_main(&mut self) {
        self.enabler.resume();
        self.enabler.on_dependency_changed(&self.switches);
    }
}
