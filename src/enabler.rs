//! Checkbox toggle that mirrors and drives the radio's on/off state.
//!
//! The radio service is authoritative: a press only issues a request, and the
//! checkbox flips once a status event confirms the new state. While a request
//! is in flight the widget stays disabled so it cannot be pressed again.

use crate::locale::{Localizer, Message};
use crate::preference::{PreferenceStore, ToggleWidget};
use crate::radio::{
    ConnectionLayer, ConnectionState, EventSource, RadioEvent, RadioEventHandler, RadioManager,
    RadioStatus, Subscription,
};
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};
use tracing::{debug, warn};

pub struct RadioEnabler {
    widget: ToggleWidget,
    original_summary: Option<String>,
    manager: Arc<dyn RadioManager>,
    events: Arc<dyn EventSource>,
    connection: Arc<dyn ConnectionLayer>,
    localizer: Arc<dyn Localizer>,
    subscription: Option<Subscription>,
    event_rx: Option<UnboundedReceiver<RadioEvent>>,
    handling_toggles: bool,
}

impl RadioEnabler {
    pub fn new(
        mut widget: ToggleWidget,
        manager: Arc<dyn RadioManager>,
        events: Arc<dyn EventSource>,
        connection: Arc<dyn ConnectionLayer>,
        localizer: Arc<dyn Localizer>,
    ) -> Self {
        let original_summary = widget.summary.clone();
        widget.persistent = false;
        Self {
            widget,
            original_summary,
            manager,
            events,
            connection,
            localizer,
            subscription: None,
            event_rx: None,
            handling_toggles: false,
        }
    }

    pub fn widget(&self) -> &ToggleWidget {
        &self.widget
    }

    /// Whether event listening and toggle handling are active
    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn resume(&mut self) {
        let status = self.manager.status();
        // Widget enabled state, not the checked state
        self.widget.enabled = matches!(
            status,
            RadioStatus::Enabled | RadioStatus::Disabled | RadioStatus::Unknown
        );

        let (tx, rx) = unbounded_channel();
        self.subscription = Some(self.events.subscribe(tx));
        self.event_rx = Some(rx);
        self.handling_toggles = true;
        debug!(%status, "Radio enabler resumed");
    }

    pub fn pause(&mut self) {
        self.subscription = None;
        self.event_rx = None;
        self.handling_toggles = false;
    }

    /// Handle a press on the widget the way a checkbox preference would:
    /// ask the toggle handler and only apply the new value if it agrees.
    pub fn click(&mut self) {
        if !self.handling_toggles || !self.widget.enabled {
            return;
        }
        let requested = !self.widget.checked;
        if self.on_toggle(requested) {
            self.widget.checked = requested;
        }
    }

    /// Forward a user toggle to the radio. Always returns false: the
    /// checkbox must not change until a status event confirms it.
    pub fn on_toggle(&mut self, requested: bool) -> bool {
        self.widget.enabled = false;

        if !self.manager.set_enabled(requested) {
            warn!(requested, "Radio rejected toggle request");
            let message = if requested {
                Message::StartFailed
            } else {
                Message::StopFailed
            };
            self.widget.summary = Some(self.localizer.text(message));
        }

        false
    }

    /// Drain queued radio events in delivery order. Returns how many were
    /// handled.
    pub fn process_events(&mut self, store: &dyn PreferenceStore) -> usize {
        let mut handled = 0;
        loop {
            let Some(event) = self.event_rx.as_mut().and_then(|rx| rx.try_recv().ok()) else {
                break;
            };
            event.dispatch(&mut StoreBound {
                enabler: &mut *self,
                store,
            });
            handled += 1;
        }
        handled
    }

    pub fn on_status_changed(
        &mut self,
        status: RadioStatus,
        previous: RadioStatus,
        store: &dyn PreferenceStore,
    ) {
        debug!(from = %previous, to = %status, "Received radio status change");

        match status {
            RadioStatus::Disabled | RadioStatus::Enabled => {
                self.widget.checked = status == RadioStatus::Enabled;
                self.widget.summary = if status == RadioStatus::Disabled {
                    self.original_summary.clone()
                } else {
                    None
                };
                self.widget.enabled = !self.forced_off_by_dependency(store);
            }
            RadioStatus::Disabling | RadioStatus::Enabling => {
                let message = if status == RadioStatus::Enabling {
                    Message::Starting
                } else {
                    Message::Stopping
                };
                self.widget.summary = Some(self.localizer.text(message));
            }
            RadioStatus::Unknown => {
                let message = match previous {
                    RadioStatus::Enabling => Message::StartFailed,
                    RadioStatus::Disabling => Message::StopFailed,
                    _ => Message::RadioError,
                };
                self.widget.checked = false;
                self.widget.summary = Some(self.localizer.text(message));
                self.widget.enabled = true;
            }
        }
    }

    pub fn on_connection_state_changed(&mut self, state: ConnectionState) {
        debug!(%state, "Received radio connection state change");

        if self.manager.is_enabled() {
            self.widget.summary = Some(self.connection_summary(state));
        }
    }

    /// Re-derive the enabled flag after the dependency preference changed
    pub fn on_dependency_changed(&mut self, store: &dyn PreferenceStore) {
        self.widget.enabled =
            !self.forced_off_by_dependency(store) && !self.manager.status().is_transitioning();
    }

    fn forced_off_by_dependency(&self, store: &dyn PreferenceStore) -> bool {
        self.widget
            .dependency
            .as_deref()
            .filter(|key| !key.is_empty())
            .and_then(|key| store.find_dependency(key))
            .is_some_and(|dep| dep.should_disable_dependents())
    }

    fn connection_summary(&self, state: ConnectionState) -> String {
        match state {
            ConnectionState::Scanning => self.localizer.text(Message::Scanning),
            ConnectionState::Connecting => self.with_network_name(
                self.connection.pending_network_name(),
                Message::ConnectingTo,
                Message::Connecting,
            ),
            ConnectionState::Connected => self.with_network_name(
                self.connection.current_network_name(),
                Message::ConnectedTo,
                Message::Connected,
            ),
            ConnectionState::Disconnecting => self.with_network_name(
                self.connection.current_network_name(),
                Message::DisconnectingFrom,
                Message::Disconnecting,
            ),
            ConnectionState::Disconnected => self.localizer.text(Message::Disconnected),
        }
    }

    fn with_network_name(&self, name: Option<String>, named: Message, unnamed: Message) -> String {
        match name.filter(|n| !n.is_empty()) {
            Some(name) => self.localizer.format(named, &name),
            None => self.localizer.text(unnamed),
        }
    }
}

/// Enabler paired with the store its status handling consults
struct StoreBound<'a> {
    enabler: &'a mut RadioEnabler,
    store: &'a dyn PreferenceStore,
}

impl RadioEventHandler for StoreBound<'_> {
    fn on_status_changed(&mut self, status: RadioStatus, previous: RadioStatus) {
        self.enabler.on_status_changed(status, previous, self.store);
    }

    fn on_connection_state_changed(&mut self, state: ConnectionState) {
        self.enabler.on_connection_state_changed(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::EnglishLocalizer;
    use crate::preference::{SwitchPreference, SwitchRegistry};
    use crate::radio::{MockConnectionLayer, MockRadioManager, SimOptions, SimulatedRadio};
    use mockall::predicate::eq;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::mpsc::UnboundedSender;

    const AIRPLANE: &str = "airplane_mode";

    /// Event source the test pushes events into by hand
    #[derive(Default)]
    struct ManualEvents {
        sender: Mutex<Option<UnboundedSender<RadioEvent>>>,
    }

    impl ManualEvents {
        fn push(&self, event: RadioEvent) {
            if let Some(tx) = self.sender.lock().unwrap().as_ref() {
                tx.send(event).unwrap();
            }
        }
    }

    impl EventSource for ManualEvents {
        fn subscribe(&self, sender: UnboundedSender<RadioEvent>) -> Subscription {
            *self.sender.lock().unwrap() = Some(sender);
            Subscription::new(|| ())
        }
    }

    fn widget() -> ToggleWidget {
        ToggleWidget::new("wimax", "WiMAX")
            .with_summary("Turn on WiMAX")
            .with_dependency(AIRPLANE)
    }

    fn store(airplane_on: bool) -> SwitchRegistry {
        let mut registry = SwitchRegistry::default();
        let mut airplane = SwitchPreference::new(ToggleWidget::new(AIRPLANE, "Airplane mode"));
        airplane.widget.checked = airplane_on;
        registry.insert(airplane);
        registry
    }

    fn enabler(manager: MockRadioManager, connection: MockConnectionLayer) -> RadioEnabler {
        RadioEnabler::new(
            widget(),
            Arc::new(manager),
            Arc::new(ManualEvents::default()),
            Arc::new(connection),
            Arc::new(EnglishLocalizer),
        )
    }

    fn text(message: Message) -> Option<String> {
        Some(EnglishLocalizer.text(message))
    }

    fn enabled_manager() -> MockRadioManager {
        let mut manager = MockRadioManager::new();
        manager.expect_is_enabled().return_const(true);
        manager
    }

    #[test]
    fn construction_captures_summary_and_disables_persistence() {
        let e = enabler(MockRadioManager::new(), MockConnectionLayer::new());
        assert_eq!(e.original_summary.as_deref(), Some("Turn on WiMAX"));
        assert!(!e.widget().persistent);
        assert!(!e.is_active());
    }

    #[test]
    fn stable_status_sets_checked_and_summary() {
        let store = store(false);
        for previous in [
            RadioStatus::Enabling,
            RadioStatus::Disabling,
            RadioStatus::Unknown,
        ] {
            let mut e = enabler(MockRadioManager::new(), MockConnectionLayer::new());
            e.widget.enabled = false;

            e.on_status_changed(RadioStatus::Enabled, previous, &store);
            assert!(e.widget().checked);
            assert_eq!(e.widget().summary, None);
            assert!(e.widget().enabled);

            e.on_status_changed(RadioStatus::Disabled, previous, &store);
            assert!(!e.widget().checked);
            assert_eq!(e.widget().summary.as_deref(), Some("Turn on WiMAX"));
            assert!(e.widget().enabled);
        }
    }

    #[test]
    fn dependency_keeps_widget_disabled_on_stable_status() {
        let mut e = enabler(MockRadioManager::new(), MockConnectionLayer::new());
        e.on_status_changed(RadioStatus::Enabled, RadioStatus::Enabling, &store(true));
        assert!(e.widget().checked);
        assert!(!e.widget().enabled);
    }

    #[test]
    fn missing_dependency_does_not_force_off() {
        let mut e = enabler(MockRadioManager::new(), MockConnectionLayer::new());
        e.on_status_changed(
            RadioStatus::Disabled,
            RadioStatus::Disabling,
            &SwitchRegistry::default(),
        );
        assert!(e.widget().enabled);
    }

    #[test]
    fn transitional_status_only_touches_summary() {
        let store = store(false);
        let mut e = enabler(MockRadioManager::new(), MockConnectionLayer::new());
        e.widget.enabled = false;
        e.widget.checked = true;

        e.on_status_changed(RadioStatus::Disabling, RadioStatus::Enabled, &store);
        assert_eq!(e.widget().summary, text(Message::Stopping));
        assert!(!e.widget().enabled);
        assert!(e.widget().checked);

        e.widget.enabled = true;
        e.on_status_changed(RadioStatus::Enabling, RadioStatus::Disabled, &store);
        assert_eq!(e.widget().summary, text(Message::Starting));
        assert!(e.widget().enabled);
    }

    #[test]
    fn unknown_status_reports_which_transition_failed() {
        let store = store(true);
        let cases = [
            (RadioStatus::Enabling, Message::StartFailed),
            (RadioStatus::Disabling, Message::StopFailed),
            (RadioStatus::Disabled, Message::RadioError),
            (RadioStatus::Enabled, Message::RadioError),
        ];
        for (previous, expected) in cases {
            let mut e = enabler(MockRadioManager::new(), MockConnectionLayer::new());
            e.widget.checked = true;
            e.widget.enabled = false;

            e.on_status_changed(RadioStatus::Unknown, previous, &store);
            assert_eq!(e.widget().summary, text(expected), "previous {previous}");
            assert!(!e.widget().checked);
            // Unknown re-enables even when the dependency would force it off
            assert!(e.widget().enabled);
        }
    }

    #[test]
    fn connection_state_ignored_while_radio_disabled() {
        let mut manager = MockRadioManager::new();
        manager.expect_is_enabled().return_const(false);
        // No connection-layer expectations: any lookup would panic
        let mut e = enabler(manager, MockConnectionLayer::new());

        for state in [
            ConnectionState::Scanning,
            ConnectionState::Connecting,
            ConnectionState::Connected,
            ConnectionState::Disconnecting,
            ConnectionState::Disconnected,
        ] {
            e.on_connection_state_changed(state);
            assert_eq!(e.widget().summary.as_deref(), Some("Turn on WiMAX"));
        }
    }

    #[test]
    fn connecting_names_the_pending_network() {
        let mut connection = MockConnectionLayer::new();
        connection
            .expect_pending_network_name()
            .return_const(Some("NetA".to_string()));
        let mut e = enabler(enabled_manager(), connection);

        e.on_connection_state_changed(ConnectionState::Connecting);
        assert_eq!(e.widget().summary.as_deref(), Some("Connecting to NetA…"));
    }

    #[test]
    fn connecting_without_a_name_uses_generic_text() {
        for name in [None, Some(String::new())] {
            let mut connection = MockConnectionLayer::new();
            connection.expect_pending_network_name().return_const(name);
            let mut e = enabler(enabled_manager(), connection);

            e.on_connection_state_changed(ConnectionState::Connecting);
            assert_eq!(e.widget().summary, text(Message::Connecting));
        }
    }

    #[test]
    fn connected_and_disconnecting_name_the_current_network() {
        let mut connection = MockConnectionLayer::new();
        connection
            .expect_current_network_name()
            .return_const(Some("NetB".to_string()));
        let mut e = enabler(enabled_manager(), connection);

        e.on_connection_state_changed(ConnectionState::Connected);
        assert_eq!(e.widget().summary.as_deref(), Some("Connected to NetB"));

        e.on_connection_state_changed(ConnectionState::Disconnecting);
        assert_eq!(
            e.widget().summary.as_deref(),
            Some("Disconnecting from NetB…")
        );
    }

    #[test]
    fn scanning_and_disconnected_never_show_a_name() {
        let mut e = enabler(enabled_manager(), MockConnectionLayer::new());

        e.on_connection_state_changed(ConnectionState::Scanning);
        assert_eq!(e.widget().summary, text(Message::Scanning));

        e.on_connection_state_changed(ConnectionState::Disconnected);
        assert_eq!(e.widget().summary, text(Message::Disconnected));
    }

    #[test]
    fn rejected_toggle_reports_failure_and_keeps_checked() {
        let mut manager = MockRadioManager::new();
        manager
            .expect_set_enabled()
            .with(eq(true))
            .times(1)
            .return_const(false);
        manager
            .expect_set_enabled()
            .with(eq(false))
            .times(1)
            .return_const(false);
        let mut e = enabler(manager, MockConnectionLayer::new());

        assert!(!e.on_toggle(true));
        assert!(!e.widget().enabled);
        assert!(!e.widget().checked);
        assert_eq!(e.widget().summary, text(Message::StartFailed));

        e.widget.checked = true;
        assert!(!e.on_toggle(false));
        assert!(e.widget().checked);
        assert_eq!(e.widget().summary, text(Message::StopFailed));
    }

    #[test]
    fn accepted_toggle_waits_for_confirmation() {
        let mut manager = MockRadioManager::new();
        manager
            .expect_set_enabled()
            .with(eq(true))
            .times(1)
            .return_const(true);
        let mut e = enabler(manager, MockConnectionLayer::new());

        assert!(!e.on_toggle(true));
        assert!(!e.widget().enabled);
        assert!(!e.widget().checked);
        assert_eq!(e.widget().summary.as_deref(), Some("Turn on WiMAX"));
    }

    #[test]
    fn resume_disables_widget_only_mid_transition() {
        let cases = [
            (RadioStatus::Enabled, true),
            (RadioStatus::Disabled, true),
            (RadioStatus::Unknown, true),
            (RadioStatus::Enabling, false),
            (RadioStatus::Disabling, false),
        ];
        for (status, enabled) in cases {
            let mut manager = MockRadioManager::new();
            manager.expect_status().return_const(status);
            let mut e = enabler(manager, MockConnectionLayer::new());

            e.resume();
            assert_eq!(e.widget().enabled, enabled, "status {status}");
            assert!(e.is_active());
        }
    }

    #[test]
    fn resume_then_pause_leaves_no_listener() {
        let radio = SimulatedRadio::new(SimOptions::default());
        let shared = Arc::new(radio.clone());
        let mut e = RadioEnabler::new(
            widget(),
            shared.clone(),
            shared.clone(),
            shared,
            Arc::new(EnglishLocalizer),
        );

        e.resume();
        assert_eq!(radio.listener_count(), 1);
        e.pause();
        assert_eq!(radio.listener_count(), 0);
        e.pause();
        assert_eq!(radio.listener_count(), 0);
        assert!(!e.is_active());
    }

    #[test]
    fn click_is_ignored_while_paused() {
        // set_enabled has no expectation, so a forwarded request would panic
        let mut e = enabler(MockRadioManager::new(), MockConnectionLayer::new());
        e.click();
        assert!(e.widget().enabled);
    }

    #[test]
    fn click_requests_the_opposite_state() {
        let mut manager = MockRadioManager::new();
        manager.expect_status().return_const(RadioStatus::Enabled);
        manager
            .expect_set_enabled()
            .with(eq(false))
            .times(1)
            .return_const(true);
        let mut e = enabler(manager, MockConnectionLayer::new());
        e.widget.checked = true;

        e.resume();
        e.click();
        assert!(e.widget().checked);
        assert!(!e.widget().enabled);

        // A second press while the request is pending goes nowhere
        e.click();
    }

    #[test]
    fn process_events_handles_queued_events_in_order() {
        let events = Arc::new(ManualEvents::default());
        let mut manager = MockRadioManager::new();
        manager.expect_status().return_const(RadioStatus::Disabled);
        manager.expect_is_enabled().return_const(true);
        let mut e = RadioEnabler::new(
            widget(),
            Arc::new(manager),
            events.clone(),
            Arc::new(MockConnectionLayer::new()),
            Arc::new(EnglishLocalizer),
        );
        let store = store(false);

        assert_eq!(e.process_events(&store), 0);
        e.resume();
        events.push(RadioEvent::StatusChanged {
            status: RadioStatus::Enabling,
            previous: RadioStatus::Disabled,
        });
        events.push(RadioEvent::StatusChanged {
            status: RadioStatus::Enabled,
            previous: RadioStatus::Enabling,
        });
        events.push(RadioEvent::ConnectionStateChanged(ConnectionState::Scanning));

        assert_eq!(e.process_events(&store), 3);
        assert!(e.widget().checked);
        assert_eq!(e.widget().summary, text(Message::Scanning));
        assert_eq!(e.process_events(&store), 0);
    }

    #[test]
    fn dependency_change_rederives_enabled() {
        let mut manager = MockRadioManager::new();
        manager.expect_status().return_const(RadioStatus::Disabled);
        let mut e = enabler(manager, MockConnectionLayer::new());

        e.on_dependency_changed(&store(true));
        assert!(!e.widget().enabled);
        e.on_dependency_changed(&store(false));
        assert!(e.widget().enabled);
    }

    #[test]
    fn dependency_change_keeps_widget_disabled_mid_transition() {
        let mut manager = MockRadioManager::new();
        manager.expect_status().return_const(RadioStatus::Enabling);
        let mut e = enabler(manager, MockConnectionLayer::new());

        e.on_dependency_changed(&store(false));
        assert!(!e.widget().enabled);
    }

    #[tokio::test]
    async fn turning_off_a_connected_radio_shows_disconnecting() {
        let radio = SimulatedRadio::new(SimOptions {
            start_enabled: true,
            network_name: Some("NetA".into()),
            ..Default::default()
        });
        let shared = Arc::new(radio);
        let mut e = RadioEnabler::new(
            widget(),
            shared.clone(),
            shared.clone(),
            shared,
            Arc::new(EnglishLocalizer),
        );
        let store = store(false);

        e.resume();
        e.process_events(&store);
        assert_eq!(e.widget().summary.as_deref(), Some("Connected to NetA"));

        e.click();
        e.process_events(&store);
        assert_eq!(
            e.widget().summary.as_deref(),
            Some("Disconnecting from NetA…")
        );
        assert!(e.widget().checked);
        assert!(!e.widget().enabled);
    }

    #[tokio::test]
    async fn toggle_round_trip_against_simulated_radio() {
        let radio = SimulatedRadio::new(SimOptions {
            network_name: Some("NetA".into()),
            transition_delay: Duration::ZERO,
            step_delay: Duration::ZERO,
            ..Default::default()
        });
        let shared = Arc::new(radio);
        let mut e = RadioEnabler::new(
            widget(),
            shared.clone(),
            shared.clone(),
            shared,
            Arc::new(EnglishLocalizer),
        );
        let store = store(false);

        e.resume();
        e.click();
        assert!(!e.widget().enabled);
        assert!(!e.widget().checked);

        let connected = Some("Connected to NetA".to_string());
        for _ in 0..200 {
            tokio::time::sleep(Duration::from_millis(5)).await;
            e.process_events(&store);
            if e.widget().summary == connected {
                break;
            }
        }
        assert!(e.widget().checked);
        assert!(e.widget().enabled);
        assert_eq!(e.widget().summary, connected);
    }
}
