use crate::config;
use crate::error::{RadioError, RadioResult};
use crate::radio::connection::ConnectionLayer;
use crate::radio::listener::{EventSource, Subscription};
use crate::radio::manager::RadioManager;
use crate::radio::types::{ConnectionState, DeviceInfo, IpInfo, RadioEvent, RadioStatus};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

/// Behaviour knobs for the simulated radio
#[derive(Debug, Clone)]
pub struct SimOptions {
    pub start_enabled: bool,
    /// Refuse every on/off request synchronously
    pub reject_requests: bool,
    /// Accepted transitions end in `Unknown` instead of their target
    pub fail_transitions: bool,
    pub device_info: Option<DeviceInfo>,
    /// Provider joined after the radio comes up; `None` keeps it idle
    pub network_name: Option<String>,
    pub transition_delay: Duration,
    pub step_delay: Duration,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            start_enabled: false,
            reject_requests: false,
            fail_transitions: false,
            device_info: Some(DeviceInfo {
                mac_address: config::SIM_MAC_ADDRESS,
                hw_version: config::SIM_HW_VERSION.to_string(),
                sw_version: config::SIM_SW_VERSION.to_string(),
            }),
            network_name: Some(config::DEFAULT_NETWORK_NAME.to_string()),
            transition_delay: Duration::from_millis(config::TRANSITION_DELAY_MS),
            step_delay: Duration::from_millis(config::CONNECTION_STEP_DELAY_MS),
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    status: RadioStatus,
    connection: Option<ConnectionState>,
    pending_name: Option<String>,
    current_name: Option<String>,
    listeners: HashMap<u64, UnboundedSender<RadioEvent>>,
    next_listener_id: u64,
    // Bumped by every accepted request so stale scripts stop early
    epoch: u64,
}

impl Inner {
    fn broadcast(&mut self, event: RadioEvent) {
        self.listeners.retain(|_, tx| tx.send(event).is_ok());
    }

    fn set_status(&mut self, status: RadioStatus) {
        let previous = std::mem::replace(&mut self.status, status);
        debug!(%previous, %status, "Simulated radio status");
        self.broadcast(RadioEvent::StatusChanged { status, previous });
    }

    fn set_connection(&mut self, state: ConnectionState) {
        self.connection = Some(state);
        self.broadcast(RadioEvent::ConnectionStateChanged(state));
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory radio service that behaves like the platform one
#[derive(Debug, Clone)]
pub struct SimulatedRadio {
    inner: Arc<Mutex<Inner>>,
    options: Arc<SimOptions>,
}

impl SimulatedRadio {
    pub fn new(options: SimOptions) -> Self {
        let mut inner = Inner::default();
        if options.start_enabled {
            inner.status = RadioStatus::Enabled;
            if let Some(name) = &options.network_name {
                inner.current_name = Some(name.clone());
                inner.connection = Some(ConnectionState::Connected);
            }
        }
        Self {
            inner: Arc::new(Mutex::new(inner)),
            options: Arc::new(options),
        }
    }

    /// Number of currently registered event listeners
    pub fn listener_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }

    /// Validate a request and enter the transitional status. Returns the
    /// epoch of the started transition, or `None` when the radio is already
    /// in the requested state.
    fn begin_transition(&self, enable: bool) -> RadioResult<Option<u64>> {
        if self.options.reject_requests {
            return Err(RadioError::RequestRejected { enable });
        }

        let mut inner = lock(&self.inner);
        let disconnecting = inner.status == RadioStatus::Enabled
            && inner.connection == Some(ConnectionState::Disconnecting);
        if inner.status.is_transitioning() || disconnecting {
            return Err(RadioError::TransitionInProgress {
                status: inner.status,
            });
        }

        let target = if enable {
            RadioStatus::Enabled
        } else {
            RadioStatus::Disabled
        };
        if inner.status == target {
            // Re-announce so a waiting toggle re-enables itself
            inner.broadcast(RadioEvent::StatusChanged {
                status: target,
                previous: target,
            });
            return Ok(None);
        }

        inner.epoch += 1;
        if enable {
            inner.set_status(RadioStatus::Enabling);
        } else if inner.connection == Some(ConnectionState::Connected) {
            // Leave the network while still enabled; power-down follows
            inner.set_connection(ConnectionState::Disconnecting);
        } else {
            inner.set_status(RadioStatus::Disabling);
        }
        Ok(Some(inner.epoch))
    }
}

async fn run_transition(
    shared: Arc<Mutex<Inner>>,
    options: Arc<SimOptions>,
    epoch: u64,
    enable: bool,
) {
    if !enable {
        let disconnecting = {
            let inner = lock(&shared);
            inner.epoch == epoch && inner.connection == Some(ConnectionState::Disconnecting)
        };
        if disconnecting {
            tokio::time::sleep(options.step_delay).await;
            let mut inner = lock(&shared);
            if inner.epoch != epoch {
                return;
            }
            inner.set_status(RadioStatus::Disabling);
        }
    }

    tokio::time::sleep(options.transition_delay).await;
    {
        let mut inner = lock(&shared);
        if inner.epoch != epoch {
            return;
        }
        if options.fail_transitions {
            inner.set_status(RadioStatus::Unknown);
            return;
        }
        if !enable {
            inner.pending_name = None;
            inner.current_name = None;
            if let Some(state) = inner.connection.take()
                && state != ConnectionState::Disconnected
            {
                inner.set_connection(ConnectionState::Disconnected);
                inner.connection = None;
            }
            inner.set_status(RadioStatus::Disabled);
            return;
        }
        inner.set_status(RadioStatus::Enabled);
    }

    let Some(name) = options.network_name.clone() else {
        return;
    };

    for step in [
        ConnectionState::Scanning,
        ConnectionState::Connecting,
        ConnectionState::Connected,
    ] {
        tokio::time::sleep(options.step_delay).await;
        let mut inner = lock(&shared);
        if inner.epoch != epoch || inner.status != RadioStatus::Enabled {
            return;
        }
        match step {
            ConnectionState::Connecting => inner.pending_name = Some(name.clone()),
            ConnectionState::Connected => {
                inner.pending_name = None;
                inner.current_name = Some(name.clone());
            }
            _ => {}
        }
        inner.set_connection(step);
    }
}

impl RadioManager for SimulatedRadio {
    fn status(&self) -> RadioStatus {
        lock(&self.inner).status
    }

    fn is_enabled(&self) -> bool {
        self.status() == RadioStatus::Enabled
    }

    fn set_enabled(&self, enable: bool) -> bool {
        let Ok(runtime) = Handle::try_current() else {
            warn!("Simulated radio needs a tokio runtime to change state");
            return false;
        };

        match self.begin_transition(enable) {
            Ok(Some(epoch)) => {
                info!(enable, "Simulated radio transition started");
                runtime.spawn(run_transition(
                    self.inner.clone(),
                    self.options.clone(),
                    epoch,
                    enable,
                ));
                true
            }
            Ok(None) => true,
            Err(e) => {
                warn!(error = %e, "Radio request refused");
                false
            }
        }
    }

    fn device_info(&self) -> Option<DeviceInfo> {
        self.options.device_info.clone()
    }

    fn ip_info(&self) -> IpInfo {
        IpInfo::default()
    }
}

impl EventSource for SimulatedRadio {
    fn subscribe(&self, sender: UnboundedSender<RadioEvent>) -> Subscription {
        let id = {
            let mut inner = lock(&self.inner);
            // Sticky: a new listener learns the current status right away
            let status = inner.status;
            let _ = sender.send(RadioEvent::StatusChanged {
                status,
                previous: status,
            });
            if status == RadioStatus::Enabled
                && let Some(state) = inner.connection
            {
                let _ = sender.send(RadioEvent::ConnectionStateChanged(state));
            }
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.insert(id, sender);
            id
        };
        debug!(id, "Radio listener registered");

        let registry = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = registry.upgrade() {
                lock(&inner).listeners.remove(&id);
                debug!(id, "Radio listener removed");
            }
        })
    }
}

impl ConnectionLayer for SimulatedRadio {
    fn pending_network_name(&self) -> Option<String> {
        lock(&self.inner).pending_name.clone()
    }

    fn current_network_name(&self) -> Option<String> {
        lock(&self.inner).current_name.clone()
    }
}
