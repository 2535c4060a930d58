/// Network-layer view of which provider the radio is associating with
#[cfg_attr(test, mockall::automock)]
pub trait ConnectionLayer: Send + Sync {
    /// Network the radio is currently trying to join
    fn pending_network_name(&self) -> Option<String>;

    /// Network the radio is joined to
    fn current_network_name(&self) -> Option<String>;
}
