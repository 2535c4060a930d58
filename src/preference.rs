use std::collections::HashMap;

/// Checkbox preference bound to some externally owned on/off state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleWidget {
    pub key: String,
    pub title: String,
    pub checked: bool,
    /// Whether the widget accepts presses; unrelated to `checked`
    pub enabled: bool,
    pub summary: Option<String>,
    /// Persist `checked` locally instead of trusting the owner
    pub persistent: bool,
    /// Key of the preference this one depends on
    pub dependency: Option<String>,
}

impl ToggleWidget {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            checked: false,
            enabled: true,
            summary: None,
            persistent: true,
            dependency: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_dependency(mut self, key: impl Into<String>) -> Self {
        self.dependency = Some(key.into());
        self
    }
}

/// A preference that other preferences can depend on
pub trait Dependency {
    fn should_disable_dependents(&self) -> bool;
}

/// Lookup of dependency preferences by key
pub trait PreferenceStore {
    fn find_dependency(&self, key: &str) -> Option<&dyn Dependency>;
}

/// Plain switch whose checked state disables its dependents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchPreference {
    pub widget: ToggleWidget,
}

impl SwitchPreference {
    pub fn new(widget: ToggleWidget) -> Self {
        Self { widget }
    }

    pub fn toggle(&mut self) {
        if self.widget.enabled {
            self.widget.checked = !self.widget.checked;
        }
    }
}

impl Dependency for SwitchPreference {
    fn should_disable_dependents(&self) -> bool {
        self.widget.checked
    }
}

/// Keyed collection of switches acting as dependency sources
#[derive(Debug, Default, Clone)]
pub struct SwitchRegistry {
    switches: HashMap<String, SwitchPreference>,
}

impl SwitchRegistry {
    pub fn insert(&mut self, switch: SwitchPreference) {
        self.switches.insert(switch.widget.key.clone(), switch);
    }

    pub fn get(&self, key: &str) -> Option<&SwitchPreference> {
        self.switches.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut SwitchPreference> {
        self.switches.get_mut(key)
    }
}

impl PreferenceStore for SwitchRegistry {
    fn find_dependency(&self, key: &str) -> Option<&dyn Dependency> {
        self.switches.get(key).map(|s| s as &dyn Dependency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_switch_disables_dependents() {
        let mut registry = SwitchRegistry::default();
        registry.insert(SwitchPreference::new(ToggleWidget::new("airplane", "Airplane")));

        let dep = registry.find_dependency("airplane").map(|d| d.should_disable_dependents());
        assert_eq!(dep, Some(false));

        if let Some(switch) = registry.get_mut("airplane") {
            switch.toggle();
        }
        assert!(registry.find_dependency("airplane").unwrap().should_disable_dependents());
        assert!(registry.find_dependency("missing").is_none());
    }

    #[test]
    fn disabled_switch_ignores_toggle() {
        let mut switch = SwitchPreference::new(ToggleWidget::new("airplane", "Airplane"));
        switch.widget.enabled = false;
        switch.toggle();
        assert!(!switch.widget.checked);
    }
}
