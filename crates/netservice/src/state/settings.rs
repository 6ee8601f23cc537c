//! In-memory network settings edited on the configuration screen.
//!
//! Values live for the session only; nothing here is written to disk.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    Host,
    Port,
    Protocol,
    Timeout,
}

impl SettingKey {
    pub const ALL: [SettingKey; 4] = [
        SettingKey::Host,
        SettingKey::Port,
        SettingKey::Protocol,
        SettingKey::Timeout,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingKey::Host => "Host",
            SettingKey::Port => "Port",
            SettingKey::Protocol => "Protocol",
            SettingKey::Timeout => "Timeout",
        }
    }

    fn options(&self) -> &'static [&'static str] {
        match self {
            SettingKey::Host => &["127.0.0.1", "0.0.0.0", "localhost"],
            SettingKey::Port => &["8080", "8443", "9000", "5000"],
            SettingKey::Protocol => &["TCP", "UDP"],
            SettingKey::Timeout => &["5s", "15s", "30s", "60s"],
        }
    }
}

/// A setting with a fixed list of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub key: SettingKey,
    selected: usize,
}

impl Setting {
    fn new(key: SettingKey) -> Self {
        Self { key, selected: 0 }
    }

    pub fn value(&self) -> &'static str {
        self.key.options()[self.selected]
    }

    pub fn option_count(&self) -> usize {
        self.key.options().len()
    }

    pub fn next_option(&mut self) {
        self.selected = (self.selected + 1) % self.option_count();
    }

    pub fn prev_option(&mut self) {
        let count = self.option_count();
        self.selected = (self.selected + count - 1) % count;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    pub settings: Vec<Setting>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            settings: SettingKey::ALL.iter().copied().map(Setting::new).collect(),
        }
    }
}

impl ServiceSettings {
    pub fn get(&self, key: SettingKey) -> &'static str {
        self.settings
            .iter()
            .find(|s| s.key == key)
            .map(Setting::value)
            .unwrap_or_default()
    }

    /// The endpoint described by the current values, e.g. `tcp://127.0.0.1:8080`.
    pub fn endpoint(&self) -> String {
        format!(
            "{}://{}:{}",
            self.get(SettingKey::Protocol).to_lowercase(),
            self.get(SettingKey::Host),
            self.get(SettingKey::Port)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let settings = ServiceSettings::default();
        assert_eq!(settings.endpoint(), "tcp://127.0.0.1:8080");
        assert_eq!(settings.get(SettingKey::Timeout), "5s");
    }

    #[test]
    fn test_option_cycling_wraps() {
        let mut setting = Setting::new(SettingKey::Protocol);
        setting.next_option();
        assert_eq!(setting.value(), "UDP");
        setting.next_option();
        assert_eq!(setting.value(), "TCP");
        setting.prev_option();
        assert_eq!(setting.value(), "UDP");
    }

    #[test]
    fn test_endpoint_follows_changes() {
        let mut settings = ServiceSettings::default();
        settings.settings[2].next_option();
        settings.settings[1].prev_option();
        assert_eq!(settings.endpoint(), "udp://127.0.0.1:5000");
    }
}
