use std::collections::BTreeMap;

use anyhow::{Result, anyhow};
use tracing::debug;

use crate::constants::{
    KEY_DISPLAY, KEY_SCROLL_LOGO, KEY_SERIAL_DEBUG, KEY_VERSION, RECOGNIZED_KEYS,
};
use crate::settings::manifest::ManifestMap;
use crate::settings::types::{DisplayVariant, Overrides, ScrollLogo, UserConfig, parse_flag};

/// Configuration sources, lowest precedence first: built-in defaults,
/// manifest file, process environment, command-line overrides.
#[derive(Debug, Default)]
pub struct Layers {
    manifest: ManifestMap,
    env: BTreeMap<String, String>,
    overrides: Overrides,
}

impl Layers {
    pub fn new(manifest: ManifestMap) -> Self {
        Layers {
            manifest,
            ..Default::default()
        }
    }

    /// Captures the recognized keys from the process environment.
    pub fn with_process_env(mut self) -> Self {
        for key in RECOGNIZED_KEYS {
            if let Ok(value) = std::env::var(key) {
                if !value.is_empty() {
                    self.env.insert(key.to_string(), value);
                }
            }
        }
        self
    }

    /// Replaces the environment layer with an explicit snapshot.
    pub fn with_env(
        mut self,
        env: BTreeMap<String, String>,
    ) -> Self {
        self.env = env;
        self
    }

    pub fn with_overrides(
        mut self,
        overrides: Overrides,
    ) -> Self {
        self.overrides = overrides;
        self
    }

    /// Highest-precedence textual value for a key, with the layer it came from.
    fn lookup(
        &self,
        key: &str,
        override_value: &Option<String>,
    ) -> Option<(String, &'static str)> {
        if let Some(v) = override_value {
            return Some((v.clone(), "command line"));
        }
        if let Some(v) = self.env.get(key) {
            return Some((v.clone(), "environment"));
        }
        if let Some(v) = self.manifest.get(key) {
            return Some((v.clone(), "manifest"));
        }
        None
    }
}

/// Resolves a validated configuration from the given layers. The first
/// invalid value aborts resolution, naming the key and offending text.
pub fn resolve(layers: &Layers) -> Result<UserConfig> {
    let mut config = UserConfig::default();

    if let Some((value, origin)) = layers.lookup(KEY_VERSION, &layers.overrides.version) {
        debug!("{KEY_VERSION} = {value:?} ({origin})");
        config.version = value;
    }
    if let Some((value, origin)) = layers.lookup(KEY_DISPLAY, &layers.overrides.display) {
        debug!("{KEY_DISPLAY} = {value:?} ({origin})");
        config.display = value.parse::<DisplayVariant>().map_err(|e| anyhow!(e))?;
    }
    if let Some((value, origin)) = layers.lookup(KEY_SERIAL_DEBUG, &layers.overrides.serial_debug) {
        debug!("{KEY_SERIAL_DEBUG} = {value:?} ({origin})");
        config.serial_debug = parse_flag(KEY_SERIAL_DEBUG, &value).map_err(|e| anyhow!(e))?;
    }
    if let Some((value, origin)) = layers.lookup(KEY_SCROLL_LOGO, &layers.overrides.scroll_logo) {
        debug!("{KEY_SCROLL_LOGO} = {value:?} ({origin})");
        config.scroll_logo = value.parse::<ScrollLogo>().map_err(|e| anyhow!(e))?;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::types::{DisplayVariant, InvalidValue};

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn environment_beats_manifest() {
        let layers = Layers::new(map(&[("OLED1306", "1"), ("ScrollLogo", "2")]))
            .with_env(map(&[("OLED1306", "0")]));
        let config = resolve(&layers).unwrap();
        assert_eq!(config.display, DisplayVariant::Oled128x32);
        assert_eq!(config.scroll_logo, ScrollLogo::Scroll(2));
    }

    #[test]
    fn overrides_beat_environment() {
        let layers = Layers::default()
            .with_env(map(&[("SerialDebug", "1")]))
            .with_overrides(Overrides {
                serial_debug: Some("0".to_string()),
                ..Default::default()
            });
        let config = resolve(&layers).unwrap();
        assert!(!config.serial_debug);
    }

    #[test]
    fn out_of_range_scroll_speed_is_typed() {
        let layers = Layers::new(map(&[("ScrollLogo", "9")]));
        let err = resolve(&layers).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InvalidValue>(),
            Some(&InvalidValue::ScrollRange { speed: 9 })
        );
    }
}
