// Centralized key names & default values
pub const DEFAULT_VERSION: &str = "Cosmac ELF";
pub const DEFAULT_MANIFEST: &str = "userconfig.env";
pub const SCROLL_SPEED_MAX: u8 = 8;

pub const KEY_VERSION: &str = "VERSION";
pub const KEY_DISPLAY: &str = "OLED1306";
pub const KEY_SERIAL_DEBUG: &str = "SerialDebug";
pub const KEY_SCROLL_LOGO: &str = "ScrollLogo";

/// Every key a manifest or the environment may set.
pub const RECOGNIZED_KEYS: [&str; 4] = [
    KEY_VERSION,
    KEY_DISPLAY,
    KEY_SERIAL_DEBUG,
    KEY_SCROLL_LOGO,
];
