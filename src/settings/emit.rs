use std::fmt::Write;

use chrono::{SecondsFormat, Utc};

use crate::settings::types::{DisplayVariant, UserConfig};

/// Renders the configuration as a Rust constants module for firmware code
/// to `include!`, stamped with the given generation timestamp.
pub fn render_module(
    config: &UserConfig,
    generated_at: &str,
) -> String {
    let mut out = String::new();
    writeln!(
        &mut out,
        "// Generated by elf-userconfig at {generated_at}. Do not edit."
    )
    .unwrap();
    writeln!(&mut out).unwrap();
    writeln!(
        &mut out,
        "pub const VERSION: &str = \"{}\";",
        config.version.escape_default()
    )
    .unwrap();
    writeln!(
        &mut out,
        "pub const OLED_128X64: bool = {};",
        config.display == DisplayVariant::Oled128x64
    )
    .unwrap();
    writeln!(
        &mut out,
        "pub const DISPLAY_WIDTH: u32 = {};",
        config.display.width()
    )
    .unwrap();
    writeln!(
        &mut out,
        "pub const DISPLAY_HEIGHT: u32 = {};",
        config.display.height()
    )
    .unwrap();
    writeln!(
        &mut out,
        "pub const SERIAL_DEBUG: bool = {};",
        config.serial_debug
    )
    .unwrap();
    match config.scroll_logo.speed() {
        Some(speed) => {
            writeln!(&mut out, "pub const SCROLL_LOGO: Option<u8> = Some({speed});").unwrap()
        }
        None => writeln!(&mut out, "pub const SCROLL_LOGO: Option<u8> = None;").unwrap(),
    }
    out
}

/// Renders the module stamped with the current time.
pub fn render(config: &UserConfig) -> String {
    let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    render_module(config, &ts)
}
