use std::fmt::Write;

use crate::settings::types::{ScrollLogo, UserConfig};

/// Builds the human-readable summary of a resolved configuration.
pub fn summary(config: &UserConfig) -> String {
    let mut out = String::new();
    writeln!(&mut out, "firmware version : {:?}", config.version).unwrap();
    writeln!(&mut out, "display          : {} SSD1306-family OLED", config.display).unwrap();
    writeln!(
        &mut out,
        "serial debug     : {}",
        if config.serial_debug { "enabled" } else { "disabled" }
    )
    .unwrap();
    match config.scroll_logo {
        ScrollLogo::Centered => writeln!(&mut out, "boot logo        : centered").unwrap(),
        ScrollLogo::Scroll(speed) => {
            writeln!(&mut out, "boot logo        : scroll right-to-left, speed {speed}").unwrap()
        }
    }
    out.push_str("OK\n");
    out
}
