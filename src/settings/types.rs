use std::fmt;
use std::str::FromStr;

use crate::constants::SCROLL_SPEED_MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidValue {
    Display { value: String },
    Flag { key: &'static str, value: String },
    Scroll { value: String },
    ScrollRange { speed: i64 },
}

impl fmt::Display for InvalidValue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            InvalidValue::Display { value } => write!(
                f,
                "invalid OLED1306 value {value:?}: expected 1/128x64 or 0/128x32"
            ),
            InvalidValue::Flag { key, value } => {
                write!(f, "invalid {key} value {value:?}: expected 1/true or 0/false")
            }
            InvalidValue::Scroll { value } => write!(
                f,
                "invalid ScrollLogo value {value:?}: expected \"off\" or a speed from 0 to 8"
            ),
            InvalidValue::ScrollRange { speed } => write!(
                f,
                "ScrollLogo speed {speed} is out of range: speeds run from 0 to {SCROLL_SPEED_MAX}"
            ),
        }
    }
}

impl std::error::Error for InvalidValue {}

/// OLED panel geometry selected by the OLED1306 flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayVariant {
    Oled128x64,
    Oled128x32,
}

impl DisplayVariant {
    pub fn width(self) -> u32 {
        128
    }

    pub fn height(self) -> u32 {
        match self {
            DisplayVariant::Oled128x64 => 64,
            DisplayVariant::Oled128x32 => 32,
        }
    }
}

impl FromStr for DisplayVariant {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "128x64" => Ok(DisplayVariant::Oled128x64),
            "0" | "128x32" => Ok(DisplayVariant::Oled128x32),
            other => Err(InvalidValue::Display {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DisplayVariant {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            DisplayVariant::Oled128x64 => write!(f, "128x64"),
            DisplayVariant::Oled128x32 => write!(f, "128x32"),
        }
    }
}

/// Startup logo behaviour: stationary in the middle of the panel, or
/// scrolling right-to-left at a speed from 0 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollLogo {
    Centered,
    Scroll(u8),
}

impl ScrollLogo {
    pub fn speed(self) -> Option<u8> {
        match self {
            ScrollLogo::Centered => None,
            ScrollLogo::Scroll(speed) => Some(speed),
        }
    }
}

impl FromStr for ScrollLogo {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("off") {
            return Ok(ScrollLogo::Centered);
        }
        let speed: i64 = s.parse().map_err(|_| InvalidValue::Scroll {
            value: s.to_string(),
        })?;
        if !(0..=SCROLL_SPEED_MAX as i64).contains(&speed) {
            return Err(InvalidValue::ScrollRange { speed });
        }
        Ok(ScrollLogo::Scroll(speed as u8))
    }
}

impl fmt::Display for ScrollLogo {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            ScrollLogo::Centered => write!(f, "off"),
            ScrollLogo::Scroll(speed) => write!(f, "{speed}"),
        }
    }
}

/// Parses a 0/1 (or true/false) toggle such as SerialDebug.
pub fn parse_flag(
    key: &'static str,
    value: &str,
) -> Result<bool, InvalidValue> {
    match value.trim() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        other => Err(InvalidValue::Flag {
            key,
            value: other.to_string(),
        }),
    }
}

/// Resolved build configuration, immutable once validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserConfig {
    pub version: String,
    pub display: DisplayVariant,
    pub serial_debug: bool,
    pub scroll_logo: ScrollLogo,
}

impl Default for UserConfig {
    fn default() -> Self {
        UserConfig {
            version: crate::constants::DEFAULT_VERSION.to_string(),
            display: DisplayVariant::Oled128x64,
            serial_debug: false,
            scroll_logo: ScrollLogo::Centered,
        }
    }
}

/// Unparsed per-field overrides, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub version: Option<String>,
    pub display: Option<String>,
    pub serial_debug: Option<String>,
    pub scroll_logo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_variant_accepts_flag_and_geometry_spellings() {
        assert_eq!("1".parse::<DisplayVariant>().unwrap(), DisplayVariant::Oled128x64);
        assert_eq!("128x64".parse::<DisplayVariant>().unwrap(), DisplayVariant::Oled128x64);
        assert_eq!("0".parse::<DisplayVariant>().unwrap(), DisplayVariant::Oled128x32);
        assert_eq!("128x32".parse::<DisplayVariant>().unwrap(), DisplayVariant::Oled128x32);
        assert!("96x16".parse::<DisplayVariant>().is_err());
    }

    #[test]
    fn display_variant_geometry() {
        assert_eq!(DisplayVariant::Oled128x64.width(), 128);
        assert_eq!(DisplayVariant::Oled128x64.height(), 64);
        assert_eq!(DisplayVariant::Oled128x32.height(), 32);
    }

    #[test]
    fn scroll_logo_parses_off_and_speeds() {
        assert_eq!("off".parse::<ScrollLogo>().unwrap(), ScrollLogo::Centered);
        assert_eq!("OFF".parse::<ScrollLogo>().unwrap(), ScrollLogo::Centered);
        assert_eq!("0".parse::<ScrollLogo>().unwrap(), ScrollLogo::Scroll(0));
        assert_eq!("8".parse::<ScrollLogo>().unwrap(), ScrollLogo::Scroll(8));
    }

    #[test]
    fn scroll_logo_distinguishes_range_from_garbage() {
        assert_eq!(
            "9".parse::<ScrollLogo>().unwrap_err(),
            InvalidValue::ScrollRange { speed: 9 }
        );
        assert_eq!(
            "-1".parse::<ScrollLogo>().unwrap_err(),
            InvalidValue::ScrollRange { speed: -1 }
        );
        assert!(matches!(
            "fast".parse::<ScrollLogo>().unwrap_err(),
            InvalidValue::Scroll { .. }
        ));
    }

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("SerialDebug", "1").unwrap());
        assert!(parse_flag("SerialDebug", "true").unwrap());
        assert!(!parse_flag("SerialDebug", "0").unwrap());
        assert!(!parse_flag("SerialDebug", "false").unwrap());
        assert!(parse_flag("SerialDebug", "yes").is_err());
    }
}
