use assert_fs::TempDir;
use assert_fs::prelude::*;

/// Builds a fixture directory holding a manifest with every key set:
///   VERSION="Cosmac ELF"
///   OLED1306=1
///   SerialDebug=0
///   ScrollLogo=3
pub fn manifest_fs() -> TempDir {
    let td = TempDir::new().unwrap();
    td.child("userconfig.env")
        .write_str("VERSION=\"Cosmac ELF\"\nOLED1306=1\nSerialDebug=0\nScrollLogo=3\n")
        .unwrap();
    td
}
