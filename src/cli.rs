use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "elf-userconfig")]
#[command(
    about = "Resolve, validate, and emit the build configuration for the Cosmac ELF firmware."
)]
pub struct Cli {
    /// Path to the configuration manifest; defaults to "userconfig.env" when present.
    #[arg(short = 'm', long = "manifest")]
    pub manifest: Option<String>,

    /// Override the firmware version string.
    #[arg(long = "fw-version")]
    pub fw_version: Option<String>,

    /// Override the display variant: 128x64 or 128x32 (raw flag 1 / 0 also accepted).
    #[arg(short = 'd', long = "display")]
    pub display: Option<String>,

    /// Override serial debug output: 1/true or 0/false.
    #[arg(short = 's', long = "serial-debug")]
    pub serial_debug: Option<String>,

    /// Override logo behaviour: a scroll speed from 0 to 8, or "off" to center it.
    #[arg(short = 'l', long = "scroll-logo")]
    pub scroll_logo: Option<String>,

    /// Ignore process environment variables when resolving.
    #[arg(short = 'E', long = "no-env")]
    pub no_env: bool,

    /// Validate the configuration and exit without printing the summary.
    #[arg(short = 'c', long = "check")]
    pub check: bool,

    /// Print the generated Rust constants module to stdout.
    #[arg(short = 'o', long = "stdout")]
    pub stdout: bool,

    /// Write the generated Rust constants module to this path.
    #[arg(short = 'e', long = "emit")]
    pub emit: Option<String>,
}
