use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use elf_userconfig::config::Config;
use elf_userconfig::constants::DEFAULT_MANIFEST;
use elf_userconfig::report;
use elf_userconfig::settings::emit;
use elf_userconfig::settings::manifest::{self, ManifestError};
use elf_userconfig::settings::resolve::{self, Layers};
use elf_userconfig::settings::types::InvalidValue;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(exit_code(&err));
    }
}

fn run() -> Result<()> {
    let config = Config::from_cli()?;

    let map = match &config.manifest {
        Some(path) => manifest::load(path)?,
        None => manifest::load_default(Path::new(DEFAULT_MANIFEST))?,
    };

    let mut layers = Layers::new(map).with_overrides(config.overrides.clone());
    if !config.no_env {
        layers = layers.with_process_env();
    }
    let resolved = resolve::resolve(&layers)?;

    if config.emit.is_some() || config.stdout {
        let module = emit::render(&resolved);
        if let Some(path) = &config.emit {
            std::fs::write(path, &module)
                .with_context(|| format!("could not write {}", path.display()))?;
        }
        if config.stdout {
            print!("{module}");
            return Ok(());
        }
    }
    if !config.check {
        print!("{}", report::summary(&resolved));
    }
    Ok(())
}

// Usage and malformed-value problems exit 2, out-of-range scroll speeds 3,
// anything else 1.
fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(invalid) = err.downcast_ref::<InvalidValue>() {
        return match invalid {
            InvalidValue::ScrollRange { .. } => 3,
            _ => 2,
        };
    }
    if err.downcast_ref::<ManifestError>().is_some() {
        return 2;
    }
    1
}
