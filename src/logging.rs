//! Logging setup for dupefind.
//!
//! Everything goes to stderr through `env_logger`, so a report written to
//! stdout can be piped or redirected untouched. `RUST_LOG` wins over the
//! `--quiet`/`--verbose` flags when set.

use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::Write;

/// Initialize logging from the CLI verbosity flags.
///
/// Later calls are ignored, so tests and library users may call it freely.
pub fn init_logging(verbose: u8, quiet: bool) {
    let mut builder = Builder::new();
    builder.target(Target::Stderr);

    let from_env = std::env::var_os("RUST_LOG").is_some();
    if from_env {
        builder.parse_default_env();
    } else {
        builder.filter_level(level_for(verbose, quiet));
    }

    // Debug builds stamp each line and, once verbose, name the module.
    let stamped = cfg!(debug_assertions);
    let with_module = stamped && verbose > 0;
    builder.format(move |buf, record| {
        let style = buf.default_level_style(record.level());
        if stamped {
            write!(buf, "{} ", buf.timestamp_seconds())?;
        }
        write!(buf, "{style}{:<5}{style:#} ", record.level())?;
        if with_module {
            write!(buf, "[{}] ", record.module_path().unwrap_or("dupefind"))?;
        }
        writeln!(buf, "{}", record.args())
    });

    if builder.try_init().is_ok() && !from_env {
        log::debug!("Log level: {}", level_for(verbose, quiet));
    }
}

/// `--quiet` beats any `-v`; one `-v` is debug, more is trace.
fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}
