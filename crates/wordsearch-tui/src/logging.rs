use log::LevelFilter;
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

/// Where log output goes
pub enum LogTarget {
    /// Standard error, for non-interactive runs
    Stderr,
    /// A file, while the terminal UI owns the screen
    File(PathBuf),
}

impl LogTarget {
    /// Default log file under the local data directory
    pub fn default_file() -> Self {
        let dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordsearch");
        LogTarget::File(dir.join("wordsearch.log"))
    }
}

/// Initialize logging.
///
/// Defaults to `warn`, or `debug` when `debug_enabled` is set. `RUST_LOG`
/// overrides both when present.
pub fn init_logger(debug_enabled: bool, target: LogTarget) -> io::Result<()> {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder.filter(None, level).format_module_path(false);

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    match target {
        LogTarget::Stderr => {
            builder.format_timestamp(None);
            builder.target(env_logger::Target::Stderr);
        }
        LogTarget::File(path) => {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            let file = File::options().create(true).append(true).open(&path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }

    // A logger may already be installed (tests, embedding); keep it
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {:?} level", level);
    }
    Ok(())
}
