//! Logging setup
//!
//! One timestamped line per event, teed to the console and, for the daemon,
//! to a log file.

use fern::Dispatch;
use log::LevelFilter;
use std::path::Path;

/// Initialize the global logger
///
/// The governor logs every cycle at info, so info is the default level;
/// verbosity raises it. When `log_file` is given its parent directory is
/// created and the file is appended to; an unopenable file degrades to
/// console-only logging with a warning rather than refusing to start.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<(), fern::InitError> {
    let level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut dispatch = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match fern::log_file(path) {
            Ok(file) => dispatch = dispatch.chain(file),
            Err(e) => eprintln!(
                "Warning: could not open log file {}: {}; logging to console only",
                path.display(),
                e
            ),
        }
    }

    dispatch.apply()?;
    Ok(())
}
