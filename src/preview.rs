//! Open the download location in the platform file explorer.
//!
//! Best-effort only: preview is a convenience, so failures are logged and
//! never fail the command.

use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

/// Open `path` in the file explorer. With `locate_file` set the explorer is
/// pointed at the containing directory with the file highlighted where the
/// platform supports it.
pub fn open_in_file_explorer(path: &Path, locate_file: bool) {
    let mut command = explorer_command(path, locate_file);
    debug!("Opening file explorer: {:?}", command);

    if let Err(e) = command.spawn() {
        warn!("Failed to open file explorer for {}: {}", path.display(), e);
    }
}

#[cfg(target_os = "macos")]
fn explorer_command(path: &Path, locate_file: bool) -> Command {
    let mut command = Command::new("open");
    if locate_file {
        command.arg("-R");
    }
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn explorer_command(path: &Path, locate_file: bool) -> Command {
    let mut command = Command::new("explorer");
    if locate_file {
        command.arg(format!("/select,{}", path.display()));
    } else {
        command.arg(path);
    }
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn explorer_command(path: &Path, locate_file: bool) -> Command {
    // xdg-open has no locate mode; open the containing directory instead
    let target = if locate_file {
        path.parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    } else {
        path
    };

    let mut command = Command::new("xdg-open");
    command.arg(target);
    command
}
