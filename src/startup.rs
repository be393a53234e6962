//! The one-shot startup action.
//!
//! A single external script invoked when the host first initializes.
//! The call is fire-and-forget: the script's stdout, stderr, and exit
//! status are all discarded, and a missing script is not an error.  The
//! [`Loader`](crate::host::Loader) guarantees the at-most-once semantics;
//! this module only knows how to invoke the script.

use log::debug;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Resolve the configuration directory (`$XDG_CONFIG_HOME/tilecfg`).
fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("tilecfg")
}

/// A blocking, fire-and-forget invocation of an external script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupAction {
    /// Absolute path of the script, invoked with no arguments.
    pub path: PathBuf,
}

impl StartupAction {
    /// The default autostart script, `$XDG_CONFIG_HOME/tilecfg/autostart.sh`.
    pub fn autostart() -> Self {
        Self {
            path: config_dir().join("autostart.sh"),
        }
    }

    /// A startup action for an explicit script path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Invoke the script, blocking until it exits.
    ///
    /// Output and exit status are discarded.  Failure to launch (missing
    /// file, not executable) is logged at debug level and otherwise
    /// ignored — the host must keep starting regardless.
    pub fn run(&self) {
        match Command::new(&self.path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
        {
            Ok(status) => debug!("startup script {} exited: {}", self.path.display(), status),
            Err(e) => debug!("startup script {} not run: {}", self.path.display(), e),
        }
    }
}

impl AsRef<Path> for StartupAction {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_script_is_ignored() {
        // run() must not panic or report anything when the script is absent.
        StartupAction::at("/nonexistent/tilecfg-autostart.sh").run();
    }

    #[test]
    fn autostart_path_ends_with_script_name() {
        let action = StartupAction::autostart();
        assert!(action.path.ends_with("autostart.sh"));
    }

    #[test]
    fn failing_script_is_ignored() {
        // /bin/false exits non-zero; run() still returns unit.
        StartupAction::at("/bin/false").run();
    }
}
