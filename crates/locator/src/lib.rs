#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Bootstrap resource location for the gantry application server
//!
//! On process start gantry decides, once, whether it was installed through
//! the OS package manager or is running straight out of a source checkout,
//! and derives from that a fixed table of directories the rest of the server
//! reads resources from: agents, helper scripts, templates, plugins,
//! documentation, the native support library.
//!
//! The primary API is the immutable [`ResourceLocator`] value, constructed
//! with injected inputs so tests and packaging tools can resolve arbitrary
//! layouts. [`init_global`] installs one process-wide copy behind a
//! `OnceLock` for bootstrap code that runs before any context is threaded
//! through.

pub mod constants;
mod layout;
mod mode;
mod search_path;

pub use layout::PathLayout;
pub use mode::InstallationMode;
pub use search_path::register_library_dir;

use gantry_errors::{BootstrapError, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

/// Immutable bootstrap configuration: installation mode plus path table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLocator {
    mode: InstallationMode,
    library_dir: PathBuf,
    home_dir: PathBuf,
    layout: PathLayout,
}

impl ResourceLocator {
    /// Build a locator from fully injected inputs. No filesystem access.
    #[must_use]
    pub fn new(mode: InstallationMode, library_dir: PathBuf, home_dir: PathBuf) -> Self {
        let layout = PathLayout::build(mode, &library_dir, &home_dir);
        Self {
            mode,
            library_dir,
            home_dir,
            layout,
        }
    }

    /// Detect the installation mode around `library_dir` and build the
    /// locator against the current user's home directory.
    ///
    /// A relative `library_dir` is resolved against the current directory
    /// first, so the marker probe and the derived paths agree.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory, or the current directory for
    /// a relative input, cannot be determined. Marker probe failures are not
    /// errors; they bias detection toward [`InstallationMode::Native`].
    pub fn discover(library_dir: impl Into<PathBuf>) -> Result<Self, Error> {
        let library_dir = absolutize(library_dir.into())?;
        let home_dir = dirs::home_dir().ok_or(BootstrapError::HomeDirUnavailable)?;
        let mode = InstallationMode::detect(&library_dir);
        Ok(Self::new(mode, library_dir, home_dir))
    }

    /// How this installation reached the machine
    #[must_use]
    pub fn mode(&self) -> InstallationMode {
        self.mode
    }

    /// Directory containing the gantry runtime libraries
    #[must_use]
    pub fn library_dir(&self) -> &Path {
        &self.library_dir
    }

    /// Home directory the per-user paths were derived from
    #[must_use]
    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    /// The resolved path table
    #[must_use]
    pub fn layout(&self) -> &PathLayout {
        &self.layout
    }
}

fn absolutize(path: PathBuf) -> Result<PathBuf, Error> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().map_err(|e| BootstrapError::CurrentDirUnavailable {
        message: e.to_string(),
    })?;
    Ok(cwd.join(path))
}

static GLOBAL: OnceLock<ResourceLocator> = OnceLock::new();
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Install the process-wide locator, resolving it on first call.
///
/// Exactly one caller performs detection and table construction; every
/// later or racing caller observes that completed value, keyed to the
/// original library directory, regardless of its own argument or of
/// filesystem changes made since. There is no way back to the
/// uninitialized state.
///
/// # Errors
///
/// Same failure modes as [`ResourceLocator::discover`], and only on the
/// call that performs the initial resolution.
pub fn init_global(library_dir: impl Into<PathBuf>) -> Result<&'static ResourceLocator, Error> {
    if let Some(existing) = GLOBAL.get() {
        return Ok(existing);
    }

    // Check-and-set under a lock so losers of the race never run detection.
    let _guard = INIT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(existing) = GLOBAL.get() {
        return Ok(existing);
    }
    let locator = ResourceLocator::discover(library_dir)?;
    let _ = GLOBAL.set(locator);
    GLOBAL
        .get()
        .ok_or_else(|| Error::internal("global locator missing after initialization"))
}

/// The process-wide locator, if [`init_global`] has completed
#[must_use]
pub fn global() -> Option<&'static ResourceLocator> {
    GLOBAL.get()
}
