//! Installation mode detection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::constants::{BUILD_MARKER, CONTRIB_MARKER};

/// How this gantry installation reached the current machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallationMode {
    /// Installed through the OS package manager; fixed filesystem-hierarchy
    /// paths, development files stripped
    Native,
    /// Running directly out of an unpacked source tree; paths derived from
    /// the checkout root
    Source,
}

impl InstallationMode {
    /// Detect the installation mode from the filesystem around `library_dir`.
    ///
    /// A source checkout keeps [`BUILD_MARKER`] and [`CONTRIB_MARKER`] one
    /// level above the library directory; native packaging strips both, so
    /// both are required for `Source` and a missing marker means `Native`.
    /// A probe failure (permission denied and the like) counts as a missing
    /// marker.
    #[must_use]
    pub fn detect(library_dir: &Path) -> Self {
        let build_marker = library_dir.join("..").join(BUILD_MARKER);
        let contrib_marker = library_dir.join("..").join(CONTRIB_MARKER);

        // Path::exists maps probe errors to false, which is exactly the
        // conservative fallback wanted here.
        let mode = if build_marker.exists() && contrib_marker.exists() {
            Self::Source
        } else {
            Self::Native
        };
        debug!(
            mode = %mode,
            library_dir = %library_dir.display(),
            "detected installation mode"
        );
        mode
    }

    /// Whether this installation came from the OS package manager
    #[must_use]
    pub fn is_native(self) -> bool {
        matches!(self, Self::Native)
    }
}

impl fmt::Display for InstallationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Source => write!(f, "source"),
        }
    }
}
