//! Path table construction

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    LOCAL_DIR_NAME, NATIVE_AGENTS_DIR, NATIVE_DOC_DIR, NATIVE_HELPER_SCRIPTS_DIR,
    NATIVE_SOURCE_ROOT, NATIVE_SUPPORT_DIR, SYSTEM_LOCAL_PLUGIN_DIR, SYSTEM_PLUGIN_DIR,
    TEMPLATES_SUBDIR,
};
use crate::mode::InstallationMode;

/// Resolved resource locations for a gantry installation
///
/// A pure function of (mode, library directory, home directory). Built once
/// at bootstrap and treated as read-only for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathLayout {
    /// Top directory of the gantry source tree
    pub source_root: PathBuf,
    /// Directory containing the native support library
    pub native_support_dir: PathBuf,
    /// Documentation directory
    pub doc_dir: PathBuf,
    /// Directory containing agent executables
    pub agents_dir: PathBuf,
    /// Directory containing helper scripts
    pub helper_scripts_dir: PathBuf,
    /// Directory containing templates, always under the library directory
    pub templates_dir: PathBuf,
    /// Per-user resource directory under the home directory
    pub local_dir: PathBuf,
    /// Plugin search directories: system-wide, system-local, per-user.
    /// Order defines discovery precedence.
    pub plugin_dirs: [PathBuf; 3],
}

impl PathLayout {
    /// Build the complete path table for `mode`.
    ///
    /// Performs no filesystem access and never fails; a consumer that needs
    /// one of these directories to exist checks for itself.
    #[must_use]
    pub fn build(mode: InstallationMode, library_dir: &Path, home_dir: &Path) -> Self {
        let local_dir = home_dir.join(LOCAL_DIR_NAME);
        let plugin_dirs = [
            PathBuf::from(SYSTEM_PLUGIN_DIR),
            PathBuf::from(SYSTEM_LOCAL_PLUGIN_DIR),
            local_dir.join("plugins"),
        ];
        let templates_dir = library_dir.join(TEMPLATES_SUBDIR);

        match mode {
            InstallationMode::Native => Self {
                source_root: PathBuf::from(NATIVE_SOURCE_ROOT),
                native_support_dir: PathBuf::from(NATIVE_SUPPORT_DIR),
                doc_dir: PathBuf::from(NATIVE_DOC_DIR),
                agents_dir: PathBuf::from(NATIVE_AGENTS_DIR),
                helper_scripts_dir: PathBuf::from(NATIVE_HELPER_SCRIPTS_DIR),
                templates_dir,
                local_dir,
                plugin_dirs,
            },
            InstallationMode::Source => {
                let source_root = library_dir
                    .parent()
                    .map_or_else(|| library_dir.to_path_buf(), Path::to_path_buf);
                Self {
                    native_support_dir: source_root.join("ext").join("gantry"),
                    doc_dir: source_root.join("doc"),
                    agents_dir: source_root.join("agents"),
                    helper_scripts_dir: source_root.join("helper-scripts"),
                    templates_dir,
                    local_dir,
                    plugin_dirs,
                    source_root,
                }
            }
        }
    }
}
