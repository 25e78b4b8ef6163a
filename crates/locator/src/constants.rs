//! Centralized, non-configurable resource locations and version numbers
//!
//! Natively packaged installations are laid out against exactly these paths
//! by the distribution packages. They are deliberately not exposed via
//! configuration to keep the installed layout stable.

/// gantry version number.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Nginx version gantry is developed and tested against.
pub const PREFERRED_NGINX_VERSION: &str = "1.26.2";

/// PCRE2 version bundled with standalone front-end builds.
pub const PREFERRED_PCRE_VERSION: &str = "10.44";

/// Protocol version spoken between the standalone front end and the core.
pub const STANDALONE_INTERFACE_VERSION: u32 = 1;

/// Download root for prebuilt standalone binaries.
pub const STANDALONE_BINARIES_URL_ROOT: &str = "https://binaries.gantryserver.org";

/// Build-orchestration marker, expected one level above the library
/// directory in a source checkout. Native packages strip it.
pub const BUILD_MARKER: &str = "Makefile";

/// Contributor-documentation marker, same location and lifecycle as
/// [`BUILD_MARKER`].
pub const CONTRIB_MARKER: &str = "CONTRIBUTING.md";

pub const NATIVE_SOURCE_ROOT: &str = "/usr/share/gantry/source";
pub const NATIVE_SUPPORT_DIR: &str = concat!(
    "/usr/lib/gantry/native_support/",
    env!("CARGO_PKG_VERSION")
);
pub const NATIVE_DOC_DIR: &str = "/usr/share/doc/gantry";
pub const NATIVE_AGENTS_DIR: &str = "/usr/lib/gantry/agents";
pub const NATIVE_HELPER_SCRIPTS_DIR: &str = "/usr/share/gantry/helper-scripts";

/// System-wide plugin directory, searched first.
pub const SYSTEM_PLUGIN_DIR: &str = "/usr/share/gantry/plugins";

/// Locally administered plugin directory, searched second.
pub const SYSTEM_LOCAL_PLUGIN_DIR: &str = "/usr/local/share/gantry/plugins";

/// Subdirectory under $HOME used for per-user resource files.
pub const LOCAL_DIR_NAME: &str = ".gantry";

/// Templates subdirectory under the library directory, in every mode.
pub const TEMPLATES_SUBDIR: &str = "templates";
