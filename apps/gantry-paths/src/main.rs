//! gantry-paths - print the resolved gantry installation layout
//!
//! Thin inspection tool for installers and packaging scripts. It resolves
//! the installation mode and path table exactly as the server does at
//! bootstrap and prints them, human-readable or as JSON.

use clap::Parser;
use gantry_errors::UserFacingError;
use gantry_locator::{constants, ResourceLocator};
use std::path::PathBuf;
use std::process;
use tracing::debug;

#[derive(Parser)]
#[command(name = "gantry-paths", version, about)]
struct Cli {
    /// Directory containing the gantry runtime libraries
    #[arg(long, env = "GANTRY_LIBRARY_DIR")]
    library_dir: PathBuf,

    /// Emit machine-readable JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e.user_message());
        if let Some(hint) = e.user_hint() {
            eprintln!("Hint: {hint}");
        }
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), gantry_errors::Error> {
    let locator = ResourceLocator::discover(cli.library_dir.clone())?;
    debug!(mode = %locator.mode(), "resolved installation layout");

    if cli.json {
        print_json(&locator)?;
    } else {
        print_table(&locator);
    }
    Ok(())
}

fn layout_doc(locator: &ResourceLocator) -> serde_json::Value {
    serde_json::json!({
        "version": constants::VERSION,
        "preferred_nginx_version": constants::PREFERRED_NGINX_VERSION,
        "preferred_pcre_version": constants::PREFERRED_PCRE_VERSION,
        "standalone_interface_version": constants::STANDALONE_INTERFACE_VERSION,
        "standalone_binaries_url_root": constants::STANDALONE_BINARIES_URL_ROOT,
        "mode": locator.mode(),
        "library_dir": locator.library_dir(),
        "layout": locator.layout(),
    })
}

fn print_json(locator: &ResourceLocator) -> Result<(), gantry_errors::Error> {
    let rendered = serde_json::to_string_pretty(&layout_doc(locator))
        .map_err(|e| gantry_errors::Error::internal(e.to_string()))?;
    println!("{rendered}");
    Ok(())
}

fn print_table(locator: &ResourceLocator) {
    let layout = locator.layout();
    println!("gantry {} ({} installation)", constants::VERSION, locator.mode());
    println!("library dir:        {}", locator.library_dir().display());
    println!("source root:        {}", layout.source_root.display());
    println!("native support dir: {}", layout.native_support_dir.display());
    println!("doc dir:            {}", layout.doc_dir.display());
    println!("agents dir:         {}", layout.agents_dir.display());
    println!("helper scripts dir: {}", layout.helper_scripts_dir.display());
    println!("templates dir:      {}", layout.templates_dir.display());
    println!("local dir:          {}", layout.local_dir.display());
    for (index, dir) in layout.plugin_dirs.iter().enumerate() {
        println!("plugin dir #{index}:      {}", dir.display());
    }
}

fn init_tracing(debug: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
