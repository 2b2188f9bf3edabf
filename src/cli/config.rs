//! Config CLI command
//!
//! Shows where settings live and what they currently are.

use crate::config::{paths::CipherPaths, settings::Settings};
use crate::error::CipherResult;

/// Handle the config command
pub fn handle_config_command(
    paths: &CipherPaths,
    settings: &Settings,
    init: bool,
) -> CipherResult<()> {
    if init {
        settings.save(paths)?;
        println!("Wrote settings to {}", paths.settings_file().display());
        println!();
    }

    println!("jciphers Configuration");
    println!("======================");
    println!("Config directory: {}", paths.base_dir().display());
    println!(
        "Settings file:    {}{}",
        paths.settings_file().display(),
        if paths.is_initialized() {
            ""
        } else {
            " (not created, using defaults)"
        }
    );
    println!();
    println!("Settings:");
    println!("  Clear screen: {}", settings.clear_screen);
    println!("  Show banner:  {}", settings.show_banner);
    println!("  Log level:    {}", settings.log_level);

    Ok(())
}
