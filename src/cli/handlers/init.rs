use std::fs;

use crate::cli::commands::InitArgs;
use crate::io::config_io;

/// Choose and persist the root directory for day files.
///
/// The directory must live under the user's home directory; anything else
/// is rejected and nothing is persisted. The directory is created when it
/// does not exist yet.
pub fn cmd_init(args: InitArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let root = std::path::Path::new(&args.dir);
    let config = config_io::set_root_dir(root)?;
    fs::create_dir_all(&config.root_dir)?;
    if json {
        println!(
            "{}",
            serde_json::json!({ "root_dir": config.root_dir })
        );
    } else {
        println!("tracking day files in {}", config.root_dir.display());
    }
    Ok(())
}
