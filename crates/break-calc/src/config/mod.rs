//! Configuration module for break-calc.

use anyhow::{Context, Result, anyhow};
use std::io::{self, Write};
use std::path::Path;

pub mod keybindings;

pub use keybindings::{Action, KeyBindingsConfig};

/// Initialize the configuration file with defaults.
pub fn init_config(output: Option<&Path>, force: bool) -> Result<()> {
    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => keybindings::default_config_path()
            .ok_or_else(|| anyhow!("could not determine the config directory"))?,
    };

    write_config_file(&output_path, force)?;

    Ok(())
}

fn write_config_file(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force && !confirm_overwrite(path)? {
        println!("aborted.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    let content = keybindings::generate_default_config_toml()?;

    std::fs::write(path, content)
        .with_context(|| format!("failed to write config file: {}", path.display()))?;

    println!("\u{2713} created config file: {}", path.display());
    println!();
    println!("Edit this file to customize key bindings.");
    println!("Restart break-calc tui to apply the changes.");

    Ok(())
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    print!(
        "File already exists: {}\nOverwrite? [y/N]: ",
        path.display()
    );
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}
