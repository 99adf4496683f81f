//! Build script for the now-playing relay.
//!
//! Copies the `.env.example` configuration template into the user's local
//! data directory, next to where [`config::load_env`] looks for `.env`:
//! - Linux: `~/.local/share/nowplaying-relay/.env.example`
//! - macOS: `~/Library/Application Support/nowplaying-relay/.env.example`
//! - Windows: `%LOCALAPPDATA%/nowplaying-relay/.env.example`
//!
//! A missing template only produces a cargo warning.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("nowplaying-relay");

    if env_example_path.is_file() {
        // Sandboxed builds may not be allowed to write there.
        let copied = fs::create_dir_all(&out_dir)
            .and_then(|_| fs::copy(&env_example_path, out_dir.join(".env.example")));
        if let Err(e) = copied {
            println!(
                "cargo:warning=could not copy .env.example to {}: {}",
                out_dir.display(),
                e
            );
        }
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
