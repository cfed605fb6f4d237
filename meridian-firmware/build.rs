//! Build script for meridian-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates watchface.toml at compile time
//! - Records the build time as the initial UTC epoch

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use meridian_core::config::{parse_config, FaceConfig};

fn main() {
    setup_linker();
    validate_config();
    write_build_epoch();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate watchface.toml configuration at compile time
fn validate_config() {
    // Re-run if watchface.toml changes
    println!("cargo:rerun-if-changed=watchface.toml");

    let config_path = Path::new("watchface.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: watchface.toml not found!                                ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds watchface.toml from the crate directory.    ║\n\
            ║  Please create one next to Cargo.toml.                           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read watchface.toml                            ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Full TOML + serde: syntax, types, unknown keys
    let config: FaceConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid watchface.toml                                   ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    // The firmware parses the same file with the no_std subset parser;
    // both must agree or the board would boot with something else
    match parse_config(&config_content) {
        Ok(runtime) if runtime == config => {}
        Ok(runtime) => panic!(
            "watchface.toml: runtime parser disagrees with TOML\n  toml:    {:?}\n  runtime: {:?}",
            config, runtime
        ),
        Err(e) => panic!(
            "watchface.toml uses TOML the firmware parser does not support: {:?}",
            e
        ),
    }

    println!("cargo:warning=watchface.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the current UTC time as the clock's starting point
///
/// The board has no battery-backed clock; uptime is added to this.
fn write_build_epoch() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    File::create(out_dir.join("epoch.rs"))
        .unwrap()
        .write_fmt(format_args!("pub const BUILD_EPOCH: u64 = {};\n", epoch))
        .unwrap();
}
