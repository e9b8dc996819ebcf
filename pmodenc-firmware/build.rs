//! Build script for pmodenc-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates encoder.toml and generates the compiled-in configuration

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use pmodenc_core::{ConfigError, EncoderConfig, InputPull};

fn main() {
    setup_linker();
    generate_config();
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

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate encoder.toml and write `encoder_config.rs` to OUT_DIR
fn generate_config() {
    println!("cargo:rerun-if-changed=encoder.toml");

    let config_path = Path::new("encoder.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: encoder.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires an encoder.toml configuration file.       ║\n\
            ║  Please create one in the pmodenc-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read encoder.toml", &e.to_string()),
    };

    let value: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => fail("Invalid TOML syntax in encoder.toml", &e.to_string()),
    };

    let config = parse_encoder_section(&value);

    if let Err(e) = config.validate() {
        let reason = match e {
            ConfigError::TickIntervalTooShort => "tick_interval_ms is below the minimum (1)",
            ConfigError::TickIntervalTooLong => "tick_interval_ms is above the maximum (5)",
        };
        fail("Invalid [encoder] settings in encoder.toml", reason);
    }

    let pull = match config.pull {
        InputPull::None => "None",
        InputPull::Up => "Up",
        InputPull::Down => "Down",
    };

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("encoder_config.rs")).unwrap();
    write!(
        f,
        "/// Encoder configuration generated from encoder.toml\n\
         pub const ENCODER_CONFIG: pmodenc_core::EncoderConfig = pmodenc_core::EncoderConfig {{\n    \
             tick_interval_ms: {},\n    \
             invert_direction: {},\n    \
             pull: pmodenc_core::InputPull::{},\n\
         }};\n",
        config.tick_interval_ms, config.invert_direction, pull
    )
    .unwrap();

    println!("cargo:warning=encoder.toml validated successfully");
}

/// Read the `[encoder]` section, falling back to defaults for missing keys
fn parse_encoder_section(value: &toml::Value) -> EncoderConfig {
    let mut config = EncoderConfig::default();

    let Some(section) = value.get("encoder") else {
        fail("Missing [encoder] section in encoder.toml", "");
    };

    if let Some(v) = section.get("tick_interval_ms") {
        match v.as_integer() {
            Some(ms) if (0..=u32::MAX as i64).contains(&ms) => config.tick_interval_ms = ms as u32,
            _ => fail("Invalid tick_interval_ms", "expected a non-negative integer"),
        }
    }

    if let Some(v) = section.get("invert_direction") {
        match v.as_bool() {
            Some(invert) => config.invert_direction = invert,
            None => fail("Invalid invert_direction", "expected true or false"),
        }
    }

    if let Some(v) = section.get("pull") {
        config.pull = match v.as_str() {
            Some("none") => InputPull::None,
            Some("up") => InputPull::Up,
            Some("down") => InputPull::Down,
            _ => fail("Invalid pull", "expected \"none\", \"up\" or \"down\""),
        };
    }

    config
}

/// Abort the build with a boxed error message
fn fail(title: &str, detail: &str) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(detail)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
