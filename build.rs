use std::env;
use std::fs;
use std::path::Path;

/// Claves de configuración que la app lee con `option_env!`
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "DEFAULT_MAP_CENTER_LAT",
    "DEFAULT_MAP_CENTER_LNG",
    "DEFAULT_MAP_ZOOM",
    "MAP_MOUNT_DELAY_MS",
    "TILE_URL",
    "TILE_ATTRIBUTION",
    "SPONSOR_IMAGE_URL",
];

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    println!("cargo:rerun-if-changed=data/circoscrizioni.json");
    println!("cargo:rerun-if-changed=data/quartieri.json");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No .env file found. Using default values (see .env.example).");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=Could not read .env, using default values.");
        return;
    };

    for (key, value) in contents.lines().filter_map(parse_line) {
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Unknown key in .env ignored: {}", key);
            continue;
        }
        // Las variables del entorno real tienen prioridad sobre .env
        if env::var(key).is_err() && !value.is_empty() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}

/// Parsear una línea KEY=VALUE (ignora comentarios y líneas vacías)
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let value = value.trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
    Some((key.trim(), value))
}
