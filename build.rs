use std::{env, fs};

/// Variables read through `option_env!` in src/config.rs
const CONFIG_VARS: [&str; 5] = [
    "BACKEND_URL_DEVELOPMENT",
    "BACKEND_URL_PRODUCTION",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "DONATION_INTERVAL_DAYS",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for var in CONFIG_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    let contents = match fs::read_to_string(".env") {
        Ok(contents) => contents,
        Err(_) => {
            println!("cargo:warning=No .env file, backend defaults to http://localhost:8000");
            return;
        }
    };
    println!("cargo:rerun-if-changed=.env");

    // Exported shell variables take precedence
    for (key, value) in contents.lines().filter_map(parse_env_line) {
        if env::var_os(key).is_none() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}

/// `KEY=value`, optionally prefixed with `export` and quoted; comments skipped
fn parse_env_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim().trim_matches(|c| c == '"' || c == '\'')))
}
