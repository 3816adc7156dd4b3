use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::data::{SortDir, SortKey};

const MIN_TICK_MS: u64 = 250;
const DEFAULT_TICK_MS: u64 = 3000;
const DEFAULT_TIMEOUT_MS: u64 = 5000;
const DEFAULT_URL: &str = "http://localhost:5000";

/// Runtime configuration
pub struct Config {
    pub url: String,
    pub tick_rate: Duration,
    pub request_timeout: Duration,
    pub sort_key: SortKey,
    pub sort_dir: SortDir,
}

/// File-based configuration (TOML)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    server: ServerConfig,
    general: GeneralConfig,
    display: DisplayConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ServerConfig {
    url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct GeneralConfig {
    tick_rate_ms: u64,
    request_timeout_ms: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_MS,
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DisplayConfig {
    default_sort: String,
    sort_dir: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_sort: "cpu".to_string(),
            sort_dir: String::new(),
        }
    }
}

impl Config {
    pub fn from_args() -> Result<Self, String> {
        // Load file config first
        let file_config = load_config_file().unwrap_or_default();

        // Start with file config values
        let mut url = file_config.server.url;
        let mut tick_ms = file_config.general.tick_rate_ms;
        let timeout_ms = file_config.general.request_timeout_ms;
        let mut sort_key =
            SortKey::parse(&file_config.display.default_sort).unwrap_or(SortKey::Cpu);
        let mut sort_dir: Option<SortDir> = if file_config.display.sort_dir.is_empty() {
            None
        } else {
            SortDir::parse(&file_config.display.sort_dir)
        };

        // Override with CLI args
        let mut args = env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => return Err(usage()),
                "--url" => {
                    url = args
                        .next()
                        .ok_or_else(|| "Missing value for --url\n\n".to_string() + &usage())?;
                }
                "--tick-ms" => {
                    let value = args
                        .next()
                        .ok_or_else(|| "Missing value for --tick-ms\n\n".to_string() + &usage())?;
                    tick_ms = value
                        .parse::<u64>()
                        .map_err(|_| format!("Invalid tick value: {value}\n\n{}", usage()))?;
                }
                "--sort" => {
                    let value = args
                        .next()
                        .ok_or_else(|| "Missing value for --sort\n\n".to_string() + &usage())?;
                    sort_key = SortKey::parse(&value)
                        .ok_or_else(|| format!("Invalid sort key: {value}\n\n{}", usage()))?;
                }
                "--sort-dir" => {
                    let value = args
                        .next()
                        .ok_or_else(|| "Missing value for --sort-dir\n\n".to_string() + &usage())?;
                    sort_dir = Some(
                        SortDir::parse(&value)
                            .ok_or_else(|| format!("Invalid sort dir: {value}\n\n{}", usage()))?,
                    );
                }
                _ => return Err(format!("Unknown argument: {arg}\n\n{}", usage())),
            }
        }

        tick_ms = normalize_tick_ms(tick_ms);
        let sort_dir = sort_dir.unwrap_or_else(|| sort_key.default_dir());

        Ok(Self {
            url,
            tick_rate: Duration::from_millis(tick_ms),
            request_timeout: Duration::from_millis(timeout_ms.max(1)),
            sort_key,
            sort_dir,
        })
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sentop").join("config.toml"))
}

fn load_config_file() -> Option<FileConfig> {
    let path = config_path()?;
    let content = fs::read_to_string(&path).ok()?;
    toml::from_str(&content).ok()
}

fn usage() -> String {
    let config_location = config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "~/.config/sentop/config.toml".to_string());

    [
        "Usage: sentop [options]",
        "",
        "Options:",
        "  --url <base>       Agent base URL (default: http://localhost:5000)",
        "  --tick-ms <ms>     Refresh interval in milliseconds (default: 3000, min: 250)",
        "  --sort <key>       pid | name | cpu | mem | stat",
        "  --sort-dir <dir>   asc | desc",
        "  -h, --help         Show this help",
        "",
        &format!("Config file: {config_location}"),
        "",
        "Example config.toml:",
        "  [server]",
        "  url = \"http://localhost:5000\"",
        "",
        "  [general]",
        "  tick_rate_ms = 3000",
        "  request_timeout_ms = 5000",
        "",
        "  [display]",
        "  default_sort = \"cpu\"",
        "  sort_dir = \"desc\"",
    ]
    .join("\n")
}

fn normalize_tick_ms(value: u64) -> u64 {
    value.max(MIN_TICK_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_tick_ms_clamps_to_min() {
        assert_eq!(normalize_tick_ms(0), MIN_TICK_MS);
        assert_eq!(normalize_tick_ms(MIN_TICK_MS), MIN_TICK_MS);
        assert_eq!(normalize_tick_ms(MIN_TICK_MS + 5), MIN_TICK_MS + 5);
    }

    #[test]
    fn file_config_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.url, DEFAULT_URL);
        assert_eq!(config.general.tick_rate_ms, DEFAULT_TICK_MS);
        assert_eq!(config.general.request_timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.display.default_sort, "cpu");
    }

    #[test]
    fn file_config_partial() {
        let config: FileConfig = toml::from_str(
            r#"
            [server]
            url = "http://agent:9000"

            [display]
            default_sort = "mem"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.url, "http://agent:9000");
        assert_eq!(config.general.tick_rate_ms, DEFAULT_TICK_MS);
        assert_eq!(config.display.default_sort, "mem");
    }
}
