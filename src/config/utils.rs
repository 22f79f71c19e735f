#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::Local;
use eyre::{Context, Result};
use log::LevelFilter;
use regex::Regex;

use super::{APP_NAME, Configuration, LogConfig};

pub fn load_configuration(path: impl AsRef<Path>) -> Result<Configuration> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("reading {}", path.display()))?;
    let config: Configuration = toml::from_str(&raw)
        .wrap_err_with(|| format!("parsing configuration {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Sends every log record to the configured file. The terminal belongs to the
/// UI, so nothing is ever written to stdout or stderr.
pub fn init_logger(config: &LogConfig) -> Result<()> {
    let path = resolve_path(&config.file.path)
        .wrap_err_with(|| format!("resolving log file path {}", config.file.path))?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .wrap_err_with(|| format!("creating directory {}", dir.display()))?;
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .append(config.file.append)
        .truncate(!config.file.append)
        .open(&path)
        .wrap_err_with(|| format!("opening log file {}", path.display()))?;

    let level = parse_level(&config.level)?;
    let mut builder = env_logger::Builder::new();
    builder.filter(None, level);
    for filter in &config.filters {
        let module_level = match filter.level.as_deref() {
            Some(raw) => parse_level(raw)?,
            None => level,
        };
        builder.filter(Some(filter.module.as_str()), module_level);
    }

    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{}/{}:{} {} [{}] - {}",
                record.module_path().unwrap_or("unknown"),
                basename(record.file().unwrap_or("unknown")),
                record.line().unwrap_or(0),
                Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .try_init()
        .wrap_err("installing logger")?;
    Ok(())
}

fn parse_level(raw: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(raw).wrap_err_with(|| format!("unknown log level {raw:?}"))
}

pub fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Expands `$VAR` and `${VAR}` and makes the result absolute. Unset variables
/// expand to nothing.
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let re = Regex::new(r"\$\{?([A-Za-z_][A-Za-z0-9_]*)\}?").wrap_err("compiling regex")?;
    let expanded = re.replace_all(path, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_default()
    });
    std::path::absolute(expanded.as_ref()).wrap_err_with(|| format!("resolving path {expanded}"))
}

/// First existing file among:
/// * $XDG_CONFIG_HOME/todo/config.toml
/// * $HOME/.config/todo/config.toml
/// * $HOME/.todo.toml
pub fn lookup_config_path() -> Option<PathBuf> {
    config_candidates(
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
    .into_iter()
    .find(|path| path.is_file())
}

fn config_candidates(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> Vec<PathBuf> {
    let mut paths = vec![];
    if let Some(xdg) = xdg_config_home {
        paths.push(xdg.join(APP_NAME).join("config.toml"));
    }
    if let Some(home) = home {
        paths.push(home.join(".config").join(APP_NAME).join("config.toml"));
        paths.push(home.join(format!(".{APP_NAME}.toml")));
    }
    paths
}
