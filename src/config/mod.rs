pub mod constants;
pub mod models;
pub mod utils;

pub use models::*;
pub use utils::*;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::sync::OnceLock;

use once_cell::sync::Lazy;

/// Name of the installed binary.
pub const APP_NAME: &str = "todo";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_SHA: Option<&str> = option_env!("GIT_SHA");

pub fn user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), VERSION)
}

pub fn version() -> String {
    match GIT_SHA {
        Some(sha) => format!("{APP_NAME} {VERSION} ({sha})"),
        None => format!("{APP_NAME} {VERSION}"),
    }
}

#[cfg(not(test))]
static CONFIG: OnceLock<Configuration> = OnceLock::new();

// Read before `init` has run, e.g. by a one-shot command that failed early.
static FALLBACK: Lazy<Configuration> = Lazy::new(Configuration::default);

#[cfg(test)]
thread_local! {
    static TEST_CONFIG: RefCell<Option<&'static Configuration>> = const { RefCell::new(None) };
}

impl Configuration {
    #[cfg(not(test))]
    pub fn instance() -> &'static Configuration {
        CONFIG.get().unwrap_or(&*FALLBACK)
    }

    #[cfg(not(test))]
    pub fn init(config: Configuration) -> eyre::Result<()> {
        CONFIG
            .set(config)
            .map_err(|_| eyre::eyre!("configuration is already initialized"))
    }

    #[cfg(test)]
    pub fn instance() -> &'static Configuration {
        TEST_CONFIG.with(|config| config.borrow().unwrap_or(&*FALLBACK))
    }

    #[cfg(test)]
    pub fn init(config: Configuration) -> eyre::Result<()> {
        TEST_CONFIG.with(|test_config| {
            *test_config.borrow_mut() = Some(Box::leak(Box::new(config)));
        });
        Ok(())
    }
}

pub fn verbose_enabled() -> bool {
    Configuration::instance().general.verbose
}

/// Prints startup progress to stderr when `general.verbose` is set.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::config::verbose_enabled() {
            eprintln!($($arg)*);
        }
    };
}

pub use verbose;
