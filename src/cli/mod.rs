pub mod handlers;

pub use handlers::run_command;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::{Context, Result};

use crate::config::{self, Configuration, load_configuration, lookup_config_path};
use crate::models::TodoId;

#[derive(Debug, Parser)]
#[command(
    version,
    about,
    long_about = r#"A terminal client for a REST todo-list service

Without a command the interactive UI starts.

Default configuration file location looks up in the following order:
    * $XDG_CONFIG_HOME/todo/config.toml
    * $HOME/.config/todo/config.toml
    * $HOME/.todo.toml
"#,
    disable_version_flag = true
)]
pub struct Command {
    /// Configuration file path
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base URL of the todo service, overrides the configuration
    #[arg(short, long, value_name = "URL")]
    endpoint: Option<String>,

    /// Show the version
    #[arg(short, long)]
    version: bool,

    #[command(subcommand)]
    command: Option<TodoCommand>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum TodoCommand {
    /// List all todos
    #[command(alias = "ls")]
    List,

    /// Show a single todo
    Show { id: TodoId },

    /// Add a new todo
    Add {
        #[arg(required = true, num_args = 1..)]
        task: Vec<String>,
    },

    /// Flip a todo between done and not done
    Toggle { id: TodoId },

    /// Replace the text of a todo
    Edit {
        id: TodoId,
        #[arg(required = true, num_args = 1..)]
        task: Vec<String>,
    },

    /// Delete a todo
    #[command(alias = "rm")]
    Delete { id: TodoId },
}

impl Command {
    pub fn new() -> Command {
        Self::parse()
    }

    pub fn get_config(&self) -> Result<Configuration> {
        let mut config = match self.config.clone().or_else(lookup_config_path) {
            Some(path) => load_configuration(&path).wrap_err("loading configuration")?,
            // No config file found, run with defaults
            None => Configuration::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.backend.endpoint = endpoint.clone();
            config.validate()?;
        }
        Ok(config)
    }

    pub fn command(&self) -> Option<&TodoCommand> {
        self.command.as_ref()
    }

    pub fn version(&self) -> bool {
        self.version
    }

    pub fn print_version(&self) {
        println!("{}", config::version())
    }
}
