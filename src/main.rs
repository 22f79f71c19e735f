use std::io;

use eyre::{Context, Result};
use tokio::{sync::mpsc, task};
use tokio_util::sync::CancellationToken;
use todo_tui::app::services::{ActionService, EventService};
use todo_tui::backend::new_backend;
use todo_tui::cli::run_command;
use todo_tui::config::{Configuration, init_logger, verbose};
use todo_tui::models::Action;
use todo_tui::{
    app::{App, restore_terminal_after_panic},
    cli::Command,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = Command::new();
    if cmd.version() {
        cmd.print_version();
        return Ok(());
    }

    let config = cmd.get_config()?;
    init_logger(&config.log)?;
    Configuration::init(config.clone()).wrap_err("initializing configuration")?;
    verbose!("[+] Logger initialized");

    verbose!("[+] Using todo service at {}", config.backend.endpoint);
    let backend = new_backend(&config.backend);

    if let Some(command) = cmd.command() {
        let stdout = io::stdout();
        return run_command(command, backend, &mut stdout.lock()).await;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        restore_terminal_after_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();
    let mut events = EventService::new();

    let mut task_set = task::JoinSet::new();
    let token = CancellationToken::new();

    let mut action_service =
        ActionService::new(backend, action_rx, events.event_tx(), token.clone());
    task_set.spawn(async move { action_service.run().await });

    let mut app = App::new(action_tx, &mut events, token.clone());
    if let Err(err) = app.run().await {
        eprintln!("Error: {}", err);
    }

    token.cancel();
    while let Some(res) = task_set.join_next().await {
        match res {
            Ok(Err(err)) => log::error!("Service error: {}", err),
            Err(err) => log::error!("Task error: {}", err),
            Ok(Ok(())) => {}
        }
    }

    Ok(())
}
