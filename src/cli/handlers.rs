#[cfg(test)]
#[path = "handlers_test.rs"]
mod tests;

use std::io::Write;

use eyre::{Context, Result};

use crate::backend::ArcBackend;
use crate::models::TodoId;
use crate::store::TodoViewModel;

use super::TodoCommand;

/// Runs a one-shot command against the service and prints the result to `out`.
pub async fn run_command(
    command: &TodoCommand,
    backend: ArcBackend,
    out: &mut impl Write,
) -> Result<()> {
    let mut vm = TodoViewModel::new(backend.clone());

    match command {
        TodoCommand::List => {
            vm.load().await.wrap_err("loading todos")?;
            if vm.list().is_empty() {
                writeln!(out, "Nothing to do.")?;
            }
            for todo in vm.list().todos() {
                writeln!(out, "{todo}")?;
            }
        }

        TodoCommand::Show { id } => {
            let todo = backend
                .get_todo(*id)
                .await
                .wrap_err_with(|| format!("fetching todo {id}"))?;
            writeln!(out, "{todo}")?;
        }

        TodoCommand::Add { task } => {
            let text = task.join(" ");
            if text.trim().is_empty() {
                eyre::bail!("task text is empty");
            }
            vm.add(&text).await.wrap_err("adding todo")?;
            if let Some(todo) = vm.list().todos().last() {
                writeln!(out, "Added {}", todo.to_string().trim_start())?;
            }
        }

        TodoCommand::Toggle { id } => {
            vm.load().await.wrap_err("loading todos")?;
            vm.toggle_status(*id)
                .await
                .wrap_err_with(|| format!("toggling todo {id}"))?;
            print_todo(&vm, *id, out)?;
        }

        TodoCommand::Edit { id, task } => {
            vm.load().await.wrap_err("loading todos")?;
            let current = vm
                .list()
                .get(*id)
                .map(|t| t.task.clone())
                .unwrap_or_default();
            vm.start_edit(*id, &current)
                .wrap_err_with(|| format!("editing todo {id}"))?;
            vm.set_draft(&task.join(" "));
            vm.save_edit(*id)
                .await
                .wrap_err_with(|| format!("saving todo {id}"))?;
            print_todo(&vm, *id, out)?;
        }

        TodoCommand::Delete { id } => {
            vm.load().await.wrap_err("loading todos")?;
            vm.delete(*id)
                .await
                .wrap_err_with(|| format!("deleting todo {id}"))?;
            writeln!(out, "Deleted {id}")?;
        }
    }
    Ok(())
}

fn print_todo(vm: &TodoViewModel, id: TodoId, out: &mut impl Write) -> Result<()> {
    if let Some(todo) = vm.list().get(id) {
        writeln!(out, "{}", todo.to_string().trim_start())?;
    }
    Ok(())
}
