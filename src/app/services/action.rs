#[cfg(test)]
#[path = "action_test.rs"]
mod tests;

use std::sync::Arc;

use crate::backend::{ArcBackend, perform};
use crate::models::{Action, Event, NoticeMessage};
use eyre::Result;
use tokio::{sync::mpsc, task::JoinSet};
use tokio_util::sync::CancellationToken;

/// Runs each [`Action`] as its own request and posts the outcome back to the
/// UI loop. Requests are not serialized: two actions sent back to back are in
/// flight at the same time.
pub struct ActionService {
    event_tx: mpsc::UnboundedSender<Event>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    cancel_token: CancellationToken,
    backend: ArcBackend,
    workers: JoinSet<()>,
}

impl ActionService {
    pub fn new(
        backend: ArcBackend,
        action_rx: mpsc::UnboundedReceiver<Action>,
        event_tx: mpsc::UnboundedSender<Event>,
        cancel_token: CancellationToken,
    ) -> ActionService {
        ActionService {
            event_tx,
            action_rx,
            cancel_token,
            backend,
            workers: JoinSet::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        loop {
            tokio::select! {
                _ = self.cancel_token.cancelled() => {
                    log::debug!("Action service cancelled");
                    self.workers.abort_all();
                    return Ok(());
                }

                Some(res) = self.workers.join_next(), if !self.workers.is_empty() => {
                    if let Err(err) = res {
                        log::error!("Request worker failed: {}", err);
                        let notice =
                            NoticeMessage::error("A request failed unexpectedly, press r to reload");
                        let _ = self.event_tx.send(Event::Notice(notice));
                    }
                }

                action = self.action_rx.recv() => {
                    let Some(action) = action else {
                        log::debug!("Action channel closed");
                        return Ok(());
                    };

                    let backend = Arc::clone(&self.backend);
                    let event_tx = self.event_tx.clone();
                    self.workers.spawn(async move {
                        let name = action.name();
                        let outcome = perform(backend.as_ref(), action).await;
                        if event_tx.send(Event::Backend(outcome)).is_err() {
                            log::warn!("Dropped {} outcome, UI is gone", name);
                        }
                    });
                }
            }
        }
    }
}
