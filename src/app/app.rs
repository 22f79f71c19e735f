use std::io;
use std::time::Duration;

use crate::models::{Action, Event, NoticeMessage, Outcome, TodoError};
use eyre::Result;
use ratatui::{
    Terminal,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::{Backend, CrosstermBackend},
    widgets::Paragraph,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tui_textarea::Key;

use crate::app::{
    app_state::{AppState, Focus},
    restore_terminal, setup_terminal,
    ui::{EditBox, Loading, Notice, TaskInput, TodoItems, help, utils},
};

use super::services::EventService;

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 10;

pub struct App<'a> {
    action_tx: mpsc::UnboundedSender<Action>,

    events: &'a mut EventService,

    app_state: AppState,
    todo_items: TodoItems,
    input: TaskInput<'a>,
    edit_box: EditBox<'a>,

    notice: Notice,
    loading: Loading,

    cancel_token: CancellationToken,
}

impl<'a> App<'a> {
    pub fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        events: &'a mut EventService,
        cancel_token: CancellationToken,
    ) -> App<'a> {
        App {
            action_tx,
            events,
            app_state: AppState::new(),
            todo_items: TodoItems::new(),
            input: TaskInput::new(),
            edit_box: EditBox::default(),
            notice: Notice::default(),
            loading: Loading::default(),
            cancel_token,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();

        setup_terminal(&mut stdout)?;

        let term_backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(term_backend)?;

        let load = self.app_state.todos.begin_load();
        self.dispatch(load);
        let result = self.start_loop(&mut terminal).await;

        self.cancel_token.cancel();

        restore_terminal(terminal.backend_mut())?;
        result
    }

    async fn start_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.render(terminal)?;
            let event = self.events.next().await;
            if self.handle_event(event) {
                return Ok(());
            }
        }
    }

    /// Returns true when the app should quit.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Quit => return true,

            Event::Backend(outcome) => self.handle_outcome(outcome),

            Event::Notice(msg) => self.notice.add_message(msg),

            Event::UiTick => self.loading.tick(),

            event if self.edit_box.showing() => self.handle_edit_event(event),

            Event::KeyboardTab => self.toggle_focus(),

            event => match self.app_state.focus {
                Focus::Input => self.handle_input_event(event),
                Focus::List => self.handle_list_event(event),
            },
        }
        false
    }

    fn handle_input_event(&mut self, event: Event) {
        match event {
            Event::KeyboardCharInput(c) => {
                self.input.input(c);
                self.sync_input();
            }

            Event::KeyboardPaste(text) => {
                self.input.paste(&text);
                self.sync_input();
            }

            Event::KeyboardCtrlC => {
                self.input.clear();
                self.sync_input();
            }

            Event::KeyboardEnter => {
                if let Some(action) = self.app_state.todos.begin_add() {
                    self.dispatch(action);
                }
            }

            Event::UiDown => self.toggle_focus(),

            _ => {}
        }
    }

    fn handle_list_event(&mut self, event: Event) {
        match event {
            Event::UiUp => self.app_state.select_prev(),
            Event::UiDown => self.app_state.select_next(),
            Event::KeyboardEsc => self.toggle_focus(),

            Event::KeyboardCharInput(input) => match input.key {
                Key::Char('k') => self.app_state.select_prev(),
                Key::Char('j') => self.app_state.select_next(),
                Key::Char(' ') | Key::Char('x') => self.toggle_selected(),
                Key::Char('e') => self.edit_selected(),
                Key::Char('d') => self.delete_selected(),
                Key::Char('r') => {
                    let action = self.app_state.todos.begin_load();
                    self.dispatch(action);
                }
                _ => {}
            },

            _ => {}
        }
    }

    /// The popup has no cancel path: leaving it always saves the draft.
    fn handle_edit_event(&mut self, event: Event) {
        match event {
            Event::KeyboardEnter | Event::KeyboardEsc => {
                let Some((id, draft)) = self.edit_box.close() else {
                    return;
                };
                self.app_state.todos.set_draft(draft);
                match self.app_state.todos.begin_save_edit(id) {
                    Ok(action) => self.dispatch(action),
                    Err(err) => self.report(err),
                }
            }
            event => self.edit_box.handle_key_event(event),
        }
    }

    fn handle_outcome(&mut self, outcome: Outcome) {
        let deleted = matches!(outcome, Outcome::Deleted(_, Ok(())));
        let created = matches!(outcome, Outcome::Created(Ok(_)));

        if let Err(err) = self.app_state.todos.apply(outcome) {
            self.report(err);
            self.app_state.clamp_cursor();
            return;
        }

        if created {
            self.input.clear();
            self.app_state.select_last();
        }
        if deleted {
            self.notice
                .add_message(NoticeMessage::info("Task deleted").with_ttl(Duration::from_secs(2)));
        }
        self.app_state.clamp_cursor();
    }

    fn toggle_selected(&mut self) {
        let Some(id) = self.app_state.selected().map(|t| t.id) else {
            return;
        };
        match self.app_state.todos.begin_toggle(id) {
            Ok(action) => self.dispatch(action),
            Err(err) => self.report(err),
        }
    }

    fn edit_selected(&mut self) {
        let Some(todo) = self.app_state.selected().cloned() else {
            return;
        };
        match self.app_state.todos.start_edit(todo.id, todo.task.as_str()) {
            Ok(()) => self.edit_box.open(&todo),
            Err(err) => self.report(err),
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.app_state.selected().map(|t| t.id) else {
            return;
        };
        match self.app_state.todos.begin_delete(id) {
            Ok(action) => self.dispatch(action),
            Err(err) => self.report(err),
        }
    }

    fn dispatch(&mut self, action: Action) {
        log::debug!("Dispatching {} action", action.name());
        if let Err(err) = self.action_tx.send(action) {
            log::error!("Failed to dispatch action: {}", err);
            self.notice
                .add_message(NoticeMessage::error("Request service is not running"));
        }
    }

    fn report(&mut self, err: TodoError) {
        log::error!("Todo operation failed: {}", err);
        self.notice.add_message(NoticeMessage::from(&err));
    }

    fn toggle_focus(&mut self) {
        self.app_state.toggle_focus();
        self.input.set_focus(self.app_state.focus == Focus::Input);
    }

    fn sync_input(&mut self) {
        self.app_state.todos.set_input(self.input.text());
    }

    fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|f| {
            let area = f.area();
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                f.render_widget(
                    Paragraph::new(format!(
                        "I'm too small, make me bigger! I need at least {}x{} cells (current: {}x{})",
                        MIN_WIDTH, MIN_HEIGHT, area.width, area.height
                    ))
                    .alignment(Alignment::Left),
                    area,
                );
                return;
            }

            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Min(1),
                    Constraint::Length(3),
                    Constraint::Length(1),
                ])
                .split(area);

            if self.app_state.todos.loading() {
                self.loading.render(f, layout[0]);
            } else {
                self.todo_items.render(
                    f,
                    layout[0],
                    &self.app_state,
                    self.app_state.focus == Focus::List,
                );
            }

            self.input.render(f, layout[1]);
            help::render_help_line(f, layout[2], self.app_state.focus);

            self.edit_box.render(f, utils::popup_area(layout[0], 70, 3));
            self.notice.render(f, utils::notice_area(area, 35));
        })?;
        Ok(())
    }
}
