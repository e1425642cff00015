use civlog_engine::{
    Action, Direction, Key, KeyInput, Outcome, PagePartitioner, Phase, action_for_key,
};

use super::ui::COLUMN_COUNT;

/// Keys handled by the terminal session itself rather than the partitioner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Quit,
    DeleteLastPage,
    StartHereAtHighlight,
    ResetSelection,
}

pub fn session_command(phase: Phase, input: KeyInput) -> Option<SessionCommand> {
    match (phase, input.ctrl, input.key) {
        (_, true, Key::Char('c')) => Some(SessionCommand::Quit),
        (Phase::PageClosed, _, _) => None,
        (_, false, Key::Char('q')) => Some(SessionCommand::Quit),
        (Phase::Browsing, false, Key::Char('d')) => Some(SessionCommand::DeleteLastPage),
        (Phase::Browsing, false, Key::Char('s')) => Some(SessionCommand::StartHereAtHighlight),
        (Phase::Browsing, false, Key::Char('r')) => Some(SessionCommand::ResetSelection),
        _ => None,
    }
}

/// UI state of `civlog close`: the partitioner plus what only the screen needs
pub struct CloseApp {
    pub partitioner: PagePartitioner,
    pub title: String,
    /// First scrollable table column shown
    pub column_offset: usize,
    pub should_quit: bool,
}

impl CloseApp {
    pub fn new(partitioner: PagePartitioner, title: impl Into<String>) -> Self {
        Self {
            partitioner,
            title: title.into(),
            column_offset: 0,
            should_quit: false,
        }
    }

    pub fn handle_input(&mut self, input: KeyInput) {
        let phase = self.partitioner.phase();

        if let Some(command) = session_command(phase, input) {
            self.run_command(command);
            return;
        }

        let Some(action) = action_for_key(phase, input) else {
            return;
        };

        match self.partitioner.apply(action) {
            Outcome::ScrollColumns(Direction::Backward) => {
                self.column_offset = self.column_offset.saturating_sub(1);
            }
            Outcome::ScrollColumns(Direction::Forward) => {
                self.column_offset = (self.column_offset + 1).min(COLUMN_COUNT - 1);
            }
            Outcome::Changed | Outcome::Ignored => {}
        }
    }

    fn run_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Quit => self.should_quit = true,
            SessionCommand::DeleteLastPage => {
                if let Some(number) = self.partitioner.pages().iter().map(|p| p.number).max() {
                    self.partitioner.apply(Action::DeletePage(number));
                }
            }
            SessionCommand::StartHereAtHighlight => {
                let id = self
                    .partitioner
                    .highlight()
                    .and_then(|position| self.partitioner.unassigned().get(position))
                    .map(|record| record.id);
                if let Some(id) = id {
                    self.partitioner.apply(Action::StartHere(id));
                }
            }
            SessionCommand::ResetSelection => {
                self.partitioner.apply(Action::ResetSelection);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civlog_providers::load_export;
    use civlog_testing::ExportBuilder;

    fn app() -> CloseApp {
        let export = ExportBuilder::twelve_row_scenario();
        let loaded = load_export("voos.csv", &export.csv_bytes()).unwrap();
        CloseApp::new(PagePartitioner::new(loaded.records, 4), "voos.csv")
    }

    fn press(app: &mut CloseApp, key: Key) {
        app.handle_input(KeyInput::plain(key));
    }

    #[test]
    fn test_close_delete_and_quit() {
        let mut app = app();
        press(&mut app, Key::Down);
        press(&mut app, Key::Down);
        press(&mut app, Key::Enter);
        app.handle_input(KeyInput::ctrl(Key::Char('f')));
        assert_eq!(app.partitioner.phase(), Phase::PageClosed);

        // 'q' is dead while reviewing
        press(&mut app, Key::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, Key::Enter);

        assert_eq!(app.partitioner.pages().len(), 1);
        assert_eq!(app.partitioner.pages()[0].len(), 2);

        press(&mut app, Key::Char('d'));
        assert!(app.partitioner.pages().is_empty());
        assert_eq!(app.partitioner.unassigned().len(), 7);

        press(&mut app, Key::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_start_here_at_highlight() {
        let mut app = app();
        app.handle_input(KeyInput::ctrl(Key::Right));
        press(&mut app, Key::Down);
        press(&mut app, Key::Down);
        assert_eq!(app.partitioner.highlight(), Some(5));

        press(&mut app, Key::Char('s'));
        assert_eq!(app.partitioner.pages().len(), 1);
        assert_eq!(app.partitioner.pages()[0].len(), 6);
        assert_eq!(app.partitioner.unassigned().len(), 3);
    }

    #[test]
    fn test_column_scroll_is_clamped() {
        let mut app = app();
        press(&mut app, Key::Left);
        assert_eq!(app.column_offset, 0);
        for _ in 0..50 {
            press(&mut app, Key::Right);
        }
        assert_eq!(app.column_offset, COLUMN_COUNT - 1);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = app();
        press(&mut app, Key::Down);
        press(&mut app, Key::Enter);
        app.handle_input(KeyInput::ctrl(Key::Char('f')));
        app.handle_input(KeyInput::ctrl(Key::Char('c')));
        assert!(app.should_quit);
    }
}
