use crate::partition::{Action, Direction, Phase};

/// Keys the partitioner reacts to, independent of any terminal library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn plain(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    pub fn ctrl(key: Key) -> Self {
        Self { key, ctrl: true }
    }
}

/// Map a key press to a partitioner action for the current phase.
///
/// While a closed page is under review only Enter and Escape are live, and
/// both dismiss the review.
pub fn action_for_key(phase: Phase, input: KeyInput) -> Option<Action> {
    match phase {
        Phase::Empty => None,
        Phase::PageClosed => match input.key {
            Key::Enter | Key::Esc => Some(Action::DismissReview),
            _ => None,
        },
        Phase::Browsing => match (input.ctrl, input.key) {
            (_, Key::Up) => Some(Action::MoveHighlight(Direction::Backward)),
            (_, Key::Down) => Some(Action::MoveHighlight(Direction::Forward)),
            (_, Key::Enter) => Some(Action::ToggleHighlighted),
            (true, Key::Left) => Some(Action::ChangeWindow(Direction::Backward)),
            (true, Key::Right) => Some(Action::ChangeWindow(Direction::Forward)),
            (false, Key::Left) => Some(Action::ScrollColumns(Direction::Backward)),
            (false, Key::Right) => Some(Action::ScrollColumns(Direction::Forward)),
            (true, Key::Char('f' | 'F')) => Some(Action::CommitPage),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browsing_keys() {
        let browse = |input| action_for_key(Phase::Browsing, input);

        assert_eq!(
            browse(KeyInput::plain(Key::Down)),
            Some(Action::MoveHighlight(Direction::Forward))
        );
        assert_eq!(
            browse(KeyInput::plain(Key::Up)),
            Some(Action::MoveHighlight(Direction::Backward))
        );
        assert_eq!(
            browse(KeyInput::plain(Key::Enter)),
            Some(Action::ToggleHighlighted)
        );
        assert_eq!(
            browse(KeyInput::ctrl(Key::Right)),
            Some(Action::ChangeWindow(Direction::Forward))
        );
        assert_eq!(
            browse(KeyInput::plain(Key::Left)),
            Some(Action::ScrollColumns(Direction::Backward))
        );
        assert_eq!(
            browse(KeyInput::ctrl(Key::Char('f'))),
            Some(Action::CommitPage)
        );
        assert_eq!(browse(KeyInput::plain(Key::Char('f'))), None);
        assert_eq!(browse(KeyInput::plain(Key::Esc)), None);
    }

    #[test]
    fn test_review_only_dismisses() {
        let review = |input| action_for_key(Phase::PageClosed, input);

        assert_eq!(review(KeyInput::plain(Key::Enter)), Some(Action::DismissReview));
        assert_eq!(review(KeyInput::plain(Key::Esc)), Some(Action::DismissReview));
        assert_eq!(review(KeyInput::plain(Key::Down)), None);
        assert_eq!(review(KeyInput::ctrl(Key::Char('f'))), None);
        assert_eq!(review(KeyInput::ctrl(Key::Left)), None);
    }

    #[test]
    fn test_empty_has_no_keys() {
        assert_eq!(action_for_key(Phase::Empty, KeyInput::plain(Key::Enter)), None);
    }
}
