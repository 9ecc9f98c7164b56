mod props {
    pub struct Props {
        terms: Vec<String>,
        suggestion_limit: usize,
    }

    impl Props {
        pub fn new(terms: Vec<String>, suggestion_limit: usize) -> Self {
            Self {
                terms,
                suggestion_limit,
            }
        }

        pub fn terms(&self) -> &[String] {
            &self.terms
        }

        pub fn suggestion_limit(&self) -> usize {
            self.suggestion_limit
        }
    }
}
pub use props::Props;

mod query {
    use super::{Action, Effect, Event, Props, State};
    use crate::color::Color;
    use crate::component::Component;
    use crate::rendering::{Fabric, Size, Yarn};
    use crate::stateful::Stateful;

    use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};

    /// The search bar: selected terms rendered as chips, the text being typed, and the
    /// suggestions drawn from the search history.
    pub struct Query {
        state: State,
    }

    impl Query {
        /// The number of rows the query wants: the input line plus any visible suggestions.
        pub fn rows(&self) -> usize {
            if self.state.is_focused() {
                1 + self.state.suggestions().len()
            } else {
                1
            }
        }
    }

    impl Component<Props, Event, Effect> for Query {
        fn new(props: Props) -> Self {
            let state = State::from(props);
            Self { state }
        }

        fn handle(&mut self, event: Event) -> Option<Effect> {
            let action: Option<Action> = match event {
                Event::Focus => Some(Action::Focus),
                Event::Unfocus => Some(Action::Unfocus),
                Event::FlashExpired => Some(Action::ClearFlash),
                Event::Crossterm { event } => match event {
                    CrosstermEvent::Key(KeyEvent {
                        code: KeyCode::Char('d'),
                        modifiers: KeyModifiers::CONTROL,
                    }) => Some(Action::DeleteSuggestion),
                    CrosstermEvent::Key(KeyEvent {
                        code: KeyCode::Enter,
                        ..
                    }) => Some(Action::Commit),
                    CrosstermEvent::Key(KeyEvent {
                        code: KeyCode::Backspace,
                        ..
                    }) => Some(Action::Backspace),
                    CrosstermEvent::Key(KeyEvent {
                        code: KeyCode::Down,
                        ..
                    }) => Some(Action::NextSuggestion),
                    CrosstermEvent::Key(KeyEvent {
                        code: KeyCode::Up, ..
                    }) => Some(Action::PreviousSuggestion),
                    CrosstermEvent::Key(KeyEvent {
                        code: KeyCode::Left,
                        ..
                    }) => Some(Action::PreviousChip),
                    CrosstermEvent::Key(KeyEvent {
                        code: KeyCode::Right,
                        ..
                    }) => Some(Action::NextChip),
                    CrosstermEvent::Key(KeyEvent {
                        code: KeyCode::Esc, ..
                    }) => Some(Action::ClearSuggestions),
                    CrosstermEvent::Key(KeyEvent {
                        code: KeyCode::Char(character),
                        ..
                    }) => Some(Action::Push { character }),
                    _ => None,
                },
            };

            if let Some(action) = action {
                self.state.perform(action)
            } else {
                None
            }
        }

        fn render(&self, size: Size) -> Fabric {
            if size.rows == 0 {
                return Fabric::new(size);
            }
            let state: &State = &self.state;

            let mut yarn = Yarn::new();
            for (index, term) in state.terms().iter().enumerate() {
                let mut chip = Yarn::from(format!(" {} ", term));
                let background = if state.flash() == Some(index) {
                    Color::ChipFlashBackground
                } else if state.chip() == Some(index) {
                    Color::ChipSelectedBackground
                } else {
                    Color::ChipBackground
                };
                chip.color(Color::ChipText.into());
                chip.background(background.into());
                yarn = yarn.concat(chip).concat(Yarn::from(" "));
            }
            let text_start = yarn.len();
            yarn = yarn.concat(Yarn::from(state.value()));
            yarn.resize(size.columns);
            yarn.color_after(Color::InvertedText.into(), text_start);
            yarn.background_after(
                Color::focus_or_important(state.is_focused()).into(),
                text_start,
            );

            let mut yarns: Vec<Yarn> = vec![yarn];
            if state.is_focused() {
                for (index, suggestion) in state.suggestions().iter().enumerate() {
                    if yarns.len() == size.rows {
                        break;
                    }
                    let mut row = Yarn::from(format!(" {}", suggestion));
                    row.resize(size.columns);
                    if state.suggestion() == Some(index) {
                        row.color(Color::InvertedText.into());
                        row.background(Color::Highlight.into());
                    } else {
                        row.color(Color::LightGrayyedText.into());
                    }
                    yarns.push(row);
                }
            }

            let mut fabric = Fabric::from(yarns);
            if fabric.size().rows < size.rows {
                fabric.pad_bottom(size.rows);
            }
            fabric
        }
    }
}
pub use query::Query;

mod event {
    use crossterm::event::Event as CrosstermEvent;

    pub enum Event {
        Focus,
        Unfocus,
        /// The flash pulse on a chip has run its course.
        FlashExpired,
        Crossterm {
            event: CrosstermEvent,
        },
    }
}
pub use event::Event;

mod state {
    use super::{Action, Effect, Props};
    use crate::history::History;
    use crate::stateful::Stateful;

    use std::cmp;
    use std::time::Duration;

    /// How long the pulse on an already-selected chip stays lit.
    pub const FLASH_DURATION: Duration = Duration::from_millis(500);

    /// A committed term is either selected as a new search term or deleted from the history.
    /// Both arrive through the one commit path; the tag says which.
    pub enum CommitAction {
        Select(String),
        Delete(String),
    }

    pub struct State {
        /// The selected search terms, in the order they were added, without duplicates.
        terms: Vec<String>,
        /// The text the user has actually typed. The displayed value is the highlighted
        /// suggestion when there is one.
        typed: String,
        history: History,
        suggestions: Vec<String>,
        /// The index of the highlighted suggestion.
        suggestion: Option<usize>,
        /// The index of the selected chip.
        chip: Option<usize>,
        /// The index of the chip currently flashing. A newer pulse replaces a pending one.
        flash: Option<usize>,
        focus: bool,
        suggestion_limit: usize,
    }

    impl From<Props> for State {
        fn from(props: Props) -> Self {
            let mut state = Self {
                terms: Vec::new(),
                typed: String::new(),
                history: History::new(),
                suggestions: Vec::new(),
                suggestion: None,
                chip: None,
                flash: None,
                focus: true,
                suggestion_limit: props.suggestion_limit(),
            };

            for term in props.terms() {
                let term = term.trim().to_string();
                if term.is_empty() || state.terms.contains(&term) {
                    continue;
                }
                state.history.add(&term);
                state.terms.push(term);
            }
            state.refresh_suggestions();

            state
        }
    }

    impl State {
        pub fn terms(&self) -> &[String] {
            &self.terms
        }

        /// The displayed input value: the highlighted suggestion if there is one, otherwise
        /// the typed text.
        pub fn value(&self) -> &str {
            match self.suggestion {
                Some(index) => &self.suggestions[index],
                None => &self.typed,
            }
        }

        pub fn suggestions(&self) -> &[String] {
            &self.suggestions
        }

        pub fn suggestion(&self) -> Option<usize> {
            self.suggestion
        }

        pub fn chip(&self) -> Option<usize> {
            self.chip
        }

        pub fn flash(&self) -> Option<usize> {
            self.flash
        }

        pub fn is_focused(&self) -> bool {
            self.focus
        }

        #[cfg(test)]
        pub fn history(&self) -> &History {
            &self.history
        }

        pub fn commit(&mut self, action: CommitAction) -> Option<Effect> {
            match action {
                CommitAction::Select(term) => self.select(term),
                CommitAction::Delete(term) => self.delete(term),
            }
        }

        fn select(&mut self, term: String) -> Option<Effect> {
            let term = term.trim().to_string();
            // Committing nothing but whitespace is silently ignored.
            if term.is_empty() {
                return None;
            }
            self.suggestion = None;
            self.chip = None;

            if let Some(index) = self.terms.iter().position(|existing| *existing == term) {
                // Already selected: pulse the chip instead of duplicating it.
                self.flash = Some(index);
                return Some(Effect::Flash {
                    duration: FLASH_DURATION,
                });
            }

            self.terms.push(term.clone());
            self.typed.clear();
            self.history.add(&term);
            self.refresh_suggestions();
            Some(Effect::Search {
                terms: self.terms.clone(),
            })
        }

        fn delete(&mut self, term: String) -> Option<Effect> {
            self.history.remove(&term);
            // The input falls back to what was typed before the suggestion was highlighted.
            self.suggestion = None;
            self.refresh_suggestions();
            None
        }

        fn commit_input(&mut self) -> Option<Effect> {
            let term: String = self.value().to_string();
            self.commit(CommitAction::Select(term))
        }

        fn delete_suggestion(&mut self) -> Option<Effect> {
            match self.suggestion {
                Some(index) => {
                    let term: String = self.suggestions[index].clone();
                    self.commit(CommitAction::Delete(term))
                }
                None => None,
            }
        }

        fn push(&mut self, character: char) -> Option<Effect> {
            self.chip = None;
            self.adopt_suggestion();
            self.typed.push(character);
            self.refresh_suggestions();
            None
        }

        fn backspace(&mut self) -> Option<Effect> {
            if let Some(index) = self.chip {
                let term: String = self.terms[index].clone();
                self.chip = None;
                return self.remove_term(&term);
            }
            self.adopt_suggestion();
            if !self.typed.is_empty() {
                self.typed.pop();
                self.refresh_suggestions();
                return None;
            }
            self.pop_term()
        }

        /// Remove a selected term and search for what remains, even when nothing remains.
        fn remove_term(&mut self, term: &str) -> Option<Effect> {
            let position = match self.terms.iter().position(|existing| existing == term) {
                Some(position) => position,
                None => return None,
            };
            self.terms.remove(position);
            self.flash = None;
            self.refresh_suggestions();
            Some(Effect::Search {
                terms: self.terms.clone(),
            })
        }

        /// Drop the last selected term. Dropping the last remaining term deliberately does
        /// not start a new empty search.
        fn pop_term(&mut self) -> Option<Effect> {
            if self.terms.pop().is_none() {
                return None;
            }
            self.flash = None;
            if self.terms.is_empty() {
                return None;
            }
            Some(Effect::Search {
                terms: self.terms.clone(),
            })
        }

        /// Make the highlighted suggestion the typed text, so that edits continue from it.
        fn adopt_suggestion(&mut self) {
            if let Some(index) = self.suggestion {
                self.typed = self.suggestions[index].clone();
                self.suggestion = None;
            }
        }

        fn next_suggestion(&mut self) -> Option<Effect> {
            if self.suggestions.is_empty() {
                return None;
            }
            self.chip = None;
            let last = self.suggestions.len() - 1;
            self.suggestion = match self.suggestion {
                None => Some(0),
                Some(index) => Some(cmp::min(index + 1, last)),
            };
            None
        }

        fn previous_suggestion(&mut self) -> Option<Effect> {
            if self.suggestions.is_empty() {
                return None;
            }
            self.chip = None;
            self.suggestion = match self.suggestion {
                None => Some(self.suggestions.len() - 1),
                Some(0) => None,
                Some(index) => Some(index - 1),
            };
            None
        }

        fn previous_chip(&mut self) -> Option<Effect> {
            if !self.typed.is_empty() || self.suggestion.is_some() || self.terms.is_empty() {
                return None;
            }
            self.chip = match self.chip {
                None => Some(self.terms.len() - 1),
                Some(0) => Some(0),
                Some(index) => Some(index - 1),
            };
            None
        }

        fn next_chip(&mut self) -> Option<Effect> {
            let index = match self.chip {
                Some(index) => index,
                None => return None,
            };
            self.chip = if index + 1 < self.terms.len() {
                Some(index + 1)
            } else {
                None
            };
            None
        }

        fn clear_suggestions(&mut self) -> Option<Effect> {
            self.suggestions.clear();
            self.suggestion = None;
            None
        }

        fn clear_flash(&mut self) -> Option<Effect> {
            self.flash = None;
            None
        }

        fn focus(&mut self) -> Option<Effect> {
            self.focus = true;
            self.refresh_suggestions();
            None
        }

        fn unfocus(&mut self) -> Option<Effect> {
            self.focus = false;
            self.suggestion = None;
            self.chip = None;
            None
        }

        fn refresh_suggestions(&mut self) {
            self.suggestions = self.history.matching(&self.typed, self.suggestion_limit);
            self.suggestion = None;
        }
    }

    impl Stateful<Action, Effect> for State {
        fn perform(&mut self, action: Action) -> Option<Effect> {
            match action {
                Action::Focus => self.focus(),
                Action::Unfocus => self.unfocus(),
                Action::Push { character } => self.push(character),
                Action::Backspace => self.backspace(),
                Action::Commit => self.commit_input(),
                Action::DeleteSuggestion => self.delete_suggestion(),
                Action::NextSuggestion => self.next_suggestion(),
                Action::PreviousSuggestion => self.previous_suggestion(),
                Action::PreviousChip => self.previous_chip(),
                Action::NextChip => self.next_chip(),
                Action::ClearSuggestions => self.clear_suggestions(),
                Action::ClearFlash => self.clear_flash(),
            }
        }
    }
}
pub use state::{CommitAction, State, FLASH_DURATION};

mod action {
    pub enum Action {
        Focus,
        Unfocus,
        Push { character: char },
        Backspace,
        Commit,
        DeleteSuggestion,
        NextSuggestion,
        PreviousSuggestion,
        PreviousChip,
        NextChip,
        ClearSuggestions,
        ClearFlash,
    }
}
pub use action::Action;

mod effect {
    use std::time::Duration;

    #[derive(Debug, PartialEq, Eq)]
    pub enum Effect {
        /// Search for the selected terms.
        Search { terms: Vec<String> },
        /// Start the pulse on an already-selected chip.
        Flash { duration: Duration },
    }
}
pub use effect::Effect;

#[cfg(test)]
mod tests {
    use super::{Action, Effect, Props, State, FLASH_DURATION};
    use crate::stateful::Stateful;

    fn empty_state() -> State {
        State::from(Props::new(Vec::new(), 5))
    }

    fn type_word(state: &mut State, word: &str) {
        for character in word.chars() {
            state.perform(Action::Push { character });
        }
    }

    fn commit_word(state: &mut State, word: &str) -> Option<Effect> {
        type_word(state, word);
        state.perform(Action::Commit)
    }

    fn search(terms: &[&str]) -> Option<Effect> {
        Some(Effect::Search {
            terms: terms.iter().map(|term| term.to_string()).collect(),
        })
    }

    #[test]
    fn test_commit_selects_the_term_and_searches() {
        let mut state = empty_state();

        let effect = commit_word(&mut state, "cat");

        assert_eq!(effect, search(&["cat"]));
        assert_eq!(state.terms(), &["cat".to_string()]);
        assert_eq!(state.value(), "");
        assert_eq!(state.history().terms(), &["cat".to_string()]);
        // The cleared input matches the entire history again.
        assert_eq!(state.suggestions(), &["cat".to_string()]);
    }

    #[test]
    fn test_committing_only_whitespace_is_ignored() {
        let mut state = empty_state();

        let effect = commit_word(&mut state, "   ");

        assert_eq!(effect, None);
        assert!(state.terms().is_empty());
        assert!(state.history().terms().is_empty());
    }

    #[test]
    fn test_committing_a_duplicate_flashes_instead_of_duplicating() {
        let mut state = empty_state();
        commit_word(&mut state, "cat");

        let effect = commit_word(&mut state, "cat");

        assert_eq!(
            effect,
            Some(Effect::Flash {
                duration: FLASH_DURATION
            })
        );
        assert_eq!(state.terms(), &["cat".to_string()]);
        assert_eq!(state.history().terms(), &["cat".to_string()]);
        assert_eq!(state.flash(), Some(0));

        let effect = state.perform(Action::ClearFlash);
        assert_eq!(effect, None);
        assert_eq!(state.flash(), None);
    }

    #[test]
    fn test_new_terms_go_to_the_front_of_the_history() {
        let mut state = empty_state();

        commit_word(&mut state, "cats");
        commit_word(&mut state, "cars");

        assert_eq!(
            state.history().terms(),
            &["cars".to_string(), "cats".to_string()]
        );
    }

    #[test]
    fn test_backspace_edits_the_typed_text_before_touching_chips() {
        let mut state = empty_state();
        commit_word(&mut state, "cat");
        type_word(&mut state, "do");

        let effect = state.perform(Action::Backspace);

        assert_eq!(effect, None);
        assert_eq!(state.value(), "d");
        assert_eq!(state.terms(), &["cat".to_string()]);
    }

    #[test]
    fn test_backspace_at_empty_input_pops_the_last_term() {
        let mut state = empty_state();
        commit_word(&mut state, "cat");
        commit_word(&mut state, "dog");

        let effect = state.perform(Action::Backspace);

        assert_eq!(effect, search(&["cat"]));
        assert_eq!(state.terms(), &["cat".to_string()]);
    }

    #[test]
    fn test_popping_the_last_remaining_term_does_not_search() {
        let mut state = empty_state();
        commit_word(&mut state, "cat");

        let effect = state.perform(Action::Backspace);

        assert_eq!(effect, None);
        assert!(state.terms().is_empty());

        // With no terms left, another backspace is a no-op.
        assert_eq!(state.perform(Action::Backspace), None);
    }

    #[test]
    fn test_removing_a_chip_searches_even_when_nothing_remains() {
        let mut state = empty_state();
        commit_word(&mut state, "cat");

        state.perform(Action::PreviousChip);
        assert_eq!(state.chip(), Some(0));
        let effect = state.perform(Action::Backspace);

        assert_eq!(effect, search(&[]));
        assert!(state.terms().is_empty());
        assert_eq!(state.chip(), None);
    }

    #[test]
    fn test_typing_filters_the_suggestions() {
        let mut state = empty_state();
        commit_word(&mut state, "cats");
        commit_word(&mut state, "cars");
        commit_word(&mut state, "dog");

        // An empty input offers the entire history, most recent first.
        assert_eq!(
            state.suggestions(),
            &["dog".to_string(), "cars".to_string(), "cats".to_string()]
        );

        type_word(&mut state, "ca");
        assert_eq!(
            state.suggestions(),
            &["cars".to_string(), "cats".to_string()]
        );
    }

    #[test]
    fn test_navigating_suggestions_previews_them_in_the_input() {
        let mut state = empty_state();
        commit_word(&mut state, "cats");
        commit_word(&mut state, "cars");
        type_word(&mut state, "ca");

        state.perform(Action::NextSuggestion);
        assert_eq!(state.value(), "cars");
        state.perform(Action::NextSuggestion);
        assert_eq!(state.value(), "cats");
        // Navigation clamps at the last suggestion.
        state.perform(Action::NextSuggestion);
        assert_eq!(state.value(), "cats");

        state.perform(Action::PreviousSuggestion);
        assert_eq!(state.value(), "cars");
        // Stepping back off the first suggestion restores the typed text.
        state.perform(Action::PreviousSuggestion);
        assert_eq!(state.value(), "ca");
    }

    #[test]
    fn test_committing_a_highlighted_suggestion() {
        let mut state = empty_state();
        commit_word(&mut state, "cats");
        // Drop the chip so that the commit is not a duplicate.
        state.perform(Action::Backspace);
        type_word(&mut state, "ca");
        state.perform(Action::NextSuggestion);

        let effect = state.perform(Action::Commit);

        assert_eq!(effect, search(&["cats"]));
        assert_eq!(state.terms(), &["cats".to_string()]);
        assert_eq!(state.value(), "");
    }

    #[test]
    fn test_deleting_a_suggestion_removes_it_from_the_history_and_keeps_the_typed_text() {
        let mut state = empty_state();
        commit_word(&mut state, "cats");
        commit_word(&mut state, "cars");
        commit_word(&mut state, "dog");
        // Clear the chips so only the history remains interesting.
        state.perform(Action::Backspace);
        state.perform(Action::Backspace);
        state.perform(Action::Backspace);

        type_word(&mut state, "ca");
        state.perform(Action::NextSuggestion);
        assert_eq!(state.value(), "cars");

        let effect = state.perform(Action::DeleteSuggestion);

        assert_eq!(effect, None);
        assert_eq!(
            state.history().terms(),
            &["dog".to_string(), "cats".to_string()]
        );
        // The input falls back to what was typed.
        assert_eq!(state.value(), "ca");
        assert_eq!(state.suggestions(), &["cats".to_string()]);
    }

    #[test]
    fn test_deleting_with_no_highlighted_suggestion_is_a_noop() {
        let mut state = empty_state();
        commit_word(&mut state, "cats");

        let effect = state.perform(Action::DeleteSuggestion);

        assert_eq!(effect, None);
        assert_eq!(state.history().terms(), &["cats".to_string()]);
    }

    #[test]
    fn test_backspace_continues_editing_from_a_highlighted_suggestion() {
        let mut state = empty_state();
        commit_word(&mut state, "cats");
        type_word(&mut state, "ca");
        state.perform(Action::NextSuggestion);

        let effect = state.perform(Action::Backspace);

        assert_eq!(effect, None);
        assert_eq!(state.value(), "cat");
    }

    #[test]
    fn test_starting_terms_are_trimmed_and_deduplicated() {
        let props = Props::new(
            vec![
                " cat ".to_string(),
                "cat".to_string(),
                "".to_string(),
                "dog".to_string(),
            ],
            5,
        );
        let state = State::from(props);

        assert_eq!(state.terms(), &["cat".to_string(), "dog".to_string()]);
        assert_eq!(
            state.history().terms(),
            &["dog".to_string(), "cat".to_string()]
        );
    }

    #[test]
    fn test_escape_clears_the_suggestions_until_the_next_keystroke() {
        let mut state = empty_state();
        commit_word(&mut state, "cats");

        state.perform(Action::ClearSuggestions);
        assert!(state.suggestions().is_empty());

        type_word(&mut state, "c");
        assert_eq!(state.suggestions(), &["cats".to_string()]);
    }
}
