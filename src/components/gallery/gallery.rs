mod props {
    use crate::rendering::Size;

    pub struct Props {
        size: Size,
    }

    impl Props {
        pub fn new(size: Size) -> Self {
            Self { size }
        }

        pub fn size(&self) -> Size {
            self.size
        }
    }
}
pub use props::Props;

mod gallery {
    use super::{Action, Effect, Event, Props, State};
    use crate::color::Color;
    use crate::component::Component;
    use crate::rendering::{Fabric, Size, Yarn};
    use crate::stateful::Stateful;

    use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent};

    /// The photos returned by the most recent search, as a scrollable list of tiles.
    pub struct Gallery {
        state: State,
    }

    impl Component<Props, Event, Effect> for Gallery {
        fn new(props: Props) -> Self {
            let state = State::from(props);
            Self { state }
        }

        fn handle(&mut self, event: Event) -> Option<Effect> {
            let action: Option<Action> = match event {
                Event::Photos { photos } => Some(Action::Show { photos }),
                Event::Resize { size } => Some(Action::Resize { size }),
                Event::Focus => Some(Action::Focus),
                Event::Unfocus => Some(Action::Unfocus),
                Event::Crossterm { event } => match event {
                    CrosstermEvent::Key(KeyEvent {
                        code: KeyCode::Char('j'),
                        ..
                    })
                    | CrosstermEvent::Key(KeyEvent {
                        code: KeyCode::Down,
                        ..
                    }) => Some(Action::Down),
                    CrosstermEvent::Key(KeyEvent {
                        code: KeyCode::Char('k'),
                        ..
                    })
                    | CrosstermEvent::Key(KeyEvent {
                        code: KeyCode::Up, ..
                    }) => Some(Action::Up),
                    CrosstermEvent::Key(KeyEvent {
                        code: KeyCode::Char('G'),
                        ..
                    }) => Some(Action::ReallyDown),
                    CrosstermEvent::Key(KeyEvent {
                        code: KeyCode::Char('g'),
                        ..
                    }) => Some(Action::ReallyUp),
                    CrosstermEvent::Key(KeyEvent {
                        code: KeyCode::Char('y'),
                        ..
                    }) => Some(Action::Yank),
                    CrosstermEvent::Key(KeyEvent {
                        code: KeyCode::Esc, ..
                    }) => Some(Action::Quit),
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
            let state: &State = &self.state;
            let photos = match state.photos() {
                Some(photos) => photos,
                None => return Fabric::new(size),
            };
            if photos.is_empty() {
                return Fabric::center("No photos found.", size);
            }

            let mut yarns: Vec<Yarn> = Vec::new();
            for (index, photo) in photos.iter().enumerate().skip(state.offset()) {
                if yarns.len() >= size.rows {
                    break;
                }

                let mut title = Yarn::from(format!(" {}", photo.title()));
                title.resize(size.columns);
                if state.selected() == Some(index) && state.is_focused() {
                    title.color(Color::InvertedText.into());
                    title.background(Color::Highlight.into());
                }
                yarns.push(title);

                if yarns.len() >= size.rows {
                    break;
                }
                let mut author = Yarn::from(format!("   by {}", photo.author()));
                author.resize(size.columns);
                author.color(Color::LightGrayyedText.into());
                yarns.push(author);
            }

            let mut fabric = Fabric::from(yarns);
            if fabric.size().rows < size.rows {
                fabric.pad_bottom(size.rows);
            }
            fabric
        }
    }
}
pub use gallery::Gallery;

mod event {
    use crate::api::Photo;
    use crate::rendering::Size;

    use crossterm::event::Event as CrosstermEvent;

    pub enum Event {
        /// New search results arrived.
        Photos {
            photos: Vec<Photo>,
        },
        Resize {
            size: Size,
        },
        Focus,
        Unfocus,
        Crossterm {
            event: CrosstermEvent,
        },
    }
}
pub use event::Event;

mod state {
    use super::{Action, Effect, Props};
    use crate::api::Photo;
    use crate::clipboard::Clipboard;
    use crate::rendering::Size;
    use crate::stateful::Stateful;

    use std::cmp;

    /// Rows each photo tile occupies: the title line and the author line.
    const TILE_ROWS: usize = 2;

    pub struct State {
        size: Size,
        /// `None` until the first search completes.
        photos: Option<Vec<Photo>>,
        selected: Option<usize>,
        /// The index of the first visible photo.
        offset: usize,
        focussed: bool,
    }

    impl From<Props> for State {
        fn from(props: Props) -> Self {
            Self {
                size: props.size(),
                photos: None,
                selected: None,
                offset: 0,
                focussed: false,
            }
        }
    }

    impl State {
        pub fn photos(&self) -> Option<&Vec<Photo>> {
            self.photos.as_ref()
        }

        pub fn selected(&self) -> Option<usize> {
            self.selected
        }

        pub fn offset(&self) -> usize {
            self.offset
        }

        pub fn is_focused(&self) -> bool {
            self.focussed
        }

        /// The number of whole tiles that fit on the screen.
        fn page(&self) -> usize {
            cmp::max(self.size.rows / TILE_ROWS, 1)
        }

        fn photo_count(&self) -> usize {
            match &self.photos {
                Some(photos) => photos.len(),
                None => 0,
            }
        }

        fn show(&mut self, photos: Vec<Photo>) -> Option<Effect> {
            self.photos = Some(photos);
            self.selected = None;
            self.offset = 0;
            None
        }

        fn resize(&mut self, size: Size) -> Option<Effect> {
            self.size = size;
            let count = self.photo_count();
            if count == 0 {
                self.offset = 0;
                return None;
            }
            // Keep the selection on screen after the resize.
            if let Some(selected) = self.selected {
                if selected < self.offset {
                    self.offset = selected;
                } else if selected >= self.offset + self.page() {
                    self.offset = selected - self.page() + 1;
                }
            }
            self.offset = cmp::min(self.offset, count.saturating_sub(1));
            None
        }

        fn down(&mut self) -> Option<Effect> {
            let count = self.photo_count();
            if count == 0 {
                return None;
            }
            let selected = match self.selected {
                None => 0,
                Some(selected) => cmp::min(selected + 1, count - 1),
            };
            self.selected = Some(selected);
            if selected >= self.offset + self.page() {
                self.offset = selected - self.page() + 1;
            }
            None
        }

        fn up(&mut self) -> Option<Effect> {
            if self.photo_count() == 0 {
                return None;
            }
            let selected = match self.selected {
                None => 0,
                Some(selected) => selected.saturating_sub(1),
            };
            self.selected = Some(selected);
            if selected < self.offset {
                self.offset = selected;
            }
            None
        }

        fn really_down(&mut self) -> Option<Effect> {
            let count = self.photo_count();
            if count == 0 {
                return None;
            }
            self.selected = Some(count - 1);
            self.offset = count.saturating_sub(self.page());
            None
        }

        fn really_up(&mut self) -> Option<Effect> {
            if self.photo_count() == 0 {
                return None;
            }
            self.selected = Some(0);
            self.offset = 0;
            None
        }

        fn yank(&mut self) -> Option<Effect> {
            let photos = self.photos.as_ref()?;
            let selected = self.selected?;
            let mut clipboard = Clipboard::new();
            clipboard.copy(photos[selected].thumbnail_url().to_string());
            None
        }

        fn focus(&mut self) -> Option<Effect> {
            self.focussed = true;
            None
        }

        fn unfocus(&mut self) -> Option<Effect> {
            self.focussed = false;
            None
        }
    }

    impl Stateful<Action, Effect> for State {
        fn perform(&mut self, action: Action) -> Option<Effect> {
            match action {
                Action::Show { photos } => self.show(photos),
                Action::Resize { size } => self.resize(size),
                Action::Focus => self.focus(),
                Action::Unfocus => self.unfocus(),
                Action::Down => self.down(),
                Action::Up => self.up(),
                Action::ReallyDown => self.really_down(),
                Action::ReallyUp => self.really_up(),
                Action::Yank => self.yank(),
                Action::Quit => Some(Effect::Unfocus),
            }
        }
    }
}
pub use state::State;

mod action {
    use crate::api::Photo;
    use crate::rendering::Size;

    pub enum Action {
        Show { photos: Vec<Photo> },
        Resize { size: Size },
        Focus,
        Unfocus,
        Down,
        Up,
        ReallyDown,
        ReallyUp,
        Yank,
        Quit,
    }
}
pub use action::Action;

mod effect {
    #[derive(Debug, PartialEq, Eq)]
    pub enum Effect {
        /// Hand focus back to the search bar.
        Unfocus,
    }
}
pub use effect::Effect;

#[cfg(test)]
mod tests {
    use super::{Action, Effect, Props, State};
    use crate::api::Photo;
    use crate::rendering::Size;
    use crate::stateful::Stateful;

    fn photos(count: usize) -> Vec<Photo> {
        (0..count)
            .map(|number| {
                Photo::new(
                    format!("photo-{}", number),
                    Some(format!("Photo {}", number)),
                    "Somebody".to_string(),
                    format!("https://example.com/{}.jpg", number),
                )
            })
            .collect()
    }

    fn state_with_photos(count: usize, rows: usize) -> State {
        let mut state = State::from(Props::new(Size::new(rows, 40)));
        state.perform(Action::Show {
            photos: photos(count),
        });
        state
    }

    #[test]
    fn test_down_selects_the_first_photo() {
        let mut state = state_with_photos(3, 10);

        state.perform(Action::Down);

        assert_eq!(state.selected(), Some(0));
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_down_scrolls_past_the_bottom_of_the_screen() {
        // Four rows fit two tiles.
        let mut state = state_with_photos(5, 4);

        for _ in 0..3 {
            state.perform(Action::Down);
        }

        assert_eq!(state.selected(), Some(2));
        assert_eq!(state.offset(), 1);
    }

    #[test]
    fn test_down_stops_at_the_last_photo() {
        let mut state = state_with_photos(2, 10);

        for _ in 0..5 {
            state.perform(Action::Down);
        }

        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_up_scrolls_back_above_the_top_of_the_screen() {
        let mut state = state_with_photos(5, 4);
        state.perform(Action::ReallyDown);

        for _ in 0..4 {
            state.perform(Action::Up);
        }

        assert_eq!(state.selected(), Some(0));
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_really_down_jumps_to_the_last_photo() {
        let mut state = state_with_photos(5, 4);

        state.perform(Action::ReallyDown);

        assert_eq!(state.selected(), Some(4));
        assert_eq!(state.offset(), 3);
    }

    #[test]
    fn test_new_photos_reset_the_scroll_position() {
        let mut state = state_with_photos(5, 4);
        state.perform(Action::ReallyDown);

        state.perform(Action::Show { photos: photos(3) });

        assert_eq!(state.selected(), None);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_shrinking_the_screen_keeps_the_selection_visible() {
        let mut state = state_with_photos(6, 8);
        for _ in 0..4 {
            state.perform(Action::Down);
        }
        assert_eq!(state.selected(), Some(3));
        assert_eq!(state.offset(), 0);

        state.perform(Action::Resize {
            size: Size::new(4, 40),
        });

        assert_eq!(state.offset(), 2);
    }

    #[test]
    fn test_escape_asks_for_the_focus_to_move_back() {
        let mut state = state_with_photos(1, 10);

        let effect = state.perform(Action::Quit);

        assert_eq!(effect, Some(Effect::Unfocus));
    }

    #[test]
    fn test_scrolling_with_no_photos_is_a_noop() {
        let mut state = State::from(Props::new(Size::new(10, 40)));

        assert_eq!(state.perform(Action::Down), None);
        assert_eq!(state.selected(), None);
    }
}
