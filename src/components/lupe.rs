mod props {
    use crate::config::Config;

    use typed_builder::TypedBuilder;

    #[derive(TypedBuilder)]
    pub struct Props {
        terms: Vec<String>,
        config: Config,
    }

    impl Props {
        pub fn terms(&self) -> &[String] {
            &self.terms
        }

        pub fn config(&self) -> &Config {
            &self.config
        }
    }
}
pub use props::Props;

mod lupe {
    use super::super::query::QueryEvent;
    use super::{Action, Props, State};
    use crate::component::Component;
    use crate::event::Event;
    use crate::rendering::{Fabric, Size};
    use crate::stateful::Stateful;
    use crate::system_effect::SystemEffect;

    use std::cmp;

    use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};

    /// The root component: the query on top, the gallery below it.
    pub struct Lupe {
        state: State,
    }

    impl Component<Props, Event, SystemEffect> for Lupe {
        fn new(props: Props) -> Self {
            let state = State::from(props);
            Self { state }
        }

        fn on_created(&mut self) -> Option<Vec<SystemEffect>> {
            self.state.starting_request().map(|effect| vec![effect])
        }

        fn handle(&mut self, event: Event) -> Option<SystemEffect> {
            match event {
                Event::Crossterm(CrosstermEvent::Key(KeyEvent {
                    code: KeyCode::Char('q'),
                    modifiers: KeyModifiers::CONTROL,
                })) => Some(SystemEffect::Exit),
                Event::Crossterm(CrosstermEvent::Key(KeyEvent {
                    code: KeyCode::Tab, ..
                })) => self.state.perform(Action::ToggleFocus),
                Event::Crossterm(CrosstermEvent::Resize(columns, rows)) => {
                    self.state.perform(Action::Resize {
                        size: Size::from((columns, rows)),
                    })
                }
                Event::Response(response) => self.state.perform(Action::ShowPhotos { response }),
                Event::FlashExpired => {
                    let effect = self.state.query.handle(QueryEvent::FlashExpired);
                    self.state.map_query_effect(effect)
                }
                Event::Crossterm(event) => self.state.route(event),
            }
        }

        fn render(&self, size: Size) -> Fabric {
            if size.rows == 0 {
                return Fabric::new(size);
            }
            let query_rows = cmp::min(self.state.query.rows(), size.rows);
            let query_fabric = self
                .state
                .query
                .render(Size::new(query_rows, size.columns));
            if query_rows == size.rows {
                return query_fabric;
            }
            let gallery_fabric = self
                .state
                .gallery
                .render(Size::new(size.rows - query_rows, size.columns));
            query_fabric.quilt_bottom(gallery_fabric)
        }
    }
}
pub use lupe::Lupe;

mod state {
    use super::super::gallery::{Gallery, GalleryEffect, GalleryEvent, GalleryProps};
    use super::super::query::{Query, QueryEffect, QueryEvent, QueryProps};
    use super::{Action, Props};
    use crate::api::{SearchRequest, SearchResponse};
    use crate::component::Component;
    use crate::rendering::Size;
    use crate::stateful::Stateful;
    use crate::system_effect::SystemEffect;

    use crossterm::event::Event as CrosstermEvent;
    use crossterm::terminal;
    use uuid::Uuid;

    pub enum Focus {
        Query,
        Gallery,
    }

    pub struct State {
        focus: Focus,
        pub query: Query,
        pub gallery: Gallery,
        /// The request whose response is still outstanding. Responses to any other
        /// request are stale and dropped.
        pending_response: Option<Uuid>,
        starting_terms: Vec<String>,
    }

    impl From<Props> for State {
        fn from(props: Props) -> Self {
            let mut terms: Vec<String> = Vec::new();
            for term in props.terms() {
                let term = term.trim().to_string();
                if term.is_empty() || terms.contains(&term) {
                    continue;
                }
                terms.push(term);
            }

            let query = Query::new(QueryProps::new(
                terms.clone(),
                props.config().suggestions().limit(),
            ));

            let size = Size::from(terminal::size().unwrap());
            let gallery_size = Size::new(size.rows.saturating_sub(1), size.columns);
            let gallery = Gallery::new(GalleryProps::new(gallery_size));

            Self {
                focus: Focus::Query,
                query,
                gallery,
                pending_response: None,
                starting_terms: terms,
            }
        }
    }

    impl State {
        /// The request for the terms given on the command line, if there were any.
        pub fn starting_request(&mut self) -> Option<SystemEffect> {
            if self.starting_terms.is_empty() {
                return None;
            }
            let request = SearchRequest::builder()
                .terms(self.starting_terms.clone())
                .build();
            self.pending_response = Some(*request.uuid());
            Some(SystemEffect::Request(request))
        }

        /// Hand a terminal event to whichever component has the focus.
        pub fn route(&mut self, event: CrosstermEvent) -> Option<SystemEffect> {
            match self.focus {
                Focus::Query => {
                    let effect = self.query.handle(QueryEvent::Crossterm { event });
                    self.map_query_effect(effect)
                }
                Focus::Gallery => {
                    let effect = self.gallery.handle(GalleryEvent::Crossterm { event });
                    match effect {
                        Some(GalleryEffect::Unfocus) => self.toggle_focus(),
                        None => None,
                    }
                }
            }
        }

        pub fn map_query_effect(&mut self, effect: Option<QueryEffect>) -> Option<SystemEffect> {
            match effect {
                Some(QueryEffect::Search { terms }) => self.search(terms),
                Some(QueryEffect::Flash { duration }) => Some(SystemEffect::Timeout { duration }),
                None => None,
            }
        }

        fn search(&mut self, terms: Vec<String>) -> Option<SystemEffect> {
            let request = SearchRequest::builder().terms(terms).build();
            self.pending_response = Some(*request.uuid());
            Some(SystemEffect::Request(request))
        }

        fn show_photos(&mut self, response: SearchResponse) -> Option<SystemEffect> {
            if self.pending_response != Some(*response.uuid()) {
                #[cfg(feature = "logging")]
                log::debug!("Dropping a stale response (uuid {}).", response.uuid());
                return None;
            }
            self.pending_response = None;
            self.gallery.handle(GalleryEvent::Photos {
                photos: response.into_photos(),
            });
            None
        }

        fn toggle_focus(&mut self) -> Option<SystemEffect> {
            match self.focus {
                Focus::Query => {
                    self.focus = Focus::Gallery;
                    self.query.handle(QueryEvent::Unfocus);
                    self.gallery.handle(GalleryEvent::Focus);
                }
                Focus::Gallery => {
                    self.focus = Focus::Query;
                    self.gallery.handle(GalleryEvent::Unfocus);
                    self.query.handle(QueryEvent::Focus);
                }
            }
            None
        }

        fn resize(&mut self, size: Size) -> Option<SystemEffect> {
            let gallery_size = Size::new(size.rows.saturating_sub(1), size.columns);
            self.gallery
                .handle(GalleryEvent::Resize { size: gallery_size });
            None
        }
    }

    impl Stateful<Action, SystemEffect> for State {
        fn perform(&mut self, action: Action) -> Option<SystemEffect> {
            match action {
                Action::Search { terms } => self.search(terms),
                Action::ShowPhotos { response } => self.show_photos(response),
                Action::ToggleFocus => self.toggle_focus(),
                Action::Resize { size } => self.resize(size),
            }
        }
    }
}
pub use state::State;

mod action {
    use crate::api::SearchResponse;
    use crate::rendering::Size;

    pub enum Action {
        Search { terms: Vec<String> },
        ShowPhotos { response: SearchResponse },
        ToggleFocus,
        Resize { size: Size },
    }
}
pub use action::Action;
