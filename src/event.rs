use crate::api::SearchResponse;

use crossterm::event::Event as CrosstermEvent;

/// Everything the event loop can hand to the root component.
pub enum Event {
    /// A key press or terminal resize.
    Crossterm(CrosstermEvent),
    /// A photo lookup finished.
    Response(SearchResponse),
    /// The flash pulse on a selected term has run its course.
    FlashExpired,
}
