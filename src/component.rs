use crate::rendering::{Fabric, Size};

/// A piece of the user interface which reacts to events and renders itself.
pub trait Component<Props, Event, Effect> {
    fn new(props: Props) -> Self
    where
        Self: Sized;

    /// Effects to run right after the component is created, before any events arrive.
    fn on_created(&mut self) -> Option<Vec<Effect>> {
        None
    }

    fn handle(&mut self, event: Event) -> Option<Effect>;

    fn render(&self, size: Size) -> Fabric;
}
