/// A state which is only mutated by performing actions.
///
/// Keeping all mutation behind `perform` means component behavior can be unit
/// tested by driving the state with actions and checking the emitted effects.
pub trait Stateful<Action, Effect> {
    fn perform(&mut self, action: Action) -> Option<Effect>;
}
