use super::events::Event;
use super::types::Command;

/// Trait for dispatching window commands.
///
/// Decouples command definitions from their execution. Front ends (CLI
/// replays, a rendering layer) hold a store and route every user intent
/// through `dispatch`.
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received. No implicit batching.
/// - **Stale ids**: A command naming a window that is no longer open is a
///   no-op. It succeeds with an empty event list rather than an error.
/// - **Events**: On success, dispatch returns the events describing what
///   changed, in the order they happened. Callers use these to re-render
///   without diffing the whole window list.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}
