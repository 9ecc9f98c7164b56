/*!
System effects are side-effects that components can emit which the application framework will
handle.
*/
use crate::api::SearchRequest;

use std::time::Duration;

/// A side-effect that components can emit which the application framework will handle.
pub enum SystemEffect {
    /// Send a request to the photo requester.
    Request(SearchRequest),
    /// Deliver a `FlashExpired` event after the duration. Scheduling a new timeout replaces a
    /// pending one.
    Timeout { duration: Duration },
    /// Exit the application.
    Exit,
}
