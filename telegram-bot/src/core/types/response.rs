//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries what was sent so later handlers can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Not for this handler, try next.
    Ignore,
    /// Stop the chain; the handler already sent this text to the chat.
    Reply(String),
}
