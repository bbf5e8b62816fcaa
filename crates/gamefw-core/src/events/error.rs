/// Errors surfaced by the strict (`try_*`) event bus API.
///
/// The lenient API swallows every one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    /// A required identifier was empty.
    #[error("invalid argument: `{0}` must not be empty")]
    InvalidArgument(&'static str),

    /// No subscription list exists for the event id.
    #[error("unknown event '{0}'")]
    UnknownEvent(String),

    /// The event exists but has no subscription with that name.
    #[error("no subscription named '{name}' on event '{id}'")]
    UnknownSubscription { id: String, name: String },
}
