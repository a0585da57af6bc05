/// Marker trait for intents: user actions and async completions that want to
/// change view state.
pub trait Intent: Send + 'static {}
