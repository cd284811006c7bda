//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// An intent captures something that happened:
/// - User input (key presses, text edits)
/// - Data arriving (roster records loaded)
///
/// Intents are handed to reducers, which fold them into new states.
pub trait Intent: Send + 'static {}
