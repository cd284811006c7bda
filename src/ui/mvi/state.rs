//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// A state value should be:
/// - Immutable (never mutated in place, a reducer returns a fresh one)
/// - Self-contained (everything the renderer needs to draw the feature)
/// - Comparable (PartialEq so changes can be detected)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
