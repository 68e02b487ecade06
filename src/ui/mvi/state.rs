/// Marker trait for screen state.
///
/// States are replaced, not mutated in place: a reducer takes the old
/// value and returns the new one.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
