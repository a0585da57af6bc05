/// Marker trait for view state.
///
/// States carry everything the renderer needs and are replaced wholesale by
/// the reducer, never mutated in place by the view.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
