/// Marker trait for widget state.
///
/// `Default` lets dispatch move the state out with `std::mem::take`;
/// `PartialEq` lets tests compare whole states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
