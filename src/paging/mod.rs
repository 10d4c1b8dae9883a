//! Paginator logic: range computation, navigation state and window sizing

mod range;
mod state;
mod window;

pub use range::{compute_range, PageMarker, PageRange, DEFAULT_WINDOW_SIZE, MAX_WINDOW_SIZE};
pub use state::{PaginationState, Paginator};
pub use window::WindowPolicy;
