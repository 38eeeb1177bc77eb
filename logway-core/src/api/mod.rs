mod error;
mod handlers;
mod params;
mod router;


pub use error::{ApiError, ErrorBody};
pub use params::*;
pub use router::{AppState, build_router};
