pub mod breakpoint;
pub mod components;
pub mod error;
pub mod logging;
pub mod media;
pub mod query;

pub use breakpoint::Breakpoint;
pub use components::{use_media_query, use_media_query_in};
pub use error::InvalidSpec;
pub use query::{build, Breakpoints, QueryInput, QuerySpec};
