mod media_query;
pub use media_query::*;
pub mod mobile;
