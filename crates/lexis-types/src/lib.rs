pub mod route;
pub mod types;

pub use route::{CategoryParams, Route, RouteError, WordParams};
pub use types::*;
