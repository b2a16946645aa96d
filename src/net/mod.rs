pub mod fetch;

pub use fetch::{FetchError, MenuSource, DEFAULT_TIMEOUT};
