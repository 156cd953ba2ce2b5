pub mod json;

pub use json::{load_array, parse_array};
