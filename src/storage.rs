/// File-backed repository storing the collection as a JSON array.
pub mod json;

pub use json::JsonStorage;
