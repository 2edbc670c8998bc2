//! Matrix persistence.
pub mod binary;

pub use binary::{from_bytes, load, load_from_path, save, save_to_path, to_bytes};
