mod text;

pub use text::{ColorMode, FaultFormatter};
