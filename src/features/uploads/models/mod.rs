mod upload;

pub use upload::{FileKind, Upload};
