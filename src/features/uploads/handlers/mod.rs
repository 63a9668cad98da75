pub mod upload_handler;

pub use upload_handler::{__path_get_file, __path_upload_files, get_file, upload_files};
