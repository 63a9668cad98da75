pub mod gallery_handler;

pub use gallery_handler::{__path_list_gallery, list_gallery};
