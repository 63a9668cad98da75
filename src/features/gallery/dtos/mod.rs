pub mod gallery_dto;

pub use gallery_dto::GalleryEntryDto;
