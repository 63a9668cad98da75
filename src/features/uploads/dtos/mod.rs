pub mod upload_dto;

pub use upload_dto::{
    content_type_for, extension_of, generate_storage_filename, is_extension_allowed,
    IncomingFile, UploadBatchDto, UploadedFileDto,
};
