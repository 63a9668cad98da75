use utoipa::{Modify, OpenApi};

use crate::features::contacts::{dtos as contacts_dtos, handlers as contacts_handlers};
use crate::features::gallery::{dtos as gallery_dtos, handlers as gallery_handlers};
use crate::features::moderation::{dtos as moderation_dtos, handlers as moderation_handlers};
use crate::features::uploads::{dtos as uploads_dtos, handlers as uploads_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Uploads
        uploads_handlers::upload_files,
        uploads_handlers::get_file,
        // Contacts
        contacts_handlers::submit_contact,
        // Moderation
        moderation_handlers::list_uploads,
        moderation_handlers::list_contacts,
        moderation_handlers::approve_upload,
        moderation_handlers::upload_stats,
        // Gallery
        gallery_handlers::list_gallery,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Uploads
            uploads_dtos::UploadBatchDto,
            uploads_dtos::UploadedFileDto,
            ApiResponse<Vec<uploads_dtos::UploadedFileDto>>,
            // Contacts
            contacts_dtos::SubmitContactDto,
            contacts_dtos::ContactReceivedDto,
            ApiResponse<contacts_dtos::ContactReceivedDto>,
            // Moderation
            moderation_dtos::AdminUploadDto,
            moderation_dtos::AdminContactDto,
            moderation_dtos::ApprovedResponseDto,
            moderation_dtos::UploadStatsDto,
            ApiResponse<Vec<moderation_dtos::AdminUploadDto>>,
            ApiResponse<Vec<moderation_dtos::AdminContactDto>>,
            ApiResponse<moderation_dtos::ApprovedResponseDto>,
            ApiResponse<moderation_dtos::UploadStatsDto>,
            // Gallery
            gallery_dtos::GalleryEntryDto,
            ApiResponse<Vec<gallery_dtos::GalleryEntryDto>>,
        )
    ),
    tags(
        (name = "uploads", description = "Media upload intake and file retrieval"),
        (name = "contacts", description = "Contact form (public)"),
        (name = "moderation", description = "Admin moderation of uploads and messages"),
        (name = "gallery", description = "Public gallery of approved images"),
    ),
    info(
        title = "Keepsake API",
        version = "0.1.0",
        description = "API documentation for Keepsake",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
