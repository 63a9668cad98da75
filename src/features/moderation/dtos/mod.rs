pub mod moderation_dto;

pub use moderation_dto::{AdminContactDto, AdminUploadDto, ApprovedResponseDto, UploadStatsDto};
