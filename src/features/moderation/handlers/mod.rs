pub mod moderation_handler;

pub use moderation_handler::{
    __path_approve_upload, __path_list_contacts, __path_list_uploads, __path_upload_stats,
    approve_upload, list_contacts, list_uploads, upload_stats,
};
