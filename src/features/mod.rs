pub mod contacts;
pub mod gallery;
pub mod moderation;
pub mod uploads;
