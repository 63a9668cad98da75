//! Media upload intake and raw file retrieval.
//!
//! Validated multipart ingestion: allow-listed extensions, a 50 MiB
//! per-file cap, sanitized original names, and random 128-bit storage
//! names. Metadata rows commit in a single transaction after the blobs
//! land in the file store.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/upload` | Upload a batch of media files |
//! | GET | `/uploads/{filename}` | Raw bytes of a stored file |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::UploadService;
