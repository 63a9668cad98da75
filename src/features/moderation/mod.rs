//! Admin moderation of uploads and contact messages.
//!
//! Listings are newest-first; approval is the one-way gate that makes
//! an upload eligible for the public gallery.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/admin/uploads` | List all uploads |
//! | GET | `/admin/contacts` | List all contact messages |
//! | POST | `/admin/uploads/{id}/approve` | Approve one upload |
//! | GET | `/admin/stats` | Aggregate upload counters |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::ModerationService;
