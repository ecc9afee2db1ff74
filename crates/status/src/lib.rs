//! Validation and rendering of homework-status payloads.
//!
//! [`response`] checks the decoded API body and picks the latest submission;
//! [`message`] turns that submission into the chat notification text.

pub mod message;
pub mod response;


pub use message::format_notification;
pub use response::{extract_latest_submission, server_time};
