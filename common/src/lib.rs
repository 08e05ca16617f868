//! Bid Attach Common Library
//!
//! 岗位表、关键字规则、有效期判定、文档模型（不含 I/O）

pub mod types;
pub mod rules;
pub mod expiry;
pub mod document;
pub mod layout;
pub mod error;

pub use types::{Role, Staffing, validate_person_name};
pub use rules::{Category, Selection, select_attachments};
pub use expiry::{extract_expiry_date, is_expired};
pub use document::{AttachmentDocument, Block, Page};
pub use layout::ImageLayout;
pub use error::{Error, Result};
