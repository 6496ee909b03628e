//! PDF Protect Library
//!
//! A cross-platform library for creating password-protected copies of PDF
//! files. This library provides functionality to:
//! - Encrypt PDFs with AES-256 user/owner passwords and permission flags
//! - Validate password strength and owner-password rules
//! - Resolve date-stamped, non-colliding output filenames
//! - Print decorated terminal status output
//!
//! # Example
//!
//! ```no_run
//! use pdf_protect::pdf::{EncryptOptions, PermissionSet, encrypt_pdf};
//! use std::path::PathBuf;
//!
//! let options = EncryptOptions {
//!     input_path: PathBuf::from("report.pdf"),
//!     output_path: PathBuf::from("OUTPUT/report_20251024.pdf"),
//!     user_password: "Abcdef1!".to_string(),
//!     owner_password: "Abcdef1!xxxx".to_string(),
//!     permissions: PermissionSet::default(),
//! };
//!
//! encrypt_pdf(&options).expect("Failed to encrypt PDF");
//! ```

pub mod error;
pub mod naming;
pub mod password;
pub mod pdf;
pub mod term;

// Re-export commonly used items
pub use error::{Error, Result};
