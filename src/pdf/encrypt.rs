//! PDF encryption using lopdf
//!
//! Everything cryptographic is delegated to lopdf's AES-256 (revision 6)
//! standard security handler. This module only validates inputs, wires up
//! the crypt filter, and writes the encrypted copy.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use lopdf::encryption::crypt_filters::{Aes256CryptFilter, CryptFilter};
use lopdf::{Document, EncryptionState, EncryptionVersion};

use crate::error::{Error, Result};
use crate::password::MIN_USER_PASSWORD_LEN;
use crate::pdf::permissions::PermissionSet;

/// Options for encrypting a PDF
#[derive(Debug, Clone)]
pub struct EncryptOptions {
    /// Path to the unprotected source PDF
    pub input_path: PathBuf,
    /// Path the encrypted copy is written to
    pub output_path: PathBuf,
    /// Password required to open the document
    pub user_password: String,
    /// Password required to exercise restricted permissions
    pub owner_password: String,
    /// Permissions granted to user-password openers
    pub permissions: PermissionSet,
}

/// Encrypt a PDF with AES-256 and write it to the output path.
///
/// The source file is left unchanged; an encrypted copy is created at
/// `options.output_path`. The user password must be at least 8 characters —
/// this floor is enforced here even when a caller has overridden the
/// advisory strength check.
///
/// # Example
///
/// ```no_run
/// use pdf_protect::pdf::{EncryptOptions, PermissionSet, encrypt_pdf};
/// use std::path::PathBuf;
///
/// let options = EncryptOptions {
///     input_path: PathBuf::from("report.pdf"),
///     output_path: PathBuf::from("OUTPUT/report_20251024.pdf"),
///     user_password: "Abcdef1!".to_string(),
///     owner_password: "Abcdef1!xxxx".to_string(),
///     permissions: PermissionSet::default(),
/// };
///
/// encrypt_pdf(&options).expect("Failed to encrypt");
/// ```
pub fn encrypt_pdf(options: &EncryptOptions) -> Result<()> {
    if !options.input_path.exists() {
        return Err(Error::InputNotFound(options.input_path.clone()));
    }

    if options.user_password.chars().count() < MIN_USER_PASSWORD_LEN {
        return Err(Error::WeakPassword(
            "User password must be at least 8 characters".to_string(),
        ));
    }

    let mut doc = Document::load(&options.input_path)?;

    // AES-256 for both streams and strings via a single StdCF crypt filter
    let mut crypt_filters: BTreeMap<Vec<u8>, Arc<dyn CryptFilter>> = BTreeMap::new();
    crypt_filters.insert(b"StdCF".to_vec(), Arc::new(Aes256CryptFilter));

    let version = EncryptionVersion::V5 {
        encrypt_metadata: true,
        crypt_filters,
        stream_filter: b"StdCF".to_vec(),
        string_filter: b"StdCF".to_vec(),
        owner_password: &options.owner_password,
        user_password: &options.user_password,
        permissions: options.permissions.to_lopdf(),
    };

    let state = EncryptionState::try_from(version)
        .map_err(|e| Error::Encryption(e.to_string()))?;
    doc.encrypt(&state)
        .map_err(|e| Error::Encryption(e.to_string()))?;

    doc.save(&options.output_path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn options_for(input: &Path, output: &Path) -> EncryptOptions {
        EncryptOptions {
            input_path: input.to_path_buf(),
            output_path: output.to_path_buf(),
            user_password: "Abcdef1!".to_string(),
            owner_password: "Abcdef1!xxxx".to_string(),
            permissions: PermissionSet::default(),
        }
    }

    #[test]
    fn test_encrypt_nonexistent_input() {
        let result = encrypt_pdf(&options_for(
            Path::new("nonexistent.pdf"),
            Path::new("out.pdf"),
        ));
        assert!(matches!(result, Err(Error::InputNotFound(_))));
    }

    #[test]
    fn test_encrypt_rejects_short_user_password() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.pdf");
        std::fs::write(&input, b"%PDF-1.5\n").unwrap();

        let mut options = options_for(&input, &dir.path().join("out.pdf"));
        options.user_password = "Ab1!".to_string();

        // Length floor is checked before the document is even loaded
        let result = encrypt_pdf(&options);
        assert!(matches!(result, Err(Error::WeakPassword(_))));
    }

    // End-to-end encryption tests with real documents live in tests/
}
