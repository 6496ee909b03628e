//! Document permission flags
//!
//! A `PermissionSet` mirrors the PDF standard security handler's permission
//! bits that this tool cares about. It converts to `lopdf::Permissions` at
//! encryption time; bits not covered here (form filling, page assembly) are
//! left unset.

use lopdf::Permissions;

/// Permissions granted to anyone opening the document with the user password.
///
/// Anything not granted here requires the owner password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionSet {
    /// Allow printing
    pub print: bool,
    /// Allow high-quality printing
    pub high_quality_print: bool,
    /// Allow content extraction for accessibility
    pub accessibility: bool,
    /// Allow text/image copying
    pub copy: bool,
    /// Allow document modification
    pub modify: bool,
    /// Allow annotations/comments
    pub annotate: bool,
}

impl Default for PermissionSet {
    /// The tool's fixed policy: grant everything. Opening the file still
    /// requires the user password; exercising copy/modify/annotate against
    /// a conforming reader requires the owner password.
    fn default() -> Self {
        PermissionSet {
            print: true,
            high_quality_print: true,
            accessibility: true,
            copy: true,
            modify: true,
            annotate: true,
        }
    }
}

impl PermissionSet {
    /// A set with every flag denied
    pub fn none() -> Self {
        PermissionSet {
            print: false,
            high_quality_print: false,
            accessibility: false,
            copy: false,
            modify: false,
            annotate: false,
        }
    }

    /// Convert to the lopdf permission bitflags
    pub(crate) fn to_lopdf(self) -> Permissions {
        let mut flags = Permissions::empty();
        if self.print {
            flags.insert(Permissions::PRINTABLE);
        }
        if self.high_quality_print {
            flags.insert(Permissions::PRINTABLE_IN_HIGH_QUALITY);
        }
        if self.accessibility {
            flags.insert(Permissions::COPYABLE_FOR_ACCESSIBILITY);
        }
        if self.copy {
            flags.insert(Permissions::COPYABLE);
        }
        if self.modify {
            flags.insert(Permissions::MODIFIABLE);
        }
        if self.annotate {
            flags.insert(Permissions::ANNOTABLE);
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grants_all_tracked_bits() {
        let flags = PermissionSet::default().to_lopdf();

        assert!(flags.contains(Permissions::PRINTABLE));
        assert!(flags.contains(Permissions::PRINTABLE_IN_HIGH_QUALITY));
        assert!(flags.contains(Permissions::COPYABLE_FOR_ACCESSIBILITY));
        assert!(flags.contains(Permissions::COPYABLE));
        assert!(flags.contains(Permissions::MODIFIABLE));
        assert!(flags.contains(Permissions::ANNOTABLE));
    }

    #[test]
    fn test_none_grants_nothing() {
        assert_eq!(PermissionSet::none().to_lopdf(), Permissions::empty());
    }

    #[test]
    fn test_individual_flags_map_independently() {
        let set = PermissionSet {
            print: true,
            ..PermissionSet::none()
        };
        let flags = set.to_lopdf();

        assert!(flags.contains(Permissions::PRINTABLE));
        assert!(!flags.contains(Permissions::MODIFIABLE));
        assert!(!flags.contains(Permissions::COPYABLE));
    }
}
