//! String normalization, MD5 digests and identifier generation.

use uuid::Uuid;

/// Normalizes a display name into its lookup form: lower-case, spaces as `_`.
pub fn make_safe(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Returns the lowercase hex MD5 digest of `input`'s UTF-8 bytes.
pub fn make_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input.as_bytes()))
}

/// Checks `input` against an expected hex digest.
///
/// The comparison is exact: an upper-case digest does not match.
pub fn check_md5(input: &str, md5: &str) -> bool {
    make_md5(input) == md5
}

/// Builds an identifier from `prefix` followed by a random v4 UUID without hyphens.
pub fn make_uuid(prefix: &str) -> String {
    format!("{}{}", prefix, Uuid::new_v4().simple())
}
