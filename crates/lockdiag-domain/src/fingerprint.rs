use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for an emitted diagnostic.
///
/// Identity fields:
/// - code
/// - message
/// - file path (empty if absent)
/// - parent target
/// - parent package
pub fn fingerprint_for_diagnostic(
    code: &str,
    message: &str,
    file_path: &str,
    parent_target: &str,
    parent_package: &str,
) -> String {
    let canonical = [code, message, file_path, parent_target, parent_package].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn differs_by_target() {
        let a = fingerprint_for_diagnostic("NU1000", "m", "", "net8.0", "");
        let b = fingerprint_for_diagnostic("NU1000", "m", "", "net48", "");
        assert_ne!(a, b);
        assert_eq!(a.len(), 64);
        assert_eq!(a, fingerprint_for_diagnostic("NU1000", "m", "", "net8.0", ""));
    }
}
