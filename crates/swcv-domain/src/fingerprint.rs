use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a finding.
///
/// Identity fields, joined with `|`:
/// - check_id
/// - code
/// - the offending package
/// - the dependency symbol (if any)
pub fn fingerprint_for(check_id: &str, code: &str, package: &str, symbol: Option<&str>) -> String {
    let mut parts = vec![check_id, code, package];
    if let Some(s) = symbol {
        parts.push(s);
    }
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
