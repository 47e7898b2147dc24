/// Normalize a library version for display in `{name}/{version}`.
///
/// Build metadata (`+...`) is dropped, and so is a fourth release component equal to `0`
/// (`1.2.3.0` becomes `1.2.3`). A prerelease label is kept. Anything else passes through.
pub fn normalize_version(raw: &str) -> String {
    let raw = raw.trim();
    let without_metadata = raw.split_once('+').map_or(raw, |(head, _)| head);

    let (release, prerelease) = match without_metadata.split_once('-') {
        Some((release, label)) => (release, Some(label)),
        None => (without_metadata, None),
    };

    let parts: Vec<&str> = release.split('.').collect();
    let numeric = parts
        .iter()
        .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()));

    let release = if numeric && parts.len() == 4 && parts[3].bytes().all(|b| b == b'0') {
        parts[..3].join(".")
    } else {
        release.to_string()
    };

    match prerelease {
        Some(label) => format!("{release}-{label}"),
        None => release,
    }
}
