//! Release update checking
//!
//! Decides whether a newer release exists by pulling two string fields and
//! the asset URL list out of the release API's JSON body with targeted
//! pattern searches - deliberately not a JSON parser. Version strings are
//! compared as the sequence of decimal digit runs they contain.
//!
//! Every failure mode - transport, bad status, missing fields - degrades
//! to "no update available". The check runs once per process lifetime, at
//! startup, on a worker thread that hands its result back over a channel
//! the UI thread drains; there are no retries and no cancellation.

use fancy_regex::Regex;
use std::cmp::Ordering;
use std::sync::mpsc;
use std::sync::OnceLock;

/// Release metadata endpoint queried at startup
pub const RELEASE_API_URL: &str =
    "https://api.github.com/repos/promoping/codepad/releases/latest";

/// Installer asset filename this platform downloads
pub const RELEASE_ASSET_SUFFIX: &str = "CodePad-Setup.exe";

/// Result of a successful version check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    /// Release tag, e.g. "v1.4.0"
    pub tag: String,
    /// Release page for the browser
    pub html_url: String,
    /// Direct installer download, when an asset matched
    pub download_url: Option<String>,
}

/// Network transport collaborator
///
/// Implementations return the HTTP status code and raw body, or `None` on
/// any transport failure. The core never touches the network itself.
pub trait ReleaseFetcher: Send {
    fn fetch(&self, url: &str) -> Option<(u16, String)>;
}

/// Extract every maximal decimal digit run, left to right
///
/// Non-numeric characters are skipped, not treated as separators, so
/// `"v1.2.3-beta4"` yields `[1, 2, 3, 4]`.
pub fn parse_version_numbers(v: &str) -> Vec<u64> {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    let digits = DIGITS.get_or_init(|| Regex::new(r"\d+").expect("digit pattern is well-formed"));
    digits
        .find_iter(v)
        .flatten()
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Compare two version strings component-wise
///
/// The shorter sequence is padded with zeros, so `"2.0" == "2.0.0"`. Note
/// the digit-extraction quirk: a pre-release suffix digit becomes a real
/// component, making `"v1.2.3-beta1"` greater than `"1.2.3"`.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let va = parse_version_numbers(a);
    let vb = parse_version_numbers(b);
    for i in 0..va.len().max(vb.len()) {
        let ai = va.get(i).copied().unwrap_or(0);
        let bi = vb.get(i).copied().unwrap_or(0);
        match ai.cmp(&bi) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Targeted search for `"key" : "value"` in a JSON-shaped body
///
/// `key` is inserted into the pattern verbatim; callers pass literal field
/// names. Non-greedy up to the next quote, so a value containing an
/// escaped quote followed by more text mis-extracts - a known limitation
/// of the format, kept as is.
pub fn extract_json_string(body: &str, key: &str) -> Option<String> {
    let pattern = format!("\"{}\"\\s*:\\s*\"(.*?)\"", key);
    let regex = Regex::new(&pattern).ok()?;
    let caps = regex.captures(body).ok()??;
    Some(unescape_json_string(caps.get(1)?.as_str()))
}

/// Collect every `browser_download_url` value in the body, in order
pub fn extract_download_urls(body: &str) -> Vec<String> {
    static URL: OnceLock<Regex> = OnceLock::new();
    let regex = URL.get_or_init(|| {
        Regex::new("\"browser_download_url\"\\s*:\\s*\"(.*?)\"")
            .expect("download url pattern is well-formed")
    });
    regex
        .captures_iter(body)
        .flatten()
        .filter_map(|caps| caps.get(1).map(|m| unescape_json_string(m.as_str())))
        .collect()
}

/// Reverses exactly the two escapes the release API produces
fn unescape_json_string(s: &str) -> String {
    s.replace("\\/", "/").replace("\\\"", "\"")
}

/// First URL whose name matches the target suffix, case-insensitively
pub fn select_asset<'a>(urls: &'a [String], suffix: &str) -> Option<&'a str> {
    let target = suffix.to_lowercase();
    urls.iter()
        .find(|url| url.to_lowercase().ends_with(&target))
        .map(String::as_str)
}

/// Run one version check against the release API
///
/// Returns release info only when the fetched tag is strictly newer than
/// `current_version`; any failure along the way means `None`.
pub fn check_for_update(
    fetcher: &dyn ReleaseFetcher,
    current_version: &str,
) -> Option<ReleaseInfo> {
    let (status, body) = fetcher.fetch(RELEASE_API_URL)?;
    if status != 200 {
        tracing::debug!("Update check got status {}", status);
        return None;
    }
    let tag = extract_json_string(&body, "tag_name")?;
    let html_url = extract_json_string(&body, "html_url")?;
    if compare_versions(&tag, current_version) != Ordering::Greater {
        tracing::debug!("Already up to date ({} <= {})", tag, current_version);
        return None;
    }
    let urls = extract_download_urls(&body);
    let download_url = select_asset(&urls, RELEASE_ASSET_SUFFIX).map(str::to_string);
    tracing::info!("Update available: {}", tag);
    Some(ReleaseInfo {
        tag,
        html_url,
        download_url,
    })
}

/// Fire-and-forget version check on a worker thread
///
/// The returned receiver delivers at most one `ReleaseInfo`; the UI thread
/// polls it (e.g. once per event-loop tick) and shows the update prompt on
/// its own thread. A failed check simply never sends.
pub fn check_for_update_async<F>(fetcher: F, current_version: String) -> mpsc::Receiver<ReleaseInfo>
where
    F: ReleaseFetcher + 'static,
{
    let (tx, rx) = mpsc::channel();
    let spawned = std::thread::Builder::new()
        .name("update-check".to_string())
        .spawn(move || {
            if let Some(info) = check_for_update(&fetcher, &current_version) {
                let _ = tx.send(info);
            }
        });
    if let Err(e) = spawned {
        tracing::warn!("Failed to spawn update check thread: {}", e);
    }
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_extracts_digit_runs() {
        assert_eq!(parse_version_numbers("1.2.3"), vec![1, 2, 3]);
        assert_eq!(parse_version_numbers("v1.2.3-beta4"), vec![1, 2, 3, 4]);
        assert_eq!(parse_version_numbers("no digits"), Vec::<u64>::new());
    }

    #[test]
    fn compare_pads_with_zeros() {
        assert_eq!(compare_versions("2.0", "2.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("1.10.0", "1.9.9"), Ordering::Greater);
        assert_eq!(compare_versions("1.2", "1.2.1"), Ordering::Less);
    }

    #[test]
    fn unescape_handles_exactly_two_escapes() {
        assert_eq!(unescape_json_string("a\\/b"), "a/b");
        assert_eq!(unescape_json_string("say \\\"hi\\\""), "say \"hi\"");
        // Other escapes pass through untouched
        assert_eq!(unescape_json_string("tab\\there"), "tab\\there");
    }

    #[test]
    fn extract_field() {
        let body = r#"{"tag_name":"v2.1.0","html_url":"https:\/\/x"}"#;
        assert_eq!(
            extract_json_string(body, "tag_name").as_deref(),
            Some("v2.1.0")
        );
        assert_eq!(
            extract_json_string(body, "html_url").as_deref(),
            Some("https://x")
        );
        assert_eq!(extract_json_string(body, "missing"), None);
    }

    #[test]
    fn select_asset_is_case_insensitive_suffix_match() {
        let urls = vec![
            "https://x/release.zip".to_string(),
            "https://x/codepad-setup.EXE".to_string(),
        ];
        assert_eq!(
            select_asset(&urls, "CodePad-Setup.exe"),
            Some("https://x/codepad-setup.EXE")
        );
        assert_eq!(select_asset(&urls, "missing.dmg"), None);
    }
}
