//! URL construction for catalog lookups, mod pages and downloads.
//!
//! Pure string work; nothing here touches the network.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Query encoding: `=` and `&` stay literal so parameters keep their
/// structure; every other reserved byte (including `%` and `/`) is escaped.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'=')
    .remove(b'&');

const SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// Rewrite a release's artifact reference onto the public download host.
///
/// The reference's own host is discarded; its path is appended to
/// `download_base` and its query is re-encoded. A reference without a
/// query yields a URL without `?`.
pub fn download_link(raw: &str, download_base: &str) -> String {
    let (path, query) = split_reference(raw);
    let mut url = format!(
        "{}/{}",
        download_base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    if !query.is_empty() {
        url.push('?');
        url.extend(utf8_percent_encode(query, QUERY_ENCODE_SET));
    }
    url
}

/// Public page of a mod on the catalog site.
pub fn mod_page_url(page_base: &str, asset_id: u64) -> String {
    format!("{page_base}{asset_id}")
}

/// Catalog API URL for a mod id. The id is escaped as a single path segment.
pub fn lookup_url(api_base: &str, mod_id: &str) -> String {
    format!("{api_base}{}", utf8_percent_encode(mod_id, SEGMENT_ENCODE_SET))
}

/// Split a URL reference into (path, query), dropping scheme, authority
/// and fragment.
///
/// The query must reach the encoder exactly as written. `Url::parse` would
/// already percent-encode spaces and non-ASCII, which the encoder would then
/// escape a second time (`%20` becoming `%2520`).
fn split_reference(raw: &str) -> (&str, &str) {
    let raw = raw.split_once('#').map_or(raw, |(before, _)| before);

    let after_scheme = match raw.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => raw,
    };
    let path_and_query = match after_scheme.strip_prefix("//") {
        Some(authority) => authority
            .find(&['/', '?'][..])
            .map_or("", |i| &authority[i..]),
        None => after_scheme,
    };

    path_and_query
        .split_once('?')
        .unwrap_or((path_and_query, ""))
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
