//! Free-text checks for invite emails and trip links.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// `local@domain.tld`: dot-atom local part, hostname labels, alphabetic TLD.
#[allow(clippy::expect_used)]
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$",
    )
    .expect("Invalid email regex")
});

/// Maximum length of an address (RFC 5321 path limit minus brackets)
const MAX_EMAIL_LEN: usize = 254;

/// True when `input` is a plausible email address.
///
/// Surrounding whitespace is not trimmed; callers decide whether to trim.
pub fn is_valid_email(input: &str) -> bool {
    input.len() <= MAX_EMAIL_LEN && EMAIL_REGEX.is_match(input)
}

/// True when `input` is an absolute `http` or `https` URL with a host.
pub fn is_valid_url(input: &str) -> bool {
    Url::parse(input)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty()))
        .unwrap_or(false)
}
