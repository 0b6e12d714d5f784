//! Syntactic checks for URL, hostname and email fields.

use reqwest::Url;

const MAX_HOSTNAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Checks an absolute http(s) URL with a host.
pub(crate) fn check_http_url(s: &str) -> Result<(), String> {
    let url = Url::parse(s).map_err(|e| format!("invalid URL {:?}: {}", s, e))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported URL scheme: {}", url.scheme()));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(format!("URL has no host: {}", s));
    }

    Ok(())
}

/// Checks a bare DNS hostname (RFC 1123), without scheme or port.
pub(crate) fn check_hostname(s: &str) -> Result<(), String> {
    if s.is_empty() {
        return Err("hostname is empty".into());
    }
    if s.len() > MAX_HOSTNAME_LEN {
        return Err(format!("hostname longer than {} characters: {}", MAX_HOSTNAME_LEN, s));
    }

    for label in s.split('.') {
        if label.is_empty() || label.len() > MAX_LABEL_LEN {
            return Err(format!("invalid hostname label in {:?}", s));
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(format!("invalid character in hostname {:?}", s));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(format!("hostname label starts or ends with '-' in {:?}", s));
        }
    }

    Ok(())
}

/// Checks a `local@domain` address; the domain must be a dotted hostname.
pub(crate) fn check_email(s: &str) -> Result<(), String> {
    let (local, domain) = s
        .rsplit_once('@')
        .ok_or_else(|| format!("missing '@' in email address {:?}", s))?;

    if local.is_empty() {
        return Err(format!("empty local part in email address {:?}", s));
    }
    if local.chars().any(|c| c.is_whitespace() || c == '@') {
        return Err(format!("invalid local part in email address {:?}", s));
    }
    if !domain.contains('.') {
        return Err(format!("email domain is not fully qualified: {:?}", domain));
    }

    check_hostname(domain).map_err(|e| format!("invalid email domain: {}", e))
}

/// Checks a routing path segment.
pub(crate) fn check_path_prefix(s: &str) -> Result<(), String> {
    match s.chars().find(|c| c.is_whitespace() || *c == '?' || *c == '#') {
        Some(c) => Err(format!("path prefix contains {:?}", c)),
        None => Ok(()),
    }
}

/// Nullable text fields are either null or carry something visible.
pub(crate) fn check_not_blank(s: &str) -> Result<(), String> {
    if s.trim().is_empty() {
        Err("value is blank (use null for the built-in default)".into())
    } else {
        Ok(())
    }
}
