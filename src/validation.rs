//! Input validation for names and relay addresses

use url::Url;

/// Longest display name accepted
pub const MAX_NAME_LEN: usize = 32;

/// Validates a display name; returns the trimmed name.
pub fn validate_display_name(name: &str) -> Result<String, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(format!("Name too long (max {} characters)", MAX_NAME_LEN));
    }
    if name.contains(|c: char| c.is_control()) {
        return Err("Name contains control characters".to_string());
    }
    Ok(name.to_string())
}

/// Validates a relay URL; only `ws://` and `wss://` with a host are accepted.
pub fn validate_server_url(addr: &str) -> Result<Url, String> {
    let addr = addr.trim();
    if addr.is_empty() {
        return Err("Server URL cannot be empty".to_string());
    }
    let url = Url::parse(addr).map_err(|e| format!("Invalid server URL: {}", e))?;
    match url.scheme() {
        "ws" | "wss" => {}
        other => return Err(format!("Unsupported scheme '{}' (use ws:// or wss://)", other)),
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err("Server URL has no host".to_string());
    }
    Ok(url)
}
