// The role value the challenge trusts blindly. Anyone who sends
// user=operator is treated as privileged; that is the whole point.
pub const OPERATOR: &str = "operator";

// Decode an x-www-form-urlencoded body (or a raw query string) into
// ordered key/value pairs.
pub fn parse_pairs(raw: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(raw.as_bytes()).into_owned().collect()
}

// Last occurrence of a key, trimmed. Missing key -> empty string.
pub fn extract_last(pairs: &[(String, String)], key: &str) -> String {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.trim().to_string())
        .unwrap_or_default()
}

// Client-asserted operator flag, no verification of any kind
pub fn is_operator(pairs: &[(String, String)]) -> bool {
    extract_last(pairs, "user") == OPERATOR
}
