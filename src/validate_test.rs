use super::*;

// =============================================================
// Normalization
// =============================================================

#[test]
fn normalize_prepends_https_to_bare_hosts() {
    assert_eq!(normalize_url("example.com"), "https://example.com");
    assert_eq!(normalize_url("example.com/a/b"), "https://example.com/a/b");
}

#[test]
fn normalize_keeps_existing_schemes() {
    assert_eq!(normalize_url("http://example.com"), "http://example.com");
    assert_eq!(normalize_url("https://example.com"), "https://example.com");
}

#[test]
fn normalize_scheme_probe_is_case_insensitive() {
    assert_eq!(normalize_url("HTTPS://example.com"), "HTTPS://example.com");
    assert_eq!(normalize_url("Http://example.com"), "Http://example.com");
}

// =============================================================
// validate: accepted input
// =============================================================

#[test]
fn scheme_bearing_urls_come_back_unmodified() {
    assert_eq!(
        validate("Example", "https://example.com"),
        Ok("https://example.com".to_owned())
    );
    assert_eq!(
        validate("Example", "http://example.com/path?q=1"),
        Ok("http://example.com/path?q=1".to_owned())
    );
}

#[test]
fn bare_hosts_are_normalized_then_accepted() {
    assert_eq!(
        validate("Example", "example.com"),
        Ok("https://example.com".to_owned())
    );
}

// =============================================================
// validate: missing fields
// =============================================================

#[test]
fn empty_name_is_a_missing_field() {
    assert_eq!(
        validate("", "https://x.com"),
        Err(ValidationError::MissingField)
    );
}

#[test]
fn empty_url_is_a_missing_field() {
    assert_eq!(validate("Example", ""), Err(ValidationError::MissingField));
}

#[test]
fn missing_field_wins_over_a_bad_url() {
    assert_eq!(validate("", "not a url"), Err(ValidationError::MissingField));
}

// =============================================================
// validate: malformed urls
// =============================================================

#[test]
fn whitespace_after_the_scheme_is_invalid() {
    assert_eq!(
        validate("Example", "https:// example.com"),
        Err(ValidationError::InvalidUrl)
    );
}

#[test]
fn reserved_leading_characters_are_invalid() {
    for url in [
        "https://$x.com",
        "https://.x.com",
        "https://?x.com",
        "https://#x.com",
    ] {
        assert_eq!(
            validate("Example", url),
            Err(ValidationError::InvalidUrl),
            "{url}"
        );
    }
}

#[test]
fn scheme_alone_is_invalid() {
    assert_eq!(
        validate("Example", "https://"),
        Err(ValidationError::InvalidUrl)
    );
}

#[test]
fn single_character_host_is_invalid() {
    assert_eq!(
        validate("Example", "https://a"),
        Err(ValidationError::InvalidUrl)
    );
}

#[test]
fn uppercase_scheme_fails_the_format_rule() {
    // Normalization leaves `HTTPS://` alone but the format rule only
    // matches lowercase schemes.
    assert_eq!(
        validate("Example", "HTTPS://example.com"),
        Err(ValidationError::InvalidUrl)
    );
}

// =============================================================
// Error messages
// =============================================================

#[test]
fn error_messages_match_the_alert_text() {
    assert_eq!(
        ValidationError::MissingField.to_string(),
        "Please submit values for both fields."
    );
    assert_eq!(
        ValidationError::InvalidUrl.to_string(),
        "Please provide a valid web address."
    );
}
