//! CSRF token lookup in a `document.cookie` style string.

/// Return the percent-decoded value of cookie `name`, if present.
///
/// Pairs are `;`-separated and trimmed; the first pair whose key matches
/// wins. A value that does not decode to UTF-8 is returned as-is.
pub fn token(cookies: &str, name: &str) -> Option<String> {
    if cookies.trim().is_empty() {
        return None;
    }

    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then_some(value)
        })
        .map(|raw| {
            urlencoding::decode(raw)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| raw.to_owned())
        })
}

#[cfg(test)]
mod tests {
    use super::token;

    #[test]
    fn finds_token_among_other_cookies() {
        let cookies = "sessionid=abc; csrftoken=Xy12; theme=dark";
        assert_eq!(token(cookies, "csrftoken").as_deref(), Some("Xy12"));
    }

    #[test]
    fn decodes_percent_escapes() {
        assert_eq!(
            token("csrftoken=a%2Bb%3Dc", "csrftoken").as_deref(),
            Some("a+b=c")
        );
    }

    #[test]
    fn keeps_equals_signs_inside_value() {
        assert_eq!(token("csrftoken=abc==", "csrftoken").as_deref(), Some("abc=="));
    }

    #[test]
    fn missing_or_empty_store_yields_none() {
        assert_eq!(token("", "csrftoken"), None);
        assert_eq!(token("   ", "csrftoken"), None);
        assert_eq!(token("sessionid=abc; theme=dark", "csrftoken"), None);
    }

    #[test]
    fn key_must_match_exactly() {
        assert_eq!(token("xcsrftoken=nope; csrftoken2=nope", "csrftoken"), None);
        assert_eq!(token("csrftoken", "csrftoken"), None);
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(
            token("csrftoken=first; csrftoken=second", "csrftoken").as_deref(),
            Some("first")
        );
    }

    #[test]
    fn empty_value_is_still_a_value() {
        assert_eq!(token("csrftoken=", "csrftoken").as_deref(), Some(""));
    }
}
