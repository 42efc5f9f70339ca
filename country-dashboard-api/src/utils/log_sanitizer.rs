//! Log size limiting
//!
//! `/all` answers with a few hundred kilobytes of JSON; debug logs only keep
//! the head of a body.

/// Maximum number of bytes of a body kept in a log line.
const TRUNCATE_LIMIT: usize = 512;

/// Cut `s` at a char boundary no later than `TRUNCATE_LIMIT` bytes.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }

    let mut end = TRUNCATE_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }

    format!("{}... [{} of {} bytes]", &s[..end], end, s.len())
}

/// Short description of a list response for logging, e.g. `250 countries`.
pub fn describe_count(count: usize) -> String {
    if count == 1 {
        "1 country".to_string()
    } else {
        format!("{count} countries")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        assert_eq!(truncate_for_log("[]"), "[]");
    }

    #[test]
    fn long_body_truncated_with_size() {
        let body = "x".repeat(TRUNCATE_LIMIT * 3);
        let out = truncate_for_log(&body);
        assert!(out.starts_with(&"x".repeat(TRUNCATE_LIMIT)));
        assert!(out.ends_with(&format!("[{TRUNCATE_LIMIT} of {} bytes]", TRUNCATE_LIMIT * 3)));
    }

    #[test]
    fn multibyte_boundary_respected() {
        // "é" is two bytes, so the limit falls inside a char
        let body = format!("a{}", "é".repeat(TRUNCATE_LIMIT));
        let out = truncate_for_log(&body);
        assert!(out.contains("... ["));
    }

    #[test]
    fn count_wording() {
        assert_eq!(describe_count(1), "1 country");
        assert_eq!(describe_count(250), "250 countries");
    }
}
