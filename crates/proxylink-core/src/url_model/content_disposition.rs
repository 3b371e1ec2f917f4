//! Content-Disposition filename parameter parsing.
//!
//! Object stores pass this header through a `response-content-disposition`
//! query parameter on signed URLs, so the value is usually seen already
//! percent-decoded but still quoted.

/// Returns the filename carried by a Content-Disposition value.
///
/// `filename*=UTF-8''…` (RFC 5987) wins over plain `filename=`; quoted values
/// are unquoted and unescaped.
pub fn parse_content_disposition_filename(value: &str) -> Option<String> {
    let mut plain = None;

    for param in value.split(';').map(str::trim) {
        let Some((name, raw)) = param.split_once('=') else {
            continue;
        };
        let raw = raw.trim();

        if name.trim().eq_ignore_ascii_case("filename*") {
            let encoded = raw
                .split_once("''")
                .filter(|(charset, _)| charset.eq_ignore_ascii_case("utf-8"))
                .map(|(_, rest)| rest);
            if let Some(decoded) = encoded.map(percent_decode).filter(|s| !s.is_empty()) {
                return Some(decoded);
            }
        } else if name.trim().eq_ignore_ascii_case("filename") {
            let v = unquote(raw);
            if !v.is_empty() {
                plain = Some(v);
            }
        }
    }

    plain
}

fn unquote(raw: &str) -> String {
    let inner = match raw.strip_prefix('"').and_then(|r| r.strip_suffix('"')) {
        Some(inner) => inner,
        None => return raw.trim_matches('\'').to_string(),
    };
    let mut out = String::with_capacity(inner.len());
    let mut escaped = false;
    for c in inner.chars() {
        if escaped || c != '\\' {
            out.push(c);
            escaped = false;
        } else {
            escaped = true;
        }
    }
    out
}

pub(super) fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let decoded = (bytes[i] == b'%')
            .then(|| input.get(i + 1..i + 3))
            .flatten()
            .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());
        match decoded {
            Some(b) => {
                out.push(b);
                i += 3;
            }
            None => {
                out.push(bytes[i]);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_and_token_forms() {
        assert_eq!(
            parse_content_disposition_filename("attachment; filename=\"report.pdf\"").as_deref(),
            Some("report.pdf")
        );
        assert_eq!(
            parse_content_disposition_filename("attachment; filename=report.pdf").as_deref(),
            Some("report.pdf")
        );
        assert_eq!(
            parse_content_disposition_filename("attachment; filename='single.bin'").as_deref(),
            Some("single.bin")
        );
    }

    #[test]
    fn escaped_quotes() {
        assert_eq!(
            parse_content_disposition_filename(r#"inline; filename="a \"b\".txt""#).as_deref(),
            Some(r#"a "b".txt"#)
        );
    }

    #[test]
    fn extended_value_takes_precedence() {
        assert_eq!(
            parse_content_disposition_filename(
                "attachment; filename=\"fallback.bin\"; filename*=UTF-8''caf%C3%A9%20menu.pdf",
            )
            .as_deref(),
            Some("café menu.pdf")
        );
    }

    #[test]
    fn missing_filename() {
        assert_eq!(parse_content_disposition_filename("attachment"), None);
        assert_eq!(parse_content_disposition_filename("attachment; filename=\"\""), None);
    }

    #[test]
    fn bad_percent_sequences_are_kept() {
        assert_eq!(percent_decode("100%zz"), "100%zz");
        assert_eq!(percent_decode("a%2"), "a%2");
    }
}
