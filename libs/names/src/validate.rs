//! DNS label and DNS subdomain syntax checks (RFC 1123).
//!
//! A subdomain is `^[a-zA-Z0-9]([a-zA-Z0-9.-]*[a-zA-Z0-9])?$` with at most
//! 253 characters. A label is the same without `.` and with at most 63.

use crate::error::DnsNameError;

/// Maximum length of a DNS subdomain name.
pub const MAX_DNS_SUBDOMAIN_LEN: usize = 253;

/// Maximum length of a single DNS label.
pub const MAX_DNS_LABEL_LEN: usize = 63;

/// Returns true if `s` is a valid DNS subdomain name.
pub fn is_valid_dns_subdomain_name(s: &str) -> bool {
    validate_dns_subdomain_name(s).is_ok()
}

/// Returns true if `s` is a valid DNS label.
pub fn is_valid_dns_label_name(s: &str) -> bool {
    validate_dns_label_name(s).is_ok()
}

/// Checks `s` against the DNS subdomain rules, reporting the first violation.
pub fn validate_dns_subdomain_name(s: &str) -> Result<(), DnsNameError> {
    check_length(s, MAX_DNS_SUBDOMAIN_LEN)?;
    check_syntax(s, true)
}

/// Checks `s` against the DNS label rules, reporting the first violation.
pub fn validate_dns_label_name(s: &str) -> Result<(), DnsNameError> {
    check_length(s, MAX_DNS_LABEL_LEN)?;
    check_syntax(s, false)
}

fn check_length(s: &str, max: usize) -> Result<(), DnsNameError> {
    if s.is_empty() {
        return Err(DnsNameError::Empty);
    }

    if s.len() > max {
        return Err(DnsNameError::TooLong { len: s.len(), max });
    }

    Ok(())
}

fn check_syntax(s: &str, allow_dots: bool) -> Result<(), DnsNameError> {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return Err(DnsNameError::Empty);
    };

    if !first.is_ascii_alphanumeric() {
        return Err(DnsNameError::InvalidStart { ch: first });
    }

    for (position, ch) in s.char_indices().skip(1) {
        let allowed = ch.is_ascii_alphanumeric() || ch == '-' || (allow_dots && ch == '.');
        if !allowed {
            return Err(DnsNameError::InvalidCharacter { ch, position });
        }
    }

    if let Some(last) = chars.next_back() {
        if !last.is_ascii_alphanumeric() {
            return Err(DnsNameError::InvalidEnd { ch: last });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("nginx", true)]
    #[case("n:ginx", false)]
    #[case("n/ginx", false)]
    #[case("n^ginx", false)]
    #[case("", false)]
    #[case("docker.io", true)]
    #[case("web-app", true)]
    #[case("webapp1", true)]
    #[case("-webapp", false)]
    #[case("webapp-", false)]
    #[case("a", true)]
    #[case("webapp.", false)]
    fn test_subdomain_rules(#[case] input: &str, #[case] want: bool) {
        assert_eq!(is_valid_dns_subdomain_name(input), want, "input {input:?}");
    }

    #[rstest]
    #[case("nginx", true)]
    #[case("n:ginx", false)]
    #[case("n/ginx", false)]
    #[case("n^ginx", false)]
    #[case("", false)]
    #[case("docker.io", false)]
    #[case("web-app", true)]
    #[case("webapp1", true)]
    #[case("-webapp", false)]
    #[case("webapp-", false)]
    #[case("7", true)]
    fn test_label_rules(#[case] input: &str, #[case] want: bool) {
        assert_eq!(is_valid_dns_label_name(input), want, "input {input:?}");
    }

    #[test]
    fn test_subdomain_length_boundary() {
        assert!(is_valid_dns_subdomain_name(&"a".repeat(253)));
        assert!(!is_valid_dns_subdomain_name(&format!("{}X", "a".repeat(253))));
    }

    #[test]
    fn test_label_length_boundary() {
        assert!(is_valid_dns_label_name(&"a".repeat(63)));
        assert!(!is_valid_dns_label_name(&format!("{}X", "a".repeat(63))));
    }

    #[test]
    fn test_length_checked_before_content() {
        let err = validate_dns_label_name(&"-".repeat(64)).unwrap_err();
        assert!(err.is_too_long());
        assert_eq!(err, DnsNameError::TooLong { len: 64, max: 63 });
    }

    #[test]
    fn test_reports_first_violation() {
        assert_eq!(
            validate_dns_subdomain_name("-webapp"),
            Err(DnsNameError::InvalidStart { ch: '-' })
        );
        assert_eq!(
            validate_dns_subdomain_name("webapp-"),
            Err(DnsNameError::InvalidEnd { ch: '-' })
        );
        assert_eq!(
            validate_dns_subdomain_name("web/app"),
            Err(DnsNameError::InvalidCharacter { ch: '/', position: 3 })
        );
        assert_eq!(
            validate_dns_label_name("docker.io"),
            Err(DnsNameError::InvalidCharacter { ch: '.', position: 6 })
        );
        assert_eq!(validate_dns_label_name(""), Err(DnsNameError::Empty));
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(!is_valid_dns_subdomain_name("café"));
        assert!(!is_valid_dns_label_name("ñame"));
    }
}
