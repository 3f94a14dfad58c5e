//! Text format checks.
//!
//! Email syntax follows the common dot-atom form: `local@label.label`.
//! Letters and digits from any script are allowed on both sides of the
//! @-sign. Quoted local parts, IP-literal domains and comments are rejected.

use lazy_static::lazy_static;
use regex::Regex;

/// Maximum total address length
pub const MAX_EMAIL_LEN: usize = 254;
/// Maximum local part length
pub const MAX_LOCAL_LEN: usize = 64;

lazy_static! {
    /// Dot-atom local part: no leading, trailing or consecutive dots
    static ref LOCAL_PART: Regex = Regex::new(
        r"^[\p{L}\p{M}\p{N}!#$%&'*+/=?^_`{|}~-]+(?:\.[\p{L}\p{M}\p{N}!#$%&'*+/=?^_`{|}~-]+)*$"
    ).unwrap();

    /// DNS label (or its Unicode form): alphanumeric ends, hyphens inside, at most 63 chars
    static ref DOMAIN_LABEL: Regex = Regex::new(
        r"^[\p{L}\p{N}](?:[\p{L}\p{M}\p{N}-]{0,61}[\p{L}\p{M}\p{N}])?$"
    ).unwrap();

    /// Top-level domain: letters only
    static ref TLD: Regex = Regex::new(r"^[\p{L}\p{M}]{2,63}$").unwrap();
}

/// Check email syntax.
///
/// Returns the normalized address (domain lower-cased) or the reason it was rejected.
pub fn normalize_email(address: &str) -> Result<String, &'static str> {
    if address.len() > MAX_EMAIL_LEN {
        return Err("email address is too long");
    }

    let (local, domain) = address
        .split_once('@')
        .ok_or("email address must contain an @-sign")?;

    if local.is_empty() {
        return Err("there must be something before the @-sign");
    }
    if local.len() > MAX_LOCAL_LEN {
        return Err("the part before the @-sign is too long");
    }
    if !LOCAL_PART.is_match(local) {
        return Err("the part before the @-sign contains invalid characters or dots");
    }

    if domain.is_empty() {
        return Err("there must be something after the @-sign");
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err("the domain name must contain a period");
    }
    if !labels.iter().all(|label| DOMAIN_LABEL.is_match(label)) {
        return Err("the domain name is not valid");
    }
    if labels.last().map_or(true, |tld| !TLD.is_match(tld)) {
        return Err("the domain name does not end with a valid top-level domain");
    }

    Ok(format!("{}@{}", local, domain.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert_eq!(normalize_email("a@b.com"), Ok("a@b.com".to_string()));
        assert!(normalize_email("first.last+tag@mail.example.co.uk").is_ok());
        assert!(normalize_email("o'brien@sub-domain.example.org").is_ok());
    }

    #[test]
    fn test_domain_lowercased() {
        assert_eq!(
            normalize_email("Jane.Doe@Example.COM"),
            Ok("Jane.Doe@example.com".to_string())
        );
    }

    #[test]
    fn test_invalid_addresses() {
        for address in [
            "not-an-email",
            "@example.com",
            "user@",
            "user@localhost",
            "user@@example.com",
            ".user@example.com",
            "user.@example.com",
            "us..er@example.com",
            "user@-example.com",
            "user@example-.com",
            "user@example.c",
            "user@example.123",
            "user name@example.com",
            "user@exa mple.com",
        ] {
            assert!(normalize_email(address).is_err(), "accepted {}", address);
        }
    }

    #[test]
    fn test_internationalized_addresses() {
        assert_eq!(normalize_email("josé@example.com"), Ok("josé@example.com".to_string()));
        assert!(normalize_email("用户@例子.广告").is_ok());
        assert_eq!(
            normalize_email("user@BÜCHER.example"),
            Ok("user@bücher.example".to_string())
        );
        assert!(normalize_email("josé@exa mple.com").is_err());
    }

    fn address_of_len(len: usize) -> String {
        // local (64) + "@" + two 63-char labels + "." + filler + ".com"
        let filler = "c".repeat(len - (MAX_LOCAL_LEN + 1 + 63 + 1 + 63 + 1 + 4));
        format!(
            "{}@{}.{}.{}.com",
            "a".repeat(MAX_LOCAL_LEN),
            "b".repeat(63),
            "d".repeat(63),
            filler
        )
    }

    #[test]
    fn test_length_limits() {
        let local = "a".repeat(MAX_LOCAL_LEN + 1);
        assert!(normalize_email(&format!("{}@example.com", local)).is_err());

        let at_limit = address_of_len(MAX_EMAIL_LEN);
        assert_eq!(at_limit.len(), MAX_EMAIL_LEN);
        assert!(normalize_email(&at_limit).is_ok());

        let over_limit = address_of_len(MAX_EMAIL_LEN + 1);
        assert_eq!(over_limit.len(), MAX_EMAIL_LEN + 1);
        assert_eq!(normalize_email(&over_limit), Err("email address is too long"));
    }
}
