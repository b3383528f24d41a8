//! Normalization of declared dependency names

use crate::error::Error;

/// Normalizes a declared parameter identifier into its registry lookup name.
///
/// Surrounding ASCII whitespace is trimmed, then one matching pair of leading
/// and trailing underscores is stripped, so a parameter declared as
/// `_service_` resolves against the registry name `service`. A lone leading
/// or trailing underscore is kept as-is. The remainder must be a bare
/// identifier.
pub(crate) fn parse(raw: &str) -> Result<Box<str>, Error> {
    let trimmed = raw.trim();
    let name = match trimmed
        .strip_prefix('_')
        .and_then(|inner| inner.strip_suffix('_'))
    {
        Some(inner) if !inner.is_empty() => inner,
        _ => trimmed
    };
    if is_identifier(name) {
        Ok(name.into())
    } else {
        Err(Error::malformed_name(raw))
    }
}

/// Normalizes a declared parameter list, preserving declaration order
pub(crate) fn parse_list(raw: &[&str]) -> Result<Vec<Box<str>>, Error> {
    raw.iter().map(|name| parse(name)).collect()
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' =>
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        _ => false
    }
}

#[cfg(test)]
mod tests {
    use super::{parse, parse_list};
    use crate::error::Error;

    #[test]
    fn it_keeps_a_plain_identifier() {
        assert_eq!(&*parse("service1").unwrap(), "service1");
    }

    #[test]
    fn it_strips_a_surrounding_underscore_pair() {
        assert_eq!(&*parse("_service1_").unwrap(), "service1");
    }

    #[test]
    fn it_strips_only_one_pair() {
        assert_eq!(&*parse("__service1__").unwrap(), "_service1_");
    }

    #[test]
    fn it_keeps_a_lone_leading_underscore() {
        assert_eq!(&*parse("_service1").unwrap(), "_service1");
    }

    #[test]
    fn it_keeps_a_lone_trailing_underscore() {
        assert_eq!(&*parse("service1_").unwrap(), "service1_");
    }

    #[test]
    fn it_keeps_a_bare_underscore() {
        assert_eq!(&*parse("_").unwrap(), "_");
    }

    #[test]
    fn it_trims_surrounding_whitespace() {
        assert_eq!(&*parse("  service1 ").unwrap(), "service1");
    }

    #[test]
    fn it_rejects_an_empty_name() {
        assert!(matches!(parse("").unwrap_err(), Error::MalformedName(_)));
        assert!(matches!(parse("   ").unwrap_err(), Error::MalformedName(_)));
    }

    #[test]
    fn it_rejects_a_leading_digit() {
        assert!(matches!(parse("1service").unwrap_err(), Error::MalformedName(_)));
    }

    #[test]
    fn it_rejects_inner_punctuation() {
        for raw in ["two words", "a-b", "a,b", "{pattern}", "(a)"] {
            assert!(matches!(parse(raw).unwrap_err(), Error::MalformedName(_)), "accepted {raw:?}");
        }
    }

    #[test]
    fn it_normalizes_a_list_in_order() {
        let names = parse_list(&["service1", "_service2_", "service3"]).unwrap();

        assert_eq!(names.len(), 3);
        assert_eq!(&*names[0], "service1");
        assert_eq!(&*names[1], "service2");
        assert_eq!(&*names[2], "service3");
    }

    #[test]
    fn it_fails_a_list_on_the_first_malformed_name() {
        let err = parse_list(&["service1", "not a name"]).unwrap_err();

        assert!(matches!(err, Error::MalformedName(raw) if &*raw == "not a name"));
    }
}
