//! URL path template substitution.
//!
//! Templates name their parameters with braces: `/accounts/{address}/votes`.
//! Values are percent-encoded as path segment content; everything outside a
//! placeholder is copied verbatim.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ConfigError;

/// Characters left unencoded in a substituted value: RFC 3986 "unreserved".
pub(crate) const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Replaces each `{name}` in `template` with its value from `params`.
///
/// Placeholders without a value are an error; parameters with no matching
/// placeholder are ignored.
///
/// ## Examples
///
/// ```rust
/// use resource_client::template::substitute;
///
/// let url = substitute("/api/accounts/{id}", &[("id", "42")]).unwrap();
/// assert_eq!(url, "/api/accounts/42");
///
/// assert!(substitute::<&str, &str>("/api/accounts/{id}", &[]).is_err());
/// ```
///
/// ## Errors
///
/// Returns [`ConfigError::UnresolvedPlaceholder`] naming the first
/// placeholder left without a value.
pub fn substitute<K, V>(template: &str, params: &[(K, V)]) -> Result<String, ConfigError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut resolved = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let name = &rest[start + 1..start + len];

        resolved.push_str(&rest[..start]);
        match params.iter().find(|(key, _)| key.as_ref() == name) {
            _ if name.is_empty() => resolved.push_str("{}"),
            Some((_, value)) => {
                resolved.extend(utf8_percent_encode(value.as_ref(), COMPONENT_ENCODE_SET));
            }
            None => {
                return Err(ConfigError::UnresolvedPlaceholder {
                    placeholder: name.to_string(),
                })
            }
        }
        rest = &rest[start + len + 1..];
    }

    resolved.push_str(rest);
    Ok(resolved)
}

/// Returns placeholder names in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let name = &rest[start + 1..start + len];
        if !name.is_empty() {
            names.push(name);
        }
        rest = &rest[start + len + 1..];
    }

    names
}
