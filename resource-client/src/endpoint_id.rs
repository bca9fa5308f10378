use std::fmt;

use thiserror::Error;

/// Name an endpoint descriptor is known by in traces and error messages.
///
/// Rules:
/// 1. Must start with an alphabetic character.
/// 2. Remaining characters must be alphanumeric, `_` or `.`
///    (so catalog-style names such as `accounts.get` are accepted).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointId(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointIdError {
    #[error("endpoint id cannot be empty")]
    Empty,
    #[error("endpoint id must start with an alphabetic character")]
    InvalidStartCharacter,
    #[error("endpoint id contains invalid character: '{0}'")]
    InvalidCharacter(char),
}

impl EndpointId {
    pub fn new<S: Into<String>>(id: S) -> Result<Self, EndpointIdError> {
        let s = id.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    fn validate(s: &str) -> Result<(), EndpointIdError> {
        let mut chars = s.chars();

        match chars.next() {
            None => return Err(EndpointIdError::Empty),
            Some(c) if !c.is_alphabetic() => return Err(EndpointIdError::InvalidStartCharacter),
            _ => {}
        }

        match chars.find(|c| !c.is_alphanumeric() && *c != '_' && *c != '.') {
            Some(c) => Err(EndpointIdError::InvalidCharacter(c)),
            None => Ok(()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EndpointId> for String {
    fn from(id: EndpointId) -> Self {
        id.0
    }
}

impl TryFrom<&str> for EndpointId {
    type Error = EndpointIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
