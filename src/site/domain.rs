//! Tenant domain identifiers taken from the `/site/{domain}` path.

use std::fmt;
use thiserror::Error;

/// Invalid tenant domain path segment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Tenant domain is empty")]
    Empty,

    #[error("Tenant domain is not valid percent-encoded UTF-8: {0}")]
    InvalidEncoding(String),

    #[error("Tenant domain contains a path separator: {0}")]
    PathSeparator(String),
}

/// Lookup key of a tenant's public site.
///
/// Always holds the decoded value; encoding happens only when it is placed
/// back into a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TenantDomain(String);

impl TenantDomain {
    /// Build from an already decoded value, kept verbatim
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Empty);
        }
        if value.contains('/') {
            return Err(DomainError::PathSeparator(value));
        }
        Ok(Self(value))
    }

    /// Decode a raw URL path segment exactly once.
    ///
    /// `clinica%2520sonrisa` yields `clinica%20sonrisa`, not
    /// `clinica sonrisa`.
    pub fn from_path_segment(raw: &str) -> Result<Self, DomainError> {
        let decoded = urlencoding::decode(raw)
            .map_err(|_| DomainError::InvalidEncoding(raw.to_string()))?;
        Self::new(decoded.into_owned())
    }

    /// Percent-encoded form for an outgoing URL path
    pub fn to_path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_segment() {
        let domain = TenantDomain::from_path_segment("clinica-sonrisa").unwrap();
        assert_eq!(domain.as_str(), "clinica-sonrisa");
        assert_eq!(domain.to_path_segment(), "clinica-sonrisa");
    }

    #[test]
    fn test_decodes_once() {
        let domain = TenantDomain::from_path_segment("cl%C3%ADnica%20dental").unwrap();
        assert_eq!(domain.as_str(), "clínica dental");

        let double = TenantDomain::from_path_segment("clinica%2520sonrisa").unwrap();
        assert_eq!(double.as_str(), "clinica%20sonrisa");
        assert_eq!(double.to_path_segment(), "clinica%2520sonrisa");
    }

    #[test]
    fn test_surrounding_whitespace_is_kept() {
        let domain = TenantDomain::from_path_segment("%20clinica").unwrap();
        assert_eq!(domain.as_str(), " clinica");
        assert_eq!(domain.to_path_segment(), "%20clinica");
    }

    #[test]
    fn test_reencodes_for_backend() {
        let domain = TenantDomain::new("clínica dental").unwrap();
        assert_eq!(domain.to_path_segment(), "cl%C3%ADnica%20dental");
    }

    #[test]
    fn test_rejects_bad_segments() {
        assert_eq!(TenantDomain::from_path_segment(""), Err(DomainError::Empty));
        assert_eq!(TenantDomain::from_path_segment("%20"), Err(DomainError::Empty));
        assert!(matches!(
            TenantDomain::from_path_segment("%FF"),
            Err(DomainError::InvalidEncoding(_))
        ));
        assert!(matches!(
            TenantDomain::from_path_segment("a%2Fb"),
            Err(DomainError::PathSeparator(_))
        ));
    }
}
