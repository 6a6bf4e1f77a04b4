//! Public site page lifecycle.

use crate::backend::SiteError;
use crate::models::TenantSiteConfig;

/// States of one public site visit.
///
/// `Loading` moves to exactly one terminal state and never leaves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitePage {
    Loading,
    Ready(Box<TenantSiteConfig>),
    NotFound,
    ConnectionError,
}

impl SitePage {
    /// Resolve a visit from the backend lookup
    pub fn from_lookup(result: Result<TenantSiteConfig, SiteError>) -> Self {
        SitePage::Loading.resolve(result)
    }

    /// Apply the lookup outcome. Terminal states ignore further results.
    pub fn resolve(self, result: Result<TenantSiteConfig, SiteError>) -> Self {
        if self.is_terminal() {
            return self;
        }
        match result {
            Ok(site) => SitePage::Ready(Box::new(site)),
            Err(SiteError::NotFound) => SitePage::NotFound,
            Err(SiteError::NetworkFailure(e)) => {
                tracing::warn!(error = %e, "Public site lookup failed in transport");
                SitePage::ConnectionError
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, SitePage::Loading)
    }

    /// Message for the error states
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            SitePage::NotFound => Some("Sitio no encontrado"),
            SitePage::ConnectionError => Some("Error de conexión"),
            SitePage::Loading | SitePage::Ready(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BrandColor;

    fn site() -> TenantSiteConfig {
        TenantSiteConfig {
            clinic_name: "Clínica Sonrisa".to_string(),
            welcome_text: Some("Bienvenidos".to_string()),
            primary_color: BrandColor::default(),
            logo_url: None,
            address: None,
            phone: None,
            doctors: Vec::new(),
        }
    }

    #[test]
    fn test_ready() {
        let page = SitePage::from_lookup(Ok(site()));
        assert!(matches!(&page, SitePage::Ready(s) if s.clinic_name == "Clínica Sonrisa"));
        assert!(page.error_message().is_none());
    }

    #[test]
    fn test_not_found() {
        let page = SitePage::from_lookup(Err(SiteError::NotFound));
        assert_eq!(page, SitePage::NotFound);
        assert_eq!(page.error_message(), Some("Sitio no encontrado"));
    }

    #[test]
    fn test_terminal_states_do_not_move() {
        let page = SitePage::NotFound.resolve(Ok(site()));
        assert_eq!(page, SitePage::NotFound);

        let page = SitePage::from_lookup(Ok(site())).resolve(Err(SiteError::NotFound));
        assert!(matches!(page, SitePage::Ready(_)));
    }

    #[test]
    fn test_loading_is_not_terminal() {
        assert!(!SitePage::Loading.is_terminal());
        assert!(SitePage::ConnectionError.is_terminal());
    }
}
