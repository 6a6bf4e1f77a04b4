//! Tenant site theming.

use super::domain::TenantDomain;

const HERO_QUERY: &str = "?auto=format&fit=crop&w=1200&q=80";

pub const SMILE_HERO: &str = "https://images.unsplash.com/photo-1629909613654-28e377c37b09";
pub const CLINIC_HERO: &str = "https://images.unsplash.com/photo-1606811841689-23dfddce3e95";
pub const DEFAULT_HERO: &str = "https://images.unsplash.com/photo-1519494026892-80bbd2d6fd0d";

/// Hero image URL chosen from keywords in the tenant domain.
///
/// `sonrisa` is checked before `dental`.
pub fn hero_image(domain: &TenantDomain) -> String {
    let key = domain.as_str();
    let base = if key.contains("sonrisa") {
        SMILE_HERO
    } else if key.contains("dental") {
        CLINIC_HERO
    } else {
        DEFAULT_HERO
    };
    format!("{}{}", base, HERO_QUERY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(domain: &str) -> String {
        hero_image(&TenantDomain::new(domain).unwrap())
    }

    #[test]
    fn test_keyword_selection() {
        assert!(hero("clinica-sonrisa").starts_with(SMILE_HERO));
        assert!(hero("centro-dental").starts_with(CLINIC_HERO));
        assert!(hero("dr-house").starts_with(DEFAULT_HERO));
    }

    #[test]
    fn test_sonrisa_wins_over_dental() {
        assert!(hero("sonrisa-dental").starts_with(SMILE_HERO));
    }

    #[test]
    fn test_query_string() {
        assert!(hero("x").ends_with("?auto=format&fit=crop&w=1200&q=80"));
    }
}
