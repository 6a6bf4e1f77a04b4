//! Tenant (clinic) public site data.

use serde::Serialize;
use std::fmt;

/// Brand color used when the tenant has none or an invalid one
pub const DEFAULT_BRAND_COLOR: &str = "#1E3A8A";

/// CSS hex color that is safe to inject into inline styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandColor(String);

impl BrandColor {
    /// Parse a `#RGB` / `#RRGGBB` value
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let re = regex::Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").ok()?;
        re.is_match(value).then(|| BrandColor(value.to_string()))
    }

    /// Parse a value from the backend, falling back to the default color
    pub fn or_default(value: Option<&str>) -> Self {
        match value {
            Some(raw) => Self::parse(raw).unwrap_or_else(|| {
                tracing::warn!(color = %raw, "Ignoring invalid tenant brand color");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BrandColor {
    fn default() -> Self {
        BrandColor(DEFAULT_BRAND_COLOR.to_string())
    }
}

impl fmt::Display for BrandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A doctor listed on the public site
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorProfile {
    pub full_name: String,
}

impl DoctorProfile {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
        }
    }
}

/// Everything needed to render one tenant's public site.
///
/// Fetched fresh on every visit and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantSiteConfig {
    pub clinic_name: String,
    pub welcome_text: Option<String>,
    pub primary_color: BrandColor,
    pub logo_url: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// Ordered as returned by the backend
    pub doctors: Vec<DoctorProfile>,
}

impl TenantSiteConfig {
    /// Roster lookup ignoring surrounding whitespace on either side
    pub fn has_doctor(&self, full_name: &str) -> bool {
        let wanted = full_name.trim();
        self.doctors.iter().any(|d| d.full_name.trim() == wanted)
    }
}
