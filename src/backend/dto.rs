//! Wire shapes of the backend responses.

use serde::Deserialize;
use serde_json::Value;

use crate::models::{AppointmentRecord, BrandColor, DoctorProfile, TenantSiteConfig};

#[derive(Debug, Deserialize)]
pub(super) struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawAppointment {
    #[serde(default)]
    pub id: Option<Value>,
    pub start_time: String,
    pub patient_name: String,
}

impl RawAppointment {
    fn id_string(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// Convert the appointment list, keeping backend order.
///
/// Items that do not match the record shape or carry an unparseable
/// `start_time` are dropped with a warning.
pub(super) fn decode_appointments(items: Vec<Value>) -> Vec<AppointmentRecord> {
    let total = items.len();
    let records: Vec<AppointmentRecord> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let raw: RawAppointment = match serde_json::from_value(item) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!(index, error = %e, "Dropping malformed appointment");
                    return None;
                }
            };
            let id = raw.id_string();
            match AppointmentRecord::parse(&raw.start_time, raw.patient_name) {
                Ok(record) => Some(match id {
                    Some(id) => record.with_id(id),
                    None => record,
                }),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Dropping appointment with invalid start time");
                    None
                }
            }
        })
        .collect();

    tracing::debug!(total, kept = records.len(), "Decoded appointment list");
    records
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct RawSiteTheme {
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub welcome_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawDoctor {
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawSiteData {
    pub clinic_name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub config: Option<RawSiteTheme>,
    #[serde(default)]
    pub doctors: Vec<RawDoctor>,
}

impl From<RawSiteData> for TenantSiteConfig {
    fn from(raw: RawSiteData) -> Self {
        let theme = raw.config.unwrap_or_default();
        TenantSiteConfig {
            clinic_name: raw.clinic_name,
            welcome_text: theme.welcome_text,
            primary_color: BrandColor::or_default(theme.primary_color.as_deref()),
            logo_url: theme.logo_url,
            address: raw.address,
            phone: raw.phone,
            doctors: raw
                .doctors
                .into_iter()
                .map(|d| DoctorProfile::new(d.full_name))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_keeps_order_and_drops_invalid() {
        let items = vec![
            json!({"id": "a1", "start_time": "2025-12-16T09:00:00", "patient_name": "Ana"}),
            json!({"start_time": "not a date", "patient_name": "Bruno"}),
            json!({"patient_name": "Sin hora"}),
            json!({"id": 7, "start_time": "2025-12-19T14:00:00Z", "patient_name": "Carla"}),
        ];

        let records = decode_appointments(items);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].patient_name, "Ana");
        assert_eq!(records[0].id.as_deref(), Some("a1"));
        assert_eq!(records[1].patient_name, "Carla");
        assert_eq!(records[1].id.as_deref(), Some("7"));
    }

    #[test]
    fn test_site_data_conversion() {
        let raw: RawSiteData = serde_json::from_value(json!({
            "clinic_name": "Clínica Sonrisa",
            "address": "Av. Providencia 123",
            "phone": null,
            "config": {"primary_color": "#0D9488", "welcome_text": "Hola", "logo_url": null},
            "doctors": [{"full_name": "Dra. Ana Pérez"}, {"full_name": "Dr. Luis Soto"}]
        }))
        .unwrap();

        let site = TenantSiteConfig::from(raw);

        assert_eq!(site.primary_color.as_str(), "#0D9488");
        assert_eq!(site.welcome_text.as_deref(), Some("Hola"));
        assert_eq!(site.phone, None);
        assert_eq!(site.doctors[1].full_name, "Dr. Luis Soto");
    }

    #[test]
    fn test_site_data_without_theme() {
        let raw: RawSiteData =
            serde_json::from_value(json!({"clinic_name": "Clínica Norte"})).unwrap();
        let site = TenantSiteConfig::from(raw);
        assert_eq!(site.primary_color, BrandColor::default());
        assert!(site.doctors.is_empty());
    }
}
