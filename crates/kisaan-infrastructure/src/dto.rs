//! Versioned on-disk record for the session slot.
//!
//! The DTO keeps the storage schema independent of the domain model so
//! the record can grow a new version without touching `kisaan-core`.

use kisaan_core::session::Session;
use serde::{Deserialize, Serialize};

/// Current session record schema version.
pub const SESSION_SCHEMA_VERSION: &str = "1.0.0";

fn default_schema_version() -> String {
    SESSION_SCHEMA_VERSION.to_string()
}

/// Session record V1.0.0 (initial version).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecordV1 {
    /// Schema version of this record
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    pub id: String,
    pub name: String,
    pub email: String,
    pub farm_name: String,
}

impl From<&Session> for SessionRecordV1 {
    fn from(session: &Session) -> Self {
        Self {
            schema_version: SESSION_SCHEMA_VERSION.to_string(),
            id: session.id.clone(),
            name: session.name.clone(),
            email: session.email.clone(),
            farm_name: session.farm_name.clone(),
        }
    }
}

impl From<SessionRecordV1> for Session {
    fn from(record: SessionRecordV1) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            farm_name: record.farm_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trips_through_toml() {
        let session = Session {
            id: "u1".to_string(),
            name: "Asha".to_string(),
            email: "a@x.com".to_string(),
            farm_name: "Green Acres".to_string(),
        };
        let record = SessionRecordV1::from(&session);
        let text = toml::to_string_pretty(&record).unwrap();
        assert!(text.contains("schema_version = \"1.0.0\""));

        let back: SessionRecordV1 = toml::from_str(&text).unwrap();
        assert_eq!(Session::from(back), session);
    }

    #[test]
    fn test_missing_schema_version_defaults() {
        let text = r#"
id = "u1"
name = "Asha"
email = "a@x.com"
farm_name = "Green Acres"
"#;
        let record: SessionRecordV1 = toml::from_str(text).unwrap();
        assert_eq!(record.schema_version, SESSION_SCHEMA_VERSION);
    }
}
