//! Session record persistence and lookup.
//!
//! The login flow is the single writer; every page only reads. The stored
//! value is one JSON blob under [`SESSION_KEY`] with camelCase fields, the
//! shape earlier versions of the site left in visitors' browsers, so
//! existing sessions keep working. All failure modes (missing key, invalid
//! JSON, blank id) collapse to "not logged in": callers never see an error,
//! only absence.

use serde::{Deserialize, Serialize};

use crate::core::storage::LocalStore;

/// localStorage key holding the serialized session record.
const SESSION_KEY: &str = "hearthside.session";

/// The persisted representation of "who is logged in".
///
/// Unknown fields in stored JSON are ignored; absent optional fields are
/// tolerated. A record without a non-blank `id` is not a session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl SessionRecord {
    /// Two-letter initials for the navbar badge ("Jane Doe" -> "JD").
    /// Missing name parts degrade; with no usable letters at all this is "U".
    pub fn initials(&self) -> String {
        let mut out = String::new();
        for part in [&self.first_name, &self.last_name] {
            if let Some(first) = part.trim().chars().next() {
                out.extend(first.to_uppercase());
            }
        }
        if out.is_empty() {
            out.push('U');
        }
        out
    }

    /// Full display name, or an empty string when both parts are blank.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Stand-in record for the torn state where a session is reported
    /// present but the record cannot be read. Renders as "U".
    pub fn placeholder() -> Self {
        Self::default()
    }
}

/// True iff a structurally valid session record is currently stored.
/// No network, no error path: malformed or missing data is simply `false`.
pub fn is_authenticated() -> bool {
    current_user().is_some()
}

/// The parsed session record, or `None` when absent or corrupt.
/// Parse failure is treated identically to absence.
pub fn current_user() -> Option<SessionRecord> {
    LocalStore::get(SESSION_KEY).and_then(|raw| parse_record(&raw))
}

/// Delete the persisted session. Idempotent: logging out while logged out
/// is a no-op.
pub fn log_out() {
    LocalStore::remove(SESSION_KEY);
}

/// Persist `record` as the current session. Returns whether the write
/// succeeded. Only the login flow calls this.
pub fn store_session(record: &SessionRecord) -> bool {
    match serde_json::to_string(record) {
        Ok(json) => LocalStore::set(SESSION_KEY, &json),
        Err(_) => false,
    }
}

fn parse_record(raw: &str) -> Option<SessionRecord> {
    let record: SessionRecord = serde_json::from_str(raw).ok()?;
    if record.id.trim().is_empty() {
        return None;
    }
    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> SessionRecord {
        SessionRecord {
            id: "u1".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: Some("jane@example.com".into()),
            phone: None,
        }
    }

    #[test]
    fn round_trips_camel_case_json() {
        assert!(store_session(&jane()));
        let user = current_user().expect("stored session should parse");
        assert_eq!(user, jane());

        let raw = LocalStore::get("hearthside.session").unwrap();
        assert!(raw.contains("\"firstName\":\"Jane\""));
    }

    #[test]
    fn reads_legacy_record_with_extra_fields() {
        LocalStore::set(
            "hearthside.session",
            r#"{"id":"u1","firstName":"Jane","lastName":"Doe","avatarUrl":"x.png"}"#,
        );
        let user = current_user().expect("extra fields are tolerated");
        assert_eq!(user.initials(), "JD");
        assert!(is_authenticated());
    }

    #[test]
    fn malformed_json_reads_as_logged_out() {
        LocalStore::set("hearthside.session", "{not json");
        assert!(!is_authenticated());
        assert_eq!(current_user(), None);
    }

    #[test]
    fn blank_id_reads_as_logged_out() {
        LocalStore::set(
            "hearthside.session",
            r#"{"id":"  ","firstName":"Jane","lastName":"Doe"}"#,
        );
        assert!(!is_authenticated());
    }

    #[test]
    fn absent_record_reads_as_logged_out() {
        assert!(!is_authenticated());
        assert_eq!(current_user(), None);
    }

    #[test]
    fn log_out_twice_equals_once() {
        store_session(&jane());
        log_out();
        assert_eq!(current_user(), None);
        log_out();
        assert_eq!(current_user(), None);
    }

    #[test]
    fn initials_derive_from_both_names() {
        assert_eq!(jane().initials(), "JD");
    }

    #[test]
    fn initials_degrade_per_missing_part() {
        let mut user = jane();
        user.last_name.clear();
        assert_eq!(user.initials(), "J");

        user.first_name.clear();
        assert_eq!(user.initials(), "U");
        assert_eq!(SessionRecord::placeholder().initials(), "U");
    }
}
