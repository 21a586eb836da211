use serde::{Deserialize, Deserializer, Serialize};

/// Admin identity returned by the backend under the `user` field.
///
/// Only `username` is read by the UI; everything else is kept opaque so the
/// client doesn't break when the backend adds fields.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub(crate) struct AdminUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AdminUser {
    pub fn named(username: &str) -> Self {
        Self {
            username: Some(username.to_string()),
            extra: serde_json::Map::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("Admin")
    }
}

/// One shortened URL owned by the signed-in account.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct ShortUrlRecord {
    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(rename = "originalUrl")]
    pub original_url: String,

    /// Either a bare path segment (`abc123`) or an absolute short link.
    #[serde(rename = "shortUrl")]
    pub short_url: String,

    #[serde(default, deserialize_with = "null_as_zero")]
    pub visits: u64,
}

// `visits: null` counts as zero, like a missing field.
fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

impl ShortUrlRecord {
    /// Public link for this record, resolved against the API base URL.
    pub fn short_link(&self, base_url: &str) -> String {
        let short = self.short_url.trim();
        if short.starts_with("http://") || short.starts_with("https://") {
            return short.to_string();
        }
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            short.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_contract_deserialize() {
        let json = r#"{
            "_id": "665f1c",
            "originalUrl": "https://example.com/a",
            "shortUrl": "abc123",
            "visits": 4,
            "createdAt": "2024-06-01T00:00:00Z"
        }"#;
        let r: ShortUrlRecord = serde_json::from_str(json).expect("record should parse");
        assert_eq!(r.id, "665f1c");
        assert_eq!(r.original_url, "https://example.com/a");
        assert_eq!(r.short_url, "abc123");
        assert_eq!(r.visits, 4);
    }

    #[test]
    fn test_record_missing_visits_defaults_to_zero() {
        let json = r#"{"_id": "1", "originalUrl": "https://a.dev", "shortUrl": "x"}"#;
        let r: ShortUrlRecord = serde_json::from_str(json).expect("record should parse");
        assert_eq!(r.visits, 0);
    }

    #[test]
    fn test_null_visits_in_list_reads_as_zero() {
        let json = r#"[
            {"_id": "1", "originalUrl": "https://a.dev", "shortUrl": "x", "visits": null},
            {"_id": "2", "originalUrl": "https://b.dev", "shortUrl": "y", "visits": 3}
        ]"#;
        let list: Vec<ShortUrlRecord> = serde_json::from_str(json).expect("list should parse");
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].visits, 0);
        assert_eq!(list[1].visits, 3);
    }

    #[test]
    fn test_short_link_joins_segment_with_base() {
        let r = ShortUrlRecord {
            id: "1".to_string(),
            original_url: "https://example.com".to_string(),
            short_url: "abc123".to_string(),
            visits: 0,
        };
        assert_eq!(r.short_link("https://sho.rt/"), "https://sho.rt/abc123");
        assert_eq!(r.short_link("https://sho.rt"), "https://sho.rt/abc123");
    }

    #[test]
    fn test_short_link_keeps_absolute_url() {
        let r = ShortUrlRecord {
            id: "1".to_string(),
            original_url: "https://example.com".to_string(),
            short_url: "https://short.ly/abc123".to_string(),
            visits: 0,
        };
        assert_eq!(r.short_link("https://api.example"), "https://short.ly/abc123");
    }

    #[test]
    fn test_admin_user_keeps_unknown_fields() {
        let u: AdminUser =
            serde_json::from_str(r#"{"username": "root", "id": 7}"#).expect("user should parse");
        assert_eq!(u.display_name(), "root");
        assert_eq!(u.extra["id"], 7);
    }

    #[test]
    fn test_admin_user_display_name_falls_back() {
        let u: AdminUser = serde_json::from_str(r#"{"id": 7}"#).expect("user should parse");
        assert_eq!(u.display_name(), "Admin");
        assert_eq!(AdminUser::named("  ").display_name(), "Admin");
    }
}
