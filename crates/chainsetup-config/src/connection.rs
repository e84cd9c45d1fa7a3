//! Persisted connection records

use serde_json::{json, Map, Value};

/// Protocol tag written into every connection entry
pub const CONNECTION_TYPE: &str = "EVMMV3";

/// Mapping from network slug to its connection entry, in insertion order.
///
/// Values are kept as raw JSON so entries loaded from disk are written back
/// exactly as they were read, including fields this tool does not know.
pub type ConnectionMap = Map<String, Value>;

/// Validated connection record for one network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionEntry {
    /// Network identifier (chain id)
    pub id: String,

    /// Protocol tag, always [`CONNECTION_TYPE`] for entries we write
    pub kind: String,

    /// Slug of the network's display name
    pub name: String,

    /// Selected RPC endpoint
    pub rpc: String,
}

impl ConnectionEntry {
    pub fn new(id: impl Into<String>, slug: impl Into<String>, rpc: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: CONNECTION_TYPE.to_string(),
            name: slug.into(),
            rpc: rpc.into(),
        }
    }

    /// JSON form stored in a [`ConnectionMap`]
    pub fn into_value(self) -> Value {
        json!({
            "id": self.id,
            "type": self.kind,
            "name": self.name,
            "rpc": self.rpc,
        })
    }
}

/// RPC endpoint of a stored entry, if it has a string `rpc` field
pub fn entry_rpc(entry: &Value) -> Option<&str> {
    entry.get("rpc").and_then(Value::as_str)
}

/// Key-safe form of a display name: lowercased, each whitespace run becomes one hyphen.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Ethereum"), "ethereum");
        assert_eq!(slugify("BNB Smart Chain"), "bnb-smart-chain");
        assert_eq!(slugify("Arbitrum  One"), "arbitrum-one");
        assert_eq!(slugify("Polygon\tAmoy"), "polygon-amoy");
        assert_eq!(slugify(" Base "), "-base-");
    }

    #[test]
    fn test_entry_value_shape() {
        let value = ConnectionEntry::new("1", "ethereum", "http://b.example").into_value();

        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"id":"1","type":"EVMMV3","name":"ethereum","rpc":"http://b.example"}"#
        );
        assert_eq!(entry_rpc(&value), Some("http://b.example"));
        assert_eq!(entry_rpc(&json!({ "rpc": 5 })), None);
    }
}
