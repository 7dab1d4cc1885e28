//! Serde helpers for Discord snowflake ids.
//!
//! Snowflakes exceed the integer precision of JavaScript clients, so Discord and
//! the Aztra API send them as JSON strings. These helpers keep them as `u64` in
//! Rust while reading either strings or plain numbers and always writing strings.
//!
//! ```rust,ignore
//! #[derive(Serialize, Deserialize)]
//! struct Channel {
//!     #[serde(with = "crate::model::snowflake")]
//!     id: u64,
//! }
//! ```

use serde::{de::Error, Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSnowflake {
    Text(String),
    Number(u64),
}

impl RawSnowflake {
    fn into_u64<E: Error>(self) -> Result<u64, E> {
        match self {
            RawSnowflake::Number(value) => Ok(value),
            RawSnowflake::Text(value) => value.parse::<u64>().map_err(E::custom),
        }
    }
}

pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    RawSnowflake::deserialize(deserializer)?.into_u64()
}

/// Optional snowflake, `null` or absent maps to `None`.
pub mod option {
    use super::RawSnowflake;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(id) => serializer.serialize_str(&id.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawSnowflake>::deserialize(deserializer)? {
            Some(raw) => raw.into_u64().map(Some),
            None => Ok(None),
        }
    }
}

/// Snowflake lists such as a member's role ids.
pub mod vec {
    use super::RawSnowflake;
    use serde::{ser::SerializeSeq, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(values: &[u64], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&value.to_string())?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<RawSnowflake>::deserialize(deserializer)?
            .into_iter()
            .map(RawSnowflake::into_u64)
            .collect()
    }
}

/// Patch field that distinguishes "leave unchanged" (`None`, field omitted)
/// from "clear" (`Some(None)`, sent as `null`).
///
/// Use together with `#[serde(default, skip_serializing_if = "Option::is_none")]`.
pub mod patch {
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Option<u64>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(Some(id)) => serializer.serialize_str(&id.to_string()),
            _ => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Option<u64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::option::deserialize(deserializer).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Holder {
        #[serde(with = "super")]
        id: u64,
        #[serde(default, with = "super::option")]
        parent: Option<u64>,
        #[serde(default, with = "super::vec")]
        roles: Vec<u64>,
        #[serde(
            default,
            with = "super::patch",
            skip_serializing_if = "Option::is_none"
        )]
        channel: Option<Option<u64>>,
    }

    #[test]
    fn reads_strings_and_numbers() {
        let holder: Holder = serde_json::from_value(serde_json::json!({
            "id": "717215340926107709",
            "parent": 42,
            "roles": ["1", 2]
        }))
        .unwrap();

        assert_eq!(holder.id, 717215340926107709);
        assert_eq!(holder.parent, Some(42));
        assert_eq!(holder.roles, vec![1, 2]);
        assert_eq!(holder.channel, None);
    }

    #[test]
    fn writes_ids_as_strings() {
        let holder = Holder {
            id: 1,
            parent: None,
            roles: vec![3],
            channel: None,
        };

        let value = serde_json::to_value(&holder).unwrap();
        assert_eq!(value["id"], "1");
        assert!(value["parent"].is_null());
        assert_eq!(value["roles"][0], "3");
        assert!(value.get("channel").is_none());
    }

    #[test]
    fn patch_null_clears_value() {
        let holder: Holder =
            serde_json::from_value(serde_json::json!({ "id": "1", "channel": null })).unwrap();
        assert_eq!(holder.channel, Some(None));

        let value = serde_json::to_value(&holder).unwrap();
        assert!(value["channel"].is_null());
    }

    #[test]
    fn rejects_non_numeric_strings() {
        let result = serde_json::from_value::<Holder>(serde_json::json!({ "id": "abc" }));
        assert!(result.is_err());
    }
}
