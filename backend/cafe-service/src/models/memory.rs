use super::ExtraFields;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A post in the "memories" feed
///
/// `likeCount` and `likedBy` are absent on freshly posted memories and read
/// as zero / empty. Both decode leniently: documents written by hand or by
/// older clients may hold a double count or `null` likers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "pinnedStatus", default, skip_serializing_if = "Option::is_none")]
    pub pinned_status: Option<Value>,
    #[serde(rename = "likeCount", default, deserialize_with = "like_count")]
    pub like_count: i64,
    /// Most recent liker first
    #[serde(rename = "likedBy", default, deserialize_with = "likers")]
    pub liked_by: Vec<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Integer count from any numeric encoding; `null` and NaN read as 0
fn like_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a numeric like count")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            Ok(i64::try_from(v).unwrap_or(i64::MAX))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            if v.is_finite() {
                Ok(v.trunc() as i64)
            } else {
                Ok(0)
            }
        }

        fn visit_unit<E: de::Error>(self) -> Result<i64, E> {
            Ok(0)
        }

        fn visit_none<E: de::Error>(self) -> Result<i64, E> {
            Ok(0)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<i64, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(CountVisitor)
}

/// String entries of `likedBy`; anything else in the list is dropped
fn likers<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(user) => Some(user),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Like-update tag: `"like"` likes, any other truthy value unlikes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeUpdate {
    Like,
    Unlike,
}

impl LikeUpdate {
    /// Falsy tags (`null`, `false`, `0`, `""`) carry no like change
    pub fn from_tag(tag: &Value) -> Option<Self> {
        match tag {
            Value::Null | Value::Bool(false) => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(tag) if tag.is_empty() => None,
            Value::String(tag) if tag == "like" => Some(LikeUpdate::Like),
            _ => Some(LikeUpdate::Unlike),
        }
    }
}

fn like_tag<'de, D>(deserializer: D) -> Result<Option<LikeUpdate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(LikeUpdate::from_tag(&Value::deserialize(deserializer)?))
}

/// Body of `PUT /postInteractApi/{id}`
///
/// Every field is optional; `null` counts as absent, and so does a falsy
/// `likeUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InteractionRequest {
    #[serde(rename = "pinnedStatus", default)]
    pub pinned_status: Option<Value>,
    #[serde(rename = "likeUpdate", default, deserialize_with = "like_tag")]
    pub like_update: Option<LikeUpdate>,
    #[serde(rename = "likedPerson", default)]
    pub liked_person: Option<String>,
}
