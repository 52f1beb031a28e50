//! Wire DTOs for the Activity API.
//!
//! DESIGN
//! ======
//! Decoding is lenient per field: a single malformed activity must not turn
//! the whole list into a load failure, so optional or oddly-typed fields fall
//! back to empty values instead of rejecting the document.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One activity as returned by `GET /activities`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub description: String,
    /// Human-readable schedule, e.g. `"Fridays, 3:30 PM - 5:00 PM"`.
    #[serde(default)]
    pub schedule: String,
    #[serde(default, deserialize_with = "deserialize_capacity")]
    pub max_participants: u32,
    /// Participant emails in signup order.
    #[serde(default, deserialize_with = "deserialize_participants")]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Negative when the activity is over-subscribed.
    pub fn spots_left(&self) -> i64 {
        let taken = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        i64::from(self.max_participants) - taken
    }
}

/// Name → activity mapping, kept in server order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityMap(Vec<(String, Activity)>);

impl ActivityMap {
    #[cfg(test)]
    pub(crate) fn new(entries: Vec<(String, Activity)>) -> Self {
        Self(entries)
    }

    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn into_entries(self) -> Vec<(String, Activity)> {
        self.0
    }
}

impl<'de> Deserialize<'de> for ActivityMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = ActivityMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to activities")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries: Vec<(String, Activity)> = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    // Later duplicates replace earlier ones, like a JSON object lookup.
                    if let Some(slot) = entries.iter_mut().find(|entry| entry.0 == name) {
                        slot.1 = activity;
                    } else {
                        entries.push((name, activity));
                    }
                }
                Ok(ActivityMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

/// Body of a signup/removal reply. Success carries `message`, failure `detail`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ReplyBody {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub detail: Option<String>,
}

fn deserialize_participants<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(email) => Some(email),
                _ => None,
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

fn deserialize_capacity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let capacity = match value {
        serde_json::Value::Number(number) => number
            .as_u64()
            .map_or(0, |n| u32::try_from(n).unwrap_or(u32::MAX)),
        _ => 0,
    };
    Ok(capacity)
}

/// Accepts only non-empty strings; `{"detail": [...]}` validation payloads
/// and empty strings both count as absent so callers use their fallback.
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) if !text.is_empty() => Ok(Some(text)),
        _ => Ok(None),
    }
}
