//! User models

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A collection of user identifiers.
///
/// The ADS server sends these either as a JSON array of ids or as an object
/// keyed by id. Both shapes are normalized here, so callers only ever see an
/// ordered list of ids in string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UserIds(Vec<String>);

impl UserIds {
    pub fn new(ids: Vec<String>) -> Self {
        Self(ids)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for UserIds {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a UserIds {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserIds {
    List(Vec<Value>),
    Keyed(Map<String, Value>),
}

impl<'de> Deserialize<'de> for UserIds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ids = match Option::<RawUserIds>::deserialize(deserializer)? {
            None => Vec::new(),
            Some(RawUserIds::Keyed(map)) => map.into_iter().map(|(key, _)| key).collect(),
            Some(RawUserIds::List(values)) => values
                .iter()
                .map(|value| {
                    super::id_from_value(value).ok_or_else(|| {
                        serde::de::Error::custom(format!("invalid user id: {}", value))
                    })
                })
                .collect::<Result<Vec<_>, D::Error>>()?,
        };

        Ok(Self(ids))
    }
}

/// Display attributes of a user, as returned by `GET /users/{id}/profile`.
///
/// The body is kept whole and handed to the users template as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile {
    pub attributes: Map<String, Value>,
}

impl UserProfile {
    /// The profile's own id, when the server included one
    pub fn id(&self) -> Option<String> {
        self.attributes.get("id").and_then(super::id_from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_ids_from_array() {
        let ids: UserIds = serde_json::from_value(json!([7, "3", 9])).unwrap();
        assert_eq!(ids.as_slice(), ["7", "3", "9"]);
    }

    #[test]
    fn test_ids_from_keyed_object_use_keys() {
        let ids: UserIds = serde_json::from_value(json!({"11": true, "12": {"at": 1}})).unwrap();
        assert_eq!(ids.as_slice(), ["11", "12"]);
    }

    #[test]
    fn test_ids_from_null() {
        let ids: UserIds = serde_json::from_value(json!(null)).unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_ids_reject_nested_values() {
        assert!(serde_json::from_value::<UserIds>(json!([[1]])).is_err());
    }

    #[test]
    fn test_profile_keeps_display_attributes() {
        let profile: UserProfile =
            serde_json::from_value(json!({"id": 5, "name": "Ada", "avatar": "/a.png"})).unwrap();
        assert_eq!(profile.id().as_deref(), Some("5"));
        assert_eq!(profile.attributes["name"], "Ada");
        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["id"], 5);
        assert_eq!(back["avatar"], "/a.png");
    }

    #[test]
    fn test_profile_without_id_is_accepted() {
        let profile: UserProfile = serde_json::from_value(json!({"name": "Ada"})).unwrap();
        assert_eq!(profile.id(), None);
        assert_eq!(profile.attributes["name"], "Ada");
    }

    proptest! {
        #[test]
        fn prop_array_and_keyed_shapes_agree(ids in proptest::collection::btree_set(0u32..100_000, 0..20)) {
            let list = Value::Array(ids.iter().map(|id| json!(id)).collect());
            let keyed = Value::Object(ids.iter().map(|id| (id.to_string(), json!(true))).collect());

            let from_list: UserIds = serde_json::from_value(list).unwrap();
            let from_keyed: UserIds = serde_json::from_value(keyed).unwrap();

            let mut a = from_list.as_slice().to_vec();
            let mut b = from_keyed.as_slice().to_vec();
            a.sort();
            b.sort();
            prop_assert_eq!(a, b);
            prop_assert_eq!(from_list.len(), ids.len());
        }
    }
}
