/// Field presence for partial updates

use serde::{Deserialize, Deserializer};

/// A field of an update payload: either left out of the request or given a value
///
/// Use with `#[serde(default)]` so that a missing key becomes `Unset`. For
/// nullable fields wrap an `Option`, so an explicit `null` is `Set(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Unset,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unset
    }
}

impl<T> Patch<T> {
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Patch::Set(value) => Some(value),
            Patch::Unset => None,
        }
    }

    /// Overwrite `target` when a value was given
    pub fn apply_to(self, target: &mut T) {
        if let Patch::Set(value) = self {
            *target = value;
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Patch::Set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default)]
        name: Patch<String>,
        #[serde(default)]
        note: Patch<Option<String>>,
    }

    #[test]
    fn missing_keys_are_unset() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe.name, Patch::Unset);
        assert_eq!(probe.note, Patch::Unset);
    }

    #[test]
    fn explicit_null_sets_nullable_field() {
        let probe: Probe = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(probe.note, Patch::Set(None));
        assert_eq!(probe.name, Patch::Unset);
    }

    #[test]
    fn null_is_rejected_for_required_field() {
        assert!(serde_json::from_str::<Probe>(r#"{"name": null}"#).is_err());
    }

    #[test]
    fn apply_only_touches_set_values() {
        let mut name = "before".to_string();
        Patch::Unset.apply_to(&mut name);
        assert_eq!(name, "before");

        Patch::Set("after".to_string()).apply_to(&mut name);
        assert_eq!(name, "after");
    }
}
