//! ResolvedData: the per-refresh record handed from `prepare_data` to `render`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::schema::FieldSpec;
use crate::timing::round_and_clamp;

/// Flat field-name -> number map, in declaration order.
///
/// `prepare_data` fills every declared field. Records arriving from elsewhere
/// (e.g. a host that cached a previous refresh) may be partial, so readers go
/// through [`ResolvedData::value_or`] which falls back to the field default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedData {
    values: IndexMap<String, f64>,
}

impl ResolvedData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            values: IndexMap::with_capacity(n),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Value of `spec`, or its documented default when absent or not finite.
    pub fn value_or(&self, spec: &FieldSpec) -> f64 {
        self.get(spec.key)
            .filter(|v| v.is_finite())
            .unwrap_or(spec.default)
    }

    /// Count value of `spec` (rounded, clamped at zero).
    pub fn count_or(&self, spec: &FieldSpec) -> u32 {
        round_and_clamp(self.value_or(spec))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ResolvedData {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEED: FieldSpec = FieldSpec::rate("speed", "Speed", 1.0);
    const BOXES: FieldSpec = FieldSpec::count("boxCount", "Number of Boxes", 3.0);

    #[test]
    fn falls_back_to_field_defaults() {
        let data: ResolvedData = [("speed", 2.5)].into_iter().collect();
        assert_eq!(data.value_or(&SPEED), 2.5);
        assert_eq!(data.count_or(&BOXES), 3);

        let nan: ResolvedData = [("speed", f64::NAN)].into_iter().collect();
        assert_eq!(nan.value_or(&SPEED), 1.0);
    }

    #[test]
    fn serializes_as_flat_object_in_order() {
        let data: ResolvedData = [("speed", 1.0), ("boxCount", 5.0)].into_iter().collect();
        let s = serde_json::to_string(&data).unwrap();
        assert_eq!(s, r#"{"speed":1.0,"boxCount":5.0}"#);
        let back: ResolvedData = serde_json::from_str(&s).unwrap();
        assert_eq!(back, data);
        assert_eq!(back.iter().map(|(k, _)| k).collect::<Vec<_>>(), ["speed", "boxCount"]);
    }
}
