//! Serde decode helpers for schema-integer fields.
//!
//! JSON Schema Draft 2020-12 treats any number with a zero fractional
//! part as an integer, so `100.0` conforms wherever `100` does. The
//! typed records must accept the same value class the validator does;
//! these helpers decode such numbers into the unsigned fields instead
//! of rejecting the float spelling. Canonical output always re-encodes
//! them as plain integers.

use std::collections::BTreeMap;

use serde::de::{Deserialize, Deserializer, Error};

/// A `u64` decoded with schema-integer semantics.
struct JsonUint(u64);

impl<'de> Deserialize<'de> for JsonUint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let n = serde_json::Number::deserialize(deserializer)?;
        as_u64(&n)
            .map(JsonUint)
            .ok_or_else(|| D::Error::custom(format!("expected a non-negative integer, got {n}")))
    }
}

fn as_u64(n: &serde_json::Number) -> Option<u64> {
    if let Some(u) = n.as_u64() {
        return Some(u);
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && (0.0..=u64::MAX as f64).contains(&f) {
        Some(f as u64)
    } else {
        None
    }
}

pub(crate) fn uint<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(JsonUint::deserialize(deserializer)?.0)
}

pub(crate) fn uint32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let v = JsonUint::deserialize(deserializer)?.0;
    u32::try_from(v).map_err(|_| D::Error::custom(format!("{v} does not fit in 32 bits")))
}

pub(crate) fn opt_uint<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u64>, D::Error> {
    Ok(Option::<JsonUint>::deserialize(deserializer)?.map(|n| n.0))
}

pub(crate) fn opt_uint_map<'de, D, K>(
    deserializer: D,
) -> Result<Option<BTreeMap<K, u64>>, D::Error>
where
    D: Deserializer<'de>,
    K: Deserialize<'de> + Ord,
{
    let map = Option::<BTreeMap<K, JsonUint>>::deserialize(deserializer)?;
    Ok(map.map(|m| m.into_iter().map(|(k, v)| (k, v.0)).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_integer_accepted() {
        assert_eq!(uint(json!(100)).unwrap(), 100);
        assert_eq!(uint(json!(0)).unwrap(), 0);
    }

    #[test]
    fn test_integral_float_accepted() {
        assert_eq!(uint(json!(100.0)).unwrap(), 100);
        assert_eq!(uint32(json!(60.0)).unwrap(), 60);
        assert_eq!(opt_uint(json!(42.0)).unwrap(), Some(42));
    }

    #[test]
    fn test_fractional_rejected() {
        assert!(uint(json!(1.5)).is_err());
        assert!(uint32(json!(0.25)).is_err());
    }

    #[test]
    fn test_negative_rejected() {
        assert!(uint(json!(-1)).is_err());
        assert!(uint(json!(-2.0)).is_err());
    }

    #[test]
    fn test_uint32_range_checked() {
        assert!(uint32(json!(4_294_967_296_u64)).is_err());
    }

    #[test]
    fn test_null_is_absent_for_optionals() {
        assert_eq!(opt_uint(json!(null)).unwrap(), None);
    }
}
