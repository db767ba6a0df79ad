// ── Generic wire value ──
//
// The daemon's property surface is dynamically typed: a resolution may be a
// bare unsigned integer or a two-field tuple, a mapping is a (tag, payload)
// tuple whose payload shape depends on the tag. `serde_json::Value` carries
// these logical shapes (numbers for unsigned integers, arrays for tuples)
// without committing to a bus serialization; the helpers below are the only
// shape inspection the codec performs.

/// The generic, dynamically-typed value exchanged with the daemon.
pub type Value = serde_json::Value;

/// Read a `Value` as an unsigned 32-bit wire field.
///
/// Wire fields are `u32` even where the logical range is narrower; anything
/// negative, fractional, or above `u32::MAX` is not an unsigned wire field.
pub fn as_u32(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|raw| u32::try_from(raw).ok())
}

/// Read a `Value` as a two-element tuple.
pub fn as_pair(value: &Value) -> Option<(&Value, &Value)> {
    match value.as_array().map(Vec::as_slice) {
        Some([first, second]) => Some((first, second)),
        _ => None,
    }
}

/// Read a `Value` as a three-element tuple.
pub fn as_triple(value: &Value) -> Option<(&Value, &Value, &Value)> {
    match value.as_array().map(Vec::as_slice) {
        Some([first, second, third]) => Some((first, second, third)),
        _ => None,
    }
}

/// True when the value is shaped like a bare unsigned integer.
pub fn is_uint(value: &Value) -> bool {
    as_u32(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn u32_accepts_wire_range() {
        assert_eq!(as_u32(&json!(0)), Some(0));
        assert_eq!(as_u32(&json!(800)), Some(800));
        assert_eq!(as_u32(&json!(u32::MAX)), Some(u32::MAX));
    }

    #[test]
    fn u32_rejects_non_wire_shapes() {
        assert_eq!(as_u32(&json!(-1)), None);
        assert_eq!(as_u32(&json!(1.5)), None);
        assert_eq!(as_u32(&json!(u64::from(u32::MAX) + 1)), None);
        assert_eq!(as_u32(&json!("800")), None);
    }

    #[test]
    fn pair_requires_exactly_two_elements() {
        assert!(as_pair(&json!([400, 800])).is_some());
        assert!(as_pair(&json!([400])).is_none());
        assert!(as_pair(&json!([400, 800, 1600])).is_none());
        assert!(as_pair(&json!(400)).is_none());
    }

    #[test]
    fn triple_requires_exactly_three_elements() {
        assert!(as_triple(&json!([255, 0, 128])).is_some());
        assert!(as_triple(&json!([255, 0])).is_none());
    }
}
