// ── Wire codec ──
//
// Bridges the broker's generic `Value` into the model types and back. The
// daemon decides shapes at runtime (a resolution is a bare unsigned integer
// *or* a two-field tuple; a mapping payload depends on its tag), so decoding
// is shape inspection, not blind deserialization. A shape that matches no
// known layout is a protocol violation: a client/daemon version mismatch
// surfaced immediately, never silently defaulted -- including out-of-range
// narrowing (wire fields are u32 even where the logical range is u16).

use serde_json::json;
use tracing::trace;

use remus_broker::value::{self, Value};

use crate::error::Error;
use crate::model::{
    ActionType, Axes, Color, KeyEvent, Macro, MappingAction, Resolution, SpecialButton,
};

// ── Scalar fields ──────────────────────────────────────────────────

pub(crate) fn expect_u32(raw: &Value, what: &str) -> Result<u32, Error> {
    value::as_u32(raw)
        .ok_or_else(|| Error::protocol(format!("{what} must be an unsigned integer, got {raw}")))
}

pub(crate) fn expect_u16(raw: &Value, what: &str) -> Result<u16, Error> {
    let wide = expect_u32(raw, what)?;
    u16::try_from(wide)
        .map_err(|_| Error::protocol(format!("{what} exceeds the 16-bit logical range: {wide}")))
}

pub(crate) fn expect_bool(raw: &Value, what: &str) -> Result<bool, Error> {
    raw.as_bool()
        .ok_or_else(|| Error::protocol(format!("{what} must be a boolean, got {raw}")))
}

// ── Resolution ─────────────────────────────────────────────────────

/// Decode a resolution from its wire shape.
///
/// A bare unsigned integer is a shared-axis scalar, a two-field tuple is a
/// per-axis pair, and an absent value is `Null`.
pub fn decode_resolution(raw: &Value) -> Result<Resolution, Error> {
    trace!(%raw, "decoding resolution");

    if raw.is_null() {
        Ok(Resolution::Null)
    } else if value::is_uint(raw) {
        Ok(Resolution::Axis(expect_u16(raw, "resolution")?))
    } else if value::as_pair(raw).is_some() {
        Ok(Resolution::Axes(decode_axes(raw)?))
    } else {
        Err(Error::protocol(format!(
            "a resolution must be an unsigned integer or a two-field tuple, got {raw}"
        )))
    }
}

/// Encode a resolution as the wire shape the daemon expects.
///
/// `Null` is never written; the validator rejects it before encoding, so a
/// `Null` reaching this point is a protocol violation of our own making.
pub fn encode_resolution(resolution: &Resolution) -> Result<Value, Error> {
    match resolution {
        Resolution::Axis(dpi) => Ok(json!(u32::from(*dpi))),
        Resolution::Axes(axes) => Ok(encode_axes(*axes)),
        Resolution::Null => Err(Error::protocol("a null resolution is never written")),
    }
}

fn decode_axes(raw: &Value) -> Result<Axes, Error> {
    let (x, y) = value::as_pair(raw)
        .ok_or_else(|| Error::protocol(format!("axes must be a two-field tuple, got {raw}")))?;

    Ok(Axes {
        x: expect_u16(x, "x-axis resolution")?,
        y: expect_u16(y, "y-axis resolution")?,
    })
}

fn encode_axes(axes: Axes) -> Value {
    json!([u32::from(axes.x), u32::from(axes.y)])
}

/// Decode the advertised scalar list (wire `u32`, logical `u16`).
pub fn decode_resolution_list(raw: &Value) -> Result<Vec<u16>, Error> {
    let items = raw.as_array().ok_or_else(|| {
        Error::protocol(format!("supported resolutions must be a list, got {raw}"))
    })?;

    items
        .iter()
        .map(|item| expect_u16(item, "supported resolution"))
        .collect()
}

// ── Mapping ────────────────────────────────────────────────────────

/// Decode a button mapping: a `(action_type, payload)` tuple.
///
/// The tag arrives alongside the payload, so the payload decodes eagerly
/// into the matching variant. An action type this client does not recognize
/// is preserved verbatim (tag and payload) as `Unknown`; an unrecognized
/// code *inside* a known action type is a protocol violation.
pub fn decode_mapping(raw: &Value) -> Result<MappingAction, Error> {
    trace!(%raw, "decoding mapping");

    let (tag, payload) = value::as_pair(raw).ok_or_else(|| {
        Error::protocol(format!("a mapping must be a two-field tuple, got {raw}"))
    })?;
    let code = expect_u32(tag, "mapping action type")?;

    match ActionType::from_repr(code) {
        Some(ActionType::Button) => Ok(MappingAction::Button(expect_u32(payload, "button index")?)),
        Some(ActionType::Special) => {
            let special = expect_u32(payload, "special function")?;
            SpecialButton::from_repr(special)
                .map(MappingAction::Special)
                .ok_or_else(|| Error::protocol(format!("unknown special function code {special}")))
        }
        Some(ActionType::Macro) => {
            let steps = payload.as_array().ok_or_else(|| {
                Error::protocol(format!("a macro payload must be a list, got {payload}"))
            })?;
            steps
                .iter()
                .map(decode_macro)
                .collect::<Result<Vec<_>, _>>()
                .map(MappingAction::Macro)
        }
        Some(ActionType::Unknown) | None => Ok(MappingAction::Unknown {
            action_type: code,
            payload: payload.clone(),
        }),
    }
}

/// Encode a button mapping as its `(action_type, payload)` tuple.
pub fn encode_mapping(action: &MappingAction) -> Value {
    match action {
        MappingAction::Button(button) => json!([ActionType::Button.code(), button]),
        MappingAction::Special(special) => json!([ActionType::Special.code(), special.code()]),
        MappingAction::Macro(steps) => {
            let steps: Vec<Value> = steps.iter().copied().map(encode_macro).collect();
            json!([ActionType::Macro.code(), steps])
        }
        MappingAction::Unknown {
            action_type,
            payload,
        } => json!([action_type, payload]),
    }
}

fn decode_macro(raw: &Value) -> Result<Macro, Error> {
    let (event, val) = value::as_pair(raw).ok_or_else(|| {
        Error::protocol(format!("a macro step must be a two-field tuple, got {raw}"))
    })?;
    let event_code = expect_u32(event, "macro event")?;

    Ok(Macro {
        event: KeyEvent::from_repr(event_code)
            .ok_or_else(|| Error::protocol(format!("unknown macro event code {event_code}")))?,
        value: expect_u32(val, "macro value")?,
    })
}

fn encode_macro(step: Macro) -> Value {
    json!([step.event.code(), step.value])
}

/// Decode the advertised action-type code list.
pub fn decode_action_codes(raw: &Value) -> Result<Vec<u32>, Error> {
    let items = raw.as_array().ok_or_else(|| {
        Error::protocol(format!("supported action types must be a list, got {raw}"))
    })?;

    items
        .iter()
        .map(|item| expect_u32(item, "supported action type"))
        .collect()
}

// ── Color ──────────────────────────────────────────────────────────

pub fn decode_color(raw: &Value) -> Result<Color, Error> {
    let (red, green, blue) = value::as_triple(raw)
        .ok_or_else(|| Error::protocol(format!("a color must be a three-field tuple, got {raw}")))?;

    Ok(Color {
        red: expect_u32(red, "red channel")?,
        green: expect_u32(green, "green channel")?,
        blue: expect_u32(blue, "blue channel")?,
    })
}

pub fn encode_color(color: Color) -> Value {
    json!([color.red, color.green, color.blue])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    // ── Resolution shapes ───────────────────────────────────────────

    #[test]
    fn bare_integer_decodes_to_axis() {
        assert_eq!(decode_resolution(&json!(800)).unwrap(), Resolution::Axis(800));
    }

    #[test]
    fn pair_decodes_to_axes() {
        assert_eq!(
            decode_resolution(&json!([400, 800])).unwrap(),
            Resolution::Axes(Axes { x: 400, y: 800 }),
        );
    }

    #[test]
    fn absent_value_decodes_to_null() {
        assert_eq!(decode_resolution(&Value::Null).unwrap(), Resolution::Null);
    }

    #[test]
    fn alien_resolution_shapes_are_protocol_violations() {
        assert!(matches!(
            decode_resolution(&json!("800")),
            Err(Error::Protocol { .. })
        ));
        assert!(matches!(
            decode_resolution(&json!([400, 800, 1600])),
            Err(Error::Protocol { .. })
        ));
    }

    #[test]
    fn axis_value_above_the_logical_range_is_rejected() {
        // Wire fields are u32; the logical DPI range is u16. No truncation.
        assert!(matches!(
            decode_resolution(&json!(70_000)),
            Err(Error::Protocol { .. })
        ));
        assert!(matches!(
            decode_resolution(&json!([70_000, 800])),
            Err(Error::Protocol { .. })
        ));
    }

    #[test]
    fn resolution_round_trip() {
        for resolution in [
            Resolution::Axis(800),
            Resolution::Axes(Axes { x: 400, y: 1600 }),
        ] {
            let wire = encode_resolution(&resolution).unwrap();
            assert_eq!(decode_resolution(&wire).unwrap(), resolution);
        }
    }

    #[test]
    fn null_resolution_never_encodes() {
        assert!(matches!(
            encode_resolution(&Resolution::Null),
            Err(Error::Protocol { .. })
        ));
    }

    #[test]
    fn axes_encode_widens_to_u32_fields() {
        let wire = encode_resolution(&Resolution::Axes(Axes { x: 400, y: 800 })).unwrap();
        assert_eq!(wire, json!([400, 800]));
    }

    // ── Mapping shapes ──────────────────────────────────────────────

    #[test]
    fn button_mapping_round_trip() {
        let action = MappingAction::Button(3);
        let wire = encode_mapping(&action);
        assert_eq!(wire, json!([1, 3]));
        assert_eq!(decode_mapping(&wire).unwrap(), action);
    }

    #[test]
    fn special_mapping_round_trip() {
        let action = MappingAction::Special(SpecialButton::WheelUp);
        let wire = encode_mapping(&action);
        assert_eq!(wire, json!([2, (1 << 30) + 4]));
        assert_eq!(decode_mapping(&wire).unwrap(), action);
    }

    #[test]
    fn macro_mapping_round_trip() {
        let action = MappingAction::Macro(vec![
            Macro {
                event: KeyEvent::Press,
                value: 30,
            },
            Macro {
                event: KeyEvent::Wait,
                value: 150,
            },
            Macro {
                event: KeyEvent::Release,
                value: 30,
            },
        ]);
        let wire = encode_mapping(&action);
        assert_eq!(wire, json!([4, [[2, 30], [3, 150], [1, 30]]]));
        assert_eq!(decode_mapping(&wire).unwrap(), action);
    }

    #[test]
    fn unrecognized_action_type_is_preserved_verbatim() {
        let wire = json!([7, {"opaque": true}]);
        let action = decode_mapping(&wire).unwrap();
        assert_eq!(
            action,
            MappingAction::Unknown {
                action_type: 7,
                payload: json!({"opaque": true}),
            }
        );
        assert_eq!(encode_mapping(&action), wire);
    }

    #[test]
    fn unknown_codes_inside_known_types_are_protocol_violations() {
        assert!(matches!(
            decode_mapping(&json!([2, 12])),
            Err(Error::Protocol { .. })
        ));
        assert!(matches!(
            decode_mapping(&json!([4, [[9, 30]]])),
            Err(Error::Protocol { .. })
        ));
    }

    #[test]
    fn mapping_must_be_a_pair() {
        assert!(matches!(
            decode_mapping(&json!(1)),
            Err(Error::Protocol { .. })
        ));
        assert!(matches!(
            decode_mapping(&json!([1, 3, 5])),
            Err(Error::Protocol { .. })
        ));
    }

    // ── Color ───────────────────────────────────────────────────────

    #[test]
    fn color_round_trip() {
        let color = Color {
            red: 255,
            green: 0,
            blue: 128,
        };
        let wire = encode_color(color);
        assert_eq!(wire, json!([255, 0, 128]));
        assert_eq!(decode_color(&wire).unwrap(), color);
    }

    #[test]
    fn color_must_be_a_triple() {
        assert!(matches!(
            decode_color(&json!([255, 0])),
            Err(Error::Protocol { .. })
        ));
    }

    // ── Advertised lists ────────────────────────────────────────────

    #[test]
    fn resolution_list_narrows_wire_fields() {
        assert_eq!(
            decode_resolution_list(&json!([400, 800, 1600])).unwrap(),
            vec![400, 800, 1600],
        );
        assert!(matches!(
            decode_resolution_list(&json!([400, 70_000])),
            Err(Error::Protocol { .. })
        ));
    }

    #[test]
    fn action_code_list_decodes() {
        assert_eq!(decode_action_codes(&json!([1, 2, 4])).unwrap(), vec![1, 2, 4]);
        assert!(decode_action_codes(&json!(1)).is_err());
    }
}
