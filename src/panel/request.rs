//! Provisioning-request construction.
//!
//! [`build_request`] is the pure transformation from raw form input to the
//! wire shape the controller accepts. Endpoint identifiers pass through
//! verbatim (the controller rejects malformed ones); only the optional
//! VLAN tags get parsed locally.

use serde::Serialize;

use crate::error::RequestError;
use crate::panel::form::CircuitForm;

/// VLAN tag descriptor scoping traffic at a UNI.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TagRequest {
    pub tag_type: i64,
    pub value: i64,
}

/// One endpoint of the requested circuit.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UniRequest {
    pub interface_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<TagRequest>,
}

/// Wire shape of `POST <api-root>/evc/`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CircuitRequest {
    pub name: String,
    pub dynamic_backup_path: bool,
    pub enabled: bool,
    pub uni_a: UniRequest,
    pub uni_z: UniRequest,
}

/// Build a provisioning request from the current form state.
///
/// `dynamic_backup_path` and `enabled` are always `true` for console
/// requests. A tag is attached to a side only when both of that side's
/// tag strings are non-empty; a non-empty tag string with no leading
/// integer rejects the whole request locally.
pub fn build_request(form: &CircuitForm) -> Result<CircuitRequest, RequestError> {
    Ok(CircuitRequest {
        name: form.circuit_name.clone(),
        dynamic_backup_path: true,
        enabled: true,
        uni_a: build_uni(
            &form.endpoint_a,
            &form.tag_type_a,
            &form.tag_value_a,
            "UNI A tag type",
            "UNI A tag value",
        )?,
        uni_z: build_uni(
            &form.endpoint_z,
            &form.tag_type_z,
            &form.tag_value_z,
            "UNI Z tag type",
            "UNI Z tag value",
        )?,
    })
}

fn build_uni(
    interface_id: &str,
    tag_type: &str,
    tag_value: &str,
    type_field: &'static str,
    value_field: &'static str,
) -> Result<UniRequest, RequestError> {
    let tag = if !tag_type.is_empty() && !tag_value.is_empty() {
        Some(TagRequest {
            tag_type: parse_tag_number(type_field, tag_type)?,
            value: parse_tag_number(value_field, tag_value)?,
        })
    } else {
        None
    };
    Ok(UniRequest {
        interface_id: interface_id.to_string(),
        tag,
    })
}

fn parse_tag_number(field: &'static str, raw: &str) -> Result<i64, RequestError> {
    parse_leading_i64(raw).ok_or_else(|| RequestError::InvalidTagNumber {
        field,
        value: raw.to_string(),
    })
}

/// Base-10 leading-prefix parse: leading whitespace and a single sign are
/// accepted, the longest leading digit run is taken, trailing garbage is
/// ignored. No leading digit, or a run outside the i64 range, yields None.
fn parse_leading_i64(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let run_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if run_len == 0 {
        return None;
    }
    let magnitude: i128 = rest[..run_len].parse().ok()?;
    let signed = if negative { -magnitude } else { magnitude };
    i64::try_from(signed).ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::panel::form::FormField;

    fn untagged_form() -> CircuitForm {
        let mut form = CircuitForm::default();
        form.set(FormField::CircuitName, "vlan100");
        form.set(FormField::EndpointA, "00:00:00:00:00:00:00:01:1");
        form.set(FormField::EndpointZ, "00:00:00:00:00:00:00:02:2");
        form
    }

    #[test]
    fn untagged_request_has_no_tag_on_either_uni() {
        let request = build_request(&untagged_form()).unwrap();
        assert_eq!(request.name, "vlan100");
        assert_eq!(request.uni_a.interface_id, "00:00:00:00:00:00:00:01:1");
        assert_eq!(request.uni_z.interface_id, "00:00:00:00:00:00:00:02:2");
        assert_eq!(request.uni_a.tag, None);
        assert_eq!(request.uni_z.tag, None);
    }

    #[test]
    fn tag_on_one_side_leaves_the_other_untagged() {
        let mut form = untagged_form();
        form.set(FormField::TagTypeA, "1");
        form.set(FormField::TagValueA, "100");

        let request = build_request(&form).unwrap();
        assert_eq!(
            request.uni_a.tag,
            Some(TagRequest {
                tag_type: 1,
                value: 100,
            })
        );
        assert_eq!(request.uni_z.tag, None);
    }

    #[test]
    fn tag_needs_both_strings_non_empty() {
        let mut only_type = untagged_form();
        only_type.set(FormField::TagTypeZ, "1");
        assert_eq!(build_request(&only_type).unwrap().uni_z.tag, None);

        let mut only_value = untagged_form();
        only_value.set(FormField::TagValueZ, "100");
        assert_eq!(build_request(&only_value).unwrap().uni_z.tag, None);
    }

    #[test]
    fn flags_are_true_even_on_an_all_empty_form() {
        // Nothing validates name or endpoints; an all-empty request builds.
        let request = build_request(&CircuitForm::default()).unwrap();
        assert!(request.dynamic_backup_path);
        assert!(request.enabled);
        assert_eq!(request.name, "");
        assert_eq!(request.uni_a.interface_id, "");
    }

    #[test]
    fn endpoints_are_forwarded_verbatim() {
        let mut form = untagged_form();
        form.set(FormField::EndpointA, "  not an interface id  ");
        let request = build_request(&form).unwrap();
        assert_eq!(request.uni_a.interface_id, "  not an interface id  ");
    }

    #[test]
    fn builder_is_deterministic() {
        let mut form = untagged_form();
        form.set(FormField::TagTypeA, "1");
        form.set(FormField::TagValueA, "100");
        assert_eq!(build_request(&form).unwrap(), build_request(&form).unwrap());
    }

    #[test]
    fn malformed_tag_number_rejects_the_request() {
        let mut form = untagged_form();
        form.set(FormField::TagTypeA, "vlan");
        form.set(FormField::TagValueA, "100");

        let err = build_request(&form).unwrap_err();
        assert_eq!(
            err.to_string(),
            "UNI A tag type is not a number: 'vlan'".to_string()
        );
    }

    #[test]
    fn serialized_request_matches_the_wire_shape() {
        let mut form = untagged_form();
        form.set(FormField::TagTypeA, "1");
        form.set(FormField::TagValueA, "100");

        let request = build_request(&form).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "name": "vlan100",
                "dynamic_backup_path": true,
                "enabled": true,
                "uni_a": {
                    "interface_id": "00:00:00:00:00:00:00:01:1",
                    "tag": { "tag_type": 1, "value": 100 },
                },
                "uni_z": {
                    "interface_id": "00:00:00:00:00:00:00:02:2",
                },
            })
        );
    }

    #[test]
    fn leading_prefix_parse_semantics() {
        let mut form = untagged_form();
        for (raw, expected) in [
            ("100abc", Some(100)),
            ("  42", Some(42)),
            ("+7", Some(7)),
            ("-5", Some(-5)),
            ("007", Some(7)),
            ("abc", None),
            ("", None),
            ("-", None),
            ("+ 1", None),
            ("99999999999999999999999999", None),
        ] {
            form.set(FormField::TagTypeA, raw);
            form.set(FormField::TagValueA, "1");
            let built = build_request(&form);
            match expected {
                Some(value) if !raw.is_empty() => {
                    assert_eq!(built.unwrap().uni_a.tag.unwrap().tag_type, value, "{raw:?}");
                }
                _ if raw.is_empty() => {
                    // Empty string means "no tag", not a parse failure.
                    assert_eq!(built.unwrap().uni_a.tag, None);
                }
                _ => {
                    assert!(built.is_err(), "{raw:?} should reject");
                }
            }
        }
    }
}
