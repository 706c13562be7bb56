//! Operator input state for one panel session.
//!
//! The original surface bound inputs to state implicitly; here the host
//! forwards each input-change event through [`CircuitForm::set`] keyed by
//! [`FormField`], and renders from the canonical record it reads back.

/// Keys of the seven user-editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    CircuitName,
    EndpointA,
    EndpointZ,
    TagTypeA,
    TagValueA,
    TagTypeZ,
    TagValueZ,
}

/// Raw operator input. Everything stays a string until build time; the
/// endpoints are forwarded verbatim and never validated locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CircuitForm {
    pub circuit_name: String,
    /// Conventionally `deviceId:portNumber`.
    pub endpoint_a: String,
    pub endpoint_z: String,
    pub tag_type_a: String,
    pub tag_value_a: String,
    pub tag_type_z: String,
    pub tag_value_z: String,
}

impl CircuitForm {
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::CircuitName => &self.circuit_name,
            FormField::EndpointA => &self.endpoint_a,
            FormField::EndpointZ => &self.endpoint_z,
            FormField::TagTypeA => &self.tag_type_a,
            FormField::TagValueA => &self.tag_value_a,
            FormField::TagTypeZ => &self.tag_type_z,
            FormField::TagValueZ => &self.tag_value_z,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::CircuitName => &mut self.circuit_name,
            FormField::EndpointA => &mut self.endpoint_a,
            FormField::EndpointZ => &mut self.endpoint_z,
            FormField::TagTypeA => &mut self.tag_type_a,
            FormField::TagValueA => &mut self.tag_value_a,
            FormField::TagTypeZ => &mut self.tag_type_z,
            FormField::TagValueZ => &mut self.tag_value_z,
        }
    }
}
