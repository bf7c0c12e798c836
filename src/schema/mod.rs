//! Serialized field-name mappings for the paper records.
//!
//! The wire names are declared with serde attributes on each record and
//! mirrored in a static [`FieldMapping`] table so callers can inspect the
//! mapping without serializing a value.

mod records;

pub use records::{Example, Paper};

/// One row of a record's field-to-wire-name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    /// Rust field name
    pub field: &'static str,
    /// Property name used in serialized output
    pub serialized_name: &'static str,
    /// Whether the field appears in serialized output
    pub included: bool,
}

impl FieldMapping {
    pub const fn included(field: &'static str, serialized_name: &'static str) -> Self {
        Self {
            field,
            serialized_name,
            included: true,
        }
    }

    pub const fn excluded(field: &'static str, serialized_name: &'static str) -> Self {
        Self {
            field,
            serialized_name,
            included: false,
        }
    }
}

/// Serialized names of the included fields, in declaration order.
pub fn serialized_names(mappings: &[FieldMapping]) -> Vec<&'static str> {
    mappings
        .iter()
        .filter(|m| m.included)
        .map(|m| m.serialized_name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_names_skips_excluded() {
        let table = [
            FieldMapping::included("a", "alpha"),
            FieldMapping::excluded("b", "beta"),
            FieldMapping::included("c", "gamma"),
        ];
        assert_eq!(serialized_names(&table), vec!["alpha", "gamma"]);
    }

    #[test]
    fn test_serialized_names_empty() {
        assert!(serialized_names(&[]).is_empty());
    }
}
