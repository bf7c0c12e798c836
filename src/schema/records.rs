use super::FieldMapping;
use serde::{Deserialize, Serialize};

/// Paper record; every field is serialized under an explicit name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    #[serde(rename = "serial")]
    pub serial: i64,
    #[serde(rename = "id")]
    pub id: String,
    #[serde(rename = "title")]
    pub title: String,
    #[serde(rename = "description")]
    pub description: String,
}

const PAPER_FIELDS: &[FieldMapping] = &[
    FieldMapping::included("serial", "serial"),
    FieldMapping::included("id", "id"),
    FieldMapping::included("title", "title"),
    FieldMapping::included("description", "description"),
];

impl Paper {
    pub fn field_mappings() -> &'static [FieldMapping] {
        PAPER_FIELDS
    }
}

/// Example record; `description` never leaves the process.
///
/// It is skipped on output and defaults to an empty string on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub serial: i64,
    pub id: String,
    pub title: String,
    #[serde(skip)]
    pub description: String,
}

const EXAMPLE_FIELDS: &[FieldMapping] = &[
    FieldMapping::included("serial", "serial"),
    FieldMapping::included("id", "id"),
    FieldMapping::included("title", "title"),
    FieldMapping::excluded("description", "description"),
];

impl Example {
    pub fn field_mappings() -> &'static [FieldMapping] {
        EXAMPLE_FIELDS
    }
}

impl From<Paper> for Example {
    fn from(paper: Paper) -> Self {
        Self {
            serial: paper.serial,
            id: paper.id,
            title: paper.title,
            description: paper.description,
        }
    }
}
