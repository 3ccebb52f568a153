// src/dataset/models.rs

/// A decoded annotation export: the records in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub records: Vec<Record>,
}

/// One `<doc>` entry of the export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub fields: Vec<Field>,
}

/// A `<field name="...">value</field>` pair. Values are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Record {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}

impl Document {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
