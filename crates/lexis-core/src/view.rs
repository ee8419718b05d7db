//! UI targets the dispatcher writes into.

use crate::model::KeywordRow;

/// A single-value field, such as the result text box.
pub trait ResultField {
    fn clear(&mut self);
    fn set_value(&mut self, value: &str);
}

/// A table body that receives one row per keyword.
pub trait KeywordTable {
    fn clear(&mut self);
    fn append_row(&mut self, row: KeywordRow);
}

/// In-memory result field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldBuffer {
    value: String,
}

impl FieldBuffer {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

impl ResultField for FieldBuffer {
    fn clear(&mut self) {
        self.value.clear();
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

/// In-memory keyword table body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowBuffer {
    rows: Vec<KeywordRow>,
}

impl RowBuffer {
    pub fn rows(&self) -> &[KeywordRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<KeywordRow> {
        self.rows
    }
}

impl KeywordTable for RowBuffer {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: KeywordRow) {
        self.rows.push(row);
    }
}
