// ============================================================
// Layer 3 — Cell View
// ============================================================
// A mutable view over one cell object inside a notebook.
//
// Cells are kept as raw JSON maps rather than deserialised into
// a fixed struct: every key we don't touch (source, cell_type,
// metadata, attachments, ...) must survive byte-for-byte and in
// its original position. The view only knows how to reset the
// two volatile fields a cell can carry.
//
// Both operations are no-ops when the field is absent, so a
// markdown cell never gains an "outputs" key.

use serde_json::{Map, Value};

/// Key holding a cell's execution results (v3 and v4)
pub const OUTPUTS_KEY: &str = "outputs";

/// Borrowed, mutable access to a single cell
pub struct CellMut<'a> {
    fields: &'a mut Map<String, Value>,
}

impl<'a> CellMut<'a> {
    pub fn new(fields: &'a mut Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Replace `outputs` with an empty array.
    /// Returns true if the cell had an `outputs` field.
    pub fn clear_outputs(&mut self) -> bool {
        match self.fields.get_mut(OUTPUTS_KEY) {
            Some(outputs) => {
                *outputs = Value::Array(Vec::new());
                true
            }
            None => false,
        }
    }

    /// Set an execution counter field (`execution_count` in v4,
    /// `prompt_number` in v3) to null.
    /// Returns true if the field was present.
    pub fn reset_counter(&mut self, key: &str) -> bool {
        match self.fields.get_mut(key) {
            Some(counter) => {
                *counter = Value::Null;
                true
            }
            None => false,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_clear_outputs_empties_array() {
        let mut fields = as_map(json!({"outputs": [{"text": "hi"}], "source": "print('hi')"}));
        assert!(CellMut::new(&mut fields).clear_outputs());
        assert_eq!(fields["outputs"], json!([]));
        assert_eq!(fields["source"], json!("print('hi')"));
    }

    #[test]
    fn test_clear_outputs_does_not_add_field() {
        let mut fields = as_map(json!({"cell_type": "markdown", "source": "# Title"}));
        assert!(!CellMut::new(&mut fields).clear_outputs());
        assert!(!fields.contains_key("outputs"));
    }

    #[test]
    fn test_reset_counter() {
        let mut fields = as_map(json!({"execution_count": 7}));
        let mut cell = CellMut::new(&mut fields);
        assert!(cell.reset_counter("execution_count"));
        // Absent key is left absent
        assert!(!cell.reset_counter("prompt_number"));
        assert_eq!(Value::Object(fields), json!({"execution_count": null}));
    }
}
