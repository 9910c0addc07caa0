// ============================================================
// Layer 3 — Notebook Document
// ============================================================
// A parsed notebook, split by schema version into two explicit
// shapes:
//
//   nbformat 4                    nbformat 3
//   ──────────                    ──────────
//   { metadata: {                 { worksheets: [
//       language_info: {..} },        { cells: [ {..}, .. ] },
//     cells: [ {..}, .. ] }           .. ] }
//
// Each variant owns the whole top-level JSON object so that
// every key we never look at is written back untouched and in
// its original order. The variants only expose the lookups the
// scrubber needs, each returning Option / Result so a missing
// path is an explicit branch.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)
//            serde_json Map / Value documentation

use serde_json::{Map, Value};

use crate::domain::cell::CellMut;
use crate::domain::error::NotebookError;

/// Top-level key carrying the schema version
pub const FORMAT_KEY: &str = "nbformat";

/// A notebook document of a supported schema version
#[derive(Debug, Clone, PartialEq)]
pub enum Notebook {
    V3(NotebookV3),
    V4(NotebookV4),
}

impl Notebook {
    /// Classify a parsed JSON document by its `nbformat` tag.
    ///
    /// Fails with `UnknownFormat` for any tag other than 3 and 4.
    /// Integral floats (`4.0`) count as their integer value;
    /// strings and fractional numbers do not.
    pub fn from_value(value: Value) -> Result<Self, NotebookError> {
        let Value::Object(doc) = value else {
            return Err(NotebookError::NotAnObject);
        };

        let tag = doc.get(FORMAT_KEY).ok_or(NotebookError::MissingFormat)?;

        match format_version(tag) {
            Some(4) => Ok(Notebook::V4(NotebookV4 { doc })),
            Some(3) => Ok(Notebook::V3(NotebookV3 { doc })),
            _ => Err(NotebookError::UnknownFormat(tag.clone())),
        }
    }

    /// The schema version this document was classified as
    pub fn version(&self) -> u8 {
        match self {
            Notebook::V3(_) => 3,
            Notebook::V4(_) => 4,
        }
    }

    /// Give the document back as a JSON value for serialisation
    pub fn into_value(self) -> Value {
        match self {
            Notebook::V3(nb) => Value::Object(nb.doc),
            Notebook::V4(nb) => Value::Object(nb.doc),
        }
    }
}

/// nbformat 4: cells live directly under the document
#[derive(Debug, Clone, PartialEq)]
pub struct NotebookV4 {
    doc: Map<String, Value>,
}

impl NotebookV4 {
    /// `metadata.language_info`, if both levels exist and are objects.
    pub fn language_info_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.doc
            .get_mut("metadata")?
            .as_object_mut()?
            .get_mut("language_info")?
            .as_object_mut()
    }

    /// Views over every cell in `cells`.
    pub fn cells_mut(&mut self) -> Result<Vec<CellMut<'_>>, NotebookError> {
        let cells = self
            .doc
            .get_mut("cells")
            .and_then(Value::as_array_mut)
            .ok_or_else(|| NotebookError::MissingArray {
                version: 4,
                field:   "cells".to_string(),
            })?;

        cell_views(cells, "cells")
    }
}

/// nbformat 3: cells are grouped into worksheets
#[derive(Debug, Clone, PartialEq)]
pub struct NotebookV3 {
    doc: Map<String, Value>,
}

impl NotebookV3 {
    /// Views over every cell of every worksheet, in document order.
    pub fn cells_mut(&mut self) -> Result<Vec<CellMut<'_>>, NotebookError> {
        let sheets = self
            .doc
            .get_mut("worksheets")
            .and_then(Value::as_array_mut)
            .ok_or_else(|| NotebookError::MissingArray {
                version: 3,
                field:   "worksheets".to_string(),
            })?;

        let mut cells = Vec::new();

        for (index, sheet) in sheets.iter_mut().enumerate() {
            let sheet = sheet
                .as_object_mut()
                .ok_or_else(|| NotebookError::InvalidEntry {
                    container: "worksheets".to_string(),
                    index,
                })?;

            let field = format!("worksheets[{index}].cells");
            let sheet_cells = sheet
                .get_mut("cells")
                .and_then(Value::as_array_mut)
                .ok_or_else(|| NotebookError::MissingArray {
                    version: 3,
                    field:   field.clone(),
                })?;

            cells.extend(cell_views(sheet_cells, &field)?);
        }

        Ok(cells)
    }
}

/// Integer value of a version tag, accepting `4` and `4.0` alike.
fn format_version(tag: &Value) -> Option<u64> {
    tag.as_u64().or_else(|| {
        tag.as_f64()
            .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= u8::MAX as f64)
            .map(|v| v as u64)
    })
}

/// Wrap every element of a cells array, rejecting non-objects.
fn cell_views<'a>(
    cells:     &'a mut [Value],
    container: &str,
) -> Result<Vec<CellMut<'a>>, NotebookError> {
    cells
        .iter_mut()
        .enumerate()
        .map(|(index, cell)| {
            cell.as_object_mut()
                .map(CellMut::new)
                .ok_or_else(|| NotebookError::InvalidEntry {
                    container: container.to_string(),
                    index,
                })
        })
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classifies_v4() {
        let nb = Notebook::from_value(json!({"nbformat": 4, "cells": []})).unwrap();
        assert_eq!(nb.version(), 4);
    }

    #[test]
    fn test_classifies_v3() {
        let nb = Notebook::from_value(json!({"nbformat": 3, "worksheets": []})).unwrap();
        assert_eq!(nb.version(), 3);
    }

    #[test]
    fn test_rejects_unknown_version() {
        let err = Notebook::from_value(json!({"nbformat": 5, "cells": []})).unwrap_err();
        assert_eq!(err.to_string(), "Unknown nbformat 5");
    }

    #[test]
    fn test_accepts_integral_float_version() {
        let nb = Notebook::from_value(json!({"nbformat": 4.0, "cells": []})).unwrap();
        assert_eq!(nb.version(), 4);

        let nb = Notebook::from_value(json!({"nbformat": 3.0, "worksheets": []})).unwrap();
        assert_eq!(nb.version(), 3);
    }

    #[test]
    fn test_rejects_fractional_version() {
        let err = Notebook::from_value(json!({"nbformat": 4.5, "cells": []})).unwrap_err();
        assert_eq!(err.to_string(), "Unknown nbformat 4.5");
    }

    #[test]
    fn test_rejects_string_version() {
        let err = Notebook::from_value(json!({"nbformat": "4"})).unwrap_err();
        assert!(matches!(err, NotebookError::UnknownFormat(_)));
    }

    #[test]
    fn test_rejects_missing_version() {
        let err = Notebook::from_value(json!({"cells": []})).unwrap_err();
        assert!(matches!(err, NotebookError::MissingFormat));
    }

    #[test]
    fn test_rejects_non_object() {
        let err = Notebook::from_value(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, NotebookError::NotAnObject));
    }

    #[test]
    fn test_language_info_absent_is_none() {
        let Notebook::V4(mut nb) = Notebook::from_value(json!({"nbformat": 4, "metadata": {}})).unwrap() else {
            panic!("expected v4");
        };
        assert!(nb.language_info_mut().is_none());
    }

    #[test]
    fn test_language_info_non_object_is_none() {
        let doc = json!({"nbformat": 4, "metadata": {"language_info": "python"}});
        let Notebook::V4(mut nb) = Notebook::from_value(doc).unwrap() else {
            panic!("expected v4");
        };
        assert!(nb.language_info_mut().is_none());
    }

    #[test]
    fn test_v4_missing_cells_is_error() {
        let Notebook::V4(mut nb) = Notebook::from_value(json!({"nbformat": 4})).unwrap() else {
            panic!("expected v4");
        };
        let err = nb.cells_mut().err().unwrap();
        assert!(matches!(err, NotebookError::MissingArray { version: 4, .. }));
    }

    #[test]
    fn test_v4_non_object_cell_is_error() {
        let doc = json!({"nbformat": 4, "cells": [{"cell_type": "code"}, 42]});
        let Notebook::V4(mut nb) = Notebook::from_value(doc).unwrap() else {
            panic!("expected v4");
        };
        let err = nb.cells_mut().err().unwrap();
        assert_eq!(err.to_string(), "entry 1 of 'cells' is not a JSON object");
    }

    #[test]
    fn test_v3_flattens_worksheets() {
        let doc = json!({
            "nbformat": 3,
            "worksheets": [
                {"cells": [{"cell_type": "code"}, {"cell_type": "markdown"}]},
                {"cells": [{"cell_type": "code"}]}
            ]
        });
        let Notebook::V3(mut nb) = Notebook::from_value(doc).unwrap() else {
            panic!("expected v3");
        };
        assert_eq!(nb.cells_mut().unwrap().len(), 3);
    }

    #[test]
    fn test_v3_worksheet_without_cells_is_error() {
        let doc = json!({"nbformat": 3, "worksheets": [{"cells": []}, {"metadata": {}}]});
        let Notebook::V3(mut nb) = Notebook::from_value(doc).unwrap() else {
            panic!("expected v3");
        };
        let err = nb.cells_mut().err().unwrap();
        assert_eq!(
            err.to_string(),
            "nbformat 3 notebook has no 'worksheets[1].cells' array"
        );
    }

    #[test]
    fn test_into_value_round_trips_untouched_document() {
        let doc = json!({"nbformat": 4, "nbformat_minor": 5, "metadata": {}, "cells": []});
        let nb = Notebook::from_value(doc.clone()).unwrap();
        assert_eq!(nb.into_value(), doc);
    }
}
