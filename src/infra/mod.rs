// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Output concerns that don't belong to any business layer:
//
//   writer.rs — Notebook serialisation
//               Renders the scrubbed JSON tree in the same
//               layout Jupyter uses and writes it to a file
//               or to standard output.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Notebook JSON rendering and output
pub mod writer;
