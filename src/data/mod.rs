// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between raw input text and a scrubbed JSON tree.
//
// The pipeline flows in this order:
//
//   stdin / file
//       │
//       ▼
//   NotebookLoader   → reads text, parses JSON (order-preserving)
//       │
//       ▼
//   normalize()      → classifies by nbformat, clears outputs,
//                      execution counters, language version
//
// Serialising the result back out is Layer 6 (infra::writer).
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads notebook JSON from a file or standard input
pub mod loader;

/// Strips execution state from v3 and v4 notebooks
pub mod normalizer;
