// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain types describing a notebook document and what it means
// to scrub one.
//
// Rules for this layer:
//   - NO file or stdin/stdout access
//   - NO knowledge of the command line
//   - Only types, views over the JSON tree, and traits
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// Version-tagged notebook document (v3 / v4)
pub mod notebook;

// Mutable view over a single cell
pub mod cell;

// Typed errors for unsupported or malformed documents
pub mod error;

// Summary of one scrub pass
pub mod report;

// Core abstractions (traits) that other layers implement
pub mod traits;
