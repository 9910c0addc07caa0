// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to run one filter pass.
//
// Rules for this layer:
//   - No JSON field manipulation here (that's Layer 4)
//   - No argument parsing or exit codes (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The read → scrub → write workflow
pub mod scrub_use_case;
