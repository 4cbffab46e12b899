// ============================================================
// Layer 2: Application / Use Cases
// ============================================================
// Orchestrates the other layers for one run.
//
// Rules for this layer:
//   - No parsing or number formatting here
//   - No printing to the terminal (that's Layer 1)
//   - Only workflow coordination and error context

// Parse the input and dump both arrays
pub mod convert_use_case;

// Parse the input and report what it contains
pub mod inspect_use_case;
