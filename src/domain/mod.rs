// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each bounded context has its own subdirectory. Validation rules live on
// the value objects and entities; the command handler only orchestrates.
//
// ============================================================================

pub mod billing;
