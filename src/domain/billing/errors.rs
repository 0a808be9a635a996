// ============================================================================
// Billing Infrastructure Errors
// ============================================================================
//
// Broken business rules are notifications, not errors. These variants cover
// collaborators that could not be reached.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("Student repository lookup failed: {0}")]
    Lookup(#[source] anyhow::Error),

    #[error("Failed to persist subscription for student {student_id}: {source}")]
    Persist {
        student_id: uuid::Uuid,
        #[source]
        source: anyhow::Error,
    },
}
