use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::billing::{Student, StudentRepository};

// ============================================================================
// In-Memory Student Repository
// ============================================================================
//
// Uniqueness is checked against the students stored so far. Matching is
// exact for documents and case-insensitive for e-mail addresses.
//
// ============================================================================

#[derive(Default)]
pub struct InMemoryStudentRepository {
    students: RwLock<Vec<Student>>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.students.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.students.read().await.is_empty()
    }

    pub async fn find(&self, student_id: Uuid) -> Option<Student> {
        self.students
            .read()
            .await
            .iter()
            .find(|s| s.id == student_id)
            .cloned()
    }

    pub async fn find_by_document(&self, document: &str) -> Option<Student> {
        self.students
            .read()
            .await
            .iter()
            .find(|s| s.document.as_str() == document)
            .cloned()
    }

    /// JSON snapshot of every stored student
    pub async fn snapshot(&self) -> Result<serde_json::Value> {
        let students = self.students.read().await;
        Ok(serde_json::to_value(&*students)?)
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn document_exists(&self, document: &str) -> Result<bool> {
        Ok(self
            .students
            .read()
            .await
            .iter()
            .any(|s| s.document.as_str() == document))
    }

    async fn email_exists(&self, email: &str) -> Result<bool> {
        Ok(self
            .students
            .read()
            .await
            .iter()
            .any(|s| s.email.as_str().eq_ignore_ascii_case(email)))
    }

    async fn create_subscription(&self, student: &Student) -> Result<()> {
        tracing::debug!(
            student_id = %student.id,
            subscriptions = student.subscriptions().len(),
            "Storing student"
        );
        self.students.write().await.push(student.clone());
        Ok(())
    }
}
