// src/services/document_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::DocumentRepository,
    models::document::{Document, DocumentPayload, DocumentRow},
};

#[derive(Clone)]
pub struct DocumentService {
    repo: DocumentRepository,
    pool: PgPool,
}

impl DocumentService {
    pub fn new(repo: DocumentRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn list_documents(&self) -> Result<Vec<DocumentRow>, AppError> {
        self.repo.list_documents().await
    }

    pub async fn create_document(&self, payload: &DocumentPayload) -> Result<Document, AppError> {
        self.repo
            .insert_document(&self.pool, &payload.name, &payload.path, payload.id_client, payload.id_organ)
            .await
    }

    pub async fn update_document(&self, id: i32, payload: &DocumentPayload) -> Result<u64, AppError> {
        self.repo
            .update_document(
                &self.pool,
                id,
                &payload.name,
                &payload.path,
                payload.id_client,
                payload.id_organ,
            )
            .await
    }

    pub async fn delete_document(&self, id: i32) -> Result<u64, AppError> {
        self.repo.delete_document(&self.pool, id).await
    }
}
