// src/common/db_utils.rs

use std::{future::Future, time::Duration};

use crate::common::error::AppError;

// ---
// Helper de timeout: toda chamada ao armazenamento tem espera limitada
// ---
/// Executa a operação do repositório e falha com `StorageTimeout` se ela
/// não terminar dentro de `limit`. Não há retentativa.
pub(crate) async fn with_timeout<T, F>(limit: Duration, operation: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!("⏱️ Operação no armazenamento excedeu {:?}", limit);
            Err(AppError::StorageTimeout)
        }
    }
}
