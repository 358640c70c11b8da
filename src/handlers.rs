pub mod auth;
pub mod clients;
pub mod documents;
pub mod health;
pub mod inspections;
pub mod organs;
pub mod phones;
pub mod processes;
pub mod reports;
pub mod users;
pub mod vessels;

use crate::common::error::AppError;

/// PUT e DELETE que não afetaram nenhuma linha viram 404.
pub(crate) fn ensure_affected(affected: u64, not_found: &'static str) -> Result<(), AppError> {
    if affected == 0 {
        return Err(AppError::NotFound(not_found));
    }
    Ok(())
}

// Rotas desconhecidas também respondem com o envelope
pub async fn fallback() -> AppError {
    AppError::NotFound("Rota não encontrada")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rows_is_not_found_with_the_entity_message() {
        let err = ensure_affected(0, "Órgão não encontrado").unwrap_err();
        assert_eq!(err.to_string(), "Órgão não encontrado");
        assert!(ensure_affected(1, "Órgão não encontrado").is_ok());
    }
}
