// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro central, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // --- Autenticação ---
    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Usuário não encontrado")]
    UserNotFound,

    // --- Não encontrado (falha dura: a operação aborta) ---
    #[error("SKU não encontrado")]
    SkuNotFound,

    #[error("Item de almoxarifado não encontrado")]
    WarehouseItemNotFound,

    #[error("Item da ficha técnica não encontrado")]
    BomItemNotFound,

    #[error("Funcionário não encontrado")]
    EmployeeNotFound,

    #[error("Lançamento de custo indireto não encontrado")]
    IndirectCostNotFound,

    #[error("Destino de entrega não encontrado")]
    DestinationNotFound,

    #[error("Registro de custo não encontrado")]
    CostRecordNotFound,

    #[error("Alerta de custo não encontrado")]
    CostAlertNotFound,

    // --- Regras de negócio ---
    #[error("Registro de custo fechado não pode ser alterado ou excluído")]
    ClosedRecordImmutable,

    #[error("Transição de status inválida: {0} -> {1}")]
    InvalidStatusTransition(String, String),

    #[error("Fórmula de frete inválida: {0}")]
    InvalidFreightFormula(String),

    // --- Conflitos de unicidade ---
    #[error("Código já cadastrado: {0}")]
    DuplicateCode(String),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado.
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Fonte não encontrada: {0}")]
    FontNotFound(String),

    #[error("Erro ao gerar PDF: {0}")]
    PdfError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors.iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::EmailAlreadyExists => {
                (StatusCode::CONFLICT, "Este e-mail já está em uso.".to_string())
            }
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "E-mail ou senha inválidos.".to_string())
            }
            AppError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, "Token de autenticação inválido ou ausente.".to_string())
            }

            AppError::UserNotFound
            | AppError::SkuNotFound
            | AppError::WarehouseItemNotFound
            | AppError::BomItemNotFound
            | AppError::EmployeeNotFound
            | AppError::IndirectCostNotFound
            | AppError::DestinationNotFound
            | AppError::CostRecordNotFound
            | AppError::CostAlertNotFound => {
                (StatusCode::NOT_FOUND, self.to_string())
            }

            AppError::ClosedRecordImmutable
            | AppError::InvalidStatusTransition(_, _)
            | AppError::InvalidFreightFormula(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }

            AppError::DuplicateCode(_) => {
                (StatusCode::CONFLICT, self.to_string())
            }

            // Todos os outros erros (DatabaseError, InternalServerError...) viram 500.
            // O `tracing` loga a mensagem detalhada; o cliente recebe algo genérico.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.".to_string())
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
