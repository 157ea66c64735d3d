use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RepodockError>;

#[derive(Error, Debug)]
pub enum RepodockError {
    #[error("Parâmetros inválidos")]
    InvalidParams,

    #[error("Serviço não suportado")]
    UnsupportedService,

    #[error("Erro ao listar repositórios: {0}")]
    List(String),

    #[error("Erro ao clonar o repositório: {0}")]
    Clone(String),
}

impl IntoResponse for RepodockError {
    fn into_response(self) -> Response {
        let status = match self {
            RepodockError::InvalidParams | RepodockError::UnsupportedService => {
                StatusCode::BAD_REQUEST
            }
            RepodockError::List(_) | RepodockError::Clone(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
