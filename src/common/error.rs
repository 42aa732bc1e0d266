// src/common/error.rs

use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Nenhuma dessas variantes é fatal: a sessão continua interativa
// depois de qualquer falha.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Formato de imagem não suportado: {0}")]
    FormatoNaoSuportado(String),

    #[error("Área de transferência indisponível")]
    ClipboardIndisponivel,

    #[error("Nenhuma imagem encontrada na área de transferência")]
    ImagemNaoEncontrada,

    #[error("Falha ao salvar configurações: {0}")]
    FalhaSalvarConfiguracoes(String),

    #[error("Falha ao salvar dashboard: {0}")]
    FalhaSalvarDashboard(String),

    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Erros de transporte do reqwest (DNS, conexão recusada, corpo inválido).
    #[error("Erro de transporte HTTP: {0}")]
    TransporteError(#[from] reqwest::Error),

    // Variante genérica para qualquer outro erro inesperado.
    #[error("Erro interno: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl AppError {
    // Mensagem exibida ao usuário quando o erro vira alerta.
    // O detalhe técnico completo fica só no log via `tracing`.
    pub fn mensagem_usuario(&self) -> String {
        match self {
            AppError::FormatoNaoSuportado(_) => {
                "Formato de imagem não suportado. Utilize PNG, JPG, SVG ou WEBP.".to_string()
            }
            AppError::ClipboardIndisponivel => {
                "Não foi possível acessar a área de transferência. \
                 Verifique as permissões ou utilize Ctrl+V."
                    .to_string()
            }
            AppError::ImagemNaoEncontrada => {
                "Não encontrei imagens na área de transferência.".to_string()
            }
            AppError::FalhaSalvarConfiguracoes(_) | AppError::ValidationError(_) => {
                "Não foi possível salvar as configurações. Tente novamente.".to_string()
            }
            AppError::FalhaSalvarDashboard(_) => {
                "Não foi possível salvar o dashboard. \
                 Verifique sua conexão e tente novamente."
                    .to_string()
            }
            AppError::TransporteError(_) | AppError::InternalError(_) => {
                "Ocorreu um erro inesperado.".to_string()
            }
        }
    }
}
