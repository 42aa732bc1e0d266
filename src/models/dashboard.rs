// src/models/dashboard.rs

use serde::{Deserialize, Serialize};

use crate::models::config::{Configuracao, ConfiguracaoParcial, Parametros, ParametrosParciais};

// --- 1. Métricas derivadas (somente leitura, recalculadas a cada edição) ---
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricasDerivadas {
    pub total_skus_estoque: f64,
    pub skus_restante_segunda: f64,
    pub skus_segunda_concluida: f64,
    pub percentual_sem_contagem: f64,
    pub percentual_contado_segunda: f64,
    pub percentual_sem_contagem_segunda: f64,
    pub skus_restante_primeira: f64,
    pub meta_contagem_diaria: f64,
    // Campo de texto livre, repassado como digitado.
    pub previsao_termino: String,
}

// --- 2. Payload de salvamento do dashboard (POST /api/dashboard) ---
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    pub metrics: MetricasDerivadas,
    pub config: Configuracao,
    pub parameters: Parametros,
}

// --- 3. Resposta do backend ---
// Todos os campos são opcionais; só o que vier preenchido é mesclado
// de volta no estado local.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResposta {
    pub data_atualizacao: Option<String>,
    pub armazem: Option<String>,
    pub configuracoes: Option<ConfiguracaoParcial>,
    pub parameters: Option<ParametrosParciais>,
}
