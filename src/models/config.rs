// src/models/config.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

// --- 1. Configuração (os três contadores editáveis + total derivado) ---
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuracao {
    pub finalizado_segunda_contagem: f64,
    pub finalizado_primeira_contagem: f64,
    pub itens_novos: f64,
    pub total: f64,
}

impl Configuracao {
    // O total local é sempre a soma dos três contadores. Depois de um
    // salvamento de configurações, o backend pode devolver um total
    // autoritativo que sobrescreve este valor.
    pub fn recalcular_total(&mut self) {
        self.total = self.finalizado_segunda_contagem
            + self.finalizado_primeira_contagem
            + self.itens_novos;
    }
}

// --- 2. Parâmetros operacionais ---
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parametros {
    pub dias_normal: f64,
    pub dias_uteis: f64,
}

// --- 3. Payload de salvamento de configurações (POST /api/configuracoes) ---
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SalvarConfiguracaoRequest {
    #[validate(range(min = 0.0, message = "contador não pode ser negativo"))]
    pub finalizado_segunda_contagem: f64,

    #[validate(range(min = 0.0, message = "contador não pode ser negativo"))]
    pub finalizado_primeira_contagem: f64,

    #[validate(range(min = 0.0, message = "contador não pode ser negativo"))]
    pub itens_novos: f64,
}

impl From<&Configuracao> for SalvarConfiguracaoRequest {
    fn from(config: &Configuracao) -> Self {
        Self {
            finalizado_segunda_contagem: config.finalizado_segunda_contagem,
            finalizado_primeira_contagem: config.finalizado_primeira_contagem,
            itens_novos: config.itens_novos,
        }
    }
}

// Resposta do backend; o `total` devolvido é autoritativo.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfiguracaoResposta {
    pub total: Option<f64>,
}

// --- 4. Mesclas parciais vindas da resposta do dashboard ---
// Cada campo só é aplicado ao estado local quando presente na resposta.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfiguracaoParcial {
    pub finalizado_segunda_contagem: Option<f64>,
    pub finalizado_primeira_contagem: Option<f64>,
    pub itens_novos: Option<f64>,
    pub total: Option<f64>,
}

impl ConfiguracaoParcial {
    pub fn aplicar(&self, destino: &mut Configuracao) {
        if let Some(v) = self.finalizado_segunda_contagem {
            destino.finalizado_segunda_contagem = v;
        }
        if let Some(v) = self.finalizado_primeira_contagem {
            destino.finalizado_primeira_contagem = v;
        }
        if let Some(v) = self.itens_novos {
            destino.itens_novos = v;
        }
        if let Some(v) = self.total {
            destino.total = v;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParametrosParciais {
    pub dias_normal: Option<f64>,
    pub dias_uteis: Option<f64>,
}

impl ParametrosParciais {
    pub fn aplicar(&self, destino: &mut Parametros) {
        if let Some(v) = self.dias_normal {
            destino.dias_normal = v;
        }
        if let Some(v) = self.dias_uteis {
            destino.dias_uteis = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn total_e_a_soma_dos_tres_contadores() {
        let mut config = Configuracao {
            finalizado_segunda_contagem: 5.0,
            finalizado_primeira_contagem: 10.0,
            itens_novos: 3.0,
            total: 0.0,
        };
        config.recalcular_total();
        assert_eq!(config.total, 18.0);
    }

    #[test]
    fn mescla_parcial_so_aplica_campos_presentes() {
        let mut parametros = Parametros {
            dias_normal: 30.0,
            dias_uteis: 22.0,
        };
        let parcial = ParametrosParciais {
            dias_normal: None,
            dias_uteis: Some(20.0),
        };
        parcial.aplicar(&mut parametros);
        assert_eq!(parametros.dias_normal, 30.0);
        assert_eq!(parametros.dias_uteis, 20.0);
    }

    #[test]
    fn payload_rejeita_contador_negativo() {
        let payload = SalvarConfiguracaoRequest {
            finalizado_segunda_contagem: -1.0,
            finalizado_primeira_contagem: 0.0,
            itens_novos: 0.0,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn payload_serializa_em_camel_case() {
        let payload = SalvarConfiguracaoRequest {
            finalizado_segunda_contagem: 1.0,
            finalizado_primeira_contagem: 2.0,
            itens_novos: 3.0,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["finalizadoSegundaContagem"], 1.0);
        assert_eq!(json["finalizadoPrimeiraContagem"], 2.0);
        assert_eq!(json["itensNovos"], 3.0);
    }
}
