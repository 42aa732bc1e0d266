// src/services/metrics_service.rs

use crate::models::config::{Configuracao, Parametros};
use crate::models::dashboard::MetricasDerivadas;

// Regras de negócio fixas do painel. Função pura: mesmo estado de
// entrada produz sempre as mesmas métricas, sem I/O.
pub fn calcular_metricas(
    config: &Configuracao,
    parametros: &Parametros,
    previsao_termino: &str,
) -> MetricasDerivadas {
    let primeira = config.finalizado_primeira_contagem;
    let segunda = config.finalizado_segunda_contagem;
    let novos = config.itens_novos;
    let total_config = config.total;
    let dias_uteis = parametros.dias_uteis;

    let skus_restante_segunda = primeira + novos * 2.0;
    let skus_restante_primeira = novos;
    let skus_segunda_concluida = segunda;
    let total_skus_estoque = total_config + novos;

    // Dia parcial conta como dia cheio de trabalho.
    let meta_contagem_diaria = if dias_uteis > 0.0 {
        (skus_restante_segunda / dias_uteis).ceil()
    } else {
        0.0
    };

    // Denominador zero produz 0, nunca NaN/Infinity.
    let percentual = |parte: f64| {
        if total_skus_estoque > 0.0 {
            arredondar2(parte / total_skus_estoque * 100.0)
        } else {
            0.0
        }
    };

    MetricasDerivadas {
        total_skus_estoque,
        skus_restante_segunda,
        skus_segunda_concluida,
        percentual_sem_contagem: percentual(skus_restante_segunda),
        percentual_contado_segunda: percentual(skus_segunda_concluida),
        percentual_sem_contagem_segunda: percentual(skus_restante_primeira),
        skus_restante_primeira,
        meta_contagem_diaria,
        previsao_termino: previsao_termino.to_string(),
    }
}

// Percentuais são exibidos com duas casas decimais.
fn arredondar2(valor: f64) -> f64 {
    (valor * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_exemplo() -> Configuracao {
        Configuracao {
            finalizado_primeira_contagem: 10.0,
            finalizado_segunda_contagem: 5.0,
            itens_novos: 3.0,
            total: 50.0,
        }
    }

    #[test]
    fn exemplo_de_referencia() {
        let parametros = Parametros {
            dias_normal: 0.0,
            dias_uteis: 4.0,
        };
        let metricas = calcular_metricas(&config_exemplo(), &parametros, "");

        assert_eq!(metricas.skus_restante_segunda, 16.0);
        assert_eq!(metricas.meta_contagem_diaria, 4.0);
        assert_eq!(metricas.total_skus_estoque, 53.0);
        assert_eq!(metricas.skus_restante_primeira, 3.0);
        assert_eq!(metricas.skus_segunda_concluida, 5.0);
        assert_eq!(metricas.percentual_sem_contagem, 30.19);
        assert_eq!(metricas.percentual_contado_segunda, 9.43);
        assert_eq!(metricas.percentual_sem_contagem_segunda, 5.66);
    }

    #[test]
    fn meta_diaria_usa_teto() {
        let parametros = Parametros {
            dias_normal: 0.0,
            dias_uteis: 5.0,
        };
        // 16 / 5 = 3.2 → 4 dias de trabalho.
        let metricas = calcular_metricas(&config_exemplo(), &parametros, "");
        assert_eq!(metricas.meta_contagem_diaria, 4.0);
    }

    #[test]
    fn dias_uteis_zero_zera_a_meta() {
        let parametros = Parametros::default();
        let metricas = calcular_metricas(&config_exemplo(), &parametros, "");
        assert_eq!(metricas.meta_contagem_diaria, 0.0);
    }

    #[test]
    fn estoque_zero_zera_todos_os_percentuais() {
        let config = Configuracao::default();
        let parametros = Parametros {
            dias_normal: 0.0,
            dias_uteis: 4.0,
        };
        let metricas = calcular_metricas(&config, &parametros, "");
        assert_eq!(metricas.percentual_sem_contagem, 0.0);
        assert_eq!(metricas.percentual_contado_segunda, 0.0);
        assert_eq!(metricas.percentual_sem_contagem_segunda, 0.0);
    }

    #[test]
    fn funcao_e_pura() {
        let parametros = Parametros {
            dias_normal: 2.0,
            dias_uteis: 4.0,
        };
        let primeira_execucao = calcular_metricas(&config_exemplo(), &parametros, "10/10");
        let segunda_execucao = calcular_metricas(&config_exemplo(), &parametros, "10/10");
        assert_eq!(primeira_execucao, segunda_execucao);
        assert_eq!(primeira_execucao.previsao_termino, "10/10");
    }
}
