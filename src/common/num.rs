// src/common/num.rs

// Coerção numérica total: nunca falha, nunca produz NaN/Infinity.
// É aplicada antes de qualquer aritmética do painel, então todo o
// restante do código pode assumir valores finitos.

/// Converte texto arbitrário em número. Vazio, só espaços ou
/// não-numérico viram `0.0`; valores não finitos também.
pub fn para_numero(valor: &str) -> f64 {
    let texto = valor.trim();
    if texto.is_empty() {
        return 0.0;
    }
    match texto.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Variante para entradas que podem estar ausentes (input nulo no formulário).
pub fn para_numero_opt(valor: Option<&str>) -> f64 {
    valor.map(para_numero).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vazio_e_ausente_viram_zero() {
        assert_eq!(para_numero(""), 0.0);
        assert_eq!(para_numero("   "), 0.0);
        assert_eq!(para_numero_opt(None), 0.0);
    }

    #[test]
    fn texto_invalido_vira_zero() {
        assert_eq!(para_numero("abc"), 0.0);
        assert_eq!(para_numero("12abc"), 0.0);
        assert_eq!(para_numero("NaN"), 0.0);
        assert_eq!(para_numero("inf"), 0.0);
    }

    #[test]
    fn numeros_bem_formados_preservam_o_valor() {
        assert_eq!(para_numero("42"), 42.0);
        assert_eq!(para_numero("-3.5"), -3.5);
        assert_eq!(para_numero(" 10 "), 10.0);
        assert_eq!(para_numero_opt(Some("7")), 7.0);
    }
}
