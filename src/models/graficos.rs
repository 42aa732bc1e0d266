// src/models/graficos.rs

use chrono::{DateTime, Utc};

// Formatos aceitos para imagens anexadas aos gráficos.
pub const MIMES_SUPORTADOS: [&str; 5] = [
    "image/png",
    "image/jpeg",
    "image/jpg",
    "image/svg+xml",
    "image/webp",
];

pub fn mime_suportado(mime: &str) -> bool {
    MIMES_SUPORTADOS.contains(&mime)
}

// Extensão usada nos nomes gerados (`grafico-<ts>.<ext>`).
pub fn extensao_do_mime(mime: &str) -> &'static str {
    match mime {
        "image/png" => "png",
        "image/jpeg" | "image/jpg" => "jpg",
        "image/svg+xml" => "svg",
        "image/webp" => "webp",
        _ => "png",
    }
}

// Inverso aproximado, usado pelo driver de linha de comando para
// adivinhar o MIME a partir do caminho do arquivo.
pub fn mime_da_extensao(extensao: &str) -> Option<&'static str> {
    match extensao.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "svg" => Some("image/svg+xml"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

// --- 1. Slots fixos de gráfico ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotGrafico {
    Grafico1,
    Grafico2,
}

impl SlotGrafico {
    pub fn todos() -> [SlotGrafico; 2] {
        [SlotGrafico::Grafico1, SlotGrafico::Grafico2]
    }

    pub fn chave(&self) -> &'static str {
        match self {
            SlotGrafico::Grafico1 => "grafico1",
            SlotGrafico::Grafico2 => "grafico2",
        }
    }

    pub fn da_chave(chave: &str) -> Option<SlotGrafico> {
        match chave {
            "grafico1" => Some(SlotGrafico::Grafico1),
            "grafico2" => Some(SlotGrafico::Grafico2),
            _ => None,
        }
    }
}

// --- 2. Arquivo candidato normalizado ---
// Os três adaptadores de entrada (seletor de arquivo, drag-and-drop e
// clipboard) produzem esta mesma forma antes da ingestão.
#[derive(Debug, Clone)]
pub struct ArquivoCandidato {
    pub nome: String,
    pub mime: String,
    pub dados: Vec<u8>,
    pub modificado_em: Option<DateTime<Utc>>,
}

// --- 3. Anexo armazenado ---
// Ou o slot está vazio, ou o anexo está completo; nunca parcial.
// Anexos são estado de sessão: nunca vão ao backend, então não há
// forma de fio a manter aqui.
#[derive(Debug, Clone)]
pub struct Anexo {
    // Data URI pronto para exibição direta.
    pub src: String,
    pub nome: String,
    pub mime: String,
    pub modificado_em: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lista_de_formatos_suportados() {
        assert!(mime_suportado("image/png"));
        assert!(mime_suportado("image/webp"));
        assert!(!mime_suportado("image/gif"));
        assert!(!mime_suportado("application/pdf"));
    }

    #[test]
    fn mapa_de_extensoes_cobre_todos_os_mimes() {
        assert_eq!(extensao_do_mime("image/jpeg"), "jpg");
        assert_eq!(extensao_do_mime("image/svg+xml"), "svg");
        // Fallback para png quando o mime é desconhecido.
        assert_eq!(extensao_do_mime("image/bmp"), "png");
    }

    #[test]
    fn chave_de_slot_faz_ida_e_volta() {
        for slot in SlotGrafico::todos() {
            assert_eq!(SlotGrafico::da_chave(slot.chave()), Some(slot));
        }
        assert_eq!(SlotGrafico::da_chave("grafico3"), None);
    }
}
