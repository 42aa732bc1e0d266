// src/services/graficos_service.rs

use std::collections::HashMap;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;

use crate::common::error::AppError;
use crate::models::graficos::{
    Anexo, ArquivoCandidato, SlotGrafico, extensao_do_mime, mime_suportado,
};

// Capacidade de leitura programática da área de transferência.
// O driver headless não a possui; testes injetam um dublê.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn ler(&self) -> Result<Vec<ItemClipboard>, AppError>;
}

// Um item do clipboard pode carregar a mesma imagem em vários formatos;
// a ingestão usa a primeira representação suportada.
#[derive(Debug, Clone)]
pub struct ItemClipboard {
    pub representacoes: Vec<(String, Vec<u8>)>,
}

// Clipboard de plataformas sem leitura programática.
pub struct ClipboardIndisponivel;

#[async_trait]
impl Clipboard for ClipboardIndisponivel {
    async fn ler(&self) -> Result<Vec<ItemClipboard>, AppError> {
        Err(AppError::ClipboardIndisponivel)
    }
}

// --- Armazém de anexos por slot ---
// Slots são independentes entre si; cada um está vazio ou completo.
#[derive(Default)]
pub struct GraficosService {
    anexos: HashMap<SlotGrafico, Anexo>,
}

impl GraficosService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anexo(&self, slot: SlotGrafico) -> Option<&Anexo> {
        self.anexos.get(&slot)
    }

    /// Valida o formato e substitui o anexo do slot por inteiro.
    /// Em caso de rejeição o anexo anterior permanece intacto.
    pub fn ingerir(
        &mut self,
        slot: SlotGrafico,
        candidato: ArquivoCandidato,
    ) -> Result<(), AppError> {
        if !mime_suportado(&candidato.mime) {
            return Err(AppError::FormatoNaoSuportado(candidato.mime));
        }

        let agora = Utc::now();
        let nome = if candidato.nome.trim().is_empty() {
            format!(
                "grafico-{}.{}",
                agora.timestamp_millis(),
                extensao_do_mime(&candidato.mime)
            )
        } else {
            candidato.nome
        };

        let anexo = Anexo {
            src: format!(
                "data:{};base64,{}",
                candidato.mime,
                BASE64.encode(&candidato.dados)
            ),
            nome,
            mime: candidato.mime,
            modificado_em: candidato.modificado_em.unwrap_or(agora),
        };

        self.anexos.insert(slot, anexo);
        Ok(())
    }

    /// Adaptador do seletor de arquivos e do drag-and-drop: consome o
    /// primeiro arquivo da lista; lista vazia é um no-op silencioso.
    pub fn ingerir_primeiro(
        &mut self,
        slot: SlotGrafico,
        arquivos: Vec<ArquivoCandidato>,
    ) -> Result<bool, AppError> {
        match arquivos.into_iter().next() {
            Some(arquivo) => self.ingerir(slot, arquivo).map(|_| true),
            None => Ok(false),
        }
    }

    /// Adaptador do clipboard: varre os itens em ordem e ingere a primeira
    /// representação com formato suportado.
    pub async fn colar_do_clipboard(
        &mut self,
        slot: SlotGrafico,
        clipboard: &dyn Clipboard,
    ) -> Result<(), AppError> {
        let itens = clipboard.ler().await?;

        for item in itens {
            let suportada = item
                .representacoes
                .into_iter()
                .find(|(mime, _)| mime_suportado(mime));

            if let Some((mime, dados)) = suportada {
                let candidato = ArquivoCandidato {
                    nome: format!(
                        "clipboard-{}.{}",
                        Utc::now().timestamp_millis(),
                        extensao_do_mime(&mime)
                    ),
                    mime,
                    dados,
                    modificado_em: Some(Utc::now()),
                };
                return self.ingerir(slot, candidato);
            }
        }

        Err(AppError::ImagemNaoEncontrada)
    }

    /// Esvazia o slot. Sem confirmação, efeito imediato.
    pub fn limpar(&mut self, slot: SlotGrafico) {
        self.anexos.remove(&slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidato_png(nome: &str) -> ArquivoCandidato {
        ArquivoCandidato {
            nome: nome.to_string(),
            mime: "image/png".to_string(),
            dados: vec![0x89, 0x50, 0x4e, 0x47],
            modificado_em: None,
        }
    }

    #[test]
    fn png_valido_preenche_o_slot() {
        let mut graficos = GraficosService::new();
        graficos
            .ingerir(SlotGrafico::Grafico1, candidato_png("contagem.png"))
            .unwrap();

        let anexo = graficos.anexo(SlotGrafico::Grafico1).unwrap();
        assert!(anexo.src.starts_with("data:image/png;base64,"));
        assert!(anexo.src.len() > "data:image/png;base64,".len());
        assert_eq!(anexo.nome, "contagem.png");
        assert!(graficos.anexo(SlotGrafico::Grafico2).is_none());
    }

    #[test]
    fn gif_e_rejeitado_sem_tocar_o_slot() {
        let mut graficos = GraficosService::new();
        graficos
            .ingerir(SlotGrafico::Grafico1, candidato_png("antes.png"))
            .unwrap();

        let gif = ArquivoCandidato {
            nome: "animacao.gif".to_string(),
            mime: "image/gif".to_string(),
            dados: vec![1, 2, 3],
            modificado_em: None,
        };
        let erro = graficos.ingerir(SlotGrafico::Grafico1, gif).unwrap_err();
        assert!(matches!(erro, AppError::FormatoNaoSuportado(_)));

        // O anexo anterior permanece.
        assert_eq!(
            graficos.anexo(SlotGrafico::Grafico1).unwrap().nome,
            "antes.png"
        );
    }

    #[test]
    fn nome_em_branco_recebe_fallback_gerado() {
        let mut graficos = GraficosService::new();
        graficos
            .ingerir(SlotGrafico::Grafico2, candidato_png("   "))
            .unwrap();

        let anexo = graficos.anexo(SlotGrafico::Grafico2).unwrap();
        assert!(anexo.nome.starts_with("grafico-"));
        assert!(anexo.nome.ends_with(".png"));
    }

    #[test]
    fn limpar_esvazia_o_slot() {
        let mut graficos = GraficosService::new();
        graficos
            .ingerir(SlotGrafico::Grafico1, candidato_png("a.png"))
            .unwrap();
        graficos.limpar(SlotGrafico::Grafico1);
        assert!(graficos.anexo(SlotGrafico::Grafico1).is_none());
    }

    #[test]
    fn lista_vazia_e_no_op() {
        let mut graficos = GraficosService::new();
        let ingeriu = graficos
            .ingerir_primeiro(SlotGrafico::Grafico1, Vec::new())
            .unwrap();
        assert!(!ingeriu);
        assert!(graficos.anexo(SlotGrafico::Grafico1).is_none());
    }

    struct ClipboardFixo(Vec<ItemClipboard>);

    #[async_trait]
    impl Clipboard for ClipboardFixo {
        async fn ler(&self) -> Result<Vec<ItemClipboard>, AppError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn clipboard_pula_itens_nao_suportados() {
        let clipboard = ClipboardFixo(vec![
            ItemClipboard {
                representacoes: vec![("text/plain".to_string(), b"ola".to_vec())],
            },
            ItemClipboard {
                representacoes: vec![
                    ("text/html".to_string(), b"<p/>".to_vec()),
                    ("image/webp".to_string(), vec![9, 9, 9]),
                ],
            },
        ]);

        let mut graficos = GraficosService::new();
        graficos
            .colar_do_clipboard(SlotGrafico::Grafico1, &clipboard)
            .await
            .unwrap();

        let anexo = graficos.anexo(SlotGrafico::Grafico1).unwrap();
        assert_eq!(anexo.mime, "image/webp");
        assert!(anexo.nome.starts_with("clipboard-"));
        assert!(anexo.nome.ends_with(".webp"));
    }

    #[tokio::test]
    async fn clipboard_sem_imagem_reporta_nao_encontrada() {
        let clipboard = ClipboardFixo(vec![ItemClipboard {
            representacoes: vec![("text/plain".to_string(), b"so texto".to_vec())],
        }]);

        let mut graficos = GraficosService::new();
        let erro = graficos
            .colar_do_clipboard(SlotGrafico::Grafico2, &clipboard)
            .await
            .unwrap_err();
        assert!(matches!(erro, AppError::ImagemNaoEncontrada));
        assert!(graficos.anexo(SlotGrafico::Grafico2).is_none());
    }

    #[tokio::test]
    async fn clipboard_indisponivel_propaga_erro_dedicado() {
        let mut graficos = GraficosService::new();
        let erro = graficos
            .colar_do_clipboard(SlotGrafico::Grafico1, &ClipboardIndisponivel)
            .await
            .unwrap_err();
        assert!(matches!(erro, AppError::ClipboardIndisponivel));
    }
}
