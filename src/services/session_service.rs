// src/services/session_service.rs

use std::sync::Arc;

use chrono::Local;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use validator::Validate;

use crate::api::client::BackendApi;
use crate::common::error::AppError;
use crate::common::num::para_numero;
use crate::models::comandos::{CampoConfiguracao, CampoParametro, Comando, Notificacao};
use crate::models::config::{Configuracao, Parametros, SalvarConfiguracaoRequest};
use crate::models::dashboard::{DashboardPayload, DashboardResposta, MetricasDerivadas};
use crate::models::graficos::SlotGrafico;
use crate::services::graficos_service::{Clipboard, GraficosService};
use crate::services::metrics_service::calcular_metricas;
use crate::services::sync_service::SyncService;

// Estado de sessão do painel. Dono único: toda mutação passa pelo
// controlador, nunca por escrita direta de fora.
#[derive(Debug, Clone)]
pub struct SessaoDashboard {
    pub config: Configuracao,
    pub parametros: Parametros,
    pub metricas: MetricasDerivadas,
    pub previsao_termino: String,
    pub data_atualizacao: String,
    pub armazem: String,
    // Último slot com interação de ponteiro/foco; destino de um paste
    // quando não há menu de contexto aberto.
    pub slot_ativo: Option<SlotGrafico>,
    // Slot alvo do menu de contexto aberto, se houver.
    pub slot_menu_contexto: Option<SlotGrafico>,
}

impl SessaoDashboard {
    pub fn new() -> Self {
        Self {
            config: Configuracao::default(),
            parametros: Parametros::default(),
            metricas: MetricasDerivadas::default(),
            previsao_termino: String::new(),
            data_atualizacao: Local::now().format("%d/%m/%Y").to_string(),
            armazem: String::new(),
            slot_ativo: None,
            slot_menu_contexto: None,
        }
    }
}

impl Default for SessaoDashboard {
    fn default() -> Self {
        Self::new()
    }
}

// Controlador reativo: consome comandos tipados de um canal, recalcula as
// métricas derivadas de forma síncrona e despacha a persistência.
// Conclusões de rede reentram no laço como comandos `Resposta*`, então o
// estado permanece com dono único mesmo com requisições concorrentes.
pub struct DashboardController {
    pub sessao: SessaoDashboard,
    pub graficos: GraficosService,
    sync: SyncService,
    api: Arc<dyn BackendApi>,
    clipboard: Arc<dyn Clipboard>,
    tx_comandos: UnboundedSender<Comando>,
    tx_notificacoes: UnboundedSender<Notificacao>,
}

impl DashboardController {
    pub fn new(
        api: Arc<dyn BackendApi>,
        clipboard: Arc<dyn Clipboard>,
        sync: SyncService,
        tx_comandos: UnboundedSender<Comando>,
        tx_notificacoes: UnboundedSender<Notificacao>,
    ) -> Self {
        let mut controlador = Self {
            sessao: SessaoDashboard::new(),
            graficos: GraficosService::new(),
            sync,
            api,
            clipboard,
            tx_comandos,
            tx_notificacoes,
        };
        controlador.recalcular_metricas();
        controlador
    }

    /// Laço principal da sessão: roda até `Encerrar` ou o canal fechar.
    pub async fn executar(mut self, mut rx_comandos: UnboundedReceiver<Comando>) {
        while let Some(comando) = rx_comandos.recv().await {
            if matches!(comando, Comando::Encerrar) {
                break;
            }
            self.processar(comando).await;
        }
    }

    /// Aplica um único comando. Exposto para testes determinísticos.
    pub async fn processar(&mut self, comando: Comando) {
        match comando {
            Comando::EditarContador { campo, valor } => {
                let numero = para_numero(&valor);
                match campo {
                    CampoConfiguracao::FinalizadoSegundaContagem => {
                        self.sessao.config.finalizado_segunda_contagem = numero;
                    }
                    CampoConfiguracao::FinalizadoPrimeiraContagem => {
                        self.sessao.config.finalizado_primeira_contagem = numero;
                    }
                    CampoConfiguracao::ItensNovos => {
                        self.sessao.config.itens_novos = numero;
                    }
                }
                self.sessao.config.recalcular_total();
                self.recalcular_metricas();
                self.sync.agendar();
            }

            Comando::EditarParametro { campo, valor } => {
                let numero = para_numero(&valor);
                match campo {
                    CampoParametro::DiasNormal => self.sessao.parametros.dias_normal = numero,
                    CampoParametro::DiasUteis => self.sessao.parametros.dias_uteis = numero,
                }
                self.recalcular_metricas();
            }

            Comando::EditarPrevisaoTermino { valor } => {
                self.sessao.previsao_termino = valor;
                self.recalcular_metricas();
                self.sync.agendar();
            }

            Comando::SalvarConfiguracoes => self.despachar_configuracoes(),
            Comando::SalvarDashboard => self.despachar_dashboard(false),
            Comando::DispararSalvamentoSilencioso => self.despachar_dashboard(true),

            Comando::RespostaConfiguracoes { resultado } => {
                self.tratar_resposta_configuracoes(resultado);
            }
            Comando::RespostaDashboard {
                token,
                silencioso,
                resultado,
            } => {
                self.tratar_resposta_dashboard(token, silencioso, resultado);
            }

            Comando::AnexarArquivos { slot, arquivos } => {
                if let Err(erro) = self.graficos.ingerir_primeiro(slot, arquivos) {
                    self.alertar(&erro);
                }
            }

            Comando::ColarArquivos { arquivos } => {
                // Paste sem arquivos não consome o alvo do menu de contexto.
                if arquivos.is_empty() {
                    return;
                }
                // O alvo do menu de contexto tem prioridade sobre o último
                // slot ativo; sem nenhum dos dois o paste é um no-op.
                let destino = self.sessao.slot_menu_contexto.or(self.sessao.slot_ativo);
                if let Some(slot) = destino {
                    if let Err(erro) = self.graficos.ingerir_primeiro(slot, arquivos) {
                        self.alertar(&erro);
                    }
                    self.sessao.slot_menu_contexto = None;
                }
            }

            Comando::ColarDaAreaDeTransferencia => {
                if let Some(slot) = self.sessao.slot_menu_contexto {
                    let clipboard = Arc::clone(&self.clipboard);
                    if let Err(erro) = self.graficos.colar_do_clipboard(slot, &*clipboard).await {
                        self.alertar(&erro);
                    }
                    self.sessao.slot_menu_contexto = None;
                }
            }

            Comando::LimparGrafico { slot } => self.graficos.limpar(slot),

            Comando::SlotAtivado { slot } => self.sessao.slot_ativo = Some(slot),
            Comando::AbrirMenuContexto { slot } => {
                self.sessao.slot_menu_contexto = Some(slot);
            }
            Comando::FecharMenuContexto => self.sessao.slot_menu_contexto = None,

            // Tratado no laço `executar`; aqui é um no-op.
            Comando::Encerrar => {}
        }
    }

    fn recalcular_metricas(&mut self) {
        self.sessao.metricas = calcular_metricas(
            &self.sessao.config,
            &self.sessao.parametros,
            &self.sessao.previsao_termino,
        );
    }

    // --- Salvamento de configurações (explícito) ---

    fn despachar_configuracoes(&mut self) {
        let payload = SalvarConfiguracaoRequest::from(&self.sessao.config);
        if let Err(erros) = payload.validate() {
            self.alertar(&AppError::ValidationError(erros));
            return;
        }

        let api = Arc::clone(&self.api);
        let tx = self.tx_comandos.clone();
        tokio::spawn(async move {
            let resultado = api.salvar_configuracoes(&payload).await;
            let _ = tx.send(Comando::RespostaConfiguracoes { resultado });
        });
    }

    fn tratar_resposta_configuracoes(
        &mut self,
        resultado: Result<crate::models::config::ConfiguracaoResposta, AppError>,
    ) {
        match resultado {
            Ok(resposta) => {
                // O total devolvido pelo backend é autoritativo e
                // sobrepõe a soma local.
                if let Some(total) = resposta.total {
                    self.sessao.config.total = total;
                }
                self.recalcular_metricas();
                tracing::info!(config = ?self.sessao.config, "configurações atualizadas");

                // Propaga o novo estado para o dashboard sem alarde.
                self.despachar_dashboard(true);
            }
            Err(erro) => {
                tracing::error!(%erro, "falha ao salvar configurações");
                self.alertar(&erro);
            }
        }
    }

    // --- Salvamento de dashboard (debounce ou explícito) ---

    fn despachar_dashboard(&mut self, silencioso: bool) {
        // Um disparo explícito cancela qualquer timer pendente.
        self.sync.cancelar();
        self.recalcular_metricas();

        let payload = DashboardPayload {
            metrics: self.sessao.metricas.clone(),
            config: self.sessao.config.clone(),
            parameters: self.sessao.parametros.clone(),
        };
        let token = self.sync.proximo_token();

        if !silencioso {
            tracing::info!(token, "enviando payload do dashboard");
        }

        let api = Arc::clone(&self.api);
        let tx = self.tx_comandos.clone();
        tokio::spawn(async move {
            let resultado = api.salvar_dashboard(&payload).await;
            let _ = tx.send(Comando::RespostaDashboard {
                token,
                silencioso,
                resultado,
            });
        });
    }

    fn tratar_resposta_dashboard(
        &mut self,
        token: u64,
        silencioso: bool,
        resultado: Result<DashboardResposta, AppError>,
    ) {
        match resultado {
            Ok(resposta) => {
                if !self.sync.deve_aplicar(token) {
                    return;
                }
                self.aplicar_resposta_dashboard(resposta);
                if !silencioso {
                    self.notificar(Notificacao::Info(
                        "Dashboard salvo com sucesso!".to_string(),
                    ));
                }
            }
            Err(erro) => {
                // Falhas silenciosas ficam só no log; as explícitas
                // viram alerta para o usuário.
                tracing::error!(%erro, token, silencioso, "falha ao salvar dashboard");
                if !silencioso {
                    self.alertar(&erro);
                }
            }
        }
    }

    fn aplicar_resposta_dashboard(&mut self, resposta: DashboardResposta) {
        if let Some(data) = resposta.data_atualizacao {
            self.sessao.data_atualizacao = data;
        }
        if let Some(armazem) = resposta.armazem {
            self.sessao.armazem = armazem;
        }
        if let Some(configuracoes) = resposta.configuracoes {
            configuracoes.aplicar(&mut self.sessao.config);
        }
        if let Some(parametros) = resposta.parameters {
            parametros.aplicar(&mut self.sessao.parametros);
        }
        self.recalcular_metricas();
    }

    fn alertar(&self, erro: &AppError) {
        self.notificar(Notificacao::Alerta(erro.mensagem_usuario()));
    }

    fn notificar(&self, notificacao: Notificacao) {
        // A apresentação pode ter desligado; notificações são best-effort.
        let _ = self.tx_notificacoes.send(notificacao);
    }
}
