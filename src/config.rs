// src/config.rs

use std::env;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::{BackendApi, HttpBackendApi};
use crate::models::comandos::{Comando, Notificacao};
use crate::services::graficos_service::Clipboard;
use crate::services::session_service::DashboardController;
use crate::services::sync_service::{INTERVALO_DEBOUNCE_PADRAO, SyncService};

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn BackendApi>,
    pub intervalo_debounce: Duration,
}

impl AppState {
    // A assinatura retorna um Result: se a configuração do ambiente
    // estiver quebrada, a aplicação não deve iniciar.
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let base_url =
            env::var("DASHBOARD_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let intervalo_debounce = match env::var("DEBOUNCE_MS") {
            Ok(valor) => Duration::from_millis(valor.parse()?),
            Err(_) => INTERVALO_DEBOUNCE_PADRAO,
        };

        let http = reqwest::Client::new();
        let api: Arc<dyn BackendApi> = Arc::new(HttpBackendApi::new(http, base_url.clone()));

        tracing::info!(%base_url, ?intervalo_debounce, "estado da aplicação montado");

        Ok(Self {
            api,
            intervalo_debounce,
        })
    }

    /// Monta o controlador e seus canais. Devolve o transmissor de comandos
    /// e o receptor de notificações para a camada de apresentação.
    pub fn montar_controlador(
        &self,
        clipboard: Arc<dyn Clipboard>,
    ) -> (
        DashboardController,
        UnboundedSender<Comando>,
        UnboundedReceiver<Comando>,
        UnboundedReceiver<Notificacao>,
    ) {
        let (tx_comandos, rx_comandos) = mpsc::unbounded_channel();
        let (tx_notificacoes, rx_notificacoes) = mpsc::unbounded_channel();

        let sync = SyncService::new(self.intervalo_debounce, tx_comandos.clone());
        let controlador = DashboardController::new(
            Arc::clone(&self.api),
            clipboard,
            sync,
            tx_comandos.clone(),
            tx_notificacoes,
        );

        (controlador, tx_comandos, rx_comandos, rx_notificacoes)
    }
}
