// src/services/sync_service.rs

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::models::comandos::Comando;

pub const INTERVALO_DEBOUNCE_PADRAO: Duration = Duration::from_millis(600);

// Disciplina de sincronização dos salvamentos de dashboard:
// um timer de debounce cancelável (só a borda final dispara) e o par de
// contadores que descarta respostas fora de ordem.
pub struct SyncService {
    intervalo: Duration,
    // Só o agendamento mais recente sobrevive.
    timer: Option<JoinHandle<()>>,
    tx_comandos: UnboundedSender<Comando>,
    ultimo_token_despachado: u64,
    ultimo_token_aplicado: u64,
}

impl SyncService {
    pub fn new(intervalo: Duration, tx_comandos: UnboundedSender<Comando>) -> Self {
        Self {
            intervalo,
            timer: None,
            tx_comandos,
            ultimo_token_despachado: 0,
            ultimo_token_aplicado: 0,
        }
    }

    /// Agenda um salvamento silencioso para depois do período de silêncio.
    /// Uma nova edição dentro da janela cancela e reagenda.
    pub fn agendar(&mut self) {
        self.cancelar();

        let intervalo = self.intervalo;
        let tx = self.tx_comandos.clone();
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(intervalo).await;
            // O laço da sessão pode já ter encerrado; nada a fazer.
            let _ = tx.send(Comando::DispararSalvamentoSilencioso);
        }));
    }

    /// Cancela o timer pendente, se houver. Requisições já em voo não são
    /// canceladas; respostas velhas são descartadas por `deve_aplicar`.
    pub fn cancelar(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    /// Token estritamente crescente atribuído no momento do despacho.
    pub fn proximo_token(&mut self) -> u64 {
        self.ultimo_token_despachado += 1;
        self.ultimo_token_despachado
    }

    /// Guarda de ordenação: uma resposta só é aplicada se não for mais
    /// antiga que a última já aplicada (empate conta como aplicável).
    pub fn deve_aplicar(&mut self, token: u64) -> bool {
        if token < self.ultimo_token_aplicado {
            tracing::debug!(
                token,
                ultimo_aplicado = self.ultimo_token_aplicado,
                "resposta obsoleta do dashboard descartada"
            );
            return false;
        }
        self.ultimo_token_aplicado = token;
        true
    }
}

impl Drop for SyncService {
    fn drop(&mut self) {
        self.cancelar();
    }
}
