// src/models/comandos.rs

use crate::common::error::AppError;
use crate::models::config::ConfiguracaoResposta;
use crate::models::dashboard::DashboardResposta;
use crate::models::graficos::{ArquivoCandidato, SlotGrafico};

// Cada ação do usuário vira um comando tipado consumido pelo controlador,
// o que permite testar a sessão de forma determinística, sem DOM.
// As variantes `Resposta*` reentram no mesmo laço quando uma requisição
// despachada termina, mantendo toda mutação de estado em um único dono.
#[derive(Debug)]
pub enum Comando {
    // --- Edições de formulário ---
    EditarContador {
        campo: CampoConfiguracao,
        valor: String,
    },
    EditarParametro {
        campo: CampoParametro,
        valor: String,
    },
    EditarPrevisaoTermino {
        valor: String,
    },

    // --- Persistência ---
    SalvarConfiguracoes,
    // Ação explícita de salvar: cancela o debounce e dispara na hora.
    SalvarDashboard,
    // Emitido pelo timer de debounce ao expirar o período de silêncio.
    DispararSalvamentoSilencioso,
    RespostaConfiguracoes {
        resultado: Result<ConfiguracaoResposta, AppError>,
    },
    RespostaDashboard {
        token: u64,
        silencioso: bool,
        resultado: Result<DashboardResposta, AppError>,
    },

    // --- Gráficos ---
    // Seleção pelo seletor de arquivos ou drag-and-drop; lista vazia é no-op.
    AnexarArquivos {
        slot: SlotGrafico,
        arquivos: Vec<ArquivoCandidato>,
    },
    // Evento de paste com arquivos; o destino é o slot do menu de contexto
    // ou, na ausência dele, o último slot ativo.
    ColarArquivos {
        arquivos: Vec<ArquivoCandidato>,
    },
    // Leitura programática do clipboard a partir do menu de contexto.
    ColarDaAreaDeTransferencia,
    LimparGrafico {
        slot: SlotGrafico,
    },

    // --- Rastreamento de slot ativo ---
    SlotAtivado {
        slot: SlotGrafico,
    },
    AbrirMenuContexto {
        slot: SlotGrafico,
    },
    FecharMenuContexto,

    Encerrar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampoConfiguracao {
    FinalizadoSegundaContagem,
    FinalizadoPrimeiraContagem,
    ItensNovos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampoParametro {
    DiasNormal,
    DiasUteis,
}

// Notificações emitidas pela sessão para a camada de apresentação.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notificacao {
    Alerta(String),
    Info(String),
}
