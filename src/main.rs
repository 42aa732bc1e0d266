// src/main.rs

use std::path::Path;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedSender;

use painel_contagem::config::AppState;
use painel_contagem::models::comandos::{
    CampoConfiguracao, CampoParametro, Comando, Notificacao,
};
use painel_contagem::models::graficos::{ArquivoCandidato, SlotGrafico, mime_da_extensao};
use painel_contagem::services::graficos_service::ClipboardIndisponivel;

// Driver headless do controlador: lê comandos de texto do stdin e imprime
// as notificações que a sessão emite. Toda a lógica fica na biblioteca.
#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    let app_state = AppState::new().expect("Falha ao montar o estado da aplicação.");

    let (controlador, tx_comandos, rx_comandos, mut rx_notificacoes) =
        app_state.montar_controlador(Arc::new(ClipboardIndisponivel));

    let sessao = tokio::spawn(controlador.executar(rx_comandos));

    tokio::spawn(async move {
        while let Some(notificacao) = rx_notificacoes.recv().await {
            match notificacao {
                Notificacao::Alerta(mensagem) => eprintln!("[alerta] {mensagem}"),
                Notificacao::Info(mensagem) => println!("[info] {mensagem}"),
            }
        }
    });

    let mut linhas = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(linha)) = linhas.next_line().await {
        if !processar_linha(linha.trim(), &tx_comandos).await {
            break;
        }
    }

    let _ = tx_comandos.send(Comando::Encerrar);
    let _ = sessao.await;
}

// Devolve false quando o usuário pede para encerrar.
async fn processar_linha(linha: &str, tx: &UnboundedSender<Comando>) -> bool {
    let mut partes = linha.splitn(3, ' ');
    let verbo = partes.next().unwrap_or("");
    let arg1 = partes.next().unwrap_or("");
    let arg2 = partes.next().unwrap_or("");

    let comando = match verbo {
        "" => return true,
        "sair" => return false,

        "segunda" => Comando::EditarContador {
            campo: CampoConfiguracao::FinalizadoSegundaContagem,
            valor: arg1.to_string(),
        },
        "primeira" => Comando::EditarContador {
            campo: CampoConfiguracao::FinalizadoPrimeiraContagem,
            valor: arg1.to_string(),
        },
        "novos" => Comando::EditarContador {
            campo: CampoConfiguracao::ItensNovos,
            valor: arg1.to_string(),
        },
        "dias-normal" => Comando::EditarParametro {
            campo: CampoParametro::DiasNormal,
            valor: arg1.to_string(),
        },
        "dias-uteis" => Comando::EditarParametro {
            campo: CampoParametro::DiasUteis,
            valor: arg1.to_string(),
        },
        "previsao" => Comando::EditarPrevisaoTermino {
            valor: format!("{arg1} {arg2}").trim().to_string(),
        },

        "salvar" => Comando::SalvarDashboard,
        "salvar-config" => Comando::SalvarConfiguracoes,

        "anexar" => {
            let Some(slot) = SlotGrafico::da_chave(arg1) else {
                eprintln!("slot desconhecido: {arg1}");
                return true;
            };
            match carregar_arquivo(arg2).await {
                Some(arquivo) => Comando::AnexarArquivos {
                    slot,
                    arquivos: vec![arquivo],
                },
                None => return true,
            }
        }
        "limpar" => {
            let Some(slot) = SlotGrafico::da_chave(arg1) else {
                eprintln!("slot desconhecido: {arg1}");
                return true;
            };
            Comando::LimparGrafico { slot }
        }
        "slot" => {
            let Some(slot) = SlotGrafico::da_chave(arg1) else {
                eprintln!("slot desconhecido: {arg1}");
                return true;
            };
            Comando::SlotAtivado { slot }
        }

        _ => {
            eprintln!(
                "comandos: segunda N | primeira N | novos N | dias-normal N | \
                 dias-uteis N | previsao TXT | salvar | salvar-config | \
                 anexar SLOT CAMINHO | limpar SLOT | slot SLOT | sair"
            );
            return true;
        }
    };

    let _ = tx.send(comando);
    true
}

async fn carregar_arquivo(caminho: &str) -> Option<ArquivoCandidato> {
    let dados = match tokio::fs::read(caminho).await {
        Ok(dados) => dados,
        Err(erro) => {
            eprintln!("não foi possível ler {caminho}: {erro}");
            return None;
        }
    };

    let caminho = Path::new(caminho);
    let extensao = caminho
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");
    let mime = mime_da_extensao(extensao).unwrap_or("application/octet-stream");
    let nome = caminho
        .file_name()
        .and_then(|nome| nome.to_str())
        .unwrap_or("")
        .to_string();

    Some(ArquivoCandidato {
        nome,
        mime: mime.to_string(),
        dados,
        modificado_em: None,
    })
}
