// src/api/client.rs

use async_trait::async_trait;

use crate::common::error::AppError;
use crate::models::config::{ConfiguracaoResposta, SalvarConfiguracaoRequest};
use crate::models::dashboard::{DashboardPayload, DashboardResposta};

// O backend é um colaborador externo: aqui só importa a forma das
// requisições, das respostas e o mapeamento de falhas. O trait permite
// injetar um dublê em memória nos testes.
#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn salvar_configuracoes(
        &self,
        payload: &SalvarConfiguracaoRequest,
    ) -> Result<ConfiguracaoResposta, AppError>;

    async fn salvar_dashboard(
        &self,
        payload: &DashboardPayload,
    ) -> Result<DashboardResposta, AppError>;
}

#[derive(Clone)]
pub struct HttpBackendApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackendApi {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    fn url(&self, caminho: &str) -> String {
        format!("{}{}", self.base_url, caminho)
    }
}

#[async_trait]
impl BackendApi for HttpBackendApi {
    // POST /api/configuracoes
    async fn salvar_configuracoes(
        &self,
        payload: &SalvarConfiguracaoRequest,
    ) -> Result<ConfiguracaoResposta, AppError> {
        let resposta = self
            .http
            .post(self.url("/api/configuracoes"))
            .json(payload)
            .send()
            .await?;

        if !resposta.status().is_success() {
            return Err(AppError::FalhaSalvarConfiguracoes(format!(
                "status {}",
                resposta.status()
            )));
        }

        Ok(resposta.json::<ConfiguracaoResposta>().await?)
    }

    // POST /api/dashboard
    async fn salvar_dashboard(
        &self,
        payload: &DashboardPayload,
    ) -> Result<DashboardResposta, AppError> {
        let resposta = self
            .http
            .post(self.url("/api/dashboard"))
            .json(payload)
            .send()
            .await?;

        if !resposta.status().is_success() {
            return Err(AppError::FalhaSalvarDashboard(format!(
                "status {}",
                resposta.status()
            )));
        }

        Ok(resposta.json::<DashboardResposta>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_sem_barra_final() {
        let api = HttpBackendApi::new(reqwest::Client::new(), "http://localhost:3000/");
        assert_eq!(
            api.url("/api/dashboard"),
            "http://localhost:3000/api/dashboard"
        );
    }
}
