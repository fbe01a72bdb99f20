//! Answer gateway port and its HTTP adapter

use crate::{AnswerResponse, AskConfig, AskError, ErrorDetail, QuestionRequest};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

/// Something that turns a question into an answer.
#[async_trait]
pub trait AnswerGateway: Send + Sync {
    async fn ask(&self, request: &QuestionRequest) -> Result<AnswerResponse, AskError>;
}

/// Posts `{"question": ...}` as JSON to a fixed endpoint and decodes
/// `{"answer": ...}` from the reply.
#[derive(Debug, Clone)]
pub struct HttpAnswerGateway {
    client: Client,
    endpoint: Url,
}

impl HttpAnswerGateway {
    pub fn new(endpoint: Url, client: Client) -> Self {
        Self { client, endpoint }
    }

    pub fn from_config(config: &AskConfig) -> Result<Self, AskError> {
        let endpoint = config.endpoint_url()?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        // No timeout unless one is configured; the transport's own limits apply.
        if let Some(timeout) = config.timeout()? {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AskError::Config(format!("cannot build HTTP client: {e}")))?;

        Ok(Self::new(endpoint, client))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl AnswerGateway for HttpAnswerGateway {
    async fn ask(&self, request: &QuestionRequest) -> Result<AnswerResponse, AskError> {
        debug!(endpoint = %self.endpoint, len = request.question.len(), "posting question");

        let res = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = res.status();
        let body = res.bytes().await?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<ErrorDetail>(&body)
                .ok()
                .map(|d| d.detail);
            warn!(%status, ?detail, "answer endpoint returned an error");
            return Err(AskError::Status { status, detail });
        }

        let answer: AnswerResponse = serde_json::from_slice(&body).inspect_err(|e| {
            warn!(error = %e, "answer endpoint returned an undecodable body");
        })?;
        debug!(len = answer.answer.len(), "answer received");
        Ok(answer)
    }
}
