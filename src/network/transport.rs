use async_trait::async_trait;
use reqwest::{Client, Method, Url};

use crate::config::{Config, Credentials};
use crate::error::{Result, SdkError};

use super::request::{HttpMethod, RequestSpec};

const API_TOKEN_HEADER: &str = "Api-Token";

/// 网络传输层，返回原始响应体
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, spec: &RequestSpec, credentials: &Credentials) -> Result<Vec<u8>>;
}

/// 基于 reqwest 的 HTTP 传输实现
pub struct ReqwestTransport {
    client: Client,
    url_template: String,
}

impl ReqwestTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.http_timeout()).build()?;
        Ok(Self {
            client,
            url_template: config.api_url_template.clone(),
        })
    }

    fn build_url(&self, spec: &RequestSpec, credentials: &Credentials) -> Result<Url> {
        let base = credentials.api_base_url(&self.url_template);
        let mut url = Url::parse(&base).map_err(|e| SdkError::Transport(Box::new(e)))?;
        url.path_segments_mut()
            .map_err(|_| SdkError::Transport(format!("invalid base url: {}", base).into()))?
            .pop_if_empty()
            .extend(&spec.segments);
        Ok(url)
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, spec: &RequestSpec, credentials: &Credentials) -> Result<Vec<u8>> {
        let url = self.build_url(spec, credentials)?;
        let mut builder = self
            .client
            .request(to_method(spec.method), url)
            .header(API_TOKEN_HEADER, &credentials.api_token);

        if let Some(parameters) = &spec.parameters {
            builder = match spec.method {
                HttpMethod::Get => builder.query(parameters),
                HttpMethod::Post | HttpMethod::Put => builder.json(parameters),
            };
        }

        let response = builder.send().await?.error_for_status()?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
