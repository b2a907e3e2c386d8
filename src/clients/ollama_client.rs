//! 推理客户端 - 客户端层
//!
//! 封装与本地生成服务（Ollama `/api/generate`）的单次请求/响应交互。
//! 任何网络失败、超时、空响应都作为传输错误返回，由流程层决定是否重试。

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// 期望的生成输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// 约束服务只输出 JSON（题目合成）
    Json,
    /// 自由文本（讲解生成）
    Text,
}

/// 推理后端能力接口
///
/// 流程层只依赖本接口，测试中可以注入桩实现。
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// 发送一次生成请求，返回服务响应的原始信封文本
    async fn generate(&self, prompt: &str, format: OutputFormat) -> AppResult<String>;
}

/// 请求信封（结构化构造，由 serde 负责转义）
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'a str>,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
}

/// Ollama 推理客户端
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model_name: String,
    temperature: f32,
    timeout_secs: u64,
}

impl OllamaClient {
    /// 创建新的推理客户端（带请求超时）
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::transport_request_failed(&config.ollama_base_url, e))?;

        Ok(Self {
            client,
            base_url: config.ollama_base_url.clone(),
            model_name: config.model_name.clone(),
            temperature: config.temperature,
            timeout_secs: config.request_timeout_secs,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }
}

#[async_trait]
impl InferenceBackend for OllamaClient {
    async fn generate(&self, prompt: &str, format: OutputFormat) -> AppResult<String> {
        let endpoint = self.endpoint();
        let request = GenerateRequest {
            model: &self.model_name,
            prompt,
            format: match format {
                OutputFormat::Json => Some("json"),
                OutputFormat::Text => None,
            },
            stream: false,
            options: GenerateOptions {
                temperature: self.temperature,
            },
        };

        debug!("调用生成服务，模型: {}，提示词长度: {} 字符", self.model_name, prompt.len());

        let response = self
            .client
            .post(&endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::transport_timeout(&endpoint, self.timeout_secs)
                } else {
                    AppError::transport_request_failed(&endpoint, e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::transport_bad_status(&endpoint, status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                AppError::transport_timeout(&endpoint, self.timeout_secs)
            } else {
                AppError::transport_request_failed(&endpoint, e)
            }
        })?;

        if body.trim().is_empty() {
            return Err(AppError::transport_empty_response(&self.model_name));
        }

        debug!("生成服务返回 {} 字符", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_shape() {
        let request = GenerateRequest {
            model: "llama3.2",
            prompt: "Generate one question",
            format: Some("json"),
            stream: false,
            // 0.5 可被二进制浮点精确表示，断言不受 f32 → f64 精度影响
            options: GenerateOptions { temperature: 0.5 },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "llama3.2");
        assert_eq!(value["prompt"], "Generate one question");
        assert_eq!(value["format"], "json");
        assert_eq!(value["stream"], false);
        assert_eq!(value["options"]["temperature"], 0.5);
    }

    #[test]
    fn test_generate_request_text_format_omitted() {
        let request = GenerateRequest {
            model: "llama3.2",
            prompt: "Explain this",
            format: None,
            stream: false,
            options: GenerateOptions { temperature: 0.5 },
        };

        let value = serde_json::to_value(&request).unwrap();
        // 自由文本模式下不发送 format 字段
        assert!(value.get("format").is_none());
        assert_eq!(value["stream"], false);
    }

    #[test]
    fn test_endpoint_construction() {
        let config = Config::default();
        let client = OllamaClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:11434/api/generate");
    }
}
