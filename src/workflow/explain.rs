//! 讲解生成流程 - 流程层
//!
//! 题目合成的单次尝试变体：不重试，任何失败都转换为固定提示语返回。

use std::sync::Arc;

use tracing::warn;

use crate::clients::{InferenceBackend, OutputFormat};
use crate::services::prompt_builder::{build_explain_prompt, escape_for_envelope};
use crate::services::validator;

/// 讲解生成失败时返回的固定提示语
pub const EXPLAIN_ERROR_SENTINEL: &str = "AI connection error. Please try again later.";

/// 讲解生成流程
pub struct ExplainFlow {
    backend: Arc<dyn InferenceBackend>,
}

impl ExplainFlow {
    /// 创建新的讲解流程
    pub fn new(backend: Arc<dyn InferenceBackend>) -> Self {
        Self { backend }
    }

    /// 为一组 (题目, 错误选项, 正确选项) 生成讲解文本
    ///
    /// 单次尝试：传输或解析失败直接返回固定提示语，不向外抛错。
    pub async fn explain(&self, question: &str, wrong: &str, correct: &str) -> String {
        let instruction = build_explain_prompt(question, wrong, correct);
        let prompt = escape_for_envelope(&instruction);

        let raw = match self.backend.generate(&prompt, OutputFormat::Text).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("⚠️ 讲解生成推理调用失败: {}", e);
                return EXPLAIN_ERROR_SENTINEL.to_string();
            }
        };

        match validator::extract_response_text(&raw) {
            Ok(text) => text,
            Err(e) => {
                warn!("⚠️ 讲解响应解析失败: {}", e);
                EXPLAIN_ERROR_SENTINEL.to_string()
            }
        }
    }
}
