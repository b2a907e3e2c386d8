//! 题目合成流程 - 流程层
//!
//! 核心职责：把一次 (科目, 难度) 请求变成一道合法的四选一题目
//!
//! 流程顺序：
//! 1. 抽子主题 → 构造指令 → 转义
//! 2. 调用推理后端 → 解析修复 → 选项乱序
//! 3. 最多尝试 3 次，全部失败返回兜底题目（对外永不失败）

use std::sync::Arc;

use tracing::{info, warn};

use crate::clients::{InferenceBackend, OutputFormat};
use crate::models::QuizQuestion;
use crate::services::prompt_builder::{build_prompt, escape_for_envelope};
use crate::services::{shuffler, validator};
use crate::utils::logging::truncate_text;

/// 兜底题目：所有生成尝试失败后的固定替代
pub fn fallback_question() -> QuizQuestion {
    QuizQuestion {
        question: "AI is resting. What is 5 + 5?".to_string(),
        options: vec![
            "8".to_string(),
            "10".to_string(),
            "12".to_string(),
            "0".to_string(),
        ],
        correct_index: 1,
    }
}

/// 题目合成流程
///
/// - 编排 prompt → 推理 → 校验 → 乱序 的完整流程
/// - 传输错误和校验错误都在内部消化，不向调用方传播
/// - 不持有任何可变状态，可跨请求共享
pub struct SynthesisFlow {
    backend: Arc<dyn InferenceBackend>,
    max_attempts: u32,
}

impl SynthesisFlow {
    /// 创建新的合成流程
    pub fn new(backend: Arc<dyn InferenceBackend>, max_attempts: u32) -> Self {
        Self {
            backend,
            max_attempts,
        }
    }

    /// 生成一道四选一题目，对外永不失败
    ///
    /// 每次尝试相互独立：子主题重新抽取，失败原因只记日志。
    pub async fn generate_question(&self, subject: &str, difficulty: &str) -> QuizQuestion {
        for attempt in 1..=self.max_attempts {
            let (instruction, subtopic) = build_prompt(subject, difficulty);
            // 每次请求恰好转义一次
            let prompt = escape_for_envelope(&instruction);

            info!(
                "🎯 生成尝试 {}/{}: 科目 {}, 子主题 {}",
                attempt, self.max_attempts, subject, subtopic
            );

            let raw = match self.backend.generate(&prompt, OutputFormat::Json).await {
                Ok(raw) => raw,
                Err(e) => {
                    warn!("⚠️ 尝试 {} 推理调用失败: {}", attempt, e);
                    continue;
                }
            };

            match validator::parse_and_repair(&raw) {
                Ok(question) => {
                    let question = shuffler::shuffle(question);
                    info!(
                        "✓ 尝试 {} 成功: {}",
                        attempt,
                        truncate_text(&question.question, 40)
                    );
                    return question;
                }
                Err(e) => {
                    warn!("⚠️ 尝试 {} 响应校验失败: {}", attempt, e);
                }
            }
        }

        warn!("❌ {} 次尝试全部失败，返回兜底题目", self.max_attempts);
        fallback_question()
    }
}
