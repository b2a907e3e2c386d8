//! 响应校验与修复 - 业务能力层
//!
//! 生成服务的输出完全不可信：信封可能不是 JSON，内层可能缺字段，
//! 错误答案可能多给或少给。本模块把能修的修掉，修不了的报校验错误。

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::{QuizQuestion, RawCandidate};

/// 每道题的选项数量
pub const OPTION_COUNT: usize = 4;

/// 错误答案不足时的占位文本
const MISSING_OPTION_PLACEHOLDER: &str = "None";

/// 生成服务响应信封
///
/// `response` 字段的值本身又是一段 JSON 编码的字符串（双层编码）
#[derive(Debug, Deserialize)]
struct GenerateEnvelope {
    response: String,
}

/// 解析双层编码的响应并修复为合法的四选一题目
///
/// 候选列表以正确答案开头，随后按原顺序接上错误答案：
/// - 不足 4 项时用 `"None"` 补齐；
/// - 超过 4 项时截断到前 4 项（正确答案占 0 号位，截断不会丢掉它）。
///
/// 返回的题目 `correct_index` 固定为 0，乱序在后续步骤完成。
pub fn parse_and_repair(raw: &str) -> AppResult<QuizQuestion> {
    let envelope: GenerateEnvelope =
        serde_json::from_str(raw).map_err(AppError::envelope_parse_failed)?;

    let candidate: RawCandidate =
        serde_json::from_str(&envelope.response).map_err(AppError::payload_parse_failed)?;

    let mut options = Vec::with_capacity(OPTION_COUNT);
    options.push(candidate.correct);
    options.extend(candidate.wrong);

    while options.len() < OPTION_COUNT {
        options.push(MISSING_OPTION_PLACEHOLDER.to_string());
    }
    options.truncate(OPTION_COUNT);

    Ok(QuizQuestion {
        question: candidate.q,
        options,
        correct_index: 0,
    })
}

/// 只解开外层信封，原样返回 `response` 字段文本（讲解生成用）
pub fn extract_response_text(raw: &str) -> AppResult<String> {
    let envelope: GenerateEnvelope =
        serde_json::from_str(raw).map_err(AppError::envelope_parse_failed)?;
    Ok(envelope.response)
}
