use serde::{Deserialize, Serialize};

/// 四选一测验题
///
/// 不变量：`options` 恰好 4 项，`correct_index` 落在 `[0, 3]`，
/// `options[correct_index]` 即正确答案文本。
/// 每次请求新建一份，响应后即丢弃，不做持久化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// 题干
    pub question: String,
    /// 四个选项
    pub options: Vec<String>,
    /// 正确选项下标（对外序列化为 `answer`）
    #[serde(rename = "answer")]
    pub correct_index: usize,
}

/// 生成服务内层载荷
///
/// 对应信封 `response` 字段中再编码一次的 JSON 对象：
/// `{ "q": string, "correct": string, "wrong": [string] }`
#[derive(Debug, Clone, Deserialize)]
pub struct RawCandidate {
    /// 题干
    pub q: String,
    /// 正确答案
    pub correct: String,
    /// 错误答案列表（期望 3 项，实际数量不可信）
    pub wrong: Vec<String>,
}
