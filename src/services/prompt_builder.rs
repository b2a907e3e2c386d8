//! 提示词构造 - 业务能力层
//!
//! 构造生成指令，并提供把指令安全嵌入请求信封字符串值的转义能力。

use crate::services::topic_catalog::pick_subtopic;

/// 构造题目生成指令
///
/// 指令中固定要求输出形状为
/// `{"q": ..., "correct": ..., "wrong": [3 项]}`，
/// 并要求四个答案风格一致（单位、格式、长度相近）。
///
/// # 返回
/// 返回 (指令文本, 实际抽取到的子主题)
pub fn build_prompt(subject: &str, difficulty: &str) -> (String, String) {
    let subtopic = pick_subtopic(subject);
    let instruction = format!(
        "Generate exactly one {difficulty} difficulty quiz question about \"{subtopic}\". \
         Respond with a single JSON object of this exact shape: \
         {{\"q\": \"<question text>\", \"correct\": \"<the correct answer>\", \
         \"wrong\": [\"<wrong answer 1>\", \"<wrong answer 2>\", \"<wrong answer 3>\"]}}. \
         The \"wrong\" array must contain exactly three incorrect answers. \
         All four answers must be stylistically consistent: same units, same format, \
         and similar length, so the correct one does not stand out. \
         Do not output anything outside the JSON object."
    );
    (instruction, subtopic)
}

/// 构造讲解生成指令
pub fn build_explain_prompt(question: &str, wrong: &str, correct: &str) -> String {
    format!(
        "A student answered a quiz question incorrectly. \
         Question: \"{question}\". \
         The student chose: \"{wrong}\". \
         The correct answer is: \"{correct}\". \
         In two or three short sentences, explain in simple language why \
         \"{correct}\" is correct and why \"{wrong}\" is not. \
         Respond with plain text only."
    )
}

/// 把文本转义为可安全嵌入信封字符串值的形式
///
/// 转义反斜杠和双引号，并把换行折叠为单个空格。
/// 单趟扫描，转义产生的字符不会被再次处理；每次请求只应用一次。
pub fn escape_for_envelope(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\r' => {
                // \r\n 折叠为一个空格
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                escaped.push(' ');
            }
            '\n' => escaped.push(' '),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_mentions_subtopic_and_difficulty() {
        let (instruction, subtopic) = build_prompt("Mathematics", "Hard");
        assert!(instruction.contains("Hard"));
        assert!(instruction.contains(&subtopic));
        assert!(instruction.contains("\"wrong\""));
        assert!(instruction.contains("exactly three incorrect answers"));
    }

    #[test]
    fn test_build_prompt_unknown_subject_is_own_topic() {
        let (instruction, subtopic) = build_prompt("Quantum Basket Weaving", "Easy");
        assert_eq!(subtopic, "Quantum Basket Weaving");
        assert!(instruction.contains("Quantum Basket Weaving"));
    }

    #[test]
    fn test_escape_quotes_backslashes_newlines() {
        let escaped = escape_for_envelope("He said \"hi\"\nback\\slash");
        assert_eq!(escaped, "He said \\\"hi\\\" back\\\\slash");
    }

    #[test]
    fn test_escape_crlf_collapses_to_single_space() {
        assert_eq!(escape_for_envelope("line one\r\nline two"), "line one line two");
        assert_eq!(escape_for_envelope("line one\rline two"), "line one line two");
    }

    #[test]
    fn test_escaped_text_survives_json_embedding() {
        // 含引号、反斜杠、换行的文本转义后嵌入 JSON 字符串字面量必须能解析
        let nasty = "A \"quoted\" part,\na back\\slash\r\nand more";
        let escaped = escape_for_envelope(nasty);
        let embedded = format!("{{\"prompt\": \"{}\"}}", escaped);
        let parsed: serde_json::Value = serde_json::from_str(&embedded).unwrap();
        let round_tripped = parsed["prompt"].as_str().unwrap();
        assert_eq!(round_tripped, "A \"quoted\" part, a back\\slash and more");
    }
}
