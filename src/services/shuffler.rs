//! 选项乱序 - 业务能力层
//!
//! 校验修复后的题目正确答案固定在 0 号位，直接返回会被玩家看穿。
//! 本模块对四个选项做均匀随机置换，并重新计算正确选项下标。

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::models::QuizQuestion;

/// 均匀随机置换选项并重算正确下标
///
/// 每次调用使用独立的熵源生成器，不与其他请求共享随机状态。
/// 置换后按首个匹配正确答案文本的位置更新 `correct_index`；
/// 选项文本重复时取第一个匹配位置（已知边界情况，不做去重）。
pub fn shuffle(mut question: QuizQuestion) -> QuizQuestion {
    let correct_text = match question.options.get(question.correct_index) {
        Some(text) => text.clone(),
        None => return question,
    };

    let mut rng = StdRng::from_entropy();
    question.options.shuffle(&mut rng);

    question.correct_index = question
        .options
        .iter()
        .position(|option| *option == correct_text)
        .unwrap_or(0);

    question
}
