//! 平面文件题库 - 业务能力层
//!
//! 启动时从 CSV 读入，之后只读，无需加锁。
//! 格式：`subject,question,opt1,opt2,opt3,opt4,ans_index`，坏行直接跳过。

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::models::QuizQuestion;
use crate::services::validator::OPTION_COUNT;

/// 按科目组织的只读题库
#[derive(Debug, Default)]
pub struct QuestionBank {
    subjects: HashMap<String, Vec<QuizQuestion>>,
}

impl QuestionBank {
    /// 从 CSV 文件加载题库
    ///
    /// 文件缺失不算致命错误：记一条警告并返回空题库。
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("⚠️ 题库文件 {} 读取失败: {}，题库将为空", path.display(), e);
                return Self::default();
            }
        };

        let bank = Self::from_csv(&content);
        info!(
            "✓ 题库加载完成: {} 个科目，共 {} 道题",
            bank.subject_count(),
            bank.question_count()
        );
        bank
    }

    /// 解析 CSV 文本
    pub fn from_csv(content: &str) -> Self {
        let mut subjects: HashMap<String, Vec<QuizQuestion>> = HashMap::new();

        for line in content.lines() {
            let row: Vec<&str> = line.split(',').collect();
            if row.len() < 7 {
                continue;
            }

            let Ok(correct_index) = row[6].trim().parse::<usize>() else {
                continue;
            };
            if correct_index >= OPTION_COUNT {
                continue;
            }

            subjects
                .entry(row[0].trim().to_string())
                .or_default()
                .push(QuizQuestion {
                    question: row[1].to_string(),
                    options: row[2..6].iter().map(|s| s.to_string()).collect(),
                    correct_index,
                });
        }

        Self { subjects }
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    pub fn question_count(&self) -> usize {
        self.subjects.values().map(Vec::len).sum()
    }

    /// 随机抽一道题
    ///
    /// 未知或缺失的科目回退到随机已知科目；空题库返回 `None`。
    /// 返回 (实际科目名, 题目)。
    pub fn pick_random(&self, subject: &str) -> Option<(String, QuizQuestion)> {
        let mut rng = StdRng::from_entropy();

        let (name, list) = match self.subjects.get_key_value(subject) {
            Some((name, list)) if !list.is_empty() => (name, list),
            _ => {
                let names: Vec<&String> = self
                    .subjects
                    .iter()
                    .filter(|(_, list)| !list.is_empty())
                    .map(|(name, _)| name)
                    .collect();
                let name = *names.choose(&mut rng)?;
                (name, self.subjects.get(name)?)
            }
        };

        let question = list.choose(&mut rng)?.clone();
        Some((name.clone(), question))
    }
}
