//! 平面文件题库接口

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct BankParams {
    subject: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BankQuestionResponse {
    subject: String,
    question: String,
    options: Vec<String>,
    answer: usize,
}

/// `GET /api/get_question?subject=`
///
/// 未知科目回退到随机已知科目；题库为空时返回错误文案题目。
pub async fn get_question(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BankParams>,
) -> Json<BankQuestionResponse> {
    let subject = params.subject.as_deref().unwrap_or("");

    match state.bank.pick_random(subject) {
        Some((subject, question)) => Json(BankQuestionResponse {
            subject,
            question: question.question,
            options: question.options,
            answer: question.correct_index,
        }),
        None => Json(BankQuestionResponse {
            subject: String::new(),
            question: "Error: Database empty.".to_string(),
            options: Vec::new(),
            answer: 0,
        }),
    }
}
