//! 题目合成与讲解生成接口

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::models::QuizQuestion;

const DEFAULT_SUBJECT: &str = "General Knowledge";
const DEFAULT_DIFFICULTY: &str = "Medium";

#[derive(Debug, Deserialize)]
pub struct QuestionParams {
    subject: Option<String>,
    difficulty: Option<String>,
}

/// `GET /api/ai/get_question?subject=&difficulty=`
///
/// 缺失的科目默认 "General Knowledge"，缺失的难度默认 "Medium"。
/// 流程层保证永不失败，本接口总是返回 200。
pub async fn get_question(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QuestionParams>,
) -> Json<QuizQuestion> {
    let subject = params
        .subject
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SUBJECT);
    let difficulty = params
        .difficulty
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_DIFFICULTY);

    Json(state.synthesis.generate_question(subject, difficulty).await)
}

#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    question: String,
    wrong: String,
    correct: String,
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    explanation: String,
}

/// `POST /api/ai/explain`
pub async fn explain(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExplainRequest>,
) -> Json<ExplainResponse> {
    let explanation = state
        .explain
        .explain(&request.question, &request.wrong, &request.correct)
        .await;
    Json(ExplainResponse { explanation })
}
