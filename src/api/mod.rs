//! 接口层（Api Layer）
//!
//! ## 职责
//!
//! 本层只做 HTTP 进出：提取参数、填默认值、调用流程层、序列化响应。
//! 不出现重试、校验、随机等业务逻辑。
//!
//! ## 路由划分
//!
//! - `ai` - 题目合成与讲解生成（核心）
//! - `bank` - 平面文件题库随机抽题
//! - `games` - 确定性小游戏逻辑（算术集市、抛体板球、网格寻路）

pub mod ai;
pub mod bank;
pub mod games;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::services::QuestionBank;
use crate::workflow::{ExplainFlow, SynthesisFlow};

/// 路由层共享状态（启动后只读，无需加锁）
pub struct AppState {
    pub synthesis: SynthesisFlow,
    pub explain: ExplainFlow,
    pub bank: QuestionBank,
}

/// 组装全部路由
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/ai/get_question", get(ai::get_question))
        .route("/api/ai/explain", post(ai::explain))
        .route("/api/get_question", get(bank::get_question))
        .route("/api/math/problem", get(games::math_problem))
        .route("/api/physics/shot", post(games::physics_shot))
        .route("/api/tech/run", post(games::tech_run))
        .with_state(state)
}
