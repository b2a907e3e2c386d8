//! # AI Quiz Server
//!
//! 一个为教育小游戏提供测验题目的 HTTP 服务
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 封装对外部生成服务的调用
//! - `OllamaClient` - 唯一的推理后端实现，提供 generate() 能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个题目
//! - `topic_catalog` - 科目 → 子主题抽取能力
//! - `prompt_builder` - 提示词构造与转义能力
//! - `validator` - 响应解析与修复能力
//! - `shuffler` - 选项乱序能力
//! - `question_bank` - 平面文件题库能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次生成"的完整处理流程
//! - `SynthesisFlow` - 题目合成（prompt → 推理 → 校验 → 乱序 → 兜底）
//! - `ExplainFlow` - 讲解生成（单次尝试，失败返回固定提示）
//!
//! ### ④ 接口层（Api）
//! - `api/` - axum 路由与请求/响应结构体
//!
//! ## 层次关系
//!
//! ```text
//! api (HTTP 路由)
//!     ↓
//! workflow (SynthesisFlow / ExplainFlow)
//!     ↓
//! services (catalog / prompt / validator / shuffler / bank)
//!     ↓
//! clients (OllamaClient)
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{InferenceBackend, OllamaClient, OutputFormat};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::QuizQuestion;
pub use services::QuestionBank;
pub use workflow::{fallback_question, ExplainFlow, SynthesisFlow};
