use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use ai_quiz_server::api::{self, AppState};
use ai_quiz_server::clients::{InferenceBackend, OllamaClient};
use ai_quiz_server::config::Config;
use ai_quiz_server::services::QuestionBank;
use ai_quiz_server::utils::logging;
use ai_quiz_server::workflow::{ExplainFlow, SynthesisFlow};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);
    logging::log_startup(config.http_port, &config.model_name, &config.ollama_base_url);

    // 启动时读入平面文件题库，之后只读
    let bank = QuestionBank::load(&config.questions_csv);

    // 推理客户端（带请求超时），合成与讲解共享同一个后端
    let backend: Arc<dyn InferenceBackend> = Arc::new(OllamaClient::new(&config)?);

    let state = Arc::new(AppState {
        synthesis: SynthesisFlow::new(Arc::clone(&backend), config.max_attempts),
        explain: ExplainFlow::new(backend),
        bank,
    });

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("✓ 服务已就绪: http://{}", addr);

    axum::serve(listener, api::router(state)).await?;

    Ok(())
}
