/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// HTTP 监听端口
    pub http_port: u16,
    /// 生成服务地址
    pub ollama_base_url: String,
    /// 生成模型名称
    pub model_name: String,
    /// 生成温度
    pub temperature: f32,
    /// 单次推理请求超时（秒）
    pub request_timeout_secs: u64,
    /// 题目合成最大尝试次数
    pub max_attempts: u32,
    /// 平面文件题库路径
    pub questions_csv: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 8080,
            ollama_base_url: "http://localhost:11434".to_string(),
            model_name: "llama3.2".to_string(),
            temperature: 0.8,
            request_timeout_secs: 30,
            max_attempts: 3,
            questions_csv: "questions.csv".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            http_port: std::env::var("HTTP_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.http_port),
            ollama_base_url: std::env::var("OLLAMA_BASE_URL").unwrap_or(default.ollama_base_url),
            model_name: std::env::var("MODEL_NAME").unwrap_or(default.model_name),
            temperature: std::env::var("TEMPERATURE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.temperature),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            max_attempts: std::env::var("MAX_ATTEMPTS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_attempts),
            questions_csv: std::env::var("QUESTIONS_CSV").unwrap_or(default.questions_csv),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
