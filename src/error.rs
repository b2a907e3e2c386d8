use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 推理服务传输错误
    Transport(TransportError),
    /// 生成结果校验错误
    Validation(ValidationError),
    /// 文件操作错误
    File(FileError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Transport(e) => write!(f, "传输错误: {}", e),
            AppError::Validation(e) => write!(f, "校验错误: {}", e),
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Transport(e) => Some(e),
            AppError::Validation(e) => Some(e),
            AppError::File(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 推理服务传输错误
///
/// 端点不可达、超时、空响应都归入此类，由流程层决定是否重试
#[derive(Debug)]
pub enum TransportError {
    /// 网络请求失败
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 请求超过截止时间
    Timeout {
        endpoint: String,
        timeout_secs: u64,
    },
    /// 服务返回非成功状态码
    BadStatus {
        endpoint: String,
        status: u16,
    },
    /// 服务返回空响应
    EmptyResponse {
        model: String,
    },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::RequestFailed { endpoint, source } => {
                write!(f, "推理请求失败 ({}): {}", endpoint, source)
            }
            TransportError::Timeout {
                endpoint,
                timeout_secs,
            } => {
                write!(f, "推理请求超时 ({}): 超过 {} 秒", endpoint, timeout_secs)
            }
            TransportError::BadStatus { endpoint, status } => {
                write!(f, "推理服务返回错误状态 ({}): HTTP {}", endpoint, status)
            }
            TransportError::EmptyResponse { model } => {
                write!(f, "推理服务返回空响应 (模型: {})", model)
            }
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::RequestFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 生成结果校验错误
///
/// 双层编码的任意一层解析失败、字段缺失或类型不符都归入此类
#[derive(Debug)]
pub enum ValidationError {
    /// 外层响应信封解析失败
    EnvelopeParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 内层题目载荷解析失败
    PayloadParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EnvelopeParseFailed { source } => {
                write!(f, "响应信封解析失败: {}", source)
            }
            ValidationError::PayloadParseFailed { source } => {
                write!(f, "题目载荷解析失败: {}", source)
            }
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValidationError::EnvelopeParseFailed { source }
            | ValidationError::PayloadParseFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 读取文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

// ========== 从常见错误类型转换 ==========

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: String::new(),
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建推理请求失败错误
    pub fn transport_request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Transport(TransportError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建推理请求超时错误
    pub fn transport_timeout(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        AppError::Transport(TransportError::Timeout {
            endpoint: endpoint.into(),
            timeout_secs,
        })
    }

    /// 创建错误状态码错误
    pub fn transport_bad_status(endpoint: impl Into<String>, status: u16) -> Self {
        AppError::Transport(TransportError::BadStatus {
            endpoint: endpoint.into(),
            status,
        })
    }

    /// 创建空响应错误
    pub fn transport_empty_response(model: impl Into<String>) -> Self {
        AppError::Transport(TransportError::EmptyResponse {
            model: model.into(),
        })
    }

    /// 创建外层信封解析错误
    pub fn envelope_parse_failed(
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Validation(ValidationError::EnvelopeParseFailed {
            source: Box::new(source),
        })
    }

    /// 创建内层载荷解析错误
    pub fn payload_parse_failed(
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Validation(ValidationError::PayloadParseFailed {
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
