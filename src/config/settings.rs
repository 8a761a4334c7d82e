use serde::Deserialize;

/// All pipeline configuration, read once and injected into adapters at
/// construction. Nothing reads the environment after startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub transcription: TranscriptionSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub api_key: String,
    pub base_url: String,
    pub poll_interval_ms: u64,
    pub poll_deadline_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
    pub max_tokens: usize,
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            transcription: TranscriptionSettings {
                api_key: env_or("ASSEMBLYAI_API_KEY", ""),
                base_url: env_or("ASSEMBLYAI_BASE_URL", "https://api.assemblyai.com"),
                poll_interval_ms: env_parse("ASSEMBLYAI_POLL_INTERVAL_MS", 3000),
                poll_deadline_ms: env_parse("ASSEMBLYAI_POLL_DEADLINE_MS", 300_000),
            },
            llm: LlmSettings {
                api_key: env_or("OPENROUTER_API_KEY", ""),
                base_url: env_or("OPENROUTER_BASE_URL", "https://openrouter.ai/api/v1"),
                chat_model: env_or("FEEDBACK_MODEL", "deepseek/deepseek-chat"),
                max_tokens: env_parse("FEEDBACK_MAX_TOKENS", 1024),
                temperature: env_parse("FEEDBACK_TEMPERATURE", 0.7),
            },
            logging: LoggingSettings {
                level: env_or("LOG_LEVEL", "info"),
                enable_json: std::env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
