pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_API_PATH: &str = "chat/completions";
pub const DEFAULT_API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_REFERER: &str = "http://localhost:3001";
pub const DEFAULT_TITLE: &str = "New Tab AI";

pub const DEFAULT_MODELS: &[&str] = &["openai/gpt-4o-mini", "anthropic/claude-3-haiku"];
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant integrated into a browser new-tab page. Be concise and helpful.";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 500;

pub const DEFAULT_BIND: &str = "127.0.0.1:3001";
