// src/config/consts.rs

// Sources
pub const LOCALITY: &str = "Hyderabad";
pub const GOLD_URL: &str = "https://www.goodreturns.in/gold-rates/hyderabad.html";
pub const SILVER_URL: &str = "https://www.goodreturns.in/silver-rates/hyderabad.html";

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Local state
pub const PRICE_FILE: &str = "last_price.txt";
pub const STATE_SEP: char = '-';
pub const NOT_AVAILABLE: &str = "N/A";

// Extraction
pub const HEADING_TAGS: &[&str] = &["h2", "h3", "h4"];
pub const ONE_GRAM_LABELS: &[&str] = &["1", "1g", "1 gram", "1 gm"];

// Telegram
pub const TELEGRAM_API: &str = "https://api.telegram.org";
pub const PARSE_MODE: &str = "Markdown";
pub const TOKEN_VAR: &str = "TOKEN";
pub const CHAT_ID_VAR: &str = "CHAT_ID";
