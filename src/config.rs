#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub gemini_api_key: String,
}

impl Config {
    pub fn init() -> Config {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let jwt_secret = std::env::var("JWT_SECRET_KEY").expect("JWT_SECRET_KEY must be set");

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8000);

        // An empty key makes the chat relay answer with its misconfiguration
        // fallback instead of calling upstream.
        let gemini_api_key = std::env::var("GEMINI_API_KEY").unwrap_or_else(|_| "".to_string());

        Config {
            database_url,
            jwt_secret,
            port,
            gemini_api_key,
        }
    }
}
