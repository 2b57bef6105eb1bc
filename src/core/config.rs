use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub user_email: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let api_base_url =
            env::var("CLINIC_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        let api_token = env::var("CLINIC_API_TOKEN").ok();
        let user_email = env::var("CLINIC_USER_EMAIL").ok();

        Self {
            api_base_url,
            api_token,
            user_email,
        }
    }
}
