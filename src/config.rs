use crate::errors::AppError;

pub const DEFAULT_MINIMUM_WAGE: f64 = 15000.0;

/// Runtime configuration resolved once at startup and threaded through
/// `AppState`; handlers never read the environment directly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Lower bound any posted or offered salary must meet.
    pub minimum_wage: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            minimum_wage: DEFAULT_MINIMUM_WAGE,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let minimum_wage = match std::env::var("MINIMUM_WAGE") {
            Ok(raw) => raw
                .parse::<f64>()
                .map_err(|_| AppError::configuration("MINIMUM_WAGE must be a number"))?,
            Err(_) => DEFAULT_MINIMUM_WAGE,
        };

        Ok(Self { minimum_wage })
    }
}
