use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub run_migrations: bool,
    pub port: u16,
    /// Points credited back per currency unit when a withdrawal is rejected.
    /// The observed refund floors the raw amount, i.e. a rate of 1; the app UI
    /// claims a 10,000:1 display rate that the refund path never applied.
    pub refund_points_per_unit: i64,
    /// "noop" keeps ranking.update() as the observed placeholder; "recompute"
    /// dense-ranks all users by points.
    pub ranking_update_strategy: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;

        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;

        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let refund_points_per_unit = std::env::var("REFUND_POINTS_PER_UNIT")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<i64>()
            .context("REFUND_POINTS_PER_UNIT must be a valid i64 integer")?;

        if refund_points_per_unit <= 0 {
            return Err(anyhow!("REFUND_POINTS_PER_UNIT must be positive"));
        }

        let ranking_update_strategy =
            std::env::var("RANKING_UPDATE_STRATEGY").unwrap_or_else(|_| "noop".to_string());

        Ok(Self {
            database_url,
            jwt_secret,
            run_migrations,
            port,
            refund_points_per_unit,
            ranking_update_strategy,
        })
    }
}
