//! Command handlers for the CLI

use chrono::Duration;
use reklamap_api::{issue_token, run_server, ApiConfig, JwtConfig};
use reklamap_core::logging::operations;
use reklamap_core::types::{ReferenceData, Role};
use reklamap_db::{DatabaseConfig, ReklamapDatabase};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub type CmdResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Database settings shared by every command that opens the store
pub struct DbArgs {
    pub url: String,
    pub max_connections: u32,
}

impl DbArgs {
    fn config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.url.clone(),
            max_connections: self.max_connections,
        }
    }
}

async fn open(db: &DbArgs) -> Result<ReklamapDatabase, Box<dyn std::error::Error + Send + Sync>> {
    let database = ReklamapDatabase::connect(&db.config()).await?;
    database.init_schema().await?;
    Ok(database)
}

pub async fn init(db: &DbArgs) -> CmdResult {
    println!("Initializing ReklaMap database at {}...", db.url);
    open(db).await?;
    info!(operation = operations::INIT_SCHEMA, url = %db.url, "Schema initialized");
    println!("Database schema initialized successfully.");
    Ok(())
}

pub async fn start(db: &DbArgs, host: String, port: u16, jwt_secret: String, cors: bool) -> CmdResult {
    println!("Starting ReklaMap API server on {}:{}...", host, port);

    let database = Arc::new(open(db).await?);
    let config = ApiConfig {
        host,
        port,
        enable_cors: cors,
        jwt_secret,
    };

    run_server(config, database).await
}

pub async fn seed(db: &DbArgs, file: &Path) -> CmdResult {
    let raw = tokio::fs::read_to_string(file).await?;
    let data: ReferenceData = serde_json::from_str(&raw)?;

    let database = open(db).await?;
    let rows = database.seed_reference_data(&data).await?;

    info!(
        operation = operations::SEED,
        areas = data.areas.len(),
        blocks = data.blocks.len(),
        beneficiaries = data.beneficiaries.len(),
        "Reference data loaded"
    );
    println!(
        "Seeded {} rows ({} areas, {} blocks, {} beneficiaries) from {}",
        rows,
        data.areas.len(),
        data.blocks.len(),
        data.beneficiaries.len(),
        file.display()
    );
    Ok(())
}

pub fn token(sub: &str, name: Option<&str>, role: &str, hours: i64, jwt_secret: String) -> CmdResult {
    if hours <= 0 {
        return Err("Token lifetime must be at least one hour".into());
    }
    let role = Role::parse(role)?;
    let config = JwtConfig::try_new(jwt_secret)?;

    let token = issue_token(&config, sub, name, role, Duration::hours(hours))
        .map_err(|e| format!("Failed to issue token: {:?}", e))?;

    println!("{}", token);
    Ok(())
}

pub async fn status(api_url: &str) -> CmdResult {
    println!("Checking ReklaMap server status at {}...", api_url);

    let client = reqwest::Client::new();
    let base = api_url.trim_end_matches('/');
    for path in ["health", "ready"] {
        let response = client
            .get(format!("{}/{}", base, path))
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;
        println!("{}: {}", path, serde_json::to_string_pretty(&response)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_rejects_short_secret() {
        assert!(token("user-1", None, "complainant", 1, "short".to_string()).is_err());
    }

    #[test]
    fn test_token_rejects_unknown_role() {
        let secret = "x".repeat(32);
        assert!(token("user-1", None, "superuser", 1, secret.clone()).is_err());
        assert!(token("Inspector Lim", Some("Inspector Lim"), "staff", 1, secret).is_ok());
    }

    #[tokio::test]
    async fn test_seed_from_file() {
        let path = std::env::temp_dir().join(format!("reklamap-seed-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{
                "areas": [{"area_id": 1, "area_code": "BGS", "area_name": "Bagong Silang"}],
                "blocks": [{"block_id": 10, "area_id": 1, "block_no": 3}],
                "beneficiaries": [{"beneficiary_id": 100, "area_id": 1, "block_id": 10,
                                   "first_name": "Juan", "last_name": "Dela Cruz", "lot_no": 12}]
            }"#,
        )
        .unwrap();

        let db = DbArgs {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        };
        seed(&db, &path).await.unwrap();
        std::fs::remove_file(&path).ok();
    }
}
