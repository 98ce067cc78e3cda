//! One-shot probe verifying the configured customer directory is reachable.

use std::env;

use config::Config;
use dotenvy::dotenv;

use custodesk::config::DirectoryConfig;
use custodesk::directory::CustomerReader;
use custodesk::directory::http::HttpCustomerDirectory;
use custodesk::query::CustomerListQuery;

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default").required(false))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (with a prefix of DIRECTORY)
        .add_source(config::Environment::with_prefix("DIRECTORY"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let directory_config = match settings.try_deserialize::<DirectoryConfig>() {
        Ok(directory_config) => directory_config,
        Err(err) => {
            log::error!("Error loading directory config: {err}");
            std::process::exit(1);
        }
    };

    let directory = match HttpCustomerDirectory::new(&directory_config) {
        Ok(directory) => directory,
        Err(err) => {
            log::error!("Error building directory client: {err}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Probing customer directory at {}",
        directory_config.base_url
    );

    match directory.list_customers(CustomerListQuery::default()).await {
        Ok((meta, customers)) => {
            log::info!(
                "Directory reachable: {} customers across {} pages",
                meta.total_count,
                meta.page_count
            );
            for customer in &customers {
                log::info!(
                    "  #{} {} <{}>",
                    customer.id,
                    customer.full_name(),
                    customer.email
                );
            }
        }
        Err(err) => {
            log::error!("Directory probe failed: {err}");
            std::process::exit(1);
        }
    }
}
