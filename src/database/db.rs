use crate::config::AppConfig;
use log::{info, warn};
use mongodb::bson::doc;
use mongodb::{Client, options::ClientOptions};
use std::error::Error;

pub struct Database {
    pub client: Client,
}

impl Database {
    pub async fn init(config: &AppConfig) -> Result<Self, Box<dyn Error>> {
        let mut client_options = ClientOptions::parse(&config.mongodb_uri).await?;
        client_options.app_name = Some("volunteer_backend".to_string());

        let client = Client::with_options(client_options)?;

        // The driver connects lazily; a failed ping is reported but not fatal.
        match client.database("admin").run_command(doc! {"ping": 1}).await {
            Ok(_) => info!("Pinged your deployment. Connected successfully to MongoDB"),
            Err(e) => warn!("MongoDB ping failed, continuing with lazy connection: {}", e),
        }

        Ok(Self { client })
    }
}

pub async fn connect_to_mongo(config: &AppConfig) -> Result<Client, Box<dyn Error>> {
    let database = Database::init(config).await.map_err(|e| {
        log::error!("Failed to initialize database: {:?}", e);
        e
    })?;
    Ok(database.client)
}
