use hearthcore::platform::{DefaultInventoryPlatform, PlatformUrl};
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;

use crate::SqliteBackend;

impl PlatformUrl for SqliteBackend {
    fn url(&self) -> &str {
        self.url.as_ref()
    }
}

impl SqliteBackend {
    pub async fn connect(url: &str) -> Result<SqliteBackend, sqlx::Error> {
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            log::warn!("sqlite database {} does not exist; creating...", url);
            Sqlite::create_database(url).await?
        }

        let pool = SqlitePool::connect(url).await?;
        Ok(SqliteBackend {
            pool: Arc::new(pool),
            url: url.to_string(),
        })
    }

    pub async fn migrate(self) -> Result<Self, sqlx::Error> {
        sqlx::migrate!("./migrations").run(&*self.pool).await?;
        Ok(self)
    }

    /// Connect and migrate in one step; the form the server and the
    /// test suites use.
    pub async fn from_url(url: &str) -> Result<Self, sqlx::Error> {
        Self::connect(url)
            .await?
            .migrate()
            .await
    }
}

impl DefaultInventoryPlatform for SqliteBackend {}

mod ac;
mod category;
mod coating;
mod item;
mod location;
mod profile;
mod room;
mod task;
