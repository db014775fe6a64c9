use clap::Parser;
use hearthapp::config::Config;
use hearthapp::http;
use hearthctrl::Builder;
use hearthdb_sqlite::SqliteBackend;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();
    stderrlog::new()
        .module(module_path!())
        .verbosity((config.verbose as usize) + 2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;
    let backend = SqliteBackend::from_url(&config.hearth_db_url).await?;
    let platform = Builder::new()
        .inventory_platform(backend)
        .build();
    http::serve(config, platform).await
}
