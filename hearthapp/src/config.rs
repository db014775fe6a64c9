use clap::Parser;

#[derive(Clone, Debug, Parser)]
pub struct Config {
    #[clap(
        long,
        value_name = "HEARTH_DB_URL",
        env = "HEARTH_DB_URL",
        default_value = "sqlite:hearth.db?mode=rwc",
    )]
    pub hearth_db_url: String,
    #[clap(
        long,
        value_name = "HTTP_LISTEN",
        env = "HTTP_LISTEN",
        default_value = "127.0.0.1:8000",
    )]
    pub http_listen: String,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}
