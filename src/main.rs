use clap::Parser;
use client::BucklerClient;
use error::Error;
use tracing_subscriber::EnvFilter;

mod analysis;
mod client;
mod error;
mod response;

const SAMPLE_CAPCOM_ID: i64 = 1681080405;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Finds the highest ranked Street Fighter 6 character on an account",
    long_about = None
)]
struct Cli {
    /// The Capcom ID to look up.
    #[clap(short = 'c', long = "cid", default_value_t = SAMPLE_CAPCOM_ID)]
    pub capcom_id: i64,
    /// Session cookie copied from a logged in Buckler's Boot Camp browser session.
    #[clap(long, env = "BUCKLER_COOKIE", hide_env_values = true)]
    pub cookie: String,
    #[clap(long, default_value_t = client::CURRENT_SEASON, allow_negative_numbers = true)]
    pub season: i64,
    #[clap(long, default_value = "en")]
    pub locale: String,
    /// Print the summary as JSON.
    #[clap(long)]
    pub json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(
        capcom_id = cli.capcom_id,
        season = cli.season,
        locale = %cli.locale,
        "parsed arguments"
    );

    let client = BucklerClient::new(cli.cookie)
        .season(cli.season)
        .locale(cli.locale);

    if !cli.json {
        println!(
            "Looking up highest character and rank belonging to account {}!",
            cli.capcom_id
        );
    }

    let info = client.fetch_league_info(cli.capcom_id).await?;
    let summary = analysis::analyze(&info);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_sample_account() {
        let cli = Cli::try_parse_from(["buckler", "--cookie", "buckler_id=abc"]).unwrap();

        assert_eq!(cli.capcom_id, SAMPLE_CAPCOM_ID);
        assert_eq!(cli.season, -1);
        assert_eq!(cli.locale, "en");
        assert!(!cli.json);
    }

    #[test]
    fn cli_accepts_cid_and_negative_season() {
        let cli = Cli::try_parse_from([
            "buckler", "--cid", "3425126856", "--cookie", "x", "--season", "-1", "--json",
        ])
        .unwrap();

        assert_eq!(cli.capcom_id, 3425126856);
        assert!(cli.json);
    }

    #[test]
    fn cli_rejects_non_numeric_cid() {
        assert!(Cli::try_parse_from(["buckler", "--cid", "abc", "--cookie", "x"]).is_err());
    }

    #[test]
    fn cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
