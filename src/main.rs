use anyhow::Result;
use clap::Parser;

pub mod calculation;
pub mod cli;
pub mod config;
pub mod crawler;
pub mod declare;
pub mod export;
pub mod logging;
pub mod util;

use crate::{
    cli::Cli,
    crawler::screener::{self, HttpSource, VisitOptions},
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // reqwest 使用 rustls-no-provider，需要先指定加密套件
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        logging::warn_file_async("rustls crypto provider was already installed".to_string());
    }

    let cli = Cli::parse();
    let settings = config::SETTINGS.clone().merge_cli(&cli);
    let url = cli.company_url(&settings.screener);

    logging::info_console(format!("Scraping {}", url));

    let source = HttpSource::new(&settings.screener);
    let options = VisitOptions::from(&settings);
    let report = screener::visit(&source, &url, &options).await?;

    let path = export::json::save(&report, &settings.output.dir).await?;
    logging::info_console(format!(
        "Scraped data (including growth tables) saved to {}",
        path.display()
    ));

    if settings.output.plot {
        match export::chart::render_cash_flow(&report, &settings.output.dir) {
            Ok(Some(chart)) => {
                logging::info_console(format!("Cash flow chart saved to {}", chart.display()))
            }
            Ok(None) => logging::warn_file_async(format!(
                "No cash flow data for {}, chart skipped",
                report.company_name
            )),
            Err(why) => {
                logging::error_file_async(format!("Failed to render chart because {:?}", why))
            }
        }
    }

    Ok(())
}
