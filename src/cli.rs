use clap::Parser;

use crate::config::Screener;

#[derive(Parser, Debug)]
#[command(version, about = "Scrape one company page from screener.in into JSON", long_about = None)]
pub struct Cli {
    /// Ticker used in the company page path, e.g. KOTAKBANK.
    ///
    /// Ignored when `--url` is given.
    #[arg(default_value = "KOTAKBANK")]
    pub symbol: String,

    /// Full company page URL; takes precedence over the symbol.
    #[arg(short, long)]
    pub url: Option<String>,

    /// Use the standalone statements instead of the consolidated ones.
    #[arg(long)]
    pub standalone: bool,

    /// Directory the JSON (and chart) are written to.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Render the cash flow series as an SVG line chart.
    #[arg(long)]
    pub plot: bool,

    /// Skip the commentary request.
    #[arg(long)]
    pub no_commentary: bool,

    /// Fetch the breakdown of every expandable statement row.
    #[arg(long)]
    pub expand_schedules: bool,
}

impl Cli {
    /// Resolves the company page to scrape.
    pub fn company_url(&self, screener: &Screener) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }

        let symbol = self.symbol.trim().to_uppercase();
        if screener.consolidated && !self.standalone {
            format!("https://{}/company/{}/consolidated/", screener.host, symbol)
        } else {
            format!("https://{}/company/{}/", screener.host, symbol)
        }
    }
}
