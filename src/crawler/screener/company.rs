use std::time::Instant;

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use serde::{Serialize, Serializer};

use crate::{
    calculation::growth::{self as computed, ComputedGrowth},
    crawler::screener::{
        commentary::{self, Commentary, NO_COMPANY_ID},
        growth::{self, GrowthTables},
        schedule,
        section::{self, SectionData},
        ScreenerSource, VisitOptions,
    },
    declare::SectionKind,
    logging,
    util::{http::element, map::LabeledMap},
};

pub const UNKNOWN_COMPANY: &str = "UnknownCompany";

static COMPANY_ID: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r#"data-row-company-id="(\d+)""#).ok());

/// Everything scraped from one company page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyReport {
    pub company_name: String,
    #[serde(serialize_with = "id_or_na")]
    pub company_id: Option<String>,
    /// nav label => section data, in nav order
    #[serde(flatten)]
    pub sections: LabeledMap<SectionData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_metrics: Option<GrowthTables>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_growth: Option<ComputedGrowth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary: Option<Commentary>,
}

fn id_or_na<S: Serializer>(id: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(id.as_deref().unwrap_or("N/A"))
}

impl CompanyReport {
    fn new(company_name: String, company_id: Option<String>) -> Self {
        CompanyReport {
            company_name,
            company_id,
            sections: LabeledMap::new(),
            growth_metrics: None,
            computed_growth: None,
            commentary: None,
        }
    }
}

pub fn parse_company_name(document: &Html) -> String {
    let root = document.root_element();
    element::select_first(&root, "div.company-nav h1.h2.shrink-text")
        .or_else(|| element::select_first(&root, "h1.h2"))
        .map(|h1| element::clean_text(&h1))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_COMPANY.to_string())
}

/// 公司內部 id 只出現在 style 標籤內的 CSS selector
pub fn parse_company_id(document: &Html) -> Option<String> {
    let re = COMPANY_ID.as_ref()?;
    let styles = element::selector("style").ok()?;

    document.select(&styles).find_map(|style| {
        let css = style.text().collect::<String>();
        re.captures(&css)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

/// Extracts everything the page itself holds.
///
/// The flag is false when the page has no sub-nav; the report then only carries the name and id.
pub fn parse_company_page(html: &str) -> (CompanyReport, bool) {
    let document = Html::parse_document(html);
    let mut report = CompanyReport::new(parse_company_name(&document), parse_company_id(&document));

    let Some(sections) = section::parse_sections(&document) else {
        logging::warn_file_async(format!(
            "Company sub-navigation not found for {}",
            report.company_name
        ));
        return (report, false);
    };

    report.growth_metrics = growth::parse_growth_tables(&document);
    report.computed_growth = Some(computed::compute(
        section::find_statement(&sections, SectionKind::ProfitLoss),
        section::find_statement(&sections, SectionKind::Quarters),
    ));
    report.sections = sections;

    (report, true)
}

/// Scrapes one company page and the requests hanging off it.
///
/// Only the company page itself is fatal; commentary and schedule failures are logged.
pub async fn visit<S>(source: &S, url: &str, options: &VisitOptions) -> Result<CompanyReport>
where
    S: ScreenerSource + ?Sized,
{
    let start = Instant::now();
    let html = source.company_page(url).await?;
    let (mut report, complete) = parse_company_page(&html);

    if !complete {
        return Ok(report);
    }

    if let (true, Some(id)) = (options.expand_schedules, report.company_id.clone()) {
        let fetched =
            schedule::expand(source, &id, options.consolidated, &mut report.sections).await;
        logging::info_file_async(format!(
            "{} schedules fetched for {}",
            fetched, report.company_name
        ));
    }

    if options.commentary {
        report.commentary = Some(match &report.company_id {
            Some(id) => match commentary::visit(source, id, url).await {
                Ok(entries) => Commentary::Entries(entries),
                Err(why) => {
                    logging::error_file_async(format!(
                        "Failed to fetch commentary of {} because {:?}",
                        report.company_name, why
                    ));
                    Commentary::unavailable(format!("Error fetching commentary: {}", why))
                }
            },
            None => Commentary::unavailable(NO_COMPANY_ID),
        });
    }

    logging::info_file_async(format!(
        "{} scraped in {} ms",
        report.company_name,
        start.elapsed().as_millis()
    ));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use anyhow::anyhow;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use super::*;
    use crate::crawler::screener::fixture::{COMMENTARY, COMPANY_PAGE};

    /// Serves canned markup and counts the calls it gets.
    struct StubSource {
        page: &'static str,
        commentary_fails: bool,
        commentary_calls: AtomicUsize,
        schedule_calls: AtomicUsize,
    }

    impl StubSource {
        fn new(page: &'static str) -> Self {
            StubSource {
                page,
                commentary_fails: false,
                commentary_calls: AtomicUsize::new(0),
                schedule_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ScreenerSource for StubSource {
        async fn company_page(&self, _url: &str) -> Result<String> {
            Ok(self.page.to_string())
        }

        async fn commentary(&self, company_id: &str, _referer: &str) -> Result<String> {
            self.commentary_calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(company_id, "1818");
            if self.commentary_fails {
                return Err(anyhow!("403 Forbidden"));
            }
            Ok(COMMENTARY.to_string())
        }

        async fn schedule(
            &self,
            _company_id: &str,
            parent: &str,
            section: &str,
            _consolidated: bool,
        ) -> Result<Value> {
            self.schedule_calls.fetch_add(1, Ordering::SeqCst);
            if section == "quarters" {
                return Err(anyhow!("502 Bad Gateway"));
            }
            Ok(json!({ "data": { parent: { "Mar 2024": "1" } } }))
        }
    }

    const URL: &str = "https://www.screener.in/company/KOTAKBANK/consolidated/";

    #[test]
    fn test_parse_company_name_and_id() {
        let document = Html::parse_document(COMPANY_PAGE);
        assert_eq!(parse_company_name(&document), "Kotak Mahindra Bank Ltd");
        assert_eq!(parse_company_id(&document), Some("1818".to_string()));

        let document = Html::parse_document(r#"<h1 class="h2">Fallback Ltd</h1>"#);
        assert_eq!(parse_company_name(&document), "Fallback Ltd");
        assert_eq!(parse_company_id(&document), None);

        let document = Html::parse_document("<p>nothing</p>");
        assert_eq!(parse_company_name(&document), UNKNOWN_COMPANY);
    }

    #[tokio::test]
    async fn test_visit_full_page() {
        let source = StubSource::new(COMPANY_PAGE);
        let report = visit(&source, URL, &VisitOptions::default()).await.unwrap();

        assert_eq!(report.company_name, "Kotak Mahindra Bank Ltd");
        assert_eq!(report.sections.len(), 11);
        assert_eq!(source.commentary_calls.load(Ordering::SeqCst), 1);
        assert_eq!(source.schedule_calls.load(Ordering::SeqCst), 0);

        let text = serde_json::to_string(&report).unwrap();
        let at = |key: &str| text.find(&format!("\"{}\":", key)).unwrap_or(usize::MAX);
        assert_eq!(at("company_name"), 1);
        assert!(at("company_id") < at("Summary"));
        assert!(at("Summary") < at("Documents"));
        assert!(at("Documents") < at("growth_metrics"));
        assert!(at("growth_metrics") < at("computed_growth"));
        assert!(at("computed_growth") < at("commentary"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["company_id"], "1818");
        assert_eq!(json["growth_metrics"]["Compounded Sales Growth"]["TTM"], "21%");
        assert_eq!(json["computed_growth"]["Compounded Sales Growth"]["TTM"], 25.0);
        assert_eq!(
            json["commentary"]["About"],
            "Kotak Mahindra Bank provides banking services."
        );
        assert!(json["Profit & Loss"]["profit_loss"].get("schedules").is_none());
    }

    #[tokio::test]
    async fn test_visit_expands_schedules() {
        let source = StubSource::new(COMPANY_PAGE);
        let options = VisitOptions {
            commentary: false,
            expand_schedules: true,
            consolidated: true,
        };
        let report = visit(&source, URL, &options).await.unwrap();

        // Revenue in quarters and in profit & loss
        assert_eq!(source.schedule_calls.load(Ordering::SeqCst), 2);
        assert_eq!(source.commentary_calls.load(Ordering::SeqCst), 0);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["Profit & Loss"]["profit_loss"]["schedules"]["Revenue"],
            json!({ "Revenue": { "Mar 2024": "1" } })
        );
        assert_eq!(json["Quarters"]["quarterly_results"]["schedules"]["Revenue"], json!([]));
        assert!(json.get("commentary").is_none());
    }

    #[tokio::test]
    async fn test_visit_commentary_failure_is_not_fatal() {
        let mut source = StubSource::new(COMPANY_PAGE);
        source.commentary_fails = true;
        let report = visit(&source, URL, &VisitOptions::default()).await.unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["commentary"]["info"]
            .as_str()
            .unwrap_or_default()
            .contains("403 Forbidden"));
        assert!(json["Cash Flow"]["cash_flow"]["series"].is_object());
    }

    #[tokio::test]
    async fn test_visit_without_company_id() {
        const PAGE: &str = r##"<html><body>
            <div class="company-nav"><h1 class="h2 shrink-text">No Id Ltd</h1></div>
            <div class="sub-nav-holder"><nav class="sub-nav"><a href="#top">Summary</a></nav></div>
            <section id="top"><div class="company-profile"><div class="about"><p>About us</p></div></div></section>
        </body></html>"##;

        let source = StubSource::new(PAGE);
        let report = visit(&source, URL, &VisitOptions::default()).await.unwrap();

        assert_eq!(source.commentary_calls.load(Ordering::SeqCst), 0);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["company_id"], "N/A");
        assert_eq!(json["commentary"]["info"], NO_COMPANY_ID);
        assert!(json.get("growth_metrics").is_none());
        assert!(json["computed_growth"]["Compounded Sales Growth"]["TTM"].is_null());
    }

    #[tokio::test]
    async fn test_visit_without_sub_nav() {
        let source = StubSource::new("<html><body><h1 class=\"h2\">Bare Ltd</h1></body></html>");
        let report = visit(&source, URL, &VisitOptions::default()).await.unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json, json!({ "company_name": "Bare Ltd", "company_id": "N/A" }));
        assert_eq!(source.commentary_calls.load(Ordering::SeqCst), 0);
    }
}
