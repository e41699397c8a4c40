use anyhow::Result;
use scraper::{ElementRef, Html};
use serde::Serialize;

use crate::{
    crawler::screener::ScreenerSource,
    util::{http::element, map::LabeledMap},
};

pub const NO_COMPANY_ID: &str = "Company ID not found, so commentary not fetched.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Commentary {
    /// heading ("About", "Key Points") => body text
    Entries(LabeledMap<String>),
    Unavailable { info: String },
}

impl Commentary {
    pub fn unavailable(info: impl Into<String>) -> Self {
        Commentary::Unavailable { info: info.into() }
    }
}

/// Fetches and parses the commentary fragment of a company.
pub async fn visit<S>(source: &S, company_id: &str, referer: &str) -> Result<LabeledMap<String>>
where
    S: ScreenerSource + ?Sized,
{
    let html = source.commentary(company_id, referer).await?;
    Ok(parse_commentary_html(&html))
}

/// Each `div.strong.upper.letter-spacing` heading maps to the text of the next sibling `div.sub`.
pub fn parse_commentary_html(html: &str) -> LabeledMap<String> {
    let document = Html::parse_fragment(html);
    let mut commentary = LabeledMap::new();
    let Ok(headings) = element::selector("div.strong.upper.letter-spacing") else {
        return commentary;
    };

    for heading in document.select(&headings) {
        if let Some(sub) = next_sub(&heading) {
            commentary.insert(
                element::clean_text(&heading),
                element::joined_text(&sub, " "),
            );
        }
    }

    commentary
}

fn next_sub<'a>(heading: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "div" && e.value().classes().any(|c| c == "sub"))
}
