//! Sub-nav driven section lookup and the section → parser dispatch table.

use scraper::{ElementRef, Html};
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{
    crawler::screener::{
        summary::{self, Analysis, Summary},
        table::{self, PeerComparison, Statement},
    },
    declare::SectionKind,
    logging,
    util::{http::element, map::LabeledMap},
};

pub const NO_PARSER: &str = "No specialized parser for this section.";

/// A `#fragment` link of the company sub-nav.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub id: String,
}

/// What one section contributes to the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionData {
    Summary(Summary),
    Analysis(Analysis),
    Peers { peer_comparison: PeerComparison },
    Statement(StatementSection),
    Documents { documents_info: String },
    Unsupported { info: String },
}

impl SectionData {
    pub fn unsupported() -> Self {
        SectionData::Unsupported {
            info: NO_PARSER.to_string(),
        }
    }
}

/// A statement table, serialized under its kind's key (`profit_loss`, `cash_flow`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct StatementSection {
    pub kind: SectionKind,
    /// The page section id, sent back when asking for row schedules.
    pub section_id: String,
    pub statement: Statement,
}

impl Serialize for StatementSection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let key = self.kind.statement_key().unwrap_or(self.kind.as_ref());
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(key, &self.statement)?;
        map.end()
    }
}

/// Collects the sub-nav's in-page links. `None` when the sub-nav is missing.
pub fn nav_links(document: &Html) -> Option<Vec<NavLink>> {
    let root = document.root_element();
    let sub_nav = element::select_first(&root, "div.sub-nav-holder .sub-nav")?;
    let anchors = element::selector("a[href]").ok()?;

    let links = sub_nav
        .select(&anchors)
        .filter_map(|a| {
            let id = a.value().attr("href")?.strip_prefix('#')?.to_string();
            if id.is_empty() {
                return None;
            }

            let text = element::clean_text(&a);
            let label = if text.is_empty() { id.clone() } else { text };
            Some(NavLink { label, id })
        })
        .collect();

    Some(links)
}

/// `section#id`, falling back to `div#id`.
pub fn locate<'a>(document: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    let root = document.root_element();
    element::select_first(&root, &format!("section#{}", id))
        .or_else(|| element::select_first(&root, &format!("div#{}", id)))
}

/// Resolves the parser for a link: by label first, then by section id.
///
/// A label naming a kind without a parser still falls through to the id.
pub fn resolve(link: &NavLink) -> Option<SectionKind> {
    SectionKind::lookup(&link.label)
        .filter(SectionKind::has_parser)
        .or_else(|| SectionKind::lookup(&link.id))
}

/// Runs the registered parser for `kind`, or returns the default message.
pub fn dispatch(kind: Option<SectionKind>, section_id: &str, section: &ElementRef) -> SectionData {
    let Some(kind) = kind.filter(SectionKind::has_parser) else {
        return SectionData::unsupported();
    };

    match kind {
        SectionKind::Summary => SectionData::Summary(summary::parse_summary(section)),
        SectionKind::Analysis => SectionData::Analysis(summary::parse_analysis(section)),
        SectionKind::Peers => SectionData::Peers {
            peer_comparison: table::parse_peers(section),
        },
        SectionKind::Documents => SectionData::Documents {
            documents_info: summary::parse_documents(section),
        },
        SectionKind::Quarters
        | SectionKind::ProfitLoss
        | SectionKind::BalanceSheet
        | SectionKind::CashFlow
        | SectionKind::Ratios
        | SectionKind::Shareholding => SectionData::Statement(StatementSection {
            kind,
            section_id: section_id.to_string(),
            statement: table::parse_statement(section),
        }),
        SectionKind::Chart => SectionData::unsupported(),
    }
}

/// Parses every section the sub-nav points at, in nav order and keyed by link label.
///
/// `None` when the page has no sub-nav. Links whose target is missing are skipped.
pub fn parse_sections(document: &Html) -> Option<LabeledMap<SectionData>> {
    let links = nav_links(document)?;
    let mut sections = LabeledMap::new();

    for link in links {
        let Some(section) = locate(document, &link.id) else {
            logging::debug_file_async(format!("Section #{} not found on page", link.id));
            continue;
        };

        let data = dispatch(resolve(&link), &link.id, &section);
        sections.insert(link.label, data);
    }

    Some(sections)
}

/// Finds the statement parsed for `kind`.
pub fn find_statement(sections: &LabeledMap<SectionData>, kind: SectionKind) -> Option<&Statement> {
    sections.iter().find_map(|(_, data)| match data {
        SectionData::Statement(s) if s.kind == kind => Some(&s.statement),
        _ => None,
    })
}
