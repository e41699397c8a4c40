use rust_decimal::Decimal;
use scraper::ElementRef;
use serde::Serialize;

use crate::util::{
    http::element::{self, row_cells},
    map::LabeledMap,
    text,
};

/// 財報表格的 css
const DATA_TABLE: &str = "table.data-table";
/// 同業比較表格，頁面上可能還有其他 data-table，需要完整的 class 組合
const PEER_TABLE: &str = "table.data-table.text-nowrap.striped.mark-visited.no-scroll-right";
/// 可展開明細的列
const SCHEDULE_BUTTON: &str = r#"button[onclick*="Company.showSchedule"]"#;

/// An HTML table as header texts and row texts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub footer: Vec<Vec<String>>,
}

impl DataTable {
    /// Reads `thead`, `tbody` and `tfoot`. Rows whose cells are all empty are dropped.
    pub fn parse(table: &ElementRef) -> DataTable {
        DataTable {
            headers: headers(table),
            rows: part_rows(table, "tbody")
                .iter()
                .map(row_cells)
                .filter(|cells| !is_blank(cells))
                .collect(),
            footer: part_rows(table, "tfoot")
                .iter()
                .map(row_cells)
                .filter(|cells| !is_blank(cells))
                .collect(),
        }
    }
}

fn headers(table: &ElementRef) -> Vec<String> {
    let Some(thead) = element::select_first(table, "thead") else {
        return Vec::new();
    };

    match element::selector("tr th") {
        Ok(th) => thead.select(&th).map(|h| element::clean_text(&h)).collect(),
        Err(_) => Vec::new(),
    }
}

fn part_rows<'a>(table: &ElementRef<'a>, part: &str) -> Vec<ElementRef<'a>> {
    let Some(section) = element::select_first(table, part) else {
        return Vec::new();
    };

    match element::selector("tr") {
        Ok(tr) => section.select(&tr).collect(),
        Err(_) => Vec::new(),
    }
}

fn is_blank(cells: &[String]) -> bool {
    cells.iter().all(|c| c.is_empty())
}

/// A financial statement: the raw table plus every row as a numeric series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statement {
    #[serde(flatten)]
    pub table: DataTable,
    /// Column headings after the label column, e.g. "Mar 2023", "TTM".
    pub periods: Vec<String>,
    /// Row label to one value per period. Unparseable cells are `null`.
    pub series: LabeledMap<Vec<Option<Decimal>>>,
    /// Breakdown rows fetched for expandable labels.
    #[serde(skip_serializing_if = "LabeledMap::is_empty")]
    pub schedules: LabeledMap<serde_json::Value>,
    /// Labels whose row carries a schedule button.
    #[serde(skip)]
    pub expandable: Vec<String>,
}

impl Statement {
    pub fn parse(table: &ElementRef) -> Statement {
        let headers = headers(table);
        let periods = headers.iter().skip(1).cloned().collect();
        let mut statement = Statement {
            table: DataTable {
                headers,
                ..Default::default()
            },
            periods,
            ..Default::default()
        };

        for row in part_rows(table, "tbody") {
            let cells = row_cells(&row);
            if is_blank(&cells) {
                continue;
            }

            if cells.len() > 1 {
                let label = text::normalize_label(&cells[0]);
                if !label.is_empty() {
                    let values = cells[1..].iter().map(|c| text::parse_cell(c)).collect();
                    if element::select_first(&row, SCHEDULE_BUTTON).is_some()
                        && !statement.expandable.contains(&label)
                    {
                        statement.expandable.push(label.clone());
                    }
                    statement.series.insert(label, values);
                }
            }

            statement.table.rows.push(cells);
        }

        statement
    }

    /// The series of the first label in `labels` that exists.
    pub fn find_series(&self, labels: &[&str]) -> Option<&[Option<Decimal>]> {
        labels
            .iter()
            .find_map(|label| self.series.get(label))
            .map(Vec::as_slice)
    }
}

/// Parses the first `table.data-table` of a section; an empty statement if there is none.
pub fn parse_statement(section: &ElementRef) -> Statement {
    element::select_first(section, DATA_TABLE)
        .map(|table| Statement::parse(&table))
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PeerComparison {
    Table(DataTable),
    Missing { info: String },
}

/// 同業比較；只取比較表，忽略指數的連結
pub fn parse_peers(section: &ElementRef) -> PeerComparison {
    match element::select_first(section, PEER_TABLE) {
        Some(table) => PeerComparison::Table(DataTable::parse(&table)),
        None => PeerComparison::Missing {
            info: "No peer table found".to_string(),
        },
    }
}
