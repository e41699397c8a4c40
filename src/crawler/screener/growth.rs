use scraper::Html;

use crate::{
    logging,
    util::{http::element, map::LabeledMap},
};

/// heading ("Compounded Sales Growth") => period ("10 Years") => value ("17%")
pub type GrowthTables = LabeledMap<LabeledMap<String>>;

/// Reads the four small `ranges-table`s under the profit & loss table.
///
/// `None` when the grid that holds them isn't on the page.
pub fn parse_growth_tables(document: &Html) -> Option<GrowthTables> {
    let root = document.root_element();
    let grid = element::select_first(&root, "div[style*='grid-template-columns']")?;
    let mut data = GrowthTables::new();

    let (Ok(tables), Ok(tr), Ok(td)) = (
        element::selector("table.ranges-table"),
        element::selector("tr"),
        element::selector("td"),
    ) else {
        return Some(data);
    };

    let mut found = false;
    for (idx, table) in grid.select(&tables).enumerate() {
        found = true;
        let mut heading: Option<String> = None;

        for row in table.select(&tr) {
            if let Some(th) = element::select_first(&row, "th") {
                let text = element::clean_text(&th);
                data.insert(text.clone(), LabeledMap::new());
                heading = Some(text);
                continue;
            }

            let cells: Vec<String> = row.select(&td).map(|c| element::clean_text(&c)).collect();
            if let (Some(h), [label, value]) = (&heading, cells.as_slice()) {
                if let Some(periods) = data.get_mut(h) {
                    periods.insert(label.trim_end_matches(':').trim(), value.clone());
                }
            }
        }

        if heading.is_none() {
            logging::warn_file_async(format!("No heading row found in ranges-table #{}", idx + 1));
        }
    }

    if !found {
        logging::warn_file_async("No 'ranges-table' elements found.".to_string());
    }

    Some(data)
}
