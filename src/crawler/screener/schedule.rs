use serde_json::Value;

use crate::{
    crawler::screener::{section::SectionData, ScreenerSource},
    logging,
    util::map::LabeledMap,
};

/// The schedules API wraps rows in `data` on some endpoints; otherwise the body is the breakdown.
pub fn extract_data(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Array(Vec::new()))
        }
        other => other,
    }
}

/// Fetches the breakdown of every expandable row of every statement.
///
/// A failed request is logged and stored as an empty list for that row.
pub async fn expand<S>(
    source: &S,
    company_id: &str,
    consolidated: bool,
    sections: &mut LabeledMap<SectionData>,
) -> usize
where
    S: ScreenerSource + ?Sized,
{
    let mut fetched = 0;

    for data in sections.values_mut() {
        let SectionData::Statement(section) = data else {
            continue;
        };

        for label in section.statement.expandable.clone() {
            logging::info_file_async(format!(
                "Fetching expanded data for {} ({})",
                label, section.section_id
            ));

            let value = match source
                .schedule(company_id, &label, &section.section_id, consolidated)
                .await
            {
                Ok(body) => {
                    fetched += 1;
                    extract_data(body)
                }
                Err(why) => {
                    logging::error_file_async(format!(
                        "Failed to fetch schedule {} of {} because {:?}",
                        label, section.section_id, why
                    ));
                    Value::Array(Vec::new())
                }
            };

            section.statement.schedules.insert(label, value);
        }
    }

    fetched
}
