use std::path::PathBuf;

use anyhow::{Context, Result};
use concat_string::concat_string;
use tokio::fs;

use crate::{crawler::screener::CompanyReport, export::output_path, logging, util::text};

pub fn file_name(company_name: &str) -> String {
    concat_string!(
        "screener_cleaned_data_",
        text::safe_file_stem(company_name),
        "_with_growth_tables.json"
    )
}

/// Writes the report as pretty printed JSON, creating `dir` when missing.
pub async fn save(report: &CompanyReport, dir: &str) -> Result<PathBuf> {
    let path = output_path(dir, &file_name(&report.company_name));
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let body = serde_json::to_string_pretty(report)?;
    fs::write(&path, body)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    logging::info_file_async(format!("Saved {} to {}", report.company_name, path.display()));

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::screener::company;

    #[test]
    fn test_file_name() {
        assert_eq!(
            file_name("Kotak Mahindra Bank Ltd"),
            "screener_cleaned_data_Kotak_Mahindra_Bank_Ltd_with_growth_tables.json"
        );
        assert_eq!(
            file_name("Bajaj Finance (India) Ltd."),
            "screener_cleaned_data_Bajaj_Finance_India_Ltd__with_growth_tables.json"
        );
    }

    #[tokio::test]
    async fn test_save_creates_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("out").join("nested");
        let (report, _) = company::parse_company_page(
            r#"<html><body><h1 class="h2">Café Ltd</h1></body></html>"#,
        );

        let path = save(&report, dir.to_str().unwrap()).await.unwrap();
        assert_eq!(path, dir.join("screener_cleaned_data_Caf_Ltd_with_growth_tables.json"));

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n  \"company_name\": \"Café Ltd\""));
        let json: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(json["company_id"], "N/A");
    }
}
