use scraper::ElementRef;
use serde::Serialize;

use crate::util::http::element;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ratio {
    pub ratio_name: String,
    pub ratio_value: String,
}

/// 公司簡介、重點與頁首的主要比率
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub about: String,
    pub key_points: String,
    pub top_ratios: Vec<Ratio>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Analysis {
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

pub fn parse_summary(section: &ElementRef) -> Summary {
    let key_points = element::select_first(section, "div.sub.commentary")
        .map(|e| element::joined_text(&e, " "))
        .unwrap_or_default();

    let top_ratios = match element::selector("#top-ratios > li") {
        Ok(li) => section
            .select(&li)
            .filter_map(|r| {
                Some(Ratio {
                    ratio_name: element::parse_value(&r, ".name")?,
                    ratio_value: element::parse_value(&r, ".value")?,
                })
            })
            .collect(),
        Err(_) => Vec::new(),
    };

    Summary {
        about: element::parse_to_string(section, "div.about"),
        key_points,
        top_ratios,
    }
}

pub fn parse_analysis(section: &ElementRef) -> Analysis {
    Analysis {
        pros: list_items(section, "div.pros ul"),
        cons: list_items(section, "div.cons ul"),
    }
}

fn list_items(section: &ElementRef, css_list: &str) -> Vec<String> {
    let (Some(list), Ok(li)) = (
        element::select_first(section, css_list),
        element::selector("li"),
    ) else {
        return Vec::new();
    };

    list.select(&li).map(|item| element::clean_text(&item)).collect()
}

/// 公告、年報等只保留文字
pub fn parse_documents(section: &ElementRef) -> String {
    element::joined_text(section, " ")
}
