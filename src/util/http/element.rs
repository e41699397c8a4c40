use anyhow::{anyhow, Result};
use scraper::{ElementRef, Selector};

/// Parses a CSS selector, turning the selector error into an `anyhow::Error`.
pub fn selector(css_selector: &str) -> Result<Selector> {
    Selector::parse(css_selector)
        .map_err(|why| anyhow!("Failed to Selector::parse({}) because: {:?}", css_selector, why))
}

/// Text content of an element with whitespace runs collapsed to a single space.
///
/// ```text
/// <td> Net&nbsp;Profit <span>+</span></td>  =>  "Net Profit +"
/// ```
pub fn clean_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Every text node trimmed, empty ones dropped, and the rest joined with `separator`.
pub fn joined_text(element: &ElementRef, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Returns the first descendant matching the CSS selector.
///
/// An invalid selector is treated the same as no match.
pub fn select_first<'a>(element: &ElementRef<'a>, css_selector: &str) -> Option<ElementRef<'a>> {
    match Selector::parse(css_selector) {
        Ok(s) => element.select(&s).next(),
        Err(_) => None,
    }
}

/// Extracts the cleaned text of the first element matching `css_selector`.
///
/// # Examples
///
/// ```text
/// let html = r#"<div><div class="about"> A bank </div></div>"#;
/// let document = Html::parse_fragment(html);
/// let text = parse_value(&document.root_element(), "div.about");
/// assert_eq!(text, Some("A bank".to_string()));
/// ```
pub fn parse_value(element: &ElementRef, css_selector: &str) -> Option<String> {
    select_first(element, css_selector).map(|v| clean_text(&v))
}

pub fn parse_to_string(element: &ElementRef, css_selector: &str) -> String {
    parse_value(element, css_selector).unwrap_or_default()
}

/// Cleaned text of every `th`/`td` cell of a table row, in document order.
pub fn row_cells(row: &ElementRef) -> Vec<String> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| matches!(cell.value().name(), "th" | "td"))
        .map(|cell| clean_text(&cell))
        .collect()
}
