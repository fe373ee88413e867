//! Text and JSON rendering of a product page.

use storefront_core::{Page, Product};

use crate::error::AppResult;

const DESCRIPTION_WIDTH: usize = 40;
const HEADERS: [&str; 4] = ["Name", "Type", "Description", "Created"];

/// Renders the page as an aligned table followed by a navigation footer.
///
/// ```text
/// Name    Type    Description   Created
/// ------  ------  ------------  ----------
/// Apron   retail  Cotton apron  2024-01-01
///
/// Page 1 of 3 (41 products) | next: --page 1
/// ```
pub fn render_page(page: &Page<Product>) -> String {
    let mut out = String::new();

    if !page.items.is_empty() {
        let rows: Vec<[String; 4]> = page
            .items
            .iter()
            .map(|p| {
                [
                    p.name.clone(),
                    p.product_type.clone(),
                    truncate(&p.description, DESCRIPTION_WIDTH),
                    p.created_date.format("%Y-%m-%d").to_string(),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        push_row(&mut out, &HEADERS.map(String::from), &widths);
        push_row(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
        for row in &rows {
            push_row(&mut out, row, &widths);
        }
        out.push('\n');
    }

    out.push_str(&footer(page));
    out.push('\n');
    out
}

/// Renders the page as pretty JSON for other front ends.
pub fn render_json(page: &Page<Product>) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(page)?)
}

fn footer(page: &Page<Product>) -> String {
    let page_count = page.page_count();

    if page.total_count == 0 {
        return "No products found.".to_string();
    }

    if page.items.is_empty() {
        return format!(
            "No products on page {} (last page is {}, {} products)",
            page.page_index + 1,
            page_count,
            page.total_count
        );
    }

    let mut footer = format!(
        "Page {} of {} ({} products)",
        page.page_index + 1,
        page_count,
        page.total_count
    );
    if page.has_previous() {
        footer.push_str(&format!(" | prev: --page {}", page.page_index - 1));
    }
    if page.has_next() {
        footer.push_str(&format!(" | next: --page {}", page.page_index + 1));
    }
    footer
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use storefront_core::PageRequest;

    fn product(name: &str, description: &str) -> Product {
        Product {
            id: "00000000-0000-0000-0000-000000000001".to_string(),
            product_type: "retail".to_string(),
            name: name.to_string(),
            description: description.to_string(),
            created_date: Utc.with_ymd_and_hms(2024, 3, 9, 10, 0, 0).unwrap(),
            is_active: true,
        }
    }

    fn page(items: Vec<Product>, total: u64, index: i64, size: i64) -> Page<Product> {
        Page::new(items, total, PageRequest::new(index, size).unwrap())
    }

    #[test]
    fn test_table_and_footer() {
        let rendered = render_page(&page(
            vec![product("Apron", "Cotton apron"), product("Kettle", "Steel")],
            5,
            0,
            2,
        ));

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Name    Type    Description   Created");
        assert_eq!(lines[1], "------  ------  ------------  ----------");
        assert_eq!(lines[2], "Apron   retail  Cotton apron  2024-03-09");
        assert_eq!(lines[3], "Kettle  retail  Steel         2024-03-09");
        assert_eq!(lines[5], "Page 1 of 3 (5 products) | next: --page 1");
    }

    #[test]
    fn test_middle_page_links_both_ways() {
        let rendered = render_page(&page(vec![product("C", "c")], 5, 1, 2));
        assert!(rendered.ends_with("Page 2 of 3 (5 products) | prev: --page 0 | next: --page 2\n"));
    }

    #[test]
    fn test_past_end_points_at_last_page() {
        let rendered = render_page(&page(Vec::new(), 3, 5, 2));
        assert_eq!(rendered, "No products on page 6 (last page is 2, 3 products)\n");
    }

    #[test]
    fn test_empty_catalog() {
        let rendered = render_page(&page(Vec::new(), 0, 0, 20));
        assert_eq!(rendered, "No products found.\n");
    }

    #[test]
    fn test_long_description_is_truncated() {
        let long = "x".repeat(60);
        let rendered = render_page(&page(vec![product("A", &long)], 1, 0, 20));
        assert!(rendered.contains(&format!("{}…", "x".repeat(DESCRIPTION_WIDTH - 1))));
        assert!(!rendered.contains(&long));
    }

    #[test]
    fn test_json_carries_metadata() {
        let json = render_json(&page(vec![product("A", "a")], 7, 0, 20)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_count"], 7);
        assert_eq!(value["page_size"], 20);
        assert_eq!(value["items"][0]["name"], "A");
    }
}
