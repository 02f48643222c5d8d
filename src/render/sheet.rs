//! Printable HTML label sheet.
//!
//! The page lays out the 32 slots as a fixed grid and opens the browser's
//! print dialog on load. Blank slots keep their cell so the physical label
//! stock stays aligned.

use chrono::{DateTime, Local};

use super::barcode;
use crate::layout::{COLUMNS, LabelSheet, PrintLabel, ROWS};

const BARCODE_HEIGHT: usize = 40;

/// Render `sheet` as a standalone HTML document.
///
/// `auto_print` adds the script that invokes the print dialog.
pub fn render_html(sheet: &LabelSheet, generated_at: DateTime<Local>, auto_print: bool) -> String {
    let mut cells = String::new();
    for label in sheet.slots() {
        cells.push_str(&render_cell(label));
        cells.push('\n');
    }

    let script = if auto_print {
        "<script>window.addEventListener('load', () => window.print());</script>"
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Shelf labels {stamp}</title>
<style>
@page {{ size: letter; margin: 0.5in 0.25in; }}
body {{ margin: 0; font-family: Helvetica, Arial, sans-serif; }}
.sheet {{ display: grid; grid-template-columns: repeat({cols}, 1fr); grid-template-rows: repeat({rows}, 1.25in); gap: 0; }}
.label {{ box-sizing: border-box; padding: 4px 6px; border: 1px dashed #ccc; overflow: hidden; display: flex; flex-direction: column; }}
.label.blank {{ visibility: hidden; }}
.name {{ font-weight: bold; font-size: 11pt; line-height: 1.1; }}
.price {{ font-size: 18pt; font-weight: bold; margin-top: auto; }}
.barcode {{ width: 100%; height: 0.35in; }}
.code {{ font-size: 7pt; letter-spacing: 1px; }}
.meta {{ font-size: 8pt; color: #888; padding: 4px; }}
@media print {{ .label {{ border-color: transparent; }} .meta {{ display: none; }} }}
</style>
{script}
</head>
<body>
<div class="meta">{occupied} of {capacity} labels, generated {stamp}</div>
<div class="sheet">
{cells}</div>
</body>
</html>
"#,
        stamp = generated_at.format("%Y-%m-%d %H:%M"),
        cols = COLUMNS,
        rows = ROWS,
        script = script,
        occupied = sheet.occupied(),
        capacity = sheet.slots().len(),
        cells = cells,
    )
}

fn render_cell(label: &PrintLabel) -> String {
    match label {
        PrintLabel::Blank => r#"<div class="label blank"></div>"#.to_string(),
        PrintLabel::Filled {
            display_name,
            barcode: code,
            ..
        } => {
            let bars = barcode::encode(code)
                .map(|b| b.to_svg(BARCODE_HEIGHT))
                .unwrap_or_default();
            format!(
                r#"<div class="label"><div class="name">{}</div><div class="price">${}</div>{}<div class="code">{}</div></div>"#,
                escape_html(display_name),
                label.price().unwrap_or_default(),
                bars,
                escape_html(code),
            )
        }
    }
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogItem, Variation};
    use crate::layout;
    use crate::overrides::NameOverrideStore;
    use crate::queue::CAPACITY;

    fn sheet_with(name: &str, price: u64, barcode: &str) -> LabelSheet {
        let item = CatalogItem::new(name, vec![Variation::new("1L", price, barcode)]);
        layout::build(&[item], &NameOverrideStore::new()).unwrap()
    }

    #[test]
    fn test_renders_every_slot() {
        let html = render_html(&sheet_with("Milk", 250, "036000291452"), Local::now(), true);
        assert_eq!(html.matches(r#"<div class="label"#).count(), CAPACITY);
        assert_eq!(html.matches("label blank").count(), CAPACITY - 1);
        assert!(html.contains("$2.50"));
        assert!(html.contains("<svg"));
        assert!(html.contains("window.print()"));
    }

    #[test]
    fn test_names_are_escaped() {
        let html = render_html(&sheet_with("Salt & <Pepper>", 100, ""), Local::now(), false);
        assert!(html.contains("Salt &amp; &lt;Pepper&gt;"));
        assert!(!html.contains("window.print()"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"a"b'c"#), "a&quot;b&#39;c");
    }
}
