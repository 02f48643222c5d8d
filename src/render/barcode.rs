//! Barcode encoding for label rendering.
//!
//! Uses the barcoders crate. Numeric UPC-A/EAN-13 codes print as EAN-13,
//! everything else as Code 128.

use barcoders::sym::code128::Code128;
use barcoders::sym::ean13::EAN13;

/// Width of one barcode module in SVG user units.
const MODULE_WIDTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbology {
    Ean13,
    Code128,
}

/// Encoded barcode modules. `true` = bar, `false` = space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bars {
    pub symbology: Symbology,
    pub modules: Vec<bool>,
}

/// Encode `data`, choosing the symbology from its shape.
/// Returns `None` for empty or unencodable data.
pub fn encode(data: &str) -> Option<Bars> {
    if data.is_empty() {
        return None;
    }
    encode_ean13(data).or_else(|| encode_code128(data))
}

fn encode_ean13(data: &str) -> Option<Bars> {
    if !data.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // UPC-A is EAN-13 with a leading zero.
    let digits = match data.len() {
        12 => format!("0{}", data),
        13 => data.to_string(),
        _ => return None,
    };
    let barcode = EAN13::new(&digits).ok()?;
    Some(Bars {
        symbology: Symbology::Ean13,
        modules: barcode.encode().into_iter().map(|m| m == 1).collect(),
    })
}

fn encode_code128(data: &str) -> Option<Bars> {
    // Character set B (Ɓ) covers printable ASCII.
    let prefixed = format!("\u{0181}{}", data);
    let barcode = Code128::new(&prefixed).ok()?;
    Some(Bars {
        symbology: Symbology::Code128,
        modules: barcode.encode().into_iter().map(|m| m == 1).collect(),
    })
}

impl Bars {
    /// Render as an inline SVG element `height` units tall.
    pub fn to_svg(&self, height: usize) -> String {
        let width = self.modules.len() * MODULE_WIDTH;
        let mut svg = format!(
            r#"<svg class="barcode" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" preserveAspectRatio="none">"#,
            w = width,
            h = height
        );

        // Merge runs of adjacent bars into single rects
        let mut x = 0;
        while x < self.modules.len() {
            if !self.modules[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < self.modules.len() && self.modules[x] {
                x += 1;
            }
            svg.push_str(&format!(
                r#"<rect x="{}" y="0" width="{}" height="{}"/>"#,
                start * MODULE_WIDTH,
                (x - start) * MODULE_WIDTH,
                height
            ));
        }

        svg.push_str("</svg>");
        svg
    }
}
