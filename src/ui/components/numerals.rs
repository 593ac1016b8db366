use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

pub const GLYPH_WIDTH: u16 = 3;
pub const GLYPH_HEIGHT: u16 = 5;
const GLYPH_GAP: u16 = 1;

// 3x5 block font, one string per row, '#' is filled
const DIGITS: [[&str; 5]; 10] = [
    ["###", "# #", "# #", "# #", "###"],
    [" # ", "## ", " # ", " # ", "###"],
    ["###", "  #", "###", "#  ", "###"],
    ["###", "  #", "###", "  #", "###"],
    ["# #", "# #", "###", "  #", "  #"],
    ["###", "#  ", "###", "  #", "###"],
    ["###", "#  ", "###", "# #", "###"],
    ["###", "  #", "  #", "  #", "  #"],
    ["###", "# #", "###", "# #", "###"],
    ["###", "# #", "###", "  #", "###"],
];

/// A number drawn in the block font, centered horizontally in its area.
pub struct BigNumber {
    digits: Vec<u8>,
    style: Style,
}

impl BigNumber {
    pub fn new(value: u64, style: Style) -> Self {
        let digits = value
            .to_string()
            .bytes()
            .map(|b| b - b'0')
            .collect();
        Self { digits, style }
    }

    pub fn width(&self) -> u16 {
        let n = self.digits.len() as u16;
        n * GLYPH_WIDTH + n.saturating_sub(1) * GLYPH_GAP
    }

    pub fn fits(&self, area: Rect) -> bool {
        area.width >= self.width() && area.height >= GLYPH_HEIGHT
    }
}

impl Widget for BigNumber {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.fits(area) {
            return;
        }
        let left = area.x + (area.width - self.width()) / 2;
        for (n, &digit) in self.digits.iter().enumerate() {
            let x0 = left + n as u16 * (GLYPH_WIDTH + GLYPH_GAP);
            for (row, pattern) in DIGITS[digit as usize].iter().enumerate() {
                for (col, ch) in pattern.chars().enumerate() {
                    if ch == '#' {
                        buf[(x0 + col as u16, area.y + row as u16)]
                            .set_symbol("█")
                            .set_style(self.style);
                    }
                }
            }
        }
    }
}
