use log::debug;

use crate::fonts::BuiltinFont;

/// A logical block of report content, in reading order.
#[derive(Debug, Clone)]
pub enum Section {
    /// Document title line.
    Title(String),
    /// Heading followed by body lines that are already wrapped.
    Paragraph { title: String, lines: Vec<String> },
    /// Heading followed by bullet items. Items are wrapped at layout
    /// time, with continuation lines indented under the bullet.
    Bullets { title: String, items: Vec<String> },
}

/// One line of text resolved to a page position. Coordinates use
/// PDF's bottom-left origin.
#[derive(Debug, Clone)]
pub struct TextPlacement {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font: BuiltinFont,
    pub size: f64,
}

/// Page geometry and type sizes driving layout. All distances are in
/// points; wrap widths are in characters.
#[derive(Debug, Clone)]
pub struct LayoutParams {
    pub page_height: f64,
    pub margin_x: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub title_size: f64,
    pub title_advance: f64,
    pub heading_size: f64,
    pub heading_advance: f64,
    pub body_size: f64,
    pub leading: f64,
    pub section_gap: f64,
    pub bullet_wrap_chars: usize,
}

/// Greedy word wrap at a maximum character count. Splits only on
/// whitespace boundaries, never inside a word or hyphenated token;
/// runs of whitespace collapse to single spaces. A word longer than
/// `max_chars` gets a line of its own rather than being broken.
///
/// This is a heuristic substitute for font-metric wrapping and is
/// only adequate because the font/size pairs are fixed and known.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_chars = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if line.is_empty() {
            line.push_str(word);
            line_chars = word_chars;
        } else if line_chars + 1 + word_chars <= max_chars {
            line.push(' ');
            line.push_str(word);
            line_chars += 1 + word_chars;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_chars = word_chars;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Walks sections top to bottom, converting them into positioned
/// text lines with a single vertical cursor.
pub struct LayoutEngine {
    params: LayoutParams,
    cursor: f64,
    placements: Vec<TextPlacement>,
}

impl LayoutEngine {
    pub fn new(params: LayoutParams) -> Self {
        let cursor = params.page_height - params.margin_top;
        LayoutEngine {
            params,
            cursor,
            placements: Vec::new(),
        }
    }

    /// Lay out sections in order. After each completed section the
    /// cursor is checked against the bottom margin; once it has
    /// passed, the remaining sections are dropped. A section is
    /// never partially placed.
    pub fn lay_out(mut self, sections: &[Section]) -> Vec<TextPlacement> {
        for (index, section) in sections.iter().enumerate() {
            match section {
                Section::Title(text) => {
                    let size = self.params.title_size;
                    self.place(text.clone(), BuiltinFont::HelveticaBold, size);
                    self.cursor -= self.params.title_advance;
                }
                Section::Paragraph { title, lines } => {
                    self.heading(title);
                    for line in lines {
                        let size = self.params.body_size;
                        self.place(line.clone(), BuiltinFont::Helvetica, size);
                        self.cursor -= self.params.leading;
                    }
                    self.cursor -= self.params.section_gap;
                }
                Section::Bullets { title, items } => {
                    self.heading(title);
                    for item in items {
                        let wrapped = wrap(item, self.params.bullet_wrap_chars);
                        for (i, line) in wrapped.into_iter().enumerate() {
                            let prefix = if i == 0 { "- " } else { "  " };
                            let size = self.params.body_size;
                            self.place(
                                format!("{}{}", prefix, line),
                                BuiltinFont::Helvetica,
                                size,
                            );
                            self.cursor -= self.params.leading;
                        }
                    }
                    self.cursor -= self.params.section_gap;
                }
            }

            if self.cursor < self.params.margin_bottom {
                let dropped = sections.len() - index - 1;
                if dropped > 0 {
                    debug!(
                        "vertical space exhausted, dropping {} remaining section(s)",
                        dropped,
                    );
                }
                break;
            }
        }
        self.placements
    }

    fn heading(&mut self, title: &str) {
        let size = self.params.heading_size;
        self.place(title.to_string(), BuiltinFont::HelveticaBold, size);
        self.cursor -= self.params.heading_advance;
    }

    fn place(&mut self, text: String, font: BuiltinFont, size: f64) {
        self.placements.push(TextPlacement {
            text,
            x: self.params.margin_x,
            y: self.cursor,
            font,
            size,
        });
    }
}
