//! Text Measurement
//!
//! Approximate metrics for sizing text leaves during layout. There is no
//! shaping engine here: every character advances by a fixed fraction of the
//! font size, with wide (CJK, emoji) characters taking two advances.
//! Renderers are free to shape the text properly inside the resulting box.

/// Font metrics used to size a text leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub font_size: f32,
    /// Advance of a narrow character as a fraction of `font_size`.
    pub char_width_ratio: f32,
    /// Line height as a multiple of `font_size`.
    pub line_height: f32,
}

impl TextMetrics {
    #[inline]
    fn advance(&self) -> f32 {
        self.font_size * self.char_width_ratio
    }

    #[inline]
    fn line_px(&self) -> f32 {
        self.font_size * self.line_height
    }

    /// Unwrapped size: widest explicit line by number of lines.
    pub fn measure(&self, text: &str) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        let widest = text.split('\n').map(columns).max().unwrap_or(0);
        let lines = text.split('\n').count();
        (widest as f32 * self.advance(), lines as f32 * self.line_px())
    }

    /// Size when wrapped at `max_width` pixels.
    pub fn measure_wrapped(&self, text: &str, max_width: f32) -> (f32, f32) {
        let (natural_width, natural_height) = self.measure(text);
        if natural_width <= max_width {
            return (natural_width, natural_height);
        }
        let max_columns = (max_width / self.advance()).floor().max(1.0) as usize;
        let lines = wrapped_line_count(text, max_columns);
        let width = natural_width.min(max_columns as f32 * self.advance());
        (width, lines as f32 * self.line_px())
    }

    /// Narrowest width the text can be laid out at.
    ///
    /// The widest word, or the widest single character when the text has no
    /// whitespace to break at.
    pub fn min_content_width(&self, text: &str) -> f32 {
        let widest = if text.contains(char::is_whitespace) {
            text.split_whitespace().map(columns).max().unwrap_or(0)
        } else {
            text.chars().map(char_columns).max().unwrap_or(0)
        };
        widest as f32 * self.advance()
    }

    /// Size at the min-content width: narrowest width, tallest wrap.
    pub fn measure_min_content(&self, text: &str) -> (f32, f32) {
        self.measure_wrapped(text, self.min_content_width(text))
    }

    /// Distance from the top of a line box to the baseline.
    pub fn ascent(&self) -> f32 {
        self.font_size + (self.line_px() - self.font_size) / 2.0
    }
}

/// Display columns of a single character: 0 for control, 2 for wide, else 1.
pub fn char_columns(c: char) -> usize {
    if c.is_ascii() {
        return usize::from(!c.is_ascii_control());
    }
    let code = c as u32;
    if (0x1100..=0x115F).contains(&code)     // Hangul Jamo
        || (0x2E80..=0x9FFF).contains(&code)   // CJK
        || (0xAC00..=0xD7A3).contains(&code)   // Hangul Syllables
        || (0xF900..=0xFAFF).contains(&code)   // CJK Compatibility
        || (0xFE30..=0xFE6F).contains(&code)   // CJK Compatibility Forms
        || (0xFF00..=0xFF60).contains(&code)   // Fullwidth Forms
        || (0x1F300..=0x1F9FF).contains(&code) // Emoji
        || (0x20000..=0x2FFFF).contains(&code) // CJK Extension B-F
    {
        2
    } else {
        1
    }
}

/// Display columns of a line.
pub fn columns(line: &str) -> usize {
    line.chars().map(char_columns).sum()
}

/// Number of lines after character wrapping at `max_columns`.
pub fn wrapped_line_count(text: &str, max_columns: usize) -> usize {
    if text.is_empty() {
        return 0;
    }
    let max_columns = max_columns.max(1);
    text.split('\n')
        .map(|line| {
            let mut lines = 1;
            let mut current = 0;
            for c in line.chars() {
                let w = char_columns(c);
                if current + w > max_columns && current > 0 {
                    lines += 1;
                    current = w;
                } else {
                    current += w;
                }
            }
            lines
        })
        .sum()
}
