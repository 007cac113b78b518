//! Case-insensitive search and highlight.
//!
//! Matching folds both sides with Unicode lowercase mapping. Highlighting maps
//! matches in the folded text back onto the original so the rendered text keeps
//! its casing.

/// A search query. The empty query matches every text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    raw: String,
    folded: String,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.chars().flat_map(char::to_lowercase).collect();
        Self { raw, folded }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn matches(&self, text: &str) -> bool {
        if self.folded.is_empty() {
            return true;
        }
        fold(text).text.contains(&self.folded)
    }

    /// Wrap every non-overlapping occurrence of the query in `text`.
    pub fn highlight(&self, text: &str) -> Highlighted {
        if self.folded.is_empty() {
            return Highlighted::plain(text);
        }

        let hay = fold(text);
        let mut segments = Vec::new();
        let mut cursor = 0;

        for (start, matched) in hay.text.match_indices(&self.folded) {
            let orig_start = hay.origin[start];
            let last = hay.origin[start + matched.len() - 1];
            let orig_end = last + text[last..].chars().next().map_or(0, char::len_utf8);

            // One source char can fold to several; skip matches that start
            // inside a char already consumed.
            if orig_start < cursor {
                continue;
            }
            if orig_start > cursor {
                segments.push(Segment::Plain(text[cursor..orig_start].to_owned()));
            }
            segments.push(Segment::Mark(text[orig_start..orig_end].to_owned()));
            cursor = orig_end;
        }

        if cursor < text.len() || segments.is_empty() {
            segments.push(Segment::Plain(text[cursor..].to_owned()));
        }

        Highlighted { segments }
    }
}

struct Folded {
    text: String,
    // Byte offset in the original text of the char each folded byte came from.
    origin: Vec<usize>,
}

fn fold(text: &str) -> Folded {
    let mut folded = String::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len());
    for (idx, ch) in text.char_indices() {
        for lower in ch.to_lowercase() {
            let before = folded.len();
            folded.push(lower);
            origin.resize(origin.len() + folded.len() - before, idx);
        }
    }
    Folded {
        text: folded,
        origin,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Mark(String),
}

/// Text split into plain and highlighted runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighted {
    segments: Vec<Segment>,
}

impl Highlighted {
    pub fn plain(text: &str) -> Self {
        Self {
            segments: vec![Segment::Plain(text.to_owned())],
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_highlighted(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Mark(_)))
    }

    /// The underlying text with markers removed.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Plain(t) | Segment::Mark(t) => t.as_str(),
            })
            .collect()
    }

    /// Escaped HTML, marks wrapped in `<span class="highlight">`.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Plain(t) => out.push_str(&escape_html(t)),
                Segment::Mark(t) => {
                    out.push_str(r#"<span class="highlight">"#);
                    out.push_str(&escape_html(t));
                    out.push_str("</span>");
                }
            }
        }
        out
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
