use lazy_static::lazy_static;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};
use regex::Regex;

lazy_static! {
    static ref INLINE_MATH: Regex = Regex::new(r"\$[^$]+\$").expect("valid inline math pattern");
    static ref TEX_COMMAND: Regex = Regex::new(r"\\([A-Za-z]+)").expect("valid command pattern");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    /// Math content with the `$` delimiters removed.
    Math(&'a str),
}

pub fn split_math(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in INLINE_MATH.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::Text(&text[last..m.start()]));
        }
        segments.push(Segment::Math(&text[m.start() + 1..m.end() - 1]));
        last = m.end();
    }
    if last < text.len() {
        segments.push(Segment::Text(&text[last..]));
    }

    segments
}

fn tex_symbol(command: &str) -> Option<&'static str> {
    let symbol = match command {
        "alpha" => "α",
        "beta" => "β",
        "gamma" => "γ",
        "delta" => "δ",
        "epsilon" => "ε",
        "theta" => "θ",
        "lambda" => "λ",
        "mu" => "μ",
        "nu" => "ν",
        "pi" => "π",
        "sigma" => "σ",
        "phi" => "φ",
        "omega" => "ω",
        "Delta" => "Δ",
        "Sigma" => "Σ",
        "Omega" => "Ω",
        "times" => "×",
        "cdot" => "·",
        "div" => "÷",
        "pm" => "±",
        "leq" | "le" => "≤",
        "geq" | "ge" => "≥",
        "neq" | "ne" => "≠",
        "approx" => "≈",
        "infty" => "∞",
        "to" | "rightarrow" => "→",
        "leftarrow" => "←",
        "Rightarrow" => "⇒",
        "sqrt" => "√",
        "sum" => "∑",
        "int" => "∫",
        "partial" => "∂",
        "in" => "∈",
        _ => return None,
    };
    Some(symbol)
}

/// Replace common TeX commands with their Unicode symbol; unknown commands
/// are left as written.
pub fn tex_to_unicode(math: &str) -> String {
    TEX_COMMAND
        .replace_all(math, |caps: &regex::Captures| {
            tex_symbol(&caps[1])
                .map(str::to_string)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

pub fn math_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::ITALIC)
}

/// Card text as ratatui lines, with `$...$` spans rendered as math.
///
/// `\r\n` and lone `\r` both count as line breaks; a carriage return must
/// never reach a buffer cell.
pub fn render_math_text(text: &str) -> Text<'static> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for segment in split_math(&text) {
        let (content, style) = match segment {
            Segment::Text(t) => (t.to_string(), Style::default()),
            Segment::Math(m) => (tex_to_unicode(m), math_style()),
        };

        let mut pieces = content.split('\n');
        if let Some(first) = pieces.next()
            && !first.is_empty()
        {
            current.push(Span::styled(first.to_string(), style));
        }
        for piece in pieces {
            lines.push(Line::from(std::mem::take(&mut current)));
            if !piece.is_empty() {
                current.push(Span::styled(piece.to_string(), style));
            }
        }
    }
    lines.push(Line::from(current));

    Text::from(lines)
}
