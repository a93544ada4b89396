//! Line templates and their per-frame resolution.
//!
//! Raw corner text is normalized once into an ordered list of
//! [`LineTemplate`]s; each frame then resolves those templates into flat
//! [`ResolvedLine`] records that the layout code consumes.

/// Token replaced with the zero-padded frame index.
pub const FRAME_TOKEN: char = '`';
/// Token replaced with the total frame count.
pub const TOTAL_TOKEN: char = '^';
/// A line whose entire content is this sentinel becomes the elapsed-time label.
pub const TIME_SENTINEL: &str = "TIME";
/// Leading marker requesting the larger emphasis font for one line.
pub const EMPHASIS_MARKER: char = '!';

/// What a template line produces, after marker stripping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Plain text, still carrying frame/total tokens.
    Plain(String),
    /// The computed elapsed-time label for the current frame.
    Time,
}

/// One normalized template line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTemplate {
    /// Content variant.
    pub kind: LineKind,
    /// Render with the scaled emphasis font.
    pub emphasis: bool,
}

/// One render-ready line for a specific frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLine {
    /// Final text, all tokens substituted.
    pub text: String,
    /// Render with the scaled emphasis font.
    pub emphasis: bool,
}

/// Normalize raw corner text into templates. Blank lines are dropped; a
/// single leading [`EMPHASIS_MARKER`] (plus any whitespace after it) is
/// stripped and recorded as the emphasis flag; the [`TIME_SENTINEL`] is
/// recognized after marker stripping.
pub fn normalize(raw: &[String]) -> Vec<LineTemplate> {
    let mut out = Vec::new();
    for line in raw {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (text, emphasis) = match trimmed.strip_prefix(EMPHASIS_MARKER) {
            Some(rest) => (rest.trim_start(), true),
            None => (trimmed, false),
        };

        let kind = if text == TIME_SENTINEL {
            LineKind::Time
        } else {
            LineKind::Plain(text.to_owned())
        };
        out.push(LineTemplate { kind, emphasis });
    }
    out
}

/// Resolve templates for one frame. `frame` must already be zero-padded to
/// the sequence's pad width; `time_label` is the precomputed elapsed-time
/// label for this frame.
pub fn resolve(
    templates: &[LineTemplate],
    frame: &str,
    total: &str,
    time_label: &str,
) -> Vec<ResolvedLine> {
    templates
        .iter()
        .map(|t| {
            let text = match &t.kind {
                LineKind::Time => time_label.to_owned(),
                LineKind::Plain(text) => text
                    .replace(FRAME_TOKEN, frame)
                    .replace(TOTAL_TOKEN, total),
            };
            ResolvedLine {
                text,
                emphasis: t.emphasis,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/line.rs"]
mod tests;
