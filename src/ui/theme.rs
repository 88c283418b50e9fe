use crate::session::render::Segment;

/// Maps classified segments to output text. Injected per render call, so callers can
/// swap presentation without touching session state.
pub trait Theme {
    fn paint(&self, segment: &Segment, out: &mut String);

    fn paint_all(&self, segments: &[Segment]) -> String {
        let mut out = String::with_capacity(segments.len() * 2);
        for segment in segments {
            self.paint(segment, &mut out);
        }
        out
    }
}

/// Characters only, as they would appear with all styling stripped.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainTheme;

impl Theme for PlainTheme {
    fn paint(&self, segment: &Segment, out: &mut String) {
        out.push(segment.ch());
    }
}

/// Marks classifications inline: `[x]` incorrect, `(x)` missed, `|x|` cursor.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnnotatedTheme;

impl Theme for AnnotatedTheme {
    fn paint(&self, segment: &Segment, out: &mut String) {
        let (open, close) = match segment {
            Segment::Pending(_) | Segment::Correct { .. } => {
                out.push(segment.ch());
                return;
            }
            Segment::Incorrect(_) => ('[', ']'),
            Segment::Missed(_) => ('(', ')'),
            Segment::Cursor(_) => ('|', '|'),
        };
        out.push(open);
        out.push(segment.ch());
        out.push(close);
    }
}
