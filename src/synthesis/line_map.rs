//! Mapping from synthetic-unit lines back to template lines

use serde::Serialize;

/// Origin of one synthetic-unit line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineOrigin {
    /// Line carries template content; the value is the 1-based template line
    Template(u32),
    /// Synthesizer-injected line with no template counterpart
    Scaffolding,
}

/// Dense mapping from synthetic lines (1-based) to their origin.
///
/// Total over the synthesized source: entry `i` describes synthetic line
/// `i + 1`, and there is one entry per source line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineMap {
    lines: Vec<LineOrigin>,
}

impl LineMap {
    /// Build a map from per-line origins, first synthetic line first
    pub fn new(lines: Vec<LineOrigin>) -> Self {
        Self { lines }
    }

    /// Append the origin of the next synthetic line
    pub fn push(&mut self, origin: LineOrigin) {
        self.lines.push(origin);
    }

    /// Number of synthetic lines covered
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the map covers no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Origin of a synthetic line, `None` when out of range
    pub fn origin(&self, synthetic_line: u32) -> Option<LineOrigin> {
        if synthetic_line == 0 {
            return None;
        }
        self.lines.get(synthetic_line as usize - 1).copied()
    }

    /// Template line behind a synthetic line.
    ///
    /// `None` for scaffolding lines and lines outside the unit.
    pub fn template_line(&self, synthetic_line: u32) -> Option<u32> {
        match self.origin(synthetic_line) {
            Some(LineOrigin::Template(line)) => Some(line),
            _ => None,
        }
    }
}

impl FromIterator<LineOrigin> for LineMap {
    fn from_iter<I: IntoIterator<Item = LineOrigin>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_line_lookup() {
        let map = LineMap::new(vec![
            LineOrigin::Scaffolding,
            LineOrigin::Scaffolding,
            LineOrigin::Template(1),
            LineOrigin::Template(3),
            LineOrigin::Scaffolding,
        ]);

        assert_eq!(map.template_line(3), Some(1));
        assert_eq!(map.template_line(4), Some(3));
        assert_eq!(map.template_line(1), None);
        assert_eq!(map.template_line(5), None);
    }

    #[test]
    fn test_out_of_range_lines() {
        let map = LineMap::new(vec![LineOrigin::Template(1)]);

        assert_eq!(map.template_line(0), None);
        assert_eq!(map.template_line(2), None);
        assert_eq!(map.origin(0), None);
        assert_eq!(map.origin(1), Some(LineOrigin::Template(1)));
    }

    #[test]
    fn test_from_iterator() {
        let map: LineMap = (1..=3).map(LineOrigin::Template).collect();
        assert_eq!(map.len(), 3);
        assert_eq!(map.template_line(2), Some(2));
    }
}
