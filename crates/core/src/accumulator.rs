//! Accumulators for walking the frame chain.

/// Sums an ordered sequence of optional scores.
///
/// `None` contributes nothing. The result stays `None` until at least one
/// value was added, so "no score yet" is distinct from a score of zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreAccumulator {
    total: Option<u16>,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, score: Option<u16>) {
        if let Some(score) = score {
            self.total = Some(self.total.unwrap_or(0).saturating_add(score));
        }
    }

    pub fn value(&self) -> Option<u16> {
        self.total
    }
}

impl Extend<Option<u16>> for ScoreAccumulator {
    fn extend<I: IntoIterator<Item = Option<u16>>>(&mut self, iter: I) {
        for score in iter {
            self.add(score);
        }
    }
}

impl FromIterator<Option<u16>> for ScoreAccumulator {
    fn from_iter<I: IntoIterator<Item = Option<u16>>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

/// Collects report lines, one per frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportAccumulator {
    lines: Vec<String>,
}

impl ReportAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Lines joined with `\n`, without a trailing newline.
    pub fn value(&self) -> String {
        self.lines.join("\n")
    }
}
