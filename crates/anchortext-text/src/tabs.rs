#![forbid(unsafe_code)]

//! Tab expansion.
//!
//! A tab splits a run in two. The text before it stays at the current pen;
//! the pen then jumps right by
//!
//! ```text
//! length * (1 + width(before) / length)
//! ```
//!
//! which is the next multiple of `length` *measured from the start of the
//! text before the tab*, not from column zero. Two runs that start at
//! different x positions therefore do not share tab columns.

use serde::{Deserialize, Serialize};

use crate::metrics::TextMetrics;
use crate::run::TextRun;

/// Horizontal tab (`HT`, `\t`).
pub const TAB: char = '\t';

/// Number of tab stops in the placeholder used by [`TabStops::measured`].
pub const TAB_SIZE: usize = 4;

/// One tab stop in the placeholder; its measured width is halved, so this
/// approximates two average glyphs.
const TAB_PLACEHOLDER: &str = "W|";

/// Tab increment used when expanding runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabStops {
    length: i32,
}

impl TabStops {
    /// Tab length derived from the font: the width of [`TAB_SIZE`] copies of
    /// `"W|"`, halved.
    #[must_use]
    pub fn measured<M: TextMetrics + ?Sized>(metrics: &M) -> Self {
        let placeholder = TAB_PLACEHOLDER.repeat(TAB_SIZE);
        Self::fixed(metrics.width(&placeholder) / 2)
    }

    /// An explicit tab length. Lengths below 1 are clamped to 1.
    #[must_use]
    pub fn fixed(length: i32) -> Self {
        if length < 1 {
            tracing::warn!(requested = length, "tab length clamped to 1");
        }
        Self {
            length: length.max(1),
        }
    }

    /// Tab length equal to the measured width of `sizer`.
    #[must_use]
    pub fn sized_by<M: TextMetrics + ?Sized>(metrics: &M, sizer: &str) -> Self {
        Self::fixed(metrics.width(sizer))
    }

    /// Current tab length (always at least 1).
    #[inline]
    #[must_use]
    pub const fn length(&self) -> i32 {
        self.length
    }

    /// Pen advance for a tab following text of the given width.
    #[inline]
    #[must_use]
    pub const fn advance(&self, preceding_width: i32) -> i32 {
        self.length * (1 + preceding_width / self.length)
    }

    /// Expand every tab in `runs`, preserving run order.
    #[must_use]
    pub fn expand<M>(&self, runs: Vec<TextRun>, metrics: &M) -> Vec<TextRun>
    where
        M: TextMetrics + ?Sized,
    {
        let mut out = Vec::with_capacity(runs.len());
        for run in runs {
            self.expand_run_into(run, metrics, &mut out);
        }
        out
    }

    /// Expand the tabs of a single run.
    #[must_use]
    pub fn expand_run<M>(&self, run: TextRun, metrics: &M) -> Vec<TextRun>
    where
        M: TextMetrics + ?Sized,
    {
        let mut out = Vec::new();
        self.expand_run_into(run, metrics, &mut out);
        out
    }

    fn expand_run_into<M>(&self, run: TextRun, metrics: &M, out: &mut Vec<TextRun>)
    where
        M: TextMetrics + ?Sized,
    {
        if !run.text.contains(TAB) {
            out.push(run);
            return;
        }

        let mut pen = run.anchor;
        let mut rest = run.text.as_str();
        let mut tabs = 0usize;
        while let Some(idx) = rest.find(TAB) {
            let before = &rest[..idx];
            out.push(TextRun::new(before, pen));
            pen = pen.translate(self.advance(metrics.width(before)), 0);
            rest = &rest[idx + TAB.len_utf8()..];
            tabs += 1;
        }
        out.push(TextRun::new(rest, pen));
        tracing::trace!(tabs, length = self.length, end_x = pen.x, "expanded tabs");
    }
}

/// Serializable tab configuration, resolved against a metrics source.
///
/// ```
/// use anchortext_text::{MonospaceMetrics, TabSetting};
///
/// let setting: TabSetting = serde_json::from_str(r#"{"fixed":32}"#).unwrap();
/// assert_eq!(setting.resolve(&MonospaceMetrics::new(6, 14)).length(), 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabSetting {
    /// See [`TabStops::measured`].
    #[default]
    Measured,
    /// See [`TabStops::fixed`].
    Fixed(i32),
    /// See [`TabStops::sized_by`].
    SizedBy(String),
}

impl TabSetting {
    /// Turn the setting into concrete tab stops.
    #[must_use]
    pub fn resolve<M: TextMetrics + ?Sized>(&self, metrics: &M) -> TabStops {
        match self {
            Self::Measured => TabStops::measured(metrics),
            Self::Fixed(length) => TabStops::fixed(*length),
            Self::SizedBy(sizer) => TabStops::sized_by(metrics, sizer),
        }
    }
}
