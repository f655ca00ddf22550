//! Set Charts
//!
//! Derives plot series from a session's sets. The list endpoint returns
//! newest first, so every series is re-sorted by sequence number before it
//! is plotted. Pure functions, no state.

use crate::models::WorkoutSet;

/// Placeholder shown instead of a chart when a session has no sets
pub const EMPTY_CHART_MESSAGE: &str = "No data yet.";

/// What to plot for each set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartMetric {
    /// weight × reps, one line
    #[default]
    Volume,
    /// Raw weight and reps, two lines
    WeightAndReps,
}

/// One x position of the chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub seq: u64,
    /// One value per series, in [`ChartSeries::names`] order
    pub values: Vec<f64>,
}

/// Points ordered by seq, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub metric: ChartMetric,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Build the series for `sets`, whatever order they arrive in
    pub fn from_sets(sets: &[WorkoutSet], metric: ChartMetric) -> Self {
        let mut sorted: Vec<&WorkoutSet> = sets.iter().collect();
        sorted.sort_by_key(|s| s.seq);

        let points = sorted
            .into_iter()
            .map(|s| ChartPoint {
                seq: s.seq,
                values: match metric {
                    ChartMetric::Volume => vec![s.volume()],
                    ChartMetric::WeightAndReps => vec![s.weight, s.reps as f64],
                },
            })
            .collect();

        Self { metric, points }
    }

    /// Series names, matching the order of [`ChartPoint::values`]
    pub fn names(&self) -> &'static [&'static str] {
        match self.metric {
            ChartMetric::Volume => &["volume"],
            ChartMetric::WeightAndReps => &["weight", "reps"],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest and largest plotted value across all series
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .flat_map(|p| p.values.iter().copied())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Horizontal bar chart for a terminal, `width` columns for the bars.
    ///
    /// Returns the placeholder when there is nothing to plot.
    pub fn render_text(&self, width: usize) -> String {
        let Some((_, max)) = self.value_range() else {
            return EMPTY_CHART_MESSAGE.to_string();
        };

        let names = self.names();
        let mut out = String::new();
        for point in &self.points {
            for (idx, value) in point.values.iter().enumerate() {
                let len = if max > 0.0 {
                    ((value.max(0.0) / max) * width as f64).round() as usize
                } else {
                    0
                };
                let label = if idx == 0 {
                    format!("#{}", point.seq)
                } else {
                    String::new()
                };
                out.push_str(&format!(
                    "{:>5} {:<7} {:<width$} {}\n",
                    label,
                    names[idx],
                    "█".repeat(len),
                    value,
                    width = width
                ));
            }
        }
        out
    }
}

/// Volume per set, ascending by seq
pub fn volume_series(sets: &[WorkoutSet]) -> Vec<(u64, f64)> {
    ChartSeries::from_sets(sets, ChartMetric::Volume)
        .points
        .into_iter()
        .map(|p| (p.seq, p.values[0]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(seq: u64, weight: f64, reps: i64) -> WorkoutSet {
        WorkoutSet {
            seq,
            weight,
            reps,
            note: None,
            created_at: 1_700_000_000 + seq as i64,
        }
    }

    #[test]
    fn test_sorted_by_seq_regardless_of_input_order() {
        let sets = vec![set(3, 50.0, 5), set(1, 40.0, 10), set(2, 45.0, 8)];
        let series = ChartSeries::from_sets(&sets, ChartMetric::Volume);
        let seqs: Vec<u64> = series.points.iter().map(|p| p.seq).collect();
        assert_eq!(seqs, vec![1, 2, 3]);
    }

    #[test]
    fn test_volume_is_weight_times_reps() {
        let sets = vec![set(2, 42.5, 10), set(1, 37.25, 3)];
        assert_eq!(volume_series(&sets), vec![(1, 37.25 * 3.0), (2, 425.0)]);
    }

    #[test]
    fn test_weight_and_reps_variant() {
        let series = ChartSeries::from_sets(&[set(1, 60.0, 8)], ChartMetric::WeightAndReps);
        assert_eq!(series.names(), &["weight", "reps"]);
        assert_eq!(series.points[0].values, vec![60.0, 8.0]);
        assert_eq!(series.value_range(), Some((8.0, 60.0)));
    }

    #[test]
    fn test_input_is_not_reordered() {
        let sets = vec![set(2, 1.0, 1), set(1, 1.0, 1)];
        let _ = ChartSeries::from_sets(&sets, ChartMetric::Volume);
        assert_eq!(sets[0].seq, 2);
    }

    #[test]
    fn test_empty_renders_placeholder() {
        let series = ChartSeries::from_sets(&[], ChartMetric::Volume);
        assert!(series.is_empty());
        assert_eq!(series.render_text(20), EMPTY_CHART_MESSAGE);
    }

    #[test]
    fn test_render_text_scales_to_width() {
        let series = ChartSeries::from_sets(&[set(2, 50.0, 2), set(1, 50.0, 1)], ChartMetric::Volume);
        let text = series.render_text(10);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("#1"));
        assert_eq!(lines[0].matches('█').count(), 5);
        assert_eq!(lines[1].matches('█').count(), 10);
    }
}
