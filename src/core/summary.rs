use ordered_float::OrderedFloat;

/// Aggregate statistics of one plotted series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeriesSummary {
    pub max: f64,
    pub min: f64,
    pub average: f64,
}

impl SeriesSummary {
    #[must_use]
    pub fn new(max: f64, min: f64, average: f64) -> Self {
        Self { max, min, average }
    }

    /// Derives the summary from raw samples.
    ///
    /// Non-finite samples (missing values are encoded as NaN upstream) are
    /// skipped. A series with no finite sample yields an all-zero summary.
    #[must_use]
    pub fn from_samples(samples: &[f64]) -> Self {
        let finite = samples.iter().copied().filter(|value| value.is_finite());

        let max = finite.clone().map(OrderedFloat).max();
        let min = finite.clone().map(OrderedFloat).min();
        let (count, sum) = finite.fold((0usize, 0.0), |(count, sum), value| {
            (count + 1, sum + value)
        });

        match (max, min) {
            (Some(max), Some(min)) => Self {
                max: max.into_inner(),
                min: min.into_inner(),
                average: sum / count as f64,
            },
            _ => Self::default(),
        }
    }
}
