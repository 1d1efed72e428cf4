//! Sales chart renderer
//!
//! Maps the selected period onto the sales series and computes bar heights
//! proportional to the largest value in that series.

use crate::consts::cli_consts::chart::{BAR_SLOTS, MAX_BAR_HEIGHT_PX, animation};
use crate::records::{Period, SalesSeries};
use std::time::Instant;

/// One rendered bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub value: u64,
    /// Final height in layout pixels, `value / max * MAX_BAR_HEIGHT_PX`.
    pub height_px: f64,
    pub tooltip: String,
}

#[derive(Debug, Clone)]
pub struct ChartRenderer {
    series: SalesSeries,
    active: Period,
    /// Slots beyond the length of the active series stay `None`.
    slots: Vec<Option<Bar>>,
    animation_started: Option<Instant>,
}

/// Computes the bars for a series. A slot without a data point is `None`.
pub fn render_bars(values: &[u64], slots: usize) -> Vec<Option<Bar>> {
    let max = values.iter().copied().max().unwrap_or(0);
    (0..slots)
        .map(|index| {
            values.get(index).map(|&value| {
                let height_px = if max == 0 {
                    0.0
                } else {
                    value as f64 / max as f64 * MAX_BAR_HEIGHT_PX
                };
                Bar {
                    value,
                    height_px,
                    tooltip: format!("${}", value),
                }
            })
        })
        .collect()
}

impl ChartRenderer {
    pub fn new(series: SalesSeries, initial: Period, now: Instant) -> Self {
        let mut chart = Self {
            series,
            active: initial,
            slots: Vec::new(),
            animation_started: None,
        };
        chart.switch_period(initial, now);
        chart
    }

    /// Makes `period` the active one, re-renders every bar and restarts the
    /// entrance animation.
    pub fn switch_period(&mut self, period: Period, now: Instant) {
        self.active = period;
        self.slots = render_bars(self.series.get(period), BAR_SLOTS);
        self.animation_started = Some(now);
    }

    pub fn active(&self) -> Period {
        self.active
    }

    pub fn slots(&self) -> &[Option<Bar>] {
        &self.slots
    }

    /// Eased progress of the bar grow animation in `0.0..=1.0`.
    pub fn animation_progress(&self, now: Instant) -> f64 {
        let Some(started) = self.animation_started else {
            return 1.0;
        };
        let t = now.saturating_duration_since(started).as_secs_f64() / animation().as_secs_f64();
        let t = t.clamp(0.0, 1.0);
        // ease-out cubic
        1.0 - (1.0 - t).powi(3)
    }

    /// Whether the grow animation is still running.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation_progress(now) < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::seed::reference_data;
    use std::time::Duration;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    // The largest month value fills the chart and others scale against it.
    fn test_month_bars_are_proportional_to_max() {
        let now = Instant::now();
        let mut chart = ChartRenderer::new(reference_data().sales_data, Period::Week, now);
        chart.switch_period(Period::Month, now);

        let bars: Vec<&Bar> = chart.slots().iter().flatten().collect();
        assert_eq!(bars.len(), 12);

        let peak = bars.iter().find(|b| b.value == 820).unwrap();
        assert!(approx_eq(peak.height_px, MAX_BAR_HEIGHT_PX));

        let first = bars[0];
        assert_eq!(first.value, 450);
        assert!(approx_eq(first.height_px, 450.0 / 820.0 * MAX_BAR_HEIGHT_PX));
        assert_eq!(first.tooltip, "$450");
    }

    #[test]
    // Shorter series leave the remaining slots unrendered.
    fn test_week_leaves_extra_slots_unrendered() {
        let now = Instant::now();
        let mut chart = ChartRenderer::new(reference_data().sales_data, Period::Month, now);
        chart.switch_period(Period::Week, now);

        assert_eq!(chart.slots().len(), BAR_SLOTS);
        assert!(chart.slots()[..7].iter().all(Option::is_some));
        assert!(chart.slots()[7..].iter().all(Option::is_none));
    }

    #[test]
    // Rendering depends only on the period and the dataset.
    fn test_switch_is_pure_in_period() {
        let now = Instant::now();
        let mut chart = ChartRenderer::new(reference_data().sales_data, Period::Year, now);
        let first = chart.slots().to_vec();
        chart.switch_period(Period::Week, now);
        chart.switch_period(Period::Year, now + Duration::from_secs(3));
        assert_eq!(chart.slots(), first.as_slice());
        assert_eq!(chart.active(), Period::Year);
    }

    #[test]
    fn test_all_zero_series_renders_flat_bars() {
        let bars = render_bars(&[0, 0, 0], 4);
        assert_eq!(bars[0].as_ref().unwrap().height_px, 0.0);
        assert!(bars[3].is_none());
    }

    #[test]
    fn test_empty_series_renders_nothing() {
        assert!(render_bars(&[], 3).iter().all(Option::is_none));
    }

    #[test]
    // Every switch replays the grow animation.
    fn test_switch_restarts_animation() {
        let start = Instant::now();
        let mut chart = ChartRenderer::new(reference_data().sales_data, Period::Week, start);
        assert!(chart.is_animating(start));
        assert!(!chart.is_animating(start + Duration::from_millis(500)));

        let later = start + Duration::from_secs(2);
        chart.switch_period(Period::Week, later);
        assert!(approx_eq(chart.animation_progress(later), 0.0));
        assert!(chart.is_animating(later + Duration::from_millis(100)));
    }
}
