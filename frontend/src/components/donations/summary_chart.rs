use std::rc::Rc;

use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::SeriesPoint;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const CHART_WIDTH: u32 = 320;
const CHART_HEIGHT: u32 = 120;

/// Which running total a summary card plots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesMetric {
    Count,
    Amount,
}

impl SeriesMetric {
    pub fn value(&self, point: &SeriesPoint) -> f64 {
        match self {
            SeriesMetric::Count => point.cumulative_count as f64,
            SeriesMetric::Amount => point.cumulative_amount,
        }
    }

    fn color(&self) -> RGBColor {
        match self {
            SeriesMetric::Count => RGBColor(102, 126, 234),
            SeriesMetric::Amount => RGBColor(40, 167, 69),
        }
    }
}

/// `(x, y)` pairs to plot, x counting from 1
pub fn chart_points(series: &[SeriesPoint], metric: SeriesMetric) -> Vec<(f64, f64)> {
    series
        .iter()
        .map(|point| ((point.index + 1) as f64, metric.value(point)))
        .collect()
}

/// Y-axis range with a little headroom; never empty
pub fn value_range(points: &[(f64, f64)]) -> (f64, f64) {
    let max = points.iter().map(|&(_, y)| y).fold(0.0_f64, f64::max);
    let min = points.iter().map(|&(_, y)| y).fold(0.0_f64, f64::min);
    let span = (max - min).max(1.0);
    (min, max + span * 0.1)
}

/// What the canvas should show for a series
#[derive(Debug, Clone, PartialEq)]
pub enum ChartFrame {
    /// Nothing to plot; the canvas is wiped
    Blank,
    Plot {
        points: Vec<(f64, f64)>,
        y_range: (f64, f64),
    },
}

pub fn chart_frame(series: &[SeriesPoint], metric: SeriesMetric) -> ChartFrame {
    let points = chart_points(series, metric);
    if points.is_empty() {
        return ChartFrame::Blank;
    }
    let y_range = value_range(&points);
    ChartFrame::Plot { points, y_range }
}

#[derive(Properties, PartialEq)]
pub struct SummaryChartProps {
    pub series: Rc<[SeriesPoint]>,
    pub metric: SeriesMetric,
}

pub struct SummaryChart {
    canvas_ref: NodeRef,
}

impl Component for SummaryChart {
    type Message = ();
    type Properties = SummaryChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if !Rc::ptr_eq(&props.series, &old_props.series) || props.metric != old_props.metric {
            self.draw_chart(props);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw_chart(ctx.props());
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="summary-chart">
                <canvas
                    ref={self.canvas_ref.clone()}
                    class="summary-chart-canvas"
                    width={CHART_WIDTH.to_string()}
                    height={CHART_HEIGHT.to_string()}
                ></canvas>
            </div>
        }
    }
}

impl SummaryChart {
    fn draw_chart(&self, props: &SummaryChartProps) {
        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(CHART_WIDTH);
        canvas.set_height(CHART_HEIGHT);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let (points, (y_min, y_max)) = match chart_frame(&props.series, props.metric) {
            ChartFrame::Blank => {
                let _ = root.present();
                return;
            }
            ChartFrame::Plot { points, y_range } => (points, y_range),
        };
        let x_max = (points.len() as f64).max(2.0);

        let mut chart = match ChartBuilder::on(&root)
            .margin(8)
            .x_label_area_size(20)
            .y_label_area_size(50)
            .build_cartesian_2d(1.0..x_max, y_min..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        let metric = props.metric;
        if chart
            .configure_mesh()
            .disable_x_mesh()
            .y_label_formatter(&|v| match metric {
                SeriesMetric::Count => format!("{:.0}", v),
                SeriesMetric::Amount => format!("${:.0}", v),
            })
            .label_style(("sans-serif", 10, &RGBColor(120, 120, 120)))
            .axis_style(&RGBColor(230, 230, 230))
            .light_line_style(&RGBColor(250, 250, 250))
            .x_labels(4)
            .y_labels(4)
            .draw()
            .is_err()
        {
            return;
        }

        let color = metric.color();
        if chart
            .draw_series(
                AreaSeries::new(points.iter().copied(), y_min, &color.mix(0.2))
                    .border_style(color.stroke_width(2)),
            )
            .is_err()
        {
            return;
        }

        let _ = root.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{derive_series, Donation};
    use serde_json::json;

    fn donations() -> Vec<Donation> {
        serde_json::from_value(json!([
            { "_id": "a", "amount": 100 },
            { "_id": "b", "amount": "bad" },
            { "_id": "c", "amount": 50 },
        ]))
        .unwrap()
    }

    #[test]
    fn test_chart_points_follow_metric() {
        let series = derive_series(&donations());
        assert_eq!(
            chart_points(&series, SeriesMetric::Count),
            vec![(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]
        );
        assert_eq!(
            chart_points(&series, SeriesMetric::Amount),
            vec![(1.0, 100.0), (2.0, 100.0), (3.0, 150.0)]
        );
    }

    #[test]
    fn test_empty_series_blanks_the_chart() {
        assert_eq!(chart_frame(&[], SeriesMetric::Amount), ChartFrame::Blank);
        assert_eq!(chart_frame(&derive_series::<Donation>(&[]), SeriesMetric::Count), ChartFrame::Blank);

        match chart_frame(&derive_series(&donations()), SeriesMetric::Amount) {
            ChartFrame::Plot { points, y_range } => {
                assert_eq!(points.last(), Some(&(3.0, 150.0)));
                assert!(y_range.1 > 150.0);
            }
            ChartFrame::Blank => panic!("non-empty series must be plotted"),
        }
    }

    #[test]
    fn test_value_range_has_headroom() {
        let (min, max) = value_range(&[(1.0, 100.0), (2.0, 150.0)]);
        assert_eq!(min, 0.0);
        assert!(max > 150.0);

        let (min, max) = value_range(&[]);
        assert_eq!(min, 0.0);
        assert!(max > min);
    }
}
