//! 手绘 SVG 图表：折线图与柱状图

use leptos::prelude::*;
use pharmaboard_shared::screens::reports::{Plot, SeriesPoint, svg_points};

const PLOT: Plot = Plot {
    width: 600.0,
    height: 300.0,
    padding: 40.0,
};

/// 纵轴刻度数
const TICKS: usize = 4;

fn ticks(max: f64) -> Vec<(f64, String)> {
    let inner = PLOT.height - 2.0 * PLOT.padding;
    (0..=TICKS)
        .map(|i| {
            let ratio = i as f64 / TICKS as f64;
            let y = PLOT.height - PLOT.padding - ratio * inner;
            (y, format!("{:.0}", max * ratio))
        })
        .collect()
}

#[component]
fn Axes(max: f64, #[prop(optional)] y_label: &'static str) -> impl IntoView {
    let left = PLOT.padding;
    let bottom = PLOT.height - PLOT.padding;
    view! {
        <line x1=left y1=PLOT.padding x2=left y2=bottom stroke="currentColor" stroke-opacity="0.3" />
        <line x1=left y1=bottom x2={PLOT.width - PLOT.padding} y2=bottom stroke="currentColor" stroke-opacity="0.3" />
        {ticks(max)
            .into_iter()
            .map(|(y, text)| view! {
                <text x={left - 6.0} y={y + 4.0} text-anchor="end" font-size="10" fill="currentColor">{text}</text>
            })
            .collect_view()}
        <Show when=move || !y_label.is_empty()>
            <text
                x=12
                y={PLOT.height / 2.0}
                font-size="10"
                fill="currentColor"
                text-anchor="middle"
                transform={format!("rotate(-90 12 {})", PLOT.height / 2.0)}
            >
                {y_label}
            </text>
        </Show>
    }
}

/// 折线图；`point_title` 生成数据点的悬停提示
#[component]
pub fn LineChart(
    points: Vec<SeriesPoint>,
    #[prop(optional)] y_label: &'static str,
    point_title: Box<dyn Fn(&SeriesPoint) -> String>,
) -> impl IntoView {
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let coords = PLOT.line_points(&values);
    let polyline = svg_points(&coords);
    let max = Plot::y_max(&values);

    let dots = points
        .iter()
        .zip(coords.iter().copied())
        .map(|(point, (x, y))| {
            let title = format!("{}\nMontant: Ar{:.2}", point_title(point), point.value);
            let label = point.label.clone();
            view! {
                <circle cx=x cy=y r="4" class="fill-primary">
                    <title>{title}</title>
                </circle>
                <text x=x y={PLOT.height - PLOT.padding + 14.0} text-anchor="middle" font-size="9" fill="currentColor">
                    {label}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg viewBox={format!("0 0 {} {}", PLOT.width, PLOT.height)} class="w-full h-auto">
            <Axes max=max y_label=y_label />
            <polyline points=polyline fill="none" class="stroke-primary" stroke-width="2" />
            {dots}
        </svg>
    }
}

/// 柱状图
#[component]
pub fn BarChart(points: Vec<SeriesPoint>) -> impl IntoView {
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let max = Plot::y_max(&values);

    let bars = points
        .iter()
        .zip(PLOT.bars(&values))
        .map(|(point, (x, y, w, h))| {
            let title = format!("{}: {}", point.label, point.value);
            let label = point.label.clone();
            view! {
                <rect x=x y=y width=w height=h rx="3" class="fill-secondary">
                    <title>{title}</title>
                </rect>
                <text x={x + w / 2.0} y={PLOT.height - PLOT.padding + 14.0} text-anchor="middle" font-size="9" fill="currentColor">
                    {label}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg viewBox={format!("0 0 {} {}", PLOT.width, PLOT.height)} class="w-full h-auto">
            <Axes max=max />
            {bars}
        </svg>
    }
}
