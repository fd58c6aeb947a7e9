//! Bar and pie charts drawn with `plotters` onto a `<canvas>`.

use leptos::html::Canvas;
use leptos::prelude::*;
use lokboard_domain::chart::{ChartDatum, ChartKind, pie_slices};
use lokboard_domain::format::format_points;
use lokboard_domain::palette::Color;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;

type DrawResult = Result<(), Box<dyn std::error::Error>>;

fn rgb(color: Color) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

fn draw_bars(canvas: HtmlCanvasElement, data: &[ChartDatum]) -> DrawResult {
    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas unavailable")?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let max = data.iter().map(|d| d.value).fold(0.0_f64, f64::max);
    let top = if max > 0.0 { max * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(80)
        .build_cartesian_2d((0..data.len()).into_segmented(), 0.0..top)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(RGBColor(241, 245, 249))
        .x_labels(data.len())
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) => data.get(*i).map(|d| d.label.clone()).unwrap_or_default(),
            _ => String::new(),
        })
        .y_label_formatter(&|y| format_points(*y))
        .draw()?;

    chart.draw_series(data.iter().enumerate().map(|(i, datum)| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), datum.value),
            ],
            rgb(datum.color).filled(),
        );
        bar.set_margin(0, 0, 6, 6);
        bar
    }))?;

    root.present()?;
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn to_pixel((x, y): (f64, f64)) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

fn draw_pie(canvas: HtmlCanvasElement, data: &[ChartDatum]) -> DrawResult {
    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas unavailable")?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let (width, height) = root.dim_in_pixel();
    let center = (f64::from(width) / 2.0, f64::from(height) / 2.0);
    let radius = f64::from(width.min(height)) * 0.35;
    let label_style = ("sans-serif", 13).into_font().color(&BLACK);

    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    for (datum, slice) in data.iter().zip(pie_slices(&values)) {
        let outline: Vec<(i32, i32)> = slice.outline(center, radius).into_iter().map(to_pixel).collect();
        root.draw(&Polygon::new(outline, rgb(datum.color).filled()))?;
        let anchor = to_pixel(slice.anchor(center, radius * 1.15));
        root.draw(&Text::new(slice.label(&datum.label), anchor, label_style.clone()))?;
    }

    root.present()?;
    Ok(())
}

/// Chart of `data`, redrawn whenever the data or the chart kind changes.
#[component]
pub fn ContributionChart(
    #[prop(into)] data: Signal<Vec<ChartDatum>>,
    #[prop(into, default = Signal::stored(ChartKind::Bar))] kind: Signal<ChartKind>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let data = data.get();
        if data.is_empty() {
            return;
        }
        let drawn = match kind.get() {
            ChartKind::Bar => draw_bars(canvas, &data),
            ChartKind::Pie => draw_pie(canvas, &data),
        };
        if let Err(err) = drawn {
            web_sys::console::warn_1(&format!("Chart rendering failed: {err}").into());
        }
    });

    view! {
        <canvas node_ref=canvas_ref class="chart-canvas" width="900" height="420"></canvas>
    }
}
