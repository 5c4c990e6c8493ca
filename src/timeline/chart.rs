//! ECharts configuration for a goal's balance timeline.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{
        AreaStyle, AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip,
        Trigger,
    },
    series::Line,
};

use crate::timeline::builder::TimelinePoint;

/// Line chart of the running balance, one point per contribution.
///
/// The x axis uses the point keys so that contributions made on the same day
/// stay separate, and the axis labels strip the key suffix to show the date.
///
/// Like every chart with formatter functions, `to_string` gives a JavaScript
/// object literal for `chart.setOption`, not strict JSON.
pub fn balance_chart(goal_name: &str, points: &[TimelinePoint]) -> Chart {
    let keys: Vec<String> = points.iter().map(|point| point.key.clone()).collect();
    let balances: Vec<f64> = points.iter().map(|point| point.balance).collect();

    Chart::new()
        .title(Title::new().text(goal_name).subtext("Balance over time"))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .axis_label(AxisLabel::new().formatter(key_label_formatter()))
                .data(keys),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Line::new()
                .name("Balance")
                .area_style(AreaStyle::new())
                .data(balances),
        )
}

/// Keys look like "Jan 05_3", show only the "Jan 05" part.
fn key_label_formatter() -> JsFunction {
    JsFunction::new_with_args("value", "return String(value).split('_')[0];")
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-IN', {
              style: 'currency',
              currency: 'INR'
            });
            return (number || number === 0) ? currencyFormatter.format(number) : \"-\";",
    )
}

fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line))
}
