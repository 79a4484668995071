//! Chart generation and rendering for the dashboard.
//!
//! The spending-by-category pie chart is generated as JSON configuration
//! for the ECharts library and rendered with a corresponding HTML container
//! and JavaScript initialization code.

use charming::{
    Chart,
    component::Legend,
    element::{Tooltip, Trigger},
    series::Pie,
};
use maud::PreEscaped;

use crate::{expense::Category, html::HeadElement};

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// The spending-by-category donut chart.
///
/// Categories with no spending are left out so empty slices do not clutter
/// the legend; the breakdown table below the chart still lists every
/// category.
pub(super) fn spending_chart(category_totals: &[(Category, f64)]) -> Chart {
    let data: Vec<(f64, String)> = category_totals
        .iter()
        .filter(|(_, total)| *total > 0.0)
        .map(|(category, total)| (*total, category.label().to_owned()))
        .collect();

    Chart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().bottom("0%"))
        .series(
            Pie::new()
                .name("Spending by Category")
                .radius(vec!["40%", "70%"])
                .data(data),
        )
}

#[cfg(test)]
mod charts_tests {
    use crate::expense::Category;

    use super::spending_chart;

    #[test]
    fn chart_omits_empty_categories() {
        let totals = Category::ALL.map(|category| {
            let total = if category == Category::Food { 12.5 } else { 0.0 };
            (category, total)
        });

        let options = spending_chart(&totals).to_string();

        assert!(options.contains("Food"));
        assert!(!options.contains("Housing"));
    }
}
