//! Plotly figure construction.

use serde_json::{json, Value};
use viralscope_analyzer::{ChartKind, ChartSeries};

const BAR_COLOR: &str = "#ff4d6d";
const TEMPLATE: &str = "plotly_white";

/// Build the Plotly figure (`{data, layout}`) for one series.
#[must_use]
pub fn figure_json(series: &ChartSeries) -> Value {
    let trace = match series.kind {
        ChartKind::VerticalBar => json!({
            "type": "bar",
            "x": series.labels,
            "y": series.values,
            "marker": { "color": BAR_COLOR },
        }),
        // Plotly draws the first category at the bottom; reverse so rank 1 is on top.
        ChartKind::HorizontalBar => json!({
            "type": "bar",
            "orientation": "h",
            "x": series.values.iter().rev().collect::<Vec<_>>(),
            "y": series.labels.iter().rev().collect::<Vec<_>>(),
            "marker": { "color": BAR_COLOR },
        }),
        ChartKind::Pie => json!({
            "type": "pie",
            "labels": series.labels,
            "values": series.values,
            "hole": 0.3,
        }),
    };

    let mut layout = json!({
        "title": { "text": series.title },
        "template": TEMPLATE,
    });
    if series.kind != ChartKind::Pie {
        layout["xaxis"] = json!({ "title": { "text": series.x_label } });
        layout["yaxis"] = json!({ "title": { "text": series.y_label } });
    }

    json!({ "data": [trace], "layout": layout })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(kind: ChartKind) -> ChartSeries {
        ChartSeries {
            kind,
            title: "Top Tags".to_string(),
            x_label: "Uses".to_string(),
            y_label: "Tag".to_string(),
            labels: vec!["#a".to_string(), "#b".to_string(), "#c".to_string()],
            values: vec![5, 3, 1],
        }
    }

    #[test]
    fn vertical_bar_keeps_rank_order() {
        let fig = figure_json(&series(ChartKind::VerticalBar));
        let trace = &fig["data"][0];
        assert_eq!(trace["type"], "bar");
        assert!(trace.get("orientation").is_none());
        assert_eq!(trace["x"], json!(["#a", "#b", "#c"]));
        assert_eq!(trace["y"], json!([5, 3, 1]));
        assert_eq!(fig["layout"]["xaxis"]["title"]["text"], "Uses");
    }

    #[test]
    fn horizontal_bar_puts_top_entry_last() {
        let fig = figure_json(&series(ChartKind::HorizontalBar));
        let trace = &fig["data"][0];
        assert_eq!(trace["orientation"], "h");
        assert_eq!(trace["y"], json!(["#c", "#b", "#a"]));
        assert_eq!(trace["x"], json!([1, 3, 5]));
    }

    #[test]
    fn pie_has_no_axes() {
        let fig = figure_json(&series(ChartKind::Pie));
        assert_eq!(fig["data"][0]["type"], "pie");
        assert_eq!(fig["data"][0]["values"], json!([5, 3, 1]));
        assert!(fig["layout"].get("xaxis").is_none());
        assert_eq!(fig["layout"]["title"]["text"], "Top Tags");
    }
}
