//! Report rendering for [`Insights`].
//!
//! Two text layouts share the same section order: overview, duration
//! distribution, tags, music, categories, recommendations.
//! [`render_text`] draws duration bars proportional to the raw count;
//! [`render_table`] shows each duration's share of `total_records`.
//! [`render_chart_series`] reshapes the same fields for a [`ChartSink`].
//!
//! [`ChartSink`]: crate::series::ChartSink

use std::collections::BTreeMap;

use crate::insights::{Insights, RankedEntry};
use crate::rules::recommendations;
use crate::series::{
    ChartKind, ChartSeries, CATEGORIES_SERIES, DURATION_SERIES, MUSIC_SERIES, TAGS_SERIES,
};

/// Block characters per record in the text report's duration bars.
const TEXT_BAR_SCALE: usize = 2;
const BAR_CHAR: char = '\u{2588}';
const RULE_WIDTH: usize = 60;

/// One row of the duration table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationShare {
    pub duration: u32,
    pub count: usize,
    /// `100 * count / total_records`.
    pub percentage: f64,
}

/// Each duration's share of the analyzed records, ascending by duration.
///
/// The denominator is always `total_records`, so the percentages sum to 100.
#[must_use]
pub fn duration_shares(insights: &Insights) -> Vec<DurationShare> {
    #[allow(clippy::cast_precision_loss)]
    let total = insights.total_records() as f64;
    insights
        .duration_distribution()
        .iter()
        .map(|(&duration, &count)| {
            #[allow(clippy::cast_precision_loss)]
            let percentage = 100.0 * count as f64 / total;
            DurationShare {
                duration,
                count,
                percentage,
            }
        })
        .collect()
}

/// Render the full text report.
#[must_use]
pub fn render_text(insights: &Insights) -> String {
    let mut out = String::new();

    out.push_str(&banner("Viral Video Pattern Report"));

    section(&mut out, "Overview");
    out.push_str(&format!(
        "\u{2022} Videos analyzed: {}\n",
        insights.total_records()
    ));
    out.push_str(&format!(
        "\u{2022} Average views: {}\n",
        format_thousands(insights.avg_views())
    ));
    out.push_str(&format!(
        "\u{2022} Average likes: {}\n",
        format_thousands(insights.avg_likes())
    ));
    out.push_str(&format!(
        "\u{2022} Average duration: {}s\n",
        insights.avg_duration()
    ));

    section(&mut out, "Optimal Duration");
    out.push_str(&format!(
        "Sweet spot: {}s\n\nDuration distribution:\n",
        insights.optimal_duration()
    ));
    for (&duration, &count) in insights.duration_distribution() {
        let bar = bar(count * TEXT_BAR_SCALE);
        out.push_str(&format!("  {duration:>3}s: {bar} ({count})\n"));
    }

    ranked_section(&mut out, "Top Tags", insights.top_tags());
    ranked_section(&mut out, "Top Music", insights.top_music());
    ranked_section(&mut out, "Top Categories", insights.top_categories());

    section(&mut out, "Recommendations");
    for (i, item) in recommendations(insights).iter().enumerate() {
        out.push_str(&format!("{}. {item}\n", i + 1));
    }

    out
}

/// Render the table view, where each duration row carries its percentage of
/// `total_records` and a bar of one block per two percent.
#[must_use]
pub fn render_table(insights: &Insights) -> String {
    let mut out = String::new();

    section(&mut out, "Overview");
    let overview = [
        ("Videos analyzed", insights.total_records().to_string()),
        ("Average views", format_thousands(insights.avg_views())),
        ("Average likes", format_thousands(insights.avg_likes())),
        ("Average duration", format!("{}s", insights.avg_duration())),
        ("Optimal duration", format!("{}s", insights.optimal_duration())),
    ];
    for (label, value) in overview {
        out.push_str(&format!("  {label:<20}{value}\n"));
    }

    section(&mut out, "Duration Distribution");
    out.push_str(&format!(
        "  {:<10}{:<8}{:<9}{}\n",
        "Duration", "Count", "Share", "Bar"
    ));
    for share in duration_shares(insights) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let width = (share.percentage / 2.0) as usize;
        let duration = format!("{}s", share.duration);
        let percentage = format!("{:.1}%", share.percentage);
        out.push_str(&format!(
            "  {duration:<10}{:<8}{percentage:<9}{}\n",
            share.count,
            bar(width)
        ));
    }

    ranked_table(&mut out, "Top Tags", "Tag", insights.top_tags());
    ranked_table(&mut out, "Top Music", "Music", insights.top_music());
    ranked_table(
        &mut out,
        "Top Categories",
        "Category",
        insights.top_categories(),
    );

    section(&mut out, "Recommendations");
    for (i, item) in recommendations(insights).iter().enumerate() {
        out.push_str(&format!("{}. {item}\n", i + 1));
    }

    out
}

/// Reshape insights into the four chart series. No statistic is recomputed.
#[must_use]
pub fn render_chart_series(insights: &Insights) -> BTreeMap<String, ChartSeries> {
    let (duration_labels, duration_values): (Vec<String>, Vec<usize>) = insights
        .duration_distribution()
        .iter()
        .map(|(duration, &count)| (format!("{duration}s"), count))
        .unzip();

    let mut series = BTreeMap::new();
    series.insert(
        DURATION_SERIES.to_string(),
        ChartSeries {
            kind: ChartKind::VerticalBar,
            title: "Duration Distribution".to_string(),
            x_label: "Duration".to_string(),
            y_label: "Videos".to_string(),
            labels: duration_labels,
            values: duration_values,
        },
    );
    series.insert(
        TAGS_SERIES.to_string(),
        ranked_series(ChartKind::HorizontalBar, "Top Tags", "Uses", "Tag", insights.top_tags()),
    );
    series.insert(
        MUSIC_SERIES.to_string(),
        ranked_series(ChartKind::VerticalBar, "Top Music", "Music", "Uses", insights.top_music()),
    );
    series.insert(
        CATEGORIES_SERIES.to_string(),
        ranked_series(
            ChartKind::Pie,
            "Category Distribution",
            "Category",
            "Videos",
            insights.top_categories(),
        ),
    );
    series
}

fn ranked_series(
    kind: ChartKind,
    title: &str,
    x_label: &str,
    y_label: &str,
    entries: &[RankedEntry],
) -> ChartSeries {
    ChartSeries {
        kind,
        title: title.to_string(),
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        labels: entries.iter().map(|e| e.value.clone()).collect(),
        values: entries.iter().map(|e| e.count).collect(),
    }
}

fn banner(title: &str) -> String {
    let inner = RULE_WIDTH + 2;
    format!(
        "\u{2554}{line}\u{2557}\n\u{2551}{title:^inner$}\u{2551}\n\u{255a}{line}\u{255d}\n",
        line = "\u{2550}".repeat(inner),
    )
}

fn section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"\u{2501}".repeat(RULE_WIDTH));
    out.push('\n');
}

fn ranked_section(out: &mut String, title: &str, entries: &[RankedEntry]) {
    section(out, title);
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!("  {}. {} ({})\n", i + 1, entry.value, entry.count));
    }
}

fn ranked_table(out: &mut String, title: &str, column: &str, entries: &[RankedEntry]) {
    section(out, title);
    out.push_str(&format!("  {:<6}{column:<32}Count\n", "Rank"));
    for (i, entry) in entries.iter().enumerate() {
        let rank = format!("#{}", i + 1);
        out.push_str(&format!("  {rank:<6}{:<32}{}\n", entry.value, entry.count));
    }
}

fn bar(width: usize) -> String {
    std::iter::repeat_n(BAR_CHAR, width).collect()
}

/// `1234567` -> `"1,234,567"`.
fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
