use knap_benchmarker::ComparisonReport;
use knap_utils::format_duration;
use std::time::Duration;

pub const BAR_WIDTH: usize = 40;

pub fn table(comparison: &ComparisonReport) -> String {
    let header = ["Algorithm", "Value", "Items", "Average", "Min", "Max"];
    let rows: Vec<[String; 6]> = comparison
        .reports
        .iter()
        .map(|report| {
            let stats = report.stats();
            let stat = |f: fn(&knap_utils::RuntimeStats) -> Duration| {
                stats
                    .as_ref()
                    .map(|s| format_duration(f(s)))
                    .unwrap_or_else(|| "-".to_string())
            };
            [
                report.algorithm.label().to_string(),
                report.solution.value.to_string(),
                format!("{:?}", report.solution.positions()),
                format_duration(report.average()),
                stat(|s| s.min),
                stat(|s| s.max),
            ]
        })
        .collect();

    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .collect();
        format!("| {} |\n", padded.join(" | "))
    };
    let separator = format!(
        "|{}|\n",
        widths
            .iter()
            .map(|&w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("|")
    );

    let mut out = line(header.to_vec());
    out.push_str(&separator);
    for row in &rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out
}

/// Horizontal bars scaled so the slowest algorithm spans `width` cells.
pub fn bar_chart(summary: &[(&str, Duration)], width: usize) -> String {
    let slowest = summary
        .iter()
        .map(|(_, d)| d.as_nanos())
        .max()
        .unwrap_or(0);
    let label_width = summary
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for (label, average) in summary {
        let len = if slowest == 0 {
            0
        } else {
            ((average.as_nanos() * width as u128 + slowest - 1) / slowest) as usize
        };
        out.push_str(&format!(
            "{:<label_width$} {} {}\n",
            label,
            "#".repeat(len),
            format_duration(*average),
            label_width = label_width
        ));
    }
    out
}
