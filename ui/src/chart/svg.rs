//! Renders a [`ChartSpec`] to standalone SVG markup.
//!
//! Used both for the on-screen chart and for exports, so the markup is
//! self-contained: no external styles, fonts referenced by family only.

use crate::core::dataset::Year;
use crate::core::format::format_compact;
use crate::core::scale::Normalization;

use super::spec::{Bar, ChartSpec, Facet};

const FONT_FAMILY: &str = "Inter, Helvetica, Arial, sans-serif";
const PAD: f64 = 16.0;
const HEADER_H: f64 = 64.0;
const LEGEND_H: f64 = 28.0;

const FACET_PANEL: PanelSize = PanelSize { w: 200.0, h: 150.0 };
const NATIONAL_PANEL: PanelSize = PanelSize { w: 720.0, h: 420.0 };
const EMPTY_H: f64 = 120.0;

#[derive(Clone, Copy)]
struct PanelSize {
    w: f64,
    h: f64,
}

#[derive(Clone, Copy)]
struct PlotArea {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

pub fn render(spec: &ChartSpec) -> String {
    let panel = if spec.facet_by.is_some() {
        FACET_PANEL
    } else {
        NATIONAL_PANEL
    };

    let (width, body_h) = if spec.is_empty() {
        (NATIONAL_PANEL.w + PAD * 2.0, EMPTY_H)
    } else {
        (
            spec.grid.columns as f64 * panel.w + PAD * 2.0,
            spec.grid.rows as f64 * panel.h,
        )
    };
    let height = HEADER_H + LEGEND_H + body_h + PAD;

    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="{FONT_FAMILY}">"#
    ));
    out.push_str(&format!(
        r##"<rect width="{width}" height="{height}" fill="#ffffff"/>"##
    ));

    render_header(&mut out, spec);
    render_legend(&mut out, spec);

    let top = HEADER_H + LEGEND_H;
    if spec.is_empty() {
        out.push_str(&format!(
            r##"<text x="{}" y="{}" text-anchor="middle" font-size="14" fill="#6b7280">No results for the current selection</text>"##,
            width / 2.0,
            top + EMPTY_H / 2.0
        ));
    } else {
        let categories = spec.categories();
        for (idx, facet) in spec.facets.iter().enumerate() {
            let column = idx % spec.grid.columns;
            let row = idx / spec.grid.columns;
            let x0 = PAD + column as f64 * panel.w;
            let y0 = top + row as f64 * panel.h;
            render_panel(&mut out, spec, facet, &categories, x0, y0, panel);
        }
    }

    out.push_str("</svg>");
    out
}

fn render_header(out: &mut String, spec: &ChartSpec) {
    out.push_str(&format!(
        r##"<text x="{PAD}" y="28" font-size="20" font-weight="600" fill="#111827">{}</text>"##,
        escape_xml(spec.title)
    ));
    out.push_str(&format!(
        r##"<text x="{PAD}" y="50" font-size="13" fill="#4b5563">{}</text>"##,
        escape_xml(spec.subtitle)
    ));
}

fn render_legend(out: &mut String, spec: &ChartSpec) {
    let y = HEADER_H + 6.0;
    let mut x = PAD;
    for entry in &spec.legend {
        out.push_str(&format!(
            r#"<rect x="{x}" y="{y}" width="12" height="12" rx="2" fill="{}"/>"#,
            entry.color
        ));
        out.push_str(&format!(
            r##"<text x="{}" y="{}" font-size="12" fill="#374151">{}</text>"##,
            x + 18.0,
            y + 10.5,
            escape_xml(entry.party.label())
        ));
        x += 30.0 + entry.party.label().len() as f64 * 7.0;
    }
}

fn render_panel(
    out: &mut String,
    spec: &ChartSpec,
    facet: &Facet,
    categories: &[Year],
    x0: f64,
    y0: f64,
    panel: PanelSize,
) {
    let national = spec.facet_by.is_none();
    let (left, bottom) = if national { (64.0, 44.0) } else { (40.0, 22.0) };
    let top = if facet.title.is_some() { 20.0 } else { 8.0 };
    let plot = PlotArea {
        x: x0 + left,
        y: y0 + top,
        w: panel.w - left - 8.0,
        h: panel.h - top - bottom,
    };

    if let Some(title) = facet.title.as_deref() {
        out.push_str(&format!(
            r##"<text x="{}" y="{}" text-anchor="middle" font-size="12" font-weight="600" fill="#111827">{}</text>"##,
            plot.x + plot.w / 2.0,
            y0 + 14.0,
            escape_xml(title)
        ));
    }

    render_y_axis(out, spec, plot);

    let slot = plot.w / categories.len().max(1) as f64;
    for (idx, year) in categories.iter().enumerate() {
        let center = plot.x + slot * (idx as f64 + 0.5);
        out.push_str(&format!(
            r##"<text x="{center}" y="{}" text-anchor="middle" font-size="10" fill="#4b5563">{year}</text>"##,
            plot.y + plot.h + 13.0
        ));
        if let Some(bar) = facet.bars.iter().find(|bar| bar.year == *year) {
            render_bar(out, bar, spec.y_max, plot, center, slot * 0.7);
        }
    }

    out.push_str(&format!(
        r##"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#9ca3af" stroke-width="1"/>"##,
        plot.x,
        plot.y + plot.h,
        plot.x + plot.w,
        plot.y + plot.h
    ));

    if let Some(title) = spec.x_axis.title {
        out.push_str(&format!(
            r##"<text x="{}" y="{}" text-anchor="middle" font-size="12" fill="#374151">{}</text>"##,
            plot.x + plot.w / 2.0,
            plot.y + plot.h + 34.0,
            escape_xml(title)
        ));
    }
    if let Some(title) = spec.y_axis.title {
        let cx = x0 + 14.0;
        let cy = plot.y + plot.h / 2.0;
        out.push_str(&format!(
            r##"<text x="{cx}" y="{cy}" text-anchor="middle" font-size="12" fill="#374151" transform="rotate(-90 {cx} {cy})">{}</text>"##,
            escape_xml(title)
        ));
    }
}

fn render_y_axis(out: &mut String, spec: &ChartSpec, plot: PlotArea) {
    let y_max = spec.y_max.max(1);
    let ticks = spec
        .y_axis
        .ticks
        .clone()
        .unwrap_or_else(|| (0..=4).map(|step| y_max * step / 4).collect());

    for tick in ticks {
        let y = plot.y + plot.h - tick as f64 / y_max as f64 * plot.h;
        out.push_str(&format!(
            r##"<line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="#e5e7eb" stroke-width="1"/>"##,
            plot.x,
            plot.x + plot.w
        ));
        out.push_str(&format!(
            r##"<text x="{}" y="{}" text-anchor="end" font-size="10" fill="#6b7280">{}</text>"##,
            plot.x - 4.0,
            y + 3.5,
            tick_label(spec.normalization, tick)
        ));
    }
}

fn render_bar(out: &mut String, bar: &Bar, y_max: u64, plot: PlotArea, center: f64, width: f64) {
    let scale = plot.h / y_max.max(1) as f64;
    let x = center - width / 2.0;
    let mut stacked: f64 = 0.0;

    for segment in &bar.segments {
        let bottom = stacked.min(plot.h);
        stacked += segment.value * scale;
        let top = stacked.min(plot.h);
        let height = top - bottom;
        if height <= 0.0 {
            continue;
        }
        out.push_str(&format!(
            r#"<rect x="{x}" y="{}" width="{width}" height="{height}" fill="{}"><title>{}</title></rect>"#,
            plot.y + plot.h - top,
            segment.party.color(),
            escape_xml(&segment.hover)
        ));
    }
}

fn tick_label(normalization: Normalization, tick: u64) -> String {
    match normalization {
        Normalization::Percent => format!("{tick}%"),
        Normalization::None => format_compact(tick as f64),
    }
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{build, Segment};
    use crate::core::aggregate::AggregatedRow;
    use crate::core::dataset::Party;

    fn rows() -> Vec<AggregatedRow> {
        [("CA", Party::Democrat, 1000), ("TX", Party::Republican, 600)]
            .into_iter()
            .map(|(state, party, votes)| AggregatedRow {
                state: Some(state.to_string()),
                year: Year(2020),
                candidate: "X".to_string(),
                party,
                votes,
            })
            .collect()
    }

    #[test]
    fn renders_one_titled_panel_per_facet() {
        let spec = build(rows(), 10_000_000, Normalization::None, false, 10);
        let svg = render(&spec);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(">CA</text>"));
        assert!(svg.contains(">TX</text>"));
        assert!(svg.contains("US Presidential Election, Popular Vote"));
        assert!(svg.contains("#00AEF3"));
        assert!(svg.contains("<title>Democrat\nYear: 2020\nVotes: 1,000</title>"));
    }

    #[test]
    fn facet_ticks_use_compact_labels() {
        let spec = build(rows(), 10_000_000, Normalization::None, false, 10);
        let svg = render(&spec);
        assert!(svg.contains(">5M</text>"));
        assert!(svg.contains(">10M</text>"));
    }

    #[test]
    fn percent_ticks_carry_percent_sign() {
        let spec = build(rows(), 100, Normalization::Percent, false, 10);
        let svg = render(&spec);
        assert!(svg.contains(">50%</text>"));
        assert!(svg.contains("Relative % of votes by Year and State"));
    }

    #[test]
    fn empty_chart_renders_placeholder() {
        let spec = build(Vec::new(), 10_000_000, Normalization::None, false, 10);
        let svg = render(&spec);
        assert!(svg.contains("No results for the current selection"));
        assert!(!svg.contains("<title>"));
    }

    #[test]
    fn segments_stack_upward_and_clip_at_the_plot_top() {
        let segment = |party: Party, value: f64| Segment {
            party,
            votes: value as u64,
            value,
            hover: party.label().to_string(),
        };
        let bar = Bar {
            year: Year(2020),
            total_votes: 110,
            segments: vec![
                segment(Party::Democrat, 60.0),
                segment(Party::Republican, 40.0),
                segment(Party::ThirdParty, 10.0),
            ],
        };
        let plot = PlotArea {
            x: 0.0,
            y: 10.0,
            w: 100.0,
            h: 200.0,
        };

        let mut out = String::new();
        render_bar(&mut out, &bar, 100, plot, 50.0, 20.0);

        // Democrat spans 0..120 px from the baseline, Republican 120..200.
        assert!(out.contains(r##"<rect x="40" y="90" width="20" height="120" fill="#00AEF3">"##));
        assert!(out.contains(r##"<rect x="40" y="10" width="20" height="80" fill="#E9141D">"##));
        // Nothing is left above y_max for the third segment.
        assert_eq!(out.matches("<rect").count(), 2);
        assert!(!out.contains("#007D10"));
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(escape_xml("Relative % <of> & \"votes\""), "Relative % &lt;of&gt; &amp; &quot;votes&quot;");
    }
}
