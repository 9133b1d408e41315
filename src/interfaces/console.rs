// ============================================================
// CONSOLE REPORT
// ============================================================
// Plain-text rendering of a MarketReport

use std::io::{self, Write};

use crate::application::use_cases::frequency::FrequencyTable;
use crate::application::use_cases::grouped_average::GroupAverage;
use crate::application::use_cases::market_report::{DatasetOverview, MarketReport};

/// Whole numbers keep one decimal ("7.0"), everything else its shortest form
pub fn format_percentage(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Quoted list in the `['a', 'b']` form; a value holding `'` and no `"` is double-quoted
pub fn format_list(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|v| quote(v)).collect();
    format!("[{}]", items.join(", "))
}

fn quote(value: &str) -> String {
    if value.contains('\'') && !value.contains('"') {
        return format!("\"{}\"", value.replace('\\', "\\\\"));
    }
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}

/// Write the full report
pub fn render<W: Write>(report: &MarketReport, out: &mut W) -> io::Result<()> {
    heading(out, "Dataset shapes")?;
    for overview in [&report.apple_overview, &report.google_overview] {
        writeln!(
            out,
            "{}: {} rows x {} columns",
            overview.label, overview.rows, overview.columns
        )?;
    }

    render_preview(out, &report.apple_overview)?;
    render_preview(out, &report.google_overview)?;

    heading(out, "Google Play duplicates")?;
    writeln!(out, "Duplicate apps: {}", report.google_duplicates.duplicates)?;
    writeln!(out, "Unique apps: {}", report.google_duplicates.unique)?;

    heading(out, "Language heuristic")?;
    for (name, keep) in &report.language_samples {
        writeln!(out, "{} : {}", name, if *keep { "keep" } else { "discard" })?;
    }

    heading(out, "Cleaning stages")?;
    for stage in &report.stages {
        writeln!(out, "{} {} : {}", stage.dataset, stage.stage, stage.rows)?;
    }

    render_table(out, "App Store prime_genre (%)", &report.apple_genres)?;
    render_table(out, "Google Play Category (%)", &report.google_categories)?;
    render_table(out, "Google Play Genres (%)", &report.google_genres)?;
    render_table(out, "Google Play Installs (%)", &report.google_installs)?;

    render_averages(
        out,
        "App Store average user ratings by genre",
        &report.apple_genre_list,
        &report.apple_ratings_by_genre,
    )?;
    render_averages(
        out,
        "Google Play average installs by category",
        &report.google_category_list,
        &report.google_installs_by_category,
    )?;

    for drilldown in &report.drilldowns {
        heading(out, &drilldown.title)?;
        if drilldown.apps.is_empty() {
            writeln!(out, "(none)")?;
        }
        for (name, metric) in &drilldown.apps {
            writeln!(out, "{} : {}", name, metric)?;
        }
    }

    Ok(())
}

fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "== {} ==", title)
}

fn render_preview<W: Write>(out: &mut W, overview: &DatasetOverview) -> io::Result<()> {
    if overview.preview.is_empty() {
        return Ok(());
    }

    heading(out, &format!("{} preview", overview.label))?;
    writeln!(out, "{}", format_list(&overview.header))?;
    writeln!(out)?;
    for row in &overview.preview {
        writeln!(out, "{}", format_list(&row.values))?;
        writeln!(out)?;
    }
    Ok(())
}

fn render_table<W: Write>(out: &mut W, title: &str, table: &FrequencyTable) -> io::Result<()> {
    heading(out, title)?;
    for entry in &table.entries {
        writeln!(out, "{} : {}", entry.value, format_percentage(entry.percentage))?;
    }
    Ok(())
}

fn render_averages<W: Write>(
    out: &mut W,
    title: &str,
    groups: &[String],
    averages: &[GroupAverage],
) -> io::Result<()> {
    heading(out, title)?;
    writeln!(out, "{}", format_list(groups))?;
    for avg in averages {
        writeln!(out, "{} : {}", avg.group, avg.average)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::market_report::MarketProfiler;
    use crate::domain::dataset::AnalysisConfig;

    const APPLE_CSV: &str = "\
id,track_name,size_bytes,currency,price,rating_count_tot,rating_count_ver,user_rating,user_rating_ver,ver,cont_rating,prime_genre,sup_devices.num,ipadSc_urls.num,lang.num,vpp_lic
1,Waze,100,USD,0.0,10,1,4.5,4.5,1.0,4+,A,38,5,10,1
2,Maps,100,USD,0.0,20,1,4.5,4.5,1.0,4+,A,38,5,10,1
3,Tunes,100,USD,0.0,5,1,4.5,4.5,1.0,4+,B,38,5,10,1";

    const GOOGLE_CSV: &str = "\
App,Category,Rating,Reviews,Size,Installs,Type,Price,Content Rating,Genres,Last Updated,Current Ver,Android Ver
X,TOOLS,4.1,10,19M,\"1,000+\",Free,0,Everyone,Tools,\"January 7, 2018\",1.0.0,4.0.3 and up
X,TOOLS,4.1,20,19M,\"5,000+\",Free,0,Everyone,Tools,\"January 7, 2018\",1.0.0,4.0.3 and up
Y,COMMUNICATION,4.1,5,19M,\"100,000,000+\",Free,0,Everyone,Communication,\"January 7, 2018\",1.0.0,4.0.3 and up";

    fn rendered() -> String {
        let report = MarketProfiler::new(AnalysisConfig::fixture())
            .profile_content(APPLE_CSV, GOOGLE_CSV)
            .unwrap();
        let mut out = Vec::new();
        render(&report, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(7.0), "7.0");
        assert_eq!(format_percentage(58.16), "58.16");
        assert_eq!(format_percentage(33.3), "33.3");
    }

    #[test]
    fn test_format_list() {
        let values = vec!["Games".to_string(), "Book".to_string()];
        assert_eq!(format_list(&values), "['Games', 'Book']");
        assert_eq!(format_list(&[]), "[]");
        assert_eq!(format_list(&["Tom's".to_string()]), "[\"Tom's\"]");
        assert_eq!(format_list(&["a'b\"c".to_string()]), "['a\\'b\"c']");
    }

    #[test]
    fn test_group_list_line() {
        assert!(rendered().contains("['A', 'B']"));
    }

    #[test]
    fn test_grouped_average_lines_in_first_seen_order() {
        let text = rendered();
        let a = text.find("A : 15").unwrap();
        let b = text.find("B : 5").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_frequency_lines() {
        let text = rendered();
        assert!(text.contains("A : 66.67"));
        assert!(text.contains("B : 33.33"));
        assert!(text.contains("TOOLS : 50.0"));
        assert!(text.contains("Duplicate apps: 1"));
        assert!(text.contains("Unique apps: 2"));
    }

    #[test]
    fn test_no_preview_when_disabled() {
        assert!(!rendered().contains("preview"));
    }
}
