use super::time::format_timestamp;
use catchlog_engine::CatchSummary;
use catchlog_types::{CatchRecord, FishType};
use owo_colors::OwoColorize;
use std::fmt;

const TYPE_WIDTH: usize = 16;
const SIZE_WIDTH: usize = 7;
const LURE_WIDTH: usize = 18;
const LOCATION_WIDTH: usize = 20;

/// Plain-text rendering of the filtered, sorted catch table plus its
/// summary line. An empty set renders the placeholder instead of a table.
pub struct CatchTableView {
    records: Vec<CatchRecord>,
    summary: CatchSummary,
    use_color: bool,
}

impl CatchTableView {
    pub fn new(records: Vec<CatchRecord>, use_color: bool) -> Self {
        let summary = CatchSummary::compute(&records);
        Self {
            records,
            summary,
            use_color,
        }
    }
}

impl fmt::Display for CatchTableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            writeln!(f, "No fish caught yet!")?;
            writeln!(f, "Log your first catch with 'catchlog add'.")?;
            return Ok(());
        }

        let header = format!(
            "{:<TYPE_WIDTH$}  {:>SIZE_WIDTH$}  {:<LURE_WIDTH$}  {:<LOCATION_WIDTH$}  {}",
            "Fish Type", "Size", "Lure Used", "Location", "Date & Time"
        );
        if self.use_color {
            writeln!(f, "{}", header.bold())?;
        } else {
            writeln!(f, "{}", header)?;
        }

        for record in &self.records {
            let type_cell = format!("{:<TYPE_WIDTH$}", clip(record.fish_type.as_str(), TYPE_WIDTH));
            let type_display = if self.use_color {
                match record.fish_type {
                    FishType::LargemouthBass => format!("{}", type_cell.green()),
                    FishType::SmallmouthBass => format!("{}", type_cell.blue()),
                    FishType::RockBass => format!("{}", type_cell.yellow()),
                    FishType::Pike => format!("{}", type_cell.red()),
                }
            } else {
                type_cell
            };

            let time_str = format_timestamp(&record.timestamp);
            let time_display = if self.use_color {
                format!("{}", time_str.bright_black())
            } else {
                time_str
            };

            writeln!(
                f,
                "{}  {:>SIZE_WIDTH$}  {:<LURE_WIDTH$}  {:<LOCATION_WIDTH$}  {}",
                type_display,
                format!("{}\"", record.size),
                clip(&record.lure, LURE_WIDTH),
                clip(&record.location, LOCATION_WIDTH),
                time_display
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{}", summary_line(&self.summary))?;
        Ok(())
    }
}

/// Summary statistics as a single display line.
pub fn summary_line(summary: &CatchSummary) -> String {
    match (summary.biggest, summary.average_display()) {
        (Some(biggest), Some(average)) => format!(
            "Total catches: {} | Biggest fish: {}\" | Average size: {}\"",
            summary.total, biggest, average
        ),
        _ => format!("Total catches: {}", summary.total),
    }
}

fn clip(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catchlog_types::NewCatch;
    use chrono::{TimeZone, Utc};

    fn record(size: f64) -> CatchRecord {
        NewCatch {
            fish_type: FishType::Pike,
            size,
            lure: "Spoon".to_string(),
            location: "Georgian Bay".to_string(),
        }
        .into_record(Utc.with_ymd_and_hms(2024, 6, 1, 7, 45, 0).unwrap())
    }

    #[test]
    fn test_empty_view_renders_placeholder() {
        let view = CatchTableView::new(Vec::new(), false);
        let out = view.to_string();
        assert!(out.contains("No fish caught yet!"));
        assert!(!out.contains("Fish Type"));
    }

    #[test]
    fn test_table_includes_rows_and_summary() {
        let view = CatchTableView::new(vec![record(30.0), record(20.0), record(10.0)], false);
        let out = view.to_string();
        assert!(out.contains("Fish Type"));
        assert!(out.contains("Pike"));
        assert!(out.contains("2024-06-01 07:45"));
        assert!(out.contains("Total catches: 3 | Biggest fish: 30\" | Average size: 20.0\""));
    }

    #[test]
    fn test_long_values_are_clipped() {
        let mut long = record(12.0);
        long.location = "An unreasonably long location name that overflows".to_string();
        let view = CatchTableView::new(vec![long], false);
        assert!(view.to_string().contains('…'));
    }
}
