//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::grade::INVALID_GRADE;
use crate::progression::{ExperienceBreakdown, PlayerProgression};
use crate::ranking::RankedEntry;
use crate::record::{ClearType, LineColor, Mode, ScoreRecord};

use super::format_score;

const BORDER_WIDTH: usize = 56;

/// Format a leaderboard as a boxed table.
pub fn format_ranking_console(mode: Mode, entries: &[RankedEntry<'_>]) -> String {
    let mut output = String::new();
    let border = "━".repeat(BORDER_WIDTH);
    let border_dim = border.dimmed();
    let descriptor = mode.descriptor();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  {} ({} records)",
        mode.as_str().to_uppercase().bold(),
        entries.len()
    );
    let _ = writeln!(output, "{}", border_dim);

    if entries.is_empty() {
        let _ = writeln!(output, "  {}", "No records".dimmed());
    }

    for entry in entries {
        let record = entry.record;
        let mut line = format!(
            "  {:>4}. {:<20} {:>8}",
            entry.rank,
            truncate(&record.name, 20),
            format_score(record.score_or_zero())
        );
        if descriptor.grade_scale.is_some() || !descriptor.top_grades.is_empty() {
            let _ = write!(line, "  {}", format_colored_grade(mode, record));
        }
        if descriptor.has_line {
            let _ = write!(line, " {}", format_colored_line(record.line_color()));
        }
        if record.has_time() {
            let _ = write!(line, "  {}", record.time.as_deref().unwrap_or_default());
        }
        if let Some(clear_type) = record.clear_type() {
            let _ = write!(line, "  {}", format_colored_clear_type(clear_type));
        }
        let _ = writeln!(output, "{}", line);
    }
    let _ = write!(output, "{}", border_dim);

    output
}

/// Format level, experience bar and per-mode XP.
pub fn format_progression_console(
    progression: &PlayerProgression,
    breakdown: &ExperienceBreakdown,
) -> String {
    let mut output = String::new();
    let border = "━".repeat(BORDER_WIDTH);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  {} {}",
        "LEVEL".bold(),
        progression.level.truecolor(255, 200, 0).bold()
    );
    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "  XP     : {}", progression.experience);
    let _ = writeln!(
        output,
        "  NEXT   : {}/{} {}",
        progression.xp_in_current_level,
        progression.xp_needed_for_next_level,
        progress_bar(progression.level_progress(), 20)
    );

    for mode in &breakdown.modes {
        if mode.total() == 0 {
            continue;
        }
        let mut line = format!(
            "  {:<10}: {} ({} records)",
            mode.mode.as_str(),
            mode.total(),
            mode.records
        );
        if !mode.bonuses.is_empty() {
            let _ = write!(line, " {}", format!("+{}", mode.bonuses.join(" +")).green());
        }
        let _ = writeln!(output, "{}", line);
    }
    let _ = write!(output, "{}", border_dim);

    output
}

/// Format grade with color
fn format_colored_grade(mode: Mode, record: &ScoreRecord) -> String {
    let Some(grade) = record.grade_str() else {
        return "-".dimmed().to_string();
    };
    if mode.descriptor().top_grades.contains(&grade) {
        grade.truecolor(255, 200, 0).bold().to_string()
    } else if grade == INVALID_GRADE {
        grade.dimmed().to_string()
    } else if grade.starts_with('S') {
        grade.cyan().to_string()
    } else {
        grade.to_string()
    }
}

/// Format line color with color
fn format_colored_line(line: LineColor) -> String {
    let name = line.as_str();
    match line {
        LineColor::White => name.dimmed().to_string(),
        LineColor::Green => name.green().to_string(),
        LineColor::Orange => name.truecolor(255, 165, 0).to_string(),
    }
}

/// Format clear type with color
fn format_colored_clear_type(clear_type: ClearType) -> String {
    let name = clear_type.as_str();
    match clear_type {
        ClearType::Failed => name.red().to_string(),
        ClearType::Clear => name.cyan().to_string(),
        ClearType::Hard => name.bold().to_string(),
        ClearType::Brave => name.yellow().to_string(),
        ClearType::Absolute => name.purple().to_string(),
        ClearType::Catastrophy => name.truecolor(200, 50, 30).to_string(),
        ClearType::AllCorrect => name.truecolor(255, 200, 0).bold().to_string(),
    }
}

fn progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!(
        "[{}{}]",
        "#".repeat(filled).green(),
        "-".repeat(width - filled).dimmed()
    )
}

fn truncate(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        name.to_string()
    } else {
        let mut short: String = name.chars().take(max_chars - 1).collect();
        short.push('…');
        short
    }
}
