use crate::core::compare_tables;
use crate::error::{SheetResult, TableSide};
use crate::excel::{formula_column_letters, ReportExporter};
use crate::layout::Layout;
use crate::loader::load_table_from_path;
use crate::types::{Comparison, ListingEntry, PriceChange};
use crate::writer::write_export_file;
use colored::Colorize;
use std::path::{Path, PathBuf};

const RULE_WIDTH: usize = 72;

/// Resolve the layout: a YAML file when given, otherwise the defaults.
pub fn resolve_layout(path: Option<&Path>) -> SheetResult<Layout> {
    match path {
        Some(path) => Layout::load(path),
        None => Ok(Layout::default()),
    }
}

/// True when the output path asks for a spreadsheet rather than CSV.
fn is_xlsx(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xlsx"))
}

/// Execute the compare command
pub fn compare(
    new_path: PathBuf,
    old_path: PathBuf,
    output: Option<PathBuf>,
    report: Option<PathBuf>,
    layout_path: Option<PathBuf>,
    verbose: bool,
) -> SheetResult<()> {
    println!("{}", "📦 Product Sheet Comparator".bold().green());
    println!("   New: {}", new_path.display());
    println!("   Old: {}\n", old_path.display());

    let layout = resolve_layout(layout_path.as_deref())?;

    if verbose {
        println!("{}", "📖 Reading tables...".cyan());
    }
    let new = load_table_from_path(&new_path, TableSide::New, &layout)?;
    let old = load_table_from_path(&old_path, TableSide::Old, &layout)?;
    if verbose {
        println!(
            "   New: {} rows x {} columns",
            new.row_count(),
            new.column_count()
        );
        println!(
            "   Old: {} rows x {} columns\n",
            old.row_count(),
            old.column_count()
        );
    }

    let comparison = compare_tables(&new, &old, &layout);

    print_listing(
        "Products to ADD",
        &comparison.add_list(),
        "No new products to add.",
    );
    print_listing(
        "Products to DELETE",
        &comparison.delete_list(),
        "No products to delete.",
    );
    if let Some(changes) = &comparison.price_changes {
        if !changes.is_empty() {
            print_price_changes(changes);
        }
    } else if verbose {
        println!(
            "{}",
            "ℹ️  Price comparison skipped: both tables need a price column\n".yellow()
        );
    }

    let [first, second] = formula_column_letters(&comparison.formula_columns);
    println!(
        "{}",
        format!("🔗 Formulas in columns {}/{}", first, second).cyan()
    );

    let output = output.unwrap_or_else(|| PathBuf::from(&layout.export_file_name));
    write_output(&comparison, &output)?;
    if let Some(report) = report {
        ReportExporter::new(&comparison).export(&report)?;
        println!(
            "{}",
            format!("✅ Excel report written to {}", report.display())
                .bold()
                .green()
        );
    }

    print_summary(&comparison);
    Ok(())
}

/// Write the export table to CSV, or a full report when the path ends in `.xlsx`.
fn write_output(comparison: &Comparison, output: &Path) -> SheetResult<()> {
    if is_xlsx(output) {
        ReportExporter::new(comparison).export(output)?;
    } else {
        write_export_file(&comparison.export, output)?;
    }
    println!(
        "{}",
        format!("✅ Output table written to {}", output.display())
            .bold()
            .green()
    );
    Ok(())
}

/// Execute the layout command - print the effective layout as YAML
pub fn show_layout(layout_path: Option<PathBuf>) -> SheetResult<()> {
    let layout = resolve_layout(layout_path.as_deref())?;
    print!("{}", layout.to_yaml_string()?);
    Ok(())
}

fn print_listing(title: &str, entries: &[ListingEntry], empty_message: &str) {
    println!("{}", title.bold().cyan());
    if entries.is_empty() {
        println!("   {}\n", empty_message.green());
        return;
    }

    println!("{}", "─".repeat(RULE_WIDTH));
    println!("{:<20} {}", "Product ID".bold(), "Description".bold());
    println!("{}", "─".repeat(RULE_WIDTH));
    for entry in entries {
        println!("{:<20} {}", entry.id.bright_blue(), entry.description);
    }
    println!("{}\n", "─".repeat(RULE_WIDTH));
}

fn print_price_changes(changes: &[PriceChange]) {
    println!("{}", "Products with Price Change".bold().cyan());
    println!("{}", "─".repeat(RULE_WIDTH));
    println!(
        "{:<16} {:<28} {:>12} {:>12}",
        "Product ID".bold(),
        "Description".bold(),
        "New Price".bold(),
        "Old Price".bold()
    );
    println!("{}", "─".repeat(RULE_WIDTH));
    for change in changes {
        println!(
            "{:<16} {:<28} {:>12} {:>12}",
            change.id.bright_blue(),
            truncate(&change.description, 28),
            change.new_price.yellow(),
            change.old_price
        );
    }
    println!("{}\n", "─".repeat(RULE_WIDTH));
}

fn print_summary(comparison: &Comparison) {
    let summary = comparison.summary();
    let price = match summary.price_changes {
        Some(n) => n.to_string(),
        None => "n/a".to_string(),
    };
    println!();
    println!(
        "   {} Add: {}  {} Delete: {}  {} Price changes: {}",
        "➕".green(),
        summary.added.to_string().green(),
        "➖".red(),
        summary.deleted.to_string().red(),
        "💲".yellow(),
        price.yellow()
    );
}

/// Shorten `text` to at most `max` characters, marking the cut with `…`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(max.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
