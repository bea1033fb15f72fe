use clap::Parser;
use sheetview::sheet_core::{CsvImportConfig, Separator};
use sheetview::{TabularDataset, export, open_workbook};
use std::path::PathBuf;
use strum::IntoEnumIterator;

/// Terminal front end for the sheetview pipeline: open a delimited
/// file, filter and sort it, show one page, optionally export the view.
#[derive(Parser)]
struct Args {
    /// Delimited text file to open (csv, tsv, txt).
    file: PathBuf,
    /// Sheet to display; defaults to the first one.
    #[arg(long)]
    sheet: Option<String>,
    /// Case-insensitive search term applied to all cells.
    #[arg(long)]
    filter: Option<String>,
    /// Column to sort by; repeat the flag to flip direction.
    #[arg(long)]
    sort: Vec<String>,
    /// 1-based page to display.
    #[arg(long, default_value_t = 1)]
    page: usize,
    /// Cell separator: auto, comma, tab or semicolon.
    #[arg(long, default_value = "auto")]
    separator: String,
    /// Treat the first row as data, not column names.
    #[arg(long)]
    no_header: bool,
    /// Rows to skip before the header row.
    #[arg(long, default_value_t = 0)]
    skip_rows: usize,
    /// Directory to write export.csv into, after filter and sort.
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> sheetview::Result<()> {
    let separator = Separator::iter()
        .find(|s| s.to_string().eq_ignore_ascii_case(&args.separator))
        .unwrap_or_default();
    let config = CsvImportConfig {
        separator,
        skip_first_rows: args.skip_rows,
        has_headers: !args.no_header,
        ..CsvImportConfig::default()
    };

    let workbook = open_workbook(&args.file, config)?;
    let sheet = match &args.sheet {
        Some(name) => name.clone(),
        None => workbook
            .sheet_names()
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    let mut dataset = TabularDataset::new();
    if !workbook.load_sheet(&sheet, &mut dataset, config.has_headers()) {
        eprintln!(
            "no sheet named {sheet:?}; available: {:?}",
            workbook.sheet_names().collect::<Vec<_>>()
        );
        std::process::exit(1);
    }

    if let Some(term) = &args.filter {
        dataset.filter(term);
    }
    for column in &args.sort {
        dataset.sort(column);
    }
    dataset.set_page(args.page);

    print_table(&dataset);

    if let Some(dir) = &args.export_dir {
        let path = export::save_csv(&dataset, dir)?;
        println!(
            "exported {} rows to {}",
            dataset.stats().filtered,
            path.display()
        );
    }
    Ok(())
}

fn print_table(dataset: &TabularDataset) {
    // Column widths over the visible page only.
    let mut widths: Vec<usize> = dataset
        .columns()
        .iter()
        .map(|name| name.chars().count())
        .collect();
    for row in dataset.current_page_rows() {
        for (idx, cell) in row.cells().iter().enumerate() {
            if let Some(w) = widths.get_mut(idx) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let header: Vec<String> = dataset
        .columns()
        .iter()
        .zip(widths.iter().copied())
        .map(|(name, w)| format!("{name:w$}"))
        .collect();
    println!("{}", header.join(" | "));

    for row in dataset.current_page_rows() {
        let line: Vec<String> = row
            .cells()
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, w)| format!("{cell:w$}"))
            .collect();
        println!("{}", line.join(" | "));
    }

    let stats = dataset.stats();
    println!(
        "[page {}/{}, {} of {} rows match]",
        dataset.current_page(),
        dataset.page_count().max(1),
        stats.filtered,
        stats.total
    );
}
