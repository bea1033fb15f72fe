use sheetview::TabularDataset;

fn main() {
    let mut rows = vec![vec![
        "Name".to_string(),
        "City".to_string(),
        "Qty".to_string(),
    ]];
    for (name, city, qty) in [
        ("Alice", "Tokyo", "5"),
        ("Bob", "Osaka", "12"),
        ("Carol", "Kyoto", "2"),
        ("Dave", "Tokyo", "30"),
        ("Erin", "Nagoya", "7"),
        ("Frank", "Osaka", "1"),
    ] {
        rows.push(vec![name.to_string(), city.to_string(), qty.to_string()]);
    }

    let mut dataset = TabularDataset::new();
    dataset.load(rows, true);

    println!("== loaded ==");
    print_page(&dataset);

    println!("\n== filter \"tokyo\" ==");
    dataset.filter("tokyo");
    print_page(&dataset);

    println!("\n== sort Qty (numeric ascending) ==");
    dataset.filter("");
    dataset.sort("Qty");
    print_page(&dataset);

    println!("\n== sort Qty again (descending) ==");
    dataset.sort("Qty");
    print_page(&dataset);

    println!("\n== export ==");
    match dataset.export_csv() {
        Ok(csv) => println!("{csv}"),
        Err(e) => println!("{e}"),
    }
}

fn print_page(dataset: &TabularDataset) {
    println!("{}", dataset.columns().join(" | "));
    for row in dataset.current_page_rows() {
        println!("{}", row.cells().join(" | "));
    }
    let stats = dataset.stats();
    println!(
        "[page {}/{}, showing {} of {} rows]",
        dataset.current_page(),
        dataset.page_count().max(1),
        stats.filtered,
        stats.total
    );
}
