use anyhow::Result;
use catalog::{ComparisonSet, ListingItem, ListingsEngine};
use colored::Colorize;
use console::Term;

pub fn print_banner(term: &Term, query: &str) -> Result<()> {
    term.clear_screen()?;
    println!(
        "{}",
        "╔════════════════════════════════════════╗".bright_cyan()
    );
    println!(
        "{}",
        "║         Product Catalog Browser        ║".bright_cyan()
    );
    println!(
        "{}",
        "╚════════════════════════════════════════╝".bright_cyan()
    );
    println!("Searching for {}", query.bold());
    println!();
    Ok(())
}

pub fn item_line(index: usize, item: &ListingItem, compared: bool) -> String {
    let marker = if compared { "[x]" } else { "[ ]" };
    let mut line = format!(
        "{:>3}. {} {}  {}",
        index + 1,
        marker,
        item.title.bold(),
        item.price_label().bright_blue()
    );
    if let Some(original) = item.original_price_label() {
        line.push_str(&format!("  {}", original.dimmed().strikethrough()));
    }
    if let Some(discount) = item.discount_label() {
        line.push_str(&format!("  {}", discount.green()));
    }
    line
}

pub fn print_listing(engine: &ListingsEngine, compare: &ComparisonSet) {
    for (index, item) in engine.items().iter().enumerate() {
        println!("{}", item_line(index, item, compare.is_selected(&item.id)));
    }

    println!();
    println!(
        "Showing {} of {} results  |  Sort: {}  |  Comparing {}",
        engine.items().len(),
        engine.total_results(),
        engine.sort().label().bright_yellow(),
        compare.len()
    );

    let filters: Vec<String> = engine
        .selected_facets()
        .iter()
        .map(|(group, values)| {
            let ids: Vec<&str> = values.iter().map(|v| v.identifier.as_str()).collect();
            format!("{}: {}", group, ids.join(", "))
        })
        .collect();
    if !filters.is_empty() {
        println!("Filters: {}", filters.join("  |  ").bright_magenta());
    }

    if let Some(message) = engine.error_message() {
        println!("{}", message.red().bold());
    }
}

pub fn print_comparison(compare: &ComparisonSet) {
    if compare.is_empty() {
        println!("{}", "Nothing selected for comparison.".dimmed());
        return;
    }

    println!("{}", "Comparison".bold().underline());
    for item in compare.items() {
        println!(
            "  {:<40} {:>10} {:>10} {:>8} {}",
            item.title,
            item.price_label(),
            item.original_price_label().unwrap_or_else(|| "-".to_string()),
            item.discount_label().unwrap_or_else(|| "-".to_string()),
            if item.on_promotion { "promo" } else { "" }
        );
    }
    if !compare.can_add_more() {
        println!("{}", "Comparison is full.".yellow());
    }
}
