// Interactive terminal front-end for the product catalog

mod config;
mod render;

use anyhow::{Context, Result};
use catalog::{
    BrowseConfig, ComparisonSet, FacetOption, HttpListingSource, ListingsEngine, SelectedFacet,
    SortOption, ToggleOutcome,
};
use clap::Parser;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, MultiSelect, Select};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "catalog-browse", about = "Browse the product catalog")]
struct Args {
    /// Search query (overrides LISTINGS_QUERY)
    #[arg(short, long)]
    query: Option<String>,

    /// Items per page (overrides LISTINGS_PAGE_SIZE)
    #[arg(long)]
    page_size: Option<u32>,

    /// Initial sort: recommended, price-asc, price-desc, discount or 1-4
    /// (overrides LISTINGS_SORT)
    #[arg(short, long)]
    sort: Option<SortOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    LoadMore,
    Retry,
    Sort,
    Filter,
    ToggleCompare,
    ViewCompare,
    ClearCompare,
    Exit,
}

impl Action {
    fn label(&self) -> &'static str {
        match self {
            Action::LoadMore => "⬇️  Load more",
            Action::Retry => "🔄 Retry",
            Action::Sort => "↕️  Change sort",
            Action::Filter => "🔎 Filter",
            Action::ToggleCompare => "➕ Add/remove comparison item",
            Action::ViewCompare => "📋 View comparison",
            Action::ClearCompare => "🗑️  Clear comparison",
            Action::Exit => "🛑 Exit",
        }
    }
}

fn available_actions(engine: &ListingsEngine, compare: &ComparisonSet) -> Vec<Action> {
    let mut actions = Vec::new();
    // Retry and load more issue the same request
    if engine.error_message().is_some() {
        actions.push(Action::Retry);
    } else if engine.has_more() {
        actions.push(Action::LoadMore);
    }
    actions.push(Action::Sort);
    if !engine.facet_catalog().is_empty() {
        actions.push(Action::Filter);
    }
    if !engine.items().is_empty() {
        actions.push(Action::ToggleCompare);
    }
    if !compare.is_empty() {
        actions.push(Action::ViewCompare);
        actions.push(Action::ClearCompare);
    }
    actions.push(Action::Exit);
    actions
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they stay out of the prompts
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    let browse = BrowseConfig::new(args.query.unwrap_or(config.query))
        .with_page_size(args.page_size.unwrap_or(config.page_size))
        .with_initial_sort(args.sort.unwrap_or(config.sort));
    let mut engine = ListingsEngine::new(browse).context("Invalid browse configuration")?;
    let source = HttpListingSource::from_endpoint(config.api_url, config.api_key);
    let mut compare = ComparisonSet::new();

    tracing::info!(query = %engine.query(), page_size = engine.page_size(), "Starting catalog browser");

    let term = Term::stdout();
    engine.refresh(&source).await;

    loop {
        render::print_banner(&term, engine.query())?;
        render::print_listing(&engine, &compare);
        println!();

        let actions = available_actions(&engine, &compare);
        let labels: Vec<&str> = actions.iter().map(Action::label).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact_on(&term)?;

        match actions[selection] {
            Action::LoadMore => {
                engine.load_more(&source).await;
            }
            // Repeats whatever failed: the reset if one is outstanding, else the next page
            Action::Retry => {
                engine.load_more(&source).await;
            }
            Action::Sort => choose_sort(&term, &mut engine, &source).await?,
            Action::Filter => choose_filter(&term, &mut engine, &source).await?,
            Action::ToggleCompare => toggle_compare(&term, &engine, &mut compare)?,
            Action::ViewCompare => view_compare(&term, &mut compare)?,
            Action::ClearCompare => compare.clear_all(),
            Action::Exit => {
                println!("{}", "👋 Goodbye!".bright_blue());
                break;
            }
        }
    }

    Ok(())
}

async fn choose_sort(
    term: &Term,
    engine: &mut ListingsEngine,
    source: &HttpListingSource,
) -> Result<()> {
    let options = SortOption::variants();
    let labels: Vec<&str> = options.iter().map(SortOption::label).collect();
    let current = options.iter().position(|s| *s == engine.sort()).unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Sort by")
        .items(&labels)
        .default(current)
        .interact_on(term)?;

    if options[selection] != engine.sort() {
        engine.change_sort(source, options[selection]).await;
    }
    Ok(())
}

async fn choose_filter(
    term: &Term,
    engine: &mut ListingsEngine,
    source: &HttpListingSource,
) -> Result<()> {
    let groups: Vec<_> = engine
        .facet_catalog()
        .groups()
        .filter(|g| !g.options.is_empty())
        .cloned()
        .collect();
    if groups.is_empty() {
        return Ok(());
    }

    let names: Vec<&str> = groups.iter().map(|g| g.display_name.as_str()).collect();
    let group_index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Filter by")
        .items(&names)
        .default(0)
        .interact_on(term)?;
    let group = &groups[group_index];

    let labels: Vec<String> = group
        .options
        .iter()
        .map(|o| format!("{} ({})", o.display_label(group.kind), o.product_count))
        .collect();
    let checked: Vec<bool> = group
        .options
        .iter()
        .map(|o| engine.selected_facets().is_selected(&group.identifier, &o.identifier))
        .collect();

    let chosen = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{} (space to toggle, enter to apply)", group.display_name))
        .items(&labels)
        .defaults(&checked)
        .interact_on(term)?;

    let previous: Vec<usize> = (0..checked.len()).filter(|i| checked[*i]).collect();
    if chosen == previous {
        return Ok(());
    }

    let values = ordered_selection(
        engine.selected_facets().get(&group.identifier),
        &group.options,
        &chosen,
    );

    engine
        .change_facet_selection(source, &group.identifier, values)
        .await;
    Ok(())
}

/// Options still checked keep the order they were picked in; newly checked
/// ones follow in menu order.
fn ordered_selection(
    previous: &[SelectedFacet],
    options: &[FacetOption],
    chosen: &[usize],
) -> Vec<SelectedFacet> {
    let is_chosen = |id: &str| {
        options
            .iter()
            .position(|o| o.identifier == id)
            .map_or(true, |i| chosen.contains(&i))
    };

    let mut values: Vec<SelectedFacet> = previous
        .iter()
        .filter(|s| is_chosen(&s.identifier))
        .cloned()
        .collect();
    for &i in chosen {
        let option = &options[i];
        if !values.iter().any(|s| s.identifier == option.identifier) {
            values.push(SelectedFacet::new(option.identifier.clone(), option.value.clone()));
        }
    }
    values
}

fn toggle_compare(term: &Term, engine: &ListingsEngine, compare: &mut ComparisonSet) -> Result<()> {
    let labels: Vec<String> = engine
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| render::item_line(i, item, compare.is_selected(&item.id)))
        .collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Toggle comparison")
        .items(&labels)
        .default(0)
        .interact_on(term)?;

    if compare.toggle(engine.items()[selection].clone()) == ToggleOutcome::Rejected {
        println!("{}", "Comparison is full (max 5). Remove an item first.".yellow());
        term.read_key()?;
    }
    Ok(())
}

fn view_compare(term: &Term, compare: &mut ComparisonSet) -> Result<()> {
    term.clear_screen()?;
    render::print_comparison(compare);
    println!();

    let mut labels: Vec<String> = compare
        .items()
        .iter()
        .map(|item| format!("Remove {}", item.title))
        .collect();
    labels.push("Back".to_string());

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Comparison")
        .items(&labels)
        .default(labels.len() - 1)
        .interact_on(term)?;

    if let Some(item) = compare.items().get(selection) {
        let id = item.id.clone();
        compare.remove(&id);
    }
    Ok(())
}
