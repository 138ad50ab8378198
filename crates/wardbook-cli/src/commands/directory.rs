//! The filtered, grouped CDA directory view

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use colored::Colorize;

use wardbook_core::{
    filter_directory, paginate, CdaEntry, DateRange, DirectoryFilters, NumericRange, Registry,
};

use crate::cli::{DirectoryArgs, OutputFormat};
use crate::formatting::{print_json, street_table};

fn parse_bound(value: Option<String>, which: &str) -> Result<Option<NaiveDate>> {
    match value {
        Some(value) => match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
            Ok(date) => Ok(Some(date)),
            Err(_) => bail!("invalid {which} date {value:?}, expected YYYY-MM-DD"),
        },
        None => Ok(None),
    }
}

fn build_filters(args: &DirectoryArgs) -> Result<DirectoryFilters> {
    let mut filters = DirectoryFilters {
        ward: args.ward.clone(),
        search: args.search.clone().unwrap_or_default(),
        cdas: args.cdas.clone(),
        property_types: args.property_types.clone(),
        street_search: args.street_search.clone().unwrap_or_default(),
        ..Default::default()
    };

    if args.min_properties.is_some() || args.max_properties.is_some() {
        filters.property_range = NumericRange::new(
            args.min_properties.unwrap_or(0),
            args.max_properties.unwrap_or(u32::MAX),
        );
    }
    if args.street_min.is_some() || args.street_max.is_some() {
        filters.street_property_range = NumericRange::new(
            args.street_min.unwrap_or(0),
            args.street_max.unwrap_or(u32::MAX),
        );
    }
    filters.date_range = DateRange::new(
        parse_bound(args.from.clone(), "from")?,
        parse_bound(args.to.clone(), "to")?,
    );

    Ok(filters)
}

pub fn run(
    registry: &dyn Registry,
    format: OutputFormat,
    args: DirectoryArgs,
    default_page_size: usize,
) -> Result<()> {
    let filters = build_filters(&args)?;

    let cdas = registry.cdas();
    let streets = registry.streets();
    let properties = registry.properties();

    let view = filter_directory(&cdas, &streets, &properties, &filters);
    let page_size = args.page_size.unwrap_or(default_page_size);
    let page = paginate(&view.entries, args.page, page_size);

    if format == OutputFormat::Json {
        return print_json(&serde_json::json!({
            "summary": view.summary,
            "page": page,
        }));
    }

    if let Some(mode) = &view.summary.property_mode {
        println!(
            "\"{}\": {} propert(ies) across {} street(s) in {} CDA(s)\n",
            mode.term, mode.properties, mode.streets, mode.cdas
        );
    }

    if page.items.is_empty() {
        println!("No CDAs found. Try adjusting your search or filter criteria.");
        return Ok(());
    }

    // group the page by ward for display, wards sorted lexicographically
    let mut by_ward: BTreeMap<&str, Vec<&CdaEntry<'_>>> = BTreeMap::new();
    for entry in &page.items {
        by_ward.entry(entry.cda.ward.as_str()).or_default().push(entry);
    }

    for (ward, entries) in by_ward {
        println!("{}", format!("== {ward} ==").bold());
        for entry in entries {
            let total: u32 = entry.streets.iter().map(|s| s.property_count.total()).sum();
            println!(
                "\n{} ({} street(s), {} propert(ies))",
                entry.cda.name,
                entry.streets.len(),
                total
            );
            if !entry.streets.is_empty() {
                println!("{}", street_table(&entry.streets));
            }
        }
        println!();
    }

    println!(
        "Showing {} of {} CDA(s) (Page {} of {})",
        page.items.len(),
        page.total_items,
        page.page,
        page.total_pages.max(1)
    );
    if filters.active_count() > 0 {
        println!("{} filter(s) applied", filters.active_count());
    }
    Ok(())
}
