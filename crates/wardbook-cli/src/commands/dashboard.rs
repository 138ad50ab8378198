//! Ward overview with registry totals

use anyhow::Result;

use wardbook_core::{registry_totals, ward_stats, Registry};

use crate::cli::OutputFormat;
use crate::formatting::{new_table, print_json};

pub fn run(registry: &dyn Registry, format: OutputFormat) -> Result<()> {
    let cdas = registry.cdas();
    let streets = registry.streets();

    let totals = registry_totals(&cdas, &streets);
    let wards = ward_stats(&cdas);

    if format == OutputFormat::Json {
        return print_json(&serde_json::json!({
            "totals": totals,
            "wards": wards,
        }));
    }

    println!(
        "Total CDAs: {}   Total streets: {}   Total properties: {}\n",
        totals.cdas, totals.streets, totals.properties
    );

    let mut table = new_table(&["Ward", "CDAs"]);
    for ward in &wards {
        table.add_row(vec![ward.ward.clone(), ward.cda_count.to_string()]);
    }
    println!("{table}");
    Ok(())
}
