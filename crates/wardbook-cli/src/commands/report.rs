//! Printable report export
//!
//! Read-only snapshots of the collections rendered as a table or CSV;
//! never mutates the registry.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use wardbook_core::{Registry, Street};

use crate::cli::ReportCommands;
use crate::formatting::new_table;

struct CdaReportRow {
    name: String,
    ward: String,
    streets: usize,
    properties: u32,
}

fn cda_rows(registry: &dyn Registry) -> Vec<CdaReportRow> {
    let streets = registry.streets();
    let mut cdas = registry.cdas();
    cdas.sort_by(|a, b| a.name.cmp(&b.name));

    cdas.into_iter()
        .map(|cda| {
            let owned: Vec<&Street> = streets
                .iter()
                .filter(|s| s.cda == cda.name && s.ward == cda.ward)
                .collect();
            CdaReportRow {
                name: cda.name,
                ward: cda.ward,
                streets: owned.len(),
                properties: owned.iter().map(|s| s.property_count.total()).sum(),
            }
        })
        .collect()
}

fn write_cda_csv(rows: &[CdaReportRow], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record(["#", "CDA Name", "Ward", "Number of Streets", "Total Properties"])?;
    for (index, row) in rows.iter().enumerate() {
        writer.write_record([
            (index + 1).to_string(),
            row.name.clone(),
            row.ward.clone(),
            row.streets.to_string(),
            row.properties.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_street_csv(streets: &[Street], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record(["#", "Street Name", "Ward", "CDA Name", "Number of Properties"])?;
    for (index, street) in streets.iter().enumerate() {
        writer.write_record([
            (index + 1).to_string(),
            street.name.clone(),
            street.ward.clone(),
            street.cda.clone(),
            street.property_count.total().to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn run(registry: &dyn Registry, command: ReportCommands) -> Result<()> {
    let generated = Local::now().format("%Y-%m-%d").to_string();

    match command {
        ReportCommands::Cdas { csv } => {
            let rows = cda_rows(registry);

            if let Some(path) = csv {
                write_cda_csv(&rows, &path)?;
                println!("Wrote {} row(s) to {}", rows.len(), path.display());
                return Ok(());
            }

            println!("Community Development Associations Report");
            println!("Generated on: {generated}\n");

            let mut table = new_table(&["#", "CDA Name", "Ward", "Streets", "Properties"]);
            for (index, row) in rows.iter().enumerate() {
                table.add_row(vec![
                    (index + 1).to_string(),
                    row.name.clone(),
                    row.ward.clone(),
                    row.streets.to_string(),
                    row.properties.to_string(),
                ]);
            }
            println!("{table}");
            println!("Total CDAs: {}", rows.len());
            Ok(())
        }

        ReportCommands::Streets { csv } => {
            let mut streets = registry.streets();
            streets.sort_by(|a, b| a.name.cmp(&b.name));

            if let Some(path) = csv {
                write_street_csv(&streets, &path)?;
                println!("Wrote {} row(s) to {}", streets.len(), path.display());
                return Ok(());
            }

            println!("Registered Streets Report");
            println!("Generated on: {generated}\n");

            let mut table = new_table(&["#", "Street Name", "Ward", "CDA Name", "Properties"]);
            for (index, street) in streets.iter().enumerate() {
                table.add_row(vec![
                    (index + 1).to_string(),
                    street.name.clone(),
                    street.ward.clone(),
                    street.cda.clone(),
                    street.property_count.total().to_string(),
                ]);
            }
            println!("{table}");

            let total: u32 = streets.iter().map(|s| s.property_count.total()).sum();
            println!("Total Streets: {}", streets.len());
            println!("Total Properties: {total}");
            Ok(())
        }
    }
}
