//! Terminal output helpers

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use serde::Serialize;

use wardbook_core::{Cda, Property, Street};

/// Table with the house style applied.
pub fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|h| Cell::new(h)));
    table
}

/// Serialize any value as pretty JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// CDA listing rows with live counts derived from the street collection.
pub fn cda_table(cdas: &[Cda], streets: &[Street]) -> Table {
    let mut table = new_table(&["ID", "Name", "Ward", "LGA", "Streets", "Properties", "Registered"]);
    for cda in cdas {
        let owned: Vec<&Street> = streets
            .iter()
            .filter(|s| s.cda == cda.name && s.ward == cda.ward)
            .collect();
        let properties: u32 = owned.iter().map(|s| s.property_count.total()).sum();
        table.add_row(vec![
            cda.id.to_string(),
            cda.name.clone(),
            cda.ward.clone(),
            cda.lg.clone(),
            owned.len().to_string(),
            properties.to_string(),
            cda.registration_date.clone(),
        ]);
    }
    table
}

/// Street listing rows.
pub fn street_table(streets: &[&Street]) -> Table {
    let mut table = new_table(&["ID", "Name", "CDA", "Ward", "Houses", "Shops", "Hotels", "Others", "Registered"]);
    for street in streets {
        table.add_row(vec![
            street.id.to_string(),
            street.name.clone(),
            street.cda.clone(),
            street.ward.clone(),
            street.property_count.houses.to_string(),
            street.property_count.shops.to_string(),
            street.property_count.hotels.to_string(),
            street.property_count.others.to_string(),
            street.registration_date.clone(),
        ]);
    }
    table
}

/// Property listing rows.
pub fn property_table(properties: &[&Property]) -> Table {
    let mut table = new_table(&["ID", "Street", "Number", "Type", "Owner", "Contact", "Registered"]);
    for property in properties {
        table.add_row(vec![
            property.id.to_string(),
            property.street_id.to_string(),
            property.number.clone(),
            property.type_name.clone(),
            property.owner.clone(),
            property.contact.clone(),
            property.registration_date.clone(),
        ]);
    }
    table
}
