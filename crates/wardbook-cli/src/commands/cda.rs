//! CDA subcommands

use anyhow::{bail, Result};
use tracing::info;

use wardbook_core::{Cda, Registry};

use crate::cli::{CdaCommands, OutputFormat};
use crate::commands::{confirm, registration_date};
use crate::formatting::{cda_table, print_json, street_table};

pub fn run(registry: &dyn Registry, format: OutputFormat, command: CdaCommands) -> Result<()> {
    match command {
        CdaCommands::Register {
            name,
            ward,
            lg,
            description,
            date,
            chairman_name,
            chairman_contact,
        } => {
            let mut cda = Cda::new(registry.next_id(), name, ward, lg)
                .with_description(description)
                .with_registration_date(registration_date(date)?);
            if let (Some(name), Some(contact)) = (chairman_name, chairman_contact) {
                cda = cda.with_chairman(name, contact);
            }
            registry.save_cda(&cda)?;
            info!("Registered CDA {} ({})", cda.name, cda.id);
            println!("Registered CDA \"{}\" with id {}", cda.name, cda.id);
            Ok(())
        }

        CdaCommands::List { ward } => {
            let mut cdas = registry.cdas();
            if let Some(ward) = &ward {
                cdas.retain(|c| &c.ward == ward);
            }
            cdas.sort_by(|a, b| a.name.cmp(&b.name));

            match format {
                OutputFormat::Json => print_json(&cdas),
                OutputFormat::Table => {
                    let streets = registry.streets();
                    println!("{}", cda_table(&cdas, &streets));
                    println!("{} CDA(s)", cdas.len());
                    Ok(())
                }
            }
        }

        CdaCommands::Show { id } => {
            let cdas = registry.cdas();
            let Some(cda) = cdas.iter().find(|c| c.id == id) else {
                bail!("CDA {id} not found");
            };

            match format {
                OutputFormat::Json => print_json(cda),
                OutputFormat::Table => {
                    let streets = registry.streets();
                    println!("{}", cda_table(std::slice::from_ref(cda), &streets));
                    if let Some(chairman) = &cda.chairman {
                        println!("Chairman: {} ({})", chairman.name, chairman.contact);
                    }
                    if !cda.description.is_empty() {
                        println!("{}", cda.description);
                    }

                    let owned: Vec<_> = streets
                        .iter()
                        .filter(|s| s.cda == cda.name && s.ward == cda.ward)
                        .collect();
                    if !owned.is_empty() {
                        println!("\nStreets:");
                        println!("{}", street_table(&owned));
                    }
                    Ok(())
                }
            }
        }

        CdaCommands::Update {
            id,
            name,
            ward,
            lg,
            description,
            date,
        } => {
            let cdas = registry.cdas();
            let Some(mut cda) = cdas.into_iter().find(|c| c.id == id) else {
                bail!("CDA {id} not found");
            };
            let previous_name = cda.name.clone();
            let previous_ward = cda.ward.clone();

            if let Some(name) = name {
                cda.name = name;
            }
            if let Some(ward) = ward {
                cda.ward = ward;
            }
            if let Some(lg) = lg {
                cda.lg = lg;
            }
            if let Some(description) = description {
                cda.description = description;
            }
            if let Some(date) = date {
                cda.registration_date = registration_date(Some(date))?;
            }
            registry.save_cda(&cda)?;

            // keep the name join intact: rewrite owned streets when the
            // CDA was renamed or moved to another ward
            if cda.name != previous_name || cda.ward != previous_ward {
                for mut street in registry.streets() {
                    if street.cda == previous_name && street.ward == previous_ward {
                        street.cda = cda.name.clone();
                        street.ward = cda.ward.clone();
                        registry.save_street(&street)?;
                    }
                }
            }

            println!("Updated CDA {id}");
            Ok(())
        }

        CdaCommands::Delete { id, yes } => {
            let cdas = registry.cdas();
            let Some(cda) = cdas.iter().find(|c| c.id == id) else {
                bail!("CDA {id} not found");
            };
            let owned = registry
                .streets()
                .iter()
                .filter(|s| s.cda == cda.name)
                .count();

            let go = yes
                || confirm(&format!(
                    "Delete CDA \"{}\" and its {} street(s)? This cannot be undone.",
                    cda.name, owned
                ))?;
            if !go {
                println!("Aborted");
                return Ok(());
            }

            registry.delete_cda(id)?;
            println!("Deleted CDA {id}");
            Ok(())
        }
    }
}
