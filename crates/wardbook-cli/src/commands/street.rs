//! Street subcommands

use anyhow::{bail, Result};
use tracing::{info, warn};

use wardbook_core::{Registry, Street};
use wardbook_store::file_to_data_uri;

use crate::cli::{OutputFormat, StreetCommands};
use crate::commands::{confirm, registration_date};
use crate::formatting::{print_json, property_table, street_table};

pub fn run(registry: &dyn Registry, format: OutputFormat, command: StreetCommands) -> Result<()> {
    match command {
        StreetCommands::Register {
            name,
            cda,
            ward,
            lg,
            lcda,
            description,
            date,
            owner_name,
            owner_contact,
            image,
        } => {
            if !registry
                .cdas()
                .iter()
                .any(|c| c.name == cda && c.ward == ward)
            {
                warn!("No CDA named {:?} registered in {:?}", cda, ward);
            }

            let mut street = Street::new(registry.next_id(), name, cda, ward)
                .with_area(lg, lcda)
                .with_description(description)
                .with_registration_date(registration_date(date)?);
            if let (Some(name), Some(contact)) = (owner_name, owner_contact) {
                street = street.with_owner(name, contact);
            }
            if let Some(path) = image {
                street.image = Some(file_to_data_uri(&path)?);
            }

            registry.save_street(&street)?;
            info!("Registered street {} ({})", street.name, street.id);
            println!("Registered street \"{}\" with id {}", street.name, street.id);
            Ok(())
        }

        StreetCommands::List { ward, cda } => {
            let mut streets = registry.streets();
            if let Some(ward) = &ward {
                streets.retain(|s| &s.ward == ward);
            }
            if let Some(cda) = &cda {
                streets.retain(|s| &s.cda == cda);
            }
            streets.sort_by(|a, b| a.name.cmp(&b.name));

            match format {
                OutputFormat::Json => print_json(&streets),
                OutputFormat::Table => {
                    let refs: Vec<&Street> = streets.iter().collect();
                    println!("{}", street_table(&refs));
                    println!("{} street(s)", streets.len());
                    Ok(())
                }
            }
        }

        StreetCommands::Show { id } => {
            let streets = registry.streets();
            let Some(street) = streets.iter().find(|s| s.id == id) else {
                bail!("street {id} not found");
            };

            match format {
                OutputFormat::Json => print_json(street),
                OutputFormat::Table => {
                    println!("{}", street_table(&[street]));
                    println!("LGA: {}  LCDA: {}", street.lg, street.lcda);
                    if let (Some(name), Some(contact)) =
                        (&street.owner_name, &street.owner_contact)
                    {
                        println!("Owner: {name} ({contact})");
                    }
                    if !street.description.is_empty() {
                        println!("{}", street.description);
                    }

                    let properties = registry.properties_on_street(id);
                    if !properties.is_empty() {
                        let refs: Vec<_> = properties.iter().collect();
                        println!("\nProperties:");
                        println!("{}", property_table(&refs));
                    }
                    Ok(())
                }
            }
        }

        StreetCommands::Update {
            id,
            name,
            cda,
            ward,
            lg,
            lcda,
            description,
            date,
            image,
        } => {
            let streets = registry.streets();
            let Some(mut street) = streets.into_iter().find(|s| s.id == id) else {
                bail!("street {id} not found");
            };

            if let Some(name) = name {
                street.name = name;
            }
            if let Some(cda) = cda {
                street.cda = cda;
            }
            if let Some(ward) = ward {
                street.ward = ward;
            }
            if let Some(lg) = lg {
                street.lg = lg;
            }
            if let Some(lcda) = lcda {
                street.lcda = lcda;
            }
            if let Some(description) = description {
                street.description = description;
            }
            if let Some(date) = date {
                street.registration_date = registration_date(Some(date))?;
            }
            if let Some(path) = image {
                street.image = Some(file_to_data_uri(&path)?);
            }

            registry.save_street(&street)?;
            println!("Updated street {id}");
            Ok(())
        }

        StreetCommands::Delete { id, yes } => {
            let streets = registry.streets();
            let Some(street) = streets.iter().find(|s| s.id == id) else {
                bail!("street {id} not found");
            };
            let properties = registry.properties_on_street(id).len();

            let go = yes
                || confirm(&format!(
                    "Delete street \"{}\" and its {} propert(ies)? This cannot be undone.",
                    street.name, properties
                ))?;
            if !go {
                println!("Aborted");
                return Ok(());
            }

            registry.delete_street(id)?;
            println!("Deleted street {id}");
            Ok(())
        }
    }
}
