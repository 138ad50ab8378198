//! Property subcommands

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use wardbook_core::{DocumentAttachment, ImageAttachment, Property, Registry};
use wardbook_store::file_to_data_uri;

use crate::cli::{OutputFormat, PropertyCommands};
use crate::commands::{confirm, registration_date};
use crate::formatting::{print_json, property_table};

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn mime_of_data_uri(uri: &str) -> String {
    uri.strip_prefix("data:")
        .and_then(|rest| rest.split(';').next())
        .unwrap_or("application/octet-stream")
        .to_string()
}

fn attach_images(property: &mut Property, paths: &[impl AsRef<Path>]) -> Result<()> {
    for (index, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        let data = file_to_data_uri(path)
            .with_context(|| format!("failed to attach image {}", path.display()))?;
        property.images.push(ImageAttachment {
            id: format!("{}-img-{}", property.id, index + 1),
            preview: data.clone(),
            file_data: data,
            file_name: file_name_of(path),
        });
    }
    Ok(())
}

fn attach_documents(property: &mut Property, paths: &[impl AsRef<Path>]) -> Result<()> {
    for (index, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        let data = file_to_data_uri(path)
            .with_context(|| format!("failed to attach document {}", path.display()))?;
        property.documents.push(DocumentAttachment {
            id: format!("{}-doc-{}", property.id, index + 1),
            name: path
                .file_stem()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            file_type: mime_of_data_uri(&data),
            file_data: data,
            file_name: file_name_of(path),
        });
    }
    Ok(())
}

pub fn run(registry: &dyn Registry, format: OutputFormat, command: PropertyCommands) -> Result<()> {
    match command {
        PropertyCommands::Register {
            street,
            number,
            type_name,
            owner,
            contact,
            description,
            date,
            shops,
            images,
            documents,
        } => {
            if !registry.streets().iter().any(|s| s.id == street) {
                bail!("street {street} not found");
            }

            let mut property = Property::new(registry.next_id(), street, number, type_name, owner)
                .with_contact(contact)
                .with_registration_date(registration_date(date)?);
            property.description = description;
            if let Some(count) = shops {
                property = property.with_shops(count);
            }
            attach_images(&mut property, &images)?;
            attach_documents(&mut property, &documents)?;

            registry.save_property(&property)?;
            info!(
                "Registered property #{} on street {}",
                property.number, property.street_id
            );
            println!(
                "Registered property #{} with id {}",
                property.number, property.id
            );
            Ok(())
        }

        PropertyCommands::List { street, search } => {
            let mut properties = match street {
                Some(street_id) => registry.properties_on_street(street_id),
                None => registry.properties(),
            };
            if let Some(term) = &search {
                let term = term.to_lowercase();
                properties.retain(|p| {
                    p.number.to_lowercase().contains(&term)
                        || p.type_name.to_lowercase().contains(&term)
                        || p.owner.to_lowercase().contains(&term)
                });
            }
            properties.sort_by_key(|p| p.id);

            match format {
                OutputFormat::Json => print_json(&properties),
                OutputFormat::Table => {
                    let refs: Vec<_> = properties.iter().collect();
                    println!("{}", property_table(&refs));
                    println!("{} propert(ies)", properties.len());
                    Ok(())
                }
            }
        }

        PropertyCommands::Show { id } => {
            let properties = registry.properties();
            let Some(property) = properties.iter().find(|p| p.id == id) else {
                bail!("property {id} not found");
            };

            match format {
                OutputFormat::Json => print_json(property),
                OutputFormat::Table => {
                    println!("{}", property_table(&[property]));
                    if !property.description.is_empty() {
                        println!("{}", property.description);
                    }
                    if property.has_shops {
                        println!("Shops inside: {}", property.shop_count);
                        for shop in &property.shops {
                            println!("  #{} {} {}", shop.number, shop.type_name, shop.description);
                        }
                    }
                    if !property.images.is_empty() || !property.documents.is_empty() {
                        println!(
                            "Attachments: {} image(s), {} document(s)",
                            property.images.len(),
                            property.documents.len()
                        );
                    }
                    Ok(())
                }
            }
        }

        PropertyCommands::Update {
            id,
            street,
            number,
            type_name,
            owner,
            contact,
            description,
            date,
            shops,
        } => {
            let properties = registry.properties();
            let Some(mut property) = properties.into_iter().find(|p| p.id == id) else {
                bail!("property {id} not found");
            };
            let previous_street = property.street_id;

            if let Some(street) = street {
                if !registry.streets().iter().any(|s| s.id == street) {
                    bail!("street {street} not found");
                }
                property.street_id = street;
            }
            if let Some(number) = number {
                property.number = number;
            }
            if let Some(type_name) = type_name {
                property.type_name = type_name;
            }
            if let Some(owner) = owner {
                property.owner = owner;
            }
            if let Some(contact) = contact {
                property.contact = contact;
            }
            if let Some(description) = description {
                property.description = description;
            }
            if let Some(date) = date {
                property.registration_date = registration_date(Some(date))?;
            }
            if let Some(count) = shops {
                property = property.with_shops(count);
            }

            registry.save_property(&property)?;
            // moving a property between streets leaves the old aggregate stale
            if property.street_id != previous_street {
                registry.recount_street(previous_street)?;
            }

            println!("Updated property {id}");
            Ok(())
        }

        PropertyCommands::Delete { id, yes } => {
            let properties = registry.properties();
            let Some(property) = properties.iter().find(|p| p.id == id) else {
                bail!("property {id} not found");
            };

            let go = yes
                || confirm(&format!(
                    "Delete property #{} ({})? This cannot be undone.",
                    property.number, property.type_name
                ))?;
            if !go {
                println!("Aborted");
                return Ok(());
            }

            registry.delete_property(id)?;
            println!("Deleted property {id}");
            Ok(())
        }
    }
}
