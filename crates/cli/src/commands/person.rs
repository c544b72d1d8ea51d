//! Person subcommands - add, update, show.

use crate::commands::open_registry;
use crate::PersonAction;
use anyhow::Result;
use roadreg_core::{format_date, parse_date, validate_name, Address, Person, PersonId};
use std::path::Path;

pub fn handle(people_file: &Path, demerits_file: &Path, action: PersonAction) -> Result<()> {
    let mut registry = open_registry(people_file, demerits_file)?;

    match action {
        PersonAction::Add {
            id,
            first,
            last,
            address,
            birthdate,
        } => {
            // first failure wins, so the checks run in field order:
            // id, names, address, birth date
            let id = PersonId::parse(&id)?;
            validate_name("First name", &first)?;
            validate_name("Last name", &last)?;
            let address = Address::parse(&address)?;
            let birth_date = parse_date(&birthdate)?;

            let candidate = Person::new(id, &first, &last, address, birth_date)?;
            let new_id = candidate.id.clone();
            registry.add_person(candidate)?;
            println!("Added person {new_id}");
        }

        PersonAction::Update {
            existing_id,
            id,
            first,
            last,
            address,
            birthdate,
        } => {
            let existing_id = PersonId::parse(&existing_id)?;
            let existing = registry.get_person(&existing_id)?;

            // unspecified fields stay as stored; checks run in field order
            let new_id = match id {
                Some(s) => PersonId::parse(&s)?,
                None => existing.id.clone(),
            };
            let first = first.as_deref().unwrap_or(&existing.first_name);
            validate_name("First name", first)?;
            let last = last.as_deref().unwrap_or(&existing.last_name);
            validate_name("Last name", last)?;
            let new_address = match address {
                Some(s) => Address::parse(&s)?,
                None => existing.address.clone(),
            };
            let birth_date = match birthdate {
                Some(s) => parse_date(&s)?,
                None => existing.birth_date,
            };

            let candidate = Person::new(new_id.clone(), first, last, new_address, birth_date)?;

            registry.update_personal_details(&existing_id, candidate)?;
            println!("Updated person {existing_id} -> {new_id}");
        }

        PersonAction::Show { id, json } => {
            let person = registry.get_person(&PersonId::parse(&id)?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&person)?);
            } else {
                println!("ID:         {}", person.id);
                println!("Name:       {} {}", person.first_name, person.last_name);
                println!("Address:    {}", person.address);
                println!("Birth date: {}", format_date(person.birth_date));
                println!("Suspended:  {}", person.suspended);
            }
        }
    }

    Ok(())
}
