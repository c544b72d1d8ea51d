//! Demerit subcommands - add, list.

use crate::commands::open_registry;
use crate::DemeritAction;
use anyhow::Result;
use roadreg_core::{format_date, parse_date, PersonId};
use std::path::Path;

pub fn handle(people_file: &Path, demerits_file: &Path, action: DemeritAction) -> Result<()> {
    let mut registry = open_registry(people_file, demerits_file)?;

    match action {
        DemeritAction::Add {
            person_id,
            date,
            points,
        } => {
            let person_id = PersonId::parse(&person_id)?;
            let offense_date = parse_date(&date)?;
            let outcome = registry.add_demerit_points(&person_id, offense_date, points)?;
            println!(
                "Recorded {points} point(s) for {person_id}: {} in window, suspended = {}",
                outcome.window_points, outcome.suspended
            );
        }

        DemeritAction::List { person_id } => {
            let person_id = PersonId::parse(&person_id)?;
            let history = registry.demerit_history(&person_id)?;
            if history.is_empty() {
                println!("No offenses recorded for {person_id}");
            } else {
                for entry in &history {
                    println!("{}  {} point(s)", format_date(entry.offense_date), entry.points);
                }
            }
        }
    }

    Ok(())
}
