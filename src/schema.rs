//! Structured metadata derived from the content document.
//!
//! The web original embedded a schema.org `Person` JSON-LD block in the
//! page head; here the same structure is built as a plain JSON value,
//! regenerated on every document adoption and printable via
//! `--dump-schema`. Every section is optional: the builder emits only
//! what the document provides.

use crate::content::{CommandEntry, ContentDocument};
use serde_json::{json, Map, Value};

/// Build the schema.org Person value for a document.
pub fn person_schema(document: &ContentDocument) -> Value {
    let mut person = Map::new();
    person.insert("@context".to_string(), json!("https://schema.org"));
    person.insert("@type".to_string(), json!("Person"));

    // Titles follow the "Name — tagline" convention.
    let name = document
        .meta
        .title
        .split(" — ")
        .next()
        .unwrap_or(&document.meta.title)
        .trim();
    person.insert("name".to_string(), json!(name));
    person.insert("description".to_string(), json!(document.meta.description));

    if let Some(CommandEntry::Listing(skills)) = document.command("skills") {
        let known: Vec<&str> = skills.list.iter().map(|item| item.name.as_str()).collect();
        person.insert("knowsAbout".to_string(), json!(known));
    }

    if let Some(CommandEntry::Records(education)) = document.command("education") {
        let alumni: Vec<Value> = education
            .iter()
            .filter_map(|record| record.institution.as_deref())
            .map(|institution| {
                json!({
                    "@type": "EducationalOrganization",
                    "name": institution,
                })
            })
            .collect();
        person.insert("alumniOf".to_string(), json!(alumni));
    }

    if let Some(CommandEntry::Records(experience)) = document.command("experience") {
        let occupations: Vec<Value> = experience
            .iter()
            .map(|record| {
                json!({
                    "@type": "Occupation",
                    "name": record.position.clone().unwrap_or_default(),
                    "description": record.description.clone().unwrap_or_default(),
                })
            })
            .collect();
        person.insert("hasOccupation".to_string(), json!(occupations));
    }

    if let Some(CommandEntry::Contact(contact)) = document.command("contact") {
        person.insert("email".to_string(), json!(contact.email));
        let same_as: Vec<&str> = contact.links.values().map(String::as_str).collect();
        person.insert("sameAs".to_string(), json!(same_as));
    }

    Value::Object(person)
}
