//! Command dispatch: from a raw input line to a sequence of render
//! actions.
//!
//! `execute` is a pure function over the registry and the current
//! document, which keeps every dispatch path testable without a
//! terminal. Built-ins are matched first and shadow same-named content
//! entries; anything else is looked up in the document and rendered by
//! entry shape; unknown names produce the two-line not-found message.

use crate::content::{CommandEntry, ContactEntry, ContentDocument, Listing, Record, TextEntry};
use crate::registry::CommandRegistry;
use crate::transcript::LineStyle;

/// One step of terminal output produced by executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderAction {
    /// Append a text line (typewriter-animated unless empty).
    Print { text: String, style: LineStyle },
    /// Append a skill bar element.
    SkillBar { name: String, level: u8 },
    /// Append a contact link element.
    Link { platform: String, url: String },
    /// Wipe the transcript.
    Clear,
    /// Hand the current document to the settings editor.
    OpenSettings,
}

fn print(text: impl Into<String>, style: LineStyle) -> RenderAction {
    RenderAction::Print {
        text: text.into(),
        style,
    }
}

fn blank() -> RenderAction {
    print("", LineStyle::Plain)
}

/// Execute a raw input line. Empty input is a no-op; exactly one of the
/// three outcomes occurs otherwise: a built-in runs, a content entry
/// renders, or the not-found message is produced.
pub fn execute(
    raw: &str,
    registry: &CommandRegistry,
    document: Option<&ContentDocument>,
) -> Vec<RenderAction> {
    let lowered = raw.trim().to_lowercase();
    let mut words = lowered.split_whitespace();
    let Some(name) = words.next() else {
        return Vec::new();
    };
    // Arguments are accepted and ignored; commands are pure content
    // lookups.

    match name {
        "help" => help_actions(registry),
        "clear" => vec![RenderAction::Clear],
        "settings" => vec![RenderAction::OpenSettings],
        _ => match document.and_then(|doc| doc.command(name)) {
            Some(entry) => entry_actions(entry),
            None => not_found_actions(name),
        },
    }
}

fn help_actions(registry: &CommandRegistry) -> Vec<RenderAction> {
    let mut actions = vec![blank(), print("Available commands:", LineStyle::SectionTitle)];

    for name in registry.content_names() {
        actions.push(print(format!("  {name}"), LineStyle::HelpItem));
    }

    actions.push(blank());
    actions.push(print("  clear    - Clear the terminal screen", LineStyle::Plain));
    actions.push(print("  settings - Open settings panel", LineStyle::Plain));
    actions.push(blank());
    actions
}

fn not_found_actions(name: &str) -> Vec<RenderAction> {
    vec![
        print(format!("Command not found: {name}"), LineStyle::Error),
        print("Type 'help' for available commands.", LineStyle::Plain),
    ]
}

fn entry_actions(entry: &CommandEntry) -> Vec<RenderAction> {
    let mut actions = vec![blank()];
    match entry {
        CommandEntry::Text(text) => render_text(text, &mut actions),
        CommandEntry::Listing(listing) => render_listing(listing, &mut actions),
        CommandEntry::Records(records) => render_records(records, &mut actions),
        CommandEntry::Contact(contact) => render_contact(contact, &mut actions),
    }
    actions.push(blank());
    actions
}

fn render_text(entry: &TextEntry, actions: &mut Vec<RenderAction>) {
    actions.push(print(&entry.title, LineStyle::SectionTitle));
    actions.push(print(&entry.content, LineStyle::Plain));
}

fn render_listing(listing: &Listing, actions: &mut Vec<RenderAction>) {
    actions.push(print(&listing.title, LineStyle::SectionTitle));

    for item in &listing.list {
        actions.push(blank());
        match item.level {
            Some(level) => actions.push(RenderAction::SkillBar {
                name: item.name.clone(),
                level,
            }),
            None => {
                actions.push(print(&item.name, LineStyle::ProjectName));
                if let Some(date) = &item.date {
                    actions.push(print(date, LineStyle::Period));
                }
                if let Some(period) = &item.period {
                    actions.push(print(period, LineStyle::Period));
                }
            }
        }
    }
}

fn render_records(records: &[Record], actions: &mut Vec<RenderAction>) {
    for record in records {
        actions.push(blank());

        if let Some(name) = &record.name {
            actions.push(print(name, LineStyle::ProjectName));
        }
        if let Some(tagline) = &record.tagline {
            actions.push(print(tagline, LineStyle::Tagline));
        }
        if let Some(description) = &record.description {
            actions.push(print(description, LineStyle::Plain));
        }
        if let Some(url) = &record.url {
            actions.push(print(format!("URL: {url}"), LineStyle::Plain));
        }
        if let Some(tech) = &record.tech {
            actions.push(print(format!("Tech: {}", tech.join(", ")), LineStyle::Tech));
        }
        if let Some(period) = &record.period {
            actions.push(print(period, LineStyle::Period));
        }
        if let Some(position) = &record.position {
            actions.push(print(position, LineStyle::Position));
        }
        if let Some(company) = &record.company {
            actions.push(print(company, LineStyle::Company));
        }
        if let Some(institution) = &record.institution {
            actions.push(print(institution, LineStyle::Institution));
        }
        if let Some(degree) = &record.degree {
            actions.push(print(degree, LineStyle::Degree));
        }
    }
}

fn render_contact(contact: &ContactEntry, actions: &mut Vec<RenderAction>) {
    actions.push(blank());
    actions.push(print(format!("Email: {}", contact.email), LineStyle::Plain));

    for (platform, url) in &contact.links {
        actions.push(RenderAction::Link {
            platform: platform.clone(),
            url: url.clone(),
        });
    }
}
