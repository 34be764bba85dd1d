//! Pretty output formatting.

use lexscopic_core::events::{
    card_tags, format_event_date, format_price, format_time_range, EventRecord, Sections,
};

use crate::client::{events::TagInfo, health::HealthStatus};

/// Format an event for display.
pub fn format_event(event: &EventRecord) -> String {
    let mut output = event.title.clone();
    if event.sponsored {
        output.push_str(" [sponsored]");
    }
    output.push_str(&format!(
        "\n  ID: {}\n  When: {}, {}\n  Where: {}",
        event.id,
        format_event_date(event),
        format_time_range(event),
        event.venue
    ));
    if let Some(neighborhood) = &event.neighborhood {
        output.push_str(&format!(" ({})", neighborhood));
    }
    output.push_str(&format!("\n  Price: {}", format_price(event.price)));

    let tags = card_tags(event);
    if !tags.is_empty() {
        let labels: Vec<String> = tags.into_iter().map(|t| t.label).collect();
        output.push_str(&format!("\n  Tags: {}", labels.join(", ")));
    }
    if !event.url.is_empty() {
        output.push_str(&format!("\n  Link: {}", event.url));
    }
    output
}

/// Format events for display.
pub fn format_events(events: &[EventRecord]) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = format!("EVENTS ({})\n", events.len());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_event(event)));
        output.push('\n');
    }
    output
}

/// Format grouped sections for display. Empty sections are skipped.
pub fn format_sections(sections: &Sections) -> String {
    let Some(featured) = &sections.featured else {
        return "No events found.".to_string();
    };

    let mut output = format!("FEATURED\n{}\n{}\n", "-".repeat(40), format_event(featured));

    if !sections.below_hero.is_empty() {
        output.push_str(&format!("\nUP NEXT\n{}", "-".repeat(40)));
        for event in &sections.below_hero {
            output.push_str(&format!("\n{}\n", format_event(event)));
        }
    }

    for section in sections.sections.iter().filter(|s| !s.is_empty()) {
        output.push_str(&format!(
            "\n{} ({})\n{}",
            section.title.to_uppercase(),
            section.events.len(),
            "-".repeat(40)
        ));
        for event in &section.events {
            output.push_str(&format!("\n  {} - {}", format_event_date(event), event.title));
        }
        output.push('\n');
    }

    output
}

/// Format the tag table for display.
pub fn format_tags(tags: &[TagInfo]) -> String {
    let mut output = format!("TAGS ({})\n", tags.len());
    output.push_str(&"-".repeat(40));
    for tag in tags {
        output.push_str(&format!("\n  {:<12} {:<12} {}", tag.tag, tag.label, tag.icon));
    }
    output
}

/// Format health status for display.
pub fn format_health(health: &HealthStatus) -> String {
    let mut output = format!(
        "Health:\n  Status: {}\n  Events: {}",
        if health.healthy { "healthy" } else { "unhealthy" },
        health.events
    );
    if let Some(error) = &health.error {
        output.push_str(&format!("\n  Error: {}", error));
    }
    output
}
