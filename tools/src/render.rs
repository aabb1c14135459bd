//! Plain-text rendering of a session snapshot for the terminal.

use c360_core::{
    session::SessionState,
    view::{Badge, Entry, InfoRow, ProfileView, Section, TabKey},
};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabSelection {
    All,
    One(TabKey),
}

impl TabSelection {
    /// `all` or a tab name; anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Some(TabSelection::All);
        }
        TabKey::from_name(raw).map(TabSelection::One)
    }

    fn includes(self, key: TabKey) -> bool {
        match self {
            TabSelection::All => true,
            TabSelection::One(k) => k == key,
        }
    }
}

pub fn render_state(state: &SessionState, tabs: TabSelection) -> String {
    let mut out = String::new();

    if let Some(error) = &state.error {
        let _ = writeln!(out, "Error: {error}");
    }
    if let Some(empty) = &state.empty_state {
        let _ = writeln!(out, "{}", empty.title);
        let _ = writeln!(out, "  {}", empty.message);
    }
    if state.customers.len() > 1 {
        let pills: Vec<String> = state
            .customers
            .iter()
            .map(|p| {
                if p.selected {
                    format!("[*{}*]", p.label)
                } else {
                    format!("[{}]", p.label)
                }
            })
            .collect();
        let _ = writeln!(out, "Customers: {}", pills.join(" "));
        let _ = writeln!(out);
    }
    if let Some(profile) = &state.profile {
        render_profile(&mut out, profile, tabs);
    }
    out
}

fn render_profile(out: &mut String, view: &ProfileView, tabs: TabSelection) {
    let header = &view.header;
    let _ = writeln!(out, "=== {} ===", header.full_name);
    let _ = writeln!(out, "  {}", header.subtitle);
    let _ = writeln!(out, "  {}", badge_line(&header.badges));
    let _ = writeln!(out, "  Lifetime Value: {}", header.lifetime_value);
    let _ = writeln!(out);
    for stat in &view.quick_stats {
        let _ = writeln!(out, "  {:<18} {}", stat.label, stat.value);
    }

    for tab in view.tabs.iter().filter(|t| tabs.includes(t.key)) {
        let _ = writeln!(out);
        let _ = writeln!(out, "--- {} ---", tab.title);
        for section in &tab.sections {
            render_section(out, section);
        }
    }
}

fn render_section(out: &mut String, section: &Section) {
    let _ = writeln!(out, "  {}", section.title);
    render_rows(out, &section.rows, 4);
    if !section.badges.is_empty() {
        let caption = section.badge_caption.as_deref().unwrap_or("");
        let _ = writeln!(out, "    {caption} {}", badge_line(&section.badges));
    }
    for entry in &section.entries {
        render_entry(out, entry);
    }
    if let Some(message) = &section.empty_message {
        let _ = writeln!(out, "    {message}");
    }
}

fn render_entry(out: &mut String, entry: &Entry) {
    let _ = writeln!(
        out,
        "    {} ({})  {}",
        entry.title,
        entry.subtitle,
        badge_line(&entry.badges)
    );
    if let Some(highlight) = &entry.highlight {
        render_rows(out, std::slice::from_ref(highlight), 6);
    }
    render_rows(out, &entry.rows, 6);
}

fn render_rows(out: &mut String, rows: &[InfoRow], indent: usize) {
    for row in rows {
        let _ = writeln!(out, "{:indent$}{:<26} {}", "", row.label, row.value);
    }
}

fn badge_line(badges: &[Badge]) -> String {
    badges
        .iter()
        .map(|b| format!("[{}]", b.label))
        .collect::<Vec<_>>()
        .join(" ")
}
