//! Plain-text rendering for the terminal.

use std::fmt::Write;

use crate::community::{SiteData, CONTRIBUTE_URL};
use crate::navbar::{NavbarState, GITHUB_ORG_URL, NAV_LINKS};
use crate::projection::{ProjectCard, RenderState};

/// Render a section heading followed by the view's state.
#[must_use]
pub fn render_projects(heading: &str, state: &RenderState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {heading} ==");
    out.push('\n');

    match state {
        RenderState::Placeholders(count) => {
            for _ in 0..*count {
                out.push_str("[ ........ ]\n");
            }
        }
        RenderState::Error(message) => {
            let _ = writeln!(out, "{message}");
        }
        RenderState::Cards(cards) if cards.is_empty() => {
            out.push_str("No projects to show.\n");
        }
        RenderState::Cards(cards) => {
            for card in cards {
                out.push_str(&render_card(card));
                out.push('\n');
            }
        }
    }

    out
}

/// Render one project card.
#[must_use]
pub fn render_card(card: &ProjectCard) -> String {
    format!(
        "{title}  ★ {stars}\n  {description}\n  {url}\n",
        title = card.title,
        stars = card.stars,
        description = card.description,
        url = card.github_url,
    )
}

/// Render the navigation bar.
#[must_use]
pub fn render_navbar(state: &NavbarState) -> String {
    let links: Vec<&str> = NAV_LINKS.iter().map(|l| l.name).collect();
    let separator = if state.is_scrolled() { " | " } else { "   " };

    format!("DreamSportsLabs{separator}{}{separator}{GITHUB_ORG_URL}\n", links.join(separator))
}

/// Render the community section.
#[must_use]
pub fn render_community(data: &SiteData) -> String {
    let mut out = String::from("== Community ==\n\n");

    if !data.meetups.is_empty() {
        out.push_str("Meetups\n");
        for meetup in &data.meetups {
            let _ = writeln!(
                out,
                "  {} ({}, {}) - {}\n    {}",
                meetup.title, meetup.date, meetup.location, meetup.attendees, meetup.link
            );
        }
        out.push('\n');
    }

    out.push_str("Connect\n");
    for (link, stats) in data.social_buttons() {
        match stats {
            Some(stats) => {
                let _ = writeln!(out, "  {} [{stats}] {}", link.label, link.href);
            }
            None => {
                let _ = writeln!(out, "  {} {}", link.label, link.href);
            }
        }
    }

    let _ = writeln!(out, "\nStart contributing: {CONTRIBUTE_URL}");
    out
}
