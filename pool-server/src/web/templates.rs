//! Askama templates and view models for the web frontend.

use askama::Template;

use crate::browse::Card;
use crate::status::StatusEntry;

/// The browser page: date selector, sort selector, enrichment form, card
/// list, status log.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub selected_date: String,
    pub dates: Vec<String>,
    pub sort_options: Vec<SortOptionView>,
    pub cards: Vec<CardView>,
    pub statuses: Vec<StatusView>,
    pub has_stored_key: bool,
}

/// One entry of the sort selector.
#[derive(Debug, Clone)]
pub struct SortOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Pool card view model.
#[derive(Debug, Clone)]
pub struct CardView {
    pub display_name: String,
    pub classified_name: String,
    pub address: String,
    pub kind: String,
    pub phone: String,
    pub times: Vec<String>,
}

impl CardView {
    /// Create from a browse Card.
    pub fn from_card(card: &Card) -> Self {
        Self {
            display_name: card.display_name.clone(),
            classified_name: card.facility.classified_name.clone(),
            address: card.facility.address.clone(),
            kind: card.facility.kind.clone(),
            phone: card.facility.phone.clone(),
            times: card.times.clone(),
        }
    }
}

/// Status log entry view model.
#[derive(Debug, Clone)]
pub struct StatusView {
    pub level: &'static str,
    pub message: String,
}

impl StatusView {
    /// Create from a status entry.
    pub fn from_entry(entry: &StatusEntry) -> Self {
        Self {
            level: entry.level.label(),
            message: entry.message.clone(),
        }
    }
}
