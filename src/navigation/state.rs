//! Navigation state and its reducer.
//!
//! All input is funnelled through [`reduce`], which returns the next state
//! and touches nothing else. Rendering is a separate step (see
//! [`render_page`](super::view::render_page)).

use super::route::parse_fragment;
use crate::store::DocumentStore;
use crate::types::{CategoryFilter, DocumentId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavState {
    /// Always an id present in the store.
    pub active_id: Option<DocumentId>,
    pub query: String,
    pub category: CategoryFilter,
    pub raw_mode: bool,
    /// Side panel visibility on narrow screens.
    pub nav_open: bool,
}

/// Input events, one per user or location action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    LocationChanged(String),
    QueryChanged(String),
    CategorySelected(String),
    ToggleRaw,
    ToggleNav,
    CloseNav,
}

/// The coarse view a state maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    Home,
    Document { id: &'a DocumentId, raw: bool },
}

impl NavState {
    /// Initial state for a page opened at `fragment`.
    pub fn initial(store: &DocumentStore, fragment: &str, raw_mode: bool) -> Self {
        let state = NavState {
            raw_mode,
            ..NavState::default()
        };
        reduce(store, state, NavEvent::LocationChanged(fragment.to_string()))
    }

    pub fn view(&self) -> View<'_> {
        match &self.active_id {
            Some(id) => View::Document {
                id,
                raw: self.raw_mode,
            },
            None => View::Home,
        }
    }
}

/// `(state, event) -> state`.
pub fn reduce(store: &DocumentStore, state: NavState, event: NavEvent) -> NavState {
    tracing::debug!(?event, "Navigation event");
    match event {
        NavEvent::LocationChanged(fragment) => {
            let active_id = parse_fragment(&fragment).and_then(|requested| {
                let found = store.get(&requested).map(|doc| doc.id.clone());
                if found.is_none() {
                    tracing::debug!(id = %requested, "Unknown document id, showing home");
                }
                found
            });
            NavState { active_id, ..state }
        }
        NavEvent::QueryChanged(query) => NavState { query, ..state },
        NavEvent::CategorySelected(id) => NavState {
            category: CategoryFilter::parse(&id),
            ..state
        },
        NavEvent::ToggleRaw => NavState {
            raw_mode: !state.raw_mode,
            ..state
        },
        NavEvent::ToggleNav => NavState {
            nav_open: !state.nav_open,
            ..state
        },
        NavEvent::CloseNav => NavState {
            nav_open: false,
            ..state
        },
    }
}
