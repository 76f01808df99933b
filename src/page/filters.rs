/// Binds the filter engine to the search input, category buttons and cards

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlInputElement, MouseEvent};
use crate::article::CardFacets;
use crate::config::Selectors;
use crate::filter::{active_flags, FilterEvent, FilterState, SearchMode, ALL_CATEGORIES};
use super::elements;

pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";

pub struct FilterEngine {
    input: HtmlInputElement,
    buttons: Vec<Element>,
    cards: Vec<Element>,
    facets: Vec<CardFacets>,
    mode: SearchMode,
    state: RefCell<FilterState>,
}

impl FilterEngine {
    /// Wire up filtering for the cards currently inside `container`.
    ///
    /// Returns `None` when the page has no search input or no category
    /// buttons; both are required.
    pub fn bind(
        document: &Document,
        container: &Element,
        selectors: &Selectors,
        mode: SearchMode,
    ) -> Option<Rc<FilterEngine>> {
        let input = document
            .get_element_by_id(&selectors.search_input_id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        let buttons = document
            .query_selector_all(&selectors.category_button)
            .map(elements)
            .unwrap_or_default();

        let input = match input {
            Some(input) if !buttons.is_empty() => input,
            _ => {
                log::debug!("No search input or category buttons; filters disabled");
                return None;
            }
        };

        let cards = container
            .query_selector_all(&selectors.card)
            .map(elements)
            .unwrap_or_default();
        let facets = cards.iter().map(read_facets).collect();

        if let Some(all) = buttons
            .iter()
            .find(|b| b.get_attribute("data-category").as_deref() == Some(ALL_CATEGORIES))
        {
            let _ = all.class_list().add_1(ACTIVE_CLASS);
        }

        let engine = Rc::new(FilterEngine {
            input,
            buttons,
            cards,
            facets,
            mode,
            state: RefCell::new(FilterState::new()),
        });
        engine.attach_listeners();

        log::debug!("Filters bound to {} cards", engine.cards.len());
        Some(engine)
    }

    fn attach_listeners(self: &Rc<Self>) {
        let on_input = {
            let engine = Rc::clone(self);
            Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                let query = engine.input.value();
                engine.dispatch(FilterEvent::Search(query));
            })
        };
        if let Err(e) = self
            .input
            .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())
        {
            log::error!("Failed to listen for search input: {:?}", e);
        }
        on_input.forget();

        for (index, button) in self.buttons.iter().enumerate() {
            let on_click = {
                let engine = Rc::clone(self);
                Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
                    engine.select(index);
                })
            };
            if let Err(e) =
                button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            {
                log::error!("Failed to listen for category clicks: {:?}", e);
            }
            on_click.forget();
        }
    }

    /// Make button `index` the only active one and filter by its category.
    pub fn select(&self, index: usize) {
        let Some(button) = self.buttons.get(index) else {
            return;
        };

        for (button, active) in self.buttons.iter().zip(active_flags(self.buttons.len(), index)) {
            let _ = button.class_list().toggle_with_force(ACTIVE_CLASS, active);
        }

        let category = button
            .get_attribute("data-category")
            .unwrap_or_else(|| ALL_CATEGORIES.to_string());
        self.dispatch(FilterEvent::SelectCategory(category));
    }

    pub fn dispatch(&self, event: FilterEvent) {
        let state = self.state.take();
        let (next, visible) = state.apply(event, &self.facets, self.mode);
        self.state.replace(next);

        for (card, show) in self.cards.iter().zip(visible) {
            let _ = card.class_list().toggle_with_force(HIDDEN_CLASS, !show);
        }
    }

    pub fn state(&self) -> FilterState {
        self.state.borrow().clone()
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}

fn read_facets(card: &Element) -> CardFacets {
    CardFacets {
        title: card.get_attribute("data-title").unwrap_or_default(),
        summary: card.get_attribute("data-summary").unwrap_or_default(),
        categories: card.get_attribute("data-categories").unwrap_or_default(),
    }
}
