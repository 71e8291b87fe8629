//! Autocomplete search box for places in India.

use crate::maps;
use crate::places::GooglePlaces;
use dioxus::prelude::*;
use dwlr_core::place::Place;
use dwlr_geo::{LocationSearch, Prediction};
use std::rc::Rc;

#[derive(Props, Clone, PartialEq)]
pub struct LocationSearchBoxProps {
    /// Called with the normalized place once details are known
    pub on_select: EventHandler<Place>,
    /// Initial input text
    #[props(default = String::new())]
    pub value: String,
}

/// Text input with a predictions dropdown.
///
/// Typing asks for suggestions; clicking one, or submitting the form with
/// suggestions showing, looks up its details and reports the place.
#[component]
pub fn LocationSearchBox(props: LocationSearchBoxProps) -> Element {
    let initial = props.value.clone();
    let mut input = use_signal(move || initial);
    let mut predictions = use_signal(Vec::<Prediction>::new);
    let mut busy = use_signal(|| false);
    let mut show_dropdown = use_signal(|| false);
    let mut search = use_signal(|| None::<Rc<LocationSearch<GooglePlaces>>>);
    let mut query = use_signal(|| 0u64);
    let on_select = props.on_select;

    let _init = use_resource(move || async move {
        let service = match maps::load_maps_script().await {
            Ok(()) => LocationSearch::new(GooglePlaces),
            Err(e) => LocationSearch::unavailable(e),
        };
        search.set(Some(Rc::new(service)));
    });

    let notice = search.read().as_ref().and_then(|s| s.notice());

    let choose = move |prediction: Prediction| {
        let Some(service) = search.peek().clone() else {
            return;
        };
        let (mut input, mut show_dropdown, mut busy) = (input, show_dropdown, busy);
        input.set(prediction.description.clone());
        show_dropdown.set(false);
        busy.set(true);
        spawn(async move {
            service
                .select(&prediction, |place| on_select.call(place))
                .await;
            busy.set(false);
        });
    };

    let on_input = move |evt: Event<FormData>| {
        let value = evt.value();
        input.set(value.clone());
        let Some(service) = search.peek().clone() else {
            return;
        };
        if value.trim().is_empty() {
            predictions.set(Vec::new());
            return;
        }
        // Responses can arrive out of order; keep only the latest.
        let ticket = *query.peek() + 1;
        query.set(ticket);
        spawn(async move {
            let found = service.suggest(&value).await;
            if *query.peek() == ticket {
                show_dropdown.set(!found.is_empty());
                predictions.set(found);
            }
        });
    };

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let first = predictions.peek().first().cloned();
        if let Some(first) = first {
            choose(first);
        }
    };

    rsx! {
        div {
            style: "position: relative; width: 100%;",
            form {
                style: "position: relative;",
                onsubmit: on_submit,
                input {
                    r#type: "text",
                    value: "{input}",
                    placeholder: "Search for a location in India...",
                    disabled: busy(),
                    style: "width: 100%; box-sizing: border-box; padding: 8px 16px; font-size: 14px; border: 1px solid #d1d5db; border-radius: 6px; box-shadow: 0 1px 2px rgba(0,0,0,0.05);",
                    oninput: on_input,
                    onfocus: move |_| show_dropdown.set(!predictions.read().is_empty()),
                }
                if busy() {
                    span {
                        style: "position: absolute; right: 12px; top: 50%; transform: translateY(-50%); font-size: 12px; color: #9ca3af;",
                        "…"
                    }
                }
            }
            if show_dropdown() && !predictions.read().is_empty() {
                ul {
                    style: "position: absolute; z-index: 10; margin: 4px 0 0; padding: 4px 0; width: 100%; max-height: 240px; overflow: auto; list-style: none; background: #fff; border: 1px solid #e5e7eb; border-radius: 6px; box-shadow: 0 4px 12px rgba(0,0,0,0.1); font-size: 14px;",
                    onmouseleave: move |_| show_dropdown.set(false),
                    for prediction in predictions() {
                        li {
                            key: "{prediction.place_id}",
                            button {
                                r#type: "button",
                                style: "width: 100%; padding: 8px 16px; text-align: left; background: none; border: none; cursor: pointer;",
                                onclick: {
                                    let prediction = prediction.clone();
                                    move |_| choose(prediction.clone())
                                },
                                div { style: "font-weight: 500;", "{prediction.main_text}" }
                                div { style: "font-size: 12px; color: #6b7280;", "{prediction.secondary_text}" }
                            }
                        }
                    }
                }
            }
            if let Some(notice) = notice {
                p { style: "margin: 4px 0 0; font-size: 12px; color: #d97706;", "{notice}" }
            }
        }
    }
}
