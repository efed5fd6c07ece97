// src/app/browser_event_manager.rs
//! Attaches the click / keyup listeners for the submit button, pass button and formula input.

use std::sync::{Arc, Mutex};

use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, KeyboardEvent};

use crate::app::event_handler::{self, lock_or_recover, BrowserSession};
use crate::app::renderer::element_by_id;
use crate::app::round_timer::TimerSlot;
use crate::config::layout::{FORMULA_INPUT_ID, PASS_BUTTON_ID, SUBMIT_BUTTON_ID};

pub(crate) type ClosureStore = Arc<Mutex<Vec<Closure<dyn FnMut(Event)>>>>;

/// Attaches all game listeners. The closures are pushed into `closure_store` so they stay alive
/// for as long as the `GameApp` does.
pub(crate) fn attach_game_listeners(
    document: &Document,
    session_arc: &Arc<Mutex<BrowserSession>>,
    timer_slot: &TimerSlot,
    closure_store: &ClosureStore,
) -> Result<(), JsValue> {
    info!("Attaching game listeners...");

    // --- Submit button ---
    {
        let session_clone = Arc::clone(session_arc);
        let timer_clone = Arc::clone(timer_slot);
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            event_handler::handle_submit_from_input(&session_clone, &timer_clone);
        }) as Box<dyn FnMut(Event)>);
        attach(document, SUBMIT_BUTTON_ID, "click", closure, closure_store)?;
    }

    // --- Pass button ---
    {
        let session_clone = Arc::clone(session_arc);
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            event_handler::handle_pass(&session_clone);
        }) as Box<dyn FnMut(Event)>);
        attach(document, PASS_BUTTON_ID, "click", closure, closure_store)?;
    }

    // --- Enter key in the formula input ---
    {
        let session_clone = Arc::clone(session_arc);
        let timer_clone = Arc::clone(timer_slot);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            match event.dyn_into::<KeyboardEvent>() {
                Ok(key_event) if key_event.key() == "Enter" => {
                    event_handler::handle_submit_from_input(&session_clone, &timer_clone);
                }
                Ok(_) => {}
                Err(_) => error!("Failed to cast event to KeyboardEvent in keyup listener"),
            }
        }) as Box<dyn FnMut(Event)>);
        attach(document, FORMULA_INPUT_ID, "keyup", closure, closure_store)?;
    }

    info!("  Attached {} listeners.", lock_or_recover(closure_store).len());
    Ok(())
}

fn attach(
    document: &Document,
    element_id: &str,
    event_type: &str,
    closure: Closure<dyn FnMut(Event)>,
    closure_store: &ClosureStore,
) -> Result<(), JsValue> {
    let element = element_by_id(document, element_id)?;
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    lock_or_recover(closure_store).push(closure); // Keep the closure alive
    info!("  Attached {} listener to #{}", event_type, element_id);
    Ok(())
}
