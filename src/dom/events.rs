// ============================================================================
// EVENT HANDLING - listeners con Closure + forget()
// ============================================================================
// Los listeners de elementos se limpian cuando el elemento sale del DOM
// (re-render con set_inner_html("")), así que forget() no acumula.
// Listeners globales (window): registrar UNA sola vez en el arranque.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, InputEvent, MouseEvent};

use crate::dom::input_value;

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(InputEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(InputEvent)>);
    element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Submit de <form> con preventDefault (sin recarga de página)
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        handler();
    }) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Cada tecla escribe el valor del input en el campo del formulario (sin re-render)
pub fn bind_input<S, F>(input: &Element, state: Rc<RefCell<S>>, mut write: F) -> Result<(), JsValue>
where
    S: 'static,
    F: FnMut(&mut S, String) + 'static,
{
    let element = input.clone();
    on_input(input, move |_e: InputEvent| {
        if let Some(value) = input_value(&element) {
            write(&mut state.borrow_mut(), value);
        }
    })
}
