// src/web.rs
//! Browser binding. Build with `wasm-pack build --target web` and load the
//! page rendered by `templates::signup`.
use crate::client::HttpSignupClient;
use crate::controller::SignupFormController;
use crate::dom::{
    Panel, SubmitEvent, TextField, CLOSE_POPUP_ID, EMAIL_ID, FIRST_NAME_ID, LAST_NAME_ID,
    SIGNUP_FORM_ID, SUCCESS_POPUP_ID,
};
use crate::models::DEFAULT_SIGNUP_ENDPOINT;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement};

impl TextField for HtmlInputElement {
    fn current_value(&self) -> String {
        HtmlInputElement::value(self)
    }
}

impl Panel for HtmlElement {
    fn show(&self) {
        let _ = self.style().set_property("display", "block");
    }

    fn hide(&self) {
        let _ = self.style().set_property("display", "none");
    }

    fn is_visible(&self) -> bool {
        self.style()
            .get_property_value("display")
            .map(|display| display == "block")
            .unwrap_or(false)
    }
}

impl SubmitEvent for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element #{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element #{} has an unexpected type", id)))
}

/// Looks up the six signup elements and registers the submit and close
/// handlers. Call once the DOM is loaded.
#[wasm_bindgen]
pub fn attach_signup_form() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let origin = window.location().origin()?;
    let client = HttpSignupClient::new(&origin, DEFAULT_SIGNUP_ENDPOINT)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let form: HtmlElement = element(&document, SIGNUP_FORM_ID)?;
    let close_button: HtmlElement = element(&document, CLOSE_POPUP_ID)?;

    let controller = Rc::new(SignupFormController::new(
        client,
        element::<HtmlInputElement>(&document, FIRST_NAME_ID)?,
        element::<HtmlInputElement>(&document, LAST_NAME_ID)?,
        element::<HtmlInputElement>(&document, EMAIL_ID)?,
        element::<HtmlElement>(&document, SUCCESS_POPUP_ID)?,
    ));

    let submit_controller = Rc::clone(&controller);
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        // preventDefault only counts while the event is dispatching, so the
        // synchronous half runs here and the request goes to the microtask queue
        let Some(request) = submit_controller.begin_submit(&event) else {
            return;
        };

        let controller = Rc::clone(&submit_controller);
        wasm_bindgen_futures::spawn_local(async move {
            // Failures stay off the page
            let _ = controller.finish_submit(request).await;
        });
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    let close_controller = Rc::clone(&controller);
    let on_close = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        close_controller.on_close_popup();
    });
    close_button.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
    on_close.forget();

    tracing::debug!("Signup form attached");
    Ok(())
}
