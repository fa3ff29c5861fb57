use gloo_events::EventListener;
use gloo_utils::document;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dialog::Dialog;
use crate::error::Error;
use crate::handler::Handler;
use crate::trigger::Trigger;

const TRIGGER_SELECTOR: &str = "[role=\"remote\"]";

/// The page-wide delegated click subscription. Clicks on (or inside) an
/// element marked `role="remote"` open a remote dialog interaction. Dropping
/// the controller detaches the listener; [`Controller::forget`] keeps it for
/// the page lifetime.
pub struct Controller {
    listener: EventListener,
}

impl Controller {
    pub fn attach() -> Self {
        let listener = EventListener::new(&document(), "click", move |event| {
            let Some(target) = event.target() else { return };
            let Ok(element) = target.dyn_into::<Element>() else { return };
            let Ok(Some(trigger)) = element.closest(TRIGGER_SELECTOR) else { return };
            event.prevent_default();
            event.stop_propagation();
            event.stop_immediate_propagation();
            if let Err(error) = open(&trigger) {
                leptos::logging::error!("remote modal trigger failed: {error}");
            }
        });
        Self { listener }
    }

    pub fn forget(self) {
        self.listener.forget();
    }
}

/// One click: read the trigger, bind its dialog, hand off to a fresh handler.
fn open(element: &Element) -> Result<(), Error> {
    let trigger = Trigger::from_element(element)?;
    let dialog = Dialog::bind(&trigger.target)?;
    Handler::new(dialog).open(trigger);
    Ok(())
}
