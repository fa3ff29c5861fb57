use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_utils::document;
use remodal_api::Size;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlDialogElement, HtmlElement};

use crate::error::Error;

const SURFACE: &str = ".modal-dialog";
const HEADER: &str = ".modal-header";
const BODY: &str = ".modal-body";
const FOOTER: &str = ".modal-footer";
const TITLE: &str = "h4.modal-title";
const CLOSE: &str = "button.close";

const LOADING_TITLE: &str = "Loading";
const LOADING_CONTENT: &str = "<div class=\"progress progress-striped active\">\
                               <div class=\"progress-bar\" style=\"width: 100%\"></div></div>";

/// The dialog surface a remote interaction renders into: a `<dialog>` element
/// with a sizing wrapper, header, body and footer region. Cloning shares the
/// underlying element handles and the footer listener store.
#[derive(Clone)]
pub struct Dialog {
    modal: HtmlDialogElement,
    surface: Element,
    header: Element,
    body: Element,
    footer: Element,
    listeners: Rc<RefCell<Vec<EventListener>>>,
}

impl Dialog {
    /// Binds the dialog matching `selector` and resolves its regions.
    pub fn bind(selector: &str) -> Result<Self, Error> {
        let modal = document()
            .query_selector(selector)
            .map_err(|_| Error::ElementNotFound(selector.to_owned()))?
            .ok_or_else(|| Error::ElementNotFound(selector.to_owned()))?;
        let modal: HtmlDialogElement =
            modal.dyn_into().map_err(|_| Error::NotDialog(selector.to_owned()))?;
        let surface = Self::region(&modal, SURFACE)?;
        let header = Self::region(&modal, HEADER)?;
        let body = Self::region(&modal, BODY)?;
        let footer = Self::region(&modal, FOOTER)?;
        Ok(Self { modal, surface, header, body, footer, listeners: Rc::default() })
    }

    fn region(modal: &HtmlDialogElement, selector: &str) -> Result<Element, Error> {
        modal
            .query_selector(selector)
            .ok()
            .flatten()
            .ok_or_else(|| Error::ElementNotFound(selector.to_owned()))
    }

    pub fn element(&self) -> &HtmlDialogElement {
        &self.modal
    }

    pub fn show(&self) {
        self.clear();
        if self.modal.show_modal().is_err() {
            leptos::logging::debug_warn!("dialog is already open");
        }
    }

    pub fn hide(&self) {
        self.modal.close();
    }

    pub fn toggle(&self) {
        if self.modal.open() {
            self.modal.close();
        } else if self.modal.show_modal().is_err() {
            leptos::logging::debug_warn!("could not open dialog");
        }
    }

    /// Removes the title and empties body and footer. Footer listeners are
    /// dropped with their buttons. Idempotent.
    pub fn clear(&self) {
        if let Ok(Some(title)) = self.header.query_selector(TITLE) {
            title.remove();
        }
        self.body.set_inner_html("");
        self.footer.set_inner_html("");
        self.listeners.borrow_mut().clear();
    }

    /// An unrecognized size leaves the current sizing untouched.
    pub fn set_size(&self, size: &str) {
        let classes = self.surface.class_list();
        let _ = classes.remove_2("modal-lg", "modal-sm");
        match size.parse::<Size>() {
            Ok(size) => {
                if let Some(class) = size.class() {
                    let _ = classes.add_1(class);
                }
            }
            Err(_) => leptos::logging::warn!("undefined size `{size}`"),
        }
    }

    pub fn set_header(&self, content: &str) {
        self.header.set_inner_html(content);
    }

    pub fn set_content(&self, content: &str) {
        self.body.set_inner_html(content);
    }

    pub fn set_footer(&self, content: &str) {
        self.footer.set_inner_html(content);
    }

    /// Replaces any existing title node, so the header carries at most one.
    pub fn set_title(&self, title: &str) {
        if let Ok(Some(old)) = self.header.query_selector(TITLE) {
            old.remove();
        }
        if let Ok(element) = document().create_element("h4") {
            element.set_class_name("modal-title");
            element.set_inner_html(title);
            let _ = self.header.append_child(&element);
        }
    }

    pub fn hide_close_button(&self) {
        self.toggle_close_button(false);
    }

    pub fn show_close_button(&self) {
        self.toggle_close_button(true);
    }

    fn toggle_close_button(&self, visible: bool) {
        let Ok(Some(button)) = self.header.query_selector(CLOSE) else { return };
        let Some(button) = button.dyn_ref::<HtmlElement>() else { return };
        let style = button.style();
        let result = if visible {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", "none")
        };
        if result.is_err() {
            leptos::logging::debug_warn!("could not toggle the close button");
        }
    }

    pub fn display_loading(&self) {
        self.set_content(LOADING_CONTENT);
        self.set_title(LOADING_TITLE);
    }

    /// Appends one footer button. `r#type` defaults to `button`, `classes` to
    /// `btn btn-primary`. Buttons accumulate until the next [`Self::clear`].
    pub fn add_footer_button(
        &self,
        label: &str,
        r#type: Option<&str>,
        classes: Option<&str>,
        on_click: Option<Box<dyn FnMut(&Event)>>,
    ) {
        let Ok(button) = document().create_element("button") else { return };
        let _ = button.set_attribute("type", r#type.unwrap_or("button"));
        button.set_class_name(classes.unwrap_or("btn btn-primary"));
        button.set_inner_html(label);
        let _ = self.footer.append_child(&button);
        if let Some(on_click) = on_click {
            self.listeners.borrow_mut().push(EventListener::new(&button, "click", on_click));
        }
    }
}
