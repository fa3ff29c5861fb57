use leptos::prelude::*;
use leptos::{ev, html};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlDialogElement};

/// The standard dialog surface a remote trigger renders into. Mount one per
/// `data-target` id used on the page.
pub fn Shell(id: &'static str) -> impl IntoView {
    html::dialog().id(id).class("modal").child(
        html::div().class("modal-dialog").child(
            html::div().class("modal-content").child((
                html::div().class("modal-header").child(
                    html::button()
                        .r#type("button")
                        .class("close")
                        .aria_label("Close")
                        .child("\u{d7}")
                        .on(ev::click, |event| {
                            let Some(target) = event.target() else { return };
                            let Ok(element) = target.dyn_into::<Element>() else { return };
                            let Ok(Some(dialog)) = element.closest("dialog") else { return };
                            if let Some(dialog) = dialog.dyn_ref::<HtmlDialogElement>() {
                                dialog.close();
                            }
                        }),
                ),
                html::div().class("modal-body"),
                html::div().class("modal-footer"),
            )),
        ),
    )
}
