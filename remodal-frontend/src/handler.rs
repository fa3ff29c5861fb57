use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_utils::{document, window};
use leptos::task::spawn_local;
use remodal_api::{Command, Directives};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, Element, FormData, HtmlFormElement};

use crate::client::{Client, Method, Payload, Response};
use crate::dialog::Dialog;
use crate::error::Error;
use crate::trigger::{Confirm, Trigger};

/// Bubbling event dispatched on the dialog element for every JSON response,
/// before its directives apply. `detail` is the parsed payload.
pub const SUCCESS_EVENT: &str = "remote.success";

const CONFIRM_FORM_ID: &str = "remodal-confirm-form";

const OK_LABEL: &str = "OK";
const CANCEL_LABEL: &str = "Cancel";
const CLOSE_LABEL: &str = "Close";

/// Orchestrates one trigger click: optional confirm prompt, the request, and
/// the response-driven dialog mutations. One request may be in flight per
/// handler; overlapping dispatches are rejected.
#[derive(Clone)]
pub struct Handler {
    dialog: Dialog,
    busy: Rc<Cell<bool>>,
    submits: Rc<RefCell<Vec<EventListener>>>,
}

impl Handler {
    pub fn new(dialog: Dialog) -> Self {
        Self { dialog, busy: Rc::default(), submits: Rc::default() }
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    /// Entry point. A trigger with confirm attributes prompts first; anything
    /// else fetches immediately.
    pub fn open(&self, mut trigger: Trigger) {
        if let Some(confirm) = trigger.confirm.take() {
            self.confirm_modal(&trigger, confirm);
        } else {
            let handler = self.clone();
            spawn_local(async move {
                let payload = trigger.params.take().map(Payload::Raw);
                handler.do_remote(&trigger.url, trigger.method, payload).await;
            });
        }
    }

    /// Shows the local confirm prompt. OK submits the confirm form (with
    /// `data-params` merged under `pks`); Cancel hides the dialog without a
    /// request.
    fn confirm_modal(&self, trigger: &Trigger, confirm: Confirm) {
        self.dialog.show();
        self.dialog.set_size(&trigger.size);
        if let Some(title) = confirm.title.as_deref() {
            self.dialog.set_title(title);
        }
        self.dialog.set_content(&format!(
            "<form id=\"{CONFIRM_FORM_ID}\">{}</form>",
            confirm.message.as_deref().unwrap_or_default()
        ));

        let handler = self.clone();
        let url = trigger.url.clone();
        let method = trigger.method;
        let params = trigger.params.clone();
        self.dialog.add_footer_button(
            confirm.ok.as_deref().unwrap_or(OK_LABEL),
            Some("submit"),
            Some("btn btn-primary"),
            Some(Box::new(move |_| {
                let payload = confirm_payload(params.as_deref());
                let handler = handler.clone();
                let url = url.clone();
                spawn_local(async move {
                    handler.do_remote(&url, method, payload).await;
                });
            })),
        );

        let dialog = self.dialog.clone();
        self.dialog.add_footer_button(
            confirm.cancel.as_deref().unwrap_or(CANCEL_LABEL),
            None,
            Some("btn btn-default pull-left"),
            Some(Box::new(move |_| dialog.hide())),
        );
    }

    pub async fn do_remote(&self, url: &str, method: Method, payload: Option<Payload>) {
        if self.busy.replace(true) {
            leptos::logging::warn!("request to {url} rejected, another request is in flight");
            return;
        }
        self.dialog.show();
        self.dialog.display_loading();
        match Client::fetch(url, method, payload).await {
            Ok(response) => self.success(response).await,
            Err(error) => self.render_error(&error),
        }
        self.busy.set(false);
    }

    async fn success(&self, response: Response) {
        let content_type = response.content_type.to_ascii_lowercase();
        if content_type.contains("html") {
            self.dialog.set_content(&response.text);
        } else if content_type.contains("json") {
            let directives = match serde_json::from_str::<Directives>(&response.text) {
                Ok(directives) => directives,
                Err(error) => {
                    self.render_error(&Error::Payload(error));
                    return;
                }
            };
            self.emit_success(&response);
            self.apply(&directives).await;
        } else {
            self.failure(
                &Error::ContentType(response.content_type.clone()).to_string(),
                &response.text,
            );
            return;
        }
        self.rebind_submit();
    }

    fn render_error(&self, error: &Error) {
        match error {
            Error::Http(http) => self.failure(&http.to_string(), &http.body),
            error => self.failure(&error.to_string(), ""),
        }
    }

    /// Error state: title, raw payload, one Close button. No retry.
    fn failure(&self, title: &str, body: &str) {
        self.dialog.set_title(title);
        self.dialog.set_content(body);
        let dialog = self.dialog.clone();
        self.dialog.add_footer_button(
            CLOSE_LABEL,
            None,
            Some("btn btn-default"),
            Some(Box::new(move |_| dialog.hide())),
        );
    }

    fn emit_success(&self, response: &Response) {
        let detail = js_sys::JSON::parse(&response.text).unwrap_or(JsValue::NULL);
        let init = CustomEventInit::new();
        init.set_bubbles(true);
        init.set_detail(&detail);
        if let Ok(event) = CustomEvent::new_with_event_init_dict(SUCCESS_EVENT, &init) {
            let _ = self.dialog.element().dispatch_event(&event);
        }
    }

    async fn apply(&self, directives: &Directives) {
        for step in plan(directives) {
            match step {
                Step::Execute(command) => execute(command),
                Step::Forward(url) => {
                    let _ = window().location().set_href(url);
                }
                Step::ReloadFragment { selector, url } => self.reload_fragment(selector, url).await,
                Step::Close => self.dialog.hide(),
                Step::Size(size) => self.dialog.set_size(size),
                Step::Title(title) => self.dialog.set_title(title),
                Step::Content(content) => self.dialog.set_content(content),
                Step::Footer(footer) => self.dialog.set_footer(footer),
            }
        }
    }

    async fn reload_fragment(&self, selector: &str, url: &str) {
        let Ok(Some(element)) = document().query_selector(selector) else {
            leptos::logging::warn!("no element matches `{selector}` for fragment reload");
            return;
        };
        match Client::fetch(url, Method::Get, None).await {
            Ok(response) => element.set_inner_html(&response.text),
            Err(error) => leptos::logging::error!("fragment reload from {url} failed: {error}"),
        }
    }

    /// Rebinds every `[type="submit"]` element under the dialog so
    /// server-rendered forms chain another request instead of navigating.
    fn rebind_submit(&self) {
        let mut submits = self.submits.borrow_mut();
        submits.clear();
        let Ok(buttons) = self.dialog.element().query_selector_all("[type=\"submit\"]") else {
            return;
        };
        for index in 0..buttons.length() {
            let Some(button) = buttons.get(index) else { continue };
            let Ok(button) = button.dyn_into::<Element>() else { continue };
            let handler = self.clone();
            let target = button.clone();
            submits.push(EventListener::new(&button, "click", move |event| {
                event.prevent_default();
                handler.submit(&target);
            }));
        }
    }

    fn submit(&self, button: &Element) {
        let Ok(Some(form)) = button.closest("form") else { return };
        let Ok(form) = form.dyn_into::<HtmlFormElement>() else { return };
        let url = form.get_attribute("action").unwrap_or_default();
        let method = Method::parse(form.get_attribute("method").as_deref());
        let payload = FormData::new_with_form(&form).ok().map(Payload::Form);
        let handler = self.clone();
        spawn_local(async move {
            handler.do_remote(&url, method, payload).await;
        });
    }
}

fn confirm_payload(params: Option<&str>) -> Option<Payload> {
    let form = document().get_element_by_id(CONFIRM_FORM_ID)?;
    let form: HtmlFormElement = form.dyn_into().ok()?;
    let data = FormData::new_with_form(&form).ok()?;
    if let Some(params) = params {
        let _ = data.append_with_str("pks", params);
    }
    Some(Payload::Form(data))
}

fn execute(command: Command) {
    match command {
        Command::ReloadPage => {
            let _ = window().location().reload();
        }
        Command::HistoryBack => {
            if let Ok(history) = window().history() {
                let _ = history.back();
            }
        }
        Command::ScrollTop => window().scroll_to_with_x_and_y(0.0, 0.0),
        Command::Unknown => leptos::logging::warn!("unrecognized forceExecute command"),
    }
}

/// Directive steps in their fixed application order. A close directive ends
/// the plan; nothing after it applies.
#[derive(Debug, PartialEq, Eq)]
enum Step<'d> {
    Execute(Command),
    Forward(&'d str),
    ReloadFragment { selector: &'d str, url: &'d str },
    Close,
    Size(&'d str),
    Title(&'d str),
    Content(&'d str),
    Footer(&'d str),
}

fn plan(directives: &Directives) -> Vec<Step<'_>> {
    let mut steps = Vec::new();
    if let Some(command) = directives.force_execute {
        steps.push(Step::Execute(command));
    }
    if let Some(url) = present(&directives.force_forward) {
        steps.push(Step::Forward(url));
    }
    if let Some(selector) = present(&directives.force_reload_ajax) {
        if let Some(url) = present(&directives.force_reload_ajax_url) {
            steps.push(Step::ReloadFragment { selector, url });
        } else {
            leptos::logging::debug_warn!("forceReloadAjax without forceReloadAjaxUrl, skipping");
        }
    }
    if directives.force_close {
        steps.push(Step::Close);
        return steps;
    }
    if let Some(size) = directives.size.as_deref() {
        steps.push(Step::Size(size));
    }
    if let Some(title) = directives.title.as_deref() {
        steps.push(Step::Title(title));
    }
    if let Some(content) = directives.content.as_deref() {
        steps.push(Step::Content(content));
    }
    if let Some(footer) = directives.footer.as_deref() {
        steps.push(Step::Footer(footer));
    }
    steps
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
