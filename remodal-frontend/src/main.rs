use leptos::mount::mount_to_body;
use leptos::prelude::*;
use remodal_frontend::components::Shell;
use remodal_frontend::Controller;

#[component]
fn App() -> impl IntoView {
    view! {
        <a
            role="remote"
            href="/demo/modal"
            data-target="#remote-dialog"
            data-confirm-title="Demo"
            data-confirm-message="Send the demo request?"
        >
            "Open remote dialog"
        </a>
        {Shell("remote-dialog")}
    }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
    Controller::attach().forget();
}
