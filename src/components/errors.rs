use dioxus::prelude::*;

/// One dismissible `.alert` in the errors container.
#[component]
pub fn AlertBanner(message: String, on_dismiss: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div { class: "alert alert-danger", role: "alert",
            button {
                r#type: "button",
                class: "close",
                "aria-hidden": "true",
                onclick: move |evt| on_dismiss.call(evt),
                "×"
            }
            strong { "Error! " }
            "{message}"
        }
    }
}
