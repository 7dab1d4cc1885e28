use dioxus::prelude::*;

use super::Modal;

/// Asks before a destructive action such as deleting a warn or ticket set.
#[component]
pub fn ConfirmationModal(
    mut show: Signal<bool>,
    title: String,
    message: String,
    #[props(default = "Delete".to_string())]
    confirm_text: String,
    is_processing: bool,
    /// Failure of the last attempt, shown above the buttons.
    #[props(default)]
    error: Option<String>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx!(
        Modal {
            show,
            title,
            prevent_close: is_processing,
            p { class: "py-2", "{message}" }
            if let Some(error) = error {
                div {
                    class: "alert alert-error mt-2",
                    span { "{error}" }
                }
            }
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| show.set(false),
                    disabled: is_processing,
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn btn-error",
                    onclick: move |_| on_confirm.call(()),
                    disabled: is_processing,
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                    }
                    "{confirm_text}"
                }
            }
        }
    )
}
