use dioxus::prelude::*;

use crate::client::model::save::SaveState;

/// Submit and reset buttons of a settings form, with the outcome of the last save.
///
/// After a failed save only "Reset" is enabled until the form is reset.
#[component]
pub fn SaveBar(
    state: SaveState,
    /// Whether the form differs from the saved settings.
    dirty: bool,
    /// Whether the form passes validation.
    valid: bool,
    on_save: EventHandler<()>,
    on_reset: EventHandler<()>,
) -> Element {
    let can_save = dirty && valid && state.can_submit();

    rsx! {
        div {
            class: "flex flex-col gap-2 mt-6",
            if let Some(error) = state.save_error() {
                div {
                    class: "alert alert-error",
                    span { "Failed to save: {error}" }
                }
            } else if state.is_saved() && !dirty {
                div {
                    class: "alert alert-success",
                    span { "Saved" }
                }
            }
            div {
                class: "flex gap-2 justify-end",
                button {
                    r#type: "button",
                    class: "btn",
                    disabled: state.is_saving() || (!dirty && state.save_error().is_none()),
                    onclick: move |_| on_reset.call(()),
                    "Reset"
                }
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    disabled: !can_save,
                    onclick: move |_| on_save.call(()),
                    if state.is_saving() {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                        "Saving..."
                    } else {
                        "Save"
                    }
                }
            }
        }
    }
}
