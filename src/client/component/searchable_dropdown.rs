use dioxus::prelude::*;

/// Text input that opens a filtered list of choices while focused.
///
/// The caller owns the search signal and renders the matching items as
/// children, usually [`DropdownItem`]s.
#[component]
pub fn SearchableDropdown(
    mut search_query: Signal<String>,
    placeholder: String,
    /// Shown while the list is closed, e.g. the selected channel's name
    display_value: Option<String>,
    #[props(default = false)]
    disabled: bool,
    #[props(default = "No matches found".to_string())]
    not_found_message: String,
    has_items: bool,
    children: Element,
) -> Element {
    let mut show_dropdown = use_signal(|| false);

    rsx! {
        div {
            class: "relative",
            input {
                r#type: "text",
                class: "input input-bordered w-full",
                placeholder: "{placeholder}",
                value: if show_dropdown() {
                    "{search_query()}"
                } else if let Some(name) = display_value {
                    "{name}"
                } else {
                    ""
                },
                onfocus: move |_| {
                    show_dropdown.set(true);
                    search_query.set(String::new());
                },
                oninput: move |evt| {
                    search_query.set(evt.value());
                    show_dropdown.set(true);
                },
                disabled,
            }

            if show_dropdown() {
                // Click outside to close
                div {
                    class: "fixed inset-0 z-0",
                    onclick: move |_| {
                        show_dropdown.set(false);
                        search_query.set(String::new());
                    }
                }
                div {
                    class: "absolute z-10 w-full mt-1 bg-base-100 border border-base-300 rounded-lg shadow-lg max-h-60 overflow-y-auto",
                    onclick: move |_| show_dropdown.set(false),
                    if has_items {
                        {children}
                    } else {
                        div {
                            class: "px-4 py-2 text-center opacity-50 text-sm",
                            "{not_found_message}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn DropdownItem(
    #[props(default = false)]
    selected: bool,
    on_select: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: if selected {
                "px-4 py-2 cursor-pointer bg-primary text-primary-content"
            } else {
                "px-4 py-2 cursor-pointer hover:bg-base-200"
            },
            onmousedown: move |evt| {
                evt.prevent_default();
                on_select.call(());
            },
            {children}
        }
    }
}
