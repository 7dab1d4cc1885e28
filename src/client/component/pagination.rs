use dioxus::prelude::*;

use crate::client::util::pagination::page_window;

/// Page buttons around the current page, plus first and last page jumps.
///
/// Pages are 0-based internally and shown 1-based.
#[component]
pub fn Pagination(page: usize, last_page: usize, total: usize, on_page_change: EventHandler<usize>) -> Element {
    if total == 0 {
        return rsx! {};
    }

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-2",
            span {
                class: "text-xs sm:text-sm opacity-70",
                "{total} results"
            }
            div {
                class: "join",
                button {
                    class: "join-item btn btn-xs sm:btn-sm",
                    disabled: page == 0,
                    onclick: move |_| on_page_change.call(0),
                    "«"
                }
                for number in page_window(page, last_page) {
                    button {
                        key: "{number}",
                        class: if number == page { "join-item btn btn-xs sm:btn-sm btn-active" } else { "join-item btn btn-xs sm:btn-sm" },
                        onclick: move |_| on_page_change.call(number),
                        "{number + 1}"
                    }
                }
                button {
                    class: "join-item btn btn-xs sm:btn-sm",
                    disabled: page >= last_page,
                    onclick: move |_| on_page_change.call(last_page),
                    "»"
                }
            }
        }
    )
}
