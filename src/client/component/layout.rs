use dioxus::prelude::*;

use crate::client::{component::Header, constant::EXTERNAL_LINKS, router::Route};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        class: "flex flex-col min-h-screen",
        Header {  }
        div {
            class: "flex-1",
            Outlet::<Route> {}
        }
        footer {
            class: "footer footer-center p-4 bg-base-200 text-sm",
            nav {
                class: "flex gap-4",
                for link in EXTERNAL_LINKS.iter() {
                    a {
                        class: "link link-hover",
                        href: link.href,
                        target: "_blank",
                        rel: "noreferrer",
                        "{link.label}"
                    }
                }
            }
        }
    })
}
