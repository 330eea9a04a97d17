//! Page footer.

use dioxus::prelude::*;

use greeting_core::FooterView;

#[component]
pub fn Footer(view: FooterView) -> Element {
    rsx! {
        footer {
            class: "footer",
            p { class: "footer-copyright", "{view.copyright}" }
            p { class: "footer-credit", "{view.credit}" }
        }
    }
}
