use dioxus::prelude::*;

use crate::components::error_boundary::SectionErrorBoundary;

/// Suspense and error handling for one section of a page. `section` names
/// it in the loading and error messages.
#[component]
pub fn SectionSuspense(section: String, children: Element) -> Element {
    let message = loading_message(&section);
    rsx! {
        SuspenseBoundary {
            fallback: move |_s: SuspenseContext| rsx! {
                LoadingNotice { message: message.clone() }
            },
            SectionErrorBoundary {
                section,
                children
            }
        }
    }
}

#[component]
pub fn LoadingNotice(message: String) -> Element {
    rsx! {
        p {
            class: "x-loading-notice",
            style: "color: rgba(0, 0, 0, 0.6); font-size: 18px; font-style: italic; margin: 15px;",
            "{message}"
        }
    }
}

fn loading_message(section: &str) -> String {
    format!("{section} : chargement...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_message_names_the_section() {
        assert_eq!(loading_message("Résultats iconographiques"), "Résultats iconographiques : chargement...");
    }
}
