//! Error boundaries for pages and page sections.

use dioxus::prelude::*;

use crate::routes::Route;

/// Catches render errors of a whole page. Nothing below it can recover, so
/// it only offers a way back home.
#[component]
pub fn PageErrorBoundary(page: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("page {} failed to render: {:?}", page.cloned(), err);
                rsx! {
                    div {
                        class: "x-page-error",
                        style: "display: flex; flex-direction: column; gap: 12px; padding: 24px 40px;",
                        h1 { style: "color: darkred; margin: 0;", "Une erreur est survenue" }
                        p { "La page « {page} » n'a pas pu être affichée." }
                        a { href: Route::HomePage {}.to_string(), "Retour à l'accueil" }
                        details {
                            summary { "Détails techniques" }
                            pre { style: "text-wrap: auto;", "{err:#?}" }
                        }
                    }
                }
            },
            children
        }
    }
}

/// Catches render errors of one section and lets the user retry it while
/// the rest of the page stays usable.
#[component]
pub fn SectionErrorBoundary(section: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::warn!("section {} failed to render: {:?}", section.cloned(), err);
                let details = match err.error() {
                    Some(error) => format!("{:#?}", error.0),
                    None => "Erreur inconnue".to_string(),
                };
                rsx! {
                    ErrorNotice {
                        title: format!("{section} indisponible"),
                        details,
                        button {
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Réessayer"
                        }
                    }
                }
            },
            {children}
        }
    }
}

/// A failed section or request, with its details folded away.
#[component]
pub fn ErrorNotice(title: String, details: String, children: Element) -> Element {
    rsx! {
        div {
            class: "x-error-notice",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 12px 16px;
                border: 1px solid rgb(200, 60, 60);
                border-radius: 8px;
                background-color: rgb(253, 240, 240);
            ",
            strong { style: "color: darkred;", "{title}" }
            details {
                summary { "Détails" }
                pre { style: "text-wrap: auto; max-height: 300px; overflow-y: auto;", "{details}" }
            }
            {children}
        }
    }
}
