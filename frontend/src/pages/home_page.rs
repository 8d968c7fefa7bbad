use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;

use common::iconography_query::IconographyQueryParams;

use crate::routes::Route;

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Richelieu - Accueil" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}
            TitleSearchCard {}
        }
    }
}

#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            "Richelieu. Histoire du quartier"
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 24px;
                line-height: 1.6;
                max-width: 720px;
            ",
            "Estampes, photographies et dessins du quartier de la rue de Richelieu, de la Bourse et du Palais-Royal."
        }
    }
}

#[component]
fn TitleSearchCard() -> Element {
    let n2 = navigator();
    let mut search_q = use_signal(|| "".to_string());
    rsx! {
        div {
            id: "x-card-title-search",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                border-radius: 22px;
                padding: 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
            ",
            div { style: "font-size: 30px; font-weight: 500;", "Recherche par titre" }
            div {
                style: "
                    display:flex;
                    align-items:center;
                    gap: 10px;
                    background-color: white;
                    border-radius: 9999px;
                    padding: 10px 14px;
                    color: #111827;
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
                input {
                    r#type: "text",
                    placeholder: "Titre d'une ressource",
                    style: "flex:1; border: none; outline: none; background: transparent; font-size: 14px;",
                    oninput: move |e| {
                        *search_q.write() = e.value();
                    },
                    onkeypress: move |e| {
                        if e.key() == Key::Enter {
                            e.prevent_default();
                            let query = title_query(&search_q.read());
                            n2.push(Route::iconography_search_from_query(&query));
                        }
                    },
                }
            }
            Link {
                to: Route::iconography_search_from_query(&IconographyQueryParams::default()),
                "Recherche avancée"
            }
        }
    }
}

fn title_query(title: &str) -> IconographyQueryParams {
    IconographyQueryParams::from_form(&serde_json::json!({ "title": [title] }))
}
