//! Result list of the iconography advanced search.

use dioxus::prelude::*;

use common::iconography::IconographyItemLite;
use common::iconography_query::IconographyQueryParams;

use crate::api::search_api::search_iconography;
use crate::components::error_boundary::ErrorNotice;
use crate::components::suspend_boundary::LoadingNotice;

#[component]
pub fn IconographyResultList(query: ReadSignal<IconographyQueryParams>) -> Element {
    // reruns by itself when the query changes
    let mut search_result = use_resource(move || {
        let q = query.read().clone();
        fetch_results(q)
    });
    // drop the results of the previous query while the new one loads
    use_effect(move || {
        let _ = query.read();
        search_result.clear();
    });

    if query.read().is_empty() {
        return rsx! {
            p {
                style: "color: rgba(0, 0, 0, 0.5); font-size: 18px; margin: 15px;",
                "Aucun filtre appliqué"
            }
        };
    }

    let search_result = search_result.read();
    let results = match search_result.as_ref() {
        Some(Err(e)) => {
            return rsx! { ErrorNotice { title: "La recherche a échoué", details: e.to_string() } };
        }
        Some(Ok(results)) => results.clone(),
        None => return rsx! { LoadingNotice { message: "Recherche en cours..." } },
    };

    rsx! {
        div {
            id: "x-iconography-result-list",
            style: "display: flex; flex-direction: column; gap: 8px;",
            p {
                style: "font-size: 16px; color: rgba(0, 0, 0, 0.6); margin: 4px 8px;",
                "{results.len()} résultat(s)"
            }
            for item in results {
                IconographyResultCard { key: "{item.id_uuid}", item }
            }
        }
    }
}

/// An empty query is not sent: the whole table is not a search result.
async fn fetch_results(query: IconographyQueryParams) -> Result<Vec<IconographyItemLite>, ServerFnError> {
    if query.is_empty() {
        return Ok(vec![]);
    }
    search_iconography(query).await
}

#[component]
fn IconographyResultCard(item: IconographyItemLite) -> Element {
    let title = item.main_title().to_string();
    let date = item.display_date();
    let authors = item.authors.iter().map(|a| a.entry_name.as_str()).collect::<Vec<_>>().join(", ");
    let thumbnail = item.thumbnail.first().map(|t| t.url.clone());

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
            ",
            if let Some(url) = thumbnail {
                img {
                    src: "{url}",
                    alt: "{title}",
                    style: "width: 80px; height: 80px; object-fit: cover; border-radius: 4px;",
                }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 4px; min-width: 0;",
                span {
                    style: "font-size: 20px; line-height: 28px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{title}"
                }
                if !date.is_empty() {
                    span { style: "font-size: 16px; color: rgba(0, 0, 0, 0.6);", "{date}" }
                }
                if !authors.is_empty() {
                    span { style: "font-size: 16px; font-style: italic; color: rgba(0, 0, 0, 0.5);", "{authors}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::task::{Context, Poll, Waker};

    use super::*;

    #[test]
    fn empty_query_resolves_without_a_server_call() {
        let mut fut = std::pin::pin!(fetch_results(IconographyQueryParams::default()));
        let mut cx = Context::from_waker(Waker::noop());
        let Poll::Ready(result) = fut.as_mut().poll(&mut cx) else {
            panic!("an empty query must resolve immediately");
        };
        assert!(result.unwrap().is_empty());
    }
}
