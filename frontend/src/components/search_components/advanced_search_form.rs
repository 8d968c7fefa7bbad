//! Advanced search form over the iconography table.

use dioxus::prelude::*;

use common::iconography_query::{BooleanOp, DateFilterKind, IconographyQueryParams};
use common::validation::{
    AllowedDateRange, TEXT_VALIDATOR_MESSAGE, date_range_validator_message, date_validator_message, validate_text,
};

use crate::api::search_api::iconography_overall_date_range;
use crate::data_definitions::advanced_search_form_state::{AdvancedSearchFormState, DateBlockState};
use crate::data_definitions::search_field::SearchField;
use crate::routes::Route;

#[component]
pub fn AdvancedSearchForm(original_query: ReadSignal<IconographyQueryParams>) -> Element {
    let mut form_state = use_signal(|| AdvancedSearchFormState::from_query(&original_query.read()));
    // navigation does not reset the signal: refill the form when the url changes.
    use_effect(move || {
        let new_query = original_query.read().clone();
        form_state.set(AdvancedSearchFormState::from_query(&new_query));
    });

    let date_range_resource = use_resource(move || iconography_overall_date_range());
    let allowed_date_range = use_memo(move || match &*date_range_resource.read() {
        Some(Ok(range)) => *range,
        _ => AllowedDateRange::default(),
    });
    let is_valid = use_memo(move || form_state.read().is_valid(&allowed_date_range()));

    let submit = move |_| {
        if !is_valid() {
            return;
        }
        let query = form_state.read().to_query();
        match query {
            Ok(query) => {
                dioxus::logger::tracing::info!("advanced search submitted: {}", query.to_json());
                navigator().push(Route::iconography_search_from_query(&query));
            }
            Err(e) => dioxus::logger::tracing::error!("cannot build the search query: {e}"),
        }
    };
    let reset = move |_| {
        form_state.set(AdvancedSearchFormState::from_query(&IconographyQueryParams::default()));
    };

    rsx! {
        div {
            id: "x-advanced-search-form",
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                padding: 20px;
                background-color: white;
                border: 1px solid rgb(164, 164, 164);
                border-radius: 8px;
            ",
            for field in SearchField::TEXT_FIELDS {
                RepeatableTextInput { key: "{field.key()}", field, form_state }
            }
            RepeatableDateInput { form_state, allowed_date_range: allowed_date_range() }
            div {
                style: "display: flex; flex-direction: row; gap: 10px;",
                button {
                    disabled: !is_valid(),
                    onclick: submit,
                    "Rechercher"
                }
                button {
                    onclick: reset,
                    "Réinitialiser"
                }
            }
        }
    }
}

#[component]
fn BooleanOpSelect(field: SearchField, form_state: Signal<AdvancedSearchFormState>) -> Element {
    let mut form_state = form_state;
    let current = form_state.read().op(field);
    rsx! {
        select {
            onchange: move |event: Event<FormData>| {
                if let Some(op) = BooleanOp::parse(&event.value()) {
                    form_state.write().set_op(field, op);
                }
            },
            for op in BooleanOp::ALL {
                option {
                    key: "{op.as_str()}",
                    value: "{op.as_str()}",
                    selected: op == current,
                    "{op}"
                }
            }
        }
    }
}

#[component]
fn RepeatableTextInput(field: SearchField, form_state: Signal<AdvancedSearchFormState>) -> Element {
    let mut form_state = form_state;
    let values = form_state.read().values(field);
    let is_valid = form_state.read().is_field_valid(field);

    rsx! {
        fieldset {
            style: "display: flex; flex-direction: column; gap: 4px; border: none; padding: 0;",
            div {
                style: "display: flex; flex-direction: row; gap: 10px; align-items: center;",
                label { style: "width: 140px; font-weight: 500;", "{field.label()}" }
                BooleanOpSelect { field, form_state }
            }
            for (index, value) in values.into_iter().enumerate() {
                div {
                    key: "{index}",
                    style: "display: flex; flex-direction: row; gap: 6px; margin-left: 150px;",
                    input {
                        r#type: "text",
                        class: "{input_class(field, &value)}",
                        value: "{value}",
                        oninput: move |event: Event<FormData>| {
                            form_state.write().set_value(field, index, event.value());
                        },
                    }
                    button {
                        title: "Supprimer",
                        onclick: move |_| form_state.write().remove_value(field, index),
                        "−"
                    }
                }
            }
            div {
                style: "margin-left: 150px;",
                button {
                    onclick: move |_| form_state.write().push_value(field),
                    "+ Ajouter une valeur"
                }
            }
            if !is_valid {
                p { class: "x-validation-message", style: "margin-left: 150px;", "{TEXT_VALIDATOR_MESSAGE}" }
            }
        }
    }
}

#[component]
fn RepeatableDateInput(form_state: Signal<AdvancedSearchFormState>, allowed_date_range: AllowedDateRange) -> Element {
    let mut form_state = form_state;
    let blocks = form_state.read().date.clone();

    rsx! {
        fieldset {
            style: "display: flex; flex-direction: column; gap: 4px; border: none; padding: 0;",
            div {
                style: "display: flex; flex-direction: row; gap: 10px; align-items: center;",
                label { style: "width: 140px; font-weight: 500;", "{SearchField::Date.label()}" }
                BooleanOpSelect { field: SearchField::Date, form_state }
            }
            for block in blocks {
                DateBlockInput { key: "{block.id}", block, form_state, allowed_date_range }
            }
            div {
                style: "margin-left: 150px;",
                button {
                    onclick: move |_| form_state.write().add_date_block(),
                    "+ Ajouter une date"
                }
            }
        }
    }
}

#[component]
fn DateBlockInput(
    block: DateBlockState,
    form_state: Signal<AdvancedSearchFormState>,
    allowed_date_range: AllowedDateRange,
) -> Element {
    let mut form_state = form_state;
    let is_valid = block.is_valid(&allowed_date_range);
    let message = match block.filter {
        DateFilterKind::Range => date_range_validator_message(&allowed_date_range),
        _ => date_validator_message(&allowed_date_range),
    };
    let id = block.id.clone();
    let update = move |change: fn(&mut DateBlockState, String)| {
        let id = id.clone();
        move |event: Event<FormData>| {
            let mut form_state = form_state;
            form_state.write().update_date_block(&id, |block| change(block, event.value()));
        }
    };
    let remove_id = block.id.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; margin-left: 150px;",
            div {
                style: "display: flex; flex-direction: row; gap: 6px; align-items: center;",
                select {
                    onchange: update(|block, value| {
                        if let Some(kind) = DateFilterKind::parse(&value) {
                            block.filter = kind;
                        }
                    }),
                    for kind in DateFilterKind::ALL {
                        option {
                            key: "{kind.as_str()}",
                            value: "{kind.as_str()}",
                            selected: kind == block.filter,
                            "{kind.label()}"
                        }
                    }
                }
                if block.filter == DateFilterKind::Range {
                    input {
                        r#type: "number",
                        placeholder: "AAAA",
                        value: "{block.date_start}",
                        oninput: update(|block, value| block.date_start = value),
                    }
                    span { "et" }
                    input {
                        r#type: "number",
                        placeholder: "AAAA",
                        value: "{block.date_end}",
                        oninput: update(|block, value| block.date_end = value),
                    }
                } else {
                    input {
                        r#type: "number",
                        placeholder: "AAAA",
                        value: "{block.date}",
                        oninput: update(|block, value| block.date = value),
                    }
                }
                button {
                    title: "Supprimer",
                    onclick: move |_| form_state.write().remove_date_block(&remove_id),
                    "−"
                }
            }
            if !is_valid {
                p { class: "x-validation-message", "{message}" }
            }
        }
    }
}

fn input_class(field: SearchField, value: &str) -> &'static str {
    if field.is_free_text() && !validate_text(value) { "x-input-invalid" } else { "" }
}
