//! Date range picker with start and end date inputs.
//!
//! The inputs carry native `required`/`min`/`max` constraints; every input
//! event re-runs the validation pass and surfaces the error strings inline
//! under the field that caused them.

use crate::form;
use crate::state::AppState;
use dioxus::prelude::*;
use rideviz_core::dates::format_date;

/// Date range picker for filtering chart data, with inline validation.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let bounds = (state.bounds)();
    let min = format_date(&bounds.min);
    let max = format_date(&bounds.max);
    let start = (state.start_date)();
    let end = (state.end_date)();
    let errors = (state.validation)();

    let on_start_input = move |evt: Event<FormData>| {
        state.start_date.set(evt.value());
        state.validation.set(form::validate_dates(&state.bounds.peek()));
    };

    let on_end_input = move |evt: Event<FormData>| {
        state.end_date.set(evt.value());
        state.validation.set(form::validate_dates(&state.bounds.peek()));
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: flex-start;",
            div {
                label {
                    style: "font-weight: bold;",
                    "No: "
                    input {
                        id: form::START_DATE_ID,
                        r#type: "date",
                        required: true,
                        min: "{min}",
                        max: "{max}",
                        value: "{start}",
                        oninput: on_start_input,
                    }
                }
                if !errors.start_date_error.is_empty() {
                    p {
                        style: "margin: 4px 0 0 0; font-size: 12px; color: #C62828;",
                        "{errors.start_date_error}"
                    }
                }
            }
            div {
                label {
                    style: "font-weight: bold;",
                    "Līdz: "
                    input {
                        id: form::END_DATE_ID,
                        r#type: "date",
                        required: true,
                        min: "{min}",
                        max: "{max}",
                        value: "{end}",
                        oninput: on_end_input,
                    }
                }
                if !errors.end_date_error.is_empty() {
                    p {
                        style: "margin: 4px 0 0 0; font-size: 12px; color: #C62828;",
                        "{errors.end_date_error}"
                    }
                }
            }
        }
    }
}
