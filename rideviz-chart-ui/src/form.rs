//! Date-range validation wired to the live form inputs.
//!
//! The inputs carry native `required`/`min`/`max` constraints; validation
//! reads the browser's validity flags, picks the message (required check
//! first), and mirrors it back through `setCustomValidity` so the native
//! form UI and the inline error text always agree.

use rideviz_core::validation::{self, DateBounds, ValidationState};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// DOM id of the start date input.
pub const START_DATE_ID: &str = "start_date";

/// DOM id of the end date input.
pub const END_DATE_ID: &str = "end_date";

fn input_by_id(id: &str) -> Option<HtmlInputElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

/// Validate a single input against its native validity flags. The required
/// check takes precedence: an empty value is never reported as out of range.
/// Returns the message set as the input's custom validity (empty = valid).
fn validate_input(input: &HtmlInputElement, bounds: &DateBounds) -> String {
    let validity = input.validity();
    let message = if validity.value_missing() {
        validation::MSG_REQUIRED.to_string()
    } else if validity.range_underflow() || validity.range_overflow() {
        bounds.range_message()
    } else {
        String::new()
    };
    input.set_custom_validity(&message);
    message
}

/// Check start/end ordering. Only evaluated when both inputs hold a value;
/// overrides the end field's error either way when it runs.
fn validate_date_range(state: &mut ValidationState) {
    let (Some(start), Some(end)) = (input_by_id(START_DATE_ID), input_by_id(END_DATE_ID)) else {
        return;
    };
    if let Some(message) = validation::validate_order(&start.value(), &end.value()) {
        end.set_custom_validity(&message);
        state.end_date_error = message;
    }
}

/// Run the full validation pass over both live inputs. Invoked on every
/// input event and once at initialization.
pub fn validate_dates(bounds: &DateBounds) -> ValidationState {
    let mut state = ValidationState::default();
    if let Some(input) = input_by_id(START_DATE_ID) {
        state.start_date_error = validate_input(&input, bounds);
    }
    if let Some(input) = input_by_id(END_DATE_ID) {
        state.end_date_error = validate_input(&input, bounds);
    }
    validate_date_range(&mut state);
    state
}
