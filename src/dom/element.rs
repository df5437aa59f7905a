// ============================================================================
// ELEMENT HELPERS - Lectura de inputs y alertas del navegador
// ============================================================================

use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent};
use yew::TargetCast;

/// Current value of the `<input>` that fired `event`
pub fn input_value(event: &InputEvent) -> String {
    event.target_unchecked_into::<HtmlInputElement>().value()
}

/// Current value of the `<textarea>` that fired `event`
pub fn textarea_value(event: &InputEvent) -> String {
    event.target_unchecked_into::<HtmlTextAreaElement>().value()
}

/// Current value of the `<select>` that fired `event`
pub fn select_value(event: &Event) -> String {
    event.target_unchecked_into::<HtmlSelectElement>().value()
}

/// Blocking browser alert; silently skipped outside a window
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                log::warn!("⚠️ [DOM] alert() failed: {}", message);
            }
        }
        None => log::warn!("⚠️ [DOM] No window for alert: {}", message),
    }
}
