/// Copy-to-clipboard for code blocks

use std::cell::RefCell;
use uuid::Uuid;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement};
use crate::copy::{RestoreLedger, COPIED_CLASS, COPIED_LABEL, FEEDBACK_MS};
use crate::error::{self, Error};

/// Attribute holding a copy button's identity
pub const COPY_ID_ATTR: &str = "data-copy-id";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["navigator", "clipboard"], js_name = writeText)]
    async fn write_text(text: &str) -> Result<JsValue, JsValue>;
}

/// A scheduled restore. Dropping it frees the callback, so a superseded
/// timer must be cleared first.
struct RestoreTimer {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

thread_local! {
    // pending restore timers, keyed by button identity
    static RESTORES: RefCell<RestoreLedger<RestoreTimer>> = RefCell::new(RestoreLedger::new());
}

/// Copy the code block around `button`. Failures are logged, never raised.
pub fn copy_code(button: HtmlElement) {
    spawn_local(async move {
        if let Err(e) = copy_and_confirm(&button).await {
            log::error!("Failed to copy: {}", e);
        }
    });
}

async fn copy_and_confirm(button: &HtmlElement) -> error::Result<()> {
    let text = code_text(button)?;
    write_text(&text)
        .await
        .map_err(|e| Error::clipboard(format!("{:?}", e)))?;
    show_feedback(button)
}

/// Rendered text of the `code` element in the button's enclosing code block.
pub fn code_text(button: &Element) -> error::Result<String> {
    let block = button
        .closest(".code-block")
        .map_err(|e| Error::dom(format!("{:?}", e)))?
        .ok_or_else(|| Error::dom("copy button is not inside a .code-block"))?;
    let code = block
        .query_selector("code")
        .map_err(|e| Error::dom(format!("{:?}", e)))?
        .ok_or_else(|| Error::dom("code block has no <code> element"))?;
    let code: HtmlElement = code
        .dyn_into()
        .map_err(|_| Error::dom("<code> is not an HTML element"))?;

    Ok(code.inner_text())
}

/// Stable identity for a button, assigned on first use.
pub fn button_id(button: &Element) -> String {
    if let Some(id) = button.get_attribute(COPY_ID_ATTR) {
        return id;
    }
    let id = Uuid::new_v4().to_string();
    let _ = button.set_attribute(COPY_ID_ATTR, &id);
    id
}

fn show_feedback(button: &HtmlElement) -> error::Result<()> {
    let window = web_sys::window().ok_or_else(|| Error::dom("no window"))?;
    let id = button_id(button);
    let current_label = button.inner_text();

    let callback: Closure<dyn FnMut()> = {
        let button = button.clone();
        let id = id.clone();
        Closure::once(move || {
            // the fired timer owns this closure; it is released once the call returns
            let Some((label, _timer)) = RESTORES.with(|restores| restores.borrow_mut().fire(&id)) else {
                return;
            };
            button.set_inner_text(&label);
            let _ = button.class_list().remove_1(COPIED_CLASS);
        })
    };
    let handle = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref::<js_sys::Function>(),
            FEEDBACK_MS as i32,
        )
        .map_err(|e| Error::dom(format!("Failed to schedule restore: {:?}", e)))?;

    let timer = RestoreTimer {
        handle,
        _callback: callback,
    };
    let armed = RESTORES.with(|restores| restores.borrow_mut().arm(&id, &current_label, timer));
    if let Some(previous) = armed.superseded {
        window.clear_timeout_with_handle(previous.handle);
    }

    button.set_inner_text(COPIED_LABEL);
    let _ = button.class_list().add_1(COPIED_CLASS);
    Ok(())
}
