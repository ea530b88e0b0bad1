use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// File input with label support
///
/// Emits the first selected file, or `None` when the selection is cleared.
/// Only one file is ever reported; `multiple` is never set.
#[component]
pub fn FileInput(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Accepted MIME types, e.g. "image/*"
    #[prop(optional, into)]
    accept: MaybeProp<String>,
    /// Name attribute (form field name)
    #[prop(optional, into)]
    name: MaybeProp<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<Option<web_sys::File>>>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group form__group--wide">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class="form__input form__input--file"
                type="file"
                name=move || name.get()
                accept=move || accept.get()
                disabled=move || disabled.get()
                required=required
                on:change=move |ev| {
                    let file = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                        .and_then(|input| input.files())
                        .and_then(|files| files.get(0));
                    if let Some(handler) = on_change {
                        handler.run(file);
                    }
                }
            />
        </div>
    }
}
