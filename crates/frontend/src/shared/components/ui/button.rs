use leptos::prelude::*;

/// Primary button with a busy state
///
/// While `busy` is true the button is disabled and shows `busy_label`
/// instead of its children.
#[component]
pub fn Button(
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Busy state (reactive)
    #[prop(optional, into)]
    busy: Signal<bool>,
    /// Label shown while busy
    #[prop(optional, into)]
    busy_label: MaybeProp<String>,
    /// Button children (content)
    children: ChildrenFn,
) -> impl IntoView {
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class="button button--primary"
            disabled=move || busy.get()
        >
            {move || match busy_label.get() {
                Some(label) if busy.get() => label.into_any(),
                _ => children().into_any(),
            }}
        </button>
    }
}
