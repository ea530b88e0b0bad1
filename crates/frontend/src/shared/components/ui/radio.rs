use leptos::prelude::*;

/// Radio group component
///
/// Renders one radio per option inside a bordered row; ids are derived from
/// `name` and the option value.
#[component]
pub fn RadioGroup(
    /// Label for the group
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current selected value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <div class="form__radio-group">
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, lbl)| {
                        let radio_id = format!("{}-{}", name, val);
                        let val_for_check = val.clone();
                        let val_for_change = val.clone();
                        view! {
                            <div class="form__radio-wrapper">
                                <input
                                    id=radio_id.clone()
                                    type="radio"
                                    class="form__radio"
                                    name=name.clone()
                                    value=val
                                    prop:checked=move || value.get() == val_for_check
                                    disabled=move || disabled.get()
                                    on:change=move |_| {
                                        if let Some(handler) = on_change {
                                            handler.run(val_for_change.clone());
                                        }
                                    }
                                />
                                <label class="form__radio-label" for=radio_id>
                                    {lbl}
                                </label>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
