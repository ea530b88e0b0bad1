use leptos::prelude::*;

/// Banner for form feedback
#[component]
pub fn Alert(
    /// Alert variant: "success" or "error" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Alert content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("error") {
        "success" => "alert--success",
        _ => "alert--error",
    };

    view! {
        <div class=move || format!("alert {}", variant_class()) role="alert">
            {children()}
        </div>
    }
}
