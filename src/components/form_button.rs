use leptos::prelude::*;

#[component]
pub fn FormButton(#[prop(into)] loading: Signal<bool>, text: &'static str) -> impl IntoView {
    view! {
        <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
            <Show when=move || loading.get()>
                <span class="spinner" aria-hidden="true"></span>
            </Show>
            {text}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;

    #[test]
    fn test_disabled_with_spinner_only_while_loading() {
        Owner::new().with(|| {
            let loading = RwSignal::new(false);
            let render = move || view! { <FormButton loading=loading text="Créer mon compte"/> }.to_html();

            let html = render();
            assert!(!html.contains("disabled"), "{html}");
            assert!(!html.contains("spinner"));
            assert!(html.contains("Créer mon compte"));

            loading.set(true);
            let html = render();
            assert!(html.contains("disabled"), "{html}");
            assert!(html.contains("spinner"));

            loading.set(false);
            assert!(!render().contains("disabled"));
        });
    }
}
