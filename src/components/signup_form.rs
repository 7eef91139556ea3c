use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::{ErrorBanner, FormButton, RequirementBadge};
use crate::context::use_connected_user;
use crate::controller::{ServerAccountApi, SignupController};
use crate::models::{Field, PasswordRequirement, SignupFormState};

#[component]
pub fn SignupForm() -> impl IntoView {
    let connected_user = use_connected_user();
    let navigate = use_navigate();
    let form = RwSignal::new(SignupFormState::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let navigate = navigate.clone();
        let controller = SignupController::new(
            ServerAccountApi,
            connected_user,
            move |path: &str| navigate(path, Default::default()),
        );
        spawn_local(async move {
            controller.submit(&form).await;
        });
    };

    let sending = Signal::derive(move || form.with(|f| f.is_sending()));
    let error_message = Signal::derive(move || form.with(|f| f.error_message.clone()));

    view! {
        <section class="signup-form">
            <form on:submit=on_submit novalidate>
                <FieldInput form=form field=Field::DisplayName label="Pseudonyme" input_type="text"/>

                <FieldInput
                    form=form
                    field=Field::Email
                    label="Adresse e-mail"
                    input_type="email"
                    placeholder="johndoe@mail.com"
                />

                <FieldInput form=form field=Field::Password label="Mot de passe" input_type="password">
                    <ul class="requirements">
                        {PasswordRequirement::all()
                            .into_iter()
                            .map(|requirement| {
                                view! {
                                    <RequirementBadge
                                        label=requirement.label()
                                        fulfilled=Signal::derive(move || {
                                            form.with(|f| f.requirement_met(requirement))
                                        })
                                    />
                                }
                            })
                            .collect_view()}
                    </ul>
                </FieldInput>

                <div class="form-actions">
                    <FormButton loading=sending text="Créer mon compte"/>
                </div>
            </form>

            <ErrorBanner message=error_message/>
        </section>
    }
}

/// Labelled input bound to one field of the form state
#[component]
fn FieldInput(
    form: RwSignal<SignupFormState>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let error = move || form.with(|f| f.errors.get(field));

    view! {
        <div class="form-group">
            <label for=field.name()>{label}</label>
            <input
                id=field.name()
                name=field.name()
                type=input_type
                placeholder=placeholder
                class=move || if error().is_some() { "input invalid-input" } else { "input valid-input" }
                prop:value=move || form.with(|f| f.fields.get(field).to_string())
                on:input=move |ev| {
                    form.update(|f| f.set_field(field, event_target_value(&ev)));
                }
            />
            {move || error().map(|e| view! { <p class="error">{field.error_message(e)}</p> })}
            {children.map(|children| children())}
        </div>
    }
}
