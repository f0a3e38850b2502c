//! Partner request form.
//!
//! The component owns a `RwSignal<FormState>` and drives it through the
//! `stylist_form` coordinator. Once the component is disposed the signal is
//! gone, so a simulated submission finishing after navigation changes nothing.

use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use stylist_form::{
    Field, FormCopy, FormHandle, FormState, SimulatedSubmitter, SiteConfig, SubmissionCoordinator,
};

#[derive(Debug, Clone, Copy)]
struct SignalHandle(RwSignal<FormState>);

impl FormHandle for SignalHandle {
    fn with_state<R>(&self, f: impl FnOnce(&FormState) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

type Coordinator = SubmissionCoordinator<SignalHandle, SimulatedSubmitter>;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact-section">
            <div class="container">
                <div class="section-header">
                    <h2>"Jetzt Partner werden"</h2>
                    <p>"Füllen Sie das untenstehende Formular aus und wir melden uns bei Ihnen"</p>
                </div>
                <ContactForm />
            </div>
        </section>
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let copy = FormCopy::for_locale(config.locale);
    let state = RwSignal::new(FormState::new());
    let coordinator = SubmissionCoordinator::new(
        SignalHandle(state),
        SimulatedSubmitter::new(config.submit_delay),
    );

    // Only flips on Submitted <-> Idle, so typing does not rebuild the form
    let submitted = Memo::new(move |_| state.with(|s| s.status().is_submitted()));

    view! {
        {move || {
            let coordinator = coordinator.clone();
            if submitted.get() {
                view! { <SuccessPanel copy=copy coordinator=coordinator /> }.into_any()
            } else {
                view! { <FormBody state=state copy=copy coordinator=coordinator /> }.into_any()
            }
        }}
    }
}

#[component]
fn FormBody(
    state: RwSignal<FormState>,
    copy: &'static FormCopy,
    coordinator: Coordinator,
) -> impl IntoView {
    let submit_coordinator = coordinator.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // Validation and the switch to Submitting happen right here; only the
        // simulated call is deferred.
        if let Ok(pending) = submit_coordinator.request_submit() {
            spawn_local(async move {
                pending.complete().await;
            });
        }
    };

    let is_submitting = move || state.with(|s| s.status().is_submitting());
    let failed = move || state.with(|s| s.status().failure().is_some());

    let fields = Field::ALL
        .into_iter()
        .map(|field| {
            view! { <FormField field=field state=state copy=copy coordinator=coordinator.clone() /> }
        })
        .collect_view();

    view! {
        <div class="contact-form-container">
            <form class="contact-form" novalidate on:submit=on_submit>
                {fields}
                {move || {
                    failed()
                        .then(|| view! { <p class="form-failure" role="alert">{copy.failure}</p> })
                }}
                <button
                    type="submit"
                    class="btn-primary-large contact-form-submit"
                    disabled=is_submitting
                    aria-busy=move || is_submitting().to_string()
                >
                    {move || state.with(|s| copy.submit_label(s.status()))}
                </button>
            </form>
        </div>
    }
}

#[component]
fn FormField(
    field: Field,
    state: RwSignal<FormState>,
    copy: &'static FormCopy,
    coordinator: Coordinator,
) -> impl IntoView {
    let text = copy.field(field);
    let key = field.key();
    let error_id = format!("{key}-error");
    let described_by = error_id.clone();

    let has_error = move || state.with(|s| s.errors().contains(field));
    let value = move || state.with(|s| s.field(field).to_owned());
    let on_input = move |ev: Event| {
        coordinator.set_field(field, event_target_value(&ev));
    };
    let class = move |base: &'static str| {
        move || {
            if has_error() {
                format!("{base} form-input-error")
            } else {
                base.to_owned()
            }
        }
    };

    let control = match field {
        Field::Message => view! {
            <textarea
                id=key
                name=key
                class=class("form-textarea")
                placeholder=text.placeholder
                rows="5"
                required
                minlength="10"
                aria-invalid=move || has_error().to_string()
                aria-describedby=move || has_error().then(|| described_by.clone())
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        Field::Name | Field::Email => {
            let input_type = if field == Field::Email { "email" } else { "text" };
            let minlength = (field == Field::Name).then_some("2");
            view! {
                <input
                    type=input_type
                    id=key
                    name=key
                    class=class("form-input")
                    placeholder=text.placeholder
                    required
                    minlength=minlength
                    aria-invalid=move || has_error().to_string()
                    aria-describedby=move || has_error().then(|| described_by.clone())
                    prop:value=value
                    on:input=on_input
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form-group">
            <label for=key class="form-label">
                {text.label}
                <span class="form-required" aria-hidden="true">" *"</span>
            </label>
            {control}
            {move || {
                state
                    .with(|s| s.errors().get(field))
                    .map(|error| {
                        view! {
                            <span id=error_id.clone() class="form-error" role="alert">
                                {copy.error_message(field, error)}
                            </span>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn SuccessPanel(copy: &'static FormCopy, coordinator: Coordinator) -> impl IntoView {
    let send_another = move |_| {
        if let Err(err) = coordinator.reset_after_success() {
            tracing::warn!(error = %err, "send-another ignored");
        }
    };

    view! {
        <div class="contact-form-success" role="status">
            <div class="success-icon" aria-hidden="true">"✅"</div>
            <h3>{copy.success_heading}</h3>
            <p>{copy.success_body}</p>
            <button type="button" class="btn-primary" on:click=send_another>
                {copy.send_another}
            </button>
        </div>
    }
}
