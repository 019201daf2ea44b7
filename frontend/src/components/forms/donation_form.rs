use shared::{Donation, DonationDraft, DonationInput, FormField, FormKind, FormValidation};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::title::Title;
use crate::hooks::use_alert;
use crate::services::{ApiClient, Logger};

const COMPONENT: &str = "DonationForm";

#[derive(Properties, PartialEq)]
pub struct DonationFormProps {
    pub kind: FormKind,
    pub api_client: ApiClient,
    /// Donation being edited; `None` for a new one
    #[prop_or_default]
    pub initial: Option<Donation>,
    /// Receives `(id, payload)` in edit mode instead of posting a new donation
    #[prop_or_default]
    pub on_submit: Option<Callback<(String, DonationInput)>>,
    #[prop_or(AttrValue::from("Update Donation"))]
    pub submit_label: AttrValue,
}

fn event_value(e: &InputEvent) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

#[function_component(DonationForm)]
pub fn donation_form(props: &DonationFormProps) -> Html {
    let alerts = use_alert();
    let kind = props.kind;
    let draft = {
        let initial = props.initial.clone();
        use_state(move || initial.as_ref().map(DonationDraft::from_donation).unwrap_or_default())
    };
    let validation = use_state(FormValidation::default);
    let submitting = use_state(|| false);
    let is_edit = props.on_submit.is_some();

    let on_field_input = |field: FormField| {
        let draft = draft.clone();
        let validation = validation.clone();
        Callback::from(move |e: InputEvent| {
            let Some(value) = event_value(&e) else {
                return;
            };
            let mut next = (*draft).clone();
            next.set(field, value);
            draft.set(next);

            if validation.error_for(field).is_some() {
                let mut cleared = (*validation).clone();
                cleared.clear(field);
                validation.set(cleared);
            }
        })
    };

    let on_anonymous_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.anonymous = input.checked();
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let validation = validation.clone();
        let submitting = submitting.clone();
        let api_client = props.api_client.clone();
        let on_submit = props.on_submit.clone();
        let id = props.initial.as_ref().map(|d| d.id.clone()).unwrap_or_default();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let input = match (*draft).clone().into_input(kind) {
                Ok(input) => input,
                Err(errors) => {
                    validation.set(errors);
                    alerts.error("Please fill in all required fields correctly");
                    return;
                }
            };
            validation.set(FormValidation::default());

            if let Some(on_submit) = on_submit.as_ref() {
                on_submit.emit((id.clone(), input));
                return;
            }

            let api_client = api_client.clone();
            let alerts = alerts.clone();
            let draft = draft.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                submitting.set(true);

                match api_client.submit_donation(&input).await {
                    Ok(message) => {
                        alerts.success(message.unwrap_or_else(|| "Donation submitted successfully".to_string()));
                        draft.set(DonationDraft::default());
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Form submission error: {}", e));
                        alerts.error("Error submitting form. Please try again.");
                    }
                }

                submitting.set(false);
            });
        })
    };

    let feedback = |field: FormField| match validation.error_for(field) {
        Some(error) => html! { <div class="invalid-feedback">{error.to_string()}</div> },
        None => html! {},
    };

    let control_class = |field: FormField| {
        classes!(
            "form-control",
            validation.error_for(field).is_some().then_some("is-invalid")
        )
    };

    let input_field = |field: FormField, input_type: &'static str, col: &'static str| {
        html! {
            <div class={col}>
                <div class="mb-3">
                    <label class="form-label">{field.label()}</label>
                    <input
                        type={input_type}
                        class={control_class(field)}
                        placeholder={field.label()}
                        value={draft.value(field).to_string()}
                        oninput={on_field_input(field)}
                        disabled={*submitting}
                    />
                    {feedback(field)}
                </div>
            </div>
        }
    };

    let title = if is_edit { "Edit Donation" } else { kind.title() };

    html! {
        <div class="container donation-form">
            <Title title={title} />
            <form onsubmit={on_submit}>
                <div class="row">
                    {input_field(FormField::FirstName, "text", "col-md-6")}
                    {input_field(FormField::LastName, "text", "col-md-6")}
                    {input_field(FormField::Amount, "number", "col-md-6")}
                    <div class="col-md-6">
                        <div class="mb-3 mt-4 form-check">
                            <input
                                type="checkbox"
                                id="anonymous"
                                class="form-check-input"
                                checked={draft.anonymous}
                                onchange={on_anonymous_change}
                                disabled={*submitting}
                            />
                            <label class="form-check-label" for="anonymous">{"Make donation anonymous"}</label>
                        </div>
                    </div>
                    <div class="col-md-12">
                        <div class="mb-3">
                            <label class="form-label">{FormField::DedicationMessage.label()}</label>
                            <textarea
                                rows="3"
                                class={control_class(FormField::DedicationMessage)}
                                placeholder={FormField::DedicationMessage.label()}
                                value={draft.dedication_message.clone()}
                                oninput={on_field_input(FormField::DedicationMessage)}
                                disabled={*submitting}
                            />
                            {feedback(FormField::DedicationMessage)}
                        </div>
                    </div>
                    {if kind.requires_contact() {
                        html! {
                            <>
                                {input_field(FormField::Phone, "tel", "col-md-6")}
                                {input_field(FormField::Email, "email", "col-md-6")}
                            </>
                        }
                    } else { html! {} }}
                    <div class="col-md-12">
                        <div class="submit_btn">
                            <button type="submit" class="btn btn-success mt-3" disabled={*submitting}>
                                {if *submitting {
                                    "Submitting..."
                                } else if is_edit {
                                    props.submit_label.as_str()
                                } else {
                                    "Submit Donation"
                                }}
                            </button>
                        </div>
                    </div>
                </div>
            </form>
        </div>
    }
}
