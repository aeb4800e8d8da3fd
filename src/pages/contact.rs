use gloo_timers::callback::{Interval, Timeout};
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::whatsapp_button::{maps_url, open_in_new_tab};
use crate::config;
use crate::contact::draft::DraftField;
use crate::contact::firestore::FirestoreClient;
use crate::contact::guard::SubmissionGuard;
use crate::contact::submission::{
    precheck, submit, FlowAction, Notice, SubmissionFlow, SubmissionPhase, SubmitError,
};
use crate::storage::LocalStorage;

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn submit_label(phase: SubmissionPhase) -> String {
    match phase {
        SubmissionPhase::Idle => "Send Message".to_string(),
        SubmissionPhase::Submitting => "Sending...".to_string(),
        SubmissionPhase::Cooldown { remaining_secs } => format!("Wait {}s", remaining_secs),
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let invalid_field = use_state(|| None::<DraftField>);
    let flow = use_reducer(|| {
        SubmissionFlow::resume(SubmissionGuard::new(LocalStorage).phase(now_ms()))
    });

    // Recompute from storage every second so the countdown keeps going
    // across reloads and other tabs.
    {
        let dispatcher = flow.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::COOLDOWN_TICK_MS, move || {
                    let remaining_secs = SubmissionGuard::new(LocalStorage).remaining_secs(now_ms());
                    dispatcher.dispatch(FlowAction::Tick { remaining_secs });
                });
                move || drop(interval)
            },
            (),
        );
    }

    let on_field = |field: DraftField| {
        let dispatcher = flow.dispatcher();
        let invalid_field = invalid_field.clone();
        Callback::from(move |e: InputEvent| {
            if *invalid_field == Some(field) {
                invalid_field.set(None);
            }
            let value = match field {
                DraftField::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            dispatcher.dispatch(FlowAction::Edit { field, value });
        })
    };

    let onsubmit = {
        let flow = flow.clone();
        let invalid_field = invalid_field.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if flow.is_submitting() {
                return;
            }

            let guard = SubmissionGuard::new(LocalStorage);
            if let Err(err) = precheck(&guard, &flow.draft, now_ms()) {
                info!("Contact submission rejected: {}", err);
                if let SubmitError::Invalid(invalid) = &err {
                    invalid_field.set(Some(invalid.field()));
                }
                flow.dispatch(FlowAction::Rejected(err.to_string()));
                return;
            }

            invalid_field.set(None);
            flow.dispatch(FlowAction::Started);
            let draft = flow.draft.clone();
            let dispatcher = flow.dispatcher();
            spawn_local(async move {
                let client = FirestoreClient::from_config();
                match submit(&guard, &client, &draft, now_ms).await {
                    Ok(_) => {
                        dispatcher.dispatch(FlowAction::Succeeded {
                            remaining_secs: guard.remaining_secs(now_ms()),
                        });
                        Timeout::new(config::SUCCESS_DISPLAY_MS, move || {
                            dispatcher.dispatch(FlowAction::Acknowledged);
                        })
                        .forget();
                    }
                    Err(err) => {
                        error!("Contact submission failed: {:?}", err);
                        dispatcher.dispatch(FlowAction::Failed(err.to_string()));
                    }
                }
            });
        })
    };

    let open_map = Callback::from(|_: MouseEvent| {
        open_in_new_tab(&maps_url(config::OFFICE_COORDINATES));
    });

    let field_class = |field: DraftField| (*invalid_field == Some(field)).then(|| "invalid");

    let notice = match &flow.notice {
        Some(Notice::Sent) => html! {
            <div class="form-notice success">
                {"Thank you! Your message has been sent. We'll get back to you within 24 hours."}
            </div>
        },
        Some(Notice::Error(message)) => html! {
            <div class="form-notice error">{message.clone()}</div>
        },
        None => html! {},
    };

    html! {
        <div class="contact-page">
            <style>
                {r#"
                .contact-layout {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                    gap: 3rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .contact-form label {
                    display: block;
                    margin-bottom: 0.4rem;
                    color: #cbd5e1;
                    font-size: 0.9rem;
                }
                .contact-form input, .contact-form textarea {
                    width: 100%;
                    padding: 0.9rem 1rem;
                    margin-bottom: 1.25rem;
                    border-radius: 10px;
                    border: 1px solid rgba(148, 163, 184, 0.3);
                    background: rgba(15, 23, 42, 0.7);
                    color: #fff;
                    font-size: 1rem;
                }
                .contact-form input:focus, .contact-form textarea:focus {
                    outline: none;
                    border-color: #f59e0b;
                }
                .contact-form .invalid {
                    border-color: #ef4444;
                }
                .contact-form textarea {
                    min-height: 9rem;
                    resize: vertical;
                }
                .form-notice {
                    padding: 1rem;
                    border-radius: 10px;
                    margin-bottom: 1.25rem;
                }
                .form-notice.success {
                    background: rgba(34, 197, 94, 0.15);
                    color: #86efac;
                }
                .form-notice.error {
                    background: rgba(239, 68, 68, 0.15);
                    color: #fca5a5;
                }
                .contact-details p {
                    margin: 0 0 1rem;
                }
                .map-pin {
                    width: 100%;
                    height: 14rem;
                    border: 1px dashed rgba(245, 158, 11, 0.5);
                    border-radius: 16px;
                    background: rgba(15, 23, 42, 0.6);
                    color: #f59e0b;
                    font-size: 2.5rem;
                    cursor: pointer;
                    margin-bottom: 1rem;
                }
                "#}
            </style>
            <section class="page-hero">
                <span class="eyebrow fade-in">{"Contact"}</span>
                <h1 class="section-title fade-in">{"Let's Start a Conversation"}</h1>
                <p class="section-subtitle fade-in">
                    {"Tell us about your brand and what you want to achieve."}
                </p>
            </section>

            <section class="page-section">
                <div class="contact-layout">
                    <form class="contact-form" {onsubmit}>
                        {notice}
                        <label for="name">{"Name *"}</label>
                        <input
                            id="name"
                            class={classes!(field_class(DraftField::Name))}
                            type="text"
                            value={flow.draft.name.clone()}
                            oninput={on_field(DraftField::Name)}
                        />
                        <label for="email">{"Email *"}</label>
                        <input
                            id="email"
                            class={classes!(field_class(DraftField::Email))}
                            type="email"
                            value={flow.draft.email.clone()}
                            oninput={on_field(DraftField::Email)}
                        />
                        <label for="phone">{"Phone"}</label>
                        <input
                            id="phone"
                            class={classes!(field_class(DraftField::PhoneNumber))}
                            type="tel"
                            value={flow.draft.phone_number.clone()}
                            oninput={on_field(DraftField::PhoneNumber)}
                        />
                        <label for="company">{"Company"}</label>
                        <input
                            id="company"
                            class={classes!(field_class(DraftField::Company))}
                            type="text"
                            value={flow.draft.company.clone()}
                            oninput={on_field(DraftField::Company)}
                        />
                        <label for="message">{"Message *"}</label>
                        <textarea
                            id="message"
                            class={classes!(field_class(DraftField::Message))}
                            value={flow.draft.message.clone()}
                            oninput={on_field(DraftField::Message)}
                        />
                        <button type="submit" class="btn-primary" disabled={flow.is_submitting()}>
                            {submit_label(flow.phase)}
                        </button>
                    </form>

                    <div class="contact-details">
                        <h3>{"Get in Touch"}</h3>
                        <p>{config::CONTACT_EMAIL}</p>
                        <p>{config::CONTACT_PHONE}</p>
                        <p class="muted">{config::OFFICE_ADDRESS}</p>
                        <button class="map-pin" aria-label="Show office on map" onclick={open_map.clone()}>
                            {"📍"}
                        </button>
                        <button class="btn-outline" onclick={open_map}>{"Open in Google Maps"}</button>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_label_follows_phase() {
        assert_eq!(submit_label(SubmissionPhase::Idle), "Send Message");
        assert_eq!(submit_label(SubmissionPhase::Submitting), "Sending...");
        assert_eq!(
            submit_label(SubmissionPhase::Cooldown { remaining_secs: 42 }),
            "Wait 42s"
        );
    }
}
