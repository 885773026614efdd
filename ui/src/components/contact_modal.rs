use dioxus::prelude::*;

use crate::components::icons::{
    AlertCircleIcon, CheckCircleIcon, CloseIcon, MailIcon, PhoneIcon, PinIcon, SendIcon,
};
use crate::contact::{ContactController, Field, SubmissionStatus, ValidationError};
use crate::core::config::{CLEAR_DELAY_MS, CONTACT_EMAIL, CONTACT_PHONE};
use crate::core::timing;
use crate::i18n::Locale;
use crate::state::{use_locale, use_mailer};
use crate::t;

/// Open/closed flag of the contact overlay plus the form it shows.
///
/// Created by the page; every call-to-action calls [`show`](Self::show).
#[derive(Clone, Copy, PartialEq)]
pub struct ContactOverlay {
    open: Signal<bool>,
    controller: Signal<ContactController>,
}

pub fn use_contact_overlay() -> ContactOverlay {
    ContactOverlay {
        open: use_signal(|| false),
        controller: use_signal(ContactController::default),
    }
}

impl ContactOverlay {
    pub fn is_open(&self) -> bool {
        (self.open)()
    }

    pub fn show(mut self) {
        self.controller.with_mut(|c| c.reopen());
        self.open.set(true);
    }

    /// Close now, clear the form once the exit transition is over.
    pub fn hide(mut self) {
        if !*self.open.peek() {
            return;
        }
        let ticket = self.controller.with_mut(|c| c.close());
        self.open.set(false);

        let mut controller = self.controller;
        spawn(async move {
            timing::sleep_ms(CLEAR_DELAY_MS).await;
            controller.with_mut(|c| {
                c.complete_close(ticket);
            });
        });
    }
}

#[component]
pub fn ContactModal(overlay: ContactOverlay) -> Element {
    let locale = use_locale()();
    let mailer = use_mailer();
    let mut controller = overlay.controller;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let attempt = match controller.with_mut(|c| c.begin_submit()) {
            Ok(attempt) => attempt,
            Err(rejected) => {
                tracing::debug!(%rejected, "contact submission not started");
                return;
            }
        };
        let delivery = mailer.send(attempt.payload);
        spawn(async move {
            let outcome = delivery.await;
            controller.with_mut(|c| {
                c.finish(attempt.id, outcome);
            });
        });
    };

    let open = overlay.is_open();
    let state = controller();
    let status = state.status();

    rsx! {
        div {
            class: if open { "contact-modal contact-modal--open" } else { "contact-modal" },
            aria_hidden: if open { "false" } else { "true" },
            div { class: "contact-modal__backdrop", onclick: move |_| overlay.hide() }

            div {
                class: "contact-modal__dialog",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "contact-modal-title",
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Escape {
                        overlay.hide();
                    }
                },

                header { class: "contact-modal__header",
                    button {
                        r#type: "button",
                        class: "contact-modal__close",
                        aria_label: t!(locale, "contact-close"),
                        onclick: move |_| overlay.hide(),
                        CloseIcon {}
                    }
                    h2 { id: "contact-modal-title", {t!(locale, "contact-title")} }
                    p { {t!(locale, "contact-subtitle")} }
                    ul { class: "contact-modal__info",
                        li { MailIcon {} "{CONTACT_EMAIL}" }
                        li { PhoneIcon {} span { dir: "ltr", "{CONTACT_PHONE}" } }
                        li { PinIcon {} {t!(locale, "contact-address")} }
                    }
                }

                div { class: "contact-modal__body",
                    {match status {
                        SubmissionStatus::Success => rsx! {
                            div { class: "contact-result contact-result--success",
                                CheckCircleIcon {}
                                h3 { {t!(locale, "contact-success-title")} }
                                p { {t!(locale, "contact-success-desc")} }
                                button {
                                    r#type: "button",
                                    class: "button button--primary",
                                    onclick: move |_| overlay.hide(),
                                    {t!(locale, "contact-close")}
                                }
                            }
                        },
                        SubmissionStatus::Error => rsx! {
                            div { class: "contact-result contact-result--error", role: "alert",
                                AlertCircleIcon {}
                                h3 { {t!(locale, "contact-error-title")} }
                                p { {t!(locale, "contact-error-desc")} }
                                div { class: "contact-result__actions",
                                    button {
                                        r#type: "button",
                                        class: "button button--primary",
                                        onclick: move |_| {
                                            controller.with_mut(|c| c.retry());
                                        },
                                        {t!(locale, "contact-try-again")}
                                    }
                                    button {
                                        r#type: "button",
                                        class: "button button--ghost",
                                        onclick: move |_| overlay.hide(),
                                        {t!(locale, "contact-close")}
                                    }
                                }
                            }
                        },
                        SubmissionStatus::Idle | SubmissionStatus::Sending => rsx! {
                            form { class: "contact-form", onsubmit: on_submit,
                                div { class: "contact-form__row",
                                    FormField {
                                        field: Field::Name,
                                        label: t!(locale, "contact-name"),
                                        placeholder: t!(locale, "contact-name-placeholder"),
                                        value: state.form().name.clone(),
                                        error: field_error(locale, state.invalid(), Field::Name),
                                        controller,
                                    }
                                    FormField {
                                        field: Field::Email,
                                        label: t!(locale, "contact-email"),
                                        placeholder: t!(locale, "contact-email-placeholder"),
                                        value: state.form().email.clone(),
                                        error: field_error(locale, state.invalid(), Field::Email),
                                        controller,
                                    }
                                }
                                FormField {
                                    field: Field::Company,
                                    label: t!(locale, "contact-company"),
                                    placeholder: t!(locale, "contact-company-placeholder"),
                                    value: state.form().company.clone(),
                                    error: None,
                                    controller,
                                }
                                FormField {
                                    field: Field::Message,
                                    label: t!(locale, "contact-message"),
                                    placeholder: t!(locale, "contact-message-placeholder"),
                                    value: state.form().message.clone(),
                                    error: field_error(locale, state.invalid(), Field::Message),
                                    controller,
                                }
                                button {
                                    r#type: "submit",
                                    class: "button button--primary contact-form__submit",
                                    disabled: !state.submit_enabled(),
                                    if status == SubmissionStatus::Sending {
                                        span { class: "spinner", aria_hidden: "true" }
                                        {t!(locale, "contact-sending")}
                                    } else {
                                        SendIcon {}
                                        {t!(locale, "contact-send")}
                                    }
                                }
                            }
                        },
                    }}
                }
            }
        }
    }
}

fn field_error(locale: Locale, invalid: Option<ValidationError>, field: Field) -> Option<String> {
    match invalid {
        Some(err) if err.field() == field => Some(match err {
            ValidationError::Missing(_) => t!(locale, "contact-field-required"),
            ValidationError::MalformedEmail => t!(locale, "contact-field-email"),
        }),
        _ => None,
    }
}

#[component]
fn FormField(
    field: Field,
    label: String,
    placeholder: String,
    value: String,
    #[props(!optional)] error: Option<String>,
    controller: Signal<ContactController>,
) -> Element {
    let id = field.input_id();
    let invalid = error.is_some();
    let oninput = move |evt: FormEvent| {
        controller.with_mut(|c| c.edit(field, evt.value()));
    };

    rsx! {
        div { class: if invalid { "contact-form__field contact-form__field--invalid" } else { "contact-form__field" },
            label { r#for: id, "{label}" }
            if field == Field::Message {
                textarea {
                    id: id,
                    rows: "4",
                    required: true,
                    placeholder: "{placeholder}",
                    value: "{value}",
                    aria_invalid: invalid,
                    oninput,
                }
            } else {
                input {
                    id: id,
                    r#type: if field == Field::Email { "email" } else { "text" },
                    required: field.is_required(),
                    autocomplete: match field {
                        Field::Name => "name",
                        Field::Email => "email",
                        _ => "organization",
                    },
                    placeholder: "{placeholder}",
                    value: "{value}",
                    aria_invalid: invalid,
                    oninput,
                }
            }
            if let Some(message) = error {
                p { class: "contact-form__error", role: "alert", "{message}" }
            }
        }
    }
}
