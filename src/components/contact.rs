use chrono::{DateTime, Utc};
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::{Notification, NoticeLevel};
use crate::config;
use crate::registry::SectionId;

#[derive(Clone, Default, PartialEq, Debug)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub message: String,
}

/// The payload a real backend would receive. Field names here are the wire
/// contract: a future POST replaces the body of [`submit`] without touching
/// any caller.
#[derive(Serialize, Debug)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub message: String,
    pub section: &'static str,
    pub timestamp: String,
}

impl ContactSubmission {
    pub fn new(fields: &ContactFields, section: SectionId, at: DateTime<Utc>) -> Self {
        ContactSubmission {
            name: fields.name.clone(),
            email: fields.email.clone(),
            company: fields.company.clone(),
            phone: fields.phone.clone(),
            message: fields.message.clone(),
            section: section.as_str(),
            timestamp: at.to_rfc3339(),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubmitError {
    #[error("submission failed: {0}")]
    Failed(String),
}

/// Stubbed submission: logs the payload and resolves successfully after a
/// fixed delay. The signature is the seam for a real network call.
pub async fn submit(payload: ContactSubmission) -> Result<&'static str, SubmitError> {
    match serde_json::to_string(&payload) {
        Ok(json) => info!("contact submission queued: {}", json),
        Err(e) => warn!("could not serialize contact submission: {}", e),
    }
    TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
    Ok("Thank you! We'll get back to you within 24 hours.")
}

#[derive(Clone, Copy)]
pub enum Field {
    Name,
    Email,
    Company,
    Phone,
    Message,
}

pub enum ContactMsg {
    Edit(Field, String),
    Submit,
    Finished(Result<&'static str, SubmitError>),
    DismissNotice,
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub section: SectionId,
}

/// Demo-request form. One in-flight submission at a time: the sending flag
/// disables the button and makes a second Submit a no-op.
pub struct ContactForm {
    fields: ContactFields,
    sending: bool,
    notice: Option<(NoticeLevel, String)>,
}

impl Component for ContactForm {
    type Message = ContactMsg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ContactForm {
            fields: ContactFields::default(),
            sending: false,
            notice: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Edit(field, value) => {
                match field {
                    Field::Name => self.fields.name = value,
                    Field::Email => self.fields.email = value,
                    Field::Company => self.fields.company = value,
                    Field::Phone => self.fields.phone = value,
                    Field::Message => self.fields.message = value,
                }
                false
            }
            ContactMsg::Submit => {
                if self.sending {
                    return false;
                }
                if self.fields.name.trim().is_empty() || self.fields.email.trim().is_empty() {
                    self.notice = Some((
                        NoticeLevel::Info,
                        "Please fill in your name and email.".to_string(),
                    ));
                    return true;
                }
                let payload =
                    ContactSubmission::new(&self.fields, ctx.props().section, Utc::now());
                self.sending = true;
                ctx.link()
                    .send_future(async move { ContactMsg::Finished(submit(payload).await) });
                true
            }
            ContactMsg::Finished(result) => {
                self.sending = false;
                match result {
                    Ok(message) => {
                        self.fields = ContactFields::default();
                        self.notice = Some((NoticeLevel::Success, message.to_string()));
                    }
                    Err(e) => {
                        self.notice = Some((NoticeLevel::Info, e.to_string()));
                    }
                }
                true
            }
            ContactMsg::DismissNotice => {
                self.notice = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });

        let edit = |field: Field| {
            ctx.link().callback(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                ContactMsg::Edit(field, input.value())
            })
        };
        let edit_message = ctx.link().callback(|e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::Edit(Field::Message, input.value())
        });

        html! {
            <form class="contact-form" {onsubmit}>
                <h3>{"Request a demo"}</h3>
                <input type="text" name="name" placeholder="Name"
                    value={self.fields.name.clone()} onchange={edit(Field::Name)} />
                <input type="email" name="email" placeholder="Work email"
                    value={self.fields.email.clone()} onchange={edit(Field::Email)} />
                <input type="text" name="company" placeholder="Company"
                    value={self.fields.company.clone()} onchange={edit(Field::Company)} />
                <input type="tel" name="phone" placeholder="Phone (optional)"
                    value={self.fields.phone.clone()} onchange={edit(Field::Phone)} />
                <textarea name="message" placeholder="What would you like to see?"
                    value={self.fields.message.clone()} onchange={edit_message} />
                <button type="submit" class="submit-btn" disabled={self.sending}>
                    { if self.sending { "Sending..." } else { "Request Demo" } }
                </button>
                {
                    if let Some((level, message)) = &self.notice {
                        html! {
                            <Notification
                                message={message.clone()}
                                level={*level}
                                on_close={ctx.link().callback(|_| ContactMsg::DismissNotice)} />
                        }
                    } else {
                        html! {}
                    }
                }
            </form>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fields() -> ContactFields {
        ContactFields {
            name: "Maren Holt".to_string(),
            email: "maren@example.com".to_string(),
            company: "Holt Agro".to_string(),
            phone: "+45 1234 5678".to_string(),
            message: "Interested in the layer dashboards.".to_string(),
        }
    }

    #[test]
    fn payload_carries_section_tag_and_iso_timestamp() {
        let at = Utc.with_ymd_and_hms(2026, 8, 23, 9, 30, 0).unwrap();
        let payload = ContactSubmission::new(&fields(), SectionId::Integration, at);
        let json: serde_json::Value =
            serde_json::to_value(&payload).expect("payload serializes");

        assert_eq!(json["name"], "Maren Holt");
        assert_eq!(json["section"], "integration");
        assert_eq!(json["timestamp"], "2026-08-23T09:30:00+00:00");
    }

    #[test]
    fn payload_preserves_every_field() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let payload = ContactSubmission::new(&fields(), SectionId::Operations, at);
        assert_eq!(payload.email, "maren@example.com");
        assert_eq!(payload.company, "Holt Agro");
        assert_eq!(payload.phone, "+45 1234 5678");
        assert_eq!(payload.message, "Interested in the layer dashboards.");
    }
}
