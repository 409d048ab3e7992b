use yew::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::reveal::Reveal;
use crate::registry::SectionId;

#[function_component(Infrastructure)]
pub fn infrastructure() -> Html {
    html! {
        <>
            <section id="control-models" class="control-models">
                <h2>{"Supported controller models"}</h2>
                <p>
                    {"FarmSight speaks to the climate and production computers \
                      already in your houses. Gateways keep a local buffer, so \
                      a dropped uplink never loses a reading."}
                </p>
                <div class="feature-grid">
                    <Reveal class={classes!("feature-card")}>
                        <i data-lucide="cpu"></i>
                        <h3>{"Climate computers"}</h3>
                        <p>{"Full register access to current and previous \
                             generation controllers, read and write."}</p>
                    </Reveal>
                    <Reveal class={classes!("feature-card")}>
                        <i data-lucide="scale"></i>
                        <h3>{"Weighing systems"}</h3>
                        <p>{"Bird and silo scales stream into the same \
                             timeline as climate data."}</p>
                    </Reveal>
                </div>
            </section>

            <section id="global-infrastructure" class="global">
                <h2>{"Global reach"}</h2>
                <p>
                    {"Regional hosting on three continents keeps dashboards \
                      fast on-site and data inside your jurisdiction."}
                </p>
            </section>

            <section id="data-security" class="security">
                <h2>{"Data security"}</h2>
                <p>
                    {"Your production data belongs to you. Encrypted in \
                      transit and at rest, with per-user access control down \
                      to the single house, and a full audit trail of every \
                      partner share."}
                </p>
            </section>

            <section id="contact-infrastructure">
                <ContactForm section={SectionId::Infrastructure} />
            </section>
        </>
    }
}
