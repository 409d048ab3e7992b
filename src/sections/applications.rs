use yew::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::reveal::Reveal;
use crate::registry::SectionId;

#[function_component(Applications)]
pub fn applications() -> Html {
    html! {
        <>
            <section id="mobile-app" class="mobile-app">
                <h2>{"Mobile app"}</h2>
                <p>
                    {"The barn check that used to live on a clipboard. Current \
                      conditions, alarms and notes for every house, on the \
                      phone already in your pocket."}
                </p>
            </section>

            <section id="web-apps" class="web-apps">
                <h2>{"Web applications"}</h2>
                <div class="feature-grid">
                    <Reveal class={classes!("feature-card")}>
                        <i data-lucide="layout-dashboard"></i>
                        <h3>{"Boards"}</h3>
                        <p>{"Wall-mounted overview screens for the farm \
                             office, updating live."}</p>
                    </Reveal>
                    <Reveal class={classes!("feature-card")}>
                        <i data-lucide="database"></i>
                        <h3>{"Silo"}</h3>
                        <p>{"Feed inventory and consumption forecasting per \
                             silo, with reorder suggestions."}</p>
                    </Reveal>
                    <Reveal class={classes!("feature-card")}>
                        <i data-lucide="line-chart"></i>
                        <h3>{"Analytics"}</h3>
                        <p>{"Cross-site analysis for multi-farm operations \
                             and integrators."}</p>
                    </Reveal>
                </div>
            </section>

            <section id="alarm-center" class="alarm-center">
                <h2>{"Alarm center"}</h2>
                <p>
                    {"Every alarm from every controller in one escalation \
                      chain: push, SMS, then the on-call list, until someone \
                      acknowledges."}
                </p>
            </section>

            <section id="contact-applications">
                <ContactForm section={SectionId::Applications} />
            </section>
        </>
    }
}
