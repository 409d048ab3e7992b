use yew::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::reveal::Reveal;
use crate::registry::SectionId;

#[function_component(Integration)]
pub fn integration() -> Html {
    html! {
        <>
            <section id="partner-connectors" class="connectors">
                <h2>{"Partner connectors"}</h2>
                <p>
                    {"Breeders, feed mills, slaughterhouses and vets all work \
                      from the same numbers. Data sharing is opt-in per \
                      partner and revocable at any time."}
                </p>
                <div class="feature-grid">
                    <Reveal class={classes!("feature-card")}>
                        <i data-lucide="share-2"></i>
                        <h3>{"Breeder programs"}</h3>
                        <p>{"Reference curves delivered straight into your \
                             dashboards and kept current by the breeder."}</p>
                    </Reveal>
                    <Reveal class={classes!("feature-card")}>
                        <i data-lucide="truck"></i>
                        <h3>{"Supply chain"}</h3>
                        <p>{"Slaughter planning and feed ordering driven by \
                             live weight predictions instead of phone calls."}</p>
                    </Reveal>
                </div>
            </section>

            <section id="bi-solutions" class="bi">
                <h2>{"BI solutions"}</h2>
                <p>
                    {"A documented data export feeds Power BI, Tableau or any \
                      warehouse you already run. No scraping and no CSV \
                      juggling, just scheduled, typed extracts."}
                </p>
            </section>

            <section id="erp-integration" class="erp">
                <h2>{"ERP integration"}</h2>
                <p>
                    {"Production results post directly into your ERP so \
                      finance sees batch outcomes without re-keying. Field \
                      mappings are maintained per integration, not per farm."}
                </p>
            </section>

            <section id="contact-integration">
                <ContactForm section={SectionId::Integration} />
            </section>
        </>
    }
}
