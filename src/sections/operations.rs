use yew::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::pricing::PricingCards;
use crate::components::reveal::Reveal;
use crate::components::solutions::SolutionsTabs;
use crate::nav::anchor::AnchorLink;
use crate::registry::SectionId;

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

static FEATURES: [Feature; 4] = [
    Feature {
        icon: "activity",
        title: "Live production monitoring",
        body: "Climate, feed, water and weight data from every house, \
               refreshed around the clock.",
    },
    Feature {
        icon: "bar-chart-3",
        title: "Benchmarking",
        body: "Compare flocks, houses and sites against your own history \
               and anonymized industry references.",
    },
    Feature {
        icon: "bell",
        title: "Deviation alerts",
        body: "Get notified the moment a curve drifts outside its band, \
               before it costs you growth.",
    },
    Feature {
        icon: "clipboard-list",
        title: "Task planning",
        body: "Turn deviations into assignable tasks with due dates and \
               follow-up straight from the dashboard.",
    },
];

#[function_component(Operations)]
pub fn operations() -> Html {
    html! {
        <>
            <section id="hero" class="hero">
                <h1>{"Your whole farm operation, one screen"}</h1>
                <p class="hero-tagline">
                    {"FarmSight collects the data your barn controllers already \
                      produce and turns it into decisions you can act on today."}
                </p>
                <div class="hero-actions">
                    <AnchorLink class={classes!("cta-button")} anchor="contact">
                        {"Request a demo"}
                    </AnchorLink>
                    <AnchorLink class={classes!("cta-secondary")} anchor="pricing">
                        {"See pricing"}
                    </AnchorLink>
                </div>
            </section>

            <section id="features" class="features">
                <h2>{"Built for daily operations"}</h2>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <Reveal class={classes!("feature-card")}>
                            <i data-lucide={feature.icon}></i>
                            <h3>{ feature.title }</h3>
                            <p>{ feature.body }</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="solutions" class="solutions">
                <h2>{"Solutions by production type"}</h2>
                <SolutionsTabs />
            </section>

            <section id="pricing">
                <PricingCards />
            </section>

            <section id="contact">
                <ContactForm section={SectionId::Operations} />
            </section>
        </>
    }
}
