use yew::prelude::*;

/// Which of the two pre-rendered price amounts is displayed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BillingPeriod {
    Monthly,
    Annual,
}

impl BillingPeriod {
    pub fn toggled(&self) -> BillingPeriod {
        match self {
            BillingPeriod::Monthly => BillingPeriod::Annual,
            BillingPeriod::Annual => BillingPeriod::Monthly,
        }
    }

    pub fn is_annual(&self) -> bool {
        *self == BillingPeriod::Annual
    }
}

struct Plan {
    name: &'static str,
    monthly: &'static str,
    annual: &'static str,
    features: &'static [&'static str],
    popular: bool,
}

static PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        monthly: "€49",
        annual: "€39",
        features: &[
            "Up to 3 production sites",
            "Core climate dashboards",
            "Email alerts",
        ],
        popular: false,
    },
    Plan {
        name: "Professional",
        monthly: "€149",
        annual: "€119",
        features: &[
            "Unlimited production sites",
            "Benchmarking across sites",
            "Partner connector access",
            "Priority support",
        ],
        popular: true,
    },
    Plan {
        name: "Enterprise",
        monthly: "€399",
        annual: "€319",
        features: &[
            "Everything in Professional",
            "ERP and BI integrations",
            "Dedicated onboarding",
            "Custom data retention",
        ],
        popular: false,
    },
];

/// Pricing cards with the monthly/annual switch. Both amounts are rendered
/// for every card; the toggle only flips which one is displayed.
#[function_component(PricingCards)]
pub fn pricing_cards() -> Html {
    let period = use_state(|| BillingPeriod::Monthly);

    let onchange = {
        let period = period.clone();
        Callback::from(move |_: Event| {
            period.set(period.toggled());
        })
    };

    let monthly_style = if period.is_annual() {
        "display: none;"
    } else {
        "display: inline;"
    };
    let annual_style = if period.is_annual() {
        "display: inline;"
    } else {
        "display: none;"
    };

    html! {
        <div class="pricing-container">
            <div class="pricing-header">
                <h2>{"Plans that grow with your farm"}</h2>
                <label class="pricing-switch" for="pricing-annual">
                    <span>{"Monthly"}</span>
                    <input type="checkbox"
                        id="pricing-annual"
                        checked={period.is_annual()}
                        {onchange} />
                    <span>{"Annual"}<small>{" (save 20%)"}</small></span>
                </label>
            </div>
            <div class="pricing-grid">
                { for PLANS.iter().map(|plan| html! {
                    <div class={classes!("pricing-card", plan.popular.then(|| "popular"))}>
                        {
                            if plan.popular {
                                html! { <div class="popular-tag">{"Most Popular"}</div> }
                            } else {
                                html! {}
                            }
                        }
                        <div class="card-header">
                            <h3>{ plan.name }</h3>
                            <div class="price">
                                <span class="amount monthly" style={monthly_style}>
                                    { plan.monthly }
                                </span>
                                <span class="amount annual" style={annual_style}>
                                    { plan.annual }
                                </span>
                                <span class="period">{"/month"}</span>
                            </div>
                        </div>
                        <ul>
                            { for plan.features.iter().map(|feature| html! {
                                <li>
                                    <i data-lucide="check"></i>
                                    { *feature }
                                </li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_restores_the_original_period() {
        for period in [BillingPeriod::Monthly, BillingPeriod::Annual] {
            assert_eq!(period.toggled().toggled(), period);
            assert_ne!(period.toggled(), period);
        }
    }

    #[test]
    fn defaults_show_monthly_amounts() {
        assert!(!BillingPeriod::Monthly.is_annual());
        assert!(BillingPeriod::Monthly.toggled().is_annual());
    }
}
