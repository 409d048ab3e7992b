use yew::prelude::*;

struct SolutionTab {
    id: &'static str,
    label: &'static str,
    title: &'static str,
    body: &'static str,
}

static TABS: [SolutionTab; 3] = [
    SolutionTab {
        id: "solutions-broiler",
        label: "Broiler",
        title: "Broiler production",
        body: "Track growth curves, feed conversion and climate in one view, \
               with house-by-house comparison across the whole flock cycle.",
    },
    SolutionTab {
        id: "solutions-layer",
        label: "Layer",
        title: "Layer management",
        body: "Egg production, water and feed intake trends with deviation \
               alerts the moment a house drifts off its reference curve.",
    },
    SolutionTab {
        id: "solutions-pig",
        label: "Pig",
        title: "Pig production",
        body: "From weaners to finishers: climate control, weighing data and \
               delivery planning collected from every barn controller.",
    },
];

/// Self-contained show/hide tabs for the solutions subsection. Purely local
/// state, no interaction with the main navigation.
#[function_component(SolutionsTabs)]
pub fn solutions_tabs() -> Html {
    let active = use_state(|| TABS[0].id);

    html! {
        <div class="solutions-tabs">
            <div class="tab-buttons">
                { for TABS.iter().map(|tab| {
                    let id = tab.id;
                    let onclick = {
                        let active = active.clone();
                        Callback::from(move |_: MouseEvent| active.set(id))
                    };
                    html! {
                        <button
                            class={classes!("tab-btn", (*active == id).then(|| "active"))}
                            data-tab={id}
                            {onclick}>
                            { tab.label }
                        </button>
                    }
                }) }
            </div>
            { for TABS.iter().map(|tab| html! {
                <div id={tab.id}
                    class={classes!("tab-content", (*active == tab.id).then(|| "active"))}>
                    <h3>{ tab.title }</h3>
                    <p>{ tab.body }</p>
                </div>
            }) }
        </div>
    }
}
