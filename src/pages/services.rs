use yew::prelude::*;

use crate::animation::motion::{reveal_class, stagger_style};
use crate::animation::watcher::TriggerOptions;
use crate::content::{PROCESS_STEPS, SERVICES};
use crate::hooks::{use_page_navigation, use_scroll_trigger};
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    let navigate = use_page_navigation();
    let grid = use_scroll_trigger(TriggerOptions::with_threshold(0.1));
    let process = use_scroll_trigger(TriggerOptions::default());

    let start_project = Callback::from(move |_: MouseEvent| navigate.emit(Route::Contact));

    html! {
        <div class="services-page">
            <section class="page-hero">
                <span class="eyebrow fade-in">{"Services"}</span>
                <h1 class="section-title fade-in">{"Everything Your Brand Needs to Grow"}</h1>
                <p class="section-subtitle fade-in">
                    {"Strategy, creative, digital and on-ground execution, delivered by one accountable team."}
                </p>
            </section>

            <section ref={grid.node_ref} class="page-section">
                <div class="card-grid">
                    { for SERVICES.iter().enumerate().map(|(index, (title, short, long))| html! {
                        <div
                            class={classes!("card", reveal_class(grid.has_fired))}
                            style={stagger_style(index, 100, grid.has_fired)}
                        >
                            <span class="eyebrow">{format!("{:02}", index + 1)}</span>
                            <h3>{*title}</h3>
                            <p>{*short}</p>
                            <p class="muted">{*long}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section ref={process.node_ref} class="page-section">
                <div class={classes!("section-heading", reveal_class(process.has_fired))}>
                    <span class="eyebrow">{"Our Process"}</span>
                    <h2 class="section-title">{"From Brief to Results"}</h2>
                </div>
                <div class="card-grid">
                    { for PROCESS_STEPS.iter().enumerate().map(|(index, (number, title, description))| html! {
                        <div
                            class={classes!("card", reveal_class(process.has_fired))}
                            style={stagger_style(index, 200, process.has_fired)}
                        >
                            <span class="eyebrow">{*number}</span>
                            <h3>{*title}</h3>
                            <p class="muted">{*description}</p>
                        </div>
                    }) }
                </div>
                <div class="section-heading">
                    <button class="btn-primary" onclick={start_project}>{"Discuss Your Project"}</button>
                </div>
            </section>
        </div>
    }
}
