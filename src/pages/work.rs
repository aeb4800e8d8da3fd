use yew::prelude::*;

use crate::animation::motion::{reveal_class, stagger_style};
use crate::animation::watcher::TriggerOptions;
use crate::content::CASE_STUDIES;
use crate::hooks::{use_page_navigation, use_scroll_trigger};
use crate::Route;

#[function_component(Work)]
pub fn work() -> Html {
    let navigate = use_page_navigation();
    let trigger = use_scroll_trigger(TriggerOptions::with_threshold(0.1));

    let start_project = Callback::from(move |_: MouseEvent| navigate.emit(Route::Contact));

    html! {
        <div class="work-page">
            <section class="page-hero">
                <span class="eyebrow fade-in">{"Our Work"}</span>
                <h1 class="section-title fade-in">{"Campaigns That Moved the Needle"}</h1>
                <p class="section-subtitle fade-in">
                    {"A selection of brands we have helped grow across industries."}
                </p>
            </section>

            <section ref={trigger.node_ref} class="page-section">
                <div class="card-grid">
                    { for CASE_STUDIES.iter().enumerate().map(|(index, (client, industry, summary))| html! {
                        <article
                            class={classes!("card", reveal_class(trigger.has_fired))}
                            style={stagger_style(index, 120, trigger.has_fired)}
                        >
                            <span class="eyebrow">{*industry}</span>
                            <h3>{*client}</h3>
                            <p class="muted">{*summary}</p>
                        </article>
                    }) }
                </div>
                <div class="section-heading">
                    <button class="btn-primary" onclick={start_project}>{"Let's Work Together"}</button>
                </div>
            </section>
        </div>
    }
}
