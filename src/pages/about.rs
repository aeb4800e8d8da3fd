use yew::prelude::*;

use crate::animation::motion::{reveal_class, stagger_style};
use crate::animation::watcher::TriggerOptions;
use crate::content::{PILLARS, PRINCIPLES};
use crate::hooks::{use_page_navigation, use_parallax, use_scroll_trigger};
use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    let navigate = use_page_navigation();
    let parallax = use_parallax(15.0);
    let story = use_scroll_trigger(TriggerOptions::with_threshold(0.2));
    let pillars = use_scroll_trigger(TriggerOptions::default());
    let principles = use_scroll_trigger(TriggerOptions::default());

    let start_project = {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Contact))
    };
    let see_services = Callback::from(move |_: MouseEvent| navigate.emit(Route::Services));

    html! {
        <div class="about-page">
            <section class="page-hero">
                <div style={format!("transform: translateY({}px);", parallax * 0.4)}>
                    <span class="eyebrow fade-in">{"About BoopOrg"}</span>
                    <h1 class="section-title fade-in">{"We Make Brands Extraordinary"}</h1>
                    <p class="section-subtitle fade-in">
                        {"A 360° creative and marketing agency built on strategy, craft, and measurable results."}
                    </p>
                </div>
            </section>

            <section ref={story.node_ref} class="page-section">
                <div class={classes!("section-heading", reveal_class(story.has_fired))}>
                    <h2 class="section-title">{"Born From Passion. Built for Impact."}</h2>
                    <p class="section-subtitle">
                        {"BoopOrg started with a simple belief: great brands are built, not stumbled upon. We bring strategists, designers, marketers and producers under one roof so every touchpoint tells the same story."}
                    </p>
                    <p class="muted">
                        {"From our studio in Noida we have worked with startups finding their voice and household names defending their lead, across FMCG, media, technology, logistics and lifestyle."}
                    </p>
                </div>
            </section>

            <section ref={pillars.node_ref} class="page-section">
                <div class={classes!("section-heading", reveal_class(pillars.has_fired))}>
                    <span class="eyebrow">{"What Drives Us"}</span>
                    <h2 class="section-title">{"Our Pillars"}</h2>
                </div>
                <div class="card-grid">
                    { for PILLARS.iter().enumerate().map(|(index, (title, description))| html! {
                        <div
                            class={classes!("card", reveal_class(pillars.has_fired))}
                            style={stagger_style(index, 150, pillars.has_fired)}
                        >
                            <h3>{*title}</h3>
                            <p class="muted">{*description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section ref={principles.node_ref} class="page-section">
                <div class={classes!("section-heading", reveal_class(principles.has_fired))}>
                    <span class="eyebrow">{"How We Think"}</span>
                    <h2 class="section-title">{"Principles We Work By"}</h2>
                </div>
                <div class="card-grid">
                    { for PRINCIPLES.iter().enumerate().map(|(index, principle)| html! {
                        <div
                            class={classes!("card", reveal_class(principles.has_fired))}
                            style={stagger_style(index, 100, principles.has_fired)}
                        >
                            <h3>{*principle}</h3>
                        </div>
                    }) }
                </div>
                <div class="section-heading">
                    <button class="btn-primary" onclick={start_project}>{"Start a Project"}</button>
                    {" "}
                    <button class="btn-outline" onclick={see_services}>{"Our Services"}</button>
                </div>
            </section>
        </div>
    }
}
