use yew::prelude::*;

use crate::animation::motion::{reveal_class, stagger_style};
use crate::animation::watcher::TriggerOptions;
use crate::content::{CLIENTS, CLIENT_REASONS};
use crate::hooks::{use_page_navigation, use_scroll_trigger};
use crate::Route;

#[function_component(Clients)]
pub fn clients() -> Html {
    let navigate = use_page_navigation();
    let logos = use_scroll_trigger(TriggerOptions::with_threshold(0.2));
    let reasons = use_scroll_trigger(TriggerOptions::with_threshold(0.2));

    let start_project = Callback::from(move |_: MouseEvent| navigate.emit(Route::Contact));

    html! {
        <div class="clients-page">
            <style>
                {r#"
                .client-wall {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(9rem, 1fr));
                    gap: 1rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .client-tile {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    height: 5rem;
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.05);
                    font-weight: 600;
                }
                "#}
            </style>
            <section class="page-hero">
                <span class="eyebrow fade-in">{"Clients"}</span>
                <h1 class="section-title fade-in">{"Brands That Trust Us"}</h1>
                <p class="section-subtitle fade-in">
                    {"From category leaders to challengers, we grow alongside the brands we serve."}
                </p>
            </section>

            <section ref={logos.node_ref} class="page-section">
                <div class="client-wall">
                    // Capped stagger so the last tiles do not wait seconds.
                    { for CLIENTS.iter().enumerate().map(|(index, client)| html! {
                        <div
                            class={classes!("client-tile", reveal_class(logos.has_fired))}
                            style={stagger_style(index % 12, 50, logos.has_fired)}
                        >
                            {*client}
                        </div>
                    }) }
                </div>
            </section>

            <section ref={reasons.node_ref} class="page-section">
                <div class={classes!("section-heading", reveal_class(reasons.has_fired))}>
                    <span class="eyebrow">{"Why Clients Stay"}</span>
                    <h2 class="section-title">{"Partnerships, Not Projects"}</h2>
                </div>
                <div class="card-grid">
                    { for CLIENT_REASONS.iter().enumerate().map(|(index, reason)| html! {
                        <div
                            class={classes!("card", reveal_class(reasons.has_fired))}
                            style={stagger_style(index, 150, reasons.has_fired)}
                        >
                            <h3>{*reason}</h3>
                        </div>
                    }) }
                </div>
                <div class="section-heading">
                    <button class="btn-primary" onclick={start_project}>{"Become Our Next Success Story"}</button>
                </div>
            </section>
        </div>
    }
}
