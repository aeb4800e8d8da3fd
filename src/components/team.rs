use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::animation::carousel::{items_per_view, Carousel, AUTO_ADVANCE_MS};
use crate::animation::motion::{reveal_class, stagger_style};
use crate::animation::watcher::TriggerOptions;
use crate::content::TEAM;
use crate::hooks::use_scroll_trigger;

#[function_component(Team)]
pub fn team() -> Html {
    let trigger = use_scroll_trigger(TriggerOptions::with_threshold(0.1));
    let (width, _) = use_window_size();
    let per_view = items_per_view(width);
    let carousel = use_state_eq(|| Carousel::new(TEAM.len(), per_view));

    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |per_view| {
                carousel.set(carousel.resize(*per_view));
                || ()
            },
            per_view,
        );
    }

    // Restart the timer whenever the position changes so a manual click
    // gets a full interval before the next auto-advance.
    {
        let deps = *carousel;
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |current| {
                let current = *current;
                let interval = Interval::new(AUTO_ADVANCE_MS, move || carousel.set(current.next()));
                move || drop(interval)
            },
            deps,
        );
    }

    let prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.prev()))
    };
    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.next()))
    };

    let card_width = format!("flex: 0 0 {}%;", 100.0 / carousel.per_view() as f64);

    html! {
        <section class="team-section">
            <style>
                {r#"
                .team-section {
                    padding: 5rem 1.5rem;
                    background: #000;
                }
                .team-viewport {
                    position: relative;
                    max-width: 80rem;
                    margin: 0 auto;
                    overflow: hidden;
                }
                .team-strip {
                    display: flex;
                    transition: transform 0.5s ease-out;
                }
                .team-card {
                    padding: 0 1rem;
                    box-sizing: border-box;
                }
                .team-card-inner {
                    border: 1px solid rgba(148, 163, 184, 0.2);
                    border-radius: 8px;
                    padding: 2rem 1.5rem;
                    text-align: center;
                    color: #fff;
                }
                .team-card-inner:hover {
                    border-color: #f59e0b;
                }
                .team-role {
                    color: #f59e0b;
                    font-weight: 600;
                }
                .team-nav {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    background: #f59e0b;
                    border: none;
                    border-radius: 50%;
                    width: 2.75rem;
                    height: 2.75rem;
                    cursor: pointer;
                    z-index: 2;
                }
                .team-nav.prev { left: 0; }
                .team-nav.next { right: 0; }
                .team-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 2rem;
                }
                .team-dot {
                    height: 0.5rem;
                    width: 0.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(148, 163, 184, 0.4);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .team-dot.active {
                    width: 2rem;
                    background: #f59e0b;
                }
                "#}
            </style>
            <div ref={trigger.node_ref.clone()} class={classes!("section-heading", reveal_class(trigger.has_fired))}>
                <h2 class="section-title">{"Meet Our Team"}</h2>
                <p class="section-subtitle">{"Talented professionals dedicated to bringing your vision to life"}</p>
            </div>
            <div class="team-viewport">
                <div class="team-strip" style={format!("transform: translateX(-{}%);", carousel.offset_percent())}>
                    { for TEAM.iter().enumerate().map(|(index, (name, role))| html! {
                        <div
                            class={classes!("team-card", reveal_class(trigger.has_fired))}
                            style={format!("{} {}", card_width, stagger_style(index, 100, trigger.has_fired))}
                        >
                            <div class="team-card-inner">
                                <h3>{*name}</h3>
                                <p class="team-role">{*role}</p>
                            </div>
                        </div>
                    }) }
                </div>
                <button class="team-nav prev" aria-label="Previous slide" onclick={prev}>{"‹"}</button>
                <button class="team-nav next" aria-label="Next slide" onclick={next}>{"›"}</button>
            </div>
            <div class="team-dots">
                { for (0..carousel.page_count()).map(|page| {
                    let go_to = {
                        let carousel = carousel.clone();
                        Callback::from(move |_: MouseEvent| carousel.set(carousel.go_to(page)))
                    };
                    html! {
                        <button
                            class={classes!("team-dot", (page == carousel.index()).then(|| "active"))}
                            aria-label={format!("Go to slide {}", page + 1)}
                            onclick={go_to}
                        />
                    }
                }) }
            </div>
        </section>
    }
}
