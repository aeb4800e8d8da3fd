use yew::prelude::*;

use crate::animation::motion::{reveal_class, stagger_style};
use crate::animation::watcher::TriggerOptions;
use crate::components::faq::Faq;
use crate::components::stat_card::StatCard;
use crate::components::team::Team;
use crate::content::{
    FEATURED_BRANDS, HOME_STATS, IMPACT_DURATION_MS, IMPACT_METRICS, PILLARS, PROCESS_STEPS,
    SERVICES, STATS_DURATION_MS,
};
use crate::hooks::{use_page_navigation, use_parallax, use_scroll_trigger};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NavigateProps {
    pub on_navigate: Callback<Route>,
}

fn go(on_navigate: &Callback<Route>, route: Route) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |_: MouseEvent| on_navigate.emit(route.clone()))
}

#[function_component(Home)]
pub fn home() -> Html {
    let on_navigate = use_page_navigation();

    html! {
        <div class="home-page">
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: linear-gradient(135deg, #020617, #172554, #0f172a);
                    text-align: center;
                    padding: 5rem 1.5rem 0;
                }
                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    background-image: url('/assets/hero.jpg');
                    background-size: cover;
                    background-position: center;
                    opacity: 0.1;
                    will-change: transform;
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 64rem;
                }
                .hero-badge {
                    display: inline-block;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(245, 158, 11, 0.3);
                    color: #fbbf24;
                    font-size: 0.875rem;
                    font-weight: 600;
                }
                .hero h1 {
                    font-size: clamp(3rem, 8vw, 6rem);
                    color: #fff;
                    line-height: 1.1;
                    margin: 2rem 0;
                }
                .hero-accent {
                    background: linear-gradient(90deg, #f59e0b, #e879f9, #bef264);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero p {
                    font-size: 1.4rem;
                    color: #cbd5e1;
                }
                .cta-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                    padding-top: 2rem;
                }
                .stats-grid, .impact-grid, .services-grid, .process-grid, .pillars-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr));
                    gap: 2rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .stat-card {
                    border: 1px solid rgba(51, 65, 85, 0.3);
                    border-radius: 16px;
                    padding: 2rem;
                    background: rgba(30, 41, 59, 0.5);
                }
                .stat-value {
                    font-size: 3rem;
                    font-weight: 700;
                    background: linear-gradient(90deg, #f59e0b, #e879f9);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .stat-label { color: #cbd5e1; }
                .stat-accent {
                    margin-top: 1rem;
                    height: 4px;
                    width: 0;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #f59e0b, transparent);
                    transition: width 0.3s ease;
                }
                .stat-accent-wide { width: 3rem; }
                .dark-band {
                    padding: 5rem 1.5rem;
                    background: linear-gradient(135deg, #0f172a, #1e293b);
                }
                .light-band {
                    padding: 6rem 1.5rem;
                    background: #fff;
                    color: #0f172a;
                }
                .impact {
                    position: relative;
                    padding: 10rem 1.5rem;
                    overflow: hidden;
                }
                .impact-backdrop {
                    position: absolute;
                    inset: 0;
                    background-image: url('/assets/events.jpg');
                    background-size: cover;
                    background-position: center;
                    transform-origin: center;
                    filter: brightness(0.5);
                }
                .impact > :not(.impact-backdrop) {
                    position: relative;
                }
                .service-tile, .process-step, .pillar {
                    border-radius: 12px;
                    padding: 2rem;
                    border: 2px solid transparent;
                    transition: border-color 0.3s ease, transform 0.3s ease;
                }
                .service-tile:hover, .pillar:hover {
                    border-color: #f59e0b;
                    transform: translateY(-4px);
                }
                .process-number {
                    font-size: 2.5rem;
                    font-weight: 800;
                    color: #f59e0b;
                }
                .brand-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                    margin: 2rem 0;
                }
                .brand-chip {
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    background: #f1f5f9;
                    font-weight: 600;
                }
                .final-cta {
                    padding: 8rem 1.5rem;
                    text-align: center;
                    background: radial-gradient(circle at center, #1e1b4b, #020617);
                }
                "#}
            </style>
            <Hero on_navigate={on_navigate.clone()} />
            <StatisticsSection />
            <ServicesSnapshot on_navigate={on_navigate.clone()} />
            <ProcessSection on_navigate={on_navigate.clone()} />
            <WorkPreview on_navigate={on_navigate.clone()} />
            <AboutPreview on_navigate={on_navigate.clone()} />
            <WhatDrivesUs />
            <Impact />
            <Team />
            <FinalCta on_navigate={on_navigate} />
            <Faq />
        </div>
    }
}

#[function_component(Hero)]
fn hero(props: &NavigateProps) -> Html {
    let parallax = use_parallax(25.0);

    html! {
        <section class="hero">
            <div class="hero-backdrop" style={format!("transform: translateY({}px);", parallax * 0.5)}></div>
            <div class="hero-content">
                <div class="hero-badge fade-in">{"Trusted by 350+ Businesses Worldwide"}</div>
                <h1 class="fade-in">
                    {"We Build Brands"}<br />
                    <span class="hero-accent">{"That Perform."}</span>
                </h1>
                <p class="fade-in">
                    {"Not just remembered. "}<strong>{"Chosen."}</strong>
                    {" By your customers, for the right reasons."}
                </p>
                <div class="cta-row">
                    <button class="btn-primary" onclick={go(&props.on_navigate, Route::Contact)}>
                        {"Start a Project →"}
                    </button>
                    <button class="btn-outline" onclick={go(&props.on_navigate, Route::Work)}>
                        {"View Our Work"}
                    </button>
                </div>
            </div>
        </section>
    }
}

#[function_component(StatisticsSection)]
fn statistics_section() -> Html {
    let trigger = use_scroll_trigger(TriggerOptions::default());
    let revealed = trigger.has_fired;

    html! {
        <section ref={trigger.node_ref} class="dark-band">
            <div class={classes!("section-heading", reveal_class(revealed))}>
                <h2 class="section-title">{"Our Impact By Numbers"}</h2>
                <p class="section-subtitle">
                    {"Building brands that drive real business growth and meaningful results"}
                </p>
            </div>
            <div class="stats-grid">
                { for HOME_STATS.iter().enumerate().map(|(index, stat)| html! {
                    <StatCard
                        value={stat.value}
                        suffix={stat.suffix}
                        label={stat.label}
                        {index}
                        duration_ms={STATS_DURATION_MS}
                        {revealed}
                    />
                }) }
            </div>
        </section>
    }
}

#[function_component(ServicesSnapshot)]
fn services_snapshot(props: &NavigateProps) -> Html {
    let trigger = use_scroll_trigger(TriggerOptions::with_threshold(0.1));
    let revealed = trigger.has_fired;

    html! {
        <section ref={trigger.node_ref} class="dark-band">
            <div class={classes!("section-heading", reveal_class(revealed))}>
                <span class="eyebrow">{"What We Do"}</span>
                <h2 class="section-title">{"Services Built for Growth"}</h2>
            </div>
            <div class="services-grid">
                { for SERVICES.iter().take(6).enumerate().map(|(index, (title, short, _))| html! {
                    <div
                        class={classes!("service-tile", reveal_class(revealed))}
                        style={stagger_style(index, 100, revealed)}
                    >
                        <h3>{*title}</h3>
                        <p class="muted">{*short}</p>
                    </div>
                }) }
            </div>
            <div class="cta-row">
                <button class="btn-outline" onclick={go(&props.on_navigate, Route::Services)}>
                    {"Explore All Services"}
                </button>
            </div>
        </section>
    }
}

#[function_component(ProcessSection)]
fn process_section(props: &NavigateProps) -> Html {
    let trigger = use_scroll_trigger(TriggerOptions::default());
    let revealed = trigger.has_fired;

    html! {
        <section ref={trigger.node_ref} class="dark-band">
            <div class={classes!("section-heading", reveal_class(revealed))}>
                <span class="eyebrow">{"Our Process"}</span>
                <h2 class="section-title">{"How We Work"}</h2>
                <p class="section-subtitle">{"A proven three-step approach from first conversation to lasting growth"}</p>
            </div>
            <div class="process-grid">
                { for PROCESS_STEPS.iter().enumerate().map(|(index, (number, title, description))| html! {
                    <div
                        class={classes!("process-step", reveal_class(revealed))}
                        style={stagger_style(index, 200, revealed)}
                    >
                        <div class="process-number">{*number}</div>
                        <h3>{*title}</h3>
                        <p class="muted">{*description}</p>
                    </div>
                }) }
            </div>
            <div class="cta-row">
                <button class="btn-primary" onclick={go(&props.on_navigate, Route::Contact)}>
                    {"Start Your Project"}
                </button>
            </div>
        </section>
    }
}

#[function_component(WorkPreview)]
fn work_preview(props: &NavigateProps) -> Html {
    let trigger = use_scroll_trigger(TriggerOptions::with_threshold(0.2));
    let revealed = trigger.has_fired;

    html! {
        <section class="light-band">
            <div ref={trigger.node_ref} class={classes!("section-heading", reveal_class(revealed))}>
                <span class="eyebrow">{"Work Preview"}</span>
                <h2 class="section-title">{"Our Impact in Action"}</h2>
                <p class="section-subtitle">
                    {"We've partnered with leading brands across FMCG, Media, Technology, Logistics, and Lifestyle, delivering campaigns that drive visibility and results."}
                </p>
            </div>
            <div class={classes!("brand-row", reveal_class(revealed))} style={stagger_style(1, 200, revealed)}>
                { for FEATURED_BRANDS.iter().map(|brand| html! { <span class="brand-chip">{*brand}</span> }) }
            </div>
            <div class="cta-row">
                <button class="btn-primary" onclick={go(&props.on_navigate, Route::Work)}>
                    {"See Our Work"}
                </button>
            </div>
        </section>
    }
}

#[function_component(AboutPreview)]
fn about_preview(props: &NavigateProps) -> Html {
    let trigger = use_scroll_trigger(TriggerOptions::with_threshold(0.2));
    let revealed = trigger.has_fired;

    html! {
        <section ref={trigger.node_ref} class="light-band">
            <div class={classes!("section-heading", reveal_class(revealed))}>
                <span class="eyebrow">{"About Preview"}</span>
                <h2 class="section-title">
                    {"Born From Passion."}<br />{"Built for Impact."}
                </h2>
                <p class="section-subtitle">
                    {"BoopOrg blends insight, creativity, and execution to help brands connect with audiences and win in competitive markets. From strategy to storytelling to execution, we build brands that matter."}
                </p>
                <button class="btn-link" onclick={go(&props.on_navigate, Route::About)}>
                    {"Know More →"}
                </button>
            </div>
        </section>
    }
}

#[function_component(WhatDrivesUs)]
fn what_drives_us() -> Html {
    let trigger = use_scroll_trigger(TriggerOptions::with_threshold(0.2));
    let revealed = trigger.has_fired;

    html! {
        <section ref={trigger.node_ref} class="light-band">
            <div class={classes!("section-heading", reveal_class(revealed))}>
                <span class="eyebrow">{"What Drives Us"}</span>
                <h2 class="section-title">{"Three Pillars of Every Project"}</h2>
            </div>
            <div class="pillars-grid">
                { for PILLARS.iter().enumerate().map(|(index, (title, description))| html! {
                    <div
                        class={classes!("pillar", reveal_class(revealed))}
                        style={stagger_style(index, 150, revealed)}
                    >
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Impact)]
fn impact() -> Html {
    let trigger = use_scroll_trigger(TriggerOptions::with_threshold(0.2));
    let parallax = use_parallax(20.0);
    let revealed = trigger.has_fired;

    html! {
        <section ref={trigger.node_ref} class="impact">
            <div class="impact-backdrop" style={format!("transform: translateY({}px) scale(1.1);", parallax * 0.3)}></div>
            <div class={classes!("section-heading", reveal_class(revealed))}>
                <span class="eyebrow">{"Impact"}</span>
                <h2 class="section-title">{"Measured. Proven. Scalable."}</h2>
                <p class="section-subtitle">
                    {"Our track record demonstrates the strategic value and consistent results we deliver"}
                </p>
            </div>
            <div class="impact-grid">
                { for IMPACT_METRICS.iter().enumerate().map(|(index, metric)| html! {
                    <StatCard
                        value={metric.value}
                        suffix={metric.suffix}
                        label={metric.label}
                        {index}
                        duration_ms={IMPACT_DURATION_MS}
                        {revealed}
                    />
                }) }
            </div>
        </section>
    }
}

#[function_component(FinalCta)]
fn final_cta(props: &NavigateProps) -> Html {
    let trigger = use_scroll_trigger(TriggerOptions::default());
    let revealed = trigger.has_fired;

    html! {
        <section ref={trigger.node_ref} class="final-cta">
            <h2 class={classes!("section-title", reveal_class(revealed))} style={stagger_style(1, 100, revealed)}>
                {"Let's Build Something"}<br />{"That Lasts"}
            </h2>
            <p class={classes!("section-subtitle", reveal_class(revealed))} style={stagger_style(2, 100, revealed)}>
                {"Have a challenge worth solving?"}
            </p>
            <p class={classes!("muted", reveal_class(revealed))} style={stagger_style(3, 100, revealed)}>
                {"Let's create something meaningful and measurable. From strategy to execution, we're here to drive real results."}
            </p>
            <div class={classes!("cta-row", reveal_class(revealed))} style={stagger_style(4, 100, revealed)}>
                <button class="btn-primary" onclick={go(&props.on_navigate, Route::Contact)}>
                    {"Start a Project"}
                </button>
                <button class="btn-outline" onclick={go(&props.on_navigate, Route::Work)}>
                    {"View Our Work"}
                </button>
            </div>
        </section>
    }
}
