use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollToOptions};

mod config;
mod content;
mod hooks;
mod storage;
mod animation {
    pub mod carousel;
    pub mod counter;
    pub mod motion;
    pub mod trigger;
    pub mod watcher;
}
mod contact {
    pub mod draft;
    pub mod firestore;
    pub mod guard;
    pub mod submission;
}
mod components {
    pub mod faq;
    pub mod footer;
    pub mod stat_card;
    pub mod team;
    pub mod whatsapp_button;
}
mod pages {
    pub mod about;
    pub mod clients;
    pub mod contact;
    pub mod home;
    pub mod services;
    pub mod work;
}

use components::{footer::Footer, whatsapp_button::WhatsAppButton};
use hooks::{use_page_navigation, use_scroll_y};
use pages::{
    about::About,
    clients::Clients,
    contact::Contact,
    home::Home,
    services::Services,
    work::Work,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/work")]
    Work,
    #[at("/clients")]
    Clients,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub const NAV_ITEMS: [(Route, &str); 6] = [
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Services, "Services"),
    (Route::Work, "Work"),
    (Route::Clients, "Clients"),
    (Route::Contact, "Contact"),
];

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Work => {
            info!("Rendering Work page");
            html! { <Work /> }
        },
        Route::Clients => {
            info!("Rendering Clients page");
            html! { <Clients /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Unknown route, falling back to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scroll_y() > 50.0;
    let navigate = use_page_navigation();
    let current = use_route::<Route>();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |route: Route| {
        let navigate = navigate.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            navigate.emit(route.clone());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <button class="nav-logo" onclick={go_to(Route::Home)}>
                    {"BoopOrg"}
                </button>
                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ITEMS.iter().map(|(route, label)| html! {
                        <button
                            class={classes!("nav-link", (current.as_ref() == Some(route)).then(|| "active"))}
                            onclick={go_to(route.clone())}
                        >
                            {*label}
                        </button>
                    }) }
                    <button class="btn-primary nav-cta" onclick={go_to(Route::Contact)}>
                        {"Start a Project"}
                    </button>
                </div>
            </div>
        </nav>
    }
}

/// Scrolls smoothly back to the top whenever the route changes.
#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let route = use_route::<Route>();

    use_effect_with_deps(
        |_| {
            if let Some(window) = window() {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
            || ()
        },
        route,
    );

    html! {}
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>
                {r#"
                * { box-sizing: border-box; }
                body {
                    margin: 0;
                    font-family: 'Inter', system-ui, sans-serif;
                    background: #020617;
                    color: #e2e8f0;
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    padding: 1.25rem 1.5rem;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    padding: 0.75rem 1.5rem;
                    background: rgba(2, 6, 23, 0.9);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.3);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.5rem;
                    font-weight: 800;
                    cursor: pointer;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    background: none;
                    border: none;
                    color: #cbd5e1;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .nav-link:hover, .nav-link.active {
                    color: #f59e0b;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: rgba(2, 6, 23, 0.97);
                    }
                    .nav-right.mobile-menu-open { display: flex; }
                }
                .btn-primary, .btn-outline, .btn-link {
                    padding: 0.9rem 2rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .btn-primary {
                    border: none;
                    color: #fff;
                    background: linear-gradient(90deg, #f59e0b, #ea580c);
                }
                .btn-primary:hover { transform: scale(1.05); }
                .btn-primary:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                    transform: none;
                }
                .btn-outline {
                    background: transparent;
                    color: #fff;
                    border: 2px solid rgba(255, 255, 255, 0.3);
                }
                .btn-outline:hover { border-color: #f59e0b; }
                .btn-link {
                    background: none;
                    border: none;
                    color: #f59e0b;
                    padding: 1rem 0;
                }
                .section-heading {
                    max-width: 56rem;
                    margin: 0 auto 4rem;
                    text-align: center;
                }
                .section-title {
                    font-size: clamp(2rem, 5vw, 3.5rem);
                    font-weight: 700;
                    margin: 0.5rem 0 1rem;
                }
                .section-subtitle {
                    font-size: 1.2rem;
                    color: #94a3b8;
                }
                .eyebrow {
                    color: #f59e0b;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.875rem;
                }
                .muted { color: #94a3b8; }
                .page-hero {
                    padding: 10rem 1.5rem 5rem;
                    text-align: center;
                    background: linear-gradient(135deg, #020617, #172554);
                }
                .page-section {
                    padding: 5rem 1.5rem;
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                    gap: 2rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .card {
                    border: 1px solid rgba(148, 163, 184, 0.2);
                    border-radius: 16px;
                    padding: 2rem;
                    background: rgba(15, 23, 42, 0.6);
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(2.5rem);
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }
                .reveal.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
                .fade-in {
                    animation: fade-in 0.8s ease both;
                }
                @keyframes fade-in {
                    from { opacity: 0; transform: translateY(1rem); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
            <ScrollToTop />
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
            <WhatsAppButton />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();
    #[cfg(debug_assertions)]
    let level = Level::Debug;
    #[cfg(not(debug_assertions))]
    let level = Level::Info;
    console_log::init_with_level(level).expect("error initializing log");
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
