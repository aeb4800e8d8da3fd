use yew::prelude::*;

use crate::config;
use crate::hooks::use_page_navigation;
use crate::NAV_ITEMS;

#[function_component(Footer)]
pub fn footer() -> Html {
    let navigate = use_page_navigation();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    background: #020617;
                    color: #94a3b8;
                    padding: 4rem 1.5rem 2rem;
                }
                .footer-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                    gap: 2rem;
                }
                .footer-grid h4 {
                    color: #fff;
                    margin-bottom: 1rem;
                }
                .footer-link {
                    display: block;
                    background: none;
                    border: none;
                    padding: 0.25rem 0;
                    color: #94a3b8;
                    cursor: pointer;
                    text-align: left;
                }
                .footer-link:hover {
                    color: #f59e0b;
                }
                .footer-bottom {
                    text-align: center;
                    margin-top: 3rem;
                    font-size: 0.875rem;
                }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <h4>{"BoopOrg"}</h4>
                    <p>{"A 360° creative and marketing agency building brands that perform."}</p>
                </div>
                <div>
                    <h4>{"Explore"}</h4>
                    { for NAV_ITEMS.iter().map(|(route, label)| {
                        let navigate = navigate.clone();
                        let route = route.clone();
                        html! {
                            <button class="footer-link" onclick={Callback::from(move |_: MouseEvent| navigate.emit(route.clone()))}>
                                {*label}
                            </button>
                        }
                    }) }
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <p>{config::CONTACT_EMAIL}</p>
                    <p>{config::CONTACT_PHONE}</p>
                    <p>{config::OFFICE_ADDRESS}</p>
                </div>
            </div>
            <p class="footer-bottom">{"© BoopOrg. All rights reserved."}</p>
        </footer>
    }
}
