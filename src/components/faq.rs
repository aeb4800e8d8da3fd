use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FAQS;

/// Opening an item closes the previously open one; clicking the open item
/// closes it.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section class="faq-section">
            <style>
                {r#"
                .faq-section {
                    padding: 10rem 1.5rem;
                    background: linear-gradient(180deg, #020617, #0f172a);
                }
                .faq-list {
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .faq-item {
                    border: 1px solid rgba(245, 158, 11, 0.2);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    background: rgba(15, 23, 42, 0.6);
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    color: #cbd5e1;
                    transition: max-height 0.3s ease, padding 0.3s ease;
                }
                .faq-item.open .faq-answer {
                    max-height: 20rem;
                    padding: 0 1.5rem 1.25rem;
                }
                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }
                "#}
            </style>
            <h2 class="section-title">{"Frequently Asked Questions"}</h2>
            <div class="faq-list">
                { for FAQS.iter().enumerate().map(|(index, (question, answer))| {
                    let is_open = *open == Some(index);
                    let toggle = {
                        let open = open.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            open.set(toggle_open(*open, index));
                        })
                    };
                    html! {
                        <div class={classes!("faq-item", is_open.then(|| "open"))}>
                            <button class="faq-question" onclick={toggle}>
                                <span>{*question}</span>
                                <span class="toggle-icon">{"⌄"}</span>
                            </button>
                            <div class="faq-answer"><p>{*answer}</p></div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_answer_open_at_a_time() {
        assert_eq!(toggle_open(None, 2), Some(2));
        assert_eq!(toggle_open(Some(2), 4), Some(4));
        assert_eq!(toggle_open(Some(4), 4), None);
    }
}
