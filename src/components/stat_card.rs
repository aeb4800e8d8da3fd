use yew::prelude::*;

use crate::animation::motion::{reveal_class, stagger_style};
use crate::hooks::use_count_animation;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub value: u32,
    pub suffix: AttrValue,
    pub label: AttrValue,
    pub index: usize,
    pub duration_ms: u32,
    pub revealed: bool,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let shown = use_count_animation(props.value, props.duration_ms, props.revealed);

    html! {
        <div
            class={classes!("stat-card", reveal_class(props.revealed))}
            style={stagger_style(props.index, 150, props.revealed)}
        >
            <div class="stat-value">{shown}{&props.suffix}</div>
            <p class="stat-label">{&props.label}</p>
            <div class={classes!("stat-accent", props.revealed.then(|| "stat-accent-wide"))}></div>
        </div>
    }
}
