/// Damped background offset for a parallax layer.
pub fn parallax_offset(scroll_y: f64, offset: f64) -> f64 {
    scroll_y * (offset / 100.0)
}

/// Transition delay for the `index`-th item of a revealed group. Items wait
/// for nothing until their section has fired.
pub fn stagger_delay_ms(index: usize, delay_ms: u32, revealed: bool) -> u32 {
    if revealed {
        (index as u32).saturating_mul(delay_ms)
    } else {
        0
    }
}

pub fn stagger_style(index: usize, delay_ms: u32, revealed: bool) -> String {
    format!("transition-delay: {}ms;", stagger_delay_ms(index, delay_ms, revealed))
}

pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "reveal revealed"
    } else {
        "reveal"
    }
}
