use gtk4::prelude::*;

use super::state::AppState;

pub(super) fn update_subtitle(st: &AppState) {
    let Some(subtitle) = &st.title_subtitle else {
        return;
    };
    let game = &st.game;
    let text = if game.is_won() {
        format!(
            "All {} pairs found | {} tries",
            game.pairs_total(),
            game.attempts()
        )
    } else {
        format!(
            "{}/{} pairs | {} tries",
            game.pairs_found(),
            game.pairs_total(),
            game.attempts()
        )
    };
    subtitle.set_text(&text);
}

/// Mirrors the input gate on the board so hover feedback stops while a
/// mismatched pair is showing.
pub(super) fn sync_gate_style(st: &AppState) {
    let Some(container) = &st.board_container else {
        return;
    };
    if st.game.is_gated() {
        container.add_css_class("no-hover");
    } else {
        container.remove_css_class("no-hover");
    }
}
