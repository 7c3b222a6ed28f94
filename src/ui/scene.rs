use std::cell::RefCell;
use std::rc::Rc;

use super::app::restart_game;
use super::board::build_board_grid;
use super::dialogs::show_victory_dialog;
use super::hud::{sync_gate_style, update_subtitle};
use super::state::AppState;
use crate::error::SetupError;

pub(super) fn rebuild_board(state: &Rc<RefCell<AppState>>) -> Result<(), SetupError> {
    build_board_grid(state)?;
    let st = state.borrow();
    sync_gate_style(&st);
    update_subtitle(&st);
    Ok(())
}

pub(super) fn show_victory(state: &Rc<RefCell<AppState>>) {
    let dialog = {
        let st = state.borrow();
        update_subtitle(&st);
        show_victory_dialog(
            st.window.as_ref(),
            st.game.pairs_total(),
            st.game.attempts(),
        )
    };

    let state_again = state.clone();
    dialog.connect_response(None, move |_, response| {
        if response == "again" {
            restart_game(&state_again);
        }
    });
}
