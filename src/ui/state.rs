use gtk4 as gtk;
use gtk4::prelude::*;
use libadwaita as adw;

use crate::board::CardId;
use crate::game::Game;

pub struct AppState {
    pub window: Option<adw::ApplicationWindow>,
    pub title_subtitle: Option<gtk::Label>,
    pub board_container: Option<gtk::Box>,

    // Game state
    pub game: Game,
    pub card_buttons: Vec<gtk::Button>,
    pub click_handlers: Vec<Option<glib::SignalHandlerId>>,
    pub revert_handle: Option<glib::SourceId>,
}

impl AppState {
    pub fn new(game: Game) -> Self {
        AppState {
            window: None,
            title_subtitle: None,
            board_container: None,
            game,
            card_buttons: Vec::new(),
            click_handlers: Vec::new(),
            revert_handle: None,
        }
    }

    /// Removes the scheduled flip-back, if one is still waiting to fire.
    pub fn cancel_pending_revert(&mut self) {
        if let Some(handle) = self.revert_handle.take() {
            handle.remove();
        }
    }

    /// Disconnects a card's click listener for good.
    pub fn detach_click_handler(&mut self, id: CardId) {
        let index = id.index();
        let Some(handler) = self.click_handlers.get_mut(index).and_then(Option::take) else {
            return;
        };
        if let Some(button) = self.card_buttons.get(index) {
            button.disconnect(handler);
        }
    }
}
