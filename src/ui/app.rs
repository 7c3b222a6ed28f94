use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Once;

use gtk4 as gtk;
use gtk4::prelude::*;
use libadwaita as adw;
use adw::prelude::*;
use gio::SimpleAction;

use super::board::{BOARD_CONTAINER_NAME, CONTENT_MARGIN, refresh_card};
use super::dialogs::{show_about_dialog, show_instructions_dialog};
use super::hud::{sync_gate_style, update_subtitle};
use super::scene::{rebuild_board, show_victory};
use super::state::AppState;
use crate::board::CardId;
use crate::config::GameConfig;
use crate::error::SetupError;
use crate::game::{ClickOutcome, Game, PendingRevert};

pub const APP_ID: &str = "io.github.pairs.Pairs";
const CONFIG_FILE_NAME: &str = "config.json";

fn user_config_path() -> PathBuf {
    glib::user_config_dir().join("pairs").join(CONFIG_FILE_NAME)
}

/// Settings from `PAIRS_CONFIG`, else the user config file, else defaults.
/// A broken file is reported and replaced by defaults.
pub fn load_config() -> GameConfig {
    let loaded = GameConfig::from_env().or_else(|| {
        let path = user_config_path();
        path.exists().then(|| GameConfig::load(&path))
    });
    match loaded {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            log::warn!("{err}; using default settings");
            GameConfig::default()
        }
        None => GameConfig::default(),
    }
}

pub fn handle_card_click(state: &Rc<RefCell<AppState>>, id: CardId) {
    let outcome = state.borrow_mut().game.click(id);

    match outcome {
        ClickOutcome::Ignored(reason) => {
            log::trace!("click on {id} ignored: {reason:?}");
        }
        ClickOutcome::Revealed(card) => {
            let st = state.borrow();
            refresh_card(&st, card);
        }
        ClickOutcome::Matched { pair, finished } => {
            {
                let mut st = state.borrow_mut();
                for card in pair {
                    st.detach_click_handler(card);
                    refresh_card(&st, card);
                }
                update_subtitle(&st);
            }
            if finished {
                show_victory(state);
            }
        }
        ClickOutcome::Mismatched(pending) => {
            {
                let st = state.borrow();
                for card in pending.ticket.pair() {
                    refresh_card(&st, card);
                }
                sync_gate_style(&st);
                update_subtitle(&st);
            }
            schedule_revert(state, pending);
        }
    }
}

fn schedule_revert(state: &Rc<RefCell<AppState>>, pending: PendingRevert) {
    let state_revert = state.clone();
    let handle = glib::timeout_add_local(pending.delay, move || {
        let mut st = state_revert.borrow_mut();
        st.revert_handle = None;
        if st.game.complete_revert(pending.ticket) {
            for card in pending.ticket.pair() {
                refresh_card(&st, card);
            }
            sync_gate_style(&st);
        }
        glib::ControlFlow::Break
    });

    let mut st = state.borrow_mut();
    st.cancel_pending_revert();
    st.revert_handle = Some(handle);
}

/// Deals a new board. A flip-back still waiting from the old board is
/// cancelled.
pub(super) fn restart_game(state: &Rc<RefCell<AppState>>) {
    {
        let mut st = state.borrow_mut();
        st.cancel_pending_revert();
        st.game.reset();
    }
    if let Err(err) = rebuild_board(state) {
        log::error!("failed to rebuild board: {err}");
    }
}

pub fn run(config: GameConfig) -> glib::ExitCode {
    glib::set_prgname(Some(APP_ID));
    let app = adw::Application::builder().application_id(APP_ID).build();

    app.connect_activate(move |app| {
        if let Err(err) = activate(app, config.clone()) {
            log::error!("cannot start game: {err}");
            app.quit();
        }
    });

    app.run()
}

fn activate(app: &adw::Application, config: GameConfig) -> Result<(), SetupError> {
    load_css();

    let state = Rc::new(RefCell::new(AppState::new(Game::new(config)?)));

    let instructions_action = SimpleAction::new("instructions", None);
    instructions_action.connect_activate({
        let app = app.clone();
        move |_, _| {
            show_instructions_dialog(&app);
        }
    });
    app.add_action(&instructions_action);

    let about_action = SimpleAction::new("about", None);
    about_action.connect_activate({
        let app = app.clone();
        move |_, _| {
            show_about_dialog(&app);
        }
    });
    app.add_action(&about_action);

    let new_game_action = SimpleAction::new("new-game", None);
    new_game_action.connect_activate({
        let state = state.clone();
        move |_, _| restart_game(&state)
    });
    app.add_action(&new_game_action);
    app.set_accels_for_action("app.new-game", &["<Primary>n"]);

    let quit_action = SimpleAction::new("quit", None);
    quit_action.connect_activate({
        let app = app.clone();
        move |_, _| app.quit()
    });
    app.add_action(&quit_action);
    app.set_accels_for_action("app.quit", &["<Primary>q"]);

    let title_box = gtk::Box::new(gtk::Orientation::Vertical, 0);
    title_box.set_valign(gtk::Align::Center);
    title_box.set_halign(gtk::Align::Center);

    let title_main = gtk::Label::builder()
        .label("Pairs")
        .halign(gtk::Align::Center)
        .css_classes(vec!["game-title-main"])
        .build();

    let title_subtitle = gtk::Label::builder()
        .label("")
        .halign(gtk::Align::Center)
        .css_classes(vec!["game-title-subtitle", "caption"])
        .build();

    title_box.append(&title_main);
    title_box.append(&title_subtitle);

    let header = adw::HeaderBar::builder().title_widget(&title_box).build();
    header.add_css_class("flat");

    let restart_button = gtk::Button::builder()
        .icon_name("view-refresh-symbolic")
        .action_name("app.new-game")
        .build();
    restart_button.set_tooltip_text(Some("New Game"));
    header.pack_start(&restart_button);

    let menu_model = gio::Menu::new();
    menu_model.append(Some("Instructions"), Some("app.instructions"));
    menu_model.append(Some("About Pairs"), Some("app.about"));
    menu_model.append(Some("Quit"), Some("app.quit"));
    let menu_button = gtk::MenuButton::builder()
        .icon_name("open-menu-symbolic")
        .menu_model(&menu_model)
        .build();
    header.pack_end(&menu_button);

    let board_container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    board_container.set_widget_name(BOARD_CONTAINER_NAME);
    board_container.add_css_class("pairs-board-container");
    board_container.set_margin_top(CONTENT_MARGIN);
    board_container.set_margin_bottom(CONTENT_MARGIN);
    board_container.set_margin_start(CONTENT_MARGIN);
    board_container.set_margin_end(CONTENT_MARGIN);
    board_container.set_halign(gtk::Align::Center);
    board_container.set_valign(gtk::Align::Center);
    board_container.set_hexpand(true);
    board_container.set_vexpand(true);

    state.borrow_mut().title_subtitle = Some(title_subtitle);

    let toolbar = adw::ToolbarView::new();
    toolbar.add_top_bar(&header);
    toolbar.set_content(Some(&board_container));

    let win = adw::ApplicationWindow::builder()
        .application(app)
        .title("Pairs")
        .icon_name(APP_ID)
        .default_width(640)
        .default_height(480)
        .content(&toolbar)
        .build();
    win.set_size_request(360, 360);

    win.connect_close_request({
        let state = state.clone();
        move |_| {
            state.borrow_mut().cancel_pending_revert();
            glib::Propagation::Proceed
        }
    });

    state.borrow_mut().window = Some(win.clone());
    rebuild_board(&state)?;
    win.present();
    Ok(())
}

fn load_css() {
    static RESOURCES_INIT: Once = Once::new();
    RESOURCES_INIT.call_once(|| {
        if let Err(err) = gio::resources_register_include!("pairs.gresource") {
            log::warn!("failed to register embedded resources: {err}");
        }
    });

    let Some(display) = gtk::gdk::Display::default() else {
        return;
    };

    let provider = gtk::CssProvider::new();
    provider.load_from_resource("/io/github/pairs/Pairs/style.css");
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
