use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::pango;
use gtk4::prelude::*;

use super::app::handle_card_click;
use super::state::AppState;
use crate::board::{Card, CardId};
use crate::error::SetupError;
use crate::symbol::Symbol;

pub const BOARD_CONTAINER_NAME: &str = "game";
pub const CONTENT_MARGIN: i32 = 12;
pub const CARD_GAP: i32 = 8;
pub const CARD_SIZE: i32 = 96;

/// Finds the widget named [`BOARD_CONTAINER_NAME`] under `root`.
pub(super) fn find_board_container(root: &impl IsA<gtk::Widget>) -> Result<gtk::Box, SetupError> {
    fn walk(widget: &gtk::Widget) -> Option<gtk::Widget> {
        let mut child = widget.first_child();
        while let Some(current) = child {
            if current.widget_name() == BOARD_CONTAINER_NAME {
                return Some(current);
            }
            if let Some(found) = walk(&current) {
                return Some(found);
            }
            child = current.next_sibling();
        }
        None
    }

    walk(root.upcast_ref())
        .and_then(|widget| widget.downcast::<gtk::Box>().ok())
        .ok_or(SetupError::MissingContainer(BOARD_CONTAINER_NAME))
}

/// Creates one button per card, in deal order, and mounts the grid in the
/// board container. Matched cards come up without a click listener.
pub fn build_board_grid(state: &Rc<RefCell<AppState>>) -> Result<gtk::Grid, SetupError> {
    let (window, columns, cards) = {
        let st = state.borrow();
        (
            st.window.clone(),
            i32::try_from(st.game.config().columns.max(1)).unwrap_or(i32::MAX),
            st.game.board().cards().to_vec(),
        )
    };
    let container = match window {
        Some(window) => find_board_container(&window)?,
        None => return Err(SetupError::MissingContainer(BOARD_CONTAINER_NAME)),
    };
    state.borrow_mut().board_container = Some(container.clone());

    while let Some(child) = container.first_child() {
        container.remove(&child);
    }

    let grid = gtk::Grid::new();
    grid.add_css_class("pairs-board");
    grid.set_row_spacing(CARD_GAP as u32);
    grid.set_column_spacing(CARD_GAP as u32);
    grid.set_halign(gtk::Align::Center);
    grid.set_valign(gtk::Align::Center);

    let mut buttons = Vec::with_capacity(cards.len());
    let mut handlers = Vec::with_capacity(cards.len());

    for card in &cards {
        let id = card.id();
        let symbol = card.symbol();

        let button = gtk::Button::builder()
            .css_classes(vec!["card", symbol.name()])
            .build();
        button.set_size_request(CARD_SIZE, CARD_SIZE);
        button.update_property(&[gtk::accessible::Property::Description(symbol.name())]);

        let drawing_area = gtk::DrawingArea::builder()
            .hexpand(true)
            .vexpand(true)
            .build();
        drawing_area.add_css_class("card-face");

        let state_draw = state.clone();
        drawing_area.set_draw_func(move |area, cr, width, height| {
            let face_up = state_draw
                .borrow()
                .game
                .board()
                .card(id)
                .is_some_and(Card::is_face_up);
            if face_up {
                draw_face(cr, symbol, width, height);
            } else {
                draw_back(area, cr, width, height);
            }
        });
        button.set_child(Some(&drawing_area));
        sync_card_classes(&button, card);

        let handler = if card.is_matched() {
            None
        } else {
            let state_click = state.clone();
            Some(button.connect_clicked(move |_| {
                handle_card_click(&state_click, id);
            }))
        };

        let index = id.index() as i32;
        grid.attach(&button, index % columns, index / columns, 1, 1);
        buttons.push(button);
        handlers.push(handler);
    }

    container.append(&grid);

    let mut st = state.borrow_mut();
    st.card_buttons = buttons;
    st.click_handlers = handlers;
    drop(st);

    Ok(grid)
}

pub(super) fn sync_card_classes(button: &gtk::Button, card: &Card) {
    if card.is_face_up() {
        button.add_css_class("flipped");
    } else {
        button.remove_css_class("flipped");
    }
    if card.is_matched() {
        button.add_css_class("matched");
    } else {
        button.remove_css_class("matched");
    }
}

/// Re-styles and repaints the button for `id` from the game state.
pub(super) fn refresh_card(st: &AppState, id: CardId) {
    let (Some(button), Some(card)) = (st.card_buttons.get(id.index()), st.game.board().card(id))
    else {
        return;
    };
    sync_card_classes(button, card);
    if let Some(child) = button.child() {
        child.queue_draw();
    }
}

fn draw_face(cr: &cairo::Context, symbol: Symbol, width: i32, height: i32) {
    let (red, green, blue) = symbol.rgb();
    cr.set_source_rgb(red, green, blue);
    cr.rectangle(0.0, 0.0, width as f64, height as f64);
    if let Err(err) = cr.fill() {
        log::warn!("failed to paint {symbol} card: {err}");
    }
}

fn draw_back(area: &gtk::DrawingArea, cr: &cairo::Context, width: i32, height: i32) {
    let min_dim = width.min(height) as f64;

    cr.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(cr);
    let mut font_desc = pango::FontDescription::new();
    font_desc.set_family("Cantarell, Noto Sans, sans");
    font_desc.set_weight(pango::Weight::Bold);
    font_desc.set_size((min_dim * 0.34 * pango::SCALE as f64) as i32);
    layout.set_font_description(Some(&font_desc));
    layout.set_text("?");

    let fg = area.style_context().color();
    cr.set_source_rgba(
        fg.red() as f64,
        fg.green() as f64,
        fg.blue() as f64,
        fg.alpha() as f64,
    );

    let (text_width, text_height) = layout.pixel_size();
    cr.move_to(
        (width as f64 - text_width as f64) / 2.0,
        (height as f64 - text_height as f64) / 2.0,
    );

    pangocairo::functions::show_layout(cr, &layout);
}
