use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;

const INSTRUCTIONS: &str = "Flip two cards at a time to find matching colors.\n\
Matching pairs stay revealed.\n\
Cards that don't match flip back after a moment.";

/// Presents an alert whose first response is the default and whose last
/// one answers Escape.
fn present_alert(
    parent: Option<&impl IsA<gtk::Widget>>,
    heading: &str,
    body: &str,
    responses: &[(&str, &str)],
) -> adw::AlertDialog {
    let dialog = adw::AlertDialog::new(Some(heading), Some(body));
    for (id, label) in responses {
        dialog.add_response(id, label);
    }
    if let Some((id, _)) = responses.first() {
        dialog.set_default_response(Some(id));
    }
    if let Some((id, _)) = responses.last() {
        dialog.set_close_response(id);
    }
    dialog.present(parent);
    dialog
}

pub fn show_instructions_dialog(app: &adw::Application) -> adw::AlertDialog {
    present_alert(
        app.active_window().as_ref(),
        "How to Play",
        INSTRUCTIONS,
        &[("ok", "Got it")],
    )
}

pub fn show_about_dialog(app: &adw::Application) -> adw::AboutDialog {
    let dialog = adw::AboutDialog::builder()
        .application_name("Pairs")
        .application_icon(super::app::APP_ID)
        .version(env!("CARGO_PKG_VERSION"))
        .comments("A memory game for finding pairs of colors.")
        .build();
    dialog.present(app.active_window().as_ref());
    dialog
}

pub fn show_victory_dialog(
    parent: Option<&impl IsA<gtk::Widget>>,
    pairs: usize,
    attempts: u32,
) -> adw::AlertDialog {
    let body = format!("You found all {pairs} pairs in {attempts} tries.");
    let dialog = present_alert(
        parent,
        "Board Cleared",
        &body,
        &[("again", "Play Again"), ("close", "Close")],
    );
    dialog.set_response_appearance("again", adw::ResponseAppearance::Suggested);
    dialog
}
