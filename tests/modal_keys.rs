// tests/modal_keys.rs
//
// Drives the modal view through a headless egui context.
//
use eframe::egui::{self, Event, Key, Modifiers, RawInput};

use offerings_browser::config::options::UiOptions;
use offerings_browser::gui::components::modal_view;
use offerings_browser::model::{Dataset, Offering};
use offerings_browser::session::Session;

fn session() -> Session {
    let ds = Dataset::new(["A", "B", "C"].iter().map(|n| Offering::default().with_name(*n)).collect());
    Session::with_dataset(ds, &UiOptions::default())
}

fn key_input(key: Key) -> RawInput {
    RawInput {
        events: vec![Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }],
        ..Default::default()
    }
}

#[test]
fn arrow_key_moves_and_modal_stays_drawn() {
    let ctx = egui::Context::default();
    let mut s = session();
    assert!(s.open_card(0));

    let mut shown = false;
    let _ = ctx.run(RawInput::default(), |ctx| shown = modal_view::draw(ctx, &mut s));
    assert!(shown);

    let _ = ctx.run(key_input(Key::ArrowLeft), |ctx| shown = modal_view::draw(ctx, &mut s));
    assert!(shown, "modal drawn on the key frame");
    assert_eq!(s.modal_position(), Some(2));

    let _ = ctx.run(key_input(Key::ArrowRight), |ctx| shown = modal_view::draw(ctx, &mut s));
    assert!(shown);
    assert_eq!(s.modal_position(), Some(0));
}

#[test]
fn keys_are_ignored_while_closed() {
    let ctx = egui::Context::default();
    let mut s = session();
    let mut shown = true;
    let _ = ctx.run(key_input(Key::ArrowRight), |ctx| shown = modal_view::draw(ctx, &mut s));
    assert!(!shown);
    assert_eq!(s.modal_position(), None);
}
