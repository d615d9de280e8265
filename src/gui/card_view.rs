use eframe::egui::{
    self,
    RichText,
    Stroke,
};

use super::theme::Theme;
use crate::core::{
    CardMeaning,
    Session,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Flip,
    Previous,
    Next,
    Ignore,
}

const CARD_HEIGHT: f32 = 280.0;

/// Draws the current card and its controls. Returns what the user asked for, if anything.
pub fn card_view(ui: &mut egui::Ui, session: &Session, theme: &Theme) -> Option<CardAction> {
    let ctx = ui.ctx().clone();

    let Some(entry) = session.current() else {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new(session.status().to_string()).size(18.0).color(theme.muted(&ctx)));
        });
        return None;
    };

    let mut action = None;
    let flipped = session.is_flipped();
    let cursor = session.deck().cursor().unwrap_or(0);
    let len = session.deck().len();

    ui.label(RichText::new(format!("{} / {}", cursor + 1, len)).color(theme.muted(&ctx)));
    ui.add_space(6.0);

    let fill = if flipped { theme.card_back(&ctx) } else { theme.card_front(&ctx) };
    let frame = egui::Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.5, theme.accent(&ctx)))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(24));

    let card = frame.show(ui, |ui| {
        ui.set_min_size(egui::vec2(ui.available_width(), CARD_HEIGHT));
        ui.vertical_centered(|ui| {
            if !flipped {
                ui.add_space(CARD_HEIGHT / 3.0);
                ui.label(RichText::new(&entry.word).size(40.0).strong().color(theme.accent(&ctx)));
                return;
            }

            ui.label(RichText::new(&entry.word).size(20.0).strong().color(theme.accent(&ctx)));
            ui.separator();

            match &entry.meaning {
                CardMeaning::Loading => {
                    ui.add(egui::Spinner::new());
                    ui.label(entry.back_text());
                }
                CardMeaning::NotFound => {
                    ui.label(RichText::new(entry.back_text()).color(theme.red(&ctx)));
                }
                CardMeaning::Loaded(text) => {
                    egui::ScrollArea::vertical().max_height(CARD_HEIGHT - 40.0).show(ui, |ui| {
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            ui.label(text);
                        });
                    });
                }
                CardMeaning::Unfetched => {
                    ui.label(RichText::new(entry.back_text()).color(theme.muted(&ctx)));
                }
            }
        });
    });

    let response = card
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    if response.clicked() {
        action = Some(CardAction::Flip);
    }

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        if ui.add_enabled(cursor > 0, egui::Button::new("◀ Previous")).clicked() {
            action = Some(CardAction::Previous);
        }
        let flip_label = if flipped { "Show word" } else { "Show meaning" };
        if ui.button(flip_label).clicked() {
            action = Some(CardAction::Flip);
        }
        if ui.add_enabled(cursor + 1 < len, egui::Button::new("Next ▶")).clicked() {
            action = Some(CardAction::Next);
        }
        ui.separator();
        if ui.button(RichText::new("Ignore word").color(theme.red(&ctx))).clicked() {
            action = Some(CardAction::Ignore);
        }
    });

    if entry.is_fetched() && !matches!(entry.meaning, CardMeaning::NotFound) {
        ui.label(RichText::new("✔ meaning loaded").small().color(theme.green(&ctx)));
    }

    action
}
