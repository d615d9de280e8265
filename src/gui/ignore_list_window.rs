use eframe::egui;

#[derive(Default)]
pub struct IgnoreListWindow {
    pub open: bool,
    filter: String,
}

impl IgnoreListWindow {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Returns a word the user wants back in future decks.
    pub fn show(&mut self, ctx: &egui::Context, terms: &[String]) -> Option<String> {
        if !self.open {
            return None;
        }

        let mut open = self.open;
        let mut restore = None;

        egui::Window::new("Ignored words")
            .open(&mut open)
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.add(egui::TextEdit::singleline(&mut self.filter).hint_text("Filter..."));
                ui.separator();

                if terms.is_empty() {
                    ui.label("No ignored words yet.");
                    return;
                }

                let needle = self.filter.trim().to_lowercase();
                egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                    for term in terms.iter().filter(|t| t.contains(&needle)) {
                        ui.horizontal(|ui| {
                            ui.label(term);
                            if ui.small_button("Restore").clicked() {
                                restore = Some(term.clone());
                            }
                        });
                    }
                });
            });

        self.open = open;
        restore
    }
}
