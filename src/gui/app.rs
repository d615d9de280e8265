use std::sync::Arc;

use eframe::egui::{
    self,
    Key,
    RichText,
};
use log::{
    debug,
    warn,
};

use super::{
    card_view::{
        card_view,
        CardAction,
    },
    ignore_list_window::IgnoreListWindow,
    theme::{
        set_theme,
        Theme,
    },
};
use crate::{
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        IgnoreList,
        RevealAction,
        Session,
        Settings,
    },
    dictionary::{
        CardBackStyle,
        DefinitionResolver,
    },
};

pub struct LexicardsApp {
    // Study state
    session: Session,
    input_text: String,

    // Configuration
    settings: Settings,
    ignore_list: Option<IgnoreList>,

    // UI State
    theme: Theme,
    ignore_window: IgnoreListWindow,
    notice: Option<String>,

    // External Services
    resolver: Arc<DefinitionResolver>,
    task_manager: TaskManager,
}

impl LexicardsApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        ignore_list: Option<IgnoreList>,
        resolver: Arc<DefinitionResolver>,
        task_manager: TaskManager,
    ) -> Self {
        let stopwords = match &ignore_list {
            Some(list) => list.stopwords(),
            None => Default::default(),
        };
        let session = Session::new(stopwords, settings.tokenizer_options());

        let theme = Theme::dracula();
        set_theme(&cc.egui_ctx, &theme);

        Self {
            session,
            input_text: String::new(),
            settings,
            ignore_list,
            theme,
            ignore_window: IgnoreListWindow::default(),
            notice: None,
            resolver,
            task_manager,
        }
    }

    fn process_text(&mut self) {
        self.notice = None;
        self.session.process_text(&self.input_text);
    }

    fn apply_card_action(&mut self, action: CardAction, ctx: &egui::Context) {
        match action {
            CardAction::Flip => self.flip(ctx),
            CardAction::Previous => {
                self.session.previous();
            }
            CardAction::Next => {
                self.session.next();
            }
            CardAction::Ignore => self.ignore_current(),
        }
    }

    fn flip(&mut self, ctx: &egui::Context) {
        if let RevealAction::Fetch(word) = self.session.flip() {
            let ctx = ctx.clone();
            self.task_manager.resolve_definition(word, Arc::clone(&self.resolver), move || {
                ctx.request_repaint();
            });
        }
    }

    fn ignore_current(&mut self) {
        let Some(word) = self.session.ignore_current() else {
            return;
        };

        if let Some(list) = &mut self.ignore_list {
            if let Err(e) = list.add_term(&word) {
                warn!("Failed to save ignore list: {}", e);
                self.notice = Some(format!("Could not save ignore list: {e}"));
            }
        }
    }

    fn restore_word(&mut self, word: &str) {
        self.session.unignore(word);

        if let Some(list) = &mut self.ignore_list {
            if let Err(e) = list.remove_term(word) {
                warn!("Failed to save ignore list: {}", e);
                self.notice = Some(format!("Could not save ignore list: {e}"));
            }
        }
    }

    fn save_settings(&mut self) {
        self.session.set_options(self.settings.tokenizer_options());
        if let Err(e) = self.settings.save() {
            warn!("Failed to save settings: {}", e);
            self.notice = Some(format!("Could not save settings: {e}"));
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        debug!("Task finished: {}", result.task_type());
        match result {
            TaskResult::DefinitionResolved { word, resolution } => {
                let format = self.settings.format_options();
                self.session.apply_resolution(&word, &resolution, &format);
            }
        }
    }

    fn keyboard_action(&self, ctx: &egui::Context) -> Option<CardAction> {
        if ctx.wants_keyboard_input() {
            return None;
        }

        ctx.input(|i| {
            if i.key_pressed(Key::ArrowLeft) {
                Some(CardAction::Previous)
            } else if i.key_pressed(Key::ArrowRight) {
                Some(CardAction::Next)
            } else if i.key_pressed(Key::Space) {
                Some(CardAction::Flip)
            } else if i.key_pressed(Key::Delete) {
                Some(CardAction::Ignore)
            } else {
                None
            }
        })
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Lexicards");
                ui.separator();

                if ui
                    .checkbox(&mut self.settings.lemmatize, "Merge word forms")
                    .on_hover_text("Treat 'dogs' and 'dog' as one card. Applies on next Process.")
                    .changed()
                {
                    self.save_settings();
                }

                let before = self.settings.card_back_style;
                egui::ComboBox::from_label("Card back")
                    .selected_text(match self.settings.card_back_style {
                        CardBackStyle::Summary => "Summary",
                        CardBackStyle::Detailed => "Detailed",
                    })
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.settings.card_back_style,
                            CardBackStyle::Summary,
                            "Summary",
                        );
                        ui.selectable_value(
                            &mut self.settings.card_back_style,
                            CardBackStyle::Detailed,
                            "Detailed",
                        );
                    });
                if before != self.settings.card_back_style {
                    self.save_settings();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Ignored words").clicked() {
                        self.ignore_window.toggle();
                    }
                });
            });
        });
    }

    fn input_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("input_panel").resizable(true).default_width(320.0).show(ctx, |ui| {
            ui.add_space(6.0);
            ui.label(RichText::new("Text").strong());
            egui::ScrollArea::vertical().max_height(ui.available_height() - 48.0).show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.input_text)
                        .desired_width(f32::INFINITY)
                        .desired_rows(18)
                        .hint_text("Paste text here..."),
                );
            });
            ui.add_space(6.0);
            if ui.button("Process").clicked() {
                self.process_text();
            }
        });
    }

    fn status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.session.status().to_string());
                ui.separator();
                ui.label(
                    RichText::new(format!("{} definitions cached", self.resolver.cached_words()))
                        .color(self.theme.muted(ctx)),
                );
                if let Some(notice) = &self.notice {
                    ui.separator();
                    ui.label(RichText::new(notice).color(self.theme.red(ctx)));
                }
            });
        });
    }
}

impl eframe::App for LexicardsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        let mut pending = self.keyboard_action(ctx);

        self.top_bar(ctx);
        self.status_bar(ctx);
        self.input_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(action) = card_view(ui, &self.session, &self.theme) {
                pending = Some(action);
            }
        });

        if let Some(action) = pending {
            self.apply_card_action(action, ctx);
        }

        let terms = self.ignore_list.as_ref().map(|list| list.terms().to_vec()).unwrap_or_default();
        if let Some(word) = self.ignore_window.show(ctx, &terms) {
            self.restore_word(&word);
        }
    }
}
