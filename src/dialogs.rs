use eframe::egui::{self, Align2, Vec2};

/// Multiline editor for an existing clip. `ui` returns the `(old, new)` pair
/// once the user accepts; an empty replacement is the caller's cue to cancel.
#[derive(Default)]
pub struct EditDialog {
    open: bool,
    original: String,
    text: String,
}

impl EditDialog {
    pub fn open_for(&mut self, text: &str) {
        self.original = text.to_string();
        self.text = text.to_string();
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> Option<(String, String)> {
        if !self.open {
            return None;
        }
        let mut accepted = false;
        let mut cancelled = false;
        egui::Window::new("Edit clip")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.text)
                        .desired_rows(5)
                        .desired_width(300.0),
                );
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        accepted = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });
        if accepted {
            self.open = false;
            return Some((
                std::mem::take(&mut self.original),
                std::mem::take(&mut self.text),
            ));
        }
        if cancelled {
            self.open = false;
            self.original.clear();
            self.text.clear();
        }
        None
    }
}

/// Yes/no confirmation before a clip is deleted. `ui` returns the doomed
/// value once confirmed.
#[derive(Default)]
pub struct ConfirmDeleteDialog {
    open: bool,
    target: String,
}

impl ConfirmDeleteDialog {
    pub fn open_for(&mut self, text: &str) {
        self.target = text.to_string();
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> Option<String> {
        if !self.open {
            return None;
        }
        let mut confirmed = false;
        let mut cancelled = false;
        egui::Window::new("Delete clip")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Delete this clip?");
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        confirmed = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });
        if confirmed {
            self.open = false;
            return Some(std::mem::take(&mut self.target));
        }
        if cancelled {
            self.open = false;
            self.target.clear();
        }
        None
    }
}
