use crate::clipboard::Clipboard;
use crate::clips::{self, ClipStore};
use crate::dialogs::{ConfirmDeleteDialog, EditDialog};
use crate::docking::{self, DockController, DockState};
use crate::pager::{self, Pager};
use crate::settings::{Geometry, Settings};
use crate::theme::Theme;
use eframe::egui::{
    self, pos2, vec2, Align, Align2, Button, Color32, Layout, Margin, Pos2, Rect, RichText, Sense,
    Stroke, TextEdit,
};
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use std::path::PathBuf;
use std::time::Instant;

const ROW_HEIGHT: f32 = 34.0;
const TITLE_BAR_HEIGHT: f32 = 28.0;

/// A row shows only its first line, cut to 40 characters.
fn preview(text: &str) -> String {
    let first = text.lines().next().unwrap_or("");
    let truncated: String = first.chars().take(40).collect();
    if first.chars().count() > 40 {
        format!("{truncated}...")
    } else {
        truncated
    }
}

fn apply_geometry(ctx: &egui::Context, rect: Rect) {
    ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(rect.min));
    ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(rect.size()));
}

fn screen_rect(ctx: &egui::Context) -> Rect {
    let size = ctx
        .input(|i| i.viewport().monitor_size)
        .unwrap_or(vec2(1920.0, 1080.0));
    Rect::from_min_size(Pos2::ZERO, size)
}

enum RowAction {
    Copy(String),
    Edit(String),
    Delete(String),
}

pub struct ClipApp {
    pub store: ClipStore,
    pub query: String,
    /// Derived view over `store`; recomputed by `refresh` after every
    /// mutation rather than through any implicit event wiring.
    pub filtered: Vec<String>,
    pub pager: Pager,
    pub dock: DockController,
    clipboard: Box<dyn Clipboard>,
    theme: Theme,
    toasts: Toasts,
    edit_dialog: EditDialog,
    confirm_delete: ConfirmDeleteDialog,
    settings_path: PathBuf,
    initial_geometry: Option<Geometry>,
    initialized: bool,
    last_poll: Instant,
    debug_logging: bool,
}

impl ClipApp {
    pub fn new(settings: Settings, settings_path: PathBuf, clipboard: Box<dyn Clipboard>) -> Self {
        let store = ClipStore::from_clips(settings.clips, clips::MAX_ENTRIES);
        let filtered = store.search("");
        Self {
            store,
            query: String::new(),
            filtered,
            pager: Pager::default(),
            dock: DockController::new(),
            clipboard,
            theme: Theme::default(),
            toasts: Toasts::new().anchor(Align2::CENTER_BOTTOM, [0.0, -12.0]),
            edit_dialog: EditDialog::default(),
            confirm_delete: ConfirmDeleteDialog::default(),
            settings_path,
            initial_geometry: settings.geometry,
            initialized: false,
            last_poll: Instant::now(),
            debug_logging: settings.debug_logging,
        }
    }

    /// Recompute the filtered view and re-clamp the page. Called after every
    /// store mutation and query change.
    pub fn refresh(&mut self) {
        self.filtered = self.store.search(&self.query);
        self.pager.clamp_to(self.filtered.len());
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.pager.reset();
        self.refresh();
    }

    /// Pull the current system clipboard text into the store.
    pub fn add_clip(&mut self) {
        let Some(text) = self.clipboard.read() else {
            return;
        };
        if self.store.add(&text) {
            self.refresh();
        }
    }

    pub fn delete_clip(&mut self, text: &str) {
        if self.store.remove(text) {
            self.refresh();
        }
    }

    pub fn edit_clip(&mut self, old: &str, new: &str) {
        if self.store.edit(old, new) {
            self.refresh();
        }
    }

    fn copy_clip(&mut self, text: &str) {
        self.clipboard.write(text);
        self.toasts.add(Toast {
            text: "Copied to clipboard".into(),
            kind: ToastKind::Success,
            options: ToastOptions::default().duration_in_seconds(1.5),
        });
    }

    fn persist(&mut self, window: Rect) {
        let rect = self.dock.persisted_geometry(window);
        let settings = Settings {
            geometry: Some(Geometry {
                x: rect.min.x as i32,
                y: rect.min.y as i32,
                width: rect.width() as i32,
                height: rect.height() as i32,
            }),
            clips: self.store.all().to_vec(),
            debug_logging: self.debug_logging,
        };
        if let Err(e) = settings.save(&self.settings_path) {
            tracing::error!("failed to save settings: {e}");
        }
    }

    /// Position and size the window on the first frame: either the persisted
    /// geometry or a screen-proportional default at the right side, inset
    /// past the collapse threshold.
    fn init_geometry(&mut self, ctx: &egui::Context, screen: Rect) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        let rect = match self.initial_geometry {
            Some(g) => Rect::from_min_size(
                pos2(g.x as f32, g.y as f32),
                vec2(g.width as f32, g.height as f32),
            ),
            None => {
                let width = (screen.width() * 0.2).clamp(300.0, 500.0);
                let height = (screen.height() * 0.5).clamp(400.0, 800.0);
                let x = screen.max.x - width - docking::EXPAND_INSET;
                let y = screen.min.y + (screen.height() - height) / 2.0;
                Rect::from_min_size(pos2(x, y), vec2(width, height))
            }
        };
        apply_geometry(ctx, rect);
    }

    fn ball_ui(&mut self, ctx: &egui::Context, now: Instant, window: Rect, screen: Rect) {
        let mut pressed = false;
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let radius = rect.size().min_elem() * 0.5;
                ui.painter().circle(
                    rect.center(),
                    radius,
                    self.theme.ball_fill,
                    Stroke::new(2.0, self.theme.ball_stroke),
                );
                let resp = ui.interact(rect, egui::Id::new("dock_ball"), Sense::click());
                if resp.is_pointer_button_down_on() {
                    pressed = true;
                }
            });
        if pressed {
            self.dock.pointer_pressed(now, window, screen);
        }
    }

    fn expanded_ui(&mut self, ctx: &egui::Context, now: Instant, window: Rect, screen: Rect) {
        let mut action: Option<RowAction> = None;
        let mut minimize = false;
        let mut close = false;
        let mut query_changed = false;
        let mut page_prev = false;
        let mut page_next = false;
        let mut add_clicked = false;
        let content_visible = self.dock.content_visible();

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect(
                    rect,
                    self.theme.window_rounding,
                    self.theme.window_fill,
                    Stroke::new(1.0, self.theme.window_stroke),
                );
                if !content_visible {
                    // mid-expand: background only until the animation lands
                    return;
                }
                egui::Frame::none()
                    .inner_margin(Margin::symmetric(16.0, 12.0))
                    .show(ui, |ui| {
                        // title bar: draggable strip with minimize/close
                        let (bar_rect, bar_resp) = ui.allocate_exact_size(
                            vec2(ui.available_width(), TITLE_BAR_HEIGHT),
                            Sense::click_and_drag(),
                        );
                        if bar_resp.drag_started() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
                        }
                        let mut bar = ui.child_ui(bar_rect, Layout::left_to_right(Align::Center));
                        bar.label(
                            RichText::new("ClipFloat")
                                .color(self.theme.title)
                                .size(15.0)
                                .strong(),
                        );
                        bar.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            let close_btn = ui.add(
                                Button::new(
                                    RichText::new("×").size(16.0).color(self.theme.muted),
                                )
                                .frame(false),
                            );
                            if close_btn.clicked() {
                                close = true;
                            }
                            let min_btn = ui.add(
                                Button::new(
                                    RichText::new("–").size(16.0).color(self.theme.muted),
                                )
                                .frame(false),
                            );
                            if min_btn.clicked() {
                                minimize = true;
                            }
                        });

                        ui.add_space(6.0);
                        let search = ui.add(
                            TextEdit::singleline(&mut self.query)
                                .hint_text("Search clipboard content...")
                                .desired_width(f32::INFINITY),
                        );
                        if search.changed() {
                            query_changed = true;
                        }
                        ui.add_space(8.0);

                        let page_entries: Vec<String> = pager::page_slice(
                            &self.filtered,
                            self.pager.current(),
                            self.pager.page_size(),
                        )
                        .to_vec();
                        for slot in 0..self.pager.page_size() {
                            match page_entries.get(slot) {
                                Some(entry) => {
                                    ui.horizontal(|ui| {
                                        let width = ui.available_width() - 26.0;
                                        let row = ui.add_sized(
                                            [width, ROW_HEIGHT],
                                            Button::new(
                                                RichText::new(preview(entry))
                                                    .color(self.theme.text),
                                            )
                                            .wrap(false)
                                            .fill(self.theme.row_fill)
                                            .stroke(Stroke::new(1.0, self.theme.row_stroke))
                                            .rounding(self.theme.row_rounding),
                                        );
                                        if row.clicked() {
                                            action = Some(RowAction::Copy(entry.clone()));
                                        }
                                        row.context_menu(|ui| {
                                            if ui.button("Edit").clicked() {
                                                action = Some(RowAction::Edit(entry.clone()));
                                                ui.close_menu();
                                            }
                                        });
                                        let del = ui.add(
                                            Button::new(
                                                RichText::new("×")
                                                    .size(16.0)
                                                    .color(self.theme.muted),
                                            )
                                            .frame(false),
                                        );
                                        if del.clicked() {
                                            action = Some(RowAction::Delete(entry.clone()));
                                        }
                                    });
                                }
                                None => {
                                    let (rect, _) = ui.allocate_exact_size(
                                        vec2(ui.available_width(), ROW_HEIGHT),
                                        Sense::hover(),
                                    );
                                    ui.painter().rect(
                                        rect,
                                        self.theme.row_rounding,
                                        self.theme.placeholder_fill,
                                        Stroke::new(1.0, self.theme.placeholder_stroke),
                                    );
                                }
                            }
                            ui.add_space(4.0);
                        }

                        ui.add_space(4.0);
                        ui.horizontal(|ui| {
                            let len = self.filtered.len();
                            if ui
                                .add_enabled(self.pager.has_prev(), Button::new("Prev"))
                                .clicked()
                            {
                                page_prev = true;
                            }
                            ui.label(
                                RichText::new(self.pager.label(len)).color(self.theme.text),
                            );
                            if ui
                                .add_enabled(self.pager.has_next(len), Button::new("Next"))
                                .clicked()
                            {
                                page_next = true;
                            }
                        });

                        ui.add_space(6.0);
                        let add_btn = ui.add_sized(
                            [ui.available_width(), 36.0],
                            Button::new(
                                RichText::new("+ Add clipboard content")
                                    .color(Color32::WHITE)
                                    .strong(),
                            )
                            .fill(self.theme.accent)
                            .rounding(18.0),
                        );
                        if add_btn.clicked() {
                            add_clicked = true;
                        }
                    });
            });

        if query_changed {
            self.pager.reset();
            self.refresh();
        }
        if page_prev {
            self.pager.prev();
        }
        if page_next {
            self.pager.next(self.filtered.len());
        }
        if add_clicked {
            self.add_clip();
        }
        if minimize {
            self.dock.minimize(now, window, screen);
        }
        if close {
            self.persist(window);
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        match action {
            Some(RowAction::Copy(text)) => self.copy_clip(&text),
            Some(RowAction::Edit(text)) => self.edit_dialog.open_for(&text),
            Some(RowAction::Delete(text)) => self.confirm_delete.open_for(&text),
            None => {}
        }
    }

    fn dialog_results(&mut self, ctx: &egui::Context) {
        if let Some((old, new)) = self.edit_dialog.ui(ctx) {
            self.edit_clip(&old, &new);
        }
        if let Some(target) = self.confirm_delete.ui(ctx) {
            self.delete_clip(&target);
        }
    }
}

impl eframe::App for ClipApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let screen = screen_rect(ctx);
        let window = ctx
            .input(|i| i.viewport().outer_rect)
            .unwrap_or_else(|| Rect::from_min_size(Pos2::ZERO, vec2(380.0, 600.0)));

        self.init_geometry(ctx, screen);

        if now.duration_since(self.last_poll) >= docking::POLL_INTERVAL {
            self.last_poll = now;
            if let Some(corrected) = self.dock.poll(now, window, screen) {
                apply_geometry(ctx, corrected);
            }
        }
        if let Some(rect) = self.dock.animate(now) {
            apply_geometry(ctx, rect);
        }

        match self.dock.state() {
            DockState::Collapsed(_) => self.ball_ui(ctx, now, window, screen),
            DockState::Expanded => self.expanded_ui(ctx, now, window, screen),
        }

        self.dialog_results(ctx);
        self.toasts.show(ctx);

        if ctx.input(|i| i.viewport().close_requested()) {
            self.persist(window);
        }

        // keep the dock poll ticking even when no input arrives
        ctx.request_repaint_after(docking::POLL_INTERVAL);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;

    fn new_app(clipboard: MemoryClipboard) -> ClipApp {
        ClipApp::new(
            Settings::default(),
            PathBuf::from("settings.json"),
            Box::new(clipboard),
        )
    }

    #[test]
    fn preview_shows_first_line_only() {
        assert_eq!(preview("hello\nworld"), "hello");
        assert_eq!(preview(""), "");
        let long = "x".repeat(50);
        assert_eq!(preview(&long), format!("{}...", "x".repeat(40)));
    }

    #[test]
    fn add_clip_reads_the_injected_clipboard() {
        let mut app = new_app(MemoryClipboard {
            contents: Some("  copied text ".into()),
        });
        app.add_clip();
        assert_eq!(app.store.all(), ["copied text"]);
        assert_eq!(app.filtered, ["copied text"]);

        // same contents again: dedup keeps the store unchanged
        app.add_clip();
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn empty_clipboard_adds_nothing() {
        let mut app = new_app(MemoryClipboard::default());
        app.add_clip();
        assert!(app.store.is_empty());
    }

    #[test]
    fn query_change_resets_page_and_filters() {
        let mut app = new_app(MemoryClipboard::default());
        for n in 0..20 {
            app.store.add(&format!("clip {n}"));
        }
        app.refresh();
        app.pager.goto(2, app.filtered.len());

        app.set_query("clip 1");
        assert_eq!(app.pager.current(), 0);
        // "clip 1" plus "clip 10".."clip 19"
        assert_eq!(app.filtered.len(), 11);
    }

    #[test]
    fn deleting_the_last_entry_of_a_page_reclamps() {
        let mut app = new_app(MemoryClipboard::default());
        for n in 0..8 {
            app.store.add(&format!("clip {n}"));
        }
        app.refresh();
        app.pager.goto(1, app.filtered.len());
        assert_eq!(app.pager.current(), 1);

        app.delete_clip("clip 7");
        assert_eq!(app.filtered.len(), 7);
        assert_eq!(app.pager.current(), 0);
    }

    #[test]
    fn edit_keeps_the_filtered_view_in_sync() {
        let mut app = new_app(MemoryClipboard::default());
        app.store.add("alpha");
        app.store.add("beta");
        app.refresh();

        app.edit_clip("alpha", "gamma");
        assert_eq!(app.store.all(), ["gamma", "beta"]);
        assert_eq!(app.filtered, ["gamma", "beta"]);
    }
}
