// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module wires egui widgets to the [`Editor`]: continuous input goes
//! through the transient paths, releases and discrete actions commit.

use crate::ui::{annotations, canvas, effects, toolbar};
use shotframe::error::StoreError;
use shotframe::io::serialization;
use shotframe::persistence::{
    load_defaults_in_background, AssetResolver, FsAssetResolver, IdentityResolver, JsonFileStore,
    MemoryStore, SettingsStore,
};
use shotframe::util::geometry::smart_padding;
use shotframe::{AnnotationId, BackgroundType, Editor, EditorConfig, SettingsPatch};
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

type DefaultsResult = Result<SettingsPatch, StoreError>;

/// Annotation being dragged on the canvas.
struct Drag {
    id: AnnotationId,
}

/// Main application state.
pub struct ShotframeApp {
    editor: Editor,

    /// Persisted defaults (falls back to memory if the file can't be opened)
    store: Box<dyn SettingsStore>,

    resolver: Box<dyn AssetResolver + Send>,

    /// Receiver for background hydration of persisted defaults
    defaults_loader: Option<Receiver<DefaultsResult>>,

    /// Currently selected annotation
    selected: Option<AnnotationId>,

    drag: Option<Drag>,

    /// Next number for counter annotations
    counter: u32,

    /// Draft text of the custom color field
    color_draft: String,

    /// Last user-facing status or error
    status: Option<String>,
}

impl ShotframeApp {
    /// Create the app and start loading persisted defaults in the background.
    pub fn new(config: EditorConfig) -> Self {
        let mut editor = Editor::with_config(&config);
        let color_draft = editor.settings().custom_color.clone();

        let opened = config
            .resolved_store_path()
            .map(JsonFileStore::open)
            .transpose();
        let (store, defaults_loader): (Box<dyn SettingsStore>, _) = match opened {
            Ok(Some(store)) => {
                log::info!("Defaults store: {}", store.path().display());
                let loader = load_defaults_in_background(
                    store.clone(),
                    make_resolver(&config),
                    editor.fallback_image().to_string(),
                );
                (Box::new(store) as Box<dyn SettingsStore>, Some(loader))
            }
            Ok(None) => {
                log::warn!("No config directory, defaults will not persist");
                editor.mark_initialized();
                (Box::new(MemoryStore::new()) as Box<dyn SettingsStore>, None)
            }
            Err(e) => {
                log::warn!("Failed to open defaults store: {}", e);
                editor.mark_initialized();
                (Box::new(MemoryStore::new()) as Box<dyn SettingsStore>, None)
            }
        };

        Self {
            editor,
            store,
            resolver: make_resolver(&config),
            defaults_loader,
            selected: None,
            drag: None,
            counter: 0,
            color_draft,
            status: None,
        }
    }

    fn poll_defaults(&mut self) {
        if let Some(ref receiver) = self.defaults_loader {
            if let Ok(result) = receiver.try_recv() {
                self.defaults_loader = None;
                self.editor.finish_initialize(result);
                self.color_draft = self.editor.settings().custom_color.clone();
            }
        }
    }

    fn undo(&mut self) {
        if self.editor.undo() {
            self.selected = None;
            log::info!("Undo");
        }
    }

    fn redo(&mut self) {
        if self.editor.redo() {
            self.selected = None;
            log::info!("Redo");
        }
    }

    fn delete_selected(&mut self) {
        if let Some(id) = self.selected.take() {
            self.editor.remove_annotation(id);
        }
    }

    fn upload_background(&mut self, path: PathBuf) {
        let locator = path.to_string_lossy().into_owned();
        if self.resolver.resolve(&locator).is_none() {
            self.status = Some(format!("Not a usable image: {}", path.display()));
            return;
        }
        self.editor.commit(SettingsPatch {
            background_type: Some(BackgroundType::Image),
            selected_image_src: Some(Some(locator)),
            ..SettingsPatch::default()
        });
    }

    fn open_screenshot(&mut self, path: PathBuf) {
        match image::image_dimensions(&path) {
            Ok((width, height)) => {
                self.editor.commit_padding_uniform(smart_padding(width, height));
                log::info!("Opened screenshot {} ({}x{})", path.display(), width, height);
            }
            Err(e) => {
                log::error!("Failed to read screenshot: {}", e);
                self.status = Some(format!("Failed to open screenshot: {}", e));
            }
        }
    }

    fn export_document(&mut self, path: PathBuf) {
        if let Err(e) = serialization::export(&self.editor.document(), &path) {
            log::error!("Failed to export edit: {}", e);
            self.status = Some(format!("Export failed: {}", e));
        }
    }

    fn import_document(&mut self, path: PathBuf) {
        match serialization::import(&path) {
            Ok(document) => {
                self.selected = None;
                self.editor.load_document(document);
            }
            Err(e) => {
                log::error!("Failed to import edit: {}", e);
                self.status = Some(format!("Import failed: {}", e));
            }
        }
    }

    fn save_effect_defaults(&mut self) {
        match self
            .editor
            .save_effect_settings_as_defaults(self.store.as_mut())
        {
            Ok(()) => self.status = Some("Effect settings saved as defaults".to_string()),
            Err(e) => {
                log::error!("Failed to save effect defaults: {}", e);
                self.status = Some(format!("Could not save defaults: {}", e));
            }
        }
    }

    fn save_all_defaults(&mut self) {
        match self
            .editor
            .save_defaults(self.store.as_mut(), &self.resolver)
        {
            Ok(()) => self.status = Some("Settings saved as defaults".to_string()),
            Err(e) => {
                log::error!("Failed to save defaults: {}", e);
                self.status = Some(format!("Could not save defaults: {}", e));
            }
        }
    }

    fn handle_canvas(&mut self, action: canvas::CanvasAction) {
        match action {
            canvas::CanvasAction::Select(id) => {
                self.selected = id;
            }
            canvas::CanvasAction::StartDrag(id) => {
                self.selected = Some(id);
                self.editor.begin_gesture();
                self.drag = Some(Drag { id });
            }
            canvas::CanvasAction::DragBy(dx, dy) => {
                if let Some(ref drag) = self.drag {
                    if let Some(mut annotation) = self.editor.annotation(drag.id).cloned() {
                        annotation.translate(dx, dy);
                        self.editor.preview_annotation(annotation);
                    }
                }
            }
            canvas::CanvasAction::StopDrag => {
                if let Some(drag) = self.drag.take() {
                    if let Some(annotation) = self.editor.annotation(drag.id).cloned() {
                        self.editor.update_annotation(annotation);
                    }
                }
            }
            canvas::CanvasAction::None => {}
        }
    }

    fn menu_bar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Screenshot...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
                        .pick_file()
                    {
                        self.open_screenshot(path);
                    }
                    ui.close_menu();
                }
                if ui.button("Upload Background...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
                        .pick_file()
                    {
                        self.upload_background(path);
                    }
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Import Edit...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Edit", &["yaml", "yml", "json"])
                        .pick_file()
                    {
                        self.import_document(path);
                    }
                    ui.close_menu();
                }
                if ui.button("Export Edit...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("YAML", &["yaml", "yml"])
                        .add_filter("JSON", &["json"])
                        .set_file_name("edit.yaml")
                        .save_file()
                    {
                        self.export_document(path);
                    }
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Save Effects as Defaults").clicked() {
                    self.save_effect_defaults();
                    ui.close_menu();
                }
                if ui.button("Save All as Defaults").clicked() {
                    self.save_all_defaults();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui
                    .add_enabled(self.editor.can_undo(), egui::Button::new("Undo (Ctrl+Z)"))
                    .clicked()
                {
                    self.undo();
                    ui.close_menu();
                }
                if ui
                    .add_enabled(self.editor.can_redo(), egui::Button::new("Redo (Ctrl+Shift+Z)"))
                    .clicked()
                {
                    self.redo();
                    ui.close_menu();
                }
                ui.separator();
                if ui
                    .add_enabled(self.selected.is_some(), egui::Button::new("Delete Selected"))
                    .clicked()
                {
                    self.delete_selected();
                    ui.close_menu();
                }
                if ui.button("Clear Annotations").clicked() {
                    self.selected = None;
                    self.editor.clear_annotations();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Reset").clicked() {
                    self.selected = None;
                    self.editor.reset();
                    self.color_draft = self.editor.settings().custom_color.clone();
                    ui.close_menu();
                }
            });
        });
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if self.drag.take().is_some() {
                self.editor.cancel_gesture();
            } else {
                self.selected = None;
            }
        }

        // Only process if no text field is focused
        if ctx.wants_keyboard_input() {
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace)) {
            self.delete_selected();
        }
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Z) && !i.modifiers.shift) {
            self.undo();
        }
        if ctx.input(|i| {
            (i.modifiers.command && i.modifiers.shift && i.key_pressed(egui::Key::Z))
                || (i.modifiers.command && i.key_pressed(egui::Key::Y))
        }) {
            self.redo();
        }
    }
}

impl eframe::App for ShotframeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_defaults();
        if self.defaults_loader.is_some() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.menu_bar(ui, ctx);
        });

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            if let Some(annotation) = toolbar::show(ui, &mut self.counter) {
                self.selected = Some(self.editor.add_annotation(annotation));
            }
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let (past, future) = self.editor.history_len();
                ui.label(format!("History: {} undo / {} redo", past, future));
                if let Some(ref status) = self.status {
                    ui.separator();
                    ui.label(status);
                }
            });
        });

        egui::SidePanel::left("effects")
            .default_width(260.0)
            .show(ctx, |ui| {
                effects::show(ui, &mut self.editor, &mut self.color_draft);
            });

        let list_action = egui::SidePanel::right("annotations")
            .default_width(220.0)
            .show(ctx, |ui| {
                annotations::show(ui, self.editor.annotations(), self.selected)
            })
            .inner;
        match list_action {
            annotations::ListAction::Select(id) => self.selected = Some(id),
            annotations::ListAction::BringToFront(id) => {
                self.editor.bring_to_front(id);
            }
            annotations::ListAction::Delete(id) => {
                if self.selected == Some(id) {
                    self.selected = None;
                }
                self.editor.remove_annotation(id);
            }
            annotations::ListAction::None => {}
        }

        self.handle_keys(ctx);

        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                canvas::show(ui, &self.editor, self.selected, self.drag.is_some())
            })
            .inner;
        self.handle_canvas(canvas_action);
    }
}

fn make_resolver(config: &EditorConfig) -> Box<dyn AssetResolver + Send> {
    match config.asset_dir {
        Some(ref dir) => Box::new(FsAssetResolver::new(dir)),
        None => Box::new(IdentityResolver),
    }
}
