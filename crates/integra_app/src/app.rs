use eframe::egui;
use integra_client::AnalyzeSettings;
use integra_core::{update, AppState, AppViewModel, ContractFile, Msg, UploadState};

use crate::effects::EffectRunner;

pub struct IntegraApp {
    state: AppState,
    runner: EffectRunner,
    was_hovering: bool,
}

impl IntegraApp {
    pub fn new(settings: AnalyzeSettings) -> Self {
        Self {
            state: AppState::new(),
            runner: EffectRunner::new(settings),
            was_hovering: false,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects);
    }

    fn handle_file_input(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if !dropped.is_empty() {
            // A drop ends the hover in the same frame; the drop wins.
            self.was_hovering = false;
            let file = dropped.into_iter().next().and_then(contract_file);
            self.dispatch(Msg::FileDropped(file));
            return;
        }

        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
        if hovering != self.was_hovering {
            self.was_hovering = hovering;
            self.dispatch(if hovering {
                Msg::DragEntered
            } else {
                Msg::DragLeft
            });
        }
    }

    fn show_drop_target(&mut self, ui: &mut egui::Ui, highlighted: bool) {
        let stroke = if highlighted {
            egui::Stroke::new(2.0, egui::Color32::from_rgb(0, 120, 215))
        } else {
            ui.visuals().widgets.noninteractive.bg_stroke
        };
        egui::Frame::group(ui.style())
            .stroke(stroke)
            .inner_margin(egui::Margin::same(32.0))
            .show(ui, |ui| {
                ui.set_min_height(220.0);
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.add_space(48.0);
                    ui.label(egui::RichText::new("📄").size(48.0));
                    ui.add_space(12.0);
                    if highlighted {
                        ui.label("Solte o arquivo para analisar");
                    } else {
                        ui.label("Selecione um arquivo PDF ou DOCX, ou arraste-o para cá");
                        ui.add_space(12.0);
                        if ui.button("📁 Selecionar arquivo").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("Contratos (PDF, DOCX)", &["pdf", "docx"])
                                .pick_file()
                            {
                                self.dispatch(Msg::FilePicked(ContractFile::from_path(path)));
                            }
                        }
                    }
                });
            });
    }

    fn show_verdict(&mut self, ui: &mut egui::Ui, view: &AppViewModel) {
        let ok = view.upload == UploadState::Ok;
        ui.vertical_centered(|ui| {
            let (color, label) = if ok {
                (egui::Color32::from_rgb(0, 180, 0), "✅ Contrato Íntegro")
            } else {
                (egui::Color32::from_rgb(220, 50, 50), "❌ Contrato Não Íntegro")
            };
            ui.label(egui::RichText::new(label).heading().strong().color(color));
            if let Some(message) = &view.error_message {
                ui.add_space(8.0);
                ui.colored_label(egui::Color32::from_rgb(220, 50, 50), message);
            }
        });

        if let Some(report) = &view.report {
            ui.add_space(12.0);
            ui.separator();
            egui::ScrollArea::vertical()
                .max_height(320.0)
                .show(ui, |ui| {
                    ui.label(report);
                });
        }

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            let button =
                egui::Button::new("🔄 Analisar outro contrato").min_size(egui::vec2(180.0, 32.0));
            if ui.add(button).clicked() {
                self.dispatch(Msg::ResetClicked);
            }
        });
    }
}

impl eframe::App for IntegraApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for msg in self.runner.poll() {
            self.dispatch(msg);
        }
        self.handle_file_input(ctx);

        let view = self.state.view();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.heading("Analisador de Contratos");
                ui.add_space(16.0);
            });

            match view.upload {
                UploadState::Idle => self.show_drop_target(ui, false),
                UploadState::Dragging => self.show_drop_target(ui, true),
                UploadState::Loading => show_loading(ui),
                UploadState::Ok | UploadState::Error => self.show_verdict(ui, &view),
            }
        });

        // Completions arrive over a polled channel; keep repainting while a
        // request is in flight.
        if self.state.upload() == UploadState::Loading {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

fn show_loading(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.add(egui::Spinner::new().size(36.0));
        ui.add_space(16.0);
        ui.label("Analisando contrato...");
    });
}

fn contract_file(file: egui::DroppedFile) -> Option<ContractFile> {
    if let Some(path) = file.path {
        return Some(ContractFile::from_path(path));
    }
    if let Some(bytes) = file.bytes {
        let name = if file.name.is_empty() {
            "contrato".to_string()
        } else {
            file.name
        };
        return Some(ContractFile::from_bytes(name, bytes.to_vec()));
    }
    None
}
