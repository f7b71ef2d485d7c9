use std::path::PathBuf;

use eframe::egui;
use rfd::{FileDialog, MessageDialog, MessageLevel};

use crate::{
    convert::convert,
    structs::{format::TargetFormat, request::ConversionRequest},
    types::ConversionOutcome,
};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];
const LOG_LENGTH: usize = 12;

pub struct App {
    files: Vec<PathBuf>,
    output_dir: Option<PathBuf>,
    format: TargetFormat,

    // Messages
    messages: Vec<String>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            output_dir: None,
            format: TargetFormat::Ico,
            messages: Vec::new(),
        }
    }
}

impl App {
    fn select_images(&mut self) {
        let paths = FileDialog::new()
            .set_title("Select images")
            .add_filter("Image files", IMAGE_EXTENSIONS)
            .pick_files();

        if let Some(paths) = paths {
            self.push_message(format!("Selected {} file(s)", paths.len()));
            self.files = paths;
        }
    }

    fn select_output(&mut self) {
        let folder = FileDialog::new().set_title("Select output folder").pick_folder();

        if let Some(folder) = folder {
            self.push_message(format!("Output folder: {}", folder.display()));
            self.output_dir = Some(folder);
        }
    }

    /// Builds the request from the current selection and runs the batch on
    /// this thread; the outcome is reported through a modal dialog.
    fn run_conversion(&mut self) {
        let request = ConversionRequest::new(
            self.files.clone(),
            self.output_dir.clone().unwrap_or_default(),
            self.format,
        );

        let request = match request {
            Ok(request) => request,
            Err(e) => {
                MessageDialog::new()
                    .set_level(MessageLevel::Warning)
                    .set_title("Nothing to convert")
                    .set_description(e.to_string())
                    .show();
                return;
            }
        };

        match convert(&request) {
            ConversionOutcome::Success { converted } => {
                let message = format!("Converted {} file(s) to {}.", converted, request.format);
                self.push_message(message.clone());

                MessageDialog::new()
                    .set_level(MessageLevel::Info)
                    .set_title("Conversion complete")
                    .set_description(message)
                    .show();
            }
            ConversionOutcome::Failure { source, error } => {
                self.push_message(format!("Failed on '{}'", source.display()));

                MessageDialog::new()
                    .set_level(MessageLevel::Error)
                    .set_title("Conversion error")
                    .set_description(format!(
                        "Could not convert\n{}\n\n{}",
                        source.display(),
                        error
                    ))
                    .show();
            }
        }
    }

    fn push_message(&mut self, message: String) {
        self.messages.push(message);

        if self.messages.len() > LOG_LENGTH {
            self.messages.remove(0);
        }
    }

    fn summary(&self) -> String {
        let files = match self.files.len() {
            0 => "No images selected".to_string(),
            n => format!("{} image(s) selected", n),
        };

        let output = match &self.output_dir {
            Some(dir) => format!("output folder '{}'", dir.display()),
            None => "no output folder".to_string(),
        };

        format!("{}, {}, converting to {}.", files, output, self.format)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                if ui.button("Select Images").clicked() {
                    self.select_images();
                }
                if ui.button("Select Output Folder").clicked() {
                    self.select_output();
                }
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Convert to:");
                egui::ComboBox::from_id_salt("target_format")
                    .selected_text(format!("{}", self.format))
                    .show_ui(ui, |ui| {
                        for format in TargetFormat::ALL {
                            ui.selectable_value(&mut self.format, format, format.to_string());
                        }
                    });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Max), |ui| {
                    ui.add_space(10.0);
                    if ui.button("Convert").clicked() {
                        self.run_conversion();
                    }
                });
            });

            ui.add_space(8.0);

            ui.heading("Summary");
            ui.label(self.summary());

            ui.add_space(8.0);

            ui.heading("Logs");
            ui.label(self.messages.join("\n"));
        });
    }
}
