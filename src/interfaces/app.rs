use crate::application::inference::adapter::InferenceAdapter;
use crate::domain::outcome::{DelayLabel, ScoredOutcome};
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::form::OrderForm;
use eframe::egui;
use tracing::{info, warn};

pub struct PredictorApp {
    adapter: InferenceAdapter,
    form: OrderForm,
    last_outcome: Option<Result<ScoredOutcome, String>>,
}

impl PredictorApp {
    pub fn new(adapter: InferenceAdapter) -> Self {
        Self {
            adapter,
            form: OrderForm::default(),
            last_outcome: None,
        }
    }

    fn predict(&mut self) {
        let result = self
            .form
            .to_record(self.adapter.wants_duration())
            .map_err(|e| e.to_string())
            .and_then(|record| self.adapter.score(&record).map_err(|e| e.to_string()));

        match &result {
            Ok(outcome) => info!(
                "Scored delay probability: {}",
                outcome.probability_percent()
            ),
            Err(reason) => warn!("Prediction failed: {}", reason),
        }

        self.last_outcome = Some(result);
    }

    fn render_outcome(&self, ui: &mut egui::Ui) {
        Card::new().title("PREDICTION").show(ui, |ui| {
            match &self.last_outcome {
                None => {
                    ui.label(
                        egui::RichText::new("Fill in the order details and press Predict.")
                            .color(DesignSystem::TEXT_MUTED)
                            .size(14.0),
                    );
                }
                Some(Ok(outcome)) => {
                    let (message, color) = match outcome.label {
                        DelayLabel::Delayed => ("🚨 High Delay Risk", DesignSystem::DANGER),
                        DelayLabel::OnTime => ("✅ Delivery On Time", DesignSystem::SUCCESS),
                    };

                    ui.label(egui::RichText::new(message).size(24.0).strong().color(color));
                    ui.add_space(DesignSystem::SPACING_SMALL);
                    ui.label(
                        egui::RichText::new(format!(
                            "Delay probability: {}",
                            outcome.probability_percent()
                        ))
                        .size(16.0)
                        .color(DesignSystem::TEXT_SECONDARY),
                    );
                }
                // Inference failures surface unstyled; the two styled
                // messages are reserved for real outcomes.
                Some(Err(reason)) => {
                    ui.label(format!("Prediction failed: {}", reason));
                }
            }
        });
    }
}

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        let wants_duration = self.adapter.wants_duration();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("📦 Delivery Delay Predictor");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.adapter.model_name())
                            .color(DesignSystem::TEXT_MUTED)
                            .small(),
                    );
                });
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Machine Learning • delaycast")
                        .color(DesignSystem::TEXT_MUTED)
                        .small(),
                );
            });
        });

        egui::SidePanel::left("order_panel")
            .default_width(300.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(DesignSystem::SPACING_MEDIUM);
                ui.heading("📝 Enter Order Details");
                ui.separator();
                ui.add_space(DesignSystem::SPACING_MEDIUM);

                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.form.render(ui, wants_duration);

                    ui.add_space(DesignSystem::SPACING_MEDIUM);
                    let button = egui::Button::new(
                        egui::RichText::new("🚀 Predict Delivery Status")
                            .size(15.0)
                            .color(DesignSystem::TEXT_PRIMARY),
                    )
                    .fill(DesignSystem::ACCENT_PRIMARY)
                    .min_size(egui::vec2(220.0, 36.0));

                    if ui.add(button).clicked() {
                        self.predict();
                    }
                });
            });

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                self.render_outcome(ui);
            });
    }
}
