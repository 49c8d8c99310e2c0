//! Order details form (input collector)
//!
//! Every control is range- or domain-bounded, so the form cannot produce an
//! out-of-range record: sliders clamp the numeric fields, selectors only
//! offer the closed enum levels.

use crate::domain::order::{
    AgentAge, AgentRating, Area, Category, DeliveryDuration, OrderFeatures, Traffic, Vehicle,
    Weather,
};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub struct OrderForm {
    pub agent_age: u32,
    pub agent_rating: f32,
    pub weather: Weather,
    pub traffic: Traffic,
    pub vehicle: Vehicle,
    pub area: Area,
    pub category: Category,
    pub duration_minutes: u32,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            agent_age: 30,
            agent_rating: 4.5,
            weather: Weather::Sunny,
            traffic: Traffic::Low,
            vehicle: Vehicle::Motorcycle,
            area: Area::Urban,
            category: Category::Clothing,
            duration_minutes: 120,
        }
    }
}

fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(14.0)
            .color(DesignSystem::TEXT_SECONDARY),
    );
}

fn select_level<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    current: &mut T,
    all: &[T],
    text: impl Fn(&T) -> &'static str,
) {
    field_label(ui, label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(text(current))
        .width(220.0)
        .show_ui(ui, |ui| {
            for option in all {
                ui.selectable_value(current, *option, text(option));
            }
        });
    ui.add_space(12.0);
}

impl OrderForm {
    /// The duration control is shown exactly when the loaded encoder was
    /// fitted with the Duration column.
    pub fn render(&mut self, ui: &mut egui::Ui, with_duration: bool) {
        ui.spacing_mut().slider_width = 220.0;

        field_label(ui, "Agent Age");
        ui.add(egui::Slider::new(&mut self.agent_age, 18..=70));
        ui.add_space(12.0);

        field_label(ui, "Agent Rating");
        ui.add(
            egui::Slider::new(&mut self.agent_rating, 1.0..=5.0)
                .step_by(0.1)
                .fixed_decimals(1),
        );
        ui.add_space(12.0);

        select_level(ui, "weather", "Weather", &mut self.weather, Weather::ALL, |v| {
            v.as_str()
        });
        select_level(ui, "traffic", "Traffic", &mut self.traffic, Traffic::ALL, |v| {
            v.as_str()
        });
        select_level(ui, "vehicle", "Vehicle", &mut self.vehicle, Vehicle::ALL, |v| {
            v.as_str()
        });
        select_level(ui, "area", "Area", &mut self.area, Area::ALL, |v| v.as_str());
        select_level(
            ui,
            "category",
            "Category",
            &mut self.category,
            Category::ALL,
            |v| v.as_str(),
        );

        if with_duration {
            field_label(ui, "Estimated Duration");
            ui.add(egui::Slider::new(&mut self.duration_minutes, 10..=300).suffix(" min"));
            ui.add_space(12.0);
        }
    }

    /// Builds the immutable record for one prediction. The constructors
    /// re-check the ranges the controls already enforce.
    pub fn to_record(&self, with_duration: bool) -> anyhow::Result<OrderFeatures> {
        Ok(OrderFeatures {
            agent_age: AgentAge::new(self.agent_age)?,
            agent_rating: AgentRating::new(self.agent_rating as f64)?,
            weather: self.weather,
            traffic: self.traffic,
            vehicle: self.vehicle,
            area: self.area,
            category: self.category,
            duration: if with_duration {
                Some(DeliveryDuration::new(self.duration_minutes)?)
            } else {
                None
            },
        })
    }
}
