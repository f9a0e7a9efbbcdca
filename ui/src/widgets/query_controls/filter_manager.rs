//! Filter row editor.

use biblio_business::{EntityField, Filter, FilterOperator};
use egui::{ComboBox, TextEdit, Ui};

/// Renders the filter rows: field combo, operator combo, value input, and a
/// remove button per row, plus an add button below.
pub fn filter_manager<F: EntityField>(ui: &mut Ui, id_salt: &str, filters: &mut Vec<Filter<F>>) {
    let mut remove_index: Option<usize> = None;

    for (index, filter) in filters.iter_mut().enumerate() {
        ui.horizontal(|ui| {
            ComboBox::from_id_salt((id_salt, "filter-field", index))
                .selected_text(filter.field.label())
                .show_ui(ui, |ui| {
                    for &field in F::ALL {
                        ui.selectable_value(&mut filter.field, field, field.label());
                    }
                });

            ComboBox::from_id_salt((id_salt, "filter-operator", index))
                .selected_text(filter.operator.label())
                .show_ui(ui, |ui| {
                    for operator in FilterOperator::ALL {
                        ui.selectable_value(&mut filter.operator, operator, operator.label());
                    }
                });

            ui.add(
                TextEdit::singleline(&mut filter.value)
                    .hint_text("Value")
                    .desired_width(160.0),
            );

            if ui.button("➖").on_hover_text("Remove filter").clicked() {
                remove_index = Some(index);
            }
        });
    }

    if let Some(index) = remove_index {
        filters.remove(index);
    }

    if ui.button("➕ Add Filter").clicked() {
        filters.push(Filter::new_row());
    }
}
