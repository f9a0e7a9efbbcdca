//! Sort row editor.

use biblio_business::{EntityField, Sort, SortOrder};
use egui::{ComboBox, Ui};

/// Renders the sort rows: field combo, order combo, and a remove button per
/// row, plus an add button below.
pub fn sort_manager<F: EntityField>(ui: &mut Ui, id_salt: &str, sorts: &mut Vec<Sort<F>>) {
    let mut remove_index: Option<usize> = None;

    for (index, sort) in sorts.iter_mut().enumerate() {
        ui.horizontal(|ui| {
            ComboBox::from_id_salt((id_salt, "sort-field", index))
                .selected_text(sort.field.label())
                .show_ui(ui, |ui| {
                    for &field in F::ALL {
                        ui.selectable_value(&mut sort.field, field, field.label());
                    }
                });

            ComboBox::from_id_salt((id_salt, "sort-order", index))
                .selected_text(sort.order.label())
                .show_ui(ui, |ui| {
                    for order in SortOrder::ALL {
                        ui.selectable_value(&mut sort.order, order, order.label());
                    }
                });

            if ui.button("➖").on_hover_text("Remove sort").clicked() {
                remove_index = Some(index);
            }
        });
    }

    if let Some(index) = remove_index {
        sorts.remove(index);
    }

    if ui.button("➕ Add Sort").clicked() {
        sorts.push(Sort::new_row());
    }
}
