use crate::core::ColumnDefinition;

/// Sales pipeline stages used when the configuration lists no columns.
pub fn default_columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::new("todo", "Incoming"),
        ColumnDefinition::new("to-be-agreed", "To be agreed"),
        ColumnDefinition::new("in-progress", "In progress"),
        ColumnDefinition::new("produced", "Produced"),
    ]
}
