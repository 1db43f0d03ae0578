//! Table Columns
//!
//! Column descriptors for the opportunity table: four sortable data
//! columns and the two row-action buttons.

use crate::actions::RowAction;
use crate::config::ListConfig;
use crate::decorate::OpportunityRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Currency,
    Date,
    Button,
}

/// Data fields a column can display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnField {
    Name,
    StageName,
    Amount,
    CloseDate,
}

impl ColumnField {
    /// Field name as used by the host platform
    pub fn api_name(&self) -> &'static str {
        match self {
            ColumnField::Name => "Name",
            ColumnField::StageName => "StageName",
            ColumnField::Amount => "Amount",
            ColumnField::CloseDate => "CloseDate",
        }
    }
}

/// Button label source
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonLabel {
    Fixed(String),
    /// Read from the row's derived `action_label`
    FromRow,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonAttributes {
    pub label: ButtonLabel,
    pub action: RowAction,
    pub title: String,
    /// Disabled state read from the row's derived `action_disabled`
    pub disabled_from_row: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub label: Option<String>,
    pub field: Option<ColumnField>,
    pub kind: ColumnKind,
    pub sortable: bool,
    pub wrap_text: bool,
    pub initial_width: Option<u32>,
    pub button: Option<ButtonAttributes>,
}

impl ColumnDef {
    fn data(label: &str, field: ColumnField, kind: ColumnKind) -> Self {
        Self {
            label: Some(label.to_string()),
            field: Some(field),
            kind,
            sortable: true,
            wrap_text: false,
            initial_width: None,
            button: None,
        }
    }

    fn button(width: u32, attributes: ButtonAttributes) -> Self {
        Self {
            label: None,
            field: None,
            kind: ColumnKind::Button,
            sortable: false,
            wrap_text: false,
            initial_width: Some(width),
            button: Some(attributes),
        }
    }

    /// Cell text for data columns, `None` for buttons
    pub fn cell_text(&self, row: &OpportunityRow) -> Option<String> {
        let opportunity = &row.opportunity;
        let text = match self.field? {
            ColumnField::Name => opportunity.name.clone(),
            ColumnField::StageName => opportunity.stage_name.clone(),
            ColumnField::Amount => opportunity.amount.map(format_currency).unwrap_or_default(),
            ColumnField::CloseDate => opportunity
                .close_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        };
        Some(text)
    }

    /// Button label for this row, `None` for data columns
    pub fn button_label(&self, row: &OpportunityRow) -> Option<String> {
        self.button.as_ref().map(|button| match &button.label {
            ButtonLabel::Fixed(label) => label.clone(),
            ButtonLabel::FromRow => row.action_label.clone(),
        })
    }

    pub fn button_disabled(&self, row: &OpportunityRow) -> bool {
        self.button
            .as_ref()
            .map(|button| button.disabled_from_row && row.action_disabled)
            .unwrap_or(false)
    }
}

/// Two decimals with thousands separators, e.g. `$12,500.00`
fn format_currency(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{fraction}")
}

pub fn columns(config: &ListConfig) -> Vec<ColumnDef> {
    let labels = &config.labels;
    let mut name = ColumnDef::data("Name", ColumnField::Name, ColumnKind::Text);
    name.wrap_text = true;
    vec![
        name,
        ColumnDef::data("Stage", ColumnField::StageName, ColumnKind::Text),
        ColumnDef::data("Amount", ColumnField::Amount, ColumnKind::Currency),
        ColumnDef::data("Close Date", ColumnField::CloseDate, ColumnKind::Date),
        ColumnDef::button(
            150,
            ButtonAttributes {
                label: ButtonLabel::Fixed(labels.view_details.clone()),
                action: RowAction::ViewDetails,
                title: labels.view_details.clone(),
                disabled_from_row: false,
            },
        ),
        ColumnDef::button(
            200,
            ButtonAttributes {
                label: ButtonLabel::FromRow,
                action: RowAction::MarkClosed,
                title: labels.mark_closed.clone(),
                disabled_from_row: true,
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Opportunity;
    use chrono::NaiveDate;

    fn row() -> OpportunityRow {
        let opportunity = Opportunity::new("1", "Acme Deal", "Prospecting")
            .with_amount(1234567.5)
            .with_close_date(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        OpportunityRow {
            opportunity,
            action_label: "Loading...".to_string(),
            action_disabled: true,
        }
    }

    #[test]
    fn test_column_layout() {
        let cols = columns(&ListConfig::default());
        assert_eq!(cols.len(), 6);
        assert!(cols[..4].iter().all(|c| c.sortable && c.kind != ColumnKind::Button));
        assert!(cols[0].wrap_text);
        assert_eq!(cols[2].field.map(|f| f.api_name()), Some("Amount"));
        assert_eq!(cols[4].initial_width, Some(150));
        assert_eq!(cols[5].button.as_ref().map(|b| b.action), Some(RowAction::MarkClosed));
    }

    #[test]
    fn test_cell_text() {
        let cols = columns(&ListConfig::default());
        let row = row();
        assert_eq!(cols[0].cell_text(&row).as_deref(), Some("Acme Deal"));
        assert_eq!(cols[2].cell_text(&row).as_deref(), Some("$1,234,567.50"));
        assert_eq!(cols[3].cell_text(&row).as_deref(), Some("2024-06-30"));
        assert_eq!(cols[4].cell_text(&row), None);
    }

    #[test]
    fn test_buttons_read_row_state() {
        let cols = columns(&ListConfig::default());
        let row = row();
        assert_eq!(cols[4].button_label(&row).as_deref(), Some("View Details"));
        assert!(!cols[4].button_disabled(&row));
        assert_eq!(cols[5].button_label(&row).as_deref(), Some("Loading..."));
        assert!(cols[5].button_disabled(&row));
    }

    #[test]
    fn test_small_and_negative_amounts() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(-42.1), "-$42.10");
    }
}
