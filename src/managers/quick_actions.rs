//! Quick action tools

use crate::consts::cli_consts::quick_actions::export_delay;
use crate::engine::DashboardServices;
use crate::engine::scheduler::{ScheduledTask, Scheduler};
use crate::events::{DashboardEvent, Source};
use crate::modal::{ModalContent, ModalController, SelectField, ToolPanel};
use crate::notifications::Severity;
use chrono::{Local, NaiveDate};

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display, strum::EnumString, strum::EnumIter)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum QuickAction {
    AddPhotos,
    BulkEdit,
    ShippingLabels,
    CreateDiscount,
    ExportData,
}

impl QuickAction {
    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::AddPhotos => "Add Photos",
            QuickAction::BulkEdit => "Bulk Edit",
            QuickAction::ShippingLabels => "Shipping Labels",
            QuickAction::CreateDiscount => "Create Discount",
            QuickAction::ExportData => "Export Data",
        }
    }
}

/// File name offered by a finished export, e.g. `sales_report_feb_2025.csv`.
pub fn export_filename(today: NaiveDate) -> String {
    format!(
        "sales_report_{}.csv",
        today.format("%b_%Y").to_string().to_lowercase()
    )
}

#[derive(Debug, Default, Clone, Copy)]
pub struct QuickActions;

impl QuickActions {
    pub fn handle(
        &self,
        action: QuickAction,
        services: &mut DashboardServices,
        modal: &mut ModalController<DashboardServices>,
        scheduler: &mut Scheduler,
    ) {
        let (notice, title, panel) = match action {
            QuickAction::AddPhotos => (
                "Photo upload tool opened",
                "Add Photos",
                ToolPanel {
                    intro: vec![
                        "Drag & drop photos here or click to browse".to_string(),
                        "Maximum 10 photos, 10MB each".to_string(),
                    ],
                    button: "Upload Photos".to_string(),
                    ..ToolPanel::default()
                },
            ),
            QuickAction::BulkEdit => (
                "Bulk edit tool opened",
                "Bulk Edit Listings",
                ToolPanel {
                    intro: vec!["Select listings to edit:".to_string()],
                    checklist: services
                        .store
                        .listings()
                        .iter()
                        .map(|l| l.item.clone())
                        .collect(),
                    selects: vec![SelectField::new(
                        "Action",
                        &[
                            "Change Price",
                            "Change Quantity",
                            "Change Condition",
                            "Remove Listings",
                        ],
                    )],
                    button: "Apply to Selected".to_string(),
                },
            ),
            QuickAction::ShippingLabels => (
                "Shipping label generator opened",
                "Print Shipping Labels",
                ToolPanel {
                    intro: vec!["Select orders to print labels for:".to_string()],
                    checklist: services
                        .store
                        .orders()
                        .iter()
                        .map(|o| format!("#{} - {}", o.id, o.buyer))
                        .collect(),
                    selects: vec![SelectField::new("Carrier", &["USPS", "UPS", "FedEx"])],
                    button: "Generate Labels".to_string(),
                },
            ),
            QuickAction::CreateDiscount => (
                "Discount creator opened",
                "Create Discount",
                ToolPanel {
                    selects: vec![
                        SelectField::new(
                            "Discount Type",
                            &["Percentage Off", "Fixed Amount Off", "Buy One Get One"],
                        ),
                        SelectField::new("Value", &["20"]),
                        SelectField::new(
                            "Apply to",
                            &["All Listings", "Selected Listings", "Specific Category"],
                        ),
                    ],
                    button: "Create Discount".to_string(),
                    ..ToolPanel::default()
                },
            ),
            QuickAction::ExportData => {
                services.notify("Preparing data export...", Severity::Info);
                scheduler.schedule(
                    services.now() + export_delay(),
                    ScheduledTask::ExportComplete,
                );
                services.record(DashboardEvent::display(
                    Source::QuickActions,
                    "Data export scheduled",
                ));
                return;
            }
        };

        services.notify(notice, Severity::Info);
        modal.show(title, ModalContent::Tool(panel));
        services.record(DashboardEvent::display(
            Source::QuickActions,
            format!("Opened {}", action.label()),
        ));
    }

    /// Runs a task the scheduler reported as due.
    pub fn complete(
        &self,
        task: ScheduledTask,
        services: &mut DashboardServices,
        modal: &mut ModalController<DashboardServices>,
    ) {
        match task {
            ScheduledTask::ExportComplete => {
                let filename = export_filename(Local::now().date_naive());
                services.notify("Data exported successfully!", Severity::Success);
                modal.show(
                    "Export Complete",
                    ModalContent::Tool(ToolPanel {
                        intro: vec![
                            "Your data has been exported.".to_string(),
                            format!("Filename: {}", filename),
                        ],
                        button: "Download File".to_string(),
                        ..ToolPanel::default()
                    }),
                );
                services.record(DashboardEvent::display(
                    Source::QuickActions,
                    format!("Export ready: {}", filename),
                ));
            }
        }
    }
}
