//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
    script::{ScriptCommand, ScriptLine},
};
use crate::engine::Dashboard;
use crate::notifications::NotificationId;
use std::error::Error;
use std::io::{self, Write};
use std::time::Instant;

/// Replays script commands against a dashboard and writes a transcript.
///
/// After every command the transcript shows new notifications, the modal if
/// its content changed, and activity events that pass the log filter. The
/// modal counts as drawn once it has been written, so confirmations become
/// answerable from the next command on.
pub struct Replay<'a, W: Write> {
    dashboard: &'a mut Dashboard,
    out: W,
    last_notification: Option<NotificationId>,
    shown_modal: Option<(u64, Vec<String>)>,
}

impl<'a, W: Write> Replay<'a, W> {
    pub fn new(dashboard: &'a mut Dashboard, out: W) -> Self {
        let last_notification = dashboard.services().notifications.last_id();
        Self {
            dashboard,
            out,
            last_notification,
            shown_modal: None,
        }
    }

    pub async fn run(&mut self, script: &[ScriptLine]) -> io::Result<()> {
        for line in script {
            writeln!(self.out, "> {}", line)?;
            self.apply(&line.command).await?;
            self.dashboard.tick(Instant::now());
            self.report()?;
        }
        Ok(())
    }

    async fn apply(&mut self, command: &ScriptCommand) -> io::Result<()> {
        let now = Instant::now();
        let dash = &mut *self.dashboard;
        match command {
            ScriptCommand::Order { action, id } => dash.dispatch_order_action(*action, id, now),
            ScriptCommand::Listing { action, id } => {
                dash.dispatch_listing_action(*action, id, now)
            }
            ScriptCommand::Chart(period) => dash.switch_chart_period(*period, now),
            ScriptCommand::Quick(action) => dash.run_quick_action(*action, now),
            ScriptCommand::Notify { severity, message } => {
                dash.push_notification(message.as_str(), *severity, now);
            }
            ScriptCommand::Choose(choice) => {
                if !dash.choose(*choice, now) {
                    writeln!(self.out, "  (no confirmation waiting)")?;
                }
            }
            ScriptCommand::Backdrop => {
                dash.click_backdrop();
            }
            ScriptCommand::Close => dash.close_modal(),
            ScriptCommand::Type(text) => {
                let text = text.clone();
                dash.edit_form(move |form| {
                    let mut changed = false;
                    for c in text.chars() {
                        changed |= form.insert_char(c);
                    }
                    changed
                });
            }
            ScriptCommand::NextField => {
                dash.edit_form(|form| {
                    form.focus = form.focus.next();
                    false
                });
            }
            ScriptCommand::Cycle => {
                dash.edit_form(|form| form.cycle_condition(true));
            }
            ScriptCommand::Submit => {
                dash.submit_listing_form(now);
            }
            ScriptCommand::Dismiss => {
                dash.dismiss_latest(now);
            }
            ScriptCommand::Wait(duration) => tokio::time::sleep(*duration).await,
            ScriptCommand::Dump => self.dump()?,
        }
        Ok(())
    }

    fn report(&mut self) -> io::Result<()> {
        let services = self.dashboard.services();
        for n in services.notifications.since(self.last_notification) {
            writeln!(self.out, "  notification {}: {}", n.severity, n.message)?;
        }
        self.last_notification = services.notifications.last_id();

        match self.dashboard.modal().current() {
            Some(open) => {
                let shown = (self.dashboard.modal().revision(), open.content.text_lines());
                if self.shown_modal.as_ref() != Some(&shown) {
                    writeln!(self.out, "  modal \"{}\"", open.title)?;
                    if let Some(form) = open.content.listing_form() {
                        writeln!(self.out, "    (focus: {})", form.focus.label())?;
                    }
                    for text in &shown.1 {
                        writeln!(self.out, "    {}", text)?;
                    }
                    self.shown_modal = Some(shown);
                }
            }
            None => {
                if self.shown_modal.take().is_some() {
                    writeln!(self.out, "  modal closed")?;
                }
            }
        }
        self.dashboard.attach_modal();

        for event in self.dashboard.drain_events() {
            if event.should_display() {
                writeln!(self.out, "  {}", event)?;
            }
        }
        Ok(())
    }

    fn dump(&mut self) -> io::Result<()> {
        let services = self.dashboard.services();
        writeln!(self.out, "  orders:")?;
        for row in &services.surface.order_rows {
            writeln!(
                self.out,
                "    {} [{}] {}",
                row.order_id, row.status_label, row.action
            )?;
        }
        writeln!(self.out, "  listings:")?;
        for row in &services.surface.listing_rows {
            writeln!(self.out, "    {} {}", row.listing_id, row.title)?;
        }
        let chart = self.dashboard.chart();
        let bars: Vec<String> = chart
            .slots()
            .iter()
            .flatten()
            .map(|bar| format!("{}={:.1}px", bar.value, bar.height_px))
            .collect();
        writeln!(self.out, "  chart {}: {}", chart.active(), bars.join(" "))?;
        Ok(())
    }
}

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Console logging
/// 2. Script replay with a transcript on stdout
/// 3. Ctrl+C shutdown handling
pub async fn run_headless_mode(
    mut session: SessionData,
    script: Vec<ScriptLine>,
) -> Result<(), Box<dyn Error>> {
    crate::logging::init_console_logger();
    print_session_starting("headless", &session.dataset);

    let stdout = io::stdout();
    let mut replay = Replay::new(&mut session.dashboard, stdout);
    tokio::select! {
        result = replay.run(&script) => result?,
        _ = tokio::signal::ctrl_c() => {}
    }

    print_session_shutdown();
    print_session_exit_success();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::MemoryDraftStorage;
    use crate::records::Period;
    use crate::records::seed::reference_data;
    use crate::session::script::parse_script;

    fn dashboard() -> Dashboard {
        Dashboard::new(
            reference_data(),
            Box::new(MemoryDraftStorage::default()),
            Period::Week,
            Instant::now(),
        )
        .unwrap()
    }

    async fn transcript(dash: &mut Dashboard, lines: &[&str]) -> String {
        let script = parse_script(lines.iter().copied()).unwrap();
        let mut out = Vec::new();
        Replay::new(dash, &mut out).run(&script).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    // A confirmation becomes answerable once it has been written out.
    async fn test_duplicate_then_confirm() {
        let mut dash = dashboard();
        let out = transcript(&mut dash, &["listing duplicate LST-001", "confirm", "dump"]).await;

        assert!(out.contains("  modal \"Duplicate Listing\""));
        assert!(out.contains("notification success: Listing duplicated: Mega Man 2 (NES)"));
        assert!(out.contains("LST-004 Mega Man 2 (NES) (Copy)"));
        assert!(out.contains("  modal closed"));
        assert_eq!(dash.services().store.listings().len(), 4);
    }

    #[tokio::test]
    async fn test_confirm_without_dialog_is_reported() {
        let mut dash = dashboard();
        let out = transcript(&mut dash, &["confirm"]).await;
        assert!(out.contains("(no confirmation waiting)"));
    }

    #[tokio::test]
    async fn test_form_typing_is_shown() {
        let mut dash = dashboard();
        let out = transcript(
            &mut dash,
            &["listing edit LST-002", "tab", "type 5", "submit"],
        )
        .await;
        assert!(out.contains("(focus: Price ($))"));
        assert!(out.contains("Price ($): 44.995"));
        assert!(out.contains("notification info: Listing changes submitted"));
    }

    #[tokio::test]
    async fn test_dump_shows_chart_heights() {
        let mut dash = dashboard();
        let out = transcript(&mut dash, &["chart month", "dump"]).await;
        assert!(out.contains("chart month: 450=82.3px"));
        assert!(out.contains("820=150.0px"));
        assert!(out.contains("ORD-12345 [Paid] Process"));
    }
}
