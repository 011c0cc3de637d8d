use dioxus::prelude::*;

use crate::core::platform;
use crate::export::{perform_pdf_export, ExportTable};
use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working,
    Done(String),
    Error(String),
}

/// Renders the current metrics to PDF and reports where it went.
#[component]
pub fn ExportButton(table: ExportTable) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working => Some(("export__status".to_string(), t!("export-working"))),
        ExportStatus::Done(message) => Some((
            "export__status export__status--success".to_string(),
            message.clone(),
        )),
        ExportStatus::Error(err) => Some((
            "export__status export__status--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let on_export = {
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working);
            let table = table.clone();
            platform::spawn_future(async move {
                match perform_pdf_export(table).await {
                    Ok(message) => status_signal.set(ExportStatus::Done(message)),
                    Err(err) => {
                        tracing::error!("PDF export failed: {err}");
                        status_signal.set(ExportStatus::Error(err));
                    }
                }
                busy_signal.set(false);
            });
        }
    };

    rsx! {
        div { class: "export",
            button {
                r#type: "button",
                class: "button button--primary",
                disabled: busy(),
                onclick: on_export,
                {t!("action-export-pdf")}
            }
            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}
