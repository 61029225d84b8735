//! Application update handlers - export lifecycle, printing, quit

use crate::commands::Cmd;
use crate::export::ExportJob;
use crate::messages::AppMsg;
use crate::model::{AppModel, Notice};

pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Export { path } => {
            if model.ui.is_exporting {
                model
                    .ui
                    .notify(Notice::warning("An export is already in progress"));
                return None;
            }

            let target = model.config.export_path_for(path.as_deref());
            let job = ExportJob {
                snapshot: model.snapshot(),
                theme: model.theme.clone(),
                font_path: model.config.font_path.clone(),
                scale: model.config.export_scale,
                path: target.clone(),
            };

            model.ui.is_exporting = true;
            model
                .ui
                .set_status(format!("Exporting to {}...", target.display()));
            Some(Cmd::Export(Box::new(job)))
        }

        AppMsg::ExportCompleted(result) => {
            model.ui.is_exporting = false;
            match result {
                Ok(path) => {
                    model
                        .ui
                        .notify(Notice::info(format!("Saved image to {}", path.display())));
                    model.ui.set_status(format!("Exported {}", path.display()));
                    model.ui.last_export = Some(path);
                }
                Err(e) => {
                    model
                        .ui
                        .notify(Notice::error(format!("Failed to save image: {}", e)));
                    model.ui.set_status("Export failed");
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Show { json } => Some(if json {
            Cmd::PrintJson
        } else {
            Cmd::PrintTable
        }),

        AppMsg::Help => Some(Cmd::PrintHelp),

        AppMsg::Quit => Some(Cmd::Quit),
    }
}
