use slint::ComponentHandle;
use std::path::PathBuf;

use crate::controller::AppStateController;
use crate::input::{DragAndDropTarget, PlatformDragEvent, WinitDropAdapter};

fn startup_file_from_args() -> Option<PathBuf> {
    std::env::args_os()
        .skip(1)
        .filter_map(|arg| {
            let arg_str = arg.to_string_lossy();
            if arg_str.starts_with('-') {
                None
            } else {
                Some(PathBuf::from(arg))
            }
        })
        .find(|path| crate::file_utils::is_supported_file(path))
}

/// Routes winit file drag events through a [`DragAndDropTarget`].
fn setup_platform_window_hooks(app: &crate::AppWindow, controller: &AppStateController) {
    use i_slint_backend_winit::WinitWindowAccessor;
    use i_slint_backend_winit::{EventResult, winit::event::WindowEvent};

    let ui_handle = app.as_weak();
    let controller = controller.clone();
    let target = DragAndDropTarget::new(
        move |outcome| controller.update_drag_and_drop_state(outcome),
        move |hovering| {
            if let Some(ui) = ui_handle.upgrade() {
                ui.global::<crate::ViewState>().set_hovering(hovering);
            }
        },
    );
    let mut adapter = WinitDropAdapter::new();

    app.window().on_winit_window_event(move |_window, event| {
        let drag_event = match event {
            WindowEvent::HoveredFile(path) => PlatformDragEvent::Hovered(path.clone()),
            WindowEvent::HoveredFileCancelled => PlatformDragEvent::Cancelled,
            WindowEvent::DroppedFile(path) => PlatformDragEvent::Dropped(path.clone()),
            _ => return EventResult::Propagate,
        };
        adapter.handle(drag_event, &target);

        EventResult::Propagate
    });
}

pub fn configure_startup_opening(app: &crate::AppWindow, controller: &AppStateController) {
    setup_platform_window_hooks(app, controller);

    if let Some(path) = startup_file_from_args() {
        log::info!("Opening file from command line: {}", path.display());
        controller.open_file(path);
    }
}
