use shofyou_core::{AppViewModel, Screen, StatusBarView};

use super::constants::*;
use super::ProgressFrame;

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    ShowOfflineScreen(OfflineScreen),
    /// Hide native chrome and let the mounted browser view fill the window.
    ShowBrowser,
    SetStatusBar(StatusBarView),
    SetProgressBar(ProgressFrame),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfflineScreen {
    pub icon: &'static str,
    pub icon_size: u32,
    pub icon_color: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub retry_label: &'static str,
    pub button_color: &'static str,
}

impl Default for OfflineScreen {
    fn default() -> Self {
        Self {
            icon: OFFLINE_ICON,
            icon_size: OFFLINE_ICON_SIZE,
            icon_color: OFFLINE_ICON_COLOR,
            title: OFFLINE_TITLE,
            message: OFFLINE_MESSAGE,
            retry_label: RETRY_LABEL,
            button_color: ACCENT_COLOR,
        }
    }
}

/// Surface commands for a view model. The progress bar is driven by ticks.
pub fn render(view: &AppViewModel) -> Vec<SurfaceCommand> {
    let screen = match view.screen {
        Screen::Offline => SurfaceCommand::ShowOfflineScreen(OfflineScreen::default()),
        Screen::Browser { .. } => SurfaceCommand::ShowBrowser,
    };
    vec![SurfaceCommand::SetStatusBar(view.status_bar), screen]
}

#[cfg(test)]
mod tests {
    use super::*;
    use shofyou_core::{update, AppState, Msg, StatusBarStyle};

    #[test]
    fn offline_view_renders_offline_screen() {
        let (state, _) = update(AppState::new(), Msg::ConnectivityChanged(false));

        let commands = render(&state.view());

        assert_eq!(
            commands,
            vec![
                SurfaceCommand::SetStatusBar(StatusBarView {
                    style: StatusBarStyle::Dark,
                    translucent: false,
                }),
                SurfaceCommand::ShowOfflineScreen(OfflineScreen::default()),
            ]
        );
    }

    #[test]
    fn online_view_renders_browser() {
        let commands = render(&AppState::new().view());
        assert_eq!(commands.last(), Some(&SurfaceCommand::ShowBrowser));
        assert!(matches!(
            commands.first(),
            Some(SurfaceCommand::SetStatusBar(StatusBarView {
                translucent: true,
                ..
            }))
        ));
    }
}
