use std::sync::mpsc;
use std::sync::Arc;

use shell_logging::{shell_debug, shell_info, shell_warn};
use shofyou_core::{Effect, Msg, PickerOptions};
use shofyou_engine::{
    file_selected_script, AlertPresenter, ConnectivityMonitor, ExternalBrowser,
    ExternalBrowserStyle, LinkSource, LinkSubscription, MediaLibrary, PickerEvent, PickerHandle,
    SystemUi,
};

use super::browser::BrowserMount;

/// Collaborators the effect runner talks to.
pub struct EffectTargets {
    pub external: Box<dyn ExternalBrowser>,
    pub system_ui: Box<dyn SystemUi>,
    pub alerts: Box<dyn AlertPresenter>,
    pub links: Box<dyn LinkSource>,
    pub media: Arc<dyn MediaLibrary>,
}

pub struct EffectRunner {
    external: Box<dyn ExternalBrowser>,
    system_ui: Box<dyn SystemUi>,
    alerts: Box<dyn AlertPresenter>,
    links: Box<dyn LinkSource>,
    link_tx: mpsc::Sender<String>,
    link_subscription: Option<Box<dyn LinkSubscription>>,
    picker: PickerHandle,
    monitor: ConnectivityMonitor,
    background_color: String,
    external_style: ExternalBrowserStyle,
}

impl EffectRunner {
    pub fn new(
        targets: EffectTargets,
        link_tx: mpsc::Sender<String>,
        monitor: ConnectivityMonitor,
        picker_options: PickerOptions,
        background_color: String,
        external_style: ExternalBrowserStyle,
    ) -> Self {
        Self {
            external: targets.external,
            system_ui: targets.system_ui,
            alerts: targets.alerts,
            links: targets.links,
            link_tx,
            link_subscription: None,
            picker: PickerHandle::new(targets.media, picker_options),
            monitor,
            background_color,
            external_style,
        }
    }

    /// Performs `effects` in order. Returns messages produced synchronously,
    /// to be fed back into the update loop.
    pub fn run(&mut self, effects: Vec<Effect>, mount: &mut BrowserMount) -> Vec<Msg> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::ApplySystemBackground => {
                    if let Err(err) = self.system_ui.set_background_color(&self.background_color)
                    {
                        shell_warn!("Failed to set window background: {}", err);
                    }
                }
                Effect::SubscribeDeepLinks => {
                    if self.link_subscription.is_none() {
                        self.link_subscription =
                            Some(self.links.subscribe(self.link_tx.clone()));
                        shell_debug!("Subscribed to deep links");
                    }
                }
                Effect::UnsubscribeDeepLinks => self.unsubscribe_links(),
                Effect::ResolveInitialUrl => {
                    follow_ups.push(Msg::InitialUrlResolved(self.links.initial_url()));
                }
                Effect::RefreshConnectivity => {
                    follow_ups.push(Msg::ConnectivityChanged(
                        self.monitor.currently_connected(),
                    ));
                }
                Effect::StopLoading { instance } => {
                    mount.with_instance(instance, |view| view.stop_loading());
                }
                Effect::OpenExternal { url } => {
                    shell_info!("Handing off {} to the system browser", url);
                    if let Err(err) = self.external.open(&url, &self.external_style) {
                        shell_warn!("{}", err);
                    }
                }
                Effect::RequestFileSelection {
                    request_id,
                    instance,
                    request,
                } => {
                    shell_info!(
                        "File selection {} for view {} (accept={:?}, multiple={})",
                        request_id,
                        instance,
                        request.accept,
                        request.multiple
                    );
                    if let Err(err) = self.picker.request(request_id) {
                        shell_warn!("File selection {} not started: {}", request_id, err);
                        follow_ups.push(Msg::PickerCancelled { request_id });
                    }
                }
                Effect::ShowAlert { message } => self.alerts.alert(&message),
                Effect::DispatchFileSelected { instance, files } => {
                    let script = match file_selected_script(&files) {
                        Ok(script) => script,
                        Err(err) => {
                            shell_warn!("Could not encode selected files: {}", err);
                            continue;
                        }
                    };
                    let delivered =
                        mount.with_instance(instance, |view| view.inject_script(&script));
                    if delivered {
                        shell_info!("Delivered {} file(s) to view {}", files.len(), instance);
                    }
                }
            }
        }
        follow_ups
    }

    /// Next finished picker round trip, mapped to a core message.
    pub fn try_recv_picker(&self) -> Option<Msg> {
        let event = self.picker.try_recv()?;
        Some(match event {
            PickerEvent::PermissionDenied { request_id } => Msg::PermissionDenied { request_id },
            PickerEvent::Picked { request_id, assets } => Msg::FilesPicked { request_id, assets },
            PickerEvent::Cancelled { request_id } => Msg::PickerCancelled { request_id },
            PickerEvent::Failed { request_id, error } => {
                shell_warn!("File selection {} failed: {}", request_id, error);
                Msg::PickerCancelled { request_id }
            }
        })
    }

    pub fn unsubscribe_links(&mut self) {
        if let Some(subscription) = self.link_subscription.take() {
            subscription.remove();
            shell_debug!("Unsubscribed from deep links");
        }
    }
}
