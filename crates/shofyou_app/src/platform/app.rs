use std::collections::VecDeque;
use std::sync::{mpsc, Arc};
use std::time::Instant;

use anyhow::Context;
use shell_logging::{shell_debug, shell_info, shell_warn};
use shofyou_core::{
    update, AppState, AppViewModel, BridgeMessage, InstanceId, Msg, NavigationDecision,
};
use shofyou_engine::{
    file_input_hook, AlertPresenter, BrowserFactory, ConnectivityMonitor,
    ConnectivitySubscription, ExternalBrowser, LinkSource, MediaLibrary, ProbeSettings, SystemUi,
    TcpReachabilityProbe,
};

use super::browser::BrowserMount;
use super::effects::{EffectRunner, EffectTargets};
use crate::ui::{self, ProgressAnimator, ProgressFrame, ShellSurface, SurfaceCommand};
use crate::ShellConfig;

/// Native collaborators supplied by the host.
pub struct Platform {
    pub browsers: Box<dyn BrowserFactory>,
    pub external: Box<dyn ExternalBrowser>,
    pub system_ui: Box<dyn SystemUi>,
    pub alerts: Box<dyn AlertPresenter>,
    pub links: Box<dyn LinkSource>,
    pub media: Arc<dyn MediaLibrary>,
    pub surface: Box<dyn ShellSurface>,
}

/// Callbacks a mounted browser view reports, tagged by the host with the
/// view's instance id.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowserEvent {
    LoadStarted,
    LoadProgress(f64),
    LoadFinished,
    /// Raw string the page posted over the bridge.
    Message(String),
}

/// The shell's UI-thread driver.
///
/// Every entry point runs on the host's UI thread. Work that finishes
/// elsewhere (connectivity, deep links, the media picker) is queued and
/// folded in by [`ShellRuntime::pump`].
pub struct ShellRuntime {
    state: AppState,
    mount: BrowserMount,
    effects: EffectRunner,
    surface: Box<dyn ShellSurface>,
    monitor: ConnectivityMonitor,
    connectivity: Option<ConnectivitySubscription>,
    link_rx: mpsc::Receiver<String>,
    probe_settings: Option<ProbeSettings>,
    probe: Option<TcpReachabilityProbe>,
    animator: ProgressAnimator,
    last_frame: Option<ProgressFrame>,
}

impl ShellRuntime {
    pub fn new(config: ShellConfig, platform: Platform, monitor: ConnectivityMonitor) -> Self {
        let (link_tx, link_rx) = mpsc::channel();
        let injected_script = file_input_hook(&config.post_message);
        let mount = BrowserMount::new(platform.browsers, config.browser.clone(), injected_script);
        let effects = EffectRunner::new(
            EffectTargets {
                external: platform.external,
                system_ui: platform.system_ui,
                alerts: platform.alerts,
                links: platform.links,
                media: platform.media,
            },
            link_tx,
            monitor.clone(),
            config.picker.clone(),
            config.background_color.clone(),
            config.external_style.clone(),
        );

        Self {
            state: config.initial_state(),
            mount,
            effects,
            surface: platform.surface,
            monitor,
            connectivity: None,
            link_rx,
            probe_settings: config.probe,
            probe: None,
            animator: ProgressAnimator::new(Instant::now()),
            last_frame: None,
        }
    }

    /// Mounts the shell: window background, deep links, connectivity, and
    /// the first browser view.
    pub fn start(&mut self) -> anyhow::Result<()> {
        if self.state.is_started() {
            return Ok(());
        }
        shell_info!("Starting shell at {}", self.state.canonical_url());
        if let Some(settings) = self.probe_settings.clone() {
            let probe = TcpReachabilityProbe::spawn(settings, self.monitor.clone())
                .context("failed to start reachability probe")?;
            self.probe = Some(probe);
        }
        self.connectivity = Some(self.monitor.subscribe());
        // Known-offline launches go straight to the offline screen.
        self.dispatch(Msg::ConnectivityChanged(self.monitor.currently_connected()));
        self.dispatch(Msg::Started);
        Ok(())
    }

    /// Tears the shell down. No callbacks reach the old view afterwards.
    pub fn stop(&mut self) {
        if !self.state.is_started() {
            return;
        }
        shell_info!("Stopping shell");
        self.dispatch(Msg::Stopped);
        self.effects.unsubscribe_links();
        self.mount.unmount();
        if let Some(subscription) = self.connectivity.take() {
            subscription.remove();
        }
        if let Some(probe) = self.probe.take() {
            probe.stop();
        }
    }

    /// Retry button on the offline screen.
    pub fn retry(&mut self) {
        self.dispatch(Msg::RetryClicked);
    }

    /// Deep link opened while the shell is running, for hosts that bypass
    /// the link subscription.
    pub fn open_link(&mut self, url: &str) {
        self.receive_link(url.to_string());
    }

    /// Load-interception hook. Returns whether the view may load `url`.
    pub fn should_start_load(&mut self, instance: InstanceId, url: &str) -> bool {
        match self.state.guard().decide(url) {
            NavigationDecision::InApp => true,
            NavigationDecision::HandOff => {
                self.dispatch(Msg::ExternalNavigation {
                    instance,
                    url: url.to_string(),
                });
                false
            }
        }
    }

    pub fn on_browser_event(&mut self, instance: InstanceId, event: BrowserEvent) {
        let msg = match event {
            BrowserEvent::LoadStarted => Msg::LoadStarted { instance },
            BrowserEvent::LoadProgress(progress) => Msg::LoadProgress { instance, progress },
            BrowserEvent::LoadFinished => Msg::LoadFinished { instance },
            BrowserEvent::Message(raw) => match BridgeMessage::parse(&raw) {
                Ok(BridgeMessage::FileInputClick(request)) => {
                    Msg::FileInputClicked { instance, request }
                }
                Ok(BridgeMessage::Other(kind)) => {
                    shell_debug!("Ignoring bridge message of type {}", kind);
                    return;
                }
                Err(err) => {
                    shell_warn!("Dropping bridge message from view {}: {}", instance, err);
                    return;
                }
            },
        };
        self.dispatch(msg);
    }

    /// Folds in connectivity changes, deep links and picker results that
    /// arrived since the last call.
    pub fn pump(&mut self) {
        if let Some(connected) = self.connectivity.as_ref().and_then(|sub| sub.latest()) {
            self.dispatch(Msg::ConnectivityChanged(connected));
        }
        while let Ok(url) = self.link_rx.try_recv() {
            self.receive_link(url);
        }
        while let Some(msg) = self.effects.try_recv_picker() {
            self.dispatch(msg);
        }
    }

    /// Advances the progress bar animation. Returns whether more frames are due.
    pub fn tick(&mut self, now: Instant) -> bool {
        let frame = self.animator.frame(now);
        if self.last_frame != Some(frame) {
            self.surface.apply(SurfaceCommand::SetProgressBar(frame));
            self.last_frame = Some(frame);
        }
        self.animator.is_animating(now)
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn mounted_instance(&self) -> Option<InstanceId> {
        self.mount.mounted_instance()
    }

    /// Runs `msg` and every follow-up message through the update loop, then
    /// renders once if anything changed.
    pub fn dispatch(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            if !effects.is_empty() {
                inbox.extend(self.effects.run(effects, &mut self.mount));
            }
        }

        if self.state.consume_dirty() {
            let view = self.state.view();
            self.render(&view);
        }
    }

    fn receive_link(&mut self, url: String) {
        if !self.state.guard().is_in_app(&url) {
            shell_debug!("Ignoring deep link outside {}: {}", self.state.guard().domain(), url);
            return;
        }
        self.dispatch(Msg::DeepLinkReceived(url));
    }

    fn render(&mut self, view: &AppViewModel) {
        if self.state.is_started() {
            self.mount.reconcile(&view.screen);
        } else {
            self.mount.unmount();
        }
        for command in ui::render::render(view) {
            self.surface.apply(command);
        }
        self.animator.set_target(view.progress, Instant::now());
    }
}

impl Drop for ShellRuntime {
    fn drop(&mut self) {
        self.stop();
    }
}
