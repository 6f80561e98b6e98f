use shell_logging::{shell_error, shell_info, shell_warn};
use shofyou_core::{InstanceId, Screen};
use shofyou_engine::{BrowserFactory, BrowserOptions, BrowserSpec, BrowserView, PlatformError};

/// Keeps the single mounted browser view in line with the view model.
///
/// A different instance id always means dispose-then-create, never reuse.
pub struct BrowserMount {
    factory: Box<dyn BrowserFactory>,
    options: BrowserOptions,
    injected_script: String,
    mounted: Option<Box<dyn BrowserView>>,
    mounted_url: String,
}

impl BrowserMount {
    pub fn new(
        factory: Box<dyn BrowserFactory>,
        options: BrowserOptions,
        injected_script: String,
    ) -> Self {
        Self {
            factory,
            options,
            injected_script,
            mounted: None,
            mounted_url: String::new(),
        }
    }

    pub fn mounted_instance(&self) -> Option<InstanceId> {
        self.mounted.as_ref().map(|view| view.instance())
    }

    pub fn reconcile(&mut self, screen: &Screen) {
        let (instance, url) = match screen {
            Screen::Offline => {
                self.unmount();
                return;
            }
            Screen::Browser { instance, url } => (*instance, url),
        };

        if self.mounted_instance() != Some(instance) {
            self.unmount();
            self.mount(instance, url);
            return;
        }

        if self.mounted_url != *url {
            // Session URL changed under a live view (deep link).
            self.with_instance(instance, |view| view.navigate(url));
            self.mounted_url = url.clone();
        }
    }

    pub fn unmount(&mut self) {
        if let Some(mut view) = self.mounted.take() {
            let instance = view.instance();
            view.dispose();
            shell_info!("Disposed browser view {}", instance);
        }
        self.mounted_url.clear();
    }

    /// Runs `op` against the mounted view if it is `instance`. Returns false
    /// when that view is gone.
    pub fn with_instance(
        &mut self,
        instance: InstanceId,
        op: impl FnOnce(&mut dyn BrowserView) -> Result<(), PlatformError>,
    ) -> bool {
        match self.mounted.as_mut() {
            Some(view) if view.instance() == instance => {
                if let Err(err) = op(view.as_mut()) {
                    shell_warn!("Browser view {} operation failed: {}", instance, err);
                }
                true
            }
            _ => {
                shell_warn!("Browser view {} is no longer mounted", instance);
                false
            }
        }
    }

    fn mount(&mut self, instance: InstanceId, url: &str) {
        let spec = BrowserSpec {
            instance,
            url: url.to_string(),
            options: self.options.clone(),
            injected_script: self.injected_script.clone(),
        };
        match self.factory.create(spec) {
            Ok(view) => {
                shell_info!("Mounted browser view {} at {}", instance, url);
                self.mounted = Some(view);
                self.mounted_url = url.to_string();
            }
            Err(err) => shell_error!("Failed to create browser view {}: {}", instance, err),
        }
    }
}
