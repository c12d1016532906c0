/// Performs a full-page navigation that replaces the current history entry.
pub trait Navigator {
    fn replace(&self, path: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn replace(&self, path: &str) {
        let result = super::storage::window()
            .and_then(|win| win.location().replace(path).map_err(|_| path.to_string()));
        if let Err(err) = result {
            log::error!("navigation to {} failed: {}", path, err);
        }
    }
}

/// Navigator for host rendering, where there is no browser location.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostNavigator;

impl Navigator for HostNavigator {
    fn replace(&self, path: &str) {
        log::debug!("navigation to {} requested outside the browser", path);
    }
}
