/// Display settings the screens need from whatever configuration is loaded.
pub trait DisplaySettings {
    fn title(&self) -> &str;
    fn currency_symbol(&self) -> &str;
}

/// Built-in settings used when no configuration file is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDisplay;

impl DisplaySettings for DefaultDisplay {
    fn title(&self) -> &str {
        "Christoffel's Kitchen"
    }

    fn currency_symbol(&self) -> &str {
        "R"
    }
}
