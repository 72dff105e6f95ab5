//! Options shared by the file-backed stores

/// How a store writes collection files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Indent the JSON output
    pub pretty: bool,
    /// Create missing parent directories on export
    pub create_parent_dirs: bool,
}

impl StoreOptions {
    pub fn new() -> Self {
        StoreOptions {
            pretty: true,
            create_parent_dirs: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_create_parent_dirs(mut self, create: bool) -> Self {
        self.create_parent_dirs = create;
        self
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self::new()
    }
}
