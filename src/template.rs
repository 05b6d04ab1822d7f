use crate::convert::ConvertOptions;

/// Named conversion presets. The historical pipeline selected per-image
/// behavior by loading external template code; here a template is plain
/// configuration chosen explicitly by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TemplateKind {
    /// Honor the `reverse` flag on palette cycles.
    #[default]
    Standard,
    /// Match the original generator: `reverse` is ignored.
    Legacy,
}

impl TemplateKind {
    pub fn options(self) -> ConvertOptions {
        match self {
            Self::Standard => ConvertOptions::default(),
            Self::Legacy => ConvertOptions {
                honor_reverse: false,
                ..ConvertOptions::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_honors_reverse() {
        assert!(TemplateKind::Standard.options().honor_reverse);
    }

    #[test]
    fn legacy_ignores_reverse_but_keeps_other_defaults() {
        let opts = TemplateKind::Legacy.options();
        assert!(!opts.honor_reverse);
        assert!(opts.flip_vertical);
        assert_eq!(opts.max_vertices, crate::batch::MAX_VERTICES);
    }
}
