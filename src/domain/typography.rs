use super::catalog::{Catalog, CatalogId};

pub type FontId = CatalogId<Typography>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Typography {
    Sans,
    Serif,
    Mono,
}

impl Typography {
    pub fn font_stack(self) -> &'static str {
        match self {
            Typography::Sans => "system-ui, -apple-system, Segoe UI, Roboto, sans-serif",
            Typography::Serif => "Georgia, Cambria, Times New Roman, serif",
            Typography::Mono => "ui-monospace, SFMono-Regular, Menlo, Consolas, monospace",
        }
    }
}

impl Catalog for Typography {
    const ALL: &'static [Self] = &[Typography::Sans, Typography::Serif, Typography::Mono];

    fn as_str(self) -> &'static str {
        match self {
            Typography::Sans => "font-sans",
            Typography::Serif => "font-serif",
            Typography::Mono => "font-mono",
        }
    }
}

pub fn resolve_font_stack(id: &FontId) -> &'static str {
    id.known().unwrap_or(Typography::Sans).font_stack()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fonts_use_the_sans_stack() {
        assert_eq!(
            resolve_font_stack(&FontId::from("font-comic")),
            Typography::Sans.font_stack()
        );
        assert!(resolve_font_stack(&FontId::from("font-mono")).ends_with("monospace"));
    }
}
