use limelight_highlight::HighlightedBlock;

/// Writing-sample panel: a highlighted code block rendered token by
/// token with its theme colors.
pub struct CodePanel {
    title: String,
    block: HighlightedBlock,
}

impl CodePanel {
    pub fn new(block: HighlightedBlock) -> Self {
        let title = match &block.language {
            Some(lang) => format!("Writing — {lang}"),
            None => "Writing".to_string(),
        };
        Self { title, block }
    }

    pub fn show(&self, ctx: &egui::Context) {
        egui::Window::new(&self.title)
            .default_open(true)
            .show(ctx, |ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                for line in &self.block.lines {
                    ui.horizontal(|ui| {
                        // Keep empty lines from collapsing to zero height
                        if line.tokens.iter().all(|t| t.text.is_empty()) {
                            ui.label(egui::RichText::new(" ").monospace());
                            return;
                        }
                        for token in &line.tokens {
                            let [r, g, b] = token.color;
                            ui.label(
                                egui::RichText::new(&token.text)
                                    .monospace()
                                    .color(egui::Color32::from_rgb(r, g, b)),
                            );
                        }
                    });
                }
            });
    }
}
