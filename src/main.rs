use eframe::egui;
use wordlens::gui::WordlensApp;

fn main() -> eframe::Result {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 820.0])
            .with_min_inner_size([420.0, 480.0])
            .with_title("Wordlens"),
        ..Default::default()
    };

    eframe::run_native("wordlens", native_options, Box::new(|cc| Ok(Box::new(WordlensApp::new(cc)))))
}
