use std::sync::Arc;

use eframe::egui;
use lexicards::{
    core::{
        tasks::TaskManager,
        IgnoreList,
        Settings,
    },
    dictionary::{
        DefinitionResolver,
        DictionaryApiClient,
    },
    gui::LexicardsApp,
};
use log::{
    error,
    info,
    warn,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("lexicards=info"))
        .init();

    let settings = Settings::load();
    info!("Using dictionary endpoint {}", settings.api_base_url);

    let ignore_list = match IgnoreList::load() {
        Ok(list) => {
            info!("Loaded {} ignored words", list.terms().len());
            Some(list)
        }
        Err(e) => {
            warn!("Ignore list unavailable, ignored words will not be saved: {}", e);
            None
        }
    };

    let client = DictionaryApiClient::new(settings.api_base_url.clone(), settings.request_timeout())?;
    let resolver = Arc::new(DefinitionResolver::new(Arc::new(client)));

    let task_manager = TaskManager::new().inspect_err(|e| error!("{}", e))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Lexicards")
            .with_inner_size([960.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Lexicards",
        options,
        Box::new(move |cc| {
            Ok(Box::new(LexicardsApp::new(cc, settings, ignore_list, resolver, task_manager)))
        }),
    )?;

    Ok(())
}
