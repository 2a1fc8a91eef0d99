use clap::Parser;
use snapjot::application::{
    export_photo, init, list_entries, remove_entry, show_entry, CapturePipeline, ConfigService,
};
use snapjot::cli::{format_entry, format_entry_list, Cli, Commands};
use snapjot::domain::EntryId;
use snapjot::error::SnapjotError;
use snapjot::infrastructure::{
    CommandCamera, Config, ConfigPermissions, DirectoryGallery, EntryRepository, FileStore,
};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), SnapjotError> {
    match cli.command {
        Some(Commands::Init { path }) => init::init(&path),
        Some(Commands::Capture { caption }) => {
            let store = FileStore::discover()?;
            let config = Config::load_from_dir(store.root())?;

            let camera = CommandCamera::new(config.get_camera_command(), store.captures_dir());
            let gallery = DirectoryGallery::new(config.gallery_dir.clone());
            let permissions = ConfigPermissions::from_config(&config);
            let pipeline = CapturePipeline::new(&camera, &gallery, &permissions);

            let entry = pipeline.capture(caption.as_deref().unwrap_or(""))?;
            let id = entry.id.clone();

            let repository = EntryRepository::new(store);
            repository.add(repository.load(), entry);

            println!("Captured entry {}", id);
            Ok(())
        }
        Some(Commands::List { limit }) => {
            let store = FileStore::discover()?;
            let repository = EntryRepository::new(store);

            let collection = list_entries(&repository, limit);
            print!("{}", format_entry_list(&collection));
            if collection.is_empty() {
                println!();
            }
            Ok(())
        }
        Some(Commands::Show { id, photo_out }) => {
            let store = FileStore::discover()?;
            let repository = EntryRepository::new(store);

            let id = EntryId::from(id);
            match show_entry(&repository, &id) {
                Some(entry) => {
                    print!("{}", format_entry(&entry));
                    if let Some(out) = photo_out {
                        export_photo(&entry, &out)?;
                        println!("Photo written to {}", out.display());
                    }
                    Ok(())
                }
                None => Err(SnapjotError::Config(format!("No entry with id {}", id))),
            }
        }
        Some(Commands::Remove { id }) => {
            let store = FileStore::discover()?;
            let repository = EntryRepository::new(store);

            let id = EntryId::from(id);
            let (_, removed) = remove_entry(&repository, &id);

            if removed {
                println!("Removed entry {}", id);
            } else {
                println!("No entry with id {}", id);
            }
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let store = FileStore::discover()?;
            let service = ConfigService::new(store);

            if list {
                let config = service.list()?;
                println!("camera_command = {}", config.camera_command);
                println!(
                    "gallery_dir = {}",
                    config
                        .gallery_dir
                        .map(|p| p.display().to_string())
                        .unwrap_or_default()
                );
                println!("allow_camera = {}", config.allow_camera);
                println!("allow_gallery = {}", config.allow_gallery);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: snapjot config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: camera_command, gallery_dir, allow_camera, allow_gallery, created"
                );
                Ok(())
            }
        }
        None => {
            println!("snapjot - Local photo-note journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
