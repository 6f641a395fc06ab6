mod config;
mod logging;
mod picker;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use config::AppConfig;
use photo_sorter_adapters::{
    present_catalog, present_catalog_json, ImageCrateDecoder, LocalFileSystem,
};
use photo_sorter_application::{
    ApplicationError, ApplicationService, ChooseFolderCommand, FolderPicker, LoadCatalogCommand,
    SessionStart,
};
use picker::RfdFolderPicker;
use tracing::{error, info, warn};

fn main() -> ExitCode {
    let config = AppConfig::from_env();
    logging::init_logging(&config.log_filter);
    let args: Vec<String> = std::env::args().collect();

    let service = build_application_service();
    let command = parse_command(&args);
    match run_command(command, &service, &RfdFolderPicker, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            error!("{msg}");
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_application_service() -> ApplicationService {
    ApplicationService::new(Box::new(LocalFileSystem), Box::new(ImageCrateDecoder))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Ui { folder: Option<PathBuf> },
    Scan { folder: PathBuf, json: bool },
    Help,
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    if args.len() <= 1 {
        return Ok(Command::Ui { folder: None });
    }

    match args[1].as_str() {
        "ui" => match args.len() {
            2 => Ok(Command::Ui { folder: None }),
            3 => Ok(Command::Ui {
                folder: Some(PathBuf::from(&args[2])),
            }),
            _ => Err(CommandError::Usage("too many arguments for ui".to_string())),
        },
        "scan" => {
            let mut folder = None;
            let mut json = false;
            for arg in &args[2..] {
                match arg.as_str() {
                    "--json" => json = true,
                    flag if flag.starts_with("--") => {
                        return Err(CommandError::Usage(format!("unknown flag: {flag}")));
                    }
                    path if folder.is_none() => folder = Some(PathBuf::from(path)),
                    extra => {
                        return Err(CommandError::Usage(format!("unexpected argument: {extra}")));
                    }
                }
            }
            let folder =
                folder.ok_or_else(|| CommandError::Usage("missing folder path".to_string()))?;
            Ok(Command::Scan { folder, json })
        }
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn run_command(
    command: Result<Command, CommandError>,
    service: &ApplicationService,
    picker: &dyn FolderPicker,
    config: &AppConfig,
) -> Result<(), CommandError> {
    match command? {
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::Scan { folder, json } => {
            let catalog = match service.load_catalog(LoadCatalogCommand { folder }) {
                Ok(catalog) => catalog,
                Err(ApplicationError::EmptyCatalog(folder)) => {
                    println!("no photos to sort in {}", folder.display());
                    return Ok(());
                }
                Err(error) => return Err(CommandError::Runtime(format!("scan failed: {error}"))),
            };
            if json {
                let rendered = present_catalog_json(&catalog)
                    .map_err(|error| CommandError::Runtime(format!("scan failed: {error}")))?;
                println!("{rendered}");
            } else {
                for line in present_catalog(&catalog) {
                    println!("{line}");
                }
            }
            Ok(())
        }
        Command::Ui { folder } => {
            let start = match folder {
                Some(folder) => match service.start_session(LoadCatalogCommand { folder }) {
                    Err(ApplicationError::NotFound(msg)) => {
                        warn!(%msg, "folder from command line unusable, asking for another");
                        service.choose_folder(picker, ChooseFolderCommand)
                    }
                    other => other,
                },
                None => service.choose_folder(picker, ChooseFolderCommand),
            };
            let mut engine = match start {
                Ok(SessionStart::Ready(engine)) => engine,
                Ok(SessionStart::Empty(folder)) => {
                    println!("no photos to sort in {}", folder.display());
                    return Ok(());
                }
                Err(ApplicationError::Cancelled) => {
                    info!("no folder chosen, exiting");
                    return Ok(());
                }
                Err(error) => {
                    return Err(CommandError::Runtime(format!("failed to open folder: {error}")))
                }
            };

            let exit = ui::launch_window(service, &mut engine, config).map_err(CommandError::Runtime)?;
            info!(?exit, state = ?engine.state(), "window closed");
            Ok(())
        }
    }
}

fn print_usage() {
    println!("usage:");
    println!("  photo-sorter [ui] [folder]");
    println!("  photo-sorter scan <folder> [--json]");
    println!("  photo-sorter help");
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::fs;

    use photo_sorter_application::{FolderChoice, PromptResponse};
    use tempfile::TempDir;

    use super::*;

    /// Answers every dialog with an empty choice and gives up on the first
    /// notice.
    #[derive(Default)]
    struct DismissingPicker {
        picks: Cell<usize>,
        notices: RefCell<Vec<String>>,
    }

    impl FolderPicker for DismissingPicker {
        fn pick_folder(&self) -> FolderChoice {
            self.picks.set(self.picks.get() + 1);
            FolderChoice::Empty
        }

        fn notify(&self, message: &str) -> PromptResponse {
            self.notices.borrow_mut().push(message.to_string());
            PromptResponse::GiveUp
        }
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn no_arguments_opens_picker() {
        let command = parse_command(&args(&["photo-sorter"])).expect("should parse");
        assert_eq!(command, Command::Ui { folder: None });
    }

    #[test]
    fn ui_accepts_folder() {
        let command = parse_command(&args(&["photo-sorter", "ui", "photos"])).expect("should parse");
        assert_eq!(
            command,
            Command::Ui {
                folder: Some(PathBuf::from("photos"))
            }
        );
    }

    #[test]
    fn scan_parses_json_flag_in_any_position() {
        let command =
            parse_command(&args(&["photo-sorter", "scan", "--json", "photos"])).expect("parse");
        assert_eq!(
            command,
            Command::Scan {
                folder: PathBuf::from("photos"),
                json: true
            }
        );
    }

    #[test]
    fn scan_requires_folder() {
        let command = parse_command(&args(&["photo-sorter", "scan"]));
        assert!(matches!(command, Err(CommandError::Usage(_))));
    }

    #[test]
    fn unknown_command_is_usage_error() {
        let command = parse_command(&args(&["photo-sorter", "sort-all"]));
        assert!(matches!(command, Err(CommandError::Usage(_))));
    }

    #[test]
    fn ui_on_empty_folder_exits_cleanly() {
        let dir = TempDir::new().expect("tempdir");
        fs::create_dir(dir.path().join("X")).expect("mkdir");
        fs::write(dir.path().join("notes.txt"), b"x").expect("write");

        let result = run_command(
            Ok(Command::Ui {
                folder: Some(dir.path().to_path_buf()),
            }),
            &build_application_service(),
            &DismissingPicker::default(),
            &AppConfig::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn ui_on_missing_folder_asks_for_another() {
        let dir = TempDir::new().expect("tempdir");
        let picker = DismissingPicker::default();

        let result = run_command(
            Ok(Command::Ui {
                folder: Some(dir.path().join("missing")),
            }),
            &build_application_service(),
            &picker,
            &AppConfig::default(),
        );
        assert!(result.is_ok());
        assert_eq!(picker.picks.get(), 1);
        assert_eq!(*picker.notices.borrow(), vec!["Path needed".to_string()]);
    }

    #[test]
    fn scan_missing_folder_is_runtime_error() {
        let dir = TempDir::new().expect("tempdir");
        let result = run_command(
            Ok(Command::Scan {
                folder: dir.path().join("missing"),
                json: false,
            }),
            &build_application_service(),
            &DismissingPicker::default(),
            &AppConfig::default(),
        );
        assert!(matches!(result, Err(CommandError::Runtime(_))));
    }
}
